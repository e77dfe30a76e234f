//! # Shape Library
//!
//! The shape kinds the preview can show, the generator that turns a kind
//! plus color plus side length into a scene node, and the catalog model
//! that feeds category/shape list UIs.

pub mod catalog;
pub mod generator;

pub use catalog::{CurrentCategory, ShapeCatalog, ShapeCategory, ValueItem};
pub use generator::{single_shape, single_shape_from_geometry};

/// The built-in shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    /// Axis-aligned cube, the classic block
    Block,
    /// Block with beveled edges and corners
    RoundedBlock,
    Sphere,
    Cylinder,
    Cone,
    Torus,
}

impl ShapeKind {
    /// All built-in kinds, in catalog order
    pub fn all() -> &'static [ShapeKind] {
        &[
            ShapeKind::Block,
            ShapeKind::RoundedBlock,
            ShapeKind::Sphere,
            ShapeKind::Cylinder,
            ShapeKind::Cone,
            ShapeKind::Torus,
        ]
    }

    /// Display name used in list UIs and as the node name
    pub fn display_name(&self) -> &'static str {
        match self {
            ShapeKind::Block => "Block",
            ShapeKind::RoundedBlock => "Rounded Block",
            ShapeKind::Sphere => "Sphere",
            ShapeKind::Cylinder => "Cylinder",
            ShapeKind::Cone => "Cone",
            ShapeKind::Torus => "Torus",
        }
    }
}

impl std::fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_kinds_have_distinct_names() {
        let names: std::collections::HashSet<_> =
            ShapeKind::all().iter().map(|k| k.display_name()).collect();
        assert_eq!(names.len(), ShapeKind::all().len());
    }
}
