//! Shape generation: kind + color + side length -> detached scene node.

use log::debug;

use super::ShapeKind;
use crate::error::PreviewError;
use crate::geometry::{
    generate_cone, generate_cube, generate_cylinder, generate_rounded_cube, generate_sphere,
    generate_torus, GeometryData,
};
use crate::scene::SceneNode;

// Tessellation used for preview meshes; dense enough for swatches,
// cheap enough to regenerate on every selection.
const SPHERE_SEGMENTS: (u32, u32) = (32, 16);
const ROUND_SEGMENTS: u32 = 32;
const BEVEL_RADIUS: f32 = 0.1;
const BEVEL_SEGMENTS: u32 = 8;
const TORUS_SEGMENTS: (u32, u32) = (32, 16);

/// Build a single preview shape as a detached scene node.
///
/// The mesh is generated at a nominal extent of one unit and scaled by
/// `side`; the node is named after the shape and tinted with `color`. The
/// caller attaches the node, typically via
/// [`Viewport::set_current_shape`](crate::viewport::Viewport::set_current_shape).
pub fn single_shape(
    kind: ShapeKind,
    color: [f32; 3],
    side: f32,
) -> Result<SceneNode, PreviewError> {
    if !(side > 0.0) {
        return Err(PreviewError::InvalidSideLength(side));
    }

    let geometry = match kind {
        ShapeKind::Block => generate_cube().scaled(side),
        ShapeKind::RoundedBlock => generate_rounded_cube(BEVEL_RADIUS, BEVEL_SEGMENTS).scaled(side),
        ShapeKind::Sphere => {
            generate_sphere(SPHERE_SEGMENTS.0, SPHERE_SEGMENTS.1).scaled(side * 0.5)
        }
        ShapeKind::Cylinder => generate_cylinder(0.5, 1.0, ROUND_SEGMENTS).scaled(side),
        ShapeKind::Cone => generate_cone(0.5, 1.0, ROUND_SEGMENTS).scaled(side),
        ShapeKind::Torus => {
            generate_torus(0.35, 0.15, TORUS_SEGMENTS.0, TORUS_SEGMENTS.1).scaled(side)
        }
    };

    debug!(
        "generated {} at side {}: {} vertices",
        kind,
        side,
        geometry.vertex_count()
    );

    Ok(SceneNode::new()
        .with_name(kind.display_name())
        .with_geometry(geometry)
        .with_color(color))
}

/// Build a preview node from caller-supplied geometry, e.g. an imported
/// OBJ model. The geometry keeps its own proportions; `side` scales it
/// uniformly.
pub fn single_shape_from_geometry(
    name: impl Into<String>,
    geometry: GeometryData,
    color: [f32; 3],
    side: f32,
) -> Result<SceneNode, PreviewError> {
    if !(side > 0.0) {
        return Err(PreviewError::InvalidSideLength(side));
    }
    let name = name.into();
    if geometry.vertex_count() == 0 {
        return Err(PreviewError::EmptyGeometry(name));
    }

    Ok(SceneNode::new()
        .with_name(name)
        .with_geometry(geometry.scaled(side))
        .with_color(color))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_kind_generates_geometry() {
        for &kind in ShapeKind::all() {
            let node = single_shape(kind, [1.0, 0.0, 0.0], 1.0).unwrap();
            let geometry = node.geometry.as_ref().unwrap();
            assert!(geometry.vertex_count() > 0, "{} has no vertices", kind);
            assert_eq!(node.name.as_deref(), Some(kind.display_name()));
        }
    }

    #[test]
    fn test_side_length_bounds_the_mesh() {
        let node = single_shape(ShapeKind::Block, [1.0, 1.0, 1.0], 2.0).unwrap();
        let aabb = node.geometry.as_ref().unwrap().local_aabb();
        assert!((aabb.max.x - 1.0).abs() < 1e-5);

        let node = single_shape(ShapeKind::Sphere, [1.0, 1.0, 1.0], 2.0).unwrap();
        let aabb = node.geometry.as_ref().unwrap().local_aabb();
        assert!((aabb.max.x - 1.0).abs() < 1e-3);
    }

    #[test]
    fn test_non_positive_side_is_rejected() {
        assert!(matches!(
            single_shape(ShapeKind::Block, [1.0, 1.0, 1.0], 0.0),
            Err(PreviewError::InvalidSideLength(_))
        ));
        assert!(matches!(
            single_shape(ShapeKind::Block, [1.0, 1.0, 1.0], -2.0),
            Err(PreviewError::InvalidSideLength(_))
        ));
    }

    #[test]
    fn test_custom_geometry_shape() {
        let node = single_shape_from_geometry(
            "Imported",
            crate::geometry::generate_cube(),
            [0.5, 0.5, 0.5],
            1.0,
        )
        .unwrap();
        assert_eq!(node.name.as_deref(), Some("Imported"));

        let empty = single_shape_from_geometry("Empty", GeometryData::new(), [0.0; 3], 1.0);
        assert!(matches!(empty, Err(PreviewError::EmptyGeometry(_))));
    }
}
