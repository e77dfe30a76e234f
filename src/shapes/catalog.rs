//! Catalog model backing the shape-browser lists.

use super::ShapeKind;

/// A named group of shapes shown as one section of the browser outline.
#[derive(Debug, Clone)]
pub struct ShapeCategory {
    /// Section title
    pub name: String,
    /// Shapes listed under this section
    pub shapes: Vec<ShapeKind>,
}

/// A title/value row for the parameter list under the 3D preview.
#[derive(Debug, Clone, PartialEq)]
pub struct ValueItem {
    pub title: String,
    pub value: String,
}

impl ValueItem {
    pub fn new(title: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            value: value.into(),
        }
    }
}

/// The category currently expanded in the browser, plus the shape selected
/// within it.
#[derive(Debug, Clone, PartialEq)]
pub struct CurrentCategory {
    /// Index into the catalog's category list
    pub category_index: usize,
    /// Selected shape within the category, if any
    pub selected: Option<ShapeKind>,
}

/// The full shape catalog shown by the browser.
#[derive(Debug, Clone)]
pub struct ShapeCatalog {
    categories: Vec<ShapeCategory>,
}

impl ShapeCatalog {
    /// The standard catalog of built-in shapes
    pub fn standard() -> Self {
        Self {
            categories: vec![
                ShapeCategory {
                    name: "Blocks".to_string(),
                    shapes: vec![ShapeKind::Block, ShapeKind::RoundedBlock],
                },
                ShapeCategory {
                    name: "Curved".to_string(),
                    shapes: vec![ShapeKind::Sphere, ShapeKind::Cylinder, ShapeKind::Cone],
                },
                ShapeCategory {
                    name: "Rings".to_string(),
                    shapes: vec![ShapeKind::Torus],
                },
            ],
        }
    }

    /// All categories, in display order
    pub fn categories(&self) -> &[ShapeCategory] {
        &self.categories
    }

    /// Find the category containing a shape
    pub fn category_of(&self, kind: ShapeKind) -> Option<&ShapeCategory> {
        self.categories.iter().find(|c| c.shapes.contains(&kind))
    }

    /// Build the selection cursor for a shape, if the catalog contains it
    pub fn current_for(&self, kind: ShapeKind) -> Option<CurrentCategory> {
        self.categories
            .iter()
            .position(|c| c.shapes.contains(&kind))
            .map(|category_index| CurrentCategory {
                category_index,
                selected: Some(kind),
            })
    }
}

impl Default for ShapeCatalog {
    fn default() -> Self {
        Self::standard()
    }
}
