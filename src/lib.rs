// src/lib.rs
//! BlockCam Preview Core
//!
//! Scene graph, frustum-based camera auto-framing, and procedural shape
//! generation for a block-art shape browser. The host application supplies
//! windowing and rendering; this crate supplies the model it drives.

pub mod browser;
pub mod camera;
pub mod error;
pub mod geometry;
pub mod palette;
pub mod scene;
pub mod shapes;
pub mod viewport;

// Re-export main types for convenience
pub use browser::ShapeBrowser;
pub use camera::{auto_frame, set_distance, AutoFrameResult};
pub use error::PreviewError;
pub use palette::Palette;
pub use scene::{NodeId, SceneGraph, SceneNode};
pub use shapes::ShapeKind;
pub use viewport::Viewport;

/// Creates a shape browser with the standard catalog, built-in palette,
/// and a square viewport
pub fn default() -> ShapeBrowser {
    ShapeBrowser::new(1.0)
}
