//! Crate-wide error type.

use thiserror::Error;

/// Errors produced while building preview content.
///
/// Camera framing never reports through this type: an unframeable scene is a
/// normal outcome and is reported as `AutoFrameResult::NotFramed`
/// (see [`crate::camera::framing`]).
#[derive(Debug, Error)]
pub enum PreviewError {
    /// A color name was requested that the palette does not know.
    #[error("unknown color name: {0}")]
    UnknownColor(String),

    /// A shape was requested with a non-positive side length.
    #[error("invalid side length: {0} (must be > 0)")]
    InvalidSideLength(f32),

    /// An OBJ file could not be loaded or parsed.
    #[error("failed to load OBJ model")]
    ObjLoad(#[from] tobj::LoadError),

    /// An OBJ file parsed but contained no usable geometry.
    #[error("OBJ model contains no geometry: {0}")]
    EmptyGeometry(String),

    /// A node id did not resolve to a live node in the scene graph.
    #[error("node id {0} is not in the scene graph")]
    UnknownNode(u32),
}
