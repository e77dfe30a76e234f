//! # Camera
//!
//! The preview camera: pose and projection ([`ViewCamera`]), frustum
//! extraction and containment ([`frustum`]), and the auto-framing search
//! that fits the current shape into view ([`framing`]).

pub mod framing;
pub mod frustum;
pub mod view_camera;

pub use framing::{auto_frame, set_distance, AutoFrameResult};
pub use frustum::Frustum;
pub use view_camera::ViewCamera;
