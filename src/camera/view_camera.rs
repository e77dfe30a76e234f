//! Preview camera pose and projection.

use cgmath::{perspective, Matrix4, One, Quaternion, Rad, Vector3};

/// Canonical camera position the preview resets to after a successful
/// framing pass.
pub const CANONICAL_POSITION: Vector3<f32> = Vector3::new(0.0, 0.0, 15.0);

/// The preview camera.
///
/// Pose is position plus one orientation quaternion (identity == "zero
/// rotation"); with identity orientation the camera looks down -Z, so the
/// Z component of the position acts as the viewing distance to a shape at
/// the origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewCamera {
    /// Camera position in world space
    pub position: Vector3<f32>,
    /// Camera orientation; identity looks down -Z
    pub orientation: Quaternion<f32>,
    /// Vertical field of view
    pub fovy: Rad<f32>,
    /// Viewport aspect ratio (width / height)
    pub aspect: f32,
    /// Near clip distance
    pub znear: f32,
    /// Far clip distance
    pub zfar: f32,
}

impl ViewCamera {
    /// Create a camera at the canonical pose for the given aspect ratio
    pub fn new(aspect: f32) -> Self {
        Self {
            position: CANONICAL_POSITION,
            orientation: Quaternion::one(),
            fovy: Rad(std::f32::consts::PI / 4.0),
            aspect,
            znear: 0.1,
            zfar: 1000.0,
        }
    }

    /// Restore the canonical pose: position `(0, 0, 15)`, identity
    /// orientation. Projection parameters are untouched.
    pub fn reset_to_canonical(&mut self) {
        self.position = CANONICAL_POSITION;
        self.orientation = Quaternion::one();
    }

    /// Set only the depth (Z) component of the position, leaving X/Y and
    /// orientation unchanged.
    pub fn set_depth(&mut self, depth: f32) {
        self.position.z = depth;
    }

    /// Current depth (Z) component of the position
    pub fn depth(&self) -> f32 {
        self.position.z
    }

    /// View matrix: the inverse of the camera's world pose
    pub fn view_matrix(&self) -> Matrix4<f32> {
        Matrix4::from(self.orientation.conjugate()) * Matrix4::from_translation(-self.position)
    }

    /// Perspective projection matrix
    pub fn projection_matrix(&self) -> Matrix4<f32> {
        perspective(self.fovy, self.aspect, self.znear, self.zfar)
    }

    /// Combined view-projection matrix
    pub fn view_projection_matrix(&self) -> Matrix4<f32> {
        self.projection_matrix() * self.view_matrix()
    }

    /// Update the aspect ratio from a viewport size in pixels
    pub fn resize_projection(&mut self, width: u32, height: u32) {
        self.aspect = width as f32 / height as f32;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cgmath::Vector4;

    #[test]
    fn test_canonical_pose_looks_down_negative_z() {
        let camera = ViewCamera::new(1.0);
        let view = camera.view_matrix();

        // A point at the origin sits 15 units in front of the camera
        let p = view * Vector4::new(0.0, 0.0, 0.0, 1.0);
        assert!((p.z - -15.0).abs() < 1e-5);
    }

    #[test]
    fn test_set_depth_changes_only_z() {
        let mut camera = ViewCamera::new(1.0);
        camera.position.x = 2.0;
        camera.set_depth(7.5);

        assert_eq!(camera.position.x, 2.0);
        assert_eq!(camera.position.y, 0.0);
        assert_eq!(camera.depth(), 7.5);
    }

    #[test]
    fn test_reset_restores_canonical_pose() {
        let mut camera = ViewCamera::new(1.6);
        camera.position = Vector3::new(3.0, -2.0, 40.0);
        camera.orientation = Quaternion::new(0.5, 0.5, 0.5, 0.5);

        camera.reset_to_canonical();

        assert_eq!(camera.position, CANONICAL_POSITION);
        assert_eq!(camera.orientation, Quaternion::one());
        assert_eq!(camera.aspect, 1.6);
    }
}
