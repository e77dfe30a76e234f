//! View-frustum extraction and containment tests.

use cgmath::{InnerSpace, Matrix4, Vector3, Vector4};

use crate::geometry::Aabb;

/// A plane in Hessian normal form; points with a non-negative signed
/// distance are on the inside.
#[derive(Debug, Clone, Copy)]
pub struct Plane {
    /// Plane normal, pointing into the frustum
    pub normal: Vector3<f32>,
    /// Plane offset
    pub d: f32,
}

impl Plane {
    fn from_coefficients(v: Vector4<f32>) -> Self {
        let normal = Vector3::new(v.x, v.y, v.z);
        let len = normal.magnitude();
        if len > 0.0 {
            Self {
                normal: normal / len,
                d: v.w / len,
            }
        } else {
            Self { normal, d: v.w }
        }
    }

    /// Signed distance from the plane; positive is inside
    pub fn signed_distance(&self, point: Vector3<f32>) -> f32 {
        self.normal.dot(point) + self.d
    }
}

/// A camera view frustum as six inward-facing planes.
#[derive(Debug, Clone, Copy)]
pub struct Frustum {
    /// Left, right, bottom, top, near, far
    pub planes: [Plane; 6],
}

impl Frustum {
    /// Extract the six clip planes from a view-projection matrix
    /// (Gribb/Hartmann). Works for any GL-convention projection.
    pub fn from_matrix(m: &Matrix4<f32>) -> Self {
        // cgmath matrices are column-major: m[col][row]
        let row = |i: usize| Vector4::new(m[0][i], m[1][i], m[2][i], m[3][i]);
        let (r0, r1, r2, r3) = (row(0), row(1), row(2), row(3));

        Self {
            planes: [
                Plane::from_coefficients(r3 + r0), // left
                Plane::from_coefficients(r3 - r0), // right
                Plane::from_coefficients(r3 + r1), // bottom
                Plane::from_coefficients(r3 - r1), // top
                Plane::from_coefficients(r3 + r2), // near
                Plane::from_coefficients(r3 - r2), // far
            ],
        }
    }

    /// Test whether a point lies inside all six planes.
    ///
    /// Comparisons against NaN are false, so a degenerate matrix contains
    /// nothing.
    pub fn contains_point(&self, point: Vector3<f32>) -> bool {
        self.planes
            .iter()
            .all(|plane| plane.signed_distance(point) >= 0.0)
    }

    /// Test whether a bounding box lies fully inside the frustum.
    ///
    /// This is containment, not intersection: every corner must be inside
    /// every plane.
    pub fn contains_aabb(&self, aabb: &Aabb) -> bool {
        aabb.corners()
            .iter()
            .all(|&corner| self.contains_point(corner))
    }
}
