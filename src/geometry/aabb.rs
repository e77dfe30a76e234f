//! Axis-aligned bounding boxes for containment testing.

use cgmath::{Matrix4, Vector3, Vector4, Zero};

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    /// Minimum corner of the bounding box
    pub min: Vector3<f32>,
    /// Maximum corner of the bounding box
    pub max: Vector3<f32>,
}

impl Aabb {
    /// Create a new AABB
    pub fn new(min: Vector3<f32>, max: Vector3<f32>) -> Self {
        Self { min, max }
    }

    /// Create an AABB from a set of vertices
    pub fn from_vertices(vertices: &[[f32; 3]]) -> Self {
        if vertices.is_empty() {
            return Self::new(Vector3::zero(), Vector3::zero());
        }

        let mut min = Vector3::new(vertices[0][0], vertices[0][1], vertices[0][2]);
        let mut max = min;

        for vertex in vertices.iter().skip(1) {
            let v = Vector3::new(vertex[0], vertex[1], vertex[2]);
            min.x = min.x.min(v.x);
            min.y = min.y.min(v.y);
            min.z = min.z.min(v.z);
            max.x = max.x.max(v.x);
            max.y = max.y.max(v.y);
            max.z = max.z.max(v.z);
        }

        Self::new(min, max)
    }

    /// The eight corners of the box
    pub fn corners(&self) -> [Vector3<f32>; 8] {
        [
            Vector3::new(self.min.x, self.min.y, self.min.z),
            Vector3::new(self.max.x, self.min.y, self.min.z),
            Vector3::new(self.min.x, self.max.y, self.min.z),
            Vector3::new(self.min.x, self.min.y, self.max.z),
            Vector3::new(self.max.x, self.max.y, self.min.z),
            Vector3::new(self.max.x, self.min.y, self.max.z),
            Vector3::new(self.min.x, self.max.y, self.max.z),
            Vector3::new(self.max.x, self.max.y, self.max.z),
        ]
    }

    /// Apply a transformation matrix to the AABB
    ///
    /// Transforms all 8 corners and re-bounds them, so the result stays
    /// axis-aligned in the target space.
    pub fn transform(&self, matrix: &Matrix4<f32>) -> Self {
        let mut transformed_corners = Vec::with_capacity(8);
        for corner in &self.corners() {
            let homogeneous = Vector4::new(corner.x, corner.y, corner.z, 1.0);
            let transformed = matrix * homogeneous;
            transformed_corners.push([
                transformed.x / transformed.w,
                transformed.y / transformed.w,
                transformed.z / transformed.w,
            ]);
        }

        Self::from_vertices(&transformed_corners)
    }

    /// Smallest AABB enclosing both boxes
    pub fn union(&self, other: &Aabb) -> Self {
        Self::new(
            Vector3::new(
                self.min.x.min(other.min.x),
                self.min.y.min(other.min.y),
                self.min.z.min(other.min.z),
            ),
            Vector3::new(
                self.max.x.max(other.max.x),
                self.max.y.max(other.max.y),
                self.max.z.max(other.max.z),
            ),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cgmath::Matrix4;

    #[test]
    fn test_aabb_from_vertices() {
        let vertices = vec![[0.0, 0.0, 0.0], [1.0, 1.0, 1.0], [-1.0, -1.0, -1.0]];
        let aabb = Aabb::from_vertices(&vertices);

        assert_eq!(aabb.min, Vector3::new(-1.0, -1.0, -1.0));
        assert_eq!(aabb.max, Vector3::new(1.0, 1.0, 1.0));
    }

    #[test]
    fn test_aabb_transform_translation() {
        let aabb = Aabb::new(Vector3::new(-0.5, -0.5, -0.5), Vector3::new(0.5, 0.5, 0.5));
        let moved = aabb.transform(&Matrix4::from_translation(Vector3::new(3.0, 0.0, 0.0)));

        assert!((moved.min.x - 2.5).abs() < 1e-6);
        assert!((moved.max.x - 3.5).abs() < 1e-6);
        assert!((moved.min.y - -0.5).abs() < 1e-6);
    }

    #[test]
    fn test_aabb_union() {
        let a = Aabb::new(Vector3::new(-1.0, -1.0, -1.0), Vector3::new(0.0, 0.0, 0.0));
        let b = Aabb::new(Vector3::new(0.0, 0.0, 0.0), Vector3::new(2.0, 1.0, 1.0));
        let u = a.union(&b);

        assert_eq!(u.min, Vector3::new(-1.0, -1.0, -1.0));
        assert_eq!(u.max, Vector3::new(2.0, 1.0, 1.0));
    }
}
