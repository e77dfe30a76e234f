//! # Procedural Geometry
//!
//! This module provides the mesh data the preview works with: a CPU-side
//! geometry container, procedural primitive generators for the shape
//! library, axis-aligned bounding boxes for containment tests, and an OBJ
//! importer for custom shapes.

pub mod aabb;
pub mod obj;
pub mod primitives;
pub mod vertex;

pub use aabb::Aabb;
pub use primitives::*;
pub use vertex::Vertex3D;

use cgmath::{InnerSpace, Vector3};

/// Mesh data for a single shape, ready to hand to a renderer.
#[derive(Debug, Clone)]
pub struct GeometryData {
    /// Vertex positions (x, y, z)
    pub positions: Vec<[f32; 3]>,
    /// Texture coordinates (u, v)
    pub tex_coords: Vec<[f32; 2]>,
    /// Normal vectors (x, y, z)
    pub normals: Vec<[f32; 3]>,
    /// Triangle indices (counter-clockwise winding)
    pub indices: Vec<u32>,
}

impl GeometryData {
    /// Create a new empty geometry container
    pub fn new() -> Self {
        Self {
            positions: Vec::new(),
            tex_coords: Vec::new(),
            normals: Vec::new(),
            indices: Vec::new(),
        }
    }

    /// Get the number of vertices in this geometry
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Get the number of triangles in this geometry
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Scale all positions by a uniform factor, baking a side length into
    /// the mesh. Normals are unaffected by uniform scaling.
    pub fn scaled(mut self, factor: f32) -> Self {
        for p in &mut self.positions {
            p[0] *= factor;
            p[1] *= factor;
            p[2] *= factor;
        }
        self
    }

    /// Axis-aligned bounding box of the positions, in local space.
    pub fn local_aabb(&self) -> Aabb {
        Aabb::from_vertices(&self.positions)
    }

    /// Convert to the interleaved vertex format a renderer uploads.
    pub fn to_vertex_format(&self) -> (Vec<Vertex3D>, Vec<u32>) {
        let vertices: Vec<Vertex3D> = (0..self.positions.len())
            .map(|i| Vertex3D {
                position: self.positions[i],
                normal: self.normals.get(i).copied().unwrap_or([0.0, 1.0, 0.0]),
            })
            .collect();

        (vertices, self.indices.clone())
    }

    /// Compute smooth per-vertex normals by averaging face normals.
    ///
    /// Used for imported models that ship without normals.
    pub fn calculate_normals(&mut self) {
        let mut normals = vec![Vector3::new(0.0f32, 0.0, 0.0); self.positions.len()];

        for triangle in self.indices.chunks(3) {
            let [i0, i1, i2] = [
                triangle[0] as usize,
                triangle[1] as usize,
                triangle[2] as usize,
            ];
            let v0 = Vector3::from(self.positions[i0]);
            let v1 = Vector3::from(self.positions[i1]);
            let v2 = Vector3::from(self.positions[i2]);

            let face_normal = (v1 - v0).cross(v2 - v0);
            for &i in &[i0, i1, i2] {
                normals[i] += face_normal;
            }
        }

        self.normals = normals
            .into_iter()
            .map(|n| {
                if n.magnitude2() > 0.0 {
                    let n = n.normalize();
                    [n.x, n.y, n.z]
                } else {
                    [0.0, 1.0, 0.0]
                }
            })
            .collect();
    }
}

impl Default for GeometryData {
    fn default() -> Self {
        Self::new()
    }
}
