//! # Vertex Data Structures
//!
//! GPU-compatible vertex formats handed to the external renderer.

/// A 3D vertex with position and normal data.
///
/// The `#[repr(C)]` layout and `bytemuck` traits make the struct safe to
/// cast to bytes for vertex-buffer upload by whichever renderer hosts the
/// preview.
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex3D {
    /// 3D position coordinates [x, y, z]
    pub position: [f32; 3],
    /// 3D normal vector [nx, ny, nz] for lighting calculations
    pub normal: [f32; 3],
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertex_is_byte_castable() {
        let vertex = Vertex3D {
            position: [0.0, 1.0, 0.0],
            normal: [0.0, 1.0, 0.0],
        };
        let bytes: &[u8] = bytemuck::bytes_of(&vertex);
        assert_eq!(bytes.len(), std::mem::size_of::<Vertex3D>());
        assert_eq!(std::mem::size_of::<Vertex3D>(), 24);
    }
}
