//! OBJ import for custom preview shapes.

use log::debug;

use super::GeometryData;
use crate::error::PreviewError;

/// Load the geometry of an OBJ file into a single [`GeometryData`].
///
/// All models in the file are merged into one mesh; normals are taken from
/// the file when present and recomputed otherwise. Materials are ignored,
/// the preview tints shapes with palette colors instead.
pub fn load_obj_geometry(path: &str) -> Result<GeometryData, PreviewError> {
    let (models, _materials) = tobj::load_obj(
        path,
        &tobj::LoadOptions {
            triangulate: true,
            single_index: true,
            ..Default::default()
        },
    )?;

    let mut data = GeometryData::new();
    let mut needs_normals = false;

    for model in &models {
        let mesh = &model.mesh;
        let base = data.positions.len() as u32;

        for chunk in mesh.positions.chunks_exact(3) {
            data.positions.push([chunk[0], chunk[1], chunk[2]]);
        }

        if mesh.normals.len() == mesh.positions.len() {
            for chunk in mesh.normals.chunks_exact(3) {
                data.normals.push([chunk[0], chunk[1], chunk[2]]);
            }
        } else {
            needs_normals = true;
        }

        if mesh.texcoords.len() / 2 == mesh.positions.len() / 3 {
            for chunk in mesh.texcoords.chunks_exact(2) {
                data.tex_coords.push([chunk[0], chunk[1]]);
            }
        }

        data.indices.extend(mesh.indices.iter().map(|i| i + base));
    }

    if data.positions.is_empty() {
        return Err(PreviewError::EmptyGeometry(path.to_string()));
    }

    if needs_normals || data.normals.len() != data.positions.len() {
        data.calculate_normals();
    }

    debug!(
        "loaded OBJ {}: {} vertices, {} triangles",
        path,
        data.vertex_count(),
        data.triangle_count()
    );

    Ok(data)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_temp_obj(name: &str, contents: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(name);
        std::fs::write(&path, contents).expect("failed to write temp OBJ");
        path
    }

    #[test]
    fn test_load_triangle_obj() {
        let path = write_temp_obj(
            "blockcam_triangle.obj",
            "v 0.0 0.0 0.0\nv 1.0 0.0 0.0\nv 0.0 1.0 0.0\nf 1 2 3\n",
        );

        let data = load_obj_geometry(path.to_str().unwrap()).unwrap();
        assert_eq!(data.vertex_count(), 3);
        assert_eq!(data.triangle_count(), 1);
        // Normals were absent in the file and must be synthesized
        assert_eq!(data.normals.len(), 3);
    }

    #[test]
    fn test_load_missing_file_fails() {
        let result = load_obj_geometry("/nonexistent/blockcam_missing.obj");
        assert!(matches!(result, Err(PreviewError::ObjLoad(_))));
    }
}
