use crate::geometry::Vector3;

/// Render-ready triangle geometry.
///
/// Every face corner gets its own vertex/normal pair and the draw indices
/// are an identity mapping (`indices[i] == i`). Vertex sharing from the
/// source file is intentionally discarded so that `vertices`, `normals`
/// and `indices` always have the same length, a multiple of 3.
#[derive(Debug, Clone, PartialEq)]
pub struct TriMesh {
    pub vertices: Vec<Vector3>,
    pub normals: Vec<Vector3>,
    pub indices: Vec<u32>,
}

impl TriMesh {
    /// Returns the number of triangles that comprises this mesh.
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Returns the number of (unshared) vertices in this mesh.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Vertex positions as a flat sequence of `x,y,z` floats, suitable for
    /// uploading to a GPU vertex buffer.
    pub fn positions_raw(&self) -> &[f32] {
        as_f32s(&self.vertices)
    }

    /// Vertex normals as a flat sequence of `x,y,z` floats.
    pub fn normals_raw(&self) -> &[f32] {
        as_f32s(&self.normals)
    }
}

fn as_f32s(v: &[Vector3]) -> &[f32] {
    // Safety: Vector3 is three consecutive f32s with f32 alignment (see the
    // asserts in geometry.rs), so a slice of Vector3 reinterprets as a slice
    // of f32 with 3x the length.
    unsafe { std::slice::from_raw_parts(v.as_ptr().cast::<f32>(), v.len() * 3) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_views_flatten_components() {
        let mesh = TriMesh {
            vertices: vec![
                Vector3::new(0.0, 0.0, 0.0),
                Vector3::new(1.0, 0.0, 0.0),
                Vector3::new(0.0, 1.0, 0.0),
            ],
            normals: vec![Vector3::new(0.0, 1.0, 0.0); 3],
            indices: vec![0, 1, 2],
        };
        assert_eq!(
            mesh.positions_raw(),
            &[0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0]
        );
        assert_eq!(mesh.normals_raw().len(), 9);
        assert_eq!(mesh.triangle_count(), 1);
        assert_eq!(mesh.vertex_count(), 3);
    }
}
