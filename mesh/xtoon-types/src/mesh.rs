//! The render-ready mesh returned by the pipeline.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::VertexRecord;

/// Interleaved vertices plus a flat triangle index list.
///
/// Indices follow the source triangulation one-to-one, three per triangle,
/// with the file's winding. Ownership passes to the caller, which uploads
/// both buffers and keeps no reference to pipeline scratch data.
///
/// # Example
///
/// ```
/// use xtoon_types::Mesh;
///
/// let mesh = Mesh::default();
/// assert!(mesh.is_empty());
/// assert!(mesh.vertex_bytes().is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Mesh {
    /// One record per source position.
    pub vertices: Vec<VertexRecord>,

    /// Triangle list, three indices per triangle.
    pub indices: Vec<u32>,
}

impl Mesh {
    /// Create a mesh from its two buffers.
    #[inline]
    #[must_use]
    pub const fn from_parts(vertices: Vec<VertexRecord>, indices: Vec<u32>) -> Self {
        Self { vertices, indices }
    }

    /// True when there is nothing to upload.
    ///
    /// Callers check this before replacing a previously uploaded mesh.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty() || self.indices.is_empty()
    }

    /// Number of vertex records.
    #[inline]
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of triangles in the index list.
    #[inline]
    #[must_use]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// The vertex buffer as raw bytes, ready for upload.
    #[must_use]
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    /// The index buffer as raw bytes (`u32`, native endian), ready for upload.
    #[must_use]
    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.indices)
    }

    /// Iterate over triangles as index triples.
    pub fn triangles(&self) -> impl Iterator<Item = [u32; 3]> + '_ {
        self.indices.chunks_exact(3).map(|c| [c[0], c[1], c[2]])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn single_triangle() -> Mesh {
        let vertices = vec![
            VertexRecord {
                position: [0.0, 0.0, 0.0],
                ..VertexRecord::default()
            },
            VertexRecord {
                position: [1.0, 0.0, 0.0],
                ..VertexRecord::default()
            },
            VertexRecord {
                position: [0.0, 1.0, 0.0],
                ..VertexRecord::default()
            },
        ];
        Mesh::from_parts(vertices, vec![0, 1, 2])
    }

    #[test]
    fn mesh_counts() {
        let mesh = single_triangle();
        assert!(!mesh.is_empty());
        assert_eq!(mesh.vertex_count(), 3);
        assert_eq!(mesh.triangle_count(), 1);
        assert_eq!(mesh.triangles().collect::<Vec<_>>(), vec![[0, 1, 2]]);
    }

    #[test]
    fn mesh_byte_views() {
        let mesh = single_triangle();
        assert_eq!(mesh.vertex_bytes().len(), 3 * VertexRecord::STRIDE);
        assert_eq!(mesh.index_bytes().len(), 3 * 4);
    }

    #[test]
    fn vertices_without_indices_is_empty() {
        let mut mesh = single_triangle();
        mesh.indices.clear();
        assert!(mesh.is_empty());
    }
}
