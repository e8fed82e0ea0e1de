//! Result types for mesh loading.

use xtoon_io::MeshFormat;
use xtoon_normals::AbstractionMode;
use xtoon_types::{Aabb, Mesh};

use crate::pack::unit_scale;

/// Result of a mesh load, with the statistics gathered along the way.
#[derive(Debug, Clone)]
pub struct LoadResult {
    /// The packed mesh.
    pub mesh: Mesh,

    /// Format the geometry was read from, `None` when no file was read.
    pub format: Option<MeshFormat>,

    /// Number of positions produced by the reader.
    pub source_vertices: usize,

    /// Number of triangles produced by the reader.
    pub source_triangles: usize,

    /// Triangles with zero area.
    pub degenerate_triangles: usize,

    /// Vertices whose smooth normal is the zero vector.
    pub zero_normal_vertices: usize,

    /// Bounding box in the canonical frame, before size normalization.
    pub bounds: Aabb,

    /// Abstraction mode used.
    pub mode: AbstractionMode,
}

impl LoadResult {
    /// A result carrying no geometry.
    #[must_use]
    pub fn empty(format: Option<MeshFormat>, mode: AbstractionMode) -> Self {
        Self {
            mesh: Mesh::default(),
            format,
            source_vertices: 0,
            source_triangles: 0,
            degenerate_triangles: 0,
            zero_normal_vertices: 0,
            bounds: Aabb::empty(),
            mode,
        }
    }

    /// Check if there is nothing to draw.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.mesh.is_empty()
    }

    /// Factor positions were multiplied by during packing.
    #[must_use]
    pub fn scale_factor(&self) -> f64 {
        unit_scale(self.bounds.diagonal()).unwrap_or(1.0)
    }
}

impl std::fmt::Display for LoadResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let format = self
            .format
            .map_or_else(|| "unknown".to_string(), |fmt| fmt.to_string());
        write!(
            f,
            "{format} mesh ({}): {} vertices, {} triangles, diagonal {:.4}",
            self.mode,
            self.mesh.vertex_count(),
            self.mesh.triangle_count(),
            self.bounds.diagonal()
        )?;
        if self.degenerate_triangles > 0 || self.zero_normal_vertices > 0 {
            write!(
                f,
                " ({} degenerate triangles, {} zero normals)",
                self.degenerate_triangles, self.zero_normal_vertices
            )?;
        }
        Ok(())
    }
}
