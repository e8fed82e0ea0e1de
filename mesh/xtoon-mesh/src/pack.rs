//! Packing pipeline output into a GPU-ready mesh.

use tracing::{debug, warn};
use xtoon_types::{Mesh, Point3, Vector3, VertexRecord};

/// Factor that brings a model with this diagonal to a unit diagonal.
///
/// Returns `None` when the diagonal is zero or not finite.
#[inline]
#[must_use]
pub fn unit_scale(diagonal: f64) -> Option<f64> {
    (diagonal.is_finite() && diagonal > f64::EPSILON).then(|| diagonal.recip())
}

/// Interleave per-vertex attributes into a [`Mesh`].
///
/// Every position is divided by `diagonal` so the model fits in a box whose
/// diagonal is 1. A zero or non-finite diagonal leaves positions unscaled,
/// and coordinates beyond the `f32` range saturate rather than overflow.
/// Normals are copied as they are. Triangles are flattened in order, so
/// `indices[3 * t + c]` is corner `c` of triangle `t`.
///
/// All three attribute slices must have the same length.
///
/// # Example
///
/// ```
/// use xtoon_mesh::pack;
/// use xtoon_types::{Point3, Vector3};
///
/// let positions = [Point3::new(2.0, 0.0, 0.0), Point3::new(0.0, 2.0, 0.0), Point3::origin()];
/// let normals = [Vector3::z(); 3];
///
/// let mesh = pack(&positions, &normals, &normals, &[[0, 1, 2]], 4.0);
/// assert_eq!(mesh.vertices[0].position, [0.5, 0.0, 0.0]);
/// assert_eq!(mesh.indices, vec![0, 1, 2]);
/// ```
#[must_use]
pub fn pack(
    positions: &[Point3<f64>],
    normals: &[Vector3<f64>],
    abstracted: &[Vector3<f64>],
    triangles: &[[u32; 3]],
    diagonal: f64,
) -> Mesh {
    debug_assert_eq!(positions.len(), normals.len());
    debug_assert_eq!(positions.len(), abstracted.len());

    let scale = unit_scale(diagonal).unwrap_or_else(|| {
        if !positions.is_empty() {
            warn!(diagonal, "Skipping size normalization");
        }
        1.0
    });

    let vertices: Vec<VertexRecord> = positions
        .iter()
        .zip(normals)
        .zip(abstracted)
        .map(|((p, n), a)| VertexRecord::new(&(p * scale), n, a))
        .collect();

    let indices: Vec<u32> = triangles.iter().flatten().copied().collect();

    debug!(
        vertices = vertices.len(),
        indices = indices.len(),
        scale,
        "Packed vertex buffer"
    );

    Mesh::from_parts(vertices, indices)
}
