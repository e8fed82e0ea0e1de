//! Area-weighted smooth vertex normals.

use tracing::{debug, warn};
use xtoon_types::{NORMAL_EPSILON, Point3, Vector3};

/// Unnormalized face normal of triangle `(a, b, c)`.
///
/// The magnitude is twice the triangle area, so summing these weights each
/// face by its area.
#[inline]
#[must_use]
pub fn face_normal(a: &Point3<f64>, b: &Point3<f64>, c: &Point3<f64>) -> Vector3<f64> {
    (b - a).cross(&(c - a))
}

/// Face normal of a triangle, or `None` when the triangle has no direction.
///
/// A triangle counts as degenerate when the sine of its angle at `a` is at
/// most [`NORMAL_EPSILON`]. The test only compares lengths of the same
/// triangle, so it gives the same answer at every model scale.
#[inline]
#[must_use]
pub fn checked_face_normal(
    a: &Point3<f64>,
    b: &Point3<f64>,
    c: &Point3<f64>,
) -> Option<Vector3<f64>> {
    let n = face_normal(a, b, c);
    let len = n.norm();
    let reference = (b - a).norm() * (c - a).norm();
    (len.is_finite() && len > NORMAL_EPSILON * reference).then_some(n)
}

/// Compute smooth per-vertex normals.
///
/// Each non-degenerate triangle adds its unnormalized face normal to its
/// three vertices; the sums are then normalized. A vertex with no incident
/// triangle, whose incident triangles are all degenerate, or whose face
/// normals cancel out gets the zero vector. Cancellation is judged against
/// the total face weight at the vertex, so tiny models keep their normals.
///
/// `triangles` must only address indices in `positions`.
///
/// # Example
///
/// ```
/// use xtoon_normals::compute_vertex_normals;
/// use xtoon_types::{Point3, Vector3};
///
/// let positions = [
///     Point3::new(0.0, 0.0, 0.0),
///     Point3::new(1.0, 0.0, 0.0),
///     Point3::new(0.0, 1.0, 0.0),
/// ];
/// let normals = compute_vertex_normals(&positions, &[[0, 1, 2]]);
/// assert_eq!(normals[0], Vector3::z());
/// ```
#[must_use]
pub fn compute_vertex_normals(
    positions: &[Point3<f64>],
    triangles: &[[u32; 3]],
) -> Vec<Vector3<f64>> {
    let mut accumulated = vec![(Vector3::zeros(), 0.0_f64); positions.len()];

    for &[a, b, c] in triangles {
        let (a, b, c) = (a as usize, b as usize, c as usize);
        let Some(n) = checked_face_normal(&positions[a], &positions[b], &positions[c]) else {
            continue;
        };
        let weight = n.norm();
        for i in [a, b, c] {
            accumulated[i].0 += n;
            accumulated[i].1 += weight;
        }
    }

    let normals: Vec<Vector3<f64>> = accumulated
        .iter()
        .map(|(sum, weight)| {
            let len = sum.norm();
            if len.is_finite() && len > NORMAL_EPSILON * weight {
                sum / len
            } else {
                Vector3::zeros()
            }
        })
        .collect();

    let zero_count = normals.iter().filter(|n| **n == Vector3::zeros()).count();
    if zero_count > 0 {
        warn!(
            vertices = zero_count,
            "Vertices without a defined normal were given a zero normal"
        );
    }
    debug!(
        vertices = positions.len(),
        triangles = triangles.len(),
        "Computed smooth vertex normals"
    );

    normals
}

/// Count triangles without a defined face normal (collinear or coincident
/// corners), using the same test as [`checked_face_normal`].
#[must_use]
pub fn degenerate_triangle_count(positions: &[Point3<f64>], triangles: &[[u32; 3]]) -> usize {
    triangles
        .iter()
        .filter(|&&[a, b, c]| {
            checked_face_normal(
                &positions[a as usize],
                &positions[b as usize],
                &positions[c as usize],
            )
            .is_none()
        })
        .count()
}
