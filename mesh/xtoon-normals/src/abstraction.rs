//! Abstracted normal synthesis.

use tracing::debug;
use xtoon_types::{Aabb, Point3, Vector3, normalize_or_zero};

use crate::AbstractionMode;

/// Number of diffusion passes applied in [`AbstractionMode::Smooth`].
pub const SMOOTH_ITERATIONS: usize = 4;

/// Build the abstracted normal field for the chosen mode.
///
/// `positions` are expected to be centered on the origin (the output of the
/// spatial normalization), and `bounds` their bounding box. Only
/// [`AbstractionMode::Smooth`] reads `triangles` and `smooth_normals`.
///
/// The result has one entry per position. Entries without a defined
/// direction are the zero vector.
#[must_use]
pub fn synthesize(
    positions: &[Point3<f64>],
    triangles: &[[u32; 3]],
    smooth_normals: &[Vector3<f64>],
    mode: AbstractionMode,
    bounds: &Aabb,
) -> Vec<Vector3<f64>> {
    debug!(%mode, vertices = positions.len(), "Synthesizing abstracted normals");
    match mode {
        AbstractionMode::Smooth => diffuse_normals(smooth_normals, triangles, SMOOTH_ITERATIONS),
        AbstractionMode::Ellipse => ellipse_normals(positions, &bounds.dimension()),
        AbstractionMode::Cylinder => cylinder_normals(positions, bounds),
        AbstractionMode::Sphere => sphere_normals(positions),
    }
}

/// Diffuse a normal field over the triangle adjacency.
///
/// Each pass gives every vertex the normalized sum of the normals of the
/// other two corners of each triangle it belongs to. A vertex shared by `k`
/// triangles therefore sums `2k` neighbor normals, counting shared edges
/// twice. Passes write into a fresh buffer, so the update is simultaneous.
///
/// # Example
///
/// ```
/// use xtoon_normals::diffuse_normals;
/// use xtoon_types::Vector3;
///
/// // A flat triangle is a fixed point of the diffusion
/// let seed = vec![Vector3::z(); 3];
/// let out = diffuse_normals(&seed, &[[0, 1, 2]], 4);
/// assert_eq!(out, seed);
/// ```
#[must_use]
pub fn diffuse_normals(
    seed: &[Vector3<f64>],
    triangles: &[[u32; 3]],
    iterations: usize,
) -> Vec<Vector3<f64>> {
    let mut current = seed.to_vec();
    let mut next = vec![Vector3::zeros(); seed.len()];

    for iteration in 0..iterations {
        next.fill(Vector3::zeros());

        for &[a, b, c] in triangles {
            let (a, b, c) = (a as usize, b as usize, c as usize);
            let (na, nb, nc) = (current[a], current[b], current[c]);
            next[a] += nb + nc;
            next[b] += na + nc;
            next[c] += na + nb;
        }

        for (dst, sum) in current.iter_mut().zip(&next) {
            *dst = normalize_or_zero(sum);
        }

        debug!(iteration = iteration + 1, "Diffusion pass complete");
    }

    current
}

/// Project vertex directions onto an ellipsoid with semi-axes `dimension`.
///
/// `normalize(normalize(p) * dimension)`, component-wise product.
#[must_use]
pub fn ellipse_normals(positions: &[Point3<f64>], dimension: &Vector3<f64>) -> Vec<Vector3<f64>> {
    positions
        .iter()
        .map(|p| normalize_or_zero(&normalize_or_zero(&p.coords).component_mul(dimension)))
        .collect()
}

/// Radial directions around the dominant bounding-box axis.
///
/// The dominant axis component is zeroed before normalizing. When no axis
/// is strictly longest, nothing is flattened and the result equals
/// [`sphere_normals`].
#[must_use]
pub fn cylinder_normals(positions: &[Point3<f64>], bounds: &Aabb) -> Vec<Vector3<f64>> {
    let axis = bounds.dominant_axis();
    debug!(?axis, "Cylinder axis");

    positions
        .iter()
        .map(|p| {
            let mut v = p.coords;
            if let Some(axis) = axis {
                v[axis.index()] = 0.0;
            }
            normalize_or_zero(&v)
        })
        .collect()
}

/// Radial directions from the origin.
#[must_use]
pub fn sphere_normals(positions: &[Point3<f64>]) -> Vec<Vector3<f64>> {
    positions.iter().map(|p| normalize_or_zero(&p.coords)).collect()
}
