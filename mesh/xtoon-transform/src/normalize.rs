//! Re-centering positions into the canonical frame.

use tracing::{debug, warn};
use xtoon_types::{Aabb, Point3};

use crate::Orientation;

/// Remap positions into the canonical frame and center them on the origin.
///
/// The bounding box is taken over the raw positions. Each output position is
/// `permuted(position) - permuted(center)`, so the remap and the centering
/// happen in one pass.
///
/// Returns the normalized positions and their bounding box, expressed in the
/// canonical frame (centered on the origin, extents permuted). An empty input
/// returns an empty list and an empty box.
#[must_use]
pub fn normalize_positions(
    positions: &[Point3<f64>],
    orientation: Orientation,
) -> (Vec<Point3<f64>>, Aabb) {
    let raw_bounds = Aabb::from_points(positions);
    if raw_bounds.is_empty() {
        return (Vec::new(), raw_bounds);
    }

    let center = orientation.apply(&raw_bounds.center()).coords;
    let normalized: Vec<Point3<f64>> = positions
        .iter()
        .map(|p| orientation.apply(p) - center)
        .collect();

    let bounds = orientation.apply_bounds(&raw_bounds).translated(&-center);

    debug!(
        ?orientation,
        center = ?raw_bounds.center(),
        dimension = ?bounds.dimension(),
        diagonal = bounds.diagonal(),
        "Normalized positions"
    );
    if bounds.diagonal() <= f64::EPSILON {
        warn!(
            vertices = positions.len(),
            "Degenerate bounding box: model collapses to a point"
        );
    }

    (normalized, bounds)
}
