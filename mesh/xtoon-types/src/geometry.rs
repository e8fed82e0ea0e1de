//! Raw geometry as produced by a format reader.

use nalgebra::Point3;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::Aabb;

/// Positions and triangles read from a model file.
///
/// Only the position channel is kept; any normals or texture coordinates in
/// the file are discarded because the pipeline recomputes its own normals.
///
/// # Invariant
///
/// Every index in `triangles` is in `[0, positions.len())`. Format readers
/// enforce this before returning a value.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RawGeometry {
    /// Vertex positions in file order.
    pub positions: Vec<Point3<f64>>,

    /// Triangles as indices into `positions`, winding as in the file.
    pub triangles: Vec<[u32; 3]>,
}

impl RawGeometry {
    /// Create an empty geometry.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            positions: Vec::new(),
            triangles: Vec::new(),
        }
    }

    /// Create a geometry from positions and triangles.
    #[inline]
    #[must_use]
    pub const fn from_parts(positions: Vec<Point3<f64>>, triangles: Vec<[u32; 3]>) -> Self {
        Self {
            positions,
            triangles,
        }
    }

    /// Number of positions.
    #[inline]
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Number of triangles.
    #[inline]
    #[must_use]
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// True when there is nothing to render (no positions or no triangles).
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty() || self.triangles.is_empty()
    }

    /// Bounding box of all positions, referenced or not.
    #[must_use]
    pub fn bounds(&self) -> Aabb {
        Aabb::from_points(&self.positions)
    }

    /// The first triangle index that does not address a position, if any.
    ///
    /// # Example
    ///
    /// ```
    /// use xtoon_types::{Point3, RawGeometry};
    ///
    /// let geometry = RawGeometry::from_parts(
    ///     vec![Point3::origin(), Point3::new(1.0, 0.0, 0.0)],
    ///     vec![[0, 1, 2]],
    /// );
    /// assert_eq!(geometry.first_invalid_index(), Some(2));
    /// ```
    #[must_use]
    pub fn first_invalid_index(&self) -> Option<u32> {
        let count = self.positions.len();
        self.triangles
            .iter()
            .flatten()
            .copied()
            .find(|&i| i as usize >= count)
    }

    /// Triangle indices flattened to three entries per triangle.
    #[must_use]
    pub fn flat_indices(&self) -> Vec<u32> {
        self.triangles.iter().flatten().copied().collect()
    }
}

/// Build an axis-aligned cube of side 1 centered on the origin.
///
/// 8 shared corners and 12 triangles, counter-clockwise when viewed from
/// outside.
///
/// # Example
///
/// ```
/// use xtoon_types::unit_cube;
///
/// let cube = unit_cube();
/// assert_eq!(cube.vertex_count(), 8);
/// assert_eq!(cube.triangle_count(), 12);
/// ```
#[must_use]
pub fn unit_cube() -> RawGeometry {
    let positions = vec![
        Point3::new(-0.5, -0.5, -0.5), // 0
        Point3::new(0.5, -0.5, -0.5),  // 1
        Point3::new(0.5, 0.5, -0.5),   // 2
        Point3::new(-0.5, 0.5, -0.5),  // 3
        Point3::new(-0.5, -0.5, 0.5),  // 4
        Point3::new(0.5, -0.5, 0.5),   // 5
        Point3::new(0.5, 0.5, 0.5),    // 6
        Point3::new(-0.5, 0.5, 0.5),   // 7
    ];

    let triangles = vec![
        // -Z
        [0, 2, 1],
        [0, 3, 2],
        // +Z
        [4, 5, 6],
        [4, 6, 7],
        // -Y
        [0, 1, 5],
        [0, 5, 4],
        // +Y
        [3, 7, 6],
        [3, 6, 2],
        // -X
        [0, 4, 7],
        [0, 7, 3],
        // +X
        [1, 2, 6],
        [1, 6, 5],
    ];

    RawGeometry::from_parts(positions, triangles)
}
