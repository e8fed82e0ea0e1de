//! Small vector helpers shared by every pipeline stage.

use nalgebra::Vector3;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Vectors shorter than this are treated as zero when normalizing.
///
/// The pipeline applies it to unit vectors, to positions in a unit-diagonal
/// frame, or as a ratio against a reference length, never to raw model
/// coordinates.
pub const NORMAL_EPSILON: f64 = 1e-12;

/// Normalize a vector, returning the zero vector when it has no direction.
///
/// Zero-length, near-zero and non-finite inputs all map to `(0, 0, 0)`, so
/// the result never contains NaN or infinity.
///
/// # Example
///
/// ```
/// use xtoon_types::{Vector3, normalize_or_zero};
///
/// let n = normalize_or_zero(&Vector3::new(0.0, 3.0, 4.0));
/// assert!((n.norm() - 1.0).abs() < 1e-12);
///
/// assert_eq!(normalize_or_zero(&Vector3::zeros()), Vector3::zeros());
/// ```
#[inline]
#[must_use]
pub fn normalize_or_zero(v: &Vector3<f64>) -> Vector3<f64> {
    let len = v.norm();
    if len > NORMAL_EPSILON && len.is_finite() {
        v / len
    } else {
        Vector3::zeros()
    }
}

/// A coordinate axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Axis {
    /// The X axis (component 0).
    X,
    /// The Y axis (component 1).
    Y,
    /// The Z axis (component 2).
    Z,
}

impl Axis {
    /// Component index of this axis in a 3-vector.
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::X => 0,
            Self::Y => 1,
            Self::Z => 2,
        }
    }
}
