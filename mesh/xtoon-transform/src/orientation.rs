//! Source axis conventions.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use xtoon_types::{Aabb, Point3};

/// The authoring axes of a source model.
///
/// Selects one of four axis permutations into the canonical frame. The up
/// axis value is copied straight to output Y; the two remaining source axes
/// fill output X and Z, swapped when `x_front` is false.
///
/// | `y_up` | `x_front` | output (x, y, z) |
/// |--------|-----------|------------------|
/// | true   | true      | (x, y, z)        |
/// | true   | false     | (z, y, x)        |
/// | false  | true      | (x, z, y)        |
/// | false  | false     | (y, z, x)        |
///
/// No sign flips are applied, so triangle winding is left as in the file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Orientation {
    /// Source up axis is Y (otherwise Z).
    pub y_up: bool,
    /// Source front axis is X (otherwise the remaining horizontal axis).
    pub x_front: bool,
}

impl Orientation {
    /// The canonical frame: Y up, X front. Positions pass through unchanged.
    pub const CANONICAL: Self = Self::new(true, true);

    /// Create an orientation from the two caller flags.
    #[must_use]
    pub const fn new(y_up: bool, x_front: bool) -> Self {
        Self { y_up, x_front }
    }

    /// Source component index feeding each output component.
    ///
    /// # Example
    ///
    /// ```
    /// use xtoon_transform::Orientation;
    ///
    /// assert_eq!(Orientation::new(false, false).permutation(), [1, 2, 0]);
    /// ```
    #[must_use]
    pub const fn permutation(&self) -> [usize; 3] {
        match (self.y_up, self.x_front) {
            (true, true) => [0, 1, 2],
            (true, false) => [2, 1, 0],
            (false, true) => [0, 2, 1],
            (false, false) => [1, 2, 0],
        }
    }

    /// Remap a point into the canonical frame.
    #[must_use]
    pub fn apply(&self, point: &Point3<f64>) -> Point3<f64> {
        let [a, b, c] = self.permutation();
        Point3::new(point[a], point[b], point[c])
    }

    /// Remap a bounding box into the canonical frame.
    ///
    /// A pure permutation keeps min and max corners as corners.
    #[must_use]
    pub fn apply_bounds(&self, bounds: &Aabb) -> Aabb {
        if bounds.is_empty() {
            return *bounds;
        }
        Aabb {
            min: self.apply(&bounds.min),
            max: self.apply(&bounds.max),
        }
    }

    /// Whether this orientation leaves positions untouched.
    #[must_use]
    pub const fn is_canonical(&self) -> bool {
        self.y_up && self.x_front
    }
}

impl Default for Orientation {
    fn default() -> Self {
        Self::CANONICAL
    }
}
