//! Pipeline parameters.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use xtoon_normals::AbstractionMode;
use xtoon_transform::Orientation;

/// Caller flags for one load.
///
/// # Example
///
/// ```
/// use xtoon_mesh::{AbstractionMode, LoadParams};
///
/// let params = LoadParams::new()
///     .with_y_up(false)
///     .with_mode(AbstractionMode::Cylinder);
///
/// assert!(!params.y_up);
/// assert!(params.x_front);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LoadParams {
    /// Source up axis is Y (otherwise Z).
    pub y_up: bool,

    /// Source front axis is X (otherwise the other horizontal axis).
    pub x_front: bool,

    /// Strategy for the abstracted normal field.
    pub mode: AbstractionMode,
}

impl Default for LoadParams {
    fn default() -> Self {
        Self {
            y_up: true,
            x_front: true,
            mode: AbstractionMode::default(),
        }
    }
}

impl LoadParams {
    /// Create new parameters with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether the source up axis is Y.
    #[must_use]
    pub const fn with_y_up(mut self, y_up: bool) -> Self {
        self.y_up = y_up;
        self
    }

    /// Set whether the source front axis is X.
    #[must_use]
    pub const fn with_x_front(mut self, x_front: bool) -> Self {
        self.x_front = x_front;
        self
    }

    /// Set the abstraction mode.
    #[must_use]
    pub const fn with_mode(mut self, mode: AbstractionMode) -> Self {
        self.mode = mode;
        self
    }

    /// The axis remap these flags select.
    #[must_use]
    pub const fn orientation(&self) -> Orientation {
        Orientation::new(self.y_up, self.x_front)
    }
}
