//! Abstraction strategy selection.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::ParseModeError;

/// Strategy used to build the abstracted normal field.
///
/// The control panel selects a mode by index: 0 = Smooth, 1 = Ellipse,
/// 2 = Cylinder, 3 = Sphere.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum AbstractionMode {
    /// Diffuse the smooth normals over the triangle adjacency for a fixed
    /// number of iterations.
    #[default]
    Smooth,

    /// Project each vertex direction onto an ellipsoid with the bounding-box
    /// extents as semi-axes.
    Ellipse,

    /// Radial direction around the longest bounding-box axis.
    Cylinder,

    /// Radial direction from the origin.
    Sphere,
}

impl AbstractionMode {
    /// All modes in control-panel order.
    pub const ALL: [Self; 4] = [Self::Smooth, Self::Ellipse, Self::Cylinder, Self::Sphere];

    /// Lowercase name, as accepted by [`FromStr`].
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Smooth => "smooth",
            Self::Ellipse => "ellipse",
            Self::Cylinder => "cylinder",
            Self::Sphere => "sphere",
        }
    }
}

impl fmt::Display for AbstractionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for AbstractionMode {
    type Err = ParseModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|mode| mode.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseModeError::UnknownName(s.to_string()))
    }
}

impl TryFrom<u32> for AbstractionMode {
    type Error = ParseModeError;

    fn try_from(index: u32) -> Result<Self, Self::Error> {
        usize::try_from(index)
            .ok()
            .and_then(|i| Self::ALL.get(i).copied())
            .ok_or(ParseModeError::IndexOutOfRange(index))
    }
}
