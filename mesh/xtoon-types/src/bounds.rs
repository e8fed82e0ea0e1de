//! Axis-aligned bounding box.

use nalgebra::{Point3, Vector3};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::Axis;

/// An axis-aligned bounding box (AABB).
///
/// Used as scratch during normalization: its center re-centers the model,
/// its dimension shapes the ellipse and cylinder abstractions, and its
/// diagonal rescales the final positions.
///
/// # Example
///
/// ```
/// use xtoon_types::{Aabb, Point3};
///
/// let aabb = Aabb::new(
///     Point3::new(0.0, 0.0, 0.0),
///     Point3::new(2.0, 4.0, 4.0),
/// );
///
/// assert_eq!(aabb.center(), Point3::new(1.0, 2.0, 2.0));
/// assert_eq!(aabb.diagonal(), 6.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Aabb {
    /// Minimum corner (smallest x, y, z values).
    pub min: Point3<f64>,
    /// Maximum corner (largest x, y, z values).
    pub max: Point3<f64>,
}

impl Aabb {
    /// Create a new AABB from two corners.
    ///
    /// The corners are sorted per axis, so argument order does not matter.
    #[must_use]
    pub fn new(a: Point3<f64>, b: Point3<f64>) -> Self {
        Self {
            min: Point3::new(a.x.min(b.x), a.y.min(b.y), a.z.min(b.z)),
            max: Point3::new(a.x.max(b.x), a.y.max(b.y), a.z.max(b.z)),
        }
    }

    /// Create an empty (inverted) AABB, the identity for [`expand_to_include`].
    ///
    /// [`expand_to_include`]: Self::expand_to_include
    #[must_use]
    pub fn empty() -> Self {
        Self {
            min: Point3::new(f64::INFINITY, f64::INFINITY, f64::INFINITY),
            max: Point3::new(f64::NEG_INFINITY, f64::NEG_INFINITY, f64::NEG_INFINITY),
        }
    }

    /// Create an AABB enclosing all points of an iterator.
    ///
    /// Returns an empty AABB if the iterator is empty.
    #[must_use]
    pub fn from_points<'a>(points: impl IntoIterator<Item = &'a Point3<f64>>) -> Self {
        let mut aabb = Self::empty();
        for point in points {
            aabb.expand_to_include(point);
        }
        aabb
    }

    /// Check if the AABB encloses nothing (min > max on some axis).
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.min.x > self.max.x || self.min.y > self.max.y || self.min.z > self.max.z
    }

    /// Center point, `(min + max) / 2`.
    ///
    /// Halved before summing so corners near `f64::MAX` do not overflow.
    #[inline]
    #[must_use]
    pub fn center(&self) -> Point3<f64> {
        Point3::from(self.min.coords * 0.5 + self.max.coords * 0.5)
    }

    /// Extent along each axis, `|max - min|` component-wise.
    ///
    /// Returns the zero vector for an empty AABB.
    #[inline]
    #[must_use]
    pub fn dimension(&self) -> Vector3<f64> {
        if self.is_empty() {
            return Vector3::zeros();
        }
        (self.max - self.min).abs()
    }

    /// Euclidean length of the diagonal, `||max - min||`.
    ///
    /// The extents are divided by the largest one before squaring, so the
    /// result stays finite whenever the extents are. Returns 0.0 for an
    /// empty AABB.
    #[must_use]
    pub fn diagonal(&self) -> f64 {
        let d = self.dimension();
        let largest = d.max();
        if largest > 0.0 && largest.is_finite() {
            largest * (d / largest).norm()
        } else {
            largest
        }
    }

    /// The axis whose extent is strictly greater than both others.
    ///
    /// Returns `None` when the two largest extents are equal, so a cube or a
    /// square slab has no dominant axis.
    ///
    /// # Example
    ///
    /// ```
    /// use xtoon_types::{Aabb, Axis, Point3};
    ///
    /// let tall = Aabb::new(Point3::origin(), Point3::new(1.0, 5.0, 1.0));
    /// assert_eq!(tall.dominant_axis(), Some(Axis::Y));
    ///
    /// let slab = Aabb::new(Point3::origin(), Point3::new(3.0, 1.0, 3.0));
    /// assert_eq!(slab.dominant_axis(), None);
    /// ```
    #[must_use]
    pub fn dominant_axis(&self) -> Option<Axis> {
        let d = self.dimension();
        if d.x > d.y && d.x > d.z {
            Some(Axis::X)
        } else if d.y > d.x && d.y > d.z {
            Some(Axis::Y)
        } else if d.z > d.x && d.z > d.y {
            Some(Axis::Z)
        } else {
            None
        }
    }

    /// Expand the AABB to include a point.
    pub fn expand_to_include(&mut self, point: &Point3<f64>) {
        self.min.x = self.min.x.min(point.x);
        self.min.y = self.min.y.min(point.y);
        self.min.z = self.min.z.min(point.z);
        self.max.x = self.max.x.max(point.x);
        self.max.y = self.max.y.max(point.y);
        self.max.z = self.max.z.max(point.z);
    }

    /// Return this AABB moved by `offset`.
    #[must_use]
    pub fn translated(&self, offset: &Vector3<f64>) -> Self {
        if self.is_empty() {
            return *self;
        }
        Self {
            min: self.min + offset,
            max: self.max + offset,
        }
    }

    /// Return this AABB with both corners multiplied by a positive `factor`.
    #[must_use]
    pub fn scaled(&self, factor: f64) -> Self {
        if self.is_empty() {
            return *self;
        }
        Self::new(self.min * factor, self.max * factor)
    }
}

impl Default for Aabb {
    fn default() -> Self {
        Self::empty()
    }
}
