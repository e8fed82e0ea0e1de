//! Interleaved vertex record handed to the renderer.

use bytemuck::{Pod, Zeroable};
use nalgebra::{Point3, Vector3};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One vertex of the render-ready stream.
///
/// Field order is fixed: position, normal, abstracted normal. The renderer
/// binds three `vec3` attributes at [`ATTRIBUTE_OFFSETS`] with a stride of
/// [`STRIDE`].
///
/// # Memory Layout
///
/// Total size: 36 bytes (3 x `[f32; 3]`, no padding)
///
/// [`ATTRIBUTE_OFFSETS`]: Self::ATTRIBUTE_OFFSETS
/// [`STRIDE`]: Self::STRIDE
///
/// # Example
///
/// ```
/// use xtoon_types::VertexRecord;
///
/// assert_eq!(std::mem::size_of::<VertexRecord>(), VertexRecord::STRIDE);
/// assert_eq!(VertexRecord::ATTRIBUTE_OFFSETS, [0, 12, 24]);
/// ```
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct VertexRecord {
    /// Position, centered and scaled to roughly unit size.
    pub position: [f32; 3],
    /// Smoothed geometric normal (unit length, or zero when undefined).
    pub normal: [f32; 3],
    /// Abstracted normal driving the stylized shading level.
    pub abstracted_normal: [f32; 3],
}

impl VertexRecord {
    /// Byte distance between consecutive records.
    pub const STRIDE: usize = std::mem::size_of::<Self>();

    /// Byte offsets of position, normal and abstracted normal.
    pub const ATTRIBUTE_OFFSETS: [usize; 3] = [
        std::mem::offset_of!(Self, position),
        std::mem::offset_of!(Self, normal),
        std::mem::offset_of!(Self, abstracted_normal),
    ];

    /// Create a record from pipeline values, narrowing to `f32`.
    ///
    /// Finite values beyond the `f32` range saturate at `f32::MIN` /
    /// `f32::MAX` instead of becoming infinite.
    #[must_use]
    pub fn new(
        position: &Point3<f64>,
        normal: &Vector3<f64>,
        abstracted_normal: &Vector3<f64>,
    ) -> Self {
        Self {
            position: narrow(&position.coords),
            normal: narrow(normal),
            abstracted_normal: narrow(abstracted_normal),
        }
    }

    /// Check that no component is NaN or infinite.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.position
            .iter()
            .chain(&self.normal)
            .chain(&self.abstracted_normal)
            .all(|c| c.is_finite())
    }
}

/// Narrow to single precision, saturating finite values.
#[allow(clippy::cast_possible_truncation)]
// Truncation: GPU vertex attributes are single precision
fn narrow(v: &Vector3<f64>) -> [f32; 3] {
    let (lo, hi) = (f64::from(f32::MIN), f64::from(f32::MAX));
    v.map(|c| c.clamp(lo, hi) as f32).into()
}
