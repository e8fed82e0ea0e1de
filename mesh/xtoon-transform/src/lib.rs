//! Spatial normalization for the XToon mesh pipeline.
//!
//! Models are authored with different up and front axes. This crate remaps
//! every position into the canonical **Y-up, X-front** frame and moves the
//! bounding-box center to the origin in a single pass.
//!
//! # Example
//!
//! ```
//! use xtoon_transform::{Orientation, normalize_positions};
//! use xtoon_types::Point3;
//!
//! // A Z-up model
//! let positions = vec![Point3::new(0.0, 0.0, 0.0), Point3::new(2.0, 4.0, 6.0)];
//! let orientation = Orientation::new(false, true);
//!
//! let (normalized, bounds) = normalize_positions(&positions, orientation);
//!
//! // Source Z became Y, and the model is centered
//! assert_eq!(normalized[1], Point3::new(1.0, 3.0, 2.0));
//! assert_eq!(bounds.center(), Point3::origin());
//! ```

#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]

mod normalize;
mod orientation;

pub use normalize::normalize_positions;
pub use orientation::Orientation;
