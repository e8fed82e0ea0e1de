//! Core types for the XToon mesh pipeline.
//!
//! This crate provides the values that flow between pipeline stages:
//!
//! - [`RawGeometry`] - Positions and triangle indices as read from a file
//! - [`Aabb`] - Axis-aligned bounding box used for centering and scaling
//! - [`VertexRecord`] - Interleaved position / normal / abstracted normal
//! - [`Mesh`] - The render-ready vertex and index buffers
//!
//! # Coordinate System
//!
//! After normalization every mesh is expressed in a **Y-up, X-front** frame
//! centered on the origin. Triangle winding is inherited from the source file
//! and never altered.
//!
//! # Example
//!
//! ```
//! use xtoon_types::{Point3, RawGeometry};
//!
//! let mut geometry = RawGeometry::new();
//! geometry.positions.push(Point3::new(0.0, 0.0, 0.0));
//! geometry.positions.push(Point3::new(1.0, 0.0, 0.0));
//! geometry.positions.push(Point3::new(0.0, 1.0, 0.0));
//! geometry.triangles.push([0, 1, 2]);
//!
//! assert_eq!(geometry.triangle_count(), 1);
//! assert!(!geometry.is_empty());
//! ```

#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]

mod bounds;
mod geometry;
mod math;
mod mesh;
mod vertex;

pub use bounds::Aabb;
pub use geometry::{RawGeometry, unit_cube};
pub use math::{Axis, NORMAL_EPSILON, normalize_or_zero};
pub use mesh::Mesh;
pub use vertex::VertexRecord;

// Re-export nalgebra types for convenience
pub use nalgebra::{Point3, Vector3};
