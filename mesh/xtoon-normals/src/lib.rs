//! Normal computation for the XToon mesh pipeline.
//!
//! Two per-vertex normal fields are produced for every mesh:
//!
//! - **Smooth normals** ([`compute_vertex_normals`]): area-weighted average
//!   of the incident face normals, used for regular shading.
//! - **Abstracted normals** ([`synthesize`]): a deliberately simplified field
//!   driving the stylized shading level, built by one of four
//!   [`AbstractionMode`]s.
//!
//! Every function here is pure and deterministic. Vectors that have no
//! defined direction (unreferenced vertices, degenerate triangles, a vertex
//! sitting exactly on the origin) come out as the zero vector, never NaN.
//!
//! # Example
//!
//! ```
//! use xtoon_normals::{AbstractionMode, compute_vertex_normals, synthesize};
//! use xtoon_types::unit_cube;
//!
//! let cube = unit_cube();
//! let normals = compute_vertex_normals(&cube.positions, &cube.triangles);
//! let abstracted = synthesize(
//!     &cube.positions,
//!     &cube.triangles,
//!     &normals,
//!     AbstractionMode::Sphere,
//!     &cube.bounds(),
//! );
//!
//! let corner = abstracted[6];
//! let expected = 1.0 / 3.0_f64.sqrt();
//! assert!((corner.x - expected).abs() < 1e-12);
//! ```

#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]

mod abstraction;
mod error;
mod mode;
mod vertex_normals;

pub use abstraction::{
    SMOOTH_ITERATIONS, cylinder_normals, diffuse_normals, ellipse_normals, sphere_normals,
    synthesize,
};
pub use error::ParseModeError;
pub use mode::AbstractionMode;
pub use vertex_normals::{
    checked_face_normal, compute_vertex_normals, degenerate_triangle_count, face_normal,
};
