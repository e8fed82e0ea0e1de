//! Mesh ingestion for the XToon renderer.
//!
//! Turns an OBJ or PLY file into a [`Mesh`]: a flat list of
//! [`VertexRecord`]s (position, smooth normal, abstracted normal) plus a
//! triangle index list, ready to upload to the GPU.
//!
//! The pipeline runs five stages in order:
//!
//! 1. **Read** the file into positions and triangles ([`xtoon_io`])
//! 2. **Normalize** the axes into the canonical Y-up, X-front frame and
//!    center the model on the origin ([`xtoon_transform`])
//! 3. **Compute** area-weighted smooth normals ([`xtoon_normals`])
//! 4. **Synthesize** the abstracted normals for the chosen
//!    [`AbstractionMode`]
//! 5. **Pack** everything into the interleaved buffer, scaled so the
//!    bounding-box diagonal is 1 ([`pack`])
//!
//! # Quick Start
//!
//! ```no_run
//! use xtoon_mesh::{AbstractionMode, LoadParams, load_mesh_with_report};
//!
//! // A Z-up scan, shaded with the sphere abstraction
//! let params = LoadParams::new()
//!     .with_y_up(false)
//!     .with_mode(AbstractionMode::Sphere);
//!
//! let result = load_mesh_with_report("scan.ply", &params).unwrap();
//! println!("{result}");
//!
//! let vertex_bytes = result.mesh.vertex_bytes();
//! let index_bytes = result.mesh.index_bytes();
//! # let _ = (vertex_bytes, index_bytes);
//! ```
//!
//! Loads are independent. A failed load returns an error and leaves any
//! previously built mesh untouched, since nothing is shared between calls.

#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]

mod error;
mod pack;
mod params;
mod pipeline;
mod result;

pub use error::{MeshError, MeshResult};
pub use pack::{pack, unit_scale};
pub use params::LoadParams;
pub use pipeline::{build_mesh, load_mesh, load_mesh_with_report};
pub use result::LoadResult;

pub use xtoon_io::{IoError, MeshFormat};
pub use xtoon_normals::{AbstractionMode, SMOOTH_ITERATIONS};
pub use xtoon_transform::Orientation;
pub use xtoon_types::{Aabb, Mesh, RawGeometry, VertexRecord};
