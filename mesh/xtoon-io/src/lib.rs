//! Model file readers for the XToon mesh pipeline.
//!
//! Two backends share one output contract, [`RawGeometry`]:
//!
//! - **OBJ** (Wavefront) - indexed faces, ASCII
//! - **PLY** (Polygon File Format) - binary and ASCII point-and-face data
//!
//! Only positions and triangle indices are kept. Polygons are
//! fan-triangulated. Any normals stored in the file are dropped because the
//! pipeline computes its own.
//!
//! # Format Detection
//!
//! The backend is chosen once from the file extension. An unrecognized
//! extension is not an error: [`read_geometry`] returns an empty geometry and
//! callers skip the remaining stages.
//!
//! ```no_run
//! use xtoon_io::read_geometry;
//!
//! let geometry = read_geometry("venus.ply").unwrap();
//! if geometry.is_empty() {
//!     // unsupported extension or nothing to draw
//! }
//! ```

#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]

mod error;
mod obj;
mod ply;

pub use error::{IoError, IoResult};
pub use obj::{load_obj, parse_obj};
pub use ply::{load_ply, parse_ply};

use std::path::Path;

use tracing::{info, warn};
use xtoon_types::RawGeometry;

/// Supported model file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MeshFormat {
    /// OBJ (Wavefront) indexed-face format.
    Obj,
    /// PLY (Polygon File Format), binary or ASCII.
    Ply,
}

impl MeshFormat {
    /// Detect format from file extension (case-insensitive).
    ///
    /// Returns `None` if the extension is missing or not recognized.
    #[must_use]
    pub fn from_path<P: AsRef<Path>>(path: P) -> Option<Self> {
        let ext = path.as_ref().extension()?.to_str()?.to_lowercase();
        match ext.as_str() {
            "obj" => Some(Self::Obj),
            "ply" => Some(Self::Ply),
            _ => None,
        }
    }

    /// Get the canonical file extension for this format.
    #[must_use]
    pub const fn extension(&self) -> &'static str {
        match self {
            Self::Obj => "obj",
            Self::Ply => "ply",
        }
    }
}

impl std::fmt::Display for MeshFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Obj => "OBJ",
            Self::Ply => "PLY",
        })
    }
}

/// Read geometry from a file, choosing the backend from its extension.
///
/// # Errors
///
/// Returns an error if the file cannot be read or its content is invalid for
/// the detected format. An unrecognized extension yields
/// `Ok(RawGeometry::default())` instead.
pub fn read_geometry<P: AsRef<Path>>(path: P) -> IoResult<RawGeometry> {
    read_detected(path).map(|(_, geometry)| geometry)
}

/// Like [`read_geometry`], also returning the format the extension selected.
///
/// The format is `None` when the extension is not recognized, in which case
/// the geometry is empty and a warning is logged.
///
/// # Errors
///
/// Same conditions as [`read_geometry`].
pub fn read_detected<P: AsRef<Path>>(path: P) -> IoResult<(Option<MeshFormat>, RawGeometry)> {
    let path = path.as_ref();
    match MeshFormat::from_path(path) {
        Some(format) => Ok((Some(format), read_as(path, format)?)),
        None => {
            warn!(path = %path.display(), "Unrecognized model extension, nothing loaded");
            Ok((None, RawGeometry::default()))
        }
    }
}

/// Read geometry from a file with an explicit format.
///
/// # Errors
///
/// Returns an error if the file cannot be read or its content is invalid.
pub fn read_as<P: AsRef<Path>>(path: P, format: MeshFormat) -> IoResult<RawGeometry> {
    let path = path.as_ref();
    let geometry = match format {
        MeshFormat::Obj => load_obj(path)?,
        MeshFormat::Ply => load_ply(path)?,
    };

    info!(
        path = %path.display(),
        %format,
        vertices = geometry.vertex_count(),
        triangles = geometry.triangle_count(),
        "Read model"
    );

    Ok(geometry)
}

/// Fail if any triangle addresses a missing position.
pub(crate) fn check_indices(geometry: &RawGeometry) -> IoResult<()> {
    match geometry.first_invalid_index() {
        Some(index) => Err(IoError::IndexOutOfRange {
            index: u64::from(index),
            vertex_count: geometry.vertex_count(),
        }),
        None => Ok(()),
    }
}

/// Split a convex polygon into a triangle fan around its first vertex.
pub(crate) fn fan_triangulate(polygon: &[u32], triangles: &mut Vec<[u32; 3]>) {
    let Some((&first, rest)) = polygon.split_first() else {
        return;
    };
    triangles.extend(rest.windows(2).map(|w| [first, w[0], w[1]]));
}
