//! Wavefront OBJ support.
//!
//! Only geometry statements are interpreted:
//!
//! ```text
//! v  x y z [w]          - position (w ignored)
//! vn x y z              - normal (counted, discarded)
//! vt u [v [w]]          - texture coordinate (counted, discarded)
//! f  v1 v2 v3 ...       - face; each entry is v, v/vt, v//vn or v/vt/vn
//! ```
//!
//! Face indices are 1-based; negative indices count back from the most
//! recent position. Faces with more than three entries are fan-triangulated.
//! Groups, materials, smoothing groups and comments are skipped.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::debug;
use xtoon_types::{Point3, RawGeometry};

use crate::error::{IoError, IoResult};
use crate::{check_indices, fan_triangulate};

/// Load geometry from an OBJ file.
///
/// # Errors
///
/// Returns an error if:
/// - The file cannot be opened or read
/// - A `v` line has fewer than three numeric components
/// - A face entry is not a valid index, or addresses a missing position
///
/// # Example
///
/// ```no_run
/// use xtoon_io::load_obj;
///
/// let geometry = load_obj("venus.obj").unwrap();
/// println!("{} triangles", geometry.triangle_count());
/// ```
pub fn load_obj<P: AsRef<Path>>(path: P) -> IoResult<RawGeometry> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| IoError::from_open(e, path))?;
    parse_obj(BufReader::new(file))
}

/// Parse OBJ text from any buffered reader.
///
/// # Errors
///
/// Same conditions as [`load_obj`], minus file opening.
pub fn parse_obj<R: BufRead>(reader: R) -> IoResult<RawGeometry> {
    let mut geometry = RawGeometry::new();
    let mut polygon: Vec<u32> = Vec::with_capacity(4);
    let mut normal_count = 0_usize;
    let mut texcoord_count = 0_usize;
    let mut skipped_faces = 0_usize;

    for (line_number, line) in reader.lines().enumerate() {
        let line = line?;
        let mut parts = line.split_whitespace();

        match parts.next() {
            Some("v") => {
                let coords = parts
                    .take(3)
                    .map(str::parse::<f64>)
                    .collect::<Result<Vec<_>, _>>()?;
                if coords.len() < 3 {
                    return Err(IoError::invalid_content(format!(
                        "line {}: vertex needs 3 coordinates, got {}",
                        line_number + 1,
                        coords.len()
                    )));
                }
                geometry
                    .positions
                    .push(Point3::new(coords[0], coords[1], coords[2]));
            }
            Some("vn") => normal_count += 1,
            Some("vt") => texcoord_count += 1,
            Some("f") => {
                polygon.clear();
                for entry in parts {
                    let index = resolve_index(entry, geometry.positions.len())
                        .map_err(|message| {
                            IoError::invalid_content(format!("line {}: {message}", line_number + 1))
                        })?;
                    polygon.push(index);
                }
                if polygon.len() < 3 {
                    skipped_faces += 1;
                    continue;
                }
                fan_triangulate(&polygon, &mut geometry.triangles);
            }
            _ => {
                // Ignore groups, materials, comments and unknown statements
            }
        }
    }

    debug!(
        normals = normal_count,
        texcoords = texcoord_count,
        skipped_faces,
        "Discarded non-position OBJ channels"
    );

    check_indices(&geometry)?;
    Ok(geometry)
}

/// Resolve one face entry (`v`, `v/vt`, `v//vn`, `v/vt/vn`) to a 0-based index.
fn resolve_index(entry: &str, positions_so_far: usize) -> Result<u32, String> {
    let position = entry.split('/').next().unwrap_or_default();
    let raw: i64 = position
        .parse()
        .map_err(|_| format!("invalid face entry '{entry}'"))?;

    let resolved = match raw {
        0 => return Err(format!("face index 0 in entry '{entry}'")),
        r if r > 0 => r - 1,
        // Relative: -1 is the most recent position
        r => i64::try_from(positions_so_far).unwrap_or(i64::MAX) + r,
    };

    u32::try_from(resolved)
        .map_err(|_| format!("face entry '{entry}' resolves outside the vertex list"))
}
