//! PLY (Polygon File Format) support.
//!
//! Reads ASCII, binary little-endian and binary big-endian files through
//! `ply-rs`.
//!
//! # Supported Properties
//!
//! - Vertex positions (`x`, `y`, `z`) in any scalar type - required
//! - Face vertex indices (`vertex_indices` or `vertex_index`) in any integer
//!   list type - polygons are fan-triangulated
//!
//! Other vertex properties (normals, colors, confidence) are ignored.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use ply_rs::parser::Parser;
use ply_rs::ply::{DefaultElement, Property};
use tracing::debug;
use xtoon_types::{Point3, RawGeometry};

use crate::error::{IoError, IoResult};
use crate::{check_indices, fan_triangulate};

/// Face list property names, in lookup order.
const FACE_INDEX_KEYS: [&str; 2] = ["vertex_indices", "vertex_index"];

/// Load geometry from a PLY file.
///
/// # Errors
///
/// Returns an error if:
/// - The file cannot be opened or read
/// - The header or payload is not valid PLY
/// - A vertex lacks one of `x`, `y`, `z`
/// - A face index is negative or addresses a missing vertex
///
/// # Example
///
/// ```no_run
/// use xtoon_io::load_ply;
///
/// let geometry = load_ply("venus.ply").unwrap();
/// println!("{} vertices", geometry.vertex_count());
/// ```
pub fn load_ply<P: AsRef<Path>>(path: P) -> IoResult<RawGeometry> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| IoError::from_open(e, path))?;
    let mut reader = BufReader::new(file);
    parse_ply(&mut reader)
}

/// Parse PLY data (header and payload) from any buffered reader.
///
/// # Errors
///
/// Same conditions as [`load_ply`], minus file opening.
pub fn parse_ply<R: BufRead>(reader: &mut R) -> IoResult<RawGeometry> {
    // Generic element parser - vertex and face layouts vary between exporters
    let parser = Parser::<DefaultElement>::new();

    let header = parser
        .read_header(reader)
        .map_err(|e| IoError::invalid_content(format!("failed to parse PLY header: {e}")))?;

    let payload = parser
        .read_payload(reader, &header)
        .map_err(|e| IoError::invalid_content(format!("failed to read PLY payload: {e}")))?;

    let mut geometry = RawGeometry::new();

    if let Some(vertex_elements) = payload.get("vertex") {
        geometry.positions.reserve(vertex_elements.len());
        for (i, element) in vertex_elements.iter().enumerate() {
            let coord = |key: &str| {
                scalar_property(element, key).ok_or_else(|| {
                    IoError::invalid_content(format!("vertex {i} has no numeric '{key}' property"))
                })
            };
            geometry
                .positions
                .push(Point3::new(coord("x")?, coord("y")?, coord("z")?));
        }
    }

    let mut skipped_faces = 0_usize;
    if let Some(face_elements) = payload.get("face") {
        geometry.triangles.reserve(face_elements.len());
        let mut polygon = Vec::with_capacity(4);
        for element in face_elements {
            index_list(element, &mut polygon)?;
            if polygon.len() < 3 {
                skipped_faces += 1;
                continue;
            }
            fan_triangulate(&polygon, &mut geometry.triangles);
        }
    }

    debug!(
        encoding = ?header.encoding,
        skipped_faces,
        "Parsed PLY payload"
    );

    check_indices(&geometry)?;
    Ok(geometry)
}

/// Read a scalar property of any numeric type as `f64`.
fn scalar_property(element: &DefaultElement, key: &str) -> Option<f64> {
    match element.get(key)? {
        Property::Char(v) => Some(f64::from(*v)),
        Property::UChar(v) => Some(f64::from(*v)),
        Property::Short(v) => Some(f64::from(*v)),
        Property::UShort(v) => Some(f64::from(*v)),
        Property::Int(v) => Some(f64::from(*v)),
        Property::UInt(v) => Some(f64::from(*v)),
        Property::Float(v) => Some(f64::from(*v)),
        Property::Double(v) => Some(*v),
        _ => None,
    }
}

/// Extract the face index list into `out`, leaving it empty if absent.
fn index_list(element: &DefaultElement, out: &mut Vec<u32>) -> IoResult<()> {
    out.clear();
    for key in FACE_INDEX_KEYS {
        let Some(prop) = element.get(key) else {
            continue;
        };
        match prop {
            Property::ListChar(v) => push_signed(v.iter().map(|&i| i64::from(i)), out)?,
            Property::ListShort(v) => push_signed(v.iter().map(|&i| i64::from(i)), out)?,
            Property::ListInt(v) => push_signed(v.iter().map(|&i| i64::from(i)), out)?,
            Property::ListUChar(v) => out.extend(v.iter().map(|&i| u32::from(i))),
            Property::ListUShort(v) => out.extend(v.iter().map(|&i| u32::from(i))),
            Property::ListUInt(v) => out.extend(v.iter().copied()),
            _ => continue,
        }
        return Ok(());
    }
    Ok(())
}

fn push_signed(values: impl Iterator<Item = i64>, out: &mut Vec<u32>) -> IoResult<()> {
    for value in values {
        let index = u32::try_from(value)
            .map_err(|_| IoError::invalid_content(format!("negative face index {value}")))?;
        out.push(index);
    }
    Ok(())
}
