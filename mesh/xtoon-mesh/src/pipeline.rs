//! The load pipeline: read, normalize, compute normals, synthesize, pack.

use std::path::Path;

use tracing::{debug, info};
use xtoon_io::read_detected;
use xtoon_normals::{compute_vertex_normals, degenerate_triangle_count, synthesize};
use xtoon_transform::normalize_positions;
use xtoon_types::{Mesh, Point3, RawGeometry, Vector3};

use crate::error::{MeshError, MeshResult};
use crate::pack::{pack, unit_scale};
use crate::params::LoadParams;
use crate::result::LoadResult;

/// Load a model file and build its render mesh.
///
/// The reader is picked from the file extension. An unrecognized extension
/// returns an empty [`Mesh`], which callers should treat as "nothing to
/// draw".
///
/// # Errors
///
/// Returns an error if the file cannot be read or its content is malformed.
///
/// # Example
///
/// ```no_run
/// use xtoon_mesh::{AbstractionMode, LoadParams, load_mesh};
///
/// let params = LoadParams::new().with_mode(AbstractionMode::Ellipse);
/// let mesh = load_mesh("bunny.ply", &params).unwrap();
/// println!("{} vertices", mesh.vertex_count());
/// ```
pub fn load_mesh<P: AsRef<Path>>(path: P, params: &LoadParams) -> MeshResult<Mesh> {
    load_mesh_with_report(path, params).map(|result| result.mesh)
}

/// Load a model file and return the mesh together with load statistics.
///
/// # Errors
///
/// Returns an error if the file cannot be read or its content is malformed.
pub fn load_mesh_with_report<P: AsRef<Path>>(
    path: P,
    params: &LoadParams,
) -> MeshResult<LoadResult> {
    let path = path.as_ref();

    let (format, geometry) = read_detected(path)?;
    if format.is_none() {
        return Ok(LoadResult::empty(None, params.mode));
    }

    let mut result = build_mesh(&geometry, params)?;
    result.format = format;

    info!(path = %path.display(), "{result}");
    Ok(result)
}

/// Run the geometry stages on positions and triangles already in memory.
///
/// Geometry without positions or without triangles yields an empty mesh.
///
/// Normals are computed on positions already brought to a unit diagonal, so
/// the output does not depend on the scale of the source model.
///
/// # Errors
///
/// Returns [`MeshError::IndexOutOfRange`] if a triangle addresses a missing
/// position.
///
/// # Example
///
/// ```
/// use xtoon_mesh::{AbstractionMode, LoadParams, build_mesh};
/// use xtoon_types::unit_cube;
///
/// let params = LoadParams::new().with_mode(AbstractionMode::Sphere);
/// let result = build_mesh(&unit_cube(), &params).unwrap();
///
/// assert_eq!(result.mesh.vertex_count(), 8);
/// assert_eq!(result.mesh.triangle_count(), 12);
/// ```
pub fn build_mesh(geometry: &RawGeometry, params: &LoadParams) -> MeshResult<LoadResult> {
    if let Some(index) = geometry.first_invalid_index() {
        return Err(MeshError::IndexOutOfRange {
            index,
            vertex_count: geometry.vertex_count(),
        });
    }

    let mut result = LoadResult::empty(None, params.mode);
    result.source_vertices = geometry.vertex_count();
    result.source_triangles = geometry.triangle_count();

    if geometry.is_empty() {
        debug!(
            vertices = result.source_vertices,
            triangles = result.source_triangles,
            "No drawable geometry, skipping pipeline"
        );
        return Ok(result);
    }

    let (positions, bounds) = normalize_positions(&geometry.positions, params.orientation());

    let scale = unit_scale(bounds.diagonal()).unwrap_or(1.0);
    let unit_positions: Vec<Point3<f64>> = positions.iter().map(|p| p * scale).collect();
    let unit_bounds = bounds.scaled(scale);

    let normals = compute_vertex_normals(&unit_positions, &geometry.triangles);
    result.degenerate_triangles =
        degenerate_triangle_count(&unit_positions, &geometry.triangles);
    result.zero_normal_vertices = normals.iter().filter(|n| **n == Vector3::zeros()).count();
    debug!(
        degenerate = result.degenerate_triangles,
        zero_normals = result.zero_normal_vertices,
        "Smooth normals ready"
    );

    let abstracted = synthesize(
        &unit_positions,
        &geometry.triangles,
        &normals,
        params.mode,
        &unit_bounds,
    );

    result.mesh = pack(
        &positions,
        &normals,
        &abstracted,
        &geometry.triangles,
        bounds.diagonal(),
    );
    result.bounds = bounds;

    Ok(result)
}
