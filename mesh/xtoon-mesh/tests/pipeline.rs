//! End-to-end tests of the load pipeline through real files.
//!
//! Run with: cargo test -p xtoon-mesh --test pipeline

#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use approx::assert_relative_eq;
use tempfile::TempDir;
use xtoon_mesh::{
    AbstractionMode, LoadParams, Mesh, MeshError, MeshFormat, RawGeometry, load_mesh,
    load_mesh_with_report,
};
use xtoon_types::{Point3, unit_cube};

// =============================================================================
// Fixtures
// =============================================================================

/// An irregular tetrahedron, so every axis has a distinct extent.
fn wedge() -> RawGeometry {
    RawGeometry::from_parts(
        vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(2.0, 0.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
            Point3::new(0.0, 0.0, 3.0),
        ],
        vec![[0, 2, 1], [0, 1, 3], [0, 3, 2], [1, 2, 3]],
    )
}

/// UV sphere of radius 1 with consistent outward winding.
fn uv_sphere(stacks: u32, slices: u32) -> RawGeometry {
    let mut geometry = RawGeometry::new();
    geometry.positions.push(Point3::new(0.0, 1.0, 0.0));
    for i in 1..stacks {
        let theta = std::f64::consts::PI * f64::from(i) / f64::from(stacks);
        for j in 0..slices {
            let phi = std::f64::consts::TAU * f64::from(j) / f64::from(slices);
            geometry.positions.push(Point3::new(
                theta.sin() * phi.cos(),
                theta.cos(),
                theta.sin() * phi.sin(),
            ));
        }
    }
    let south = u32::try_from(geometry.positions.len()).unwrap();
    geometry.positions.push(Point3::new(0.0, -1.0, 0.0));

    let ring = |i: u32, j: u32| 1 + (i - 1) * slices + j % slices;
    for j in 0..slices {
        geometry.triangles.push([0, ring(1, j + 1), ring(1, j)]);
    }
    for i in 1..stacks - 1 {
        for j in 0..slices {
            let (a, b) = (ring(i, j), ring(i, j + 1));
            let (c, d) = (ring(i + 1, j), ring(i + 1, j + 1));
            geometry.triangles.push([a, b, d]);
            geometry.triangles.push([a, d, c]);
        }
    }
    for j in 0..slices {
        geometry
            .triangles
            .push([ring(stacks - 1, j), ring(stacks - 1, j + 1), south]);
    }
    geometry
}

fn obj_text(geometry: &RawGeometry) -> String {
    let mut text = String::from("# generated\n");
    for p in &geometry.positions {
        writeln!(text, "v {} {} {}", p.x, p.y, p.z).unwrap();
    }
    for [a, b, c] in &geometry.triangles {
        writeln!(text, "f {} {} {}", a + 1, b + 1, c + 1).unwrap();
    }
    text
}

fn ply_text(geometry: &RawGeometry) -> String {
    let mut text = format!(
        "ply\nformat ascii 1.0\n\
         element vertex {}\nproperty float x\nproperty float y\nproperty float z\n\
         element face {}\nproperty list uchar int vertex_indices\nend_header\n",
        geometry.vertex_count(),
        geometry.triangle_count()
    );
    for p in &geometry.positions {
        writeln!(text, "{} {} {}", p.x, p.y, p.z).unwrap();
    }
    for [a, b, c] in &geometry.triangles {
        writeln!(text, "3 {a} {b} {c}").unwrap();
    }
    text
}

fn write_file(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, contents).unwrap();
    path
}

fn write_obj(dir: &TempDir, name: &str, geometry: &RawGeometry) -> PathBuf {
    write_file(dir, name, &obj_text(geometry))
}

fn map_positions(geometry: &RawGeometry, f: impl Fn(&Point3<f64>) -> Point3<f64>) -> RawGeometry {
    RawGeometry::from_parts(
        geometry.positions.iter().map(f).collect(),
        geometry.triangles.clone(),
    )
}

fn assert_meshes_close(a: &Mesh, b: &Mesh, epsilon: f32) {
    assert_eq!(a.indices, b.indices);
    assert_eq!(a.vertex_count(), b.vertex_count());
    for (va, vb) in a.vertices.iter().zip(&b.vertices) {
        for k in 0..3 {
            assert_relative_eq!(va.position[k], vb.position[k], epsilon = epsilon);
            assert_relative_eq!(va.normal[k], vb.normal[k], epsilon = epsilon);
            assert_relative_eq!(
                va.abstracted_normal[k],
                vb.abstracted_normal[k],
                epsilon = epsilon
            );
        }
    }
}

fn length(v: [f32; 3]) -> f32 {
    (v[0] * v[0] + v[1] * v[1] + v[2] * v[2]).sqrt()
}

fn load(path: &Path, params: &LoadParams) -> Mesh {
    load_mesh(path, params).unwrap()
}

// =============================================================================
// Pipeline properties
// =============================================================================

#[test]
fn output_is_centered_with_unit_diagonal() {
    let dir = TempDir::new().unwrap();
    let shifted = map_positions(&wedge(), |p| Point3::new(p.x + 40.0, p.y - 7.0, p.z));
    let path = write_obj(&dir, "wedge.obj", &shifted);

    let mesh = load(&path, &LoadParams::default());

    let points: Vec<Point3<f64>> = mesh
        .vertices
        .iter()
        .map(|v| Point3::from(v.position.map(f64::from)))
        .collect();
    let bounds = xtoon_types::Aabb::from_points(&points);
    assert_relative_eq!(bounds.diagonal(), 1.0, epsilon = 1e-6);
    assert_relative_eq!(bounds.center().coords.norm(), 0.0, epsilon = 1e-6);
}

#[test]
fn scale_and_translation_do_not_change_output() {
    let dir = TempDir::new().unwrap();
    let original = write_obj(&dir, "a.obj", &wedge());
    let moved = write_obj(
        &dir,
        "b.obj",
        &map_positions(&wedge(), |p| {
            Point3::new(p.x * 7.5 + 100.0, p.y * 7.5 - 3.0, p.z * 7.5 + 2.0)
        }),
    );

    for mode in AbstractionMode::ALL {
        let params = LoadParams::new().with_mode(mode);
        assert_meshes_close(&load(&original, &params), &load(&moved, &params), 1e-5);
    }
}

#[test]
fn reloading_packed_output_is_stable() {
    let dir = TempDir::new().unwrap();
    let first = load(&write_obj(&dir, "first.obj", &wedge()), &LoadParams::default());

    let repacked = RawGeometry::from_parts(
        first
            .vertices
            .iter()
            .map(|v| Point3::from(v.position.map(f64::from)))
            .collect(),
        first.triangles().collect(),
    );
    let second = load(&write_obj(&dir, "second.obj", &repacked), &LoadParams::default());

    assert_meshes_close(&first, &second, 1e-6);
}

#[test]
fn orientation_flags_undo_source_axes() {
    let dir = TempDir::new().unwrap();
    let canonical = load(&write_obj(&dir, "canonical.obj", &wedge()), &LoadParams::default());

    // Source stored as (x, z, y): Z is up, X is front
    let z_up = map_positions(&wedge(), |p| Point3::new(p.x, p.z, p.y));
    let z_up = write_obj(&dir, "z_up.obj", &z_up);
    let params = LoadParams::new().with_y_up(false);
    assert_meshes_close(&canonical, &load(&z_up, &params), 1e-6);

    // Source stored as (z, y, x): Y is up, the other horizontal axis is front
    let z_front = map_positions(&wedge(), |p| Point3::new(p.z, p.y, p.x));
    let z_front = write_obj(&dir, "z_front.obj", &z_front);
    let params = LoadParams::new().with_x_front(false);
    assert_meshes_close(&canonical, &load(&z_front, &params), 1e-6);

    // Source stored as (z, x, y): Z is up, Y is front
    let both = map_positions(&wedge(), |p| Point3::new(p.z, p.x, p.y));
    let both = write_obj(&dir, "both.obj", &both);
    let params = LoadParams::new().with_y_up(false).with_x_front(false);
    assert_meshes_close(&canonical, &load(&both, &params), 1e-6);
}

#[test]
fn shape_modes_see_the_remapped_box() {
    let dir = TempDir::new().unwrap();
    // Tall along canonical Y; a Z-up exporter stores that height in Z
    let tall = map_positions(&unit_cube(), |p| Point3::new(p.x * 2.0, p.y * 4.0, p.z));
    let canonical = write_obj(&dir, "tall.obj", &tall);
    let z_up = map_positions(&tall, |p| Point3::new(p.x, p.z, p.y));
    let z_up = write_obj(&dir, "tall_z_up.obj", &z_up);

    for mode in [AbstractionMode::Cylinder, AbstractionMode::Ellipse] {
        let expected = load(&canonical, &LoadParams::new().with_mode(mode));
        let remapped = load(&z_up, &LoadParams::new().with_y_up(false).with_mode(mode));
        assert_meshes_close(&expected, &remapped, 1e-6);

        for vertex in &remapped.vertices {
            // Canonical Y is the tallest extent in both loads
            assert!(vertex.position[1].abs() > vertex.position[2].abs());
            assert_relative_eq!(length(vertex.abstracted_normal), 1.0, epsilon = 1e-5);
            if mode == AbstractionMode::Cylinder {
                assert_relative_eq!(vertex.abstracted_normal[1], 0.0);
            } else {
                // The ellipse leans toward the long axis
                let n = vertex.abstracted_normal;
                assert!(n[1].abs() > n[0].abs() && n[0].abs() > n[2].abs());
            }
        }
    }
}

#[test]
fn vertex_and_index_counts_are_preserved() {
    let dir = TempDir::new().unwrap();
    let sphere = uv_sphere(6, 10);
    let path = write_obj(&dir, "sphere.obj", &sphere);

    let result = load_mesh_with_report(&path, &LoadParams::default()).unwrap();

    assert_eq!(result.format, Some(MeshFormat::Obj));
    assert_eq!(result.source_vertices, sphere.vertex_count());
    assert_eq!(result.mesh.vertex_count(), sphere.vertex_count());
    assert_eq!(result.mesh.indices, sphere.flat_indices());
    assert!(result.mesh.indices.iter().all(|&i| (i as usize) < result.mesh.vertex_count()));
}

#[test]
fn sphere_normals_are_unit_in_every_mode() {
    let dir = TempDir::new().unwrap();
    let path = write_obj(&dir, "sphere.obj", &uv_sphere(7, 12));

    for mode in AbstractionMode::ALL {
        let mesh = load(&path, &LoadParams::new().with_mode(mode));
        let last = mesh.vertex_count() - 1;
        for (i, vertex) in mesh.vertices.iter().enumerate() {
            assert!((length(vertex.normal) - 1.0).abs() < 1e-4, "{mode}");
            if mode == AbstractionMode::Cylinder && (i == 0 || i == last) {
                // The poles sit on the long axis
                assert_eq!(vertex.abstracted_normal, [0.0, 0.0, 0.0]);
            } else {
                assert!((length(vertex.abstracted_normal) - 1.0).abs() < 1e-4, "{mode}");
            }
        }
    }
}

#[test]
fn sphere_mode_on_cube_points_at_corners() {
    let dir = TempDir::new().unwrap();
    let path = write_obj(&dir, "cube.obj", &unit_cube());
    let mesh = load(&path, &LoadParams::new().with_mode(AbstractionMode::Sphere));

    let expected = 1.0 / 3.0_f32.sqrt();
    for vertex in &mesh.vertices {
        for k in 0..3 {
            let sign = vertex.position[k].signum();
            assert_relative_eq!(vertex.abstracted_normal[k], sign * expected, epsilon = 1e-5);
            // Face diagonals weight the smooth normals unevenly, but they
            // still point out of the corner
            assert_eq!(vertex.normal[k].signum(), sign);
        }
    }
}

#[test]
fn cylinder_mode_flattens_long_axis() {
    let dir = TempDir::new().unwrap();
    // A tall box: Y spans 4, X and Z span 1
    let tall = map_positions(&unit_cube(), |p| Point3::new(p.x, p.y * 4.0, p.z));
    let path = write_obj(&dir, "tall.obj", &tall);

    let mesh = load(&path, &LoadParams::new().with_mode(AbstractionMode::Cylinder));

    for vertex in &mesh.vertices {
        assert_relative_eq!(vertex.abstracted_normal[1], 0.0);
        assert_relative_eq!(length(vertex.abstracted_normal), 1.0, epsilon = 1e-5);
    }
}

#[test]
fn ply_and_obj_agree() {
    let dir = TempDir::new().unwrap();
    let geometry = uv_sphere(5, 7);
    let obj = write_obj(&dir, "s.obj", &geometry);
    let ply = write_file(&dir, "s.PLY", &ply_text(&geometry));

    let from_ply = load_mesh_with_report(&ply, &LoadParams::default()).unwrap();
    assert_eq!(from_ply.format, Some(MeshFormat::Ply));
    // PLY stores single precision coordinates
    assert_meshes_close(&load(&obj, &LoadParams::default()), &from_ply.mesh, 1e-5);
}

// =============================================================================
// Degenerate and failing input
// =============================================================================

#[test]
fn degenerate_triangles_produce_no_nan() {
    let dir = TempDir::new().unwrap();
    let text = "v 0 0 0\nv 1 0 0\nv 2 0 0\nv 0 1 0\nv 5 5 5\nf 1 2 3\nf 1 2 4\nf 1 1 1\n";
    let path = write_file(&dir, "bad.obj", text);

    for mode in AbstractionMode::ALL {
        let result = load_mesh_with_report(&path, &LoadParams::new().with_mode(mode)).unwrap();
        assert!(result.mesh.vertices.iter().all(|v| v.is_finite()), "{mode}");
        assert_eq!(result.degenerate_triangles, 2);
        // Vertex 5 is referenced by nothing
        assert!(result.zero_normal_vertices >= 1);
        assert_eq!(result.mesh.vertices[4].normal, [0.0, 0.0, 0.0]);
    }
}

#[test]
fn unknown_extension_gives_empty_mesh() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "model.stl", "solid nothing\nendsolid\n");

    let mesh = load(&path, &LoadParams::default());

    assert!(mesh.is_empty());
    assert!(mesh.vertex_bytes().is_empty());
}

#[test]
fn file_without_faces_gives_empty_mesh() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "points.obj", "v 0 0 0\nv 1 2 3\n");

    let result = load_mesh_with_report(&path, &LoadParams::default()).unwrap();

    assert!(result.is_empty());
    assert_eq!(result.source_vertices, 2);
}

#[test]
fn malformed_file_is_an_error() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "broken.obj", "v 0 0 zero\nf 1 2 3\n");

    let err = load_mesh(&path, &LoadParams::default()).unwrap_err();
    assert!(matches!(err, MeshError::Io(_)));
}

#[test]
fn out_of_range_face_is_an_error() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "short.obj", "v 0 0 0\nv 1 0 0\nv 0 1 0\nf 1 2 9\n");

    assert!(load_mesh(&path, &LoadParams::default()).is_err());
}

#[test]
fn missing_file_is_an_error() {
    let dir = TempDir::new().unwrap();
    let err = load_mesh(dir.path().join("absent.ply"), &LoadParams::default()).unwrap_err();
    assert!(format!("{err}").contains("absent.ply"));
}

#[test]
fn buffers_have_gpu_layout() {
    let dir = TempDir::new().unwrap();
    let mesh = load(&write_obj(&dir, "cube.obj", &unit_cube()), &LoadParams::default());

    assert_eq!(mesh.vertex_bytes().len(), 8 * 36);
    assert_eq!(mesh.index_bytes().len(), 36 * 4);
}
