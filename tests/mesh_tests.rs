use glam::Vec3;

use brdf_viewer::mesh::{cube, sphere, torus, MeshData};

fn assert_indices_in_bounds(mesh: &MeshData) {
    let count = mesh.vertices.len() as u32;
    for &index in &mesh.indices {
        assert!(index < count, "index {} out of bounds ({})", index, count);
    }
    assert_eq!(mesh.indices.len() % 3, 0, "indices must form whole triangles");
}

fn assert_unit_normals(mesh: &MeshData) {
    for v in &mesh.vertices {
        let len = Vec3::from_array(v.normal).length();
        assert!(
            (len - 1.0).abs() < 1e-4,
            "normal {:?} is not unit length",
            v.normal
        );
    }
}

#[test]
fn test_sphere_topology() {
    let mesh = sphere(1.0, 64, 32);
    assert_indices_in_bounds(&mesh);
    assert_unit_normals(&mesh);

    for v in &mesh.vertices {
        let r = Vec3::from_array(v.position).length();
        assert!((r - 1.0).abs() < 1e-4, "vertex off the unit sphere: {}", r);
    }
}

#[test]
fn test_sphere_normals_point_outward() {
    let mesh = sphere(2.0, 16, 8);
    for v in &mesh.vertices {
        let p = Vec3::from_array(v.position);
        let n = Vec3::from_array(v.normal);
        if p.length() > 1e-3 {
            assert!(p.normalize().dot(n) > 0.99);
        }
    }
}

#[test]
fn test_cube_topology() {
    let mesh = cube(0.8);
    assert_indices_in_bounds(&mesh);
    assert_unit_normals(&mesh);
    assert_eq!(mesh.vertices.len(), 24, "flat-shaded cube has 4 verts per face");
    assert_eq!(mesh.indices.len(), 36);

    for v in &mesh.vertices {
        for c in v.position {
            assert!((c.abs() - 0.8).abs() < 1e-5, "cube corner off the surface");
        }
    }
}

#[test]
fn test_torus_topology() {
    let mesh = torus(0.8, 0.35, 48, 24);
    assert_indices_in_bounds(&mesh);
    assert_unit_normals(&mesh);

    // Every vertex sits at minor-radius distance from the ring centerline.
    for v in &mesh.vertices {
        let p = Vec3::from_array(v.position);
        let ring = Vec3::new(p.x, 0.0, p.z).normalize_or_zero() * 0.8;
        let d = (p - ring).length();
        assert!((d - 0.35).abs() < 1e-4, "vertex off the torus surface: {}", d);
    }
}

#[test]
fn test_fit_to_recenters_and_scales() {
    let mut mesh = cube(3.0);
    for v in &mut mesh.vertices {
        v.position[0] += 10.0;
    }

    mesh.fit_to(2.0);

    let mut min = Vec3::splat(f32::MAX);
    let mut max = Vec3::splat(f32::MIN);
    for v in &mesh.vertices {
        let p = Vec3::from_array(v.position);
        min = min.min(p);
        max = max.max(p);
    }
    let center = (min + max) * 0.5;
    assert!(center.length() < 1e-4, "mesh not recentered: {:?}", center);
    assert!(((max - min).max_element() - 2.0).abs() < 1e-4);
}
