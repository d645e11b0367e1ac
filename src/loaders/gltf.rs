use anyhow::{Context, Result};
use glam::{Mat4, Vec3};
use std::path::Path;

use crate::mesh::{MeshData, Vertex};

/// Loads every mesh primitive from a glTF file into a single indexed mesh,
/// normalized to fit the viewer's default framing.
pub fn load_gltf_mesh(path: impl AsRef<Path>) -> Result<MeshData> {
    let path = path.as_ref();
    log::info!("Loading glTF file: {:?}", path);

    let (gltf, buffers, _images) =
        gltf::import(path).with_context(|| format!("Failed to load glTF file: {:?}", path))?;

    let mut mesh = MeshData::default();
    for scene in gltf.scenes() {
        for node in scene.nodes() {
            process_node(&node, &buffers, &Mat4::IDENTITY, &mut mesh)?;
        }
    }

    anyhow::ensure!(
        !mesh.vertices.is_empty(),
        "No geometry found in glTF file {:?}",
        path
    );

    mesh.fit_to(2.0);
    log::info!(
        "Loaded {} vertices, {} triangles",
        mesh.vertices.len(),
        mesh.indices.len() / 3
    );
    Ok(mesh)
}

fn process_node(
    node: &gltf::Node,
    buffers: &[gltf::buffer::Data],
    parent_transform: &Mat4,
    mesh: &mut MeshData,
) -> Result<()> {
    let local = Mat4::from_cols_array_2d(&node.transform().matrix());
    let transform = *parent_transform * local;

    if let Some(gltf_mesh) = node.mesh() {
        for primitive in gltf_mesh.primitives() {
            append_primitive(&primitive, buffers, &transform, mesh)?;
        }
    }

    for child in node.children() {
        process_node(&child, buffers, &transform, mesh)?;
    }

    Ok(())
}

fn append_primitive(
    primitive: &gltf::Primitive,
    buffers: &[gltf::buffer::Data],
    transform: &Mat4,
    mesh: &mut MeshData,
) -> Result<()> {
    let reader = primitive.reader(|buffer| Some(&buffers[buffer.index()]));

    let positions: Vec<Vec3> = reader
        .read_positions()
        .context("Mesh primitive has no positions")?
        .map(|p| transform.transform_point3(Vec3::from_array(p)))
        .collect();

    // Normals are optional in glTF; fall back to radial normals, which read
    // fine on the kinds of convex test meshes this viewer is pointed at.
    let normals: Vec<Vec3> = match reader.read_normals() {
        Some(iter) => iter
            .map(|n| transform.transform_vector3(Vec3::from_array(n)).normalize_or_zero())
            .collect(),
        None => positions.iter().map(|p| p.normalize_or_zero()).collect(),
    };

    let base = mesh.vertices.len() as u32;
    for (position, normal) in positions.iter().zip(normals.iter()) {
        mesh.vertices.push(Vertex {
            position: position.to_array(),
            normal: normal.to_array(),
        });
    }

    match reader.read_indices() {
        Some(indices) => mesh.indices.extend(indices.into_u32().map(|i| base + i)),
        None => mesh.indices.extend(base..base + positions.len() as u32),
    }

    Ok(())
}
