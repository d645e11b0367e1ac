use anyhow::Result;
use std::path::PathBuf;

use crate::loaders::load_gltf_mesh;
use crate::mesh::{self, MeshData};

/// Mesh shown in the viewer; selectable from the CLI and the UI combo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum MeshKind {
    Sphere,
    Cube,
    Torus,
}

impl MeshKind {
    pub const ALL: [MeshKind; 3] = [MeshKind::Sphere, MeshKind::Cube, MeshKind::Torus];

    pub fn label(&self) -> &'static str {
        match self {
            MeshKind::Sphere => "Sphere",
            MeshKind::Cube => "Cube",
            MeshKind::Torus => "Torus",
        }
    }

    pub fn build(&self) -> MeshData {
        match self {
            MeshKind::Sphere => mesh::sphere(1.0, 64, 32),
            MeshKind::Cube => mesh::cube(0.8),
            MeshKind::Torus => mesh::torus(0.8, 0.35, 64, 32),
        }
    }
}

/// Which mesh the viewer currently shows.
#[derive(Debug, Clone, PartialEq)]
pub enum MeshSelection {
    Builtin(MeshKind),
    Gltf(PathBuf),
}

impl MeshSelection {
    pub fn label(&self) -> String {
        match self {
            MeshSelection::Builtin(kind) => kind.label().to_string(),
            MeshSelection::Gltf(path) => path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| "glTF".to_string()),
        }
    }

    pub fn load(&self) -> Result<MeshData> {
        match self {
            MeshSelection::Builtin(kind) => Ok(kind.build()),
            MeshSelection::Gltf(path) => load_gltf_mesh(path),
        }
    }
}
