// cli.rs - Command-line interface configuration
use clap::Parser;
use std::path::PathBuf;

use crate::scene::MeshKind;

#[derive(Parser, Debug, Clone)]
#[command(name = "brdf-viewer")]
#[command(about = "Microfacet BRDF viewer with specular antialiasing", long_about = None)]
pub struct Cli {
    /// Built-in mesh to show
    #[arg(long, value_enum, default_value = "sphere")]
    pub mesh: MeshKind,

    /// Load a glTF file instead of a built-in mesh
    #[arg(long)]
    pub gltf: Option<PathBuf>,

    /// Material/light preset (JSON) to load at startup
    #[arg(long)]
    pub preset: Option<PathBuf>,

    /// Initial window width
    #[arg(long, default_value = "1280")]
    pub width: u32,

    /// Initial window height
    #[arg(long, default_value = "720")]
    pub height: u32,
}
