use anyhow::{Context, Result};
use glam::Vec3;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Normal distribution function used by the microfacet BRDF.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Ndf {
    Ggx,
    Beckmann,
}

/// Material parameters mirrored into the shader uniform each frame.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MaterialParams {
    pub ndf: Ndf,
    pub anisotropic: bool,
    pub antialiasing: bool,
    pub roughness: f32,
    pub roughness_aniso: [f32; 2],
    pub reflectance: f32,
    pub metallic: bool,
    pub base_color: [f32; 3],
}

impl Default for MaterialParams {
    fn default() -> Self {
        Self {
            ndf: Ndf::Ggx,
            anisotropic: false,
            antialiasing: false,
            roughness: 0.5,
            roughness_aniso: [0.5, 0.5],
            reflectance: 0.5,
            metallic: false,
            base_color: [1.0, 0.0, 0.0],
        }
    }
}

/// Point light parameters. Unconstrained beyond being finite; the UI
/// clamps to its slider ranges but presets may carry anything.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LightParams {
    pub position: Vec3,
    pub power: f32,
    pub animate: bool,
}

impl Default for LightParams {
    fn default() -> Self {
        Self {
            position: Vec3::new(0.0, 0.0, -2.0),
            power: 8.0,
            animate: false,
        }
    }
}

/// Material + light state saved and restored as a JSON preset.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Preset {
    pub material: MaterialParams,
    pub light: LightParams,
}

impl Preset {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let data = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read preset {:?}", path))?;
        serde_json::from_str(&data).with_context(|| format!("Failed to parse preset {:?}", path))
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let data = serde_json::to_string_pretty(self)?;
        std::fs::write(path, data).with_context(|| format!("Failed to write preset {:?}", path))
    }
}
