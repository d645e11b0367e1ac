use glam::{Mat4, Vec3};

use crate::material::{LightParams, MaterialParams, Ndf};

/// Per-frame uniform block shared by both pipelines.
///
/// Field order and padding must match the `Frame` struct in
/// `shaders/brdf.wgsl` (vec3 fields padded out to 16 bytes).
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct FrameUniform {
    pub view_proj: [[f32; 4]; 4],
    pub eye: [f32; 3],
    pub time: f32,
    pub light_pos: [f32; 3],
    pub light_power: f32,
    pub base_color: [f32; 3],
    pub light_animate: f32,
    /// roughness, roughness_x, roughness_y, reflectance
    pub params0: [f32; 4],
    /// use_ggx, anisotropic, antialiasing, metallic
    pub params1: [f32; 4],
}

impl FrameUniform {
    pub fn new(
        view_proj: Mat4,
        eye: Vec3,
        time: f32,
        material: &MaterialParams,
        light: &LightParams,
    ) -> Self {
        Self {
            view_proj: view_proj.to_cols_array_2d(),
            eye: eye.to_array(),
            time,
            light_pos: light.position.to_array(),
            light_power: light.power,
            base_color: material.base_color,
            light_animate: light.animate as u32 as f32,
            params0: [
                material.roughness,
                material.roughness_aniso[0],
                material.roughness_aniso[1],
                material.reflectance,
            ],
            params1: [
                (material.ndf == Ndf::Ggx) as u32 as f32,
                material.anisotropic as u32 as f32,
                material.antialiasing as u32 as f32,
                material.metallic as u32 as f32,
            ],
        }
    }
}

/// Per-draw uniform block: object transform plus a flat color used by the
/// unlit pipeline.
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ModelUniform {
    pub model: [[f32; 4]; 4],
    pub color: [f32; 4],
}

impl ModelUniform {
    pub fn new(model: Mat4, color: [f32; 4]) -> Self {
        Self {
            model: model.to_cols_array_2d(),
            color,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_uniform_packs_material_flags() {
        let mut material = MaterialParams::default();
        material.ndf = Ndf::Beckmann;
        material.antialiasing = true;
        let light = LightParams::default();

        let uniform = FrameUniform::new(Mat4::IDENTITY, Vec3::ZERO, 0.0, &material, &light);

        assert_eq!(uniform.params1[0], 0.0, "Beckmann should clear the GGX flag");
        assert_eq!(uniform.params1[2], 1.0, "antialiasing flag should be set");
        assert_eq!(uniform.light_power, 8.0);
    }

    #[test]
    fn frame_uniform_size_is_vec4_aligned() {
        assert_eq!(std::mem::size_of::<FrameUniform>() % 16, 0);
        assert_eq!(std::mem::size_of::<ModelUniform>() % 16, 0);
    }
}
