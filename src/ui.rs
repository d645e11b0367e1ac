use crate::material::{LightParams, MaterialParams, Ndf};
use crate::scene::MeshKind;

/// Actions requested through the settings UI this frame.
#[derive(Debug, Default)]
pub struct UiResponse {
    pub selected_mesh: Option<MeshKind>,
    pub reset_camera: bool,
    pub save_preset: bool,
}

/// Builds the settings overlay: material and light controls plus the mesh
/// picker.
pub fn settings_windows(
    ctx: &egui::Context,
    material: &mut MaterialParams,
    light: &mut LightParams,
    mesh_label: &str,
    fps: f32,
) -> UiResponse {
    let mut response = UiResponse::default();

    egui::Window::new("Settings")
        .default_pos(egui::pos2(10.0, 10.0))
        .default_width(300.0)
        .show(ctx, |ui| {
            ui.label(format!("{fps:.0} FPS"));
            ui.separator();

            ui.heading("Material");
            let ggx = material.ndf == Ndf::Ggx;
            let mut ggx_checked = ggx;
            ui.checkbox(&mut ggx_checked, "NDF (checked = GGX, unchecked = Beckmann)");
            if ggx_checked != ggx {
                material.ndf = if ggx_checked { Ndf::Ggx } else { Ndf::Beckmann };
            }
            ui.checkbox(&mut material.anisotropic, "Anisotropic");
            ui.checkbox(&mut material.antialiasing, "Specular antialiasing");

            if material.anisotropic {
                ui.add(
                    egui::Slider::new(&mut material.roughness_aniso[0], 0.01..=0.9)
                        .text("Roughness X"),
                );
                ui.add(
                    egui::Slider::new(&mut material.roughness_aniso[1], 0.01..=0.9)
                        .text("Roughness Y"),
                );
            } else {
                ui.add(egui::Slider::new(&mut material.roughness, 0.01..=0.9).text("Roughness"));
            }
            ui.add(egui::Slider::new(&mut material.reflectance, 0.3..=1.0).text("Reflectance"));
            ui.checkbox(&mut material.metallic, "Metallic");
            ui.horizontal(|ui| {
                ui.color_edit_button_rgb(&mut material.base_color);
                ui.label("Base color");
            });

            ui.separator();
            ui.heading("Light");
            ui.add(egui::Slider::new(&mut light.power, 0.0..=100.0).text("Power"));
            ui.checkbox(&mut light.animate, "Animate light");
            ui.add(egui::Slider::new(&mut light.position.x, -5.0..=5.0).text("Position X"));
            ui.add(egui::Slider::new(&mut light.position.y, -5.0..=5.0).text("Position Y"));
            ui.add(egui::Slider::new(&mut light.position.z, -5.0..=5.0).text("Position Z"));

            ui.separator();
            ui.horizontal(|ui| {
                if ui.button("Reset camera").clicked() {
                    response.reset_camera = true;
                }
                if ui.button("Save preset").clicked() {
                    response.save_preset = true;
                }
            });
        });

    egui::Window::new("Mesh")
        .default_pos(egui::pos2(10.0, 420.0))
        .show(ctx, |ui| {
            egui::ComboBox::from_label("Mesh")
                .selected_text(mesh_label.to_string())
                .show_ui(ui, |ui| {
                    for kind in MeshKind::ALL {
                        if ui
                            .selectable_label(mesh_label == kind.label(), kind.label())
                            .clicked()
                        {
                            response.selected_mesh = Some(kind);
                        }
                    }
                });
        });

    response
}
