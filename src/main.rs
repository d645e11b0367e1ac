use anyhow::Result;
use clap::Parser;
use std::sync::Arc;
use winit::{
    application::ApplicationHandler,
    event::*,
    event_loop::{ActiveEventLoop, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowId},
};

use brdf_viewer::camera::OrbitCamera;
use brdf_viewer::cli::Cli;
use brdf_viewer::clock::Clock;
use brdf_viewer::material::{LightParams, MaterialParams, Preset};
use brdf_viewer::mouse::MouseTracker;
use brdf_viewer::renderer::Renderer;
use brdf_viewer::scene::MeshSelection;

const FPS_UPDATE_INTERVAL: f32 = 1.0;
const SCROLL_DOLLY_SCALE: f32 = 0.05;

struct App {
    cli: Cli,
    window: Option<Arc<Window>>,
    renderer: Option<Renderer>,
    camera: OrbitCamera,
    mouse: MouseTracker,
    cursor: (f32, f32),
    scroll_ticks: i32,
    left_down: bool,
    right_down: bool,
    material: MaterialParams,
    light: LightParams,
    selection: MeshSelection,
    clock: Clock,
    frame_count: u32,
    fps: f32,
    fps_update_timer: f32,
}

impl App {
    fn new(cli: Cli) -> Result<Self> {
        let (material, light) = match &cli.preset {
            Some(path) => {
                let preset = Preset::load(path)?;
                (preset.material, preset.light)
            }
            None => (MaterialParams::default(), LightParams::default()),
        };

        let selection = match &cli.gltf {
            Some(path) => MeshSelection::Gltf(path.clone()),
            None => MeshSelection::Builtin(cli.mesh),
        };

        Ok(Self {
            cli,
            window: None,
            renderer: None,
            camera: OrbitCamera::new(),
            mouse: MouseTracker::new(),
            cursor: (0.0, 0.0),
            scroll_ticks: 0,
            left_down: false,
            right_down: false,
            material,
            light,
            selection,
            clock: Clock::new(),
            frame_count: 0,
            fps: 0.0,
            fps_update_timer: 0.0,
        })
    }

    fn update_fps(&mut self, delta: f32) {
        self.frame_count += 1;
        self.fps_update_timer += delta;

        if self.fps_update_timer >= FPS_UPDATE_INTERVAL {
            self.fps = self.frame_count as f32 / self.fps_update_timer;
            self.frame_count = 0;
            self.fps_update_timer = 0.0;
        }
    }

    fn redraw(&mut self) {
        let delta = self.clock.tick();
        self.update_fps(delta);

        let (Some(renderer), Some(window)) = (&mut self.renderer, &self.window) else {
            return;
        };

        let over_ui = renderer.wants_pointer();
        let size = renderer.size();
        let time = self.clock.elapsed();
        let mesh_label = self.selection.label();

        // Left drag orbits, right drag dollies, scroll dollies in fixed
        // steps; camera input is skipped while the pointer is over the UI.
        let camera = &mut self.camera;
        let mouse = &mut self.mouse;
        mouse.update(
            self.cursor.0,
            self.cursor.1,
            self.scroll_ticks,
            size.width,
            size.height,
        );
        if !over_ui {
            if self.left_down {
                camera.orbit(mouse.dx, mouse.dy);
            } else if self.right_down {
                camera.dolly(mouse.dx + mouse.dy);
            } else if mouse.scroll != 0 {
                camera.dolly(mouse.scroll as f32 * SCROLL_DOLLY_SCALE);
            }
        }
        camera.update(delta);

        let response = match renderer.render(
            window,
            camera,
            &mut self.material,
            &mut self.light,
            &mesh_label,
            time,
            self.fps,
        ) {
            Ok(response) => response,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                renderer.reconfigure();
                return;
            }
            Err(e) => {
                log::error!("Render error: {}", e);
                return;
            }
        };

        if response.reset_camera {
            self.camera.reset();
        }
        if response.save_preset {
            let path = self
                .cli
                .preset
                .clone()
                .unwrap_or_else(|| "preset.json".into());
            let preset = Preset {
                material: self.material.clone(),
                light: self.light.clone(),
            };
            match preset.save(&path) {
                Ok(()) => log::info!("Saved preset to {:?}", path),
                Err(e) => log::error!("Failed to save preset: {:#}", e),
            }
        }
        if let Some(kind) = response.selected_mesh {
            let new_selection = MeshSelection::Builtin(kind);
            if new_selection != self.selection {
                match new_selection.load() {
                    Ok(data) => {
                        renderer.set_mesh(&data, kind.label());
                        self.selection = new_selection;
                    }
                    Err(e) => log::error!("Failed to build mesh: {:#}", e),
                }
            }
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            let window = match event_loop.create_window(
                Window::default_attributes()
                    .with_title("BRDF Viewer")
                    .with_inner_size(winit::dpi::LogicalSize::new(
                        self.cli.width,
                        self.cli.height,
                    )),
            ) {
                Ok(w) => Arc::new(w),
                Err(e) => {
                    log::error!("Failed to create window: {}", e);
                    event_loop.exit();
                    return;
                }
            };

            let mesh_data = match self.selection.load() {
                Ok(data) => data,
                Err(e) => {
                    log::error!("Failed to load mesh: {:#}", e);
                    event_loop.exit();
                    return;
                }
            };

            let renderer = match pollster::block_on(Renderer::new(window.clone(), &mesh_data)) {
                Ok(r) => r,
                Err(e) => {
                    log::error!("Failed to initialize renderer: {:#}", e);
                    event_loop.exit();
                    return;
                }
            };

            self.window = Some(window);
            self.renderer = Some(renderer);
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        // Let egui handle the event first
        if let (Some(renderer), Some(window)) = (&mut self.renderer, &self.window) {
            if renderer.handle_event(window, &event) {
                return;
            }
        }

        match event {
            WindowEvent::CloseRequested
            | WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        state: ElementState::Pressed,
                        physical_key: PhysicalKey::Code(KeyCode::Escape),
                        ..
                    },
                ..
            } => event_loop.exit(),
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        state: ElementState::Pressed,
                        physical_key: PhysicalKey::Code(KeyCode::KeyR),
                        ..
                    },
                ..
            } => self.camera.reset(),
            WindowEvent::CursorMoved { position, .. } => {
                self.cursor = (position.x as f32, position.y as f32);
            }
            WindowEvent::MouseInput { state, button, .. } => {
                let pressed = state == ElementState::Pressed;
                match button {
                    MouseButton::Left => self.left_down = pressed,
                    MouseButton::Right => self.right_down = pressed,
                    _ => {}
                }
            }
            WindowEvent::MouseWheel { delta, .. } => {
                self.scroll_ticks += match delta {
                    MouseScrollDelta::LineDelta(_, y) => y.round() as i32,
                    MouseScrollDelta::PixelDelta(pos) => (pos.y / 20.0).round() as i32,
                };
            }
            WindowEvent::Resized(new_size) => {
                if let Some(renderer) = &mut self.renderer {
                    renderer.resize(new_size);
                }
            }
            WindowEvent::RedrawRequested => self.redraw(),
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let event_loop = EventLoop::new()?;
    let mut app = App::new(cli)?;

    log::info!("Controls: left drag orbits, right drag dollies, scroll zooms, R resets, Escape quits");
    event_loop.run_app(&mut app)?;

    Ok(())
}
