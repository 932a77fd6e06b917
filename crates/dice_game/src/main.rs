//! Dice -- main loop and application entry point.
//!
//! Architecture: winit drives the event loop via `ApplicationHandler`. Pointer
//! events are queued into `InputState` as they arrive; all simulation runs
//! inside `RedrawRequested` using a **fixed-timestep** model (see `TimeState`):
//!
//!   1. `begin_frame()` -- measure wall-clock delta, feed accumulator
//!   2. `while should_step()` -- drain queued pointer events into
//!      `DiceState::update`, act on the returned effects (sound, logs)
//!   3. Rebuild the shape batch and labels from the current state
//!   4. Upload camera uniform, draw shapes, composite the egui label pass
//!
//! The roll sound is opened before the event loop exists, so a missing asset
//! aborts the program before any window is shown.

mod audio;
mod error;
#[cfg(test)]
mod replay;
mod scene;

use std::path::Path;
use std::sync::Arc;

use glam::Vec2;
use wgpu::util::DeviceExt;
use winit::application::ApplicationHandler;
use winit::event::{ElementState, MouseButton, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowId};

use audio::RollSound;
use dice_core::{
    DiceLayout, DiceState, FrameEffect, InputState, MouseBtn, RngRoller, RollTiming, TimeState,
};
use dice_overlay::LabelOverlay;
use dice_platform::PlatformConfig;
use dice_render::{GpuContext, MeshBuffers, ScreenCamera, ShapePipeline};
use error::StartupError;
use scene::build_frame_scene;

const ROLL_SOUND_PATH: &str = "assets/audio/roll_sound.wav";

/// All mutable game state. Constructed lazily in `ApplicationHandler::resumed`
/// once the window and GPU surface are available.
struct GameState {
    window: Arc<Window>,
    gpu: GpuContext,
    time: TimeState,
    input: InputState,
    camera: ScreenCamera,
    shape_pipeline: ShapePipeline,
    label_overlay: LabelOverlay,
    layout: DiceLayout,
    roller: RngRoller,
    // Always `Some` between frames; taken for the by-value update.
    dice: Option<DiceState>,

    mesh: MeshBuffers,
    camera_buffer: wgpu::Buffer,
    camera_bind_group: wgpu::BindGroup,
}

impl GameState {
    fn new(
        event_loop: &ActiveEventLoop,
        config: &PlatformConfig,
        layout: DiceLayout,
        timing: RollTiming,
    ) -> Result<Self, StartupError> {
        let window = dice_platform::create_window(event_loop, config)?;
        log::info!("Window created: {}x{}", config.width, config.height);

        let gpu = GpuContext::new(window.clone())?;
        let shape_pipeline = ShapePipeline::new(&gpu.device, gpu.surface_format);
        let label_overlay = LabelOverlay::new(&gpu.device, gpu.surface_format, &window);

        let logical = window.inner_size().to_logical::<f32>(window.scale_factor());
        let camera = ScreenCamera::new(logical.width, logical.height);
        let camera_buffer = gpu
            .device
            .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("Camera Uniform Buffer"),
                contents: bytemuck::cast_slice(&[camera.build_uniform()]),
                usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            });
        let camera_bind_group =
            shape_pipeline.create_camera_bind_group(&gpu.device, &camera_buffer);
        let mesh = MeshBuffers::new(&gpu.device);

        let dice = DiceState::new(&layout, timing);

        Ok(Self {
            window,
            gpu,
            time: TimeState::new(),
            input: InputState::new(),
            camera,
            shape_pipeline,
            label_overlay,
            layout,
            roller: RngRoller::from_entropy(),
            dice: Some(dice),
            mesh,
            camera_buffer,
            camera_bind_group,
        })
    }

    /// One fixed step of game logic over everything queued since the last one.
    fn step(&mut self) -> Vec<FrameEffect> {
        let events = self.input.drain();
        let Some(dice) = self.dice.take() else {
            return Vec::new();
        };
        let (dice, effects) = dice.update(events, &mut self.roller);
        self.dice = Some(dice);
        effects
    }

    fn logical_position(&self, position: winit::dpi::PhysicalPosition<f64>) -> Vec2 {
        let logical = position.to_logical::<f32>(self.window.scale_factor());
        Vec2::new(logical.x, logical.y)
    }

    fn render(&mut self) {
        let Some(dice) = &self.dice else {
            return;
        };
        let frame_scene = build_frame_scene(dice, &self.layout);
        self.mesh
            .upload(&self.gpu.device, &self.gpu.queue, &frame_scene.shapes);
        self.gpu.queue.write_buffer(
            &self.camera_buffer,
            0,
            bytemuck::cast_slice(&[self.camera.build_uniform()]),
        );

        let Some((output, view)) = self.gpu.begin_frame() else {
            return;
        };

        let (egui_primitives, egui_textures_delta) = self
            .label_overlay
            .prepare(&self.window, &frame_scene.labels);
        let screen_descriptor = egui_wgpu::ScreenDescriptor {
            size_in_pixels: [self.gpu.size.0, self.gpu.size.1],
            pixels_per_point: self.window.scale_factor() as f32,
        };

        let mut encoder = self
            .gpu
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Render Encoder"),
            });

        {
            let [r, g, b, a] = frame_scene.clear_color.to_linear_rgba();
            let clear_color = wgpu::Color {
                r: r as f64,
                g: g as f64,
                b: b as f64,
                a: a as f64,
            };
            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Shape Render Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(clear_color),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                ..Default::default()
            });

            self.shape_pipeline
                .draw(&mut render_pass, &self.camera_bind_group, &self.mesh);
        }

        self.label_overlay.upload(
            &self.gpu.device,
            &self.gpu.queue,
            &mut encoder,
            &egui_primitives,
            &egui_textures_delta,
            &screen_descriptor,
        );

        {
            let mut egui_pass = encoder
                .begin_render_pass(&wgpu::RenderPassDescriptor {
                    label: Some("egui Render Pass"),
                    color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                        view: &view,
                        resolve_target: None,
                        ops: wgpu::Operations {
                            load: wgpu::LoadOp::Load,
                            store: wgpu::StoreOp::Store,
                        },
                    })],
                    depth_stencil_attachment: None,
                    ..Default::default()
                })
                .forget_lifetime();

            self.label_overlay
                .paint(&mut egui_pass, &egui_primitives, &screen_descriptor);
        }

        self.label_overlay.cleanup(&egui_textures_delta);

        self.gpu.queue.submit(std::iter::once(encoder.finish()));
        output.present();
    }
}

struct App {
    config: PlatformConfig,
    layout: DiceLayout,
    timing: RollTiming,
    sound: RollSound,
    state: Option<GameState>,
    startup_error: Option<StartupError>,
}

impl App {
    fn new(sound: RollSound) -> Self {
        Self {
            config: PlatformConfig::default(),
            layout: DiceLayout::default(),
            timing: RollTiming::default(),
            sound,
            state: None,
            startup_error: None,
        }
    }

    fn apply_effect(sound: &RollSound, effect: FrameEffect) {
        match effect {
            FrameEffect::RollStarted(value) => {
                log::info!("Rolled {}", value);
                if let Err(err) = sound.play() {
                    log::warn!("Roll sound failed: {}", err);
                }
            }
            FrameEffect::RollFinished(value) => {
                log::debug!("Roll settled on {}", value);
            }
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.state.is_some() || self.startup_error.is_some() {
            return;
        }
        match GameState::new(event_loop, &self.config, self.layout.clone(), self.timing) {
            Ok(state) => self.state = Some(state),
            Err(err) => {
                log::error!("Startup failed: {}", err);
                self.startup_error = Some(err);
                event_loop.exit();
            }
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(state) = &self.state {
            state.window.request_redraw();
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        let state = match self.state.as_mut() {
            Some(s) => s,
            None => return,
        };

        state
            .label_overlay
            .handle_window_event(&state.window, &event);

        match event {
            WindowEvent::CloseRequested => {
                log::info!("Close requested, exiting.");
                event_loop.exit();
            }

            WindowEvent::Resized(physical_size) => {
                let w = physical_size.width;
                let h = physical_size.height;
                if w > 0 && h > 0 {
                    state.gpu.resize(w, h);
                    let logical = physical_size.to_logical::<f32>(state.window.scale_factor());
                    state.camera.viewport = Vec2::new(logical.width, logical.height);
                    log::info!("Resized to {}x{}", w, h);
                }
            }

            WindowEvent::CursorMoved { position, .. } => {
                let position = state.logical_position(position);
                state.input.pointer_moved(position);
            }

            WindowEvent::MouseInput {
                state: element_state,
                button,
                ..
            } => {
                if let Some(btn) = map_mouse_button(button) {
                    match element_state {
                        ElementState::Pressed => state.input.mouse_down(btn),
                        ElementState::Released => state.input.mouse_up(btn),
                    }
                }
            }

            WindowEvent::RedrawRequested => {
                if state.gpu.size.0 == 0 || state.gpu.size.1 == 0 {
                    return;
                }

                // Fixed-step simulation phase. Queued pointer events stay
                // pending on frames that run zero steps.
                state.time.begin_frame();
                while state.time.should_step() {
                    for effect in state.step() {
                        Self::apply_effect(&self.sound, effect);
                    }
                }

                // Render phase reads finalized simulation state from this frame.
                state.render();
            }

            _ => {}
        }
    }
}

fn map_mouse_button(button: MouseButton) -> Option<MouseBtn> {
    match button {
        MouseButton::Left => Some(MouseBtn::Left),
        MouseButton::Right => Some(MouseBtn::Right),
        MouseButton::Middle => Some(MouseBtn::Middle),
        _ => None,
    }
}

fn main() -> Result<(), StartupError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    log::info!("Dice starting...");

    let sound = RollSound::open(Path::new(ROLL_SOUND_PATH)).map_err(|err| {
        log::error!("Startup failed: {}", err);
        StartupError::from(err)
    })?;

    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = App::new(sound);
    event_loop.run_app(&mut app)?;

    if let Some(err) = app.startup_error.take() {
        return Err(err);
    }

    // Dropping the app releases the GPU surface and the audio stream.
    drop(app);
    log::info!("Shut down cleanly.");
    Ok(())
}
