use std::sync::Arc;

use winit::application::ApplicationHandler;
use winit::event::{ElementState, KeyEvent, WindowEvent};
use winit::event_loop::ActiveEventLoop;
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{Window, WindowId};

use crate::camera::{Camera, Projection};
use crate::cli::Cli;
use crate::frame::FrameClock;
use crate::input::WinitInput;
use crate::renderer::CubeRenderer;
use crate::transform::TransformAccumulator;
use crate::types::TransformUniform;

const FPS_UPDATE_INTERVAL: f32 = 1.0;
const INITIAL_WINDOW_WIDTH: u32 = 1280;
const INITIAL_WINDOW_HEIGHT: u32 = 720;

/// The frame driver: owns the window and renderer, samples input once per
/// frame, steps the camera and transform, and hands the resulting matrices
/// to the renderer. One update pass and one derivation pass per frame,
/// everything on the event loop thread.
pub struct App {
    window: Option<Arc<Window>>,
    renderer: Option<CubeRenderer>,
    camera: Camera,
    projection: Projection,
    transform: TransformAccumulator,
    input: WinitInput,
    clock: FrameClock,
    frame_count: u32,
    fps_update_timer: f32,
}

impl App {
    pub fn new(cli: &Cli) -> Self {
        Self {
            window: None,
            renderer: None,
            camera: Camera::new(),
            projection: Projection::new(INITIAL_WINDOW_WIDTH, INITIAL_WINDOW_HEIGHT),
            transform: TransformAccumulator::with_idle(cli.rotation.into(), !cli.no_idle),
            input: WinitInput::new(),
            clock: FrameClock::new(),
            frame_count: 0,
            fps_update_timer: 0.0,
        }
    }

    fn update_fps(&mut self, delta: f32) {
        self.frame_count += 1;
        self.fps_update_timer += delta;

        if self.fps_update_timer >= FPS_UPDATE_INTERVAL {
            let fps = self.frame_count as f32 / self.fps_update_timer;
            log::info!("FPS: {:.1}", fps);
            self.frame_count = 0;
            self.fps_update_timer = 0.0;
        }
    }

    /// One frame: snapshot input, step camera and transform, draw.
    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        let frame = self.clock.tick();
        self.update_fps(frame.delta);

        let snapshot = self.input.snapshot();
        self.camera.process_look(&snapshot);
        self.camera.process_movement(&snapshot, frame.delta);
        self.transform.update(&snapshot, frame.delta);

        let uniform = TransformUniform::new(
            &self.transform.model_matrix(),
            &self.camera.view_matrix(),
            &self.projection.matrix(),
        );

        if let Some(renderer) = &mut self.renderer {
            match renderer.render(&uniform) {
                Ok(()) => {}
                Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                    let size = renderer.size();
                    renderer.resize(size);
                }
                Err(wgpu::SurfaceError::OutOfMemory) => {
                    log::error!("surface out of memory, exiting");
                    event_loop.exit();
                }
                Err(e) => log::warn!("frame dropped: {:?}", e),
            }
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            let window = match event_loop.create_window(
                Window::default_attributes()
                    .with_title("freefly")
                    .with_inner_size(winit::dpi::LogicalSize::new(
                        INITIAL_WINDOW_WIDTH,
                        INITIAL_WINDOW_HEIGHT,
                    )),
            ) {
                Ok(w) => Arc::new(w),
                Err(e) => {
                    log::error!("failed to create window: {}", e);
                    event_loop.exit();
                    return;
                }
            };

            let renderer = match pollster::block_on(CubeRenderer::new(window.clone())) {
                Ok(r) => r,
                Err(e) => {
                    log::error!("failed to initialize renderer: {:#}", e);
                    event_loop.exit();
                    return;
                }
            };

            let size = window.inner_size();
            if size.width > 0 && size.height > 0 {
                self.projection.resize(size.width, size.height);
            }

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
            WindowEvent::Resized(size) => {
                if size.width > 0 && size.height > 0 {
                    if let Some(renderer) = &mut self.renderer {
                        renderer.resize(size);
                    }
                    self.projection.resize(size.width, size.height);
                }
            }
            WindowEvent::RedrawRequested => self.redraw(event_loop),
            other => self.input.process_event(&other),
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}
