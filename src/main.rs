//! Digital rain with CRT and shockwave effects
//!
//! Per frame:
//! 1. Step the simulation and draw glyphs with vello
//! 2. Fade the previous frame and composite the new glyphs
//! 3. CRT pass, then the shockwave pass to the surface

mod gpu;

use std::sync::Arc;
use std::time::Instant;

use anyhow::{Context, Result};
use rain::config::Config;
use rain::font::load_rain_font;
use rain_core::FrameDriver;
use rain_renderer::{GlyphFont, RainRenderer};

use gpu::GpuState;

use winit::{
    application::ApplicationHandler,
    dpi::{PhysicalPosition, PhysicalSize},
    event::{ElementState, MouseButton, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::{Key, NamedKey},
    window::{Window, WindowId},
};

/// Window plus everything drawn into it
struct WindowState {
    window: Arc<Window>,
    gpu: GpuState,
    renderer: RainRenderer,
    driver: FrameDriver,
}

struct App {
    config: Config,
    state: Option<WindowState>,
    started: Instant,
    /// Set when startup fails inside the event loop
    error: Option<anyhow::Error>,
}

impl App {
    fn new() -> Self {
        Self {
            config: Config::load(),
            state: None,
            started: Instant::now(),
            error: None,
        }
    }

    /// Window size as a fraction of the primary monitor
    fn initial_size(&self, event_loop: &ActiveEventLoop) -> PhysicalSize<u32> {
        let window = &self.config.window;
        let monitor = event_loop
            .primary_monitor()
            .or_else(|| event_loop.available_monitors().next())
            .map(|m| m.size())
            .filter(|s| s.width > 0 && s.height > 0);

        match monitor {
            Some(size) => PhysicalSize::new(
                ((size.width as f64 * window.scale) as u32).max(1),
                ((size.height as f64 * window.scale) as u32).max(1),
            ),
            None => {
                log::info!("No monitor size reported, using fallback window size");
                PhysicalSize::new(window.fallback_width.max(1), window.fallback_height.max(1))
            }
        }
    }

    fn create_window(&self, event_loop: &ActiveEventLoop) -> Result<WindowState> {
        let size = self.initial_size(event_loop);
        let attrs = Window::default_attributes()
            .with_title(&self.config.window.title)
            .with_inner_size(size)
            .with_position(PhysicalPosition::new(0, 0));

        let window = Arc::new(
            event_loop
                .create_window(attrs)
                .context("Failed to create window")?,
        );

        let gpu = GpuState::new(window.clone())?;
        let (width, height) = gpu.size();

        let (font_bytes, face_index) = load_rain_font(&self.config.font)?;
        let font = GlyphFont::new(font_bytes, face_index, self.config.font.size)
            .context("Failed to parse rain font")?;

        let renderer = RainRenderer::new(&gpu.device, gpu.config.format, font, width, height)
            .context("Failed to create rain renderer")?;
        let driver = FrameDriver::new(self.config.to_settings(), width, height);

        Ok(WindowState {
            window,
            gpu,
            renderer,
            driver,
        })
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        let Some(state) = self.state.as_mut() else { return };
        let elapsed_ms = self.started.elapsed().as_secs_f32() * 1000.0;

        let frame = match state.gpu.surface.get_current_texture() {
            Ok(f) => f,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                log::debug!("Surface lost or outdated, reconfiguring");
                state.gpu.reconfigure();
                state.window.request_redraw();
                return;
            }
            Err(wgpu::SurfaceError::OutOfMemory) => {
                log::error!("Surface out of memory, exiting");
                event_loop.exit();
                return;
            }
            Err(e) => {
                log::warn!("Failed to get surface texture: {:?}", e);
                state.window.request_redraw();
                return;
            }
        };
        let view = frame.texture.create_view(&Default::default());

        match state.renderer.render(
            &state.gpu.device,
            &state.gpu.queue,
            &mut state.driver,
            elapsed_ms,
            &view,
        ) {
            Ok(_) => {
                state.window.pre_present_notify();
                frame.present();
            }
            Err(e) => log::error!("Frame {} failed: {}", state.driver.frame_index(), e),
        }

        state.window.request_redraw();
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.state.is_some() {
            return;
        }

        match self.create_window(event_loop) {
            Ok(state) => {
                state.window.request_redraw();
                self.state = Some(state);
            }
            Err(e) => {
                log::error!("Startup failed: {:#}", e);
                self.error = Some(e);
                event_loop.exit();
            }
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        let Some(state) = self.state.as_mut() else { return };

        match event {
            WindowEvent::CloseRequested => event_loop.exit(),

            WindowEvent::KeyboardInput { event, .. }
                if event.state == ElementState::Pressed
                    && event.logical_key == Key::Named(NamedKey::Escape) =>
            {
                event_loop.exit();
            }

            WindowEvent::Resized(size) => {
                if state.gpu.resize(size.width, size.height) {
                    state.renderer.resize(&state.gpu.device, size.width, size.height);
                    state.driver.resize(size.width, size.height);
                    log::debug!("Resized to {}x{}", size.width, size.height);
                }
            }

            WindowEvent::CursorMoved { position, .. } => {
                state.driver.cursor_moved(position.x as f32, position.y as f32);
            }

            WindowEvent::CursorLeft { .. } => state.driver.cursor_left(),

            WindowEvent::MouseInput {
                state: ElementState::Released,
                button: MouseButton::Left,
                ..
            } => {
                if state.driver.pointer_released() {
                    log::debug!("Shockwave at {:?}", state.driver.shockwave().center());
                }
            }

            WindowEvent::RedrawRequested => self.redraw(event_loop),

            _ => {}
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn,rain=info"))
        .init();
    log::info!("Digital rain starting");

    let event_loop = EventLoop::new().context("Failed to create event loop")?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = App::new();
    event_loop.run_app(&mut app).context("Event loop failed")?;

    match app.error.take() {
        Some(e) => Err(e),
        None => Ok(()),
    }
}
