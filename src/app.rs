//! Native window and event loop
//!
//! Everything runs on the winit event thread: key events are queued into the
//! [`Game`], ticks run at the start of each redraw, and the frame is built
//! from the state once those ticks are done.

use std::sync::Arc;
use std::time::Instant;

use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::{ElementState, KeyEvent, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{Window, WindowId};

use crate::consts::{WINDOW_HEIGHT, WINDOW_TITLE, WINDOW_WIDTH};
use crate::error::{Error, Result};
use crate::game::Game;
use crate::input::Key;
use crate::renderer::{RenderState, build_frame};
use crate::settings::Settings;

/// Map a physical key to a game key
fn map_key(code: KeyCode) -> Option<Key> {
    match code {
        KeyCode::ArrowLeft => Some(Key::Left),
        KeyCode::ArrowRight => Some(Key::Right),
        _ => None,
    }
}

/// Window state, created once the event loop resumes
struct Graphics {
    window: Arc<Window>,
    render_state: RenderState,
}

struct App {
    settings: Settings,
    game: Game,
    graphics: Option<Graphics>,
    last_frame: Option<Instant>,
    /// Fatal error raised inside the event loop
    error: Option<Error>,
}

impl App {
    fn new(settings: Settings) -> Self {
        Self {
            game: Game::new(&settings),
            settings,
            graphics: None,
            last_frame: None,
            error: None,
        }
    }

    fn create_graphics(&self, event_loop: &ActiveEventLoop) -> Result<Graphics> {
        let attributes = Window::default_attributes()
            .with_title(WINDOW_TITLE)
            .with_inner_size(LogicalSize::new(WINDOW_WIDTH as f64, WINDOW_HEIGHT as f64))
            .with_resizable(false);

        let window = Arc::new(event_loop.create_window(attributes)?);
        let render_state =
            pollster::block_on(RenderState::new(window.clone(), self.settings.vsync))?;

        Ok(Graphics {
            window,
            render_state,
        })
    }

    fn handle_key(&mut self, event: &KeyEvent) {
        let PhysicalKey::Code(code) = event.physical_key else {
            return;
        };
        let Some(key) = map_key(code) else {
            return;
        };

        match event.state {
            ElementState::Pressed => self.game.key_down(key, event.repeat),
            ElementState::Released => self.game.key_up(key),
        }
    }

    /// Advance the simulation for the time since the last frame, then draw
    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        let now = Instant::now();
        let elapsed = self.last_frame.map(|t| now - t).unwrap_or_default();
        self.last_frame = Some(now);
        self.game.update(elapsed);

        let Some(graphics) = self.graphics.as_mut() else {
            return;
        };

        let vertices = build_frame(self.game.state());
        match graphics.render_state.render(&vertices) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                graphics.render_state.reconfigure();
            }
            Err(wgpu::SurfaceError::OutOfMemory) => {
                log::error!("Out of memory!");
                event_loop.exit();
            }
            Err(e) => log::warn!("Render error: {:?}", e),
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.graphics.is_some() {
            return;
        }

        match self.create_graphics(event_loop) {
            Ok(graphics) => {
                log::info!("Window created: {}x{}", WINDOW_WIDTH, WINDOW_HEIGHT);
                graphics.window.request_redraw();
                self.graphics = Some(graphics);
            }
            Err(e) => {
                self.error = Some(e);
                event_loop.exit();
            }
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(graphics) = &self.graphics {
            graphics.window.request_redraw();
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                log::info!("Close requested, exiting.");
                event_loop.exit();
            }
            WindowEvent::Resized(size) => {
                if let Some(graphics) = self.graphics.as_mut() {
                    graphics.render_state.resize(size.width, size.height);
                }
            }
            WindowEvent::Focused(false) => self.game.focus_lost(),
            WindowEvent::KeyboardInput { event, .. } => self.handle_key(&event),
            WindowEvent::RedrawRequested => self.redraw(event_loop),
            _ => {}
        }
    }
}

/// Open the window and run the game until it is closed
pub fn run(settings: Settings) -> Result<()> {
    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = App::new(settings);
    event_loop.run_app(&mut app)?;

    match app.error.take() {
        Some(e) => Err(e),
        None => Ok(()),
    }
}
