//! Rain Catcher entry point
//!
//! Opens the window and runs one game frame per limiter period.

use std::sync::Arc;
use std::time::Instant;

use rand_pcg::Pcg32;
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowId};

use rain_catcher::assets::BucketIcon;
use rain_catcher::consts::{SCREEN_HEIGHT, SCREEN_WIDTH};
use rain_catcher::platform::{FrameLimiter, KeyboardInput, SystemClock};
use rain_catcher::renderer::GpuRenderer;
use rain_catcher::sim::seeded_rng;
use rain_catcher::{GameLoop, LoopControl, Renderer, Settings};

/// Application state; the game starts once the window and GPU are ready
struct App {
    settings: Settings,
    seed: u64,
    input: KeyboardInput,
    limiter: FrameLimiter,
    window: Option<Arc<Window>>,
    renderer: Option<GpuRenderer>,
    game: Option<GameLoop<SystemClock, Pcg32>>,
}

impl App {
    fn new(settings: Settings) -> Self {
        let seed = settings.resolve_seed();
        let limiter = FrameLimiter::new(settings.target_fps);
        Self {
            settings,
            seed,
            input: KeyboardInput::new(),
            limiter,
            window: None,
            renderer: None,
            game: None,
        }
    }

    fn init(&mut self, event_loop: &ActiveEventLoop) -> anyhow::Result<()> {
        let attributes = Window::default_attributes()
            .with_title(self.settings.title.clone())
            .with_inner_size(LogicalSize::new(SCREEN_WIDTH as f64, SCREEN_HEIGHT as f64))
            .with_resizable(false);
        let window = Arc::new(event_loop.create_window(attributes)?);

        let icon = BucketIcon::load_or_fallback(&self.settings.bucket_image);
        let renderer = pollster::block_on(GpuRenderer::new(
            window.clone(),
            &self.settings,
            icon,
            self.seed.rotate_left(32),
        ))?;

        self.game = Some(GameLoop::new(SystemClock::new(), seeded_rng(self.seed)));
        self.renderer = Some(renderer);
        self.window = Some(window);
        log::info!("Game initialized with seed: {}", self.seed);
        Ok(())
    }

    /// Input, update, render
    fn run_frame(&mut self, event_loop: &ActiveEventLoop) {
        let (Some(game), Some(renderer)) = (self.game.as_mut(), self.renderer.as_mut()) else {
            return;
        };
        if game.frame(&mut self.input, renderer) == LoopControl::Quit {
            event_loop.exit();
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }
        if let Err(e) = self.init(event_loop) {
            log::error!("Failed to start: {e:#}");
            event_loop.exit();
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        self.input.handle_window_event(&event);

        match event {
            // Without a running game nobody polls the quit request
            WindowEvent::CloseRequested if self.game.is_none() => event_loop.exit(),
            WindowEvent::Resized(size) => {
                if let Some(renderer) = &mut self.renderer {
                    renderer.resize(size.width, size.height);
                }
            }
            WindowEvent::RedrawRequested => {
                if let (Some(game), Some(renderer)) = (&self.game, &mut self.renderer) {
                    renderer.draw_frame(game.state());
                }
            }
            _ => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        let now = Instant::now();
        if self.limiter.is_due(now) {
            self.limiter.begin_frame(now);
            self.run_frame(event_loop);
        }
        if let Some(deadline) = self.limiter.deadline() {
            event_loop.set_control_flow(ControlFlow::WaitUntil(deadline));
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    log::info!("Rain Catcher starting...");

    let event_loop = EventLoop::new()?;
    let mut app = App::new(Settings::default());
    event_loop.run_app(&mut app)?;

    log::info!("Bye");
    Ok(())
}
