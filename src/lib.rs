//! Rain Catcher - catch falling raindrops in a bucket before time runs out
//!
//! Core modules:
//! - `sim`: Simulation (spawning, falling, catching, timer, phases)
//! - `game`: Frame loop wiring the simulation to input, clock and renderer
//! - `renderer`: Scene composition and the wgpu pipeline
//! - `platform`: Native input, clock and frame pacing
//! - `assets`: Bucket icon loading with procedural fallback

pub mod assets;
pub mod game;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use game::{Clock, FrameEvents, GameLoop, InputSource, LoopControl, Renderer};
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Screen dimensions (pixels)
    pub const SCREEN_WIDTH: f32 = 800.0;
    pub const SCREEN_HEIGHT: f32 = 600.0;

    /// Bucket dimensions
    pub const CATCHER_WIDTH: f32 = 80.0;
    pub const CATCHER_HEIGHT: f32 = 80.0;
    /// Gap between the bucket bottom and the screen bottom
    pub const CATCHER_BOTTOM_MARGIN: f32 = 20.0;
    /// Horizontal movement per tick while an arrow key is held
    pub const CATCHER_STEP: f32 = 5.0;

    /// Raindrop sprite size
    pub const RAINDROP_SIZE: f32 = 15.0;
    /// Fall speed range (pixels per tick)
    pub const RAINDROP_SPEED_MIN: f32 = 2.0;
    pub const RAINDROP_SPEED_MAX: f32 = 6.0;
    /// One spawn roll in this many succeeds (lower is more frequent)
    pub const RAINDROP_FREQUENCY: u32 = 30;

    /// Session length in seconds
    pub const GAME_DURATION: u32 = 60;

    /// Water level gained per caught drop, and its cap
    pub const WATER_PER_CATCH: u32 = 2;
    pub const WATER_MAX: u32 = 100;

    /// Target frame rate (one simulation tick per frame)
    pub const TARGET_FPS: u32 = 60;
}
