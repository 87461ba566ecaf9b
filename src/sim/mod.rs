//! Simulation module
//!
//! All gameplay logic lives here. It must stay free of rendering and
//! platform dependencies:
//! - One tick per frame, no dt scaling
//! - Time comes in as a millisecond timestamp
//! - Randomness comes in through `RandomSource`

pub mod collision;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::{Rect, drop_caught};
pub use spawn::{RandomSource, maybe_spawn, seeded_rng};
pub use state::{Catcher, GamePhase, GameState, Raindrop};
pub use tick::{TickInput, TickOutcome, tick};
