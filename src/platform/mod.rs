//! Platform abstraction layer
//!
//! Native implementations of the loop's collaborators:
//! - Keyboard input from winit window events
//! - Wall clock for the session timer
//! - Frame pacing at a fixed rate

pub mod clock;
pub mod keyboard;

pub use clock::{FrameLimiter, SystemClock};
pub use keyboard::KeyboardInput;
