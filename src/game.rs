//! Frame loop
//!
//! [`GameLoop`] owns the session state and runs one frame at a time:
//! poll input, tick the simulation, hand the state to the renderer.
//! The platform front end decides when frames happen.

use crate::sim::{GameState, RandomSource, TickInput, TickOutcome, tick};

/// Discrete events collected since the last poll
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameEvents {
    /// Window close / quit requested
    pub quit: bool,
    /// Restart key pressed
    pub restart: bool,
}

/// Where input comes from
pub trait InputSource {
    /// Drain discrete events since the last call
    fn poll_events(&mut self) -> FrameEvents;
    fn is_left_pressed(&self) -> bool;
    fn is_right_pressed(&self) -> bool;
}

/// Draws a frame from read-only state
pub trait Renderer {
    fn draw_frame(&mut self, state: &GameState);
}

/// Monotonic millisecond clock
pub trait Clock {
    fn now_ms(&self) -> u64;
}

/// Whether the loop should keep going
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopControl {
    Continue,
    Quit,
}

/// The game: session state plus its clock and random source
pub struct GameLoop<C, R> {
    state: GameState,
    clock: C,
    rng: R,
    last_outcome: TickOutcome,
}

impl<C: Clock, R: RandomSource> GameLoop<C, R> {
    /// Start a session at the clock's current time
    pub fn new(clock: C, rng: R) -> Self {
        let state = GameState::new(clock.now_ms());
        Self {
            state,
            clock,
            rng,
            last_outcome: TickOutcome::default(),
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Result of the most recent tick
    pub fn last_outcome(&self) -> TickOutcome {
        self.last_outcome
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Run one frame: input, update, render
    pub fn frame(
        &mut self,
        input: &mut dyn InputSource,
        renderer: &mut dyn Renderer,
    ) -> LoopControl {
        let events = input.poll_events();
        if events.quit {
            log::info!("Quit requested");
            return LoopControl::Quit;
        }

        let tick_input = TickInput {
            left: input.is_left_pressed(),
            right: input.is_right_pressed(),
            restart: events.restart,
        };
        let now = self.clock.now_ms();
        self.last_outcome = tick(&mut self.state, &tick_input, now, &mut self.rng);

        renderer.draw_frame(&self.state);
        LoopControl::Continue
    }

    /// Drive frames until the input source asks to quit.
    ///
    /// `wait` is called after every frame and is where a caller paces the
    /// loop (the native front end instead schedules frames from winit).
    pub fn run(
        &mut self,
        input: &mut dyn InputSource,
        renderer: &mut dyn Renderer,
        mut wait: impl FnMut(),
    ) {
        while self.frame(input, renderer) == LoopControl::Continue {
            wait();
        }
    }
}
