//! Per-frame simulation tick
//!
//! Order within a tick: restart, steering, timer, spawn, fall + catch.

use super::spawn::{RandomSource, maybe_spawn};
use super::state::{GamePhase, GameState};
use super::collision::drop_caught;

/// Input commands for a single tick
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Left arrow held
    pub left: bool,
    /// Right arrow held
    pub right: bool,
    /// Restart pressed this frame (only honored after game over)
    pub restart: bool,
}

/// What happened during a tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickOutcome {
    pub spawned: bool,
    pub caught: u32,
    pub missed: u32,
    /// The timer hit zero on this tick
    pub ended: bool,
    /// A restart was applied on this tick
    pub restarted: bool,
}

/// Advance the game by one frame at clock time `now_ms`
pub fn tick(
    state: &mut GameState,
    input: &TickInput,
    now_ms: u64,
    rng: &mut dyn RandomSource,
) -> TickOutcome {
    let mut outcome = TickOutcome::default();

    if input.restart && state.phase == GamePhase::GameOver {
        state.reset(now_ms);
        outcome.restarted = true;
        log::info!("Restarted");
    }

    if state.phase == GamePhase::Playing {
        state.catcher.steer(input.left, input.right);
    }

    update(state, now_ms, rng, &mut outcome);
    outcome
}

fn update(
    state: &mut GameState,
    now_ms: u64,
    rng: &mut dyn RandomSource,
    outcome: &mut TickOutcome,
) {
    if state.phase == GamePhase::GameOver {
        return;
    }

    state.time_left = state.remaining_at(now_ms);
    if state.time_left == 0 {
        state.phase = GamePhase::GameOver;
        outcome.ended = true;
        log::info!("Game over - final score {}", state.score);
        return;
    }

    if let Some(drop) = maybe_spawn(rng) {
        state.raindrops.push(drop);
        outcome.spawned = true;
    }

    let bucket = state.catcher.rect();
    let mut caught = 0;
    let mut missed = 0;
    state.raindrops.retain_mut(|drop| {
        drop.fall();
        if drop_caught(drop.pos, &bucket) {
            caught += 1;
            false
        } else if drop.is_off_screen() {
            missed += 1;
            false
        } else {
            true
        }
    });

    for _ in 0..caught {
        state.register_catch();
    }
    outcome.caught = caught;
    outcome.missed = missed;
}
