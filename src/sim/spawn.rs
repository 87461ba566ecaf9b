//! Raindrop spawning
//!
//! All randomness goes through [`RandomSource`] so tests can script exact
//! spawn outcomes. The game itself uses a seeded PCG generator.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::state::Raindrop;
use crate::consts::*;

/// Source of the random draws the simulation needs
pub trait RandomSource {
    /// Roll a die with `sides` faces, returning a value in `1..=sides`
    fn roll(&mut self, sides: u32) -> u32;
    /// Uniform integer in `lo..=hi`
    fn int_in(&mut self, lo: i32, hi: i32) -> i32;
    /// Uniform float in `lo..=hi`
    fn float_in(&mut self, lo: f32, hi: f32) -> f32;
}

impl RandomSource for Pcg32 {
    fn roll(&mut self, sides: u32) -> u32 {
        self.random_range(1..=sides.max(1))
    }

    fn int_in(&mut self, lo: i32, hi: i32) -> i32 {
        self.random_range(lo..=hi)
    }

    fn float_in(&mut self, lo: f32, hi: f32) -> f32 {
        self.random_range(lo..=hi)
    }
}

/// Seeded generator for a run
pub fn seeded_rng(seed: u64) -> Pcg32 {
    Pcg32::seed_from_u64(seed)
}

/// Roll for a new raindrop this tick. Returns the drop when the roll hits.
///
/// Draw order is fixed: spawn roll, then x, then speed.
pub fn maybe_spawn(rng: &mut dyn RandomSource) -> Option<Raindrop> {
    if rng.roll(RAINDROP_FREQUENCY) != 1 {
        return None;
    }

    let max_x = (SCREEN_WIDTH - RAINDROP_SIZE) as i32;
    let x = rng.int_in(0, max_x) as f32;
    let speed = rng.float_in(RAINDROP_SPEED_MIN, RAINDROP_SPEED_MAX);
    Some(Raindrop::new(x, speed))
}
