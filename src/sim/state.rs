//! Game state and core simulation types
//!
//! Everything a frame needs to render lives in [`GameState`]; the loop passes
//! it by reference to input handling, the tick, and the renderer.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::Rect;
use crate::consts::*;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Timer running, drops falling
    Playing,
    /// Timer ran out; waiting for restart
    GameOver,
}

/// The player's bucket
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Catcher {
    /// Top-left corner (y never changes)
    pub pos: Vec2,
}

impl Default for Catcher {
    fn default() -> Self {
        Self {
            pos: Vec2::new(
                (SCREEN_WIDTH / 2.0 - CATCHER_WIDTH / 2.0).floor(),
                SCREEN_HEIGHT - CATCHER_HEIGHT - CATCHER_BOTTOM_MARGIN,
            ),
        }
    }
}

impl Catcher {
    /// Leftmost allowed x
    pub const MIN_X: f32 = 0.0;
    /// Rightmost allowed x
    pub const MAX_X: f32 = SCREEN_WIDTH - CATCHER_WIDTH;

    /// Bucket rectangle for collision and rendering
    pub fn rect(&self) -> Rect {
        Rect::new(self.pos.x, self.pos.y, CATCHER_WIDTH, CATCHER_HEIGHT)
    }

    /// Move one step per held direction, staying on screen
    pub fn steer(&mut self, left: bool, right: bool) {
        let mut x = self.pos.x;
        if left {
            x -= CATCHER_STEP;
        }
        if right {
            x += CATCHER_STEP;
        }
        self.pos.x = x.clamp(Self::MIN_X, Self::MAX_X);
    }
}

/// A falling raindrop. `pos` is the sprite's top-left corner, which is also
/// the point tested against the bucket.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Raindrop {
    pub pos: Vec2,
    /// Pixels per tick
    pub speed: f32,
}

impl Raindrop {
    pub fn new(x: f32, speed: f32) -> Self {
        Self {
            pos: Vec2::new(x, -RAINDROP_SIZE),
            speed,
        }
    }

    /// Advance one tick (no dt scaling; the loop runs at a fixed rate)
    #[inline]
    pub fn fall(&mut self) {
        self.pos.y += self.speed;
    }

    /// True once the drop has passed the bottom of the screen
    #[inline]
    pub fn is_off_screen(&self) -> bool {
        self.pos.y > SCREEN_HEIGHT
    }
}

/// Complete session state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Player bucket
    pub catcher: Catcher,
    /// Live raindrops (unordered)
    pub raindrops: Vec<Raindrop>,
    /// Drops caught this session
    pub score: u32,
    /// Bucket fill, 0-100
    pub water_level: u32,
    /// Whole seconds left on the clock
    pub time_left: u32,
    /// Current phase
    pub phase: GamePhase,
    /// Clock timestamp (ms) when this session started
    pub start_ms: u64,
}

impl GameState {
    /// Create a fresh session starting at `now_ms`
    pub fn new(now_ms: u64) -> Self {
        Self {
            catcher: Catcher::default(),
            raindrops: Vec::new(),
            score: 0,
            water_level: 0,
            time_left: GAME_DURATION,
            phase: GamePhase::Playing,
            start_ms: now_ms,
        }
    }

    /// Reinitialize every field for a new session
    pub fn reset(&mut self, now_ms: u64) {
        *self = Self::new(now_ms);
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    /// Credit a caught drop
    pub fn register_catch(&mut self) {
        self.score += 1;
        self.water_level = (self.water_level + WATER_PER_CATCH).min(WATER_MAX);
    }

    /// Seconds remaining at `now_ms`, floored at zero
    pub fn remaining_at(&self, now_ms: u64) -> u32 {
        let elapsed_secs = now_ms.saturating_sub(self.start_ms) / 1000;
        u64::from(GAME_DURATION).saturating_sub(elapsed_secs) as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session() {
        let state = GameState::new(1234);
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.score, 0);
        assert_eq!(state.water_level, 0);
        assert_eq!(state.time_left, GAME_DURATION);
        assert_eq!(state.start_ms, 1234);
        assert!(state.raindrops.is_empty());
        assert_eq!(state.catcher.pos, Vec2::new(360.0, 500.0));
    }

    #[test]
    fn test_steer_clamps() {
        let mut catcher = Catcher::default();
        for _ in 0..200 {
            catcher.steer(true, false);
        }
        assert_eq!(catcher.pos.x, 0.0);

        for _ in 0..200 {
            catcher.steer(false, true);
        }
        assert_eq!(catcher.pos.x, 720.0);

        // Both held cancel out
        catcher.steer(true, true);
        assert_eq!(catcher.pos.x, 720.0);
    }

    #[test]
    fn test_water_level_caps() {
        let mut state = GameState::new(0);
        for _ in 0..60 {
            state.register_catch();
        }
        assert_eq!(state.score, 60);
        assert_eq!(state.water_level, WATER_MAX);
    }

    #[test]
    fn test_remaining_uses_whole_seconds() {
        let state = GameState::new(10_000);
        assert_eq!(state.remaining_at(10_000), 60);
        assert_eq!(state.remaining_at(10_999), 60);
        assert_eq!(state.remaining_at(11_000), 59);
        assert_eq!(state.remaining_at(69_999), 1);
        assert_eq!(state.remaining_at(70_000), 0);
        assert_eq!(state.remaining_at(500_000), 0);
        // Clock behind the start never underflows
        assert_eq!(state.remaining_at(0), 60);
    }

    #[test]
    fn test_raindrop_falls_and_leaves() {
        let mut drop = Raindrop::new(100.0, 4.0);
        assert_eq!(drop.pos.y, -RAINDROP_SIZE);
        drop.fall();
        assert_eq!(drop.pos.y, -11.0);

        drop.pos.y = 600.0;
        assert!(!drop.is_off_screen());
        drop.pos.y = 601.0;
        assert!(drop.is_off_screen());
    }
}
