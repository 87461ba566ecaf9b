//! Frame composition
//!
//! Turns a [`GameState`] into one triangle list in screen pixels, painted back
//! to front: clouds, raindrops, bucket and water, HUD, game-over overlay.
//! The background color is the render pass clear color.

use glam::Vec2;

use super::font::{self, TextSize};
use super::shapes::{self, CIRCLE_SEGMENTS};
use super::vertex::{Vertex, colors};
use crate::assets::BucketIcon;
use crate::consts::*;
use crate::sim::{GamePhase, GameState, RandomSource, Rect};

const CLOUD_COUNT: u32 = 3;
const CLOUD_BASE_Y: f32 = 50.0;
const CLOUD_JITTER_X: i32 = 20;
const CLOUD_JITTER_Y: i32 = 10;

/// Builds frame geometry; owns the bucket icon and the cloud jitter source
pub struct SceneBuilder<R> {
    icon: BucketIcon,
    jitter: Option<R>,
}

impl<R: RandomSource> SceneBuilder<R> {
    /// `jitter` makes the clouds shimmer every frame; `None` keeps them still
    pub fn new(icon: BucketIcon, jitter: Option<R>) -> Self {
        Self { icon, jitter }
    }

    pub fn icon(&self) -> &BucketIcon {
        &self.icon
    }

    /// Geometry for one frame
    pub fn build(&mut self, state: &GameState) -> Vec<Vertex> {
        let mut vertices = Vec::with_capacity(4096 + self.icon.vertices.len());

        self.clouds(&mut vertices);
        raindrops(state, &mut vertices);
        self.bucket(state, &mut vertices);
        hud(state, &mut vertices);
        if state.phase == GamePhase::GameOver {
            game_over_overlay(state, &mut vertices);
        }

        vertices
    }

    fn clouds(&mut self, out: &mut Vec<Vertex>) {
        for i in 0..CLOUD_COUNT {
            let (dx, dy) = match self.jitter.as_mut() {
                Some(rng) => (
                    rng.int_in(-CLOUD_JITTER_X, CLOUD_JITTER_X),
                    rng.int_in(-CLOUD_JITTER_Y, CLOUD_JITTER_Y),
                ),
                None => (0, 0),
            };
            let x = (i * SCREEN_WIDTH as u32 / CLOUD_COUNT) as f32 + dx as f32;
            let y = CLOUD_BASE_Y + dy as f32;
            cloud(Vec2::new(x, y), out);
        }
    }

    fn bucket(&self, state: &GameState, out: &mut Vec<Vertex>) {
        let origin = state.catcher.pos;
        out.extend(self.icon.placed_at(origin));

        if let Some(water) = water_rect(origin, state.water_level) {
            out.extend(shapes::rounded_rect(water, 3.0, colors::WATER));
        }
    }
}

/// Three puffs in a row with a bigger one on top
fn cloud(at: Vec2, out: &mut Vec<Vertex>) {
    for i in 0..3 {
        let center = Vec2::new(at.x + i as f32 * 20.0, at.y);
        out.extend(shapes::circle(center, 20.0, colors::CLOUD, CIRCLE_SEGMENTS));
    }
    out.extend(shapes::circle(
        Vec2::new(at.x + 20.0, at.y - 10.0),
        25.0,
        colors::CLOUD,
        CIRCLE_SEGMENTS,
    ));
}

fn raindrops(state: &GameState, out: &mut Vec<Vertex>) {
    let radius = (RAINDROP_SIZE as u32 / 2) as f32;
    for drop in &state.raindrops {
        // Sprite origin is the drop position; the circle sits in its cell
        let center = drop.pos + Vec2::splat(radius);
        out.extend(shapes::circle(center, radius, colors::RAINDROP, 12));
    }
}

/// Water inside the bucket, or `None` when empty
pub fn water_rect(bucket_origin: Vec2, water_level: u32) -> Option<Rect> {
    if water_level == 0 {
        return None;
    }
    let height = (CATCHER_HEIGHT - 25.0) * water_level as f32 / 100.0;
    Some(Rect::new(
        bucket_origin.x + 10.0,
        bucket_origin.y + CATCHER_HEIGHT - 10.0 - height,
        CATCHER_WIDTH - 20.0,
        height,
    ))
}

fn hud(state: &GameState, out: &mut Vec<Vertex>) {
    out.extend(font::text(
        &format!("Score: {}", state.score),
        Vec2::new(20.0, 20.0),
        TextSize::Large,
        colors::HUD_TEXT,
    ));
    out.extend(font::text(
        &format!("Water: {}%", state.water_level),
        Vec2::new(20.0, 60.0),
        TextSize::Large,
        colors::HUD_WATER,
    ));
    out.extend(font::text(
        &format!("Time: {}s", state.time_left),
        Vec2::new(SCREEN_WIDTH - 150.0, 20.0),
        TextSize::Large,
        colors::HUD_TEXT,
    ));
}

fn game_over_overlay(state: &GameState, out: &mut Vec<Vertex>) {
    let mid = Vec2::new(SCREEN_WIDTH / 2.0, SCREEN_HEIGHT / 2.0);
    out.extend(font::text_centered(
        "Game Over!",
        mid - Vec2::new(0.0, 20.0),
        TextSize::Large,
        colors::HUD_TEXT,
    ));
    out.extend(font::text_centered(
        "Press R to restart",
        mid + Vec2::new(0.0, 20.0),
        TextSize::Small,
        colors::HUD_TEXT,
    ));
    out.extend(font::text_centered(
        &format!("Final Score: {}", state.score),
        mid + Vec2::new(0.0, 60.0),
        TextSize::Large,
        colors::HUD_TEXT,
    ));
}

#[cfg(test)]
mod tests {
    use rand_pcg::Pcg32;

    use super::*;
    use crate::sim::{Raindrop, seeded_rng};

    fn still_scene() -> SceneBuilder<Pcg32> {
        SceneBuilder::new(BucketIcon::fallback(), None)
    }

    fn count_color(vertices: &[Vertex], color: [f32; 4]) -> usize {
        vertices.iter().filter(|v| v.color == color).count()
    }

    #[test]
    fn test_raindrops_add_geometry() {
        let mut scene = still_scene();
        let mut state = GameState::new(0);
        let empty = scene.build(&state).len();

        state.raindrops.push(Raindrop::new(100.0, 3.0));
        state.raindrops.push(Raindrop::new(200.0, 3.0));
        let with_drops = scene.build(&state).len();
        assert_eq!(with_drops - empty, 2 * 12 * 3);
    }

    #[test]
    fn test_water_only_when_filled() {
        let mut scene = still_scene();
        let mut state = GameState::new(0);
        let dry = scene.build(&state);

        state.water_level = 50;
        let wet = scene.build(&state);
        // Water shares the raindrop color; no drops are live
        assert_eq!(count_color(&dry, colors::WATER), 0);
        assert!(count_color(&wet, colors::WATER) > 0);
    }

    #[test]
    fn test_water_rect_geometry() {
        assert_eq!(water_rect(Vec2::new(360.0, 500.0), 0), None);

        let full = water_rect(Vec2::new(360.0, 500.0), 100).unwrap();
        assert_eq!(full, Rect::new(370.0, 515.0, 60.0, 55.0));

        let half = water_rect(Vec2::new(360.0, 500.0), 50).unwrap();
        assert_eq!(half.h, 27.5);
        assert_eq!(half.bottom(), 570.0);
    }

    #[test]
    fn test_game_over_adds_overlay() {
        let mut scene = still_scene();
        let mut state = GameState::new(0);
        let playing = scene.build(&state).len();

        // Same HUD text either way, so the overlay is exactly the tail
        state.phase = GamePhase::GameOver;
        let over = scene.build(&state);
        assert!(over.len() > playing);

        // Overlay text sits around the screen center
        let overlay = &over[playing..];
        let (min, max) = shapes::bounds(overlay).unwrap();
        assert!(min.y > SCREEN_HEIGHT / 2.0 - 40.0);
        assert!(max.y < SCREEN_HEIGHT / 2.0 + 80.0);
    }

    #[test]
    fn test_bucket_follows_catcher() {
        let mut scene = still_scene();
        let mut state = GameState::new(0);
        state.catcher.pos.x = 0.0;
        let verts = scene.build(&state);

        let orange: Vec<Vertex> = verts
            .iter()
            .copied()
            .filter(|v| v.color == colors::ORANGE)
            .collect();
        let (min, max) = shapes::bounds(&orange).unwrap();
        assert!((min.x - 5.0).abs() < 0.001);
        assert!((max.x - 75.0).abs() < 0.001);
        assert!((max.y - 580.0).abs() < 0.001);
    }

    #[test]
    fn test_still_clouds_are_stable() {
        let mut scene = still_scene();
        let state = GameState::new(0);
        assert_eq!(scene.build(&state), scene.build(&state));
    }

    #[test]
    fn test_jittered_clouds_stay_near_home() {
        let mut scene = SceneBuilder::new(BucketIcon::fallback(), Some(seeded_rng(3)));
        let state = GameState::new(0);
        for _ in 0..20 {
            let verts = scene.build(&state);
            let clouds: Vec<Vertex> = verts
                .iter()
                .copied()
                .filter(|v| v.color == colors::CLOUD)
                .collect();
            let (min, max) = shapes::bounds(&clouds).unwrap();
            // Leftmost puff: x in -20..20, radius 20
            assert!(min.x >= -40.001);
            // Top puff: y in 40..60, raised 10, radius 25
            assert!(min.y >= 5.0 - 0.001);
            assert!(max.y <= 80.001);
            assert!(max.x <= 533.0 + 20.0 + 60.0 + 0.001);
        }
    }
}
