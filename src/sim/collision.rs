//! Collision detection for the bucket
//!
//! A drop is caught when its reference point lies strictly inside the bucket
//! rectangle. Touching an edge exactly does not count.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle in screen pixels (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    pub fn left(&self) -> f32 {
        self.x
    }

    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    pub fn top(&self) -> f32 {
        self.y
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.w / 2.0, self.y + self.h / 2.0)
    }

    /// Point test with open intervals on all four sides
    pub fn contains_strict(&self, point: Vec2) -> bool {
        self.left() < point.x
            && point.x < self.right()
            && self.top() < point.y
            && point.y < self.bottom()
    }
}

/// Returns true if a drop at `drop_pos` lands in the bucket occupying `bucket`
#[inline]
pub fn drop_caught(drop_pos: Vec2, bucket: &Rect) -> bool {
    bucket.contains_strict(drop_pos)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_inside_is_caught() {
        let bucket = Rect::new(60.0, 500.0, 80.0, 80.0);
        assert!(drop_caught(Vec2::new(100.0, 540.0), &bucket));
    }

    #[test]
    fn test_edges_do_not_count() {
        let bucket = Rect::new(60.0, 500.0, 80.0, 80.0);

        // Left/right edges
        assert!(!drop_caught(Vec2::new(60.0, 540.0), &bucket));
        assert!(!drop_caught(Vec2::new(140.0, 540.0), &bucket));
        // Top/bottom edges
        assert!(!drop_caught(Vec2::new(100.0, 500.0), &bucket));
        assert!(!drop_caught(Vec2::new(100.0, 580.0), &bucket));
        // Corner
        assert!(!drop_caught(Vec2::new(60.0, 500.0), &bucket));
    }

    #[test]
    fn test_just_inside_edges() {
        let bucket = Rect::new(60.0, 500.0, 80.0, 80.0);
        assert!(drop_caught(Vec2::new(60.01, 500.01), &bucket));
        assert!(drop_caught(Vec2::new(139.99, 579.99), &bucket));
    }

    #[test]
    fn test_outside_misses() {
        let bucket = Rect::new(60.0, 500.0, 80.0, 80.0);
        assert!(!drop_caught(Vec2::new(30.0, 540.0), &bucket));
        assert!(!drop_caught(Vec2::new(100.0, 420.0), &bucket));
        assert!(!drop_caught(Vec2::new(100.0, 601.0), &bucket));
    }

    #[test]
    fn test_rect_accessors() {
        let r = Rect::new(10.0, 20.0, 30.0, 40.0);
        assert_eq!(r.right(), 40.0);
        assert_eq!(r.bottom(), 60.0);
        assert_eq!(r.center(), Vec2::new(25.0, 40.0));
    }
}
