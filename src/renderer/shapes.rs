//! Shape generation for 2D primitives
//!
//! Everything is emitted as a plain triangle list in screen pixels.

use glam::Vec2;
use std::f32::consts::{FRAC_PI_2, PI};

use super::vertex::Vertex;
use crate::sim::Rect;

/// Segments used for full circles
pub const CIRCLE_SEGMENTS: u32 = 24;
/// Segments used for each rounded corner
const CORNER_SEGMENTS: u32 = 6;

/// Generate vertices for a filled circle
pub fn circle(center: Vec2, radius: f32, color: [f32; 4], segments: u32) -> Vec<Vertex> {
    sector(center, radius, 0.0, 2.0 * PI, color, segments)
}

/// Generate vertices for a pie slice from `start` to `end` (radians)
pub fn sector(
    center: Vec2,
    radius: f32,
    start: f32,
    end: f32,
    color: [f32; 4],
    segments: u32,
) -> Vec<Vertex> {
    let segments = segments.max(1);
    let span = end - start;
    let mut vertices = Vec::with_capacity((segments * 3) as usize);

    for i in 0..segments {
        let theta1 = start + (i as f32 / segments as f32) * span;
        let theta2 = start + ((i + 1) as f32 / segments as f32) * span;

        // Triangle from center to edge
        vertices.push(Vertex::new(center.x, center.y, color));
        vertices.push(Vertex::new(
            center.x + radius * theta1.cos(),
            center.y + radius * theta1.sin(),
            color,
        ));
        vertices.push(Vertex::new(
            center.x + radius * theta2.cos(),
            center.y + radius * theta2.sin(),
            color,
        ));
    }

    vertices
}

/// Generate vertices for a filled axis-aligned rectangle
pub fn rect(r: Rect, color: [f32; 4]) -> Vec<Vertex> {
    if r.w <= 0.0 || r.h <= 0.0 {
        return Vec::new();
    }
    let (l, t, rt, b) = (r.left(), r.top(), r.right(), r.bottom());
    vec![
        Vertex::new(l, t, color),
        Vertex::new(rt, t, color),
        Vertex::new(l, b, color),
        Vertex::new(l, b, color),
        Vertex::new(rt, t, color),
        Vertex::new(rt, b, color),
    ]
}

/// Generate vertices for a rectangle with rounded corners.
///
/// The radius is clamped to half the shorter side.
pub fn rounded_rect(r: Rect, radius: f32, color: [f32; 4]) -> Vec<Vertex> {
    let radius = radius.min(r.w / 2.0).min(r.h / 2.0).max(0.0);
    if radius == 0.0 {
        return rect(r, color);
    }

    let mut vertices = Vec::with_capacity(18 + (4 * CORNER_SEGMENTS * 3) as usize);

    // Center column
    vertices.extend(rect(Rect::new(r.x + radius, r.y, r.w - 2.0 * radius, r.h), color));
    // Side strips between the corners
    vertices.extend(rect(Rect::new(r.x, r.y + radius, radius, r.h - 2.0 * radius), color));
    vertices.extend(rect(
        Rect::new(r.right() - radius, r.y + radius, radius, r.h - 2.0 * radius),
        color,
    ));

    // Corners (y down: angle PI/2 points toward the bottom edge)
    let corners = [
        (Vec2::new(r.x + radius, r.y + radius), PI),
        (Vec2::new(r.right() - radius, r.y + radius), -FRAC_PI_2),
        (Vec2::new(r.right() - radius, r.bottom() - radius), 0.0),
        (Vec2::new(r.x + radius, r.bottom() - radius), FRAC_PI_2),
    ];
    for (center, start) in corners {
        vertices.extend(sector(
            center,
            radius,
            start,
            start + FRAC_PI_2,
            color,
            CORNER_SEGMENTS,
        ));
    }

    vertices
}

/// Generate vertices for a thick line segment
pub fn line(from: Vec2, to: Vec2, width: f32, color: [f32; 4]) -> Vec<Vertex> {
    let dir = (to - from).normalize_or_zero();
    if dir == Vec2::ZERO {
        return Vec::new();
    }
    // Perpendicular for width
    let perp = Vec2::new(-dir.y, dir.x) * (width / 2.0);

    let a1 = from + perp;
    let a2 = from - perp;
    let b1 = to + perp;
    let b2 = to - perp;

    vec![
        Vertex::new(a1.x, a1.y, color),
        Vertex::new(a2.x, a2.y, color),
        Vertex::new(b1.x, b1.y, color),
        Vertex::new(b1.x, b1.y, color),
        Vertex::new(a2.x, a2.y, color),
        Vertex::new(b2.x, b2.y, color),
    ]
}

/// Axis-aligned bounds of a vertex list as (min, max)
pub fn bounds(vertices: &[Vertex]) -> Option<(Vec2, Vec2)> {
    let mut iter = vertices.iter().map(|v| Vec2::from(v.position));
    let first = iter.next()?;
    Some(iter.fold((first, first), |(min, max), p| (min.min(p), max.max(p))))
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: [f32; 4] = [1.0, 0.0, 0.0, 1.0];

    fn approx(a: Vec2, b: Vec2) -> bool {
        (a - b).length() < 0.001
    }

    #[test]
    fn test_circle_stays_within_radius() {
        let center = Vec2::new(50.0, 50.0);
        let verts = circle(center, 10.0, RED, CIRCLE_SEGMENTS);
        assert_eq!(verts.len(), (CIRCLE_SEGMENTS * 3) as usize);
        assert!(verts
            .iter()
            .all(|v| Vec2::from(v.position).distance(center) <= 10.001));
    }

    #[test]
    fn test_rect_bounds() {
        let verts = rect(Rect::new(5.0, 15.0, 70.0, 65.0), RED);
        assert_eq!(verts.len(), 6);
        let (min, max) = bounds(&verts).unwrap();
        assert_eq!(min, Vec2::new(5.0, 15.0));
        assert_eq!(max, Vec2::new(75.0, 80.0));
    }

    #[test]
    fn test_empty_rect_has_no_vertices() {
        assert!(rect(Rect::new(0.0, 0.0, 0.0, 10.0), RED).is_empty());
    }

    #[test]
    fn test_rounded_rect_keeps_bounds() {
        let r = Rect::new(0.0, 10.0, 80.0, 10.0);
        let verts = rounded_rect(r, 3.0, RED);
        let (min, max) = bounds(&verts).unwrap();
        assert!(approx(min, Vec2::new(0.0, 10.0)));
        assert!(approx(max, Vec2::new(80.0, 20.0)));
        // Corners are cut
        assert!(!verts.iter().any(|v| approx(Vec2::from(v.position), Vec2::new(0.0, 10.0))));
    }

    #[test]
    fn test_rounded_rect_radius_clamped() {
        let verts = rounded_rect(Rect::new(0.0, 0.0, 4.0, 40.0), 10.0, RED);
        let (min, max) = bounds(&verts).unwrap();
        assert!(approx(min, Vec2::ZERO));
        assert!(approx(max, Vec2::new(4.0, 40.0)));
    }

    #[test]
    fn test_horizontal_line_thickness() {
        let verts = line(Vec2::new(10.0, 64.0), Vec2::new(70.0, 64.0), 2.0, RED);
        let (min, max) = bounds(&verts).unwrap();
        assert!(approx(min, Vec2::new(10.0, 63.0)));
        assert!(approx(max, Vec2::new(70.0, 65.0)));
    }

    #[test]
    fn test_degenerate_line() {
        assert!(line(Vec2::ONE, Vec2::ONE, 2.0, RED).is_empty());
    }
}
