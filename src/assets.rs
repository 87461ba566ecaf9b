//! Bucket icon
//!
//! The icon is loaded from an image file when one is present. Otherwise the
//! procedural S3 bucket is drawn: body, rim, label and three level marks.
//! Either way the result is a vertex list in icon-local pixels
//! (0..CATCHER_WIDTH, 0..CATCHER_HEIGHT) that the scene translates to the
//! bucket's position each frame.

use std::path::Path;

use glam::Vec2;
use image::imageops::FilterType;
use thiserror::Error;

use crate::consts::{CATCHER_HEIGHT, CATCHER_WIDTH};
use crate::renderer::font::{self, TextSize};
use crate::renderer::shapes;
use crate::renderer::vertex::{Vertex, colors};
use crate::sim::Rect;

/// Default icon file name, looked up relative to the working directory
pub const BUCKET_IMAGE: &str = "s3.png";

#[derive(Debug, Error)]
pub enum AssetError {
    #[error("failed to decode image: {0}")]
    Image(#[from] image::ImageError),
    #[error("image has no visible pixels")]
    Empty,
}

/// Where the icon came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconSource {
    Image,
    Fallback,
}

/// Bucket icon geometry in local coordinates
#[derive(Debug, Clone)]
pub struct BucketIcon {
    pub source: IconSource,
    pub vertices: Vec<Vertex>,
}

impl BucketIcon {
    /// Load `path`, falling back to the procedural icon on any failure
    pub fn load_or_fallback(path: &Path) -> Self {
        match load_image_icon(path) {
            Ok(vertices) => {
                log::info!("Loaded bucket icon from {}", path.display());
                Self {
                    source: IconSource::Image,
                    vertices,
                }
            }
            Err(e) => {
                log::info!("Could not load {}, using fallback image", path.display());
                log::debug!("Bucket icon load error: {e}");
                Self::fallback()
            }
        }
    }

    /// The procedural S3 bucket
    pub fn fallback() -> Self {
        Self {
            source: IconSource::Fallback,
            vertices: fallback_icon(),
        }
    }

    /// Icon vertices placed with their top-left corner at `origin`
    pub fn placed_at(&self, origin: Vec2) -> impl Iterator<Item = Vertex> + '_ {
        self.vertices
            .iter()
            .map(move |v| v.translated(origin.x, origin.y))
    }
}

/// Decode an image, scale it to the bucket size and emit a quad per visible pixel
fn load_image_icon(path: &Path) -> Result<Vec<Vertex>, AssetError> {
    let img = image::open(path)?
        .resize_exact(CATCHER_WIDTH as u32, CATCHER_HEIGHT as u32, FilterType::Nearest)
        .to_rgba8();

    let mut vertices = Vec::new();
    for (x, y, pixel) in img.enumerate_pixels() {
        let [r, g, b, a] = pixel.0;
        if a == 0 {
            continue;
        }
        let color = [
            r as f32 / 255.0,
            g as f32 / 255.0,
            b as f32 / 255.0,
            a as f32 / 255.0,
        ];
        vertices.extend(shapes::rect(Rect::new(x as f32, y as f32, 1.0, 1.0), color));
    }

    if vertices.is_empty() {
        return Err(AssetError::Empty);
    }
    Ok(vertices)
}

/// Body, rim, label, then level marks, in that paint order
fn fallback_icon() -> Vec<Vertex> {
    let mut vertices = Vec::new();

    let body = Rect::new(5.0, 15.0, CATCHER_WIDTH - 10.0, CATCHER_HEIGHT - 15.0);
    vertices.extend(shapes::rounded_rect(body, 5.0, colors::ORANGE));

    let rim = Rect::new(0.0, 10.0, CATCHER_WIDTH, 10.0);
    vertices.extend(shapes::rounded_rect(rim, 3.0, colors::DARK_ORANGE));

    let label_center = Vec2::new(
        (CATCHER_WIDTH as u32 / 2) as f32,
        (CATCHER_HEIGHT as u32 / 2) as f32,
    );
    vertices.extend(font::text_centered(
        "S3",
        label_center,
        TextSize::Logo,
        colors::WHITE,
    ));

    // Level marks at quarter heights of the body (integer division)
    let body_height = body.h as u32;
    for i in 1..=3 {
        let y = body.bottom() - (i * body_height / 4) as f32;
        vertices.extend(shapes::line(
            Vec2::new(body.left() + 5.0, y),
            Vec2::new(body.right() - 5.0, y),
            2.0,
            colors::DARK_ORANGE,
        ));
    }

    vertices
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::shapes::bounds;

    #[test]
    fn test_missing_file_falls_back() {
        let icon = BucketIcon::load_or_fallback(Path::new("definitely/not/here.png"));
        assert_eq!(icon.source, IconSource::Fallback);
        assert!(!icon.vertices.is_empty());
    }

    #[test]
    fn test_fallback_fits_bucket() {
        let icon = BucketIcon::fallback();
        let (min, max) = bounds(&icon.vertices).unwrap();
        assert!(min.x >= -0.001 && min.y >= 9.999);
        assert!(max.x <= CATCHER_WIDTH + 0.001 && max.y <= CATCHER_HEIGHT + 0.001);
    }

    #[test]
    fn test_fallback_level_marks() {
        let icon = BucketIcon::fallback();
        let marks: Vec<&[Vertex]> = icon.vertices.rchunks(6).take(3).collect();
        // Drawn last, bottom mark first: y = 64, 48, 32
        let mut ys: Vec<f32> = marks
            .iter()
            .map(|quad| {
                let (min, max) = bounds(quad).unwrap();
                assert!((min.x - 10.0).abs() < 0.001 && (max.x - 70.0).abs() < 0.001);
                (min.y + max.y) / 2.0
            })
            .collect();
        ys.sort_by(f32::total_cmp);
        assert_eq!(ys, vec![32.0, 48.0, 64.0]);
        assert!(marks.iter().all(|q| q.iter().all(|v| v.color == colors::DARK_ORANGE)));
    }

    #[test]
    fn test_fallback_has_white_label() {
        let icon = BucketIcon::fallback();
        assert!(icon.vertices.iter().any(|v| v.color == colors::WHITE));
    }

    #[test]
    fn test_image_icon_one_quad_per_opaque_pixel() {
        let dir = std::env::temp_dir().join(format!("rain-catcher-icon-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("bucket.png");

        // Left half opaque red, right half transparent
        let img = image::RgbaImage::from_fn(8, 8, |x, _| {
            if x < 4 {
                image::Rgba([255, 0, 0, 255])
            } else {
                image::Rgba([0, 0, 0, 0])
            }
        });
        img.save(&path).unwrap();

        let icon = BucketIcon::load_or_fallback(&path);
        assert_eq!(icon.source, IconSource::Image);
        // Scaled to 80x80: half the pixels visible
        assert_eq!(icon.vertices.len(), 40 * 80 * 6);
        let (_, max) = bounds(&icon.vertices).unwrap();
        assert_eq!(max, Vec2::new(40.0, 80.0));

        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_placed_at_translates() {
        let icon = BucketIcon::fallback();
        let placed: Vec<Vertex> = icon.placed_at(Vec2::new(360.0, 500.0)).collect();
        assert_eq!(placed.len(), icon.vertices.len());
        assert_eq!(placed[0].position[0], icon.vertices[0].position[0] + 360.0);
        assert_eq!(placed[0].position[1], icon.vertices[0].position[1] + 500.0);
    }
}
