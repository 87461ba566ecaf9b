//! Front-end settings
//!
//! Only presentation knobs live here. Game rules are fixed in `consts`.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::assets::BUCKET_IMAGE;
use crate::consts::TARGET_FPS;

/// Window and presentation preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Window title
    pub title: String,
    /// Bucket icon image; the procedural icon is used if it can't be loaded
    pub bucket_image: PathBuf,
    /// Frames (and simulation ticks) per second
    pub target_fps: u32,
    /// Present with vsync
    pub vsync: bool,
    /// Clouds shift slightly every frame
    pub cloud_jitter: bool,
    /// Fixed RNG seed for reproducible runs (None = seed from the system time)
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            title: "S3 Rain Catcher".to_string(),
            bucket_image: PathBuf::from(BUCKET_IMAGE),
            target_fps: TARGET_FPS,
            vsync: true,
            cloud_jitter: true,
            seed: None,
        }
    }
}

impl Settings {
    /// The configured seed, or one derived from the current time
    pub fn resolve_seed(&self) -> u64 {
        self.seed.unwrap_or_else(|| {
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .map(|d| d.as_nanos() as u64)
                .unwrap_or(0)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.bucket_image, PathBuf::from("s3.png"));
        assert_eq!(settings.target_fps, 60);
        assert!(settings.cloud_jitter);
        assert_eq!(settings.seed, None);
    }

    #[test]
    fn test_partial_settings_fill_defaults() {
        let settings: Settings =
            serde_json::from_str(r#"{ "cloud_jitter": false, "seed": 7 }"#).unwrap();
        assert!(!settings.cloud_jitter);
        assert_eq!(settings.resolve_seed(), 7);
        assert_eq!(settings.title, Settings::default().title);
        assert_eq!(settings.target_fps, TARGET_FPS);
    }
}
