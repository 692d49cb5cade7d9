//! Detections stored next to the image as a JSON sidecar file.
//!
//! Format: a JSON array of objects, one per detected object:
//!
//! ```json
//! [
//!   { "category": "chair", "confidence": 0.92, "box_px": [100, 100, 500, 300] },
//!   { "box_px": [40, 40, 80, 90] }
//! ]
//! ```
//!
//! `category` and `confidence` are optional; a detection without a
//! category is labeled `"Unknown"`.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use image::DynamicImage;
use serde::Deserialize;

use super::Detector;
use crate::models::{BoundingBox, DetectionBox, format_label};

/// One detection as stored in the sidecar file.
#[derive(Debug, Deserialize)]
pub struct RawDetection {
    pub category: Option<String>,
    #[serde(default)]
    pub confidence: f32,
    /// `[left, top, right, bottom]` in image pixels.
    pub box_px: [i32; 4],
}

impl From<RawDetection> for DetectionBox {
    fn from(raw: RawDetection) -> Self {
        let [left, top, right, bottom] = raw.box_px;
        let rect = BoundingBox::new(left, top, right, bottom).normalized();
        let label = format_label(raw.category.as_deref(), raw.confidence);
        DetectionBox::new(rect, label)
    }
}

/// Reads detections for an image from a JSON sidecar file.
pub struct SidecarDetector {
    path: PathBuf,
}

impl SidecarDetector {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn load(&self) -> Result<Vec<DetectionBox>> {
        let bytes = fs::read(&self.path)
            .with_context(|| format!("Failed to read sidecar {}", self.path.display()))?;
        let raw: Vec<RawDetection> = serde_json::from_slice(&bytes)
            .with_context(|| format!("Failed to parse sidecar {}", self.path.display()))?;
        Ok(raw.into_iter().map(DetectionBox::from).collect())
    }
}

impl Detector for SidecarDetector {
    fn detect(&self, _img: &DynamicImage) -> Result<Vec<DetectionBox>> {
        self.load()
    }
}
