pub mod sidecar;

pub use sidecar::SidecarDetector;

use anyhow::Result;
use image::DynamicImage;

use crate::models::DetectionBox;

/// Capability interface for detection backends.
///
/// The overlay renderer only ever sees the returned boxes, so any
/// backend works here: an on-device model, a remote API, or a sidecar
/// file written by an earlier run.
pub trait Detector {
    fn detect(&self, img: &DynamicImage) -> Result<Vec<DetectionBox>>;
}
