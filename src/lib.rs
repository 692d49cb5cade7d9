pub mod detection;
pub mod font;
pub mod loader;
pub mod models;
pub mod overlay;

pub use detection::{Detector, SidecarDetector};
pub use models::{BoundingBox, DetectionBox, format_label};
pub use overlay::{OverlayStyle, draw_detection_results};
