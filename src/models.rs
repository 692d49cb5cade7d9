/// Axis-aligned rectangle in image pixel coordinates.
///
/// Edges follow the usual raster convention: `left`/`top` inclusive,
/// `right`/`bottom` exclusive, so `width == right - left`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundingBox {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl BoundingBox {
    pub fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Width in pixels, clamped to zero for inverted edges.
    pub fn width(&self) -> u32 {
        (self.right - self.left).max(0) as u32
    }

    /// Height in pixels, clamped to zero for inverted edges.
    pub fn height(&self) -> u32 {
        (self.bottom - self.top).max(0) as u32
    }

    /// True when the box encloses no pixels.
    pub fn is_degenerate(&self) -> bool {
        self.width() == 0 || self.height() == 0
    }

    /// Returns the box with swapped edges fixed so that
    /// `left <= right` and `top <= bottom`.
    pub fn normalized(self) -> Self {
        Self {
            left: self.left.min(self.right),
            top: self.top.min(self.bottom),
            right: self.left.max(self.right),
            bottom: self.top.max(self.bottom),
        }
    }
}

/// One detected object: a rectangle plus the text drawn with it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetectionBox {
    pub rect: BoundingBox,
    pub label: String,
}

impl DetectionBox {
    pub fn new(rect: BoundingBox, label: impl Into<String>) -> Self {
        Self {
            rect,
            label: label.into(),
        }
    }
}

/// Builds the display label for a detection, e.g. `"chair, 92%"`.
///
/// A detection without a category gets `"Unknown"` with no confidence
/// suffix; the confidence of an unlabeled detection is meaningless.
pub fn format_label(category: Option<&str>, confidence: f32) -> String {
    match category {
        Some(name) => format!("{}, {}%", name, (confidence * 100.0) as i32),
        None => "Unknown".to_string(),
    }
}
