//! Draws detection results onto an image: a stroked rectangle per box
//! plus a label fitted into the rectangle's width.

use ab_glyph::{Font, PxScale};
use image::{DynamicImage, Rgba, RgbaImage};
use imageproc::drawing::{draw_hollow_rect_mut, draw_text_mut, text_size};
use imageproc::rect::Rect;

use crate::models::{BoundingBox, DetectionBox};

pub const CYAN: Rgba<u8> = Rgba([0, 255, 255, 255]);

/// Visual parameters for the overlay.
#[derive(Debug, Clone)]
pub struct OverlayStyle {
    pub box_color: Rgba<u8>,
    pub text_color: Rgba<u8>,
    /// Outline thickness in pixels, drawn inward from the box edges.
    pub stroke_width: u32,
    /// Starting (and maximum) label size; labels only shrink from here.
    pub base_font_size: f32,
}

impl Default for OverlayStyle {
    fn default() -> Self {
        Self {
            box_color: CYAN,
            text_color: CYAN,
            stroke_width: 8,
            base_font_size: 96.0,
        }
    }
}

/// Scale that makes the label span at most `rect_width` pixels.
///
/// Labels are never scaled up past the base size, and a zero-width
/// rectangle or zero-width text keeps the base size (there is nothing
/// meaningful to fit against).
pub fn fit_scale(base: f32, text_width: u32, rect_width: u32) -> PxScale {
    if text_width == 0 || rect_width == 0 {
        return PxScale::from(base);
    }
    let candidate = base * rect_width as f32 / text_width as f32;
    PxScale::from(if candidate < base { candidate } else { base })
}

/// Left margin that centers the label in the rectangle, clamped so the
/// text never starts left of the rectangle's left edge.
pub fn label_margin(rect_width: u32, text_width: u32) -> i32 {
    (((rect_width as f32) - (text_width as f32)) / 2.0).max(0.0) as i32
}

/// Draws every box, in order, onto a copy of `image` and returns the copy.
///
/// Later boxes draw over earlier ones where they overlap. The input
/// image is never touched; boxes partially or fully outside the image
/// clip to the raster.
pub fn draw_detection_results<F: Font>(
    image: &DynamicImage,
    boxes: &[DetectionBox],
    style: &OverlayStyle,
    font: &F,
) -> RgbaImage {
    let mut output = image.to_rgba8();
    for detection in boxes {
        stroke_rect(&mut output, &detection.rect, style);
        draw_label(&mut output, detection, style, font);
    }
    output
}

/// Strokes the box outline as `stroke_width` nested one-pixel rectangles.
fn stroke_rect(image: &mut RgbaImage, rect: &BoundingBox, style: &OverlayStyle) {
    for inset in 0..style.stroke_width {
        let width = rect.width().saturating_sub(2 * inset);
        let height = rect.height().saturating_sub(2 * inset);
        if width == 0 || height == 0 {
            break;
        }
        let ring = Rect::at(rect.left + inset as i32, rect.top + inset as i32)
            .of_size(width, height);
        draw_hollow_rect_mut(image, ring, style.box_color);
    }
}

fn draw_label<F: Font>(
    image: &mut RgbaImage,
    detection: &DetectionBox,
    style: &OverlayStyle,
    font: &F,
) {
    if detection.label.is_empty() {
        return;
    }

    let rect_width = detection.rect.width();
    let (base_width, _) = text_size(
        PxScale::from(style.base_font_size),
        font,
        &detection.label,
    );
    let scale = fit_scale(style.base_font_size, base_width, rect_width);
    let (fitted_width, _) = text_size(scale, font, &detection.label);
    let margin = label_margin(rect_width, fitted_width);

    // Single line, anchored to the top edge of the box.
    draw_text_mut(
        image,
        style.text_color,
        detection.rect.left + margin,
        detection.rect.top,
        scale,
        font,
        &detection.label,
    );
}
