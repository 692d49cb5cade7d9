#![allow(dead_code)]

use image::{DynamicImage, ImageBuffer, Rgb, Rgba, RgbaImage};
use objmark::{BoundingBox, DetectionBox};
use std::io::{Cursor, Write};
use tempfile::NamedTempFile;

/// The backdrop color of `test_image`, as it appears after RGBA conversion.
pub const BACKDROP: Rgba<u8> = Rgba([32, 32, 32, 255]);

/// Solid dark backdrop for pixel-level overlay assertions.
pub fn test_image(width: u32, height: u32) -> DynamicImage {
    DynamicImage::ImageRgb8(ImageBuffer::from_fn(width, height, |_, _| {
        Rgb([32u8, 32, 32])
    }))
}

pub fn boxed(left: i32, top: i32, right: i32, bottom: i32, label: &str) -> DetectionBox {
    DetectionBox::new(BoundingBox::new(left, top, right, bottom), label)
}

/// Creates a 100x100 red test image on disk and returns the temp file.
/// The file will be automatically cleaned up when dropped.
pub fn create_test_image_file() -> NamedTempFile {
    let img = ImageBuffer::from_fn(100, 100, |_, _| Rgb([255u8, 0u8, 0u8]));
    let file = tempfile::Builder::new()
        .suffix(".png")
        .tempfile()
        .expect("Failed to create temp image file");
    img.save_with_format(file.path(), image::ImageFormat::Png)
        .expect("Failed to save test image");
    file
}

/// A 16x8 gradient, JPEG-encoded in memory.
fn jpeg_bytes_16x8() -> Vec<u8> {
    let img = ImageBuffer::from_fn(16, 8, |x, _| Rgb([(x * 16) as u8, 64u8, 64u8]));
    let mut encoded = Vec::new();
    DynamicImage::ImageRgb8(img)
        .write_to(&mut Cursor::new(&mut encoded), image::ImageFormat::Jpeg)
        .expect("Failed to encode jpeg");
    encoded
}

/// APP1 segment carrying a little-endian TIFF block with a single
/// EXIF orientation entry (tag 0x0112).
fn exif_orientation_segment(orientation: u16) -> Vec<u8> {
    let mut seg = vec![0xFF, 0xE1, 0x00, 0x22];
    seg.extend_from_slice(b"Exif\0\0");
    seg.extend_from_slice(&[0x49, 0x49, 0x2A, 0x00, 0x08, 0x00, 0x00, 0x00]);
    seg.extend_from_slice(&[0x01, 0x00]);
    seg.extend_from_slice(&[0x12, 0x01, 0x03, 0x00, 0x01, 0x00, 0x00, 0x00]);
    seg.extend_from_slice(&orientation.to_le_bytes());
    seg.extend_from_slice(&[0x00, 0x00]);
    seg.extend_from_slice(&[0x00, 0x00, 0x00, 0x00]);
    seg
}

fn write_jpeg_file(bytes: &[u8]) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".jpg")
        .tempfile()
        .expect("Failed to create temp jpeg file");
    file.write_all(bytes).expect("Failed to write jpeg");
    file
}

/// 16x8 JPEG with no EXIF metadata.
pub fn create_plain_jpeg_file() -> NamedTempFile {
    write_jpeg_file(&jpeg_bytes_16x8())
}

/// 16x8 JPEG whose EXIF says the camera was held rotated
/// (orientation 6: rotate 90 degrees clockwise to display upright).
pub fn create_rotated_jpeg_file() -> NamedTempFile {
    let encoded = jpeg_bytes_16x8();
    // Splice the APP1 segment in right after the SOI marker.
    let mut with_exif = encoded[..2].to_vec();
    with_exif.extend_from_slice(&exif_orientation_segment(6));
    with_exif.extend_from_slice(&encoded[2..]);
    write_jpeg_file(&with_exif)
}

/// Writes a JSON sidecar to a temp file.
pub fn sidecar_file(json: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".json")
        .tempfile()
        .expect("Failed to create temp sidecar file");
    file.write_all(json.as_bytes())
        .expect("Failed to write sidecar");
    file
}

/// Number of pixels in the raster with exactly this color.
pub fn count_pixels(img: &RgbaImage, color: Rgba<u8>) -> usize {
    img.pixels().filter(|p| **p == color).count()
}
