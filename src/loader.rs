//! Image loading and saving glue around the renderer: EXIF-aware
//! decoding, display downsampling, and timestamped output names.

use std::path::{Path, PathBuf};

use anyhow::Result;
use image::metadata::Orientation;
use image::{DynamicImage, ImageDecoder, ImageReader, imageops::FilterType};
use time::OffsetDateTime;

/// Decodes an image and applies its EXIF orientation, so that photos
/// taken with a rotated camera come out upright.
///
/// Falls back to a plain decode for formats whose decoder does not
/// expose metadata.
pub fn load_oriented(path: &Path) -> Result<DynamicImage> {
    let reader = ImageReader::open(path)?.with_guessed_format()?;

    match reader.into_decoder() {
        Ok(mut decoder) => {
            let orientation = decoder
                .orientation()
                .unwrap_or(Orientation::NoTransforms);
            let mut img = DynamicImage::from_decoder(decoder)
                .map_err(|e| anyhow::anyhow!("Failed to decode image: {}", e))?;
            if orientation != Orientation::NoTransforms {
                img.apply_orientation(orientation);
            }
            Ok(img)
        }
        Err(_) => ImageReader::open(path)?
            .decode()
            .map_err(|e| anyhow::anyhow!("Failed to decode image: {}", e)),
    }
}

/// Integer factor by which an image must shrink to fit the supplied
/// bounds, never below 1.
///
/// An absent (or zero) bound leaves that axis unconstrained, so a
/// height-only bound still downsamples tall images.
pub fn display_scale_factor(
    width: u32,
    height: u32,
    max_width: Option<u32>,
    max_height: Option<u32>,
) -> u32 {
    let per_axis = |dim: u32, bound: Option<u32>| match bound {
        Some(b) if b > 0 => Some((dim / b).max(1)),
        _ => None,
    };
    match (per_axis(width, max_width), per_axis(height, max_height)) {
        (Some(fw), Some(fh)) => fw.min(fh),
        (Some(f), None) | (None, Some(f)) => f,
        (None, None) => 1,
    }
}

/// Shrinks the image by an integer factor so it fits the given bounds.
/// Images already within bounds are returned unchanged.
pub fn downsample_for_display(
    img: &DynamicImage,
    max_width: Option<u32>,
    max_height: Option<u32>,
) -> DynamicImage {
    let factor = display_scale_factor(img.width(), img.height(), max_width, max_height);
    if factor == 1 {
        return img.clone();
    }
    img.resize_exact(
        img.width() / factor,
        img.height() / factor,
        FilterType::Triangle,
    )
}

/// Builds an output path like `dir/annotated_20260830_142259.png`.
pub fn timestamped_output_path(dir: &Path, prefix: &str, extension: &str) -> Result<PathBuf> {
    let format =
        time::format_description::parse("[year][month][day]_[hour][minute][second]")?;
    let now = OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc());
    Ok(dir.join(format!("{}_{}.{}", prefix, now.format(&format)?, extension)))
}
