//! Generates a sample photo plus a matching detections sidecar, so the
//! CLI can be tried end to end:
//!
//!   cargo run --example make_sample
//!   cargo run -- sample_image.jpg --boxes sample_boxes.json -o annotated.png

use image::{Rgb, RgbImage};
use std::fs;

fn main() {
    let mut img = RgbImage::new(800, 600);

    // Sky-to-ground gradient backdrop
    for y in 0..600 {
        for x in 0..800 {
            let r = (x * 255 / 800) as u8;
            let g = (y * 255 / 600) as u8;
            img.put_pixel(x, y, Rgb([r, g, 160]));
        }
    }

    // Two darker blobs standing in for objects
    for (x0, y0, x1, y1) in [(120u32, 260u32, 300u32, 520u32), (480, 180, 700, 420)] {
        for y in y0..y1 {
            for x in x0..x1 {
                let Rgb([r, g, b]) = *img.get_pixel(x, y);
                img.put_pixel(x, y, Rgb([r / 3, g / 3, b / 3]));
            }
        }
    }

    img.save("sample_image.jpg").unwrap();

    let sidecar = r#"[
  { "category": "chair", "confidence": 0.92, "box_px": [120, 260, 300, 520] },
  { "category": "table", "confidence": 0.81, "box_px": [480, 180, 700, 420] }
]
"#;
    fs::write("sample_boxes.json", sidecar).unwrap();

    println!("Created sample_image.jpg (800x600) and sample_boxes.json");
}
