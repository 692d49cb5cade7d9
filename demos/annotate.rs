//! Renders a few hand-written detections onto a synthetic image and
//! saves the result, so the overlay can be eyeballed without a model.

use image::{DynamicImage, Rgb, RgbImage};
use objmark::font::default_font;
use objmark::overlay::{OverlayStyle, draw_detection_results};
use objmark::{BoundingBox, DetectionBox};

fn main() {
    let mut img = RgbImage::new(1000, 800);
    for y in 0..800 {
        for x in 0..1000 {
            let r = (x * 255 / 1000) as u8;
            let g = (y * 255 / 800) as u8;
            img.put_pixel(x, y, Rgb([r, g, 128]));
        }
    }
    let img = DynamicImage::ImageRgb8(img);

    let boxes = vec![
        DetectionBox::new(BoundingBox::new(100, 100, 500, 300), "cat, 87%"),
        DetectionBox::new(BoundingBox::new(550, 350, 950, 750), "chair, 92%"),
        // Deliberately narrow box: the label shrinks to fit.
        DetectionBox::new(BoundingBox::new(120, 450, 280, 600), "potted plant, 64%"),
    ];

    let font = default_font();
    let annotated = draw_detection_results(&img, &boxes, &OverlayStyle::default(), &font);

    annotated.save("annotated_demo.png").unwrap();
    println!("Saved annotated_demo.png with {} boxes", boxes.len());
}
