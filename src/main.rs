use clap::Parser;
use std::path::{Path, PathBuf};

use objmark::detection::{Detector, SidecarDetector};
use objmark::font::default_font;
use objmark::loader;
use objmark::overlay::{OverlayStyle, draw_detection_results};

#[derive(Parser)]
#[command(name = "objmark")]
#[command(about = "Draw labeled object-detection boxes onto an image")]
struct Cli {
    /// Path to input image file
    #[arg(value_name = "IMAGE")]
    image_path: PathBuf,

    /// JSON sidecar file with detections for the image
    #[arg(long, value_name = "FILE")]
    boxes: PathBuf,

    /// Write the annotated image to this exact path
    #[arg(short, long, value_name = "FILE", conflicts_with = "out_dir")]
    output: Option<PathBuf>,

    /// Write the annotated image into this directory with a timestamped name
    #[arg(long, value_name = "DIR")]
    out_dir: Option<PathBuf>,

    /// Downsample the image to fit within this width before annotating
    #[arg(long, value_name = "PX")]
    max_width: Option<u32>,

    /// Downsample the image to fit within this height before annotating
    #[arg(long, value_name = "PX")]
    max_height: Option<u32>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();

    if args.verbose {
        println!("Loading image: {:?}", args.image_path);
    }

    let mut img = loader::load_oriented(&args.image_path)?;

    if args.verbose {
        println!("Image loaded: {}x{}", img.width(), img.height());
    }

    // Shrink for display the way a viewer would, before drawing, so
    // stroke width and font size stay proportionate on screen.
    if args.max_width.is_some() || args.max_height.is_some() {
        img = loader::downsample_for_display(&img, args.max_width, args.max_height);
        if args.verbose {
            println!("Downsampled to {}x{}", img.width(), img.height());
        }
    }

    let detector = SidecarDetector::new(&args.boxes);
    let boxes = detector.detect(&img)?;

    if args.verbose {
        println!("Loaded {} detections", boxes.len());
        for b in &boxes {
            println!(
                "  {} at ({}, {}) {}x{}",
                b.label,
                b.rect.left,
                b.rect.top,
                b.rect.width(),
                b.rect.height()
            );
        }
    }

    let font = default_font();
    let annotated = draw_detection_results(&img, &boxes, &OverlayStyle::default(), &font);

    let output_path = match (args.output, args.out_dir) {
        (Some(path), _) => path,
        (None, Some(dir)) => {
            std::fs::create_dir_all(&dir)?;
            loader::timestamped_output_path(&dir, "annotated", "png")?
        }
        (None, None) => loader::timestamped_output_path(Path::new("."), "annotated", "png")?,
    };

    annotated
        .save(&output_path)
        .map_err(|e| anyhow::anyhow!("Failed to save annotated image: {}", e))?;

    println!("\n=== Annotation Results ===");
    println!("Boxes drawn: {}", boxes.len());
    println!("Saved: {}", output_path.display());

    Ok(())
}
