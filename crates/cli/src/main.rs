mod settings;

use std::fs;
use std::path::PathBuf;
use std::process;
use std::sync::Arc;

use clap::Parser;

use face_crop_core::detection::domain::face_detector::FaceDetector;
use face_crop_core::detection::infrastructure::sidecar_face_detector::SidecarFaceDetector;
use face_crop_core::page::infrastructure::layout_document::LayoutDocument;
use face_crop_core::pipeline::crop_page_use_case::{CropPageUseCase, PageReport};
use face_crop_core::sizing::infrastructure::image_file_probe::ImageFileProbe;

use settings::Settings;

/// Compute face-aware crop styles for the images on a page.
#[derive(Parser)]
#[command(name = "face-crop")]
struct Cli {
    /// Page layout JSON describing image containers and their layout boxes.
    layout: PathBuf,

    /// Write the processed page here instead of stdout.
    #[arg(long)]
    output: Option<PathBuf>,

    /// Directory holding `<stem>.faces.json` detections (default: next to each image).
    #[arg(long)]
    faces_dir: Option<PathBuf>,

    /// Run as if face detection were unavailable.
    #[arg(long)]
    no_detection: bool,

    /// Draw an overlay rectangle around every detected face.
    #[arg(long)]
    draw_face_bounding_box: bool,

    /// Do not set object-fit and aspect-ratio.
    #[arg(long)]
    no_object_fit: bool,

    /// Do not set object-position.
    #[arg(long)]
    no_object_position: bool,

    /// Store the resulting defaults in the user settings file.
    #[arg(long)]
    save_defaults: bool,
}

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    validate(&cli)?;

    let settings = Settings::load().with_overrides(
        cli.draw_face_bounding_box,
        cli.no_object_fit,
        cli.no_object_position,
    );
    if cli.save_defaults {
        settings.save();
    }

    let mut document = LayoutDocument::load(&cli.layout)?.with_face_detector(build_detector(&cli));
    let use_case = CropPageUseCase::new(Arc::new(ImageFileProbe::new()), settings.defaults);
    let report = use_case.execute(&mut document);
    log_summary(&report);

    let json = serde_json::to_string_pretty(&document.snapshot())?;
    match &cli.output {
        Some(path) => {
            fs::write(path, json)?;
            log::info!("Output written to {}", path.display());
        }
        None => println!("{json}"),
    }
    Ok(())
}

fn build_detector(cli: &Cli) -> Option<Arc<dyn FaceDetector>> {
    if cli.no_detection {
        return None;
    }
    match &cli.faces_dir {
        Some(dir) => SidecarFaceDetector::in_directory(dir)
            .ok()
            .map(|d| Arc::new(d) as Arc<dyn FaceDetector>),
        None => Some(Arc::new(SidecarFaceDetector::beside_images()) as Arc<dyn FaceDetector>),
    }
}

fn validate(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    if !cli.layout.exists() {
        return Err(format!("Layout file not found: {}", cli.layout.display()).into());
    }
    if cli.no_detection && cli.faces_dir.is_some() {
        return Err("--no-detection and --faces-dir are mutually exclusive".into());
    }
    Ok(())
}

fn log_summary(report: &PageReport) {
    match report {
        PageReport::Unsupported => {
            log::warn!("Face detection unavailable; page marked as not supported")
        }
        PageReport::Processed(images) => log::info!(
            "Processed {} image(s): {} cropped, {} without faces, {} failed",
            images.len(),
            report.applied_count(),
            report.no_faces_count(),
            report.failed_count()
        ),
    }
}
