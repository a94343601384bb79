use std::path::PathBuf;
use std::sync::Arc;
use std::thread;

use crate::cropping::domain::crop_resolver::CropResolver;
use crate::detection::domain::face_detector::FaceDetector;
use crate::page::domain::host_environment::HostEnvironment;
use crate::pipeline::crop_image_use_case::{CropImageUseCase, CropOutcome};
use crate::shared::cropper_options::CropperOptions;
use crate::shared::error::FaceCropError;
use crate::sizing::domain::intrinsic_size_probe::IntrinsicSizeProbe;

/// Result of one image's pipeline, in document order.
#[derive(Debug)]
pub struct ImageReport {
    pub index: usize,
    pub locator: PathBuf,
    pub outcome: Result<CropOutcome, FaceCropError>,
}

#[derive(Debug)]
pub enum PageReport {
    /// Detection was unavailable; only the fallback flag was set.
    Unsupported,
    Processed(Vec<ImageReport>),
}

impl PageReport {
    pub fn images(&self) -> &[ImageReport] {
        match self {
            PageReport::Unsupported => &[],
            PageReport::Processed(images) => images,
        }
    }

    pub fn applied_count(&self) -> usize {
        self.images()
            .iter()
            .filter(|r| matches!(r.outcome, Ok(CropOutcome::Applied { .. })))
            .count()
    }

    pub fn no_faces_count(&self) -> usize {
        self.images()
            .iter()
            .filter(|r| matches!(r.outcome, Ok(CropOutcome::NoFaces)))
            .count()
    }

    pub fn failed_count(&self) -> usize {
        self.images().iter().filter(|r| r.outcome.is_err()).count()
    }
}

/// Runs the crop pipeline for every image container on a page.
///
/// Capability is checked once up front. Each image then gets its own thread;
/// a failure in one image is reported but never reaches its siblings.
pub struct CropPageUseCase {
    probe: Arc<dyn IntrinsicSizeProbe>,
    defaults: CropperOptions,
}

impl CropPageUseCase {
    pub fn new(probe: Arc<dyn IntrinsicSizeProbe>, defaults: CropperOptions) -> Self {
        Self { probe, defaults }
    }

    pub fn execute(&self, host: &mut dyn HostEnvironment) -> PageReport {
        let detector = match ensure_supported(host) {
            Ok(detector) => detector,
            Err(e) => {
                log::warn!("{e}; signalling fallback");
                host.mark_unsupported();
                return PageReport::Unsupported;
            }
        };

        let image_use_case = CropImageUseCase::new(
            self.probe.clone(),
            detector,
            CropResolver::new(),
            self.defaults,
        );

        let containers = host.image_containers();
        let locators: Vec<PathBuf> = containers
            .iter()
            .map(|c| c.image().source().path().to_path_buf())
            .collect();

        let (report_tx, report_rx) = crossbeam_channel::unbounded();
        thread::scope(|scope| {
            let handles: Vec<_> = containers
                .into_iter()
                .enumerate()
                .map(|(index, container)| {
                    let report_tx = report_tx.clone();
                    let image_use_case = &image_use_case;
                    scope.spawn(move || {
                        let outcome = image_use_case.execute(container);
                        let _ = report_tx.send((index, outcome));
                    })
                })
                .collect();

            for (index, handle) in handles.into_iter().enumerate() {
                if handle.join().is_err() {
                    log::error!("Crop pipeline for {} panicked", locators[index].display());
                }
            }
        });
        drop(report_tx);

        let mut outcomes: Vec<(usize, Result<CropOutcome, FaceCropError>)> =
            report_rx.iter().collect();
        outcomes.sort_by_key(|(index, _)| *index);

        let images: Vec<ImageReport> = outcomes
            .into_iter()
            .map(|(index, outcome)| {
                let locator = locators[index].clone();
                match &outcome {
                    Ok(CropOutcome::NoFaces) => {
                        log::info!("{}: no faces, left uncropped", locator.display())
                    }
                    Ok(CropOutcome::Applied { face_count, .. }) => {
                        log::info!("{}: cropped around {face_count} face(s)", locator.display())
                    }
                    Err(e) => log::warn!("{}: {e}", locator.display()),
                }
                ImageReport {
                    index,
                    locator,
                    outcome,
                }
            })
            .collect();

        PageReport::Processed(images)
    }
}

fn ensure_supported(host: &dyn HostEnvironment) -> Result<Arc<dyn FaceDetector>, FaceCropError> {
    if !host.supports_face_detection() {
        return Err(FaceCropError::CapabilityUnavailable);
    }
    host.face_detector()
        .ok_or(FaceCropError::CapabilityUnavailable)
}
