use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::detection::domain::face_detector::FaceDetector;
use crate::shared::constants::FACES_SIDECAR_SUFFIX;
use crate::shared::error::FaceCropError;
use crate::shared::face_box::FaceBox;
use crate::shared::image_source::ImageSource;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct DetectedFaceRecord {
    bounding_box: BoundingBoxRecord,
}

/// Extra DOMRect fields (`x`, `y`, `right`, `bottom`) are ignored; the
/// derived edges are recomputed from origin and extent.
#[derive(Deserialize)]
struct BoundingBoxRecord {
    top: f64,
    left: f64,
    width: f64,
    height: f64,
}

/// Replays face detections stored as JSON beside (or apart from) the images.
///
/// For `photos/beach.jpg` the detections are read from `beach.faces.json`,
/// either next to the image or inside the configured directory. The file
/// holds the detector's output verbatim: an array of
/// `{"boundingBox": {"top", "left", "width", "height", ...}}`. A missing
/// file means no faces were found.
pub struct SidecarFaceDetector {
    faces_dir: Option<PathBuf>,
}

impl SidecarFaceDetector {
    /// Reads sidecars stored next to each image.
    pub fn beside_images() -> Self {
        Self { faces_dir: None }
    }

    /// Reads sidecars from `dir`; fails when `dir` is not a directory.
    pub fn in_directory(dir: &Path) -> Result<Self, FaceCropError> {
        if !dir.is_dir() {
            log::warn!("Face detections directory {} not found", dir.display());
            return Err(FaceCropError::CapabilityUnavailable);
        }
        Ok(Self {
            faces_dir: Some(dir.to_path_buf()),
        })
    }

    fn sidecar_path(&self, source: &ImageSource) -> PathBuf {
        let path = source.path();
        let stem = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        let name = format!("{stem}{FACES_SIDECAR_SUFFIX}");
        match &self.faces_dir {
            Some(dir) => dir.join(name),
            None => path.with_file_name(name),
        }
    }
}

impl FaceDetector for SidecarFaceDetector {
    fn detect(&self, source: &ImageSource) -> Result<Vec<FaceBox>, FaceCropError> {
        let sidecar = self.sidecar_path(source);
        let detection_error = |reason: String| FaceCropError::Detection {
            locator: source.path().to_path_buf(),
            reason,
        };

        let json = match fs::read_to_string(&sidecar) {
            Ok(json) => json,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                log::debug!("{source}: no detections at {}", sidecar.display());
                return Ok(Vec::new());
            }
            Err(e) => return Err(detection_error(format!("{}: {e}", sidecar.display()))),
        };

        let records: Vec<DetectedFaceRecord> = serde_json::from_str(&json)
            .map_err(|e| detection_error(format!("{}: {e}", sidecar.display())))?;

        Ok(records
            .into_iter()
            .map(|r| {
                let b = r.bounding_box;
                FaceBox::new(b.top, b.left, b.width, b.height)
            })
            .collect())
    }
}
