use crate::shared::error::FaceCropError;
use crate::shared::face_box::FaceBox;
use crate::shared::image_source::ImageSource;

/// Domain interface for face detection.
///
/// Boxes are returned in the image's intrinsic pixel space. One detector is
/// shared by every per-image pipeline on a page, hence `Sync` and `&self`.
pub trait FaceDetector: Send + Sync {
    fn detect(&self, source: &ImageSource) -> Result<Vec<FaceBox>, FaceCropError>;
}
