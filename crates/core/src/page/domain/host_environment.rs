use std::sync::Arc;

use crate::detection::domain::face_detector::FaceDetector;
use crate::page::domain::image_element::ImageContainer;

/// The environment hosting the images: exposes the detection capability and
/// the image containers to process.
pub trait HostEnvironment {
    /// The environment's face detector, or `None` when detection is unavailable.
    fn face_detector(&self) -> Option<Arc<dyn FaceDetector>>;

    fn supports_face_detection(&self) -> bool {
        self.face_detector().is_some()
    }

    /// Sets the document-level "not supported" flag for the presentation layer.
    fn mark_unsupported(&mut self);

    fn image_containers(&mut self) -> Vec<&mut dyn ImageContainer>;
}
