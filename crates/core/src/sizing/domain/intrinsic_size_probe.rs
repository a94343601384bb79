use crate::shared::dimensions::Dimensions;
use crate::shared::error::FaceCropError;
use crate::shared::image_source::ImageSource;

/// Loads an image resource on its own, outside any layout, and reports its
/// natural pixel size. Failures are [`FaceCropError::Load`].
pub trait IntrinsicSizeProbe: Send + Sync {
    fn probe(&self, source: &ImageSource) -> Result<Dimensions, FaceCropError>;
}
