use crate::shared::dimensions::Dimensions;
use crate::shared::error::FaceCropError;
use crate::shared::image_source::ImageSource;
use crate::sizing::domain::intrinsic_size_probe::IntrinsicSizeProbe;

/// Reads natural image dimensions from the file header.
///
/// Only the header is decoded, so probing is cheap even for large photos.
pub struct ImageFileProbe;

impl ImageFileProbe {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ImageFileProbe {
    fn default() -> Self {
        Self::new()
    }
}

impl IntrinsicSizeProbe for ImageFileProbe {
    fn probe(&self, source: &ImageSource) -> Result<Dimensions, FaceCropError> {
        let (width, height) =
            image::image_dimensions(source.path()).map_err(|e| FaceCropError::Load {
                locator: source.path().to_path_buf(),
                reason: e.to_string(),
            })?;
        log::debug!("{source}: intrinsic size {width}x{height}");
        Ok(Dimensions::from_pixels(width, height))
    }
}
