use crate::cropping::domain::coordinate_mapper::map_to_rendered;
use crate::cropping::domain::crop_resolver::CropResolver;
use crate::cropping::domain::face_aggregator::aggregate;
use crate::cropping::domain::overlay_projector::project_overlays;
use crate::shared::crop_descriptor::CropDescriptor;
use crate::shared::cropper_options::CropperOptions;
use crate::shared::dimensions::Dimensions;
use crate::shared::error::FaceCropError;
use crate::shared::face_box::FaceBox;
use crate::shared::overlay_rect::OverlayRect;
use crate::shared::rendered_box::RenderedBox;

/// Everything one image's pipeline has measured, owned by that pipeline.
///
/// Built after the I/O stages; the computations on it are synchronous and
/// side-effect free.
#[derive(Clone, Debug)]
pub struct ImageCropContext {
    pub intrinsic: Dimensions,
    pub rendered: RenderedBox,
    pub faces: Vec<FaceBox>,
}

impl ImageCropContext {
    pub fn overlays(&self) -> Result<Vec<OverlayRect>, FaceCropError> {
        project_overlays(&self.faces, &self.intrinsic, &self.rendered)
    }

    /// Union of all faces, mapped to the rendered box and resolved to styling.
    pub fn crop(
        &self,
        resolver: &CropResolver,
        options: &CropperOptions,
    ) -> Result<CropDescriptor, FaceCropError> {
        let outer = aggregate(&self.faces)?;
        let mapped = map_to_rendered(&outer, &self.intrinsic, &self.rendered)?;
        resolver.resolve(&mapped, &self.rendered, options)
    }
}
