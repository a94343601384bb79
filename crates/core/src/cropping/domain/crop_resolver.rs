use crate::shared::crop_descriptor::{AspectRatio, CropDescriptor, ObjectFit, ObjectPosition};
use crate::shared::cropper_options::CropperOptions;
use crate::shared::error::FaceCropError;
use crate::shared::face_box::MappedBox;
use crate::shared::rendered_box::RenderedBox;
use crate::shared::style::floor_percent;

/// Turns the rendered-space union of all faces into crop styling.
///
/// The object position is anchored at the union's top-right corner so that
/// faces stay visible when the crop trims from the left and bottom.
pub struct CropResolver {
    aspect_ratio: AspectRatio,
}

impl CropResolver {
    pub fn new() -> Self {
        Self::with_aspect_ratio(AspectRatio::WIDESCREEN)
    }

    pub fn with_aspect_ratio(aspect_ratio: AspectRatio) -> Self {
        Self { aspect_ratio }
    }

    pub fn resolve(
        &self,
        outer: &MappedBox,
        rendered: &RenderedBox,
        options: &CropperOptions,
    ) -> Result<CropDescriptor, FaceCropError> {
        let mut descriptor = CropDescriptor::default();
        if !options.wants_crop() {
            return Ok(descriptor);
        }
        rendered.size().ensure_usable("rendered image")?;

        if options.set_object_position {
            descriptor.position = Some(ObjectPosition {
                x_pct: floor_percent(outer.right, rendered.width),
                y_pct: floor_percent(outer.top, rendered.height),
            });
        }
        if options.set_object_fit {
            descriptor.fit = Some(ObjectFit::Cover);
            descriptor.aspect_ratio = Some(self.aspect_ratio);
        }
        Ok(descriptor)
    }
}

impl Default for CropResolver {
    fn default() -> Self {
        Self::new()
    }
}
