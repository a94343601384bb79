use crate::page::domain::image_element::ImageElement;
use crate::shared::dimensions::Dimensions;
use crate::shared::error::FaceCropError;
use crate::shared::image_source::ImageSource;
use crate::shared::rendered_box::RenderedBox;
use crate::sizing::domain::intrinsic_size_probe::IntrinsicSizeProbe;

pub fn resolve_intrinsic_size(
    probe: &dyn IntrinsicSizeProbe,
    source: &ImageSource,
) -> Result<Dimensions, FaceCropError> {
    let size = probe.probe(source)?;
    size.ensure_usable("intrinsic image")?;
    Ok(size)
}

/// Measures the element's layout box on an unstyled off-screen clone.
///
/// The live element may already carry crop styles from an earlier run, and
/// those change its box; the clone always reports the natural layout.
pub fn resolve_rendered_box(element: &dyn ImageElement) -> Result<RenderedBox, FaceCropError> {
    let measured = element.unstyled_clone().layout_box();
    measured.size().ensure_usable("rendered image")?;
    Ok(measured)
}
