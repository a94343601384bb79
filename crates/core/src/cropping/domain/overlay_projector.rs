use crate::cropping::domain::coordinate_mapper::map_to_rendered;
use crate::shared::dimensions::Dimensions;
use crate::shared::error::FaceCropError;
use crate::shared::face_box::{FaceBox, MappedBox};
use crate::shared::overlay_rect::OverlayRect;
use crate::shared::rendered_box::RenderedBox;
use crate::shared::style::floor_percent;

/// Expresses one rendered-space face as floored percentages of the element.
pub fn project_overlay(
    face: &MappedBox,
    rendered: &RenderedBox,
) -> Result<OverlayRect, FaceCropError> {
    rendered.size().ensure_usable("rendered image")?;

    Ok(OverlayRect {
        top_pct: floor_percent(face.top, rendered.height),
        left_pct: floor_percent(face.left, rendered.width),
        width_pct: floor_percent(face.width, rendered.width),
        height_pct: floor_percent(face.height, rendered.height),
    })
}

/// Maps and projects every detected face, preserving input order.
pub fn project_overlays(
    faces: &[FaceBox],
    intrinsic: &Dimensions,
    rendered: &RenderedBox,
) -> Result<Vec<OverlayRect>, FaceCropError> {
    faces
        .iter()
        .map(|face| {
            let mapped = map_to_rendered(face, intrinsic, rendered)?;
            project_overlay(&mapped, rendered)
        })
        .collect()
}
