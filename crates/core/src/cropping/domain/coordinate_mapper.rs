use crate::shared::dimensions::Dimensions;
use crate::shared::error::FaceCropError;
use crate::shared::face_box::{FaceBox, MappedBox};
use crate::shared::rendered_box::RenderedBox;

/// Rescales a box from intrinsic image pixels to rendered display pixels.
///
/// Each axis scales independently: `left`, `right` and `width` by
/// `rendered.width / intrinsic.width`, `top`, `bottom` and `height` by
/// `rendered.height / intrinsic.height`. The result is relative to the
/// element's own origin, not the page.
pub fn map_to_rendered(
    face: &FaceBox,
    intrinsic: &Dimensions,
    rendered: &RenderedBox,
) -> Result<MappedBox, FaceCropError> {
    intrinsic.ensure_usable("intrinsic image")?;
    rendered.size().ensure_usable("rendered image")?;

    let x = |value: f64| (value / intrinsic.width) * rendered.width;
    let y = |value: f64| (value / intrinsic.height) * rendered.height;

    Ok(MappedBox {
        top: y(face.top),
        bottom: y(face.bottom()),
        left: x(face.left),
        right: x(face.right()),
        width: x(face.width),
        height: y(face.height),
    })
}

/// Inverse of [`map_to_rendered`]: rendered display pixels back to intrinsic.
pub fn map_to_intrinsic(
    mapped: &MappedBox,
    intrinsic: &Dimensions,
    rendered: &RenderedBox,
) -> Result<FaceBox, FaceCropError> {
    intrinsic.ensure_usable("intrinsic image")?;
    rendered.size().ensure_usable("rendered image")?;

    let x = |value: f64| (value / rendered.width) * intrinsic.width;
    let y = |value: f64| (value / rendered.height) * intrinsic.height;

    Ok(FaceBox::new(
        y(mapped.top),
        x(mapped.left),
        x(mapped.width),
        y(mapped.height),
    ))
}
