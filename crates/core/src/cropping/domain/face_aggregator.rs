use crate::shared::error::FaceCropError;
use crate::shared::face_box::FaceBox;

/// Smallest box containing every face, computed in a single pass.
///
/// Only the extremal edges are kept, so the result does not depend on the
/// order of `faces`.
pub fn aggregate(faces: &[FaceBox]) -> Result<FaceBox, FaceCropError> {
    let (first, rest) = faces.split_first().ok_or(FaceCropError::EmptyFaceSet)?;

    let seed = (first.top, first.left, first.bottom(), first.right());
    let (top, left, bottom, right) = rest.iter().fold(seed, |(top, left, bottom, right), face| {
        (
            top.min(face.top),
            left.min(face.left),
            bottom.max(face.bottom()),
            right.max(face.right()),
        )
    });

    Ok(FaceBox::from_edges(top, left, bottom, right))
}
