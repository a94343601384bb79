/// A detected face, in the image's intrinsic pixel space.
///
/// `right` and `bottom` are derived from the stored origin and extent so the
/// `right = left + width`, `bottom = top + height` relation always holds.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FaceBox {
    pub top: f64,
    pub left: f64,
    pub width: f64,
    pub height: f64,
}

impl FaceBox {
    pub fn new(top: f64, left: f64, width: f64, height: f64) -> Self {
        Self {
            top,
            left,
            width,
            height,
        }
    }

    pub fn from_edges(top: f64, left: f64, bottom: f64, right: f64) -> Self {
        Self::new(top, left, right - left, bottom - top)
    }

    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }
}

/// A face box (or union of face boxes) re-expressed in rendered display pixels,
/// relative to the display element's own origin.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MappedBox {
    pub top: f64,
    pub left: f64,
    pub width: f64,
    pub height: f64,
    pub right: f64,
    pub bottom: f64,
}
