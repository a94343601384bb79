use serde::{Deserialize, Serialize};

use crate::shared::dimensions::Dimensions;

/// On-screen layout box of a display element, in display pixels.
///
/// Captured once per pipeline run; it is not kept in sync with later
/// layout changes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RenderedBox {
    pub top: f64,
    pub left: f64,
    pub width: f64,
    pub height: f64,
}

impl RenderedBox {
    pub fn new(top: f64, left: f64, width: f64, height: f64) -> Self {
        Self {
            top,
            left,
            width,
            height,
        }
    }

    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    pub fn size(&self) -> Dimensions {
        Dimensions::new(self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_derived_edges() {
        let b = RenderedBox::new(10.0, 20.0, 400.0, 300.0);
        assert_relative_eq!(b.right(), 420.0);
        assert_relative_eq!(b.bottom(), 310.0);
    }

    #[test]
    fn test_size_ignores_position() {
        let b = RenderedBox::new(10.0, 20.0, 400.0, 300.0);
        assert_eq!(b.size(), Dimensions::new(400.0, 300.0));
    }
}
