use serde::{Deserialize, Serialize};

use crate::shared::error::FaceCropError;

/// Intrinsic pixel size of an image asset, independent of any layout scaling.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Dimensions {
    pub width: f64,
    pub height: f64,
}

impl Dimensions {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn from_pixels(width: u32, height: u32) -> Self {
        Self::new(width as f64, height as f64)
    }

    /// Zero, negative and non-finite extents cannot be divided by.
    pub fn is_degenerate(&self) -> bool {
        !(self.width.is_finite() && self.height.is_finite())
            || self.width <= 0.0
            || self.height <= 0.0
    }

    pub fn ensure_usable(&self, what: &'static str) -> Result<(), FaceCropError> {
        if self.is_degenerate() {
            return Err(FaceCropError::DegenerateDimension {
                what,
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }
}
