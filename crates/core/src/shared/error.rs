use std::path::PathBuf;

use thiserror::Error;

/// Failures of a single image's crop pipeline.
///
/// Every variant is local to the image it was raised for; the page pipeline
/// logs it and moves on to sibling images.
#[derive(Error, Debug)]
pub enum FaceCropError {
    #[error("face detection is not available in this environment")]
    CapabilityUnavailable,
    #[error("failed to load image {}: {reason}", .locator.display())]
    Load { locator: PathBuf, reason: String },
    #[error("face detection failed for {}: {reason}", .locator.display())]
    Detection { locator: PathBuf, reason: String },
    #[error("{what} has a degenerate size ({width}x{height})")]
    DegenerateDimension {
        what: &'static str,
        width: f64,
        height: f64,
    },
    #[error("cannot aggregate an empty set of faces")]
    EmptyFaceSet,
    #[error("invalid page layout: {0}")]
    Layout(String),
}
