use std::path::{Path, PathBuf};

/// Locator of an image resource, already resolved against its document.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ImageSource(PathBuf);

impl ImageSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self(path.into())
    }

    pub fn path(&self) -> &Path {
        &self.0
    }
}

impl std::fmt::Display for ImageSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.display())
    }
}
