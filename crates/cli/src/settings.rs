use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use face_crop_core::shared::cropper_options::CropperOptions;

/// Page-wide defaults persisted between runs.
///
/// Elements without the matching data attribute fall back to these.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub defaults: CropperOptions,
}

impl Settings {
    fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("FaceCrop").join("settings.json"))
    }

    pub fn load() -> Self {
        Self::config_path()
            .map(|path| Self::load_from(&path))
            .unwrap_or_default()
    }

    pub fn load_from(path: &Path) -> Self {
        fs::read_to_string(path)
            .ok()
            .and_then(|json| serde_json::from_str(&json).ok())
            .unwrap_or_default()
    }

    pub fn save(&self) {
        match Self::config_path() {
            Some(path) => self.save_to(&path),
            None => log::warn!("No config directory; settings not saved"),
        }
    }

    pub fn save_to(&self, path: &Path) {
        if let Some(parent) = path.parent() {
            let _ = fs::create_dir_all(parent);
        }
        if let Ok(json) = serde_json::to_string_pretty(self) {
            if let Err(e) = fs::write(path, json) {
                log::warn!("Failed to save settings to {}: {e}", path.display());
            }
        }
    }

    /// Applies command-line switches on top of the stored defaults.
    pub fn with_overrides(
        mut self,
        draw_face_bounding_box: bool,
        no_object_fit: bool,
        no_object_position: bool,
    ) -> Self {
        if draw_face_bounding_box {
            self.defaults.draw_face_bounding_box = true;
        }
        if no_object_fit {
            self.defaults.set_object_fit = false;
        }
        if no_object_position {
            self.defaults.set_object_position = false;
        }
        self
    }
}
