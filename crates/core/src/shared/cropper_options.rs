use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::shared::constants::{
    DRAW_FACE_BOUNDING_BOX_ATTRIBUTE, SET_OBJECT_FIT_ATTRIBUTE, SET_OBJECT_POSITION_ATTRIBUTE,
};

/// Per-element switches for what the crop pipeline produces.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CropperOptions {
    pub draw_face_bounding_box: bool,
    pub set_object_fit: bool,
    pub set_object_position: bool,
}

impl Default for CropperOptions {
    fn default() -> Self {
        Self {
            draw_face_bounding_box: false,
            set_object_fit: true,
            set_object_position: true,
        }
    }
}

impl CropperOptions {
    /// Reads the presence-based data attributes of an image element.
    ///
    /// An absent attribute keeps the value from `defaults`; a present one is
    /// `true` unless its value is literally `"false"`.
    pub fn from_attributes(attributes: &BTreeMap<String, String>, defaults: &Self) -> Self {
        let flag = |name: &str, default: bool| match attributes.get(name) {
            Some(value) => value.trim() != "false",
            None => default,
        };
        Self {
            draw_face_bounding_box: flag(
                DRAW_FACE_BOUNDING_BOX_ATTRIBUTE,
                defaults.draw_face_bounding_box,
            ),
            set_object_fit: flag(SET_OBJECT_FIT_ATTRIBUTE, defaults.set_object_fit),
            set_object_position: flag(SET_OBJECT_POSITION_ATTRIBUTE, defaults.set_object_position),
        }
    }

    pub fn wants_crop(&self) -> bool {
        self.set_object_fit || self.set_object_position
    }
}
