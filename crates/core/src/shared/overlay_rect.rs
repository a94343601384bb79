use serde::Serialize;

use crate::shared::style::StyleDeclaration;

/// Percentage-positioned rectangle outlining one face over its image.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OverlayRect {
    pub top_pct: i32,
    pub left_pct: i32,
    pub width_pct: i32,
    pub height_pct: i32,
}

impl OverlayRect {
    pub fn style_declarations(&self) -> Vec<StyleDeclaration> {
        vec![
            StyleDeclaration::new("position", "absolute"),
            StyleDeclaration::new("top", format!("{}%", self.top_pct)),
            StyleDeclaration::new("left", format!("{}%", self.left_pct)),
            StyleDeclaration::new("width", format!("{}%", self.width_pct)),
            StyleDeclaration::new("height", format!("{}%", self.height_pct)),
        ]
    }
}
