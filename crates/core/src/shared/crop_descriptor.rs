use serde::Serialize;

use crate::shared::style::StyleDeclaration;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ObjectFit {
    Cover,
}

impl ObjectFit {
    pub fn as_css(&self) -> &'static str {
        match self {
            ObjectFit::Cover => "cover",
        }
    }
}

/// Fixed aspect-ratio constraint applied together with the fit mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct AspectRatio {
    pub width: u32,
    pub height: u32,
}

impl AspectRatio {
    pub const WIDESCREEN: AspectRatio = AspectRatio {
        width: 16,
        height: 9,
    };

    pub fn ratio(&self) -> f64 {
        self.width as f64 / self.height as f64
    }

    /// Height of a box of the given width under this ratio.
    pub fn height_for(&self, width: f64) -> f64 {
        width * self.height as f64 / self.width as f64
    }

    pub fn as_css(&self) -> String {
        format!("{} / {}", self.width, self.height)
    }
}

/// Object-position as floored whole percentages of the rendered box.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct ObjectPosition {
    pub x_pct: i32,
    pub y_pct: i32,
}

impl ObjectPosition {
    pub fn as_css(&self) -> String {
        format!("{}% {}%", self.x_pct, self.y_pct)
    }
}

/// Resolved crop styling for one display element.
///
/// Each part is present only when the matching option asked for it; an empty
/// descriptor leaves the element's presentation unchanged.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct CropDescriptor {
    pub position: Option<ObjectPosition>,
    pub fit: Option<ObjectFit>,
    pub aspect_ratio: Option<AspectRatio>,
}

impl CropDescriptor {
    pub fn is_empty(&self) -> bool {
        self.position.is_none() && self.fit.is_none() && self.aspect_ratio.is_none()
    }

    pub fn style_declarations(&self) -> Vec<StyleDeclaration> {
        let mut decls = Vec::with_capacity(3);
        if let Some(position) = self.position {
            decls.push(StyleDeclaration::new("object-position", position.as_css()));
        }
        if let Some(fit) = self.fit {
            decls.push(StyleDeclaration::new("object-fit", fit.as_css()));
        }
        if let Some(ratio) = self.aspect_ratio {
            decls.push(StyleDeclaration::new("aspect-ratio", ratio.as_css()));
        }
        decls
    }
}
