use serde::Serialize;

/// One CSS property/value pair handed to the presentation layer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct StyleDeclaration {
    pub property: &'static str,
    pub value: String,
}

impl StyleDeclaration {
    pub fn new(property: &'static str, value: impl Into<String>) -> Self {
        Self {
            property,
            value: value.into(),
        }
    }
}

impl std::fmt::Display for StyleDeclaration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.property, self.value)
    }
}

/// `floor(value / extent * 100)`. Callers guarantee a non-degenerate extent.
pub fn floor_percent(value: f64, extent: f64) -> i32 {
    ((value / extent) * 100.0).floor() as i32
}
