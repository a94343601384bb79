use std::collections::BTreeMap;

use crate::shared::crop_descriptor::CropDescriptor;
use crate::shared::image_source::ImageSource;
use crate::shared::overlay_rect::OverlayRect;
use crate::shared::rendered_box::RenderedBox;

/// A display element showing one image.
pub trait ImageElement {
    fn source(&self) -> &ImageSource;

    /// Data attributes carried by the element, keyed by full attribute name.
    fn attributes(&self) -> &BTreeMap<String, String>;

    /// Current layout box, including the effect of any applied styles.
    fn layout_box(&self) -> RenderedBox;

    /// A copy without crop styles, laid out off-screen for measuring.
    fn unstyled_clone(&self) -> Box<dyn ImageElement + '_>;
}

/// The node wrapping an image element; overlays are appended to it.
///
/// Each container is handed to exactly one pipeline, which may run on its
/// own thread.
pub trait ImageContainer: Send {
    fn image(&self) -> &dyn ImageElement;

    fn apply_crop(&mut self, descriptor: &CropDescriptor);

    fn append_overlay(&mut self, overlay: OverlayRect);
}
