use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::detection::domain::face_detector::FaceDetector;
use crate::page::domain::host_environment::HostEnvironment;
use crate::page::domain::image_element::{ImageContainer, ImageElement};
use crate::shared::constants::{
    IMAGE_ATTRIBUTE, IMAGE_CONTAINER_ATTRIBUTE, SUPPORT_FLAG_ATTRIBUTE, SUPPORT_FLAG_UNSUPPORTED,
};
use crate::shared::crop_descriptor::CropDescriptor;
use crate::shared::error::FaceCropError;
use crate::shared::image_source::ImageSource;
use crate::shared::overlay_rect::OverlayRect;
use crate::shared::rendered_box::RenderedBox;
use crate::shared::style::StyleDeclaration;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct LayoutManifest {
    #[serde(default)]
    root_attributes: BTreeMap<String, String>,
    #[serde(default)]
    nodes: Vec<LayoutNode>,
}

#[derive(Deserialize)]
struct LayoutNode {
    #[serde(default)]
    attributes: BTreeMap<String, String>,
    #[serde(default)]
    layout: Option<RenderedBox>,
    #[serde(default)]
    children: Vec<LayoutNode>,
}

impl LayoutNode {
    /// First descendant (pre-order) carrying `attribute`, excluding `self`.
    fn find_descendant(&self, attribute: &str) -> Option<&LayoutNode> {
        self.children.iter().find_map(|child| {
            if child.attributes.contains_key(attribute) {
                Some(child)
            } else {
                child.find_descendant(attribute)
            }
        })
    }
}

/// An image element inside a [`LayoutDocument`].
///
/// Its layout box is the natural box from the document unless a fixed
/// aspect ratio has been applied, in which case the height follows the width.
#[derive(Clone, Debug)]
pub struct LayoutImageElement {
    source: ImageSource,
    attributes: BTreeMap<String, String>,
    natural_box: RenderedBox,
    style: CropDescriptor,
}

impl LayoutImageElement {
    pub fn style(&self) -> &CropDescriptor {
        &self.style
    }
}

impl ImageElement for LayoutImageElement {
    fn source(&self) -> &ImageSource {
        &self.source
    }

    fn attributes(&self) -> &BTreeMap<String, String> {
        &self.attributes
    }

    fn layout_box(&self) -> RenderedBox {
        match self.style.aspect_ratio {
            Some(ratio) => RenderedBox {
                height: ratio.height_for(self.natural_box.width),
                ..self.natural_box
            },
            None => self.natural_box,
        }
    }

    fn unstyled_clone(&self) -> Box<dyn ImageElement + '_> {
        Box::new(LayoutImageElement {
            style: CropDescriptor::default(),
            ..self.clone()
        })
    }
}

#[derive(Clone, Debug)]
pub struct LayoutImageContainer {
    image: LayoutImageElement,
    overlays: Vec<OverlayRect>,
}

impl LayoutImageContainer {
    pub fn overlays(&self) -> &[OverlayRect] {
        &self.overlays
    }

    pub fn image_element(&self) -> &LayoutImageElement {
        &self.image
    }
}

impl ImageContainer for LayoutImageContainer {
    fn image(&self) -> &dyn ImageElement {
        &self.image
    }

    fn apply_crop(&mut self, descriptor: &CropDescriptor) {
        let style = &mut self.image.style;
        style.position = descriptor.position.or(style.position);
        style.fit = descriptor.fit.or(style.fit);
        style.aspect_ratio = descriptor.aspect_ratio.or(style.aspect_ratio);
    }

    fn append_overlay(&mut self, overlay: OverlayRect) {
        self.overlays.push(overlay);
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageSnapshot {
    pub src: String,
    pub layout: RenderedBox,
    pub style: Vec<StyleDeclaration>,
    pub overlays: Vec<Vec<StyleDeclaration>>,
}

/// Serializable state of the page after processing.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageSnapshot {
    pub root_attributes: BTreeMap<String, String>,
    pub images: Vec<ImageSnapshot>,
}

/// An in-memory page loaded from a JSON layout description.
///
/// Image containers are found the way a browser query would find them: every
/// node with `data-image-container`, paired with its first descendant that
/// has `data-image`. Image `src` values are resolved against `base_dir`.
pub struct LayoutDocument {
    root_attributes: BTreeMap<String, String>,
    containers: Vec<LayoutImageContainer>,
    detector: Option<Arc<dyn FaceDetector>>,
}

impl LayoutDocument {
    pub fn load(path: &Path) -> Result<Self, FaceCropError> {
        let json = fs::read_to_string(path)
            .map_err(|e| FaceCropError::Layout(format!("{}: {e}", path.display())))?;
        let base_dir = path.parent().unwrap_or_else(|| Path::new(""));
        Self::from_json(&json, base_dir)
    }

    pub fn from_json(json: &str, base_dir: &Path) -> Result<Self, FaceCropError> {
        let manifest: LayoutManifest =
            serde_json::from_str(json).map_err(|e| FaceCropError::Layout(e.to_string()))?;

        let mut containers = Vec::new();
        collect_containers(&manifest.nodes, base_dir, &mut containers);
        log::debug!("Found {} image containers", containers.len());

        Ok(Self {
            root_attributes: manifest.root_attributes,
            containers,
            detector: None,
        })
    }

    pub fn with_face_detector(mut self, detector: Option<Arc<dyn FaceDetector>>) -> Self {
        self.detector = detector;
        self
    }

    pub fn containers(&self) -> &[LayoutImageContainer] {
        &self.containers
    }

    pub fn root_attributes(&self) -> &BTreeMap<String, String> {
        &self.root_attributes
    }

    pub fn snapshot(&self) -> PageSnapshot {
        PageSnapshot {
            root_attributes: self.root_attributes.clone(),
            images: self
                .containers
                .iter()
                .map(|c| ImageSnapshot {
                    src: c.image.source.to_string(),
                    layout: c.image.layout_box(),
                    style: c.image.style.style_declarations(),
                    overlays: c.overlays.iter().map(|o| o.style_declarations()).collect(),
                })
                .collect(),
        }
    }
}

fn collect_containers(
    nodes: &[LayoutNode],
    base_dir: &Path,
    containers: &mut Vec<LayoutImageContainer>,
) {
    for node in nodes {
        if node.attributes.contains_key(IMAGE_CONTAINER_ATTRIBUTE) {
            match node.find_descendant(IMAGE_ATTRIBUTE) {
                Some(image) => match image.attributes.get("src") {
                    Some(src) => containers.push(LayoutImageContainer {
                        image: LayoutImageElement {
                            source: ImageSource::new(base_dir.join(src)),
                            attributes: image.attributes.clone(),
                            natural_box: image.layout.unwrap_or_default(),
                            style: CropDescriptor::default(),
                        },
                        overlays: Vec::new(),
                    }),
                    None => log::warn!("Skipping image container: image has no src"),
                },
                None => log::warn!("Skipping image container without a {IMAGE_ATTRIBUTE} node"),
            }
        }
        collect_containers(&node.children, base_dir, containers);
    }
}

impl HostEnvironment for LayoutDocument {
    fn face_detector(&self) -> Option<Arc<dyn FaceDetector>> {
        self.detector.clone()
    }

    fn mark_unsupported(&mut self) {
        self.root_attributes.insert(
            SUPPORT_FLAG_ATTRIBUTE.to_string(),
            SUPPORT_FLAG_UNSUPPORTED.to_string(),
        );
    }

    fn image_containers(&mut self) -> Vec<&mut dyn ImageContainer> {
        self.containers
            .iter_mut()
            .map(|c| c as &mut dyn ImageContainer)
            .collect()
    }
}
