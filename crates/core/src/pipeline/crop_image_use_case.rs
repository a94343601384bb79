use std::sync::Arc;

use crate::cropping::domain::crop_resolver::CropResolver;
use crate::detection::domain::face_detector::FaceDetector;
use crate::page::domain::image_element::ImageContainer;
use crate::pipeline::image_crop_context::ImageCropContext;
use crate::shared::crop_descriptor::CropDescriptor;
use crate::shared::cropper_options::CropperOptions;
use crate::shared::error::FaceCropError;
use crate::sizing::domain::intrinsic_size_probe::IntrinsicSizeProbe;
use crate::sizing::domain::size_resolver::{resolve_intrinsic_size, resolve_rendered_box};

/// What a completed per-image pipeline did to its container.
#[derive(Clone, Debug, PartialEq)]
pub enum CropOutcome {
    /// Detection found nothing; the element keeps its default presentation.
    NoFaces,
    Applied {
        face_count: usize,
        descriptor: CropDescriptor,
        overlay_count: usize,
    },
}

/// Single-image pipeline: probe → detect → measure → project/resolve → apply.
///
/// All results are computed before the container is touched, so a failure
/// at any stage leaves it exactly as it was.
pub struct CropImageUseCase {
    probe: Arc<dyn IntrinsicSizeProbe>,
    detector: Arc<dyn FaceDetector>,
    resolver: CropResolver,
    defaults: CropperOptions,
}

impl CropImageUseCase {
    pub fn new(
        probe: Arc<dyn IntrinsicSizeProbe>,
        detector: Arc<dyn FaceDetector>,
        resolver: CropResolver,
        defaults: CropperOptions,
    ) -> Self {
        Self {
            probe,
            detector,
            resolver,
            defaults,
        }
    }

    pub fn execute(
        &self,
        container: &mut dyn ImageContainer,
    ) -> Result<CropOutcome, FaceCropError> {
        let image = container.image();
        let source = image.source().clone();
        let options = CropperOptions::from_attributes(image.attributes(), &self.defaults);

        let intrinsic = resolve_intrinsic_size(&*self.probe, &source)?;
        let faces = self.detector.detect(&source)?;
        log::debug!("{source}: {} face(s) detected", faces.len());
        if faces.is_empty() {
            return Ok(CropOutcome::NoFaces);
        }

        let rendered = resolve_rendered_box(container.image())?;
        let context = ImageCropContext {
            intrinsic,
            rendered,
            faces,
        };

        let overlays = if options.draw_face_bounding_box {
            context.overlays()?
        } else {
            Vec::new()
        };
        let descriptor = if options.wants_crop() {
            context.crop(&self.resolver, &options)?
        } else {
            CropDescriptor::default()
        };

        let overlay_count = overlays.len();
        for overlay in overlays {
            container.append_overlay(overlay);
        }
        if !descriptor.is_empty() {
            container.apply_crop(&descriptor);
        }
        log::debug!("{source}: applied {descriptor:?} with {overlay_count} overlay(s)");

        Ok(CropOutcome::Applied {
            face_count: context.faces.len(),
            descriptor,
            overlay_count,
        })
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::collections::{BTreeMap, HashMap};
    use std::sync::atomic::{AtomicUsize, Ordering};

    use crate::page::domain::image_element::ImageElement;
    use crate::shared::constants::{
        DRAW_FACE_BOUNDING_BOX_ATTRIBUTE, SET_OBJECT_FIT_ATTRIBUTE, SET_OBJECT_POSITION_ATTRIBUTE,
    };
    use crate::shared::crop_descriptor::{AspectRatio, ObjectFit, ObjectPosition};
    use crate::shared::dimensions::Dimensions;
    use crate::shared::face_box::FaceBox;
    use crate::shared::image_source::ImageSource;
    use crate::shared::overlay_rect::OverlayRect;
    use crate::shared::rendered_box::RenderedBox;

    // --- Stubs ---

    pub(crate) struct StubProbe {
        sizes: HashMap<ImageSource, Dimensions>,
        pub(crate) calls: AtomicUsize,
    }

    impl StubProbe {
        pub(crate) fn new(entries: &[(&str, Dimensions)]) -> Self {
            Self {
                sizes: entries
                    .iter()
                    .map(|(src, size)| (ImageSource::new(*src), *size))
                    .collect(),
                calls: AtomicUsize::new(0),
            }
        }
    }

    impl IntrinsicSizeProbe for StubProbe {
        fn probe(&self, source: &ImageSource) -> Result<Dimensions, FaceCropError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.sizes
                .get(source)
                .copied()
                .ok_or_else(|| FaceCropError::Load {
                    locator: source.path().to_path_buf(),
                    reason: "not found".to_string(),
                })
        }
    }

    pub(crate) struct StubDetector {
        faces: HashMap<ImageSource, Result<Vec<FaceBox>, String>>,
        pub(crate) calls: AtomicUsize,
    }

    impl StubDetector {
        pub(crate) fn new(entries: Vec<(&str, Result<Vec<FaceBox>, String>)>) -> Self {
            Self {
                faces: entries
                    .into_iter()
                    .map(|(src, faces)| (ImageSource::new(src), faces))
                    .collect(),
                calls: AtomicUsize::new(0),
            }
        }
    }

    impl FaceDetector for StubDetector {
        fn detect(&self, source: &ImageSource) -> Result<Vec<FaceBox>, FaceCropError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            match self.faces.get(source) {
                Some(Ok(faces)) => Ok(faces.clone()),
                Some(Err(reason)) => Err(FaceCropError::Detection {
                    locator: source.path().to_path_buf(),
                    reason: reason.clone(),
                }),
                None => Ok(Vec::new()),
            }
        }
    }

    #[derive(Clone)]
    pub(crate) struct StubElement {
        source: ImageSource,
        attributes: BTreeMap<String, String>,
        natural: RenderedBox,
        distorted: bool,
    }

    impl ImageElement for StubElement {
        fn source(&self) -> &ImageSource {
            &self.source
        }

        fn attributes(&self) -> &BTreeMap<String, String> {
            &self.attributes
        }

        fn layout_box(&self) -> RenderedBox {
            if self.distorted {
                RenderedBox {
                    height: 0.0,
                    ..self.natural
                }
            } else {
                self.natural
            }
        }

        fn unstyled_clone(&self) -> Box<dyn ImageElement + '_> {
            Box::new(StubElement {
                distorted: false,
                ..self.clone()
            })
        }
    }

    pub(crate) struct RecordingContainer {
        image: StubElement,
        pub(crate) crops: Vec<CropDescriptor>,
        pub(crate) overlays: Vec<OverlayRect>,
    }

    impl RecordingContainer {
        pub(crate) fn new(src: &str, attributes: &[(&str, &str)], natural: RenderedBox) -> Self {
            Self {
                image: StubElement {
                    source: ImageSource::new(src),
                    attributes: attributes
                        .iter()
                        .map(|(k, v)| (k.to_string(), v.to_string()))
                        .collect(),
                    natural,
                    distorted: false,
                },
                crops: Vec::new(),
                overlays: Vec::new(),
            }
        }

        fn distorted(mut self) -> Self {
            self.image.distorted = true;
            self
        }

        pub(crate) fn untouched(&self) -> bool {
            self.crops.is_empty() && self.overlays.is_empty()
        }
    }

    impl ImageContainer for RecordingContainer {
        fn image(&self) -> &dyn ImageElement {
            &self.image
        }

        fn apply_crop(&mut self, descriptor: &CropDescriptor) {
            self.crops.push(*descriptor);
        }

        fn append_overlay(&mut self, overlay: OverlayRect) {
            self.overlays.push(overlay);
        }
    }

    // --- Helpers ---

    pub(crate) const RENDERED: RenderedBox = RenderedBox {
        top: 0.0,
        left: 0.0,
        width: 400.0,
        height: 300.0,
    };

    fn use_case(probe: StubProbe, detector: StubDetector) -> CropImageUseCase {
        CropImageUseCase::new(
            Arc::new(probe),
            Arc::new(detector),
            CropResolver::new(),
            CropperOptions::default(),
        )
    }

    fn single_face() -> Vec<FaceBox> {
        vec![FaceBox::new(100.0, 100.0, 100.0, 100.0)]
    }

    // --- Tests ---

    #[test]
    fn test_applies_crop_with_default_options() {
        let uc = use_case(
            StubProbe::new(&[("a.jpg", Dimensions::new(800.0, 600.0))]),
            StubDetector::new(vec![("a.jpg", Ok(single_face()))]),
        );
        let mut container = RecordingContainer::new("a.jpg", &[], RENDERED);

        let outcome = uc.execute(&mut container).unwrap();

        let expected = CropDescriptor {
            position: Some(ObjectPosition {
                x_pct: 25,
                y_pct: 16,
            }),
            fit: Some(ObjectFit::Cover),
            aspect_ratio: Some(AspectRatio::WIDESCREEN),
        };
        assert_eq!(
            outcome,
            CropOutcome::Applied {
                face_count: 1,
                descriptor: expected,
                overlay_count: 0,
            }
        );
        assert_eq!(container.crops, vec![expected]);
        assert!(container.overlays.is_empty());
    }

    #[test]
    fn test_draws_overlays_when_requested() {
        let uc = use_case(
            StubProbe::new(&[("a.jpg", Dimensions::new(800.0, 600.0))]),
            StubDetector::new(vec![("a.jpg", Ok(single_face()))]),
        );
        let mut container = RecordingContainer::new(
            "a.jpg",
            &[
                (DRAW_FACE_BOUNDING_BOX_ATTRIBUTE, ""),
                (SET_OBJECT_FIT_ATTRIBUTE, "false"),
                (SET_OBJECT_POSITION_ATTRIBUTE, "false"),
            ],
            RENDERED,
        );

        uc.execute(&mut container).unwrap();

        assert_eq!(
            container.overlays,
            vec![OverlayRect {
                top_pct: 16,
                left_pct: 12,
                width_pct: 12,
                height_pct: 16,
            }]
        );
        assert!(container.crops.is_empty());
    }

    #[test]
    fn test_zero_faces_leaves_container_untouched() {
        let uc = use_case(
            StubProbe::new(&[("a.jpg", Dimensions::new(800.0, 600.0))]),
            StubDetector::new(vec![("a.jpg", Ok(vec![]))]),
        );
        let mut container =
            RecordingContainer::new("a.jpg", &[(DRAW_FACE_BOUNDING_BOX_ATTRIBUTE, "")], RENDERED);

        let outcome = uc.execute(&mut container).unwrap();

        assert_eq!(outcome, CropOutcome::NoFaces);
        assert!(container.untouched());
    }

    #[test]
    fn test_load_failure_aborts_before_detection() {
        let detector = StubDetector::new(vec![("a.jpg", Ok(single_face()))]);
        let uc = CropImageUseCase::new(
            Arc::new(StubProbe::new(&[])),
            Arc::new(detector),
            CropResolver::new(),
            CropperOptions::default(),
        );
        let mut container = RecordingContainer::new("a.jpg", &[], RENDERED);

        let result = uc.execute(&mut container);

        assert!(matches!(result, Err(FaceCropError::Load { .. })));
        assert!(container.untouched());
    }

    #[test]
    fn test_detection_failure_aborts() {
        let uc = use_case(
            StubProbe::new(&[("a.jpg", Dimensions::new(800.0, 600.0))]),
            StubDetector::new(vec![("a.jpg", Err("model crashed".to_string()))]),
        );
        let mut container = RecordingContainer::new("a.jpg", &[], RENDERED);

        let result = uc.execute(&mut container);

        assert!(matches!(result, Err(FaceCropError::Detection { .. })));
        assert!(container.untouched());
    }

    #[test]
    fn test_degenerate_rendered_box_leaves_no_partial_output() {
        let uc = use_case(
            StubProbe::new(&[("a.jpg", Dimensions::new(800.0, 600.0))]),
            StubDetector::new(vec![("a.jpg", Ok(single_face()))]),
        );
        let mut container = RecordingContainer::new(
            "a.jpg",
            &[(DRAW_FACE_BOUNDING_BOX_ATTRIBUTE, "")],
            RenderedBox::new(0.0, 0.0, 400.0, 0.0),
        );

        let result = uc.execute(&mut container);

        assert!(matches!(
            result,
            Err(FaceCropError::DegenerateDimension { .. })
        ));
        assert!(container.untouched());
    }

    #[test]
    fn test_measures_unstyled_box_of_cropped_element() {
        let uc = use_case(
            StubProbe::new(&[("a.jpg", Dimensions::new(800.0, 600.0))]),
            StubDetector::new(vec![("a.jpg", Ok(single_face()))]),
        );
        // live box collapsed by an earlier style; only the clone is measurable
        let mut container = RecordingContainer::new("a.jpg", &[], RENDERED).distorted();
        assert_eq!(container.image().layout_box().height, 0.0);

        uc.execute(&mut container).unwrap();

        assert_eq!(
            container.crops[0].position,
            Some(ObjectPosition {
                x_pct: 25,
                y_pct: 16,
            })
        );
    }

    #[test]
    fn test_all_options_disabled_still_completes() {
        let uc = use_case(
            StubProbe::new(&[("a.jpg", Dimensions::new(800.0, 600.0))]),
            StubDetector::new(vec![("a.jpg", Ok(single_face()))]),
        );
        let mut container = RecordingContainer::new(
            "a.jpg",
            &[
                (SET_OBJECT_FIT_ATTRIBUTE, "false"),
                (SET_OBJECT_POSITION_ATTRIBUTE, "false"),
            ],
            RENDERED,
        );

        let outcome = uc.execute(&mut container).unwrap();

        assert_eq!(
            outcome,
            CropOutcome::Applied {
                face_count: 1,
                descriptor: CropDescriptor::default(),
                overlay_count: 0,
            }
        );
        assert!(container.untouched());
    }
}
