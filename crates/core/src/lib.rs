//! Face-aware crop positioning.
//!
//! Maps face detections from an image's intrinsic pixel space into the
//! rendered box of the element displaying it, then derives an
//! `object-position` / `object-fit` pair that keeps every face in view, plus
//! optional per-face overlay rectangles.

pub mod shared {
    pub mod constants;
    pub mod crop_descriptor;
    pub mod cropper_options;
    pub mod dimensions;
    pub mod error;
    pub mod face_box;
    pub mod image_source;
    pub mod overlay_rect;
    pub mod rendered_box;
    pub mod style;
}

pub mod cropping {
    pub mod domain {
        pub mod coordinate_mapper;
        pub mod crop_resolver;
        pub mod face_aggregator;
        pub mod overlay_projector;
    }
}

pub mod detection {
    pub mod domain {
        pub mod face_detector;
    }
    pub mod infrastructure;
}

pub mod sizing {
    pub mod domain {
        pub mod intrinsic_size_probe;
        pub mod size_resolver;
    }
    pub mod infrastructure;
}

pub mod page {
    pub mod domain {
        pub mod host_environment;
        pub mod image_element;
    }
    pub mod infrastructure;
}

pub mod pipeline {
    pub mod crop_image_use_case;
    pub mod crop_page_use_case;
    pub mod image_crop_context;
}
