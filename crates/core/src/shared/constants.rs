/// Marks a node whose subtree holds one image to be cropped.
pub const IMAGE_CONTAINER_ATTRIBUTE: &str = "data-image-container";

/// Marks the image node inside an image container.
pub const IMAGE_ATTRIBUTE: &str = "data-image";

/// Root-level flag set when face detection is unavailable.
pub const SUPPORT_FLAG_ATTRIBUTE: &str = "data-is-supported";
pub const SUPPORT_FLAG_UNSUPPORTED: &str = "false";

pub const DRAW_FACE_BOUNDING_BOX_ATTRIBUTE: &str = "data-draw-face-bounding-box";
pub const SET_OBJECT_FIT_ATTRIBUTE: &str = "data-set-object-fit";
pub const SET_OBJECT_POSITION_ATTRIBUTE: &str = "data-set-object-position";

/// Suffix of the detection result file stored next to an image.
pub const FACES_SIDECAR_SUFFIX: &str = ".faces.json";
