use pinch_core::{DEFAULT_PINCH_MARGIN, DEFAULT_PINCH_THRESHOLD};

// Page wiring and tuning for the web front-end.

// DOM hooks
pub const CENTROID_ELEMENT_ID: &str = "centroidEl"; // element that follows the centroid
pub const CONTAINER_SELECTOR: &str = ".container"; // receives the pinching class
pub const PINCHING_CLASS: &str = "pinching";

// Pinch thresholds (CSS pixels)
pub const PINCH_THRESHOLD_PX: f32 = DEFAULT_PINCH_THRESHOLD;
pub const PINCH_MARGIN_PX: f32 = DEFAULT_PINCH_MARGIN;

// Centroid smoothing, in animation frames
pub const CENTROID_SMOOTHING_FRAMES: usize = 12;

// Pointer lifecycle events, registered once each
pub const POINTER_EVENTS: [&str; 4] = ["pointerdown", "pointermove", "pointerup", "pointercancel"];
