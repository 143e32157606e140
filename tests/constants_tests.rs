// Host-side tests for web front-end constants.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod input {
    include!("../src/input.rs");
}

use constants::*;
use pinch_core::{TrackerConfig, INLINE_POINTER_CAPACITY};

#[test]
fn web_thresholds_form_a_valid_config() {
    assert!(TrackerConfig::with_margin(PINCH_THRESHOLD_PX, PINCH_MARGIN_PX).is_ok());
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn constants_are_within_reasonable_bounds() {
    assert!(PINCH_THRESHOLD_PX > 0.0);
    assert!(PINCH_MARGIN_PX > 0.0);
    assert!(CENTROID_SMOOTHING_FRAMES >= 1);
    assert!(INLINE_POINTER_CAPACITY >= 2);
}

#[test]
fn every_registered_event_has_a_phase() {
    for ev in POINTER_EVENTS {
        assert!(input::phase_for_event_type(ev).is_some(), "{ev} unmapped");
    }
}

#[test]
fn selectors_are_well_formed() {
    assert!(!CENTROID_ELEMENT_ID.starts_with('#'));
    assert!(CONTAINER_SELECTOR.starts_with('.'));
    assert!(!PINCHING_CLASS.contains(' '));
}
