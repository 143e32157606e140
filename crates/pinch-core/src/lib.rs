//! Headless pointer tracking for pinch-style gestures.
//!
//! The crate owns no platform APIs. Front-ends translate their native input
//! (DOM pointer events, winit touches) into [`PointerGestureTracker`] calls
//! and read back immutable [`Snapshot`]s to drive whatever they render.

pub mod config;
pub mod constants;
pub mod error;
pub mod smoothing;
pub mod tracker;
pub mod viewport;

pub use config::*;
pub use constants::*;
pub use error::*;
pub use smoothing::*;
pub use tracker::*;
pub use viewport::*;
