use crate::tracker::PointerId;
use thiserror::Error;

/// Errors surfaced synchronously by the tracker and its configuration.
///
/// A rejected call leaves the tracker exactly as it was before the call.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GestureError {
    #[error("invalid position for pointer {id}: ({x}, {y}) is not finite")]
    InvalidInput { id: PointerId, x: f32, y: f32 },

    #[error("invalid pinch thresholds: low={low} high={high} (need 0 < low < high, both finite)")]
    Configuration { low: f32, high: f32 },
}
