use crate::constants::{DEFAULT_PINCH_MARGIN, DEFAULT_PINCH_THRESHOLD};
use crate::error::GestureError;

/// Entry/exit distances for pinch classification.
///
/// The tracker enters `Pinching` once the monitored pair is closer than
/// `low_threshold` and only leaves it once they are farther apart than
/// `high_threshold`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrackerConfig {
    pub low_threshold: f32,
    pub high_threshold: f32,
}

impl TrackerConfig {
    pub fn new(low_threshold: f32, high_threshold: f32) -> Result<Self, GestureError> {
        let config = Self {
            low_threshold,
            high_threshold,
        };
        config.validate()?;
        Ok(config)
    }

    /// Build a config whose exit threshold is `margin` above the entry threshold.
    pub fn with_margin(low_threshold: f32, margin: f32) -> Result<Self, GestureError> {
        Self::new(low_threshold, low_threshold + margin)
    }

    pub fn validate(&self) -> Result<(), GestureError> {
        let (low, high) = (self.low_threshold, self.high_threshold);
        let ok = low.is_finite() && high.is_finite() && low > 0.0 && high > low;
        if ok {
            Ok(())
        } else {
            Err(GestureError::Configuration { low, high })
        }
    }

    #[inline]
    pub fn margin(&self) -> f32 {
        self.high_threshold - self.low_threshold
    }
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            low_threshold: DEFAULT_PINCH_THRESHOLD,
            high_threshold: DEFAULT_PINCH_THRESHOLD + DEFAULT_PINCH_MARGIN,
        }
    }
}
