//! Windowed moving average for jittery pointer positions.
//!
//! Smooths the centroid before a front-end moves anything with it. Each
//! `add` returns the mean of the most recent `window` samples.

use crate::constants::DEFAULT_SMOOTHING_WINDOW;
use glam::Vec2;
use std::collections::VecDeque;

pub struct MovingAverage {
    window: usize,
    samples: VecDeque<f32>,
    sum: f64,
}

impl MovingAverage {
    /// A window of zero is treated as one (no smoothing).
    pub fn new(window: usize) -> Self {
        let window = window.max(1);
        Self {
            window,
            samples: VecDeque::with_capacity(window),
            sum: 0.0,
        }
    }

    /// Push a sample and return the current mean. Non-finite samples are
    /// skipped so a single bad reading cannot poison the window.
    pub fn add(&mut self, value: f32) -> f32 {
        if value.is_finite() {
            if self.samples.len() == self.window {
                if let Some(old) = self.samples.pop_front() {
                    self.sum -= old as f64;
                }
            }
            self.samples.push_back(value);
            self.sum += value as f64;
        }
        self.value()
    }

    /// Current mean, or 0 when no sample has been added yet.
    pub fn value(&self) -> f32 {
        if self.samples.is_empty() {
            0.0
        } else {
            (self.sum / self.samples.len() as f64) as f32
        }
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn window(&self) -> usize {
        self.window
    }

    pub fn reset(&mut self) {
        self.samples.clear();
        self.sum = 0.0;
    }
}

impl Default for MovingAverage {
    fn default() -> Self {
        Self::new(DEFAULT_SMOOTHING_WINDOW)
    }
}

/// Pair of moving averages for a 2D position
pub struct PointSmoother {
    pub x: MovingAverage,
    pub y: MovingAverage,
}

impl PointSmoother {
    pub fn new(window: usize) -> Self {
        Self {
            x: MovingAverage::new(window),
            y: MovingAverage::new(window),
        }
    }

    pub fn add(&mut self, p: Vec2) -> Vec2 {
        Vec2::new(self.x.add(p.x), self.y.add(p.y))
    }

    pub fn value(&self) -> Vec2 {
        Vec2::new(self.x.value(), self.y.value())
    }

    pub fn reset(&mut self) {
        self.x.reset();
        self.y.reset();
    }
}

impl Default for PointSmoother {
    fn default() -> Self {
        Self::new(DEFAULT_SMOOTHING_WINDOW)
    }
}
