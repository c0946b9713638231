//! Moving-average smoothing for ppm readings
//!
//! A single MOx reading jitters by a ppm or two, which is the whole width of
//! a shelf-life bucket. Averaging the last few readings keeps the label from
//! flickering between buckets. Only a plain mean is kept here; there is no
//! variance tracking and no outlier rejection.

use crate::buffer::CircularBuffer;
use crate::constants::display::SMOOTHING_WINDOW;

/// Fixed-capacity moving average
#[derive(Debug, Clone, Default)]
pub struct SmoothingFilter<const N: usize = SMOOTHING_WINDOW> {
    history: CircularBuffer<f32, N>,
}

impl<const N: usize> SmoothingFilter<N> {
    /// Empty window
    pub const fn new() -> Self {
        Self {
            history: CircularBuffer::new(),
        }
    }

    /// Add a reading, evicting the oldest once the window is full
    ///
    /// Non-finite values are dropped so one bad sample cannot poison the
    /// whole window.
    pub fn push(&mut self, value: f32) {
        if !value.is_finite() {
            log_warn!("Dropping non-finite reading {} from smoothing window", value);
            return;
        }
        self.history.push(value);
    }

    /// Mean of the window, `None` while empty
    pub fn average(&self) -> Option<f32> {
        if self.history.is_empty() {
            return None;
        }
        let sum: f32 = self.history.iter().sum();
        Some(sum / self.history.len() as f32)
    }

    /// Readings currently in the window
    pub fn len(&self) -> usize {
        self.history.len()
    }

    /// True before the first finite reading
    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    /// Forget all readings
    pub fn clear(&mut self) {
        self.history.clear();
    }
}
