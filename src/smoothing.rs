//! Temporal smoothing over per-frame scalar features.
//!
//! A fixed-capacity FIFO window damps single-frame noise. The static
//! classifier reads a running average, the motion classifier reads the raw
//! first-to-last displacement.

use std::collections::VecDeque;

/// Fixed-capacity ring buffer over a scalar feature
#[derive(Debug, Clone)]
pub struct SignalWindow {
    capacity: usize,
    samples: VecDeque<f64>,
}

impl SignalWindow {
    /// Create a window holding at most `capacity` samples
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "Window size must be greater than 0");
        Self {
            capacity,
            samples: VecDeque::with_capacity(capacity),
        }
    }

    /// Push a sample, evicting the oldest once the window is full
    pub fn push(&mut self, value: f64) {
        if self.samples.len() >= self.capacity {
            self.samples.pop_front();
        }
        self.samples.push_back(value);
    }

    /// Number of buffered samples, never exceeding the capacity
    #[must_use]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Whether the window has reached its capacity
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.samples.len() == self.capacity
    }

    /// Arithmetic mean of the buffered samples.
    ///
    /// Computed over a partially filled window as well: early readings are
    /// noisier, but responsiveness wins over strict window-fill gating.
    #[must_use]
    pub fn average(&self) -> Option<f64> {
        if self.samples.is_empty() {
            return None;
        }
        Some(self.samples.iter().sum::<f64>() / self.samples.len() as f64)
    }

    /// Raw last-minus-first displacement over a full window.
    ///
    /// Returns `None` until the window fills; a velocity-like magnitude
    /// over the whole window is what discriminates swipe direction, so a
    /// partial window carries no usable signal here.
    #[must_use]
    pub fn delta(&self) -> Option<f64> {
        if !self.is_full() {
            return None;
        }
        let first = *self.samples.front()?;
        let last = *self.samples.back()?;
        Some(last - first)
    }

    /// Discard all buffered samples
    pub fn clear(&mut self) {
        self.samples.clear();
    }
}
