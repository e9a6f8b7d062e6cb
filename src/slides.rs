//! Local slide deck state for presentation control.
//!
//! Swipe gestures mutate a bounded slide index instead of reaching the
//! external executor. The index clamps at either end and never wraps.

use crate::classifier::GestureLabel;
use log::debug;

/// Bounded slide index over a loaded deck
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlideDeck {
    current: usize,
    count: usize,
}

impl SlideDeck {
    /// Create a deck with `count` slides, positioned on the first
    #[must_use]
    pub const fn new(count: usize) -> Self {
        Self { current: 0, count }
    }

    /// Index of the slide currently shown
    #[must_use]
    pub const fn current(&self) -> usize {
        self.current
    }

    /// Number of slides in the deck
    #[must_use]
    pub const fn count(&self) -> usize {
        self.count
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Advance one slide, clamped at the last
    pub fn next(&mut self) -> usize {
        self.current = (self.current + 1).min(self.count.saturating_sub(1));
        debug!("slide {}/{}", self.current + 1, self.count);
        self.current
    }

    /// Go back one slide, clamped at the first
    pub fn prev(&mut self) -> usize {
        self.current = self.current.saturating_sub(1);
        debug!("slide {}/{}", self.current + 1, self.count);
        self.current
    }

    /// Jump directly to a slide, clamped into range
    pub fn jump_to(&mut self, index: usize) -> usize {
        self.current = index.min(self.count.saturating_sub(1));
        self.current
    }

    /// Apply a slide gesture; other labels are ignored.
    ///
    /// Returns true when the label addressed the deck (even if clamping
    /// left the index unchanged).
    pub fn apply(&mut self, label: GestureLabel) -> bool {
        match label {
            GestureLabel::SlideNext => {
                self.next();
                true
            }
            GestureLabel::SlidePrev => {
                self.prev();
                true
            }
            _ => false,
        }
    }
}
