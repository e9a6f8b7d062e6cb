//! Swipe-motion classifier: horizontal index-fingertip displacement over a
//! full smoothing window drives slide navigation.

use super::{GestureClassifier, GestureLabel};
use crate::constants::{DEFAULT_MOTION_WINDOW, DEFAULT_SWIPE_THRESHOLD};
use crate::features::index_fingertip_x;
use crate::landmarks::LandmarkFrame;
use crate::smoothing::SignalWindow;

/// Swipe classifier over index-fingertip displacement
pub struct SwipeClassifier {
    window: SignalWindow,
    threshold: f64,
}

impl SwipeClassifier {
    /// Create a classifier with explicit window size and swipe threshold
    #[must_use]
    pub fn new(window_size: usize, threshold: f64) -> Self {
        Self {
            window: SignalWindow::new(window_size),
            threshold,
        }
    }

    /// Create a classifier with the default window and threshold
    #[must_use]
    pub fn with_defaults() -> Self {
        Self::new(DEFAULT_MOTION_WINDOW, DEFAULT_SWIPE_THRESHOLD)
    }
}

impl GestureClassifier for SwipeClassifier {
    fn consume_frame(&mut self, frame: &LandmarkFrame) -> Option<GestureLabel> {
        let Some(hand) = frame.valid_hand() else {
            self.reset();
            return None;
        };

        self.window.push(index_fingertip_x(hand));

        // delta() is None until the window fills: a short trajectory has no
        // usable direction signal
        let delta = self.window.delta()?;
        if delta.abs() <= self.threshold {
            return None;
        }

        // Clear instead of letting the window slide, so the same swipe
        // cannot re-trigger before fresh motion accumulates
        self.window.clear();
        Some(if delta < 0.0 {
            GestureLabel::SlideNext
        } else {
            GestureLabel::SlidePrev
        })
    }

    fn reset(&mut self) {
        self.window.clear();
    }

    fn name(&self) -> &str {
        "SwipeClassifier"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{INDEX_FINGERTIP, NUM_HAND_LANDMARKS};
    use crate::landmarks::{HandObservation, Handedness, Landmark};

    fn frame_at(x: f64) -> LandmarkFrame {
        let mut landmarks = vec![Landmark::new(0.5, 0.5); NUM_HAND_LANDMARKS];
        landmarks[INDEX_FINGERTIP] = Landmark::new(x, 0.5);
        LandmarkFrame::from_hand(HandObservation::new(Handedness::Right, landmarks))
    }

    fn feed(classifier: &mut SwipeClassifier, xs: &[f64]) -> Vec<Option<GestureLabel>> {
        xs.iter().map(|&x| classifier.consume_frame(&frame_at(x))).collect()
    }

    #[test]
    fn test_leftward_swipe_is_slide_next() {
        let mut classifier = SwipeClassifier::with_defaults();
        let labels = feed(&mut classifier, &[0.70, 0.65, 0.60, 0.55, 0.50, 0.45]);
        assert_eq!(labels[5], Some(GestureLabel::SlideNext));
        assert!(labels[..5].iter().all(Option::is_none));
    }

    #[test]
    fn test_rightward_swipe_is_slide_prev() {
        let mut classifier = SwipeClassifier::with_defaults();
        let labels = feed(&mut classifier, &[0.30, 0.35, 0.40, 0.45, 0.50, 0.55]);
        assert_eq!(labels[5], Some(GestureLabel::SlidePrev));
    }

    #[test]
    fn test_swipe_detection_is_antisymmetric() {
        // Mirrored trajectories with displacement ±0.25 yield opposite labels
        let leftward: Vec<f64> = (0..6).map(|i| 0.70 - 0.05 * f64::from(i)).collect();
        let rightward: Vec<f64> = (0..6).map(|i| 0.30 + 0.05 * f64::from(i)).collect();

        let mut classifier = SwipeClassifier::with_defaults();
        assert_eq!(
            feed(&mut classifier, &leftward)[5],
            Some(GestureLabel::SlideNext)
        );

        let mut classifier = SwipeClassifier::with_defaults();
        assert_eq!(
            feed(&mut classifier, &rightward)[5],
            Some(GestureLabel::SlidePrev)
        );
    }

    #[test]
    fn test_no_fire_before_window_fills() {
        // A huge displacement over too few samples stays quiet
        let mut classifier = SwipeClassifier::with_defaults();
        let labels = feed(&mut classifier, &[0.9, 0.1, 0.9, 0.1, 0.9]);
        assert!(labels.iter().all(Option::is_none));
    }

    #[test]
    fn test_small_drift_below_threshold_is_ignored() {
        let mut classifier = SwipeClassifier::with_defaults();
        let labels = feed(&mut classifier, &[0.50, 0.52, 0.54, 0.56, 0.58, 0.60, 0.62, 0.64]);
        assert!(labels.iter().all(Option::is_none));
    }

    #[test]
    fn test_window_cleared_after_fire() {
        let mut classifier = SwipeClassifier::with_defaults();
        feed(&mut classifier, &[0.70, 0.65, 0.60, 0.55, 0.50, 0.45]);

        // Holding the hand still after the swipe must not re-trigger until
        // a whole new window of motion accumulates
        let labels = feed(&mut classifier, &[0.45, 0.45, 0.45, 0.45, 0.45]);
        assert!(labels.iter().all(Option::is_none));
    }

    #[test]
    fn test_hand_loss_restarts_accumulation() {
        let mut classifier = SwipeClassifier::with_defaults();
        feed(&mut classifier, &[0.70, 0.60, 0.50]);
        assert_eq!(classifier.consume_frame(&LandmarkFrame::empty()), None);

        // The pre-gap samples are gone; this half of the sweep is too short
        // to fire on its own
        let labels = feed(&mut classifier, &[0.45, 0.40, 0.35]);
        assert!(labels.iter().all(Option::is_none));
    }
}
