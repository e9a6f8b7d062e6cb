//! Static-pose classifier: a band classifier over the smoothed raised-finger
//! count, conjoined with raw per-frame raise flags.

use super::{GestureClassifier, GestureLabel};
use crate::constants::{
    COUNT_BAND_RADIUS, DEFAULT_FINGER_MARGIN, DEFAULT_STATIC_WINDOW, DEFAULT_THUMB_MARGIN,
};
use crate::features::PoseExtractor;
use crate::landmarks::LandmarkFrame;
use crate::smoothing::SignalWindow;

/// Gesture label per count band, bands centered on 1 through 5
const BAND_LABELS: [GestureLabel; 5] = [
    GestureLabel::VolumeUp,
    GestureLabel::VolumeDown,
    GestureLabel::BrightnessDown,
    GestureLabel::BrightnessUp,
    GestureLabel::Screenshot,
];

/// Static-pose classifier over the smoothed raised-finger count
pub struct StaticPoseClassifier {
    extractor: PoseExtractor,
    window: SignalWindow,
}

impl StaticPoseClassifier {
    /// Create a classifier with explicit margins and window size
    #[must_use]
    pub fn new(extractor: PoseExtractor, window_size: usize) -> Self {
        Self {
            extractor,
            window: SignalWindow::new(window_size),
        }
    }

    /// Create a classifier with the default margins and window
    #[must_use]
    pub fn with_defaults() -> Self {
        Self::new(
            PoseExtractor::new(DEFAULT_THUMB_MARGIN, DEFAULT_FINGER_MARGIN),
            DEFAULT_STATIC_WINDOW,
        )
    }

    /// Map a smoothed count onto its band, then confirm the anatomical
    /// requirement on the raw per-frame flags.
    ///
    /// The flags are checked raw, not averaged, so the requirement stays
    /// exact even while the count is smoothed. A band whose flag
    /// conjunction fails yields nothing; there is no fallback band.
    fn classify(average: f64, raised: &[bool; 5]) -> Option<GestureLabel> {
        for (index, &label) in BAND_LABELS.iter().enumerate() {
            let center = (index + 1) as f64;
            let in_band = if index == BAND_LABELS.len() - 1 {
                // Top band is open-ended: a full open palm can average
                // slightly above 5 only in theory, but never below 4.5
                average >= center - COUNT_BAND_RADIUS
            } else {
                average >= center - COUNT_BAND_RADIUS && average < center + COUNT_BAND_RADIUS
            };
            if !in_band {
                continue;
            }
            let flags_hold = index == 4 || raised[..=index].iter().all(|&r| r);
            return flags_hold.then_some(label);
        }
        None
    }
}

impl GestureClassifier for StaticPoseClassifier {
    fn consume_frame(&mut self, frame: &LandmarkFrame) -> Option<GestureLabel> {
        let Some(hand) = frame.valid_hand() else {
            self.reset();
            return None;
        };

        let pose = self.extractor.extract(hand);
        self.window.push(f64::from(pose.count));

        // Partial-window averages are allowed: a decisive first frame can
        // fire immediately rather than waiting for the window to fill
        let average = self.window.average()?;
        Self::classify(average, &pose.raised)
    }

    fn reset(&mut self) {
        self.window.clear();
    }

    fn name(&self) -> &str {
        "StaticPoseClassifier"
    }
}
