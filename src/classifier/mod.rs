//! Gesture classification over smoothed landmark features.
//!
//! This module provides the classifier seam between raw landmark frames and
//! discrete gesture labels. Two concrete variants exist: a static-pose
//! classifier counting raised fingers and a motion classifier tracking
//! horizontal fingertip displacement for slide navigation.

/// Swipe-motion classifier for slide navigation
pub mod motion;

/// Static-pose classifier counting raised fingers
pub mod static_pose;

use crate::landmarks::LandmarkFrame;
use crate::Result;

/// A recognized discrete gesture
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureLabel {
    /// Thumb only
    VolumeUp,
    /// Thumb and index
    VolumeDown,
    /// Thumb, index and middle
    BrightnessDown,
    /// Thumb through ring
    BrightnessUp,
    /// Open palm, all five fingers
    Screenshot,
    /// Index fingertip swiped left
    SlideNext,
    /// Index fingertip swiped right
    SlidePrev,
}

impl GestureLabel {
    /// Stable machine-readable name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::VolumeUp => "volume_up",
            Self::VolumeDown => "volume_down",
            Self::BrightnessDown => "brightness_down",
            Self::BrightnessUp => "brightness_up",
            Self::Screenshot => "screenshot",
            Self::SlideNext => "slide_next",
            Self::SlidePrev => "slide_prev",
        }
    }

    /// Short status text shown to the user after a dispatch
    #[must_use]
    pub const fn feedback_text(self) -> &'static str {
        match self {
            Self::VolumeUp => "Volume Up",
            Self::VolumeDown => "Volume Down",
            Self::BrightnessDown => "Brightness Down",
            Self::BrightnessUp => "Brightness Up",
            Self::Screenshot => "Screenshot Taken",
            Self::SlideNext => "Next Slide",
            Self::SlidePrev => "Previous Slide",
        }
    }
}

impl std::fmt::Display for GestureLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Trait for all gesture classifiers
pub trait GestureClassifier: Send {
    /// Consume one landmark frame and yield a recognized gesture, if any.
    ///
    /// An absent (or malformed) hand resets all smoothing state so stale
    /// samples can never fire a ghost gesture when the hand reappears.
    fn consume_frame(&mut self, frame: &LandmarkFrame) -> Option<GestureLabel>;

    /// Discard all smoothing state
    fn reset(&mut self);

    /// Get classifier name
    fn name(&self) -> &str;
}

/// Create a gesture classifier by type name
pub fn create_classifier(classifier_type: &str) -> Result<Box<dyn GestureClassifier>> {
    match classifier_type.to_lowercase().as_str() {
        "static" | "static_pose" => Ok(Box::new(static_pose::StaticPoseClassifier::with_defaults())),
        "motion" | "swipe" => Ok(Box::new(motion::SwipeClassifier::with_defaults())),
        _ => Err(crate::Error::Classifier(format!(
            "Unknown classifier type: {classifier_type}"
        ))),
    }
}
