//! Feature extraction from raw hand landmarks.
//!
//! Reduces one landmark frame to the small numeric features the classifiers
//! consume: the raised-finger vector with its count (static poses) and the
//! index fingertip x-coordinate (swipe motion).

use crate::constants::{FINGERTIP_INDICES, INDEX_FINGERTIP, MID_JOINT_INDICES};
use crate::landmarks::{HandObservation, Handedness};

/// Per-finger raise flags (thumb through pinky) and their sum
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FingerPose {
    /// Raise flag per finger, thumb first
    pub raised: [bool; 5],
    /// Number of raised fingers
    pub count: u8,
}

/// Extracts raised-finger poses from hand observations.
///
/// The margins come from configuration rather than being baked into the
/// comparison, so the geometry stays testable.
#[derive(Debug, Clone, Copy)]
pub struct PoseExtractor {
    thumb_margin: f64,
    finger_margin: f64,
}

impl PoseExtractor {
    /// Create an extractor with the given raise margins
    #[must_use]
    pub const fn new(thumb_margin: f64, finger_margin: f64) -> Self {
        Self {
            thumb_margin,
            finger_margin,
        }
    }

    /// Compute the raised-finger vector for one observation.
    ///
    /// The thumb is tested laterally: its tip moves outward along x when
    /// raised, in opposite directions for the two hands. The remaining
    /// fingers are tested vertically, tip above mid-joint by a margin, in a
    /// coordinate frame where y grows downward.
    ///
    /// Pure function of landmark coordinates and handedness; no hidden
    /// state.
    #[must_use]
    pub fn extract(&self, hand: &HandObservation) -> FingerPose {
        let mut raised = [false; 5];

        for finger in 0..5 {
            let tip = hand.landmark(FINGERTIP_INDICES[finger]);
            let mid = hand.landmark(MID_JOINT_INDICES[finger]);

            raised[finger] = if finger == 0 {
                match hand.handedness {
                    Handedness::Right => tip.x < mid.x - self.thumb_margin,
                    Handedness::Left => tip.x > mid.x + self.thumb_margin,
                }
            } else {
                tip.y < mid.y - self.finger_margin
            };
        }

        let count = raised.iter().filter(|&&r| r).count() as u8;
        FingerPose { raised, count }
    }
}

/// Horizontal position of the index fingertip, the swipe motion feature
#[must_use]
pub fn index_fingertip_x(hand: &HandObservation) -> f64 {
    hand.landmark(INDEX_FINGERTIP).x
}
