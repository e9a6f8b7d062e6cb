//! Hand landmark data model.
//!
//! A landmark frame is the per-tick output contract of the external hand
//! tracking service: zero or one hand, each with 21 ordered points in
//! normalized image coordinates (x grows rightward, y grows downward) and a
//! handedness label.

use crate::constants::NUM_HAND_LANDMARKS;
use serde::{Deserialize, Serialize};

/// One tracked anatomical point, normalized to the 0..1 image range.
///
/// The z coordinate is optional in the wire format and defaults to zero;
/// none of the classifiers consume it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Landmark {
    pub x: f64,
    pub y: f64,
    #[serde(default)]
    pub z: f64,
}

impl Landmark {
    /// Create a 2D landmark with zero depth
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y, z: 0.0 }
    }
}

/// Which hand the tracker believes it is observing.
///
/// Affects the thumb-raise geometry: the thumb extends outward along x,
/// in opposite directions for the two hands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Handedness {
    Left,
    Right,
}

/// A single detected hand: 21 ordered landmarks plus a handedness label
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HandObservation {
    pub handedness: Handedness,
    pub landmarks: Vec<Landmark>,
}

impl HandObservation {
    /// Create an observation from a landmark list
    #[must_use]
    pub fn new(handedness: Handedness, landmarks: Vec<Landmark>) -> Self {
        Self {
            handedness,
            landmarks,
        }
    }

    /// Whether the observation carries the expected landmark count
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.landmarks.len() == NUM_HAND_LANDMARKS
    }

    /// Landmark at a fixed anatomical index
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range; callers validate completeness
    /// through [`LandmarkFrame::valid_hand`] first.
    #[must_use]
    pub fn landmark(&self, index: usize) -> Landmark {
        self.landmarks[index]
    }
}

/// Zero or one hand observation for a single capture tick.
///
/// Absence of a hand is a normal state, not an error.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LandmarkFrame {
    #[serde(default)]
    pub hand: Option<HandObservation>,
}

impl LandmarkFrame {
    /// A tick on which no hand was detected
    #[must_use]
    pub const fn empty() -> Self {
        Self { hand: None }
    }

    /// A tick carrying one hand observation
    #[must_use]
    pub fn from_hand(hand: HandObservation) -> Self {
        Self { hand: Some(hand) }
    }

    /// The hand observation, if present and well-formed.
    ///
    /// An observation with the wrong landmark count is dropped defensively
    /// and treated exactly like absence, so stale tracking output can never
    /// reach the classifiers.
    #[must_use]
    pub fn valid_hand(&self) -> Option<&HandObservation> {
        self.hand.as_ref().filter(|hand| hand.is_complete())
    }
}
