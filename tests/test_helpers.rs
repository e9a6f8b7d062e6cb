//! Helper functions and utilities for tests

use hand_gesture_control::constants::{FINGERTIP_INDICES, INDEX_FINGERTIP, NUM_HAND_LANDMARKS};
use hand_gesture_control::dispatch::{ActionCommand, ActionSink};
use hand_gesture_control::landmarks::{HandObservation, Handedness, Landmark, LandmarkFrame};
use hand_gesture_control::Result;
use std::sync::{Arc, Mutex};

/// Frame showing a hand with the given fingers raised (thumb first)
pub fn posed_frame(raised: [bool; 5], handedness: Handedness) -> LandmarkFrame {
    let mut landmarks = vec![Landmark::new(0.5, 0.5); NUM_HAND_LANDMARKS];
    if raised[0] {
        let tip_x = match handedness {
            Handedness::Right => 0.40,
            Handedness::Left => 0.60,
        };
        landmarks[FINGERTIP_INDICES[0]] = Landmark::new(tip_x, 0.5);
    }
    for finger in 1..5 {
        if raised[finger] {
            landmarks[FINGERTIP_INDICES[finger]] = Landmark::new(0.5, 0.40);
        }
    }
    LandmarkFrame::from_hand(HandObservation::new(handedness, landmarks))
}

/// Right hand with only the thumb raised
pub fn thumb_only_frame() -> LandmarkFrame {
    posed_frame([true, false, false, false, false], Handedness::Right)
}

/// Right hand with all five fingers raised
pub fn open_palm_frame() -> LandmarkFrame {
    posed_frame([true; 5], Handedness::Right)
}

/// Right hand with the index fingertip at the given x position
pub fn swipe_frame(x: f64) -> LandmarkFrame {
    let mut landmarks = vec![Landmark::new(0.5, 0.5); NUM_HAND_LANDMARKS];
    landmarks[INDEX_FINGERTIP] = Landmark::new(x, 0.5);
    LandmarkFrame::from_hand(HandObservation::new(Handedness::Right, landmarks))
}

/// Sink recording every command it receives, for assertions
pub struct RecordingSink {
    delivered: Arc<Mutex<Vec<ActionCommand>>>,
}

impl RecordingSink {
    /// Create a sink plus a shared handle onto its delivery log
    pub fn new() -> (Self, Arc<Mutex<Vec<ActionCommand>>>) {
        let delivered = Arc::new(Mutex::new(Vec::new()));
        (
            Self {
                delivered: Arc::clone(&delivered),
            },
            delivered,
        )
    }
}

impl ActionSink for RecordingSink {
    fn deliver(&mut self, command: &ActionCommand) -> Result<()> {
        self.delivered.lock().unwrap().push(command.clone());
        Ok(())
    }
}
