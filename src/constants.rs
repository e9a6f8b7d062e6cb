//! Constants used throughout the application

/// Number of landmarks in a single hand observation
pub const NUM_HAND_LANDMARKS: usize = 21;

/// Fingertip landmark indices, thumb through pinky
pub const FINGERTIP_INDICES: [usize; 5] = [4, 8, 12, 16, 20];

/// Mid-joint landmark indices, thumb through pinky
pub const MID_JOINT_INDICES: [usize; 5] = [3, 6, 10, 14, 18];

/// Index fingertip landmark (swipe tracking)
pub const INDEX_FINGERTIP: usize = 8;

/// Lateral margin for the thumb raise test (normalized x units)
pub const DEFAULT_THUMB_MARGIN: f64 = 0.03;

/// Vertical margin for the finger raise test (normalized y units)
pub const DEFAULT_FINGER_MARGIN: f64 = 0.02;

/// Smoothing window for the raised-finger count
pub const DEFAULT_STATIC_WINDOW: usize = 8;

/// Smoothing window for fingertip motion
pub const DEFAULT_MOTION_WINDOW: usize = 6;

/// Minimum absolute fingertip displacement that counts as a swipe
pub const DEFAULT_SWIPE_THRESHOLD: f64 = 0.22;

/// Half-width of each finger-count classification band
pub const COUNT_BAND_RADIUS: f64 = 0.5;

/// Cooldown between dispatched static-pose actions
pub const DEFAULT_STATIC_COOLDOWN_MS: u64 = 1800;

/// Cooldown between dispatched swipe actions
pub const DEFAULT_MOTION_COOLDOWN_MS: u64 = 1000;

/// Display window for static-pose feedback messages
pub const DEFAULT_STATIC_HUD_MS: u64 = 1200;

/// Display window for swipe feedback messages
pub const DEFAULT_MOTION_HUD_MS: u64 = 1000;
