//! Configuration management for the gesture control pipeline

use crate::classifier::{self, GestureClassifier};
use crate::constants::{
    DEFAULT_FINGER_MARGIN, DEFAULT_MOTION_COOLDOWN_MS, DEFAULT_MOTION_HUD_MS,
    DEFAULT_MOTION_WINDOW, DEFAULT_STATIC_COOLDOWN_MS, DEFAULT_STATIC_HUD_MS,
    DEFAULT_STATIC_WINDOW, DEFAULT_SWIPE_THRESHOLD, DEFAULT_THUMB_MARGIN,
};
use crate::features::PoseExtractor;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Feature extraction margins
    pub extraction: ExtractionConfig,

    /// Static-pose recognition parameters
    pub static_pose: StaticPoseConfig,

    /// Swipe recognition parameters
    pub swipe: SwipeConfig,
}

/// Raise-test margins for feature extraction
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Lateral thumb margin in normalized x units
    pub thumb_margin: f64,

    /// Vertical finger margin in normalized y units
    pub finger_margin: f64,
}

/// Static-pose classifier and dispatch parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StaticPoseConfig {
    /// Smoothing window over the raised-finger count
    pub window_size: usize,

    /// Minimum gap between dispatched actions (milliseconds)
    pub cooldown_ms: u64,

    /// Feedback display window (milliseconds)
    pub feedback_ms: u64,
}

/// Swipe classifier and dispatch parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SwipeConfig {
    /// Smoothing window over the fingertip x-coordinate
    pub window_size: usize,

    /// Minimum absolute displacement that counts as a swipe
    pub swipe_threshold: f64,

    /// Minimum gap between dispatched actions (milliseconds)
    pub cooldown_ms: u64,

    /// Feedback display window (milliseconds)
    pub feedback_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            extraction: ExtractionConfig::default(),
            static_pose: StaticPoseConfig::default(),
            swipe: SwipeConfig::default(),
        }
    }
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            thumb_margin: DEFAULT_THUMB_MARGIN,
            finger_margin: DEFAULT_FINGER_MARGIN,
        }
    }
}

impl Default for StaticPoseConfig {
    fn default() -> Self {
        Self {
            window_size: DEFAULT_STATIC_WINDOW,
            cooldown_ms: DEFAULT_STATIC_COOLDOWN_MS,
            feedback_ms: DEFAULT_STATIC_HUD_MS,
        }
    }
}

impl Default for SwipeConfig {
    fn default() -> Self {
        Self {
            window_size: DEFAULT_MOTION_WINDOW,
            swipe_threshold: DEFAULT_SWIPE_THRESHOLD,
            cooldown_ms: DEFAULT_MOTION_COOLDOWN_MS,
            feedback_ms: DEFAULT_MOTION_HUD_MS,
        }
    }
}

impl StaticPoseConfig {
    #[must_use]
    pub const fn cooldown(&self) -> Duration {
        Duration::from_millis(self.cooldown_ms)
    }

    #[must_use]
    pub const fn feedback_window(&self) -> Duration {
        Duration::from_millis(self.feedback_ms)
    }
}

impl SwipeConfig {
    #[must_use]
    pub const fn cooldown(&self) -> Duration {
        Duration::from_millis(self.cooldown_ms)
    }

    #[must_use]
    pub const fn feedback_window(&self) -> Duration {
        Duration::from_millis(self.feedback_ms)
    }
}

impl Config {
    /// Load configuration from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        serde_yaml::from_str(&content)
            .map_err(|e| Error::Config(format!("Failed to parse config: {e}")))
    }

    /// Save configuration to a YAML file
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = serde_yaml::to_string(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {e}")))?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Create a gesture classifier from configuration
    pub fn create_classifier(&self, classifier_type: &str) -> Result<Box<dyn GestureClassifier>> {
        use crate::classifier::{motion::SwipeClassifier, static_pose::StaticPoseClassifier};

        match classifier_type {
            "static" | "static_pose" => Ok(Box::new(StaticPoseClassifier::new(
                PoseExtractor::new(self.extraction.thumb_margin, self.extraction.finger_margin),
                self.static_pose.window_size,
            ))),
            "motion" | "swipe" => Ok(Box::new(SwipeClassifier::new(
                self.swipe.window_size,
                self.swipe.swipe_threshold,
            ))),
            name => classifier::create_classifier(name),
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.extraction.thumb_margin) {
            return Err(Error::Config(
                "Thumb margin must be between 0.0 and 1.0".to_string(),
            ));
        }
        if !(0.0..=1.0).contains(&self.extraction.finger_margin) {
            return Err(Error::Config(
                "Finger margin must be between 0.0 and 1.0".to_string(),
            ));
        }

        if self.static_pose.window_size == 0 {
            return Err(Error::Config(
                "Static window size must be greater than 0".to_string(),
            ));
        }
        if self.swipe.window_size == 0 {
            return Err(Error::Config(
                "Swipe window size must be greater than 0".to_string(),
            ));
        }

        if self.swipe.swipe_threshold <= 0.0 || self.swipe.swipe_threshold > 1.0 {
            return Err(Error::Config(
                "Swipe threshold must be in (0.0, 1.0]".to_string(),
            ));
        }

        if self.static_pose.cooldown_ms == 0 || self.swipe.cooldown_ms == 0 {
            return Err(Error::Config(
                "Cooldown must be greater than 0 ms".to_string(),
            ));
        }
        if self.static_pose.feedback_ms == 0 || self.swipe.feedback_ms == 0 {
            return Err(Error::Config(
                "Feedback window must be greater than 0 ms".to_string(),
            ));
        }

        Ok(())
    }
}

/// Example configuration file content
pub const EXAMPLE_CONFIG: &str = r#"# Hand Gesture Control Configuration

# Feature extraction margins
extraction:
  thumb_margin: 0.03
  finger_margin: 0.02

# Static pose recognition (system control)
static_pose:
  window_size: 8
  cooldown_ms: 1800
  feedback_ms: 1200

# Swipe recognition (presentation control)
swipe:
  window_size: 6
  swipe_threshold: 0.22
  cooldown_ms: 1000
  feedback_ms: 1000
"#;
