//! Hand gesture control library for turning landmark streams into discrete
//! actions.
//!
//! This library converts a continuous, noisy stream of hand-landmark
//! observations (produced by an external hand-tracking service) into a
//! small set of debounced control actions. The pipeline per frame is:
//!
//! 1. Feature extraction reduces 21 landmarks to a raised-finger vector or
//!    a fingertip x-coordinate
//! 2. Temporal smoothing over a fixed-capacity window damps per-frame noise
//! 3. Classification maps the smoothed signal to a discrete gesture label
//! 4. Cooldown-gated dispatch forwards an abstract command to an external
//!    action sink, with transient user feedback
//!
//! Two classifier variants exist: a static-pose classifier counting raised
//! fingers (volume, brightness, screenshot) and a motion classifier
//! tracking horizontal fingertip displacement (slide navigation). Camera
//! capture and the hand-tracking model are external collaborators; the
//! pipeline only consumes their per-frame output contract.
//!
//! # Examples
//!
//! ## Running a replay session
//!
//! ```
//! use hand_gesture_control::app::{AppConfig, ControlMode, GestureApp};
//! use hand_gesture_control::config::Config;
//! use hand_gesture_control::dispatch::LoggingSink;
//! use hand_gesture_control::landmarks::LandmarkFrame;
//! use hand_gesture_control::source::ReplaySource;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut app = GestureApp::new(AppConfig {
//!     mode: ControlMode::Presentation,
//!     pipeline: Config::default(),
//!     slide_count: 12,
//! })?;
//!
//! let frames = vec![LandmarkFrame::empty(); 30];
//! app.start_session(Box::new(ReplaySource::new(frames)), Box::new(LoggingSink))?;
//! app.run()?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Driving a session frame by frame
//!
//! ```
//! use std::time::{Duration, Instant};
//! use hand_gesture_control::classifier::create_classifier;
//! use hand_gesture_control::dispatch::{ActionDispatcher, LoggingSink};
//! use hand_gesture_control::landmarks::LandmarkFrame;
//! use hand_gesture_control::session::{Session, SessionEvent};
//! use hand_gesture_control::source::ReplaySource;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let classifier = create_classifier("swipe")?;
//! let dispatcher = ActionDispatcher::new(
//!     Box::new(LoggingSink),
//!     Duration::from_millis(1000),
//!     Duration::from_millis(1000),
//! );
//! let source = ReplaySource::new(vec![LandmarkFrame::empty(); 3]);
//! let mut session = Session::start(Box::new(source), classifier, dispatcher);
//!
//! while session.advance(Instant::now())? != SessionEvent::StreamEnded {}
//! session.stop();
//! # Ok(())
//! # }
//! ```

/// Hand landmark data model and per-frame input contract
pub mod landmarks;

/// Feature extraction from raw landmarks
pub mod features;

/// Temporal smoothing over per-frame features
pub mod smoothing;

/// Gesture classification, static-pose and motion variants
pub mod classifier;

/// Cooldown-gated action dispatch
pub mod dispatch;

/// Local slide deck state for presentation control
pub mod slides;

/// Landmark stream sources
pub mod source;

/// Session lifecycle management
pub mod session;

/// Main application module
pub mod app;

/// Error types and result handling
pub mod error;

/// Constants used throughout the application
pub mod constants;

/// Configuration management
pub mod config;

pub use error::{Error, Result};
