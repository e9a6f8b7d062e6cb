//! Session lifecycle: one classifier and dispatcher bound to one landmark
//! stream.
//!
//! A session exclusively owns its capture handle and all buffered state.
//! Nothing outlives it: stopping releases the source, discards the
//! smoothing buffers, and disarms the cooldown clock, on every exit path.

use crate::classifier::{GestureClassifier, GestureLabel};
use crate::dispatch::{ActionCommand, ActionDispatcher};
use crate::landmarks::LandmarkFrame;
use crate::source::LandmarkSource;
use crate::Result;
use log::{debug, info, warn};
use std::time::Instant;

/// Observable processing state of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// No hand currently tracked
    Idle,
    /// Hand tracked, smoothing buffers accumulating
    Buffering,
    /// A gesture was dispatched on the most recent frame
    Dispatched,
}

/// Outcome of advancing a session by one frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEvent {
    /// The landmark source is exhausted (or the session was stopped)
    StreamEnded,
    /// A frame was processed without a dispatch
    Quiet,
    /// A gesture was recognized and dispatched
    Dispatched(GestureLabel),
}

/// One gesture pipeline bound to one landmark stream
pub struct Session {
    source: Box<dyn LandmarkSource>,
    classifier: Box<dyn GestureClassifier>,
    dispatcher: ActionDispatcher,
    state: SessionState,
    running: bool,
}

impl Session {
    /// Start a session over the given source.
    ///
    /// The session takes exclusive ownership of the capture handle; only
    /// one session may read a capture slot at a time, which callers ensure
    /// by stopping the previous session before starting a new one.
    #[must_use]
    pub fn start(
        source: Box<dyn LandmarkSource>,
        classifier: Box<dyn GestureClassifier>,
        dispatcher: ActionDispatcher,
    ) -> Self {
        info!("session started with {}", classifier.name());
        Self {
            source,
            classifier,
            dispatcher,
            state: SessionState::Idle,
            running: true,
        }
    }

    #[must_use]
    pub const fn is_running(&self) -> bool {
        self.running
    }

    #[must_use]
    pub const fn state(&self) -> SessionState {
        self.state
    }

    /// Pull the next frame from the owned source and process it
    pub fn advance(&mut self, now: Instant) -> Result<SessionEvent> {
        if !self.running {
            return Ok(SessionEvent::StreamEnded);
        }
        let Some(frame) = self.source.next_frame()? else {
            return Ok(SessionEvent::StreamEnded);
        };
        Ok(match self.process_frame(&frame, now) {
            Some(label) => SessionEvent::Dispatched(label),
            None => SessionEvent::Quiet,
        })
    }

    /// Process one landmark frame.
    ///
    /// This is the per-tick entry point; classification completes before
    /// the call returns, so frames are never processed concurrently.
    pub fn process_frame(&mut self, frame: &LandmarkFrame, now: Instant) -> Option<GestureLabel> {
        if !self.running {
            // An in-flight frame must not re-arm a stopped session
            return None;
        }

        if frame.valid_hand().is_none() {
            // The single reset point: clearing both the smoothing buffers
            // and the cooldown clock guarantees no ghost gesture survives a
            // tracking gap
            if self.state != SessionState::Idle {
                debug!("hand lost; resetting session state");
            }
            self.classifier.reset();
            self.dispatcher.reset();
            self.state = SessionState::Idle;
            return None;
        }

        // A dispatch returns to buffering on the very next frame; the
        // cooldown is tracked separately, not as a blocking state
        self.state = SessionState::Buffering;

        let label = self.classifier.consume_frame(frame)?;
        let accepted = self.dispatcher.submit(label, now)?;
        self.state = SessionState::Dispatched;
        Some(accepted)
    }

    /// Submit a manually triggered command through the session's cooldown
    /// gate (the on-screen button path).
    pub fn submit_manual(&mut self, command: ActionCommand, feedback: &str, now: Instant) -> bool {
        if !self.running {
            return false;
        }
        self.dispatcher.submit_command(command, feedback, now)
    }

    /// Current feedback text, if its display window has not elapsed
    #[must_use]
    pub fn feedback(&self, now: Instant) -> Option<&str> {
        self.dispatcher.feedback(now)
    }

    /// Stop the session: release the capture resource, discard buffered
    /// state, disarm the cooldown clock. Idempotent.
    pub fn stop(&mut self) {
        if !self.running {
            return;
        }
        self.running = false;
        self.classifier.reset();
        self.dispatcher.reset();
        self.state = SessionState::Idle;
        if let Err(error) = self.source.close() {
            warn!("failed to release landmark source: {error}");
        }
        info!("session stopped");
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        self.stop();
    }
}
