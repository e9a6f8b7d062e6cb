//! Application wiring for the gesture control pipeline.
//!
//! Builds a session from configuration, drives the frame loop, and applies
//! slide gestures to the local deck in presentation mode.

use crate::config::Config;
use crate::dispatch::{ActionCommand, ActionDispatcher, ActionSink};
use crate::session::{Session, SessionEvent};
use crate::slides::SlideDeck;
use crate::source::LandmarkSource;
use crate::{Error, Result};
use log::info;
use std::time::Instant;

/// Which pipeline variant the application runs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlMode {
    /// Static poses driving system commands
    System,
    /// Fingertip swipes driving slide navigation
    Presentation,
}

/// Application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Pipeline variant
    pub mode: ControlMode,
    /// Pipeline parameters
    pub pipeline: Config,
    /// Number of slides loaded for presentation mode
    pub slide_count: usize,
}

/// Main application struct
pub struct GestureApp {
    config: AppConfig,
    session: Option<Session>,
    deck: SlideDeck,
}

impl GestureApp {
    /// Create an application from validated configuration
    pub fn new(config: AppConfig) -> Result<Self> {
        config.pipeline.validate()?;
        let deck = SlideDeck::new(config.slide_count);
        Ok(Self {
            config,
            session: None,
            deck,
        })
    }

    /// Start a session over the given source and sink.
    ///
    /// A capture slot carries at most one session: any previous session is
    /// fully stopped (resource released, buffers discarded) before the new
    /// one takes the slot.
    pub fn start_session(
        &mut self,
        source: Box<dyn LandmarkSource>,
        sink: Box<dyn ActionSink>,
    ) -> Result<()> {
        self.stop_session();

        let pipeline = &self.config.pipeline;
        let (classifier, dispatcher) = match self.config.mode {
            ControlMode::System => (
                pipeline.create_classifier("static")?,
                ActionDispatcher::new(
                    sink,
                    pipeline.static_pose.cooldown(),
                    pipeline.static_pose.feedback_window(),
                ),
            ),
            ControlMode::Presentation => (
                pipeline.create_classifier("swipe")?,
                ActionDispatcher::new(
                    sink,
                    pipeline.swipe.cooldown(),
                    pipeline.swipe.feedback_window(),
                ),
            ),
        };

        self.session = Some(Session::start(source, classifier, dispatcher));
        Ok(())
    }

    /// Stop and tear down the active session, if any. Idempotent.
    pub fn stop_session(&mut self) {
        if let Some(mut session) = self.session.take() {
            session.stop();
        }
    }

    /// Drive the active session until its stream ends
    pub fn run(&mut self) -> Result<()> {
        {
            let Some(session) = self.session.as_mut() else {
                return Err(Error::Session("no active session".to_string()));
            };

            loop {
                let now = Instant::now();
                match session.advance(now)? {
                    SessionEvent::StreamEnded => break,
                    SessionEvent::Quiet => {}
                    SessionEvent::Dispatched(label) => {
                        if self.config.mode == ControlMode::Presentation
                            && self.deck.apply(label)
                        {
                            info!("slide {} / {}", self.deck.current() + 1, self.deck.count());
                        }
                    }
                }
            }
        }

        self.stop_session();
        Ok(())
    }

    /// Submit a manually triggered command through the active session's
    /// cooldown gate
    pub fn submit_manual(&mut self, command: ActionCommand, feedback: &str) -> bool {
        self.session
            .as_mut()
            .is_some_and(|session| session.submit_manual(command, feedback, Instant::now()))
    }

    #[must_use]
    pub const fn deck(&self) -> &SlideDeck {
        &self.deck
    }

    #[must_use]
    pub const fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }
}
