//! Cooldown-gated action dispatch.
//!
//! The dispatcher turns recognized gestures into abstract commands for an
//! external executor. It enforces the per-session cooldown, shows a
//! transient feedback message after each accepted dispatch, and forwards
//! commands best-effort: a failing sink is logged and forgotten, never
//! retried, and never blocks frame processing.

use crate::classifier::GestureLabel;
use crate::Result;
use log::{debug, info, warn};
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Parameter value for directional commands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

impl Direction {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Up => "up",
            Self::Down => "down",
        }
    }
}

/// An abstract command for the external action executor.
///
/// `issued_at` is taken from the same monotonic clock as the cooldown, so
/// inter-command spacing is measurable without wall-clock control.
#[derive(Debug, Clone)]
pub struct ActionCommand {
    pub kind: String,
    pub parameters: HashMap<String, String>,
    pub issued_at: Instant,
}

impl ActionCommand {
    fn new(kind: &str, issued_at: Instant) -> Self {
        Self {
            kind: kind.to_string(),
            parameters: HashMap::new(),
            issued_at,
        }
    }

    fn with_parameter(mut self, key: &str, value: &str) -> Self {
        self.parameters.insert(key.to_string(), value.to_string());
        self
    }

    /// Volume step command
    #[must_use]
    pub fn volume(direction: Direction, issued_at: Instant) -> Self {
        Self::new("volume", issued_at).with_parameter("type", direction.as_str())
    }

    /// Brightness step command
    #[must_use]
    pub fn brightness(direction: Direction, issued_at: Instant) -> Self {
        Self::new("brightness", issued_at).with_parameter("type", direction.as_str())
    }

    /// Screen capture command
    #[must_use]
    pub fn screenshot(issued_at: Instant) -> Self {
        Self::new("screenshot", issued_at)
    }

    /// Open the configured media link
    #[must_use]
    pub fn youtube(issued_at: Instant) -> Self {
        Self::new("youtube", issued_at)
    }

    /// Toggle system mute
    #[must_use]
    pub fn mute(issued_at: Instant) -> Self {
        Self::new("mute", issued_at)
    }

    /// The sink command for a recognized gesture.
    ///
    /// Slide gestures return `None`: they mutate the local slide index
    /// rather than reaching the external executor.
    #[must_use]
    pub fn for_label(label: GestureLabel, issued_at: Instant) -> Option<Self> {
        match label {
            GestureLabel::VolumeUp => Some(Self::volume(Direction::Up, issued_at)),
            GestureLabel::VolumeDown => Some(Self::volume(Direction::Down, issued_at)),
            GestureLabel::BrightnessDown => Some(Self::brightness(Direction::Down, issued_at)),
            GestureLabel::BrightnessUp => Some(Self::brightness(Direction::Up, issued_at)),
            GestureLabel::Screenshot => Some(Self::screenshot(issued_at)),
            GestureLabel::SlideNext | GestureLabel::SlidePrev => None,
        }
    }
}

/// Trait for action command receivers.
///
/// Implementations must return promptly; delivery is best-effort and the
/// outcome is observed only for logging.
pub trait ActionSink: Send {
    /// Deliver one command to the external executor
    fn deliver(&mut self, command: &ActionCommand) -> Result<()>;
}

/// Sink that only logs commands, for headless runs and replay sessions
pub struct LoggingSink;

impl ActionSink for LoggingSink {
    fn deliver(&mut self, command: &ActionCommand) -> Result<()> {
        info!("action: {} {:?}", command.kind, command.parameters);
        Ok(())
    }
}

struct HudMessage {
    text: String,
    expires_at: Instant,
}

/// Cooldown-gated dispatcher bound to one session
pub struct ActionDispatcher {
    sink: Box<dyn ActionSink>,
    cooldown: Duration,
    hud_duration: Duration,
    last_dispatch: Option<Instant>,
    hud: Option<HudMessage>,
}

impl ActionDispatcher {
    /// Create a dispatcher with the given sink, cooldown and feedback window
    #[must_use]
    pub fn new(sink: Box<dyn ActionSink>, cooldown: Duration, hud_duration: Duration) -> Self {
        Self {
            sink,
            cooldown,
            hud_duration,
            last_dispatch: None,
            hud: None,
        }
    }

    /// Submit a recognized gesture at the given instant.
    ///
    /// Within the cooldown the gesture is dropped silently: no queue, no
    /// deferred retry, the user simply repeats it later. On acceptance the
    /// cooldown clock re-arms, feedback is shown, and the mapped command
    /// (if any) goes to the sink. Returns the label when accepted.
    pub fn submit(&mut self, label: GestureLabel, now: Instant) -> Option<GestureLabel> {
        if !self.cooldown_elapsed(now) {
            debug!("dropped {label}: within cooldown");
            return None;
        }
        self.last_dispatch = Some(now);
        self.show_feedback(label.feedback_text(), now);
        if let Some(command) = ActionCommand::for_label(label, now) {
            self.deliver(&command);
        }
        Some(label)
    }

    /// Submit a manually triggered command through the same cooldown gate
    /// the gesture path uses.
    pub fn submit_command(&mut self, command: ActionCommand, feedback: &str, now: Instant) -> bool {
        if !self.cooldown_elapsed(now) {
            debug!("dropped manual {}: within cooldown", command.kind);
            return false;
        }
        self.last_dispatch = Some(now);
        self.show_feedback(feedback, now);
        self.deliver(&command);
        true
    }

    /// Current feedback text, if its display window has not yet elapsed
    #[must_use]
    pub fn feedback(&self, now: Instant) -> Option<&str> {
        self.hud
            .as_ref()
            .filter(|message| now < message.expires_at)
            .map(|message| message.text.as_str())
    }

    /// Clear the cooldown clock and any pending feedback
    pub fn reset(&mut self) {
        self.last_dispatch = None;
        self.hud = None;
    }

    fn cooldown_elapsed(&self, now: Instant) -> bool {
        self.last_dispatch
            .map_or(true, |last| now.duration_since(last) >= self.cooldown)
    }

    fn show_feedback(&mut self, text: &str, now: Instant) {
        // Replaces any pending message and its clear deadline
        self.hud = Some(HudMessage {
            text: text.to_string(),
            expires_at: now + self.hud_duration,
        });
    }

    fn deliver(&mut self, command: &ActionCommand) {
        if let Err(error) = self.sink.deliver(command) {
            warn!("action delivery failed: {error}");
        }
    }
}
