//! Landmark stream sources.
//!
//! The capture device and the hand-tracking model live outside this crate;
//! a [`LandmarkSource`] is the seam through which their per-frame output
//! enters the pipeline. Two implementations are provided: a JSONL replay
//! source for recorded streams and an in-memory source for tests and demos.

use crate::landmarks::LandmarkFrame;
use crate::{Error, Result};
use std::collections::VecDeque;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

/// Trait for per-tick landmark frame producers.
///
/// `next_frame` returns `Ok(None)` once the stream ends; `close` releases
/// the underlying capture resource and must be idempotent.
pub trait LandmarkSource: Send {
    /// Pull the next frame, or `None` at end of stream
    fn next_frame(&mut self) -> Result<Option<LandmarkFrame>>;

    /// Release the capture resource; further frames read as end of stream
    fn close(&mut self) -> Result<()> {
        Ok(())
    }
}

/// Replay source reading one JSON frame object per line.
///
/// Blank lines are skipped; a line that fails to decode is a source error,
/// not a silent drop, because a recorded stream should never be corrupt.
pub struct JsonlSource {
    path: PathBuf,
    reader: Option<BufReader<File>>,
    line_number: usize,
}

impl JsonlSource {
    /// Open a recorded landmark stream
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let file = File::open(&path)
            .map_err(|e| Error::Source(format!("{}: {e}", path.display())))?;
        Ok(Self {
            path,
            reader: Some(BufReader::new(file)),
            line_number: 0,
        })
    }
}

impl LandmarkSource for JsonlSource {
    fn next_frame(&mut self) -> Result<Option<LandmarkFrame>> {
        let Some(reader) = self.reader.as_mut() else {
            return Ok(None);
        };

        let mut line = String::new();
        loop {
            line.clear();
            self.line_number += 1;
            if reader.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }
            return serde_json::from_str(trimmed)
                .map(Some)
                .map_err(|e| {
                    Error::Source(format!(
                        "{}:{}: {e}",
                        self.path.display(),
                        self.line_number
                    ))
                });
        }
    }

    fn close(&mut self) -> Result<()> {
        self.reader = None;
        Ok(())
    }
}

/// In-memory source replaying a prepared frame sequence
pub struct ReplaySource {
    frames: VecDeque<LandmarkFrame>,
}

impl ReplaySource {
    #[must_use]
    pub fn new(frames: Vec<LandmarkFrame>) -> Self {
        Self {
            frames: frames.into(),
        }
    }
}

impl LandmarkSource for ReplaySource {
    fn next_frame(&mut self) -> Result<Option<LandmarkFrame>> {
        Ok(self.frames.pop_front())
    }

    fn close(&mut self) -> Result<()> {
        self.frames.clear();
        Ok(())
    }
}
