//! Copy-to-clipboard with a transient acknowledgment
//!
//! A successful copy shows "copied" until the acknowledgment window passes,
//! then reverts on its own. A failed copy is logged and reverts immediately;
//! the error never reaches the user.

use std::time::{Duration, Instant};
use thiserror::Error;
use tracing::{debug, warn};

/// Default acknowledgment window
pub const COPY_ACKNOWLEDGE: Duration = Duration::from_millis(1400);

#[derive(Error, Debug)]
pub enum ClipboardError {
    #[error("clipboard write failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("clipboard unavailable: {0}")]
    Unavailable(String),
}

/// Anything that can receive copied text
pub trait Clipboard {
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// Tracks whether the "copied" acknowledgment is currently showing
#[derive(Debug, Clone)]
pub struct CopyFeedback {
    acknowledge_for: Duration,
    copied_until: Option<Instant>,
}

impl Default for CopyFeedback {
    fn default() -> Self {
        CopyFeedback::new(COPY_ACKNOWLEDGE)
    }
}

impl CopyFeedback {
    pub fn new(acknowledge_for: Duration) -> Self {
        CopyFeedback {
            acknowledge_for,
            copied_until: None,
        }
    }

    /// Copy `value`; returns whether the acknowledgment is now showing
    pub fn copy(&mut self, clipboard: &mut dyn Clipboard, value: &str, now: Instant) -> bool {
        match clipboard.set_text(value) {
            Ok(()) => {
                debug!(len = value.len(), "copied to clipboard");
                self.copied_until = Some(now + self.acknowledge_for);
                true
            }
            Err(err) => {
                warn!(error = %err, "clipboard copy failed");
                self.copied_until = None;
                false
            }
        }
    }

    pub fn is_copied(&self, now: Instant) -> bool {
        self.copied_until.is_some_and(|until| now < until)
    }

    /// Button label for the current state
    pub fn label(&self, now: Instant) -> &'static str {
        if self.is_copied(now) {
            "Copied"
        } else {
            "Copy"
        }
    }

    /// Drop an expired acknowledgment
    pub fn tick(&mut self, now: Instant) {
        if !self.is_copied(now) {
            self.copied_until = None;
        }
    }
}

/// In-memory clipboard, used where no system clipboard is reachable
#[derive(Debug, Default)]
pub struct MemoryClipboard {
    pub contents: Option<String>,
}

impl Clipboard for MemoryClipboard {
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        self.contents = Some(text.to_string());
        Ok(())
    }
}
