//! System clipboard through the terminal (OSC 52)
//!
//! The terminal emulator owns the system clipboard, so copying is an escape
//! sequence carrying the base64 payload: `ESC ] 52 ; c ; <payload> BEL`.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use crossterm::{execute, style::Print};
use std::io::{self, Write};
use utd_core::{Clipboard, ClipboardError};

/// Some terminals drop OSC 52 payloads beyond this many encoded bytes
const MAX_PAYLOAD: usize = 100_000;

/// Build the OSC 52 sequence for `text`
pub fn osc52_sequence(text: &str) -> Result<String, ClipboardError> {
    let encoded = STANDARD.encode(text.as_bytes());
    if encoded.len() > MAX_PAYLOAD {
        return Err(ClipboardError::Unavailable(format!(
            "payload of {} bytes exceeds terminal limit",
            encoded.len()
        )));
    }
    Ok(format!("\x1b]52;c;{}\x07", encoded))
}

/// Writes OSC 52 sequences to a terminal
pub struct Osc52Clipboard<W: Write> {
    out: W,
}

impl Osc52Clipboard<io::Stdout> {
    pub fn stdout() -> Self {
        Osc52Clipboard::new(io::stdout())
    }
}

impl<W: Write> Osc52Clipboard<W> {
    pub fn new(out: W) -> Self {
        Osc52Clipboard { out }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Clipboard for Osc52Clipboard<W> {
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        let sequence = osc52_sequence(text)?;
        execute!(self.out, Print(sequence))?;
        Ok(())
    }
}
