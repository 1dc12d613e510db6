//! Redeem codes board

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CodeStatus {
    New,
    Active,
}

impl fmt::Display for CodeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CodeStatus::New => f.write_str("New"),
            CodeStatus::Active => f.write_str("Active"),
        }
    }
}

/// A code that can still be redeemed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActiveCode {
    pub code: String,
    pub reward: String,
    pub status: CodeStatus,
    #[serde(default)]
    pub note: Option<String>,
}

/// An expired code kept for reference
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArchivedCode {
    pub code: String,
    pub reward: String,
}

/// Active and expired codes plus when the list was last checked
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeBoard {
    #[serde(default)]
    pub last_updated: String,
    #[serde(default)]
    pub active: Vec<ActiveCode>,
    #[serde(default)]
    pub expired: Vec<ArchivedCode>,
}

impl CodeBoard {
    pub fn active_code(&self, index: usize) -> Option<&ActiveCode> {
        self.active.get(index)
    }

    /// Codes flagged as new since the last refresh
    pub fn new_codes(&self) -> impl Iterator<Item = &ActiveCode> {
        self.active.iter().filter(|c| c.status == CodeStatus::New)
    }

    pub fn is_expired(&self, code: &str) -> bool {
        self.expired.iter().any(|c| c.code == code)
    }
}
