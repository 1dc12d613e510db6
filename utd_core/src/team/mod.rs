//! Team composition builder
//!
//! A team always holds exactly [`TEAM_SIZE`] slots. Slots are edited in place
//! by index and never added or removed. Raw text is kept exactly as typed;
//! whitespace is only normalized when the team is exported.

mod export;

pub use export::{normalize_whitespace, serialize_team};

use crate::types::SlotRole;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

/// Number of slots in every team
pub const TEAM_SIZE: usize = 6;

/// Name a fresh or reset team starts with
pub const DEFAULT_TEAM_NAME: &str = "My UTD Team";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TeamError {
    #[error("slot index {0} is out of range (team has {} slots)", TEAM_SIZE)]
    SlotOutOfRange(usize),
}

/// One roster slot
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamSlot {
    pub name: String,
    pub role: SlotRole,
    pub notes: String,
}

/// Partial update for a slot; `None` fields are left untouched
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SlotPatch {
    pub name: Option<String>,
    pub role: Option<SlotRole>,
    pub notes: Option<String>,
}

impl SlotPatch {
    pub fn name(name: impl Into<String>) -> Self {
        SlotPatch {
            name: Some(name.into()),
            ..SlotPatch::default()
        }
    }

    pub fn role(role: SlotRole) -> Self {
        SlotPatch {
            role: Some(role),
            ..SlotPatch::default()
        }
    }

    pub fn notes(notes: impl Into<String>) -> Self {
        SlotPatch {
            notes: Some(notes.into()),
            ..SlotPatch::default()
        }
    }
}

/// Team name plus the fixed slot array
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    pub team_name: String,
    pub slots: [TeamSlot; TEAM_SIZE],
}

impl Default for Team {
    fn default() -> Self {
        Team {
            team_name: DEFAULT_TEAM_NAME.to_string(),
            slots: Default::default(),
        }
    }
}

impl Team {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply `patch` to the slot at `index`, leaving every other slot untouched
    pub fn update_slot(&mut self, index: usize, patch: SlotPatch) -> Result<(), TeamError> {
        let slot = self
            .slots
            .get_mut(index)
            .ok_or(TeamError::SlotOutOfRange(index))?;

        if let Some(name) = patch.name {
            slot.name = name;
        }
        if let Some(role) = patch.role {
            slot.role = role;
        }
        if let Some(notes) = patch.notes {
            slot.notes = notes;
        }
        debug!(index, "team slot updated");
        Ok(())
    }

    pub fn update_team_name(&mut self, name: impl Into<String>) {
        self.team_name = name.into();
    }

    /// Restore the default name and six blank Flex slots
    pub fn reset(&mut self) {
        *self = Team::default();
        debug!("team reset");
    }

    pub fn slot(&self, index: usize) -> Option<&TeamSlot> {
        self.slots.get(index)
    }

    /// Shareable plain-text summary
    pub fn serialize(&self) -> String {
        serialize_team(self)
    }

    /// Structured export of the raw team state
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Number of slots assigned each role, in [`SlotRole::all`] order
    pub fn role_counts(&self) -> Vec<(SlotRole, usize)> {
        SlotRole::all()
            .iter()
            .map(|role| (*role, self.slots.iter().filter(|s| s.role == *role).count()))
            .collect()
    }
}
