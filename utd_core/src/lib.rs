//! utd_core - Planning tools for Universal Tower Defense
//!
//! This library provides:
//! - DPS estimator: expected hit damage and sustained DPS with crits
//! - Upgrade cost projector: linear and exponential per-level costs
//! - Team builder: fixed six-slot roster with a shareable text export
//! - Unit catalog: read-only unit records with query/role/rarity filtering
//! - Codes board and the copy-to-clipboard acknowledgment
//!
//! Every tool is a pure function of its input. Malformed numeric input is
//! coerced to a safe default rather than rejected.

pub mod catalog;
pub mod codes;
pub mod config;
pub mod copy;
pub mod dps;
pub mod numeric;
pub mod prelude;
pub mod team;
pub mod types;
pub mod upgrade;

// Re-export core types for convenience
pub use catalog::{filter, CatalogEntry, CatalogFilter};
pub use codes::{ActiveCode, ArchivedCode, CodeBoard, CodeStatus};
pub use config::{default_catalog, default_codes, ConfigError, ToolLimits};
pub use copy::{Clipboard, ClipboardError, CopyFeedback, MemoryClipboard};
pub use dps::{estimate, DpsEstimate, DpsInput};
pub use team::{SlotPatch, Team, TeamError, TeamSlot, TEAM_SIZE};
pub use types::{Choice, Rarity, SlotRole, UnitRole};
pub use upgrade::{project, project_with, GrowthModel, UpgradeInput, UpgradeProjection};
