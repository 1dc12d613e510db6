//! Prelude module for convenient imports
//!
//! ```rust
//! use utd_core::prelude::*;
//! ```

// Shared enums
pub use crate::types::{Choice, Rarity, SlotRole, UnitRole};

// Tools
pub use crate::catalog::{filter, CatalogEntry, CatalogFilter};
pub use crate::dps::{estimate, DpsEstimate, DpsInput};
pub use crate::team::{SlotPatch, Team, TeamSlot};
pub use crate::upgrade::{format_amount, project, project_with, GrowthModel, UpgradeInput, UpgradeProjection};

// Clipboard
pub use crate::copy::{Clipboard, CopyFeedback};

// Config
pub use crate::config::{default_catalog, default_codes, ToolLimits};

// Input coercion
pub use crate::numeric::parse_number;
