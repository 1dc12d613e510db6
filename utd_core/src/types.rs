//! Closed enums shared by the planning tools

use serde::{Deserialize, Serialize};
use std::fmt;

/// Role assigned to a team builder slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SlotRole {
    #[serde(rename = "Main DPS")]
    MainDps,
    Support,
    #[serde(rename = "CC")]
    CrowdControl,
    Economy,
    #[default]
    Flex,
}

impl SlotRole {
    /// Get all slot roles in selection order
    pub fn all() -> &'static [SlotRole] {
        &[
            SlotRole::MainDps,
            SlotRole::Support,
            SlotRole::CrowdControl,
            SlotRole::Economy,
            SlotRole::Flex,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            SlotRole::MainDps => "Main DPS",
            SlotRole::Support => "Support",
            SlotRole::CrowdControl => "CC",
            SlotRole::Economy => "Economy",
            SlotRole::Flex => "Flex",
        }
    }
}

impl fmt::Display for SlotRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Role of a unit in the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UnitRole {
    #[serde(rename = "DPS")]
    Dps,
    Support,
    #[serde(rename = "Crowd Control")]
    CrowdControl,
    Hybrid,
    Economy,
}

impl UnitRole {
    pub fn all() -> &'static [UnitRole] {
        &[
            UnitRole::Dps,
            UnitRole::Support,
            UnitRole::CrowdControl,
            UnitRole::Hybrid,
            UnitRole::Economy,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            UnitRole::Dps => "DPS",
            UnitRole::Support => "Support",
            UnitRole::CrowdControl => "Crowd Control",
            UnitRole::Hybrid => "Hybrid",
            UnitRole::Economy => "Economy",
        }
    }
}

impl fmt::Display for UnitRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Unit rarity tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rarity {
    Common,
    Rare,
    Epic,
    Mythic,
    Secret,
    Unknown,
}

impl Rarity {
    pub fn all() -> &'static [Rarity] {
        &[
            Rarity::Common,
            Rarity::Rare,
            Rarity::Epic,
            Rarity::Mythic,
            Rarity::Secret,
            Rarity::Unknown,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            Rarity::Common => "Common",
            Rarity::Rare => "Rare",
            Rarity::Epic => "Epic",
            Rarity::Mythic => "Mythic",
            Rarity::Secret => "Secret",
            Rarity::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for Rarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A select-field value: either every option or exactly one
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Choice<T> {
    #[default]
    All,
    Only(T),
}

impl<T: Copy + PartialEq> Choice<T> {
    /// Whether `value` passes this selection
    pub fn admits(&self, value: T) -> bool {
        match self {
            Choice::All => true,
            Choice::Only(wanted) => *wanted == value,
        }
    }

    /// Step to the next option, wrapping `All -> options[0] -> ... -> All`
    pub fn next(self, options: &[T]) -> Self {
        match self {
            Choice::All => options.first().map_or(Choice::All, |first| Choice::Only(*first)),
            Choice::Only(current) => {
                match options.iter().position(|o| *o == current) {
                    Some(i) if i + 1 < options.len() => Choice::Only(options[i + 1]),
                    _ => Choice::All,
                }
            }
        }
    }

    /// Step to the previous option, wrapping the other way
    pub fn prev(self, options: &[T]) -> Self {
        match self {
            Choice::All => options.last().map_or(Choice::All, |last| Choice::Only(*last)),
            Choice::Only(current) => match options.iter().position(|o| *o == current) {
                Some(i) if i > 0 => Choice::Only(options[i - 1]),
                _ => Choice::All,
            },
        }
    }
}

impl<T: fmt::Display> fmt::Display for Choice<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Choice::All => f.write_str("All"),
            Choice::Only(value) => value.fmt(f),
        }
    }
}
