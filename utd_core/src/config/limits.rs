//! Tool input limits configuration

use serde::{Deserialize, Serialize};

/// Tunable input bounds and display thresholds
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ToolLimits {
    #[serde(default)]
    pub upgrade: UpgradeLimits,
    #[serde(default)]
    pub copy: CopyLimits,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpgradeLimits {
    /// Upper bound on projected levels
    #[serde(default = "default_max_levels")]
    pub max_levels: u32,
    /// Ceiling for base cost and linear step
    #[serde(default = "default_max_cost")]
    pub max_cost: f64,
    #[serde(default = "default_max_growth_rate")]
    pub max_growth_rate: f64,
    /// Number of leading levels shown in the breakdown
    #[serde(default = "default_preview_levels")]
    pub preview_levels: usize,
    /// Amounts at or above this render in scientific notation
    #[serde(default = "default_scientific_threshold")]
    pub scientific_threshold: f64,
}

impl Default for UpgradeLimits {
    fn default() -> Self {
        UpgradeLimits {
            max_levels: default_max_levels(),
            max_cost: default_max_cost(),
            max_growth_rate: default_max_growth_rate(),
            preview_levels: default_preview_levels(),
            scientific_threshold: default_scientific_threshold(),
        }
    }
}

fn default_max_levels() -> u32 {
    999
}
fn default_max_cost() -> f64 {
    1_000_000_000.0
}
fn default_max_growth_rate() -> f64 {
    100.0
}
fn default_preview_levels() -> usize {
    10
}
fn default_scientific_threshold() -> f64 {
    1e12
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CopyLimits {
    /// How long the "copied" acknowledgment stays up
    #[serde(default = "default_acknowledge_ms")]
    pub acknowledge_ms: u64,
}

impl Default for CopyLimits {
    fn default() -> Self {
        CopyLimits {
            acknowledge_ms: default_acknowledge_ms(),
        }
    }
}

fn default_acknowledge_ms() -> u64 {
    1400
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_limits() {
        let limits = ToolLimits::default();
        assert_eq!(limits.upgrade.max_levels, 999);
        assert!((limits.upgrade.max_cost - 1e9).abs() < f64::EPSILON);
        assert_eq!(limits.upgrade.preview_levels, 10);
        assert_eq!(limits.copy.acknowledge_ms, 1400);
    }

    #[test]
    fn test_parse_partial_limits() {
        let toml = r#"
[upgrade]
max_levels = 50
scientific_threshold = 1e6
"#;

        let limits: ToolLimits = toml::from_str(toml).unwrap();
        assert_eq!(limits.upgrade.max_levels, 50);
        assert!((limits.upgrade.scientific_threshold - 1e6).abs() < f64::EPSILON);
        // Missing fields and sections keep their defaults
        assert!((limits.upgrade.max_growth_rate - 100.0).abs() < f64::EPSILON);
        assert_eq!(limits.copy.acknowledge_ms, 1400);
    }

    #[test]
    fn test_parse_empty_limits() {
        let limits: ToolLimits = toml::from_str("").unwrap();
        assert_eq!(limits, ToolLimits::default());
    }
}
