//! Configuration loading from TOML files

mod catalog;
mod codes;
mod limits;

pub use catalog::{default_catalog, load_catalog, parse_catalog};
pub use codes::{default_codes, load_codes, parse_codes};
pub use limits::{CopyLimits, ToolLimits, UpgradeLimits};

use std::fs;
use std::path::Path;
use thiserror::Error;

/// Configuration loading error
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse TOML: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("Configuration validation error: {0}")]
    ValidationError(String),
}

/// Load a TOML file and deserialize it
pub fn load_toml<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, ConfigError> {
    let content = fs::read_to_string(path)?;
    let config: T = toml::from_str(&content)?;
    Ok(config)
}

/// Load a TOML string and deserialize it
pub fn parse_toml<T: serde::de::DeserializeOwned>(content: &str) -> Result<T, ConfigError> {
    let config: T = toml::from_str(content)?;
    Ok(config)
}

/// Load tool limits, validating the bounds
pub fn load_limits(path: &Path) -> Result<ToolLimits, ConfigError> {
    let limits: ToolLimits = load_toml(path)?;
    validate_limits(&limits)?;
    Ok(limits)
}

fn validate_limits(limits: &ToolLimits) -> Result<(), ConfigError> {
    let upgrade = &limits.upgrade;
    if !(upgrade.max_cost.is_finite() && upgrade.max_cost >= 0.0) {
        return Err(ConfigError::ValidationError(format!(
            "upgrade.max_cost must be a finite non-negative number, got {}",
            upgrade.max_cost
        )));
    }
    if !(upgrade.max_growth_rate.is_finite() && upgrade.max_growth_rate >= 1.0) {
        return Err(ConfigError::ValidationError(format!(
            "upgrade.max_growth_rate must be at least 1, got {}",
            upgrade.max_growth_rate
        )));
    }
    if upgrade.scientific_threshold.is_nan() || upgrade.scientific_threshold <= 0.0 {
        return Err(ConfigError::ValidationError(
            "upgrade.scientific_threshold must be positive".to_string(),
        ));
    }
    Ok(())
}
