//! Unit catalog loading

use super::ConfigError;
use crate::catalog::CatalogEntry;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

/// Container for catalog entries
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    #[serde(rename = "units")]
    pub units: Vec<CatalogEntry>,
}

/// Load catalog entries from a TOML file
pub fn load_catalog(path: &Path) -> Result<Vec<CatalogEntry>, ConfigError> {
    let config: CatalogConfig = super::load_toml(path)?;
    validate(config.units)
}

/// Load catalog entries from a TOML string
pub fn parse_catalog(content: &str) -> Result<Vec<CatalogEntry>, ConfigError> {
    let config: CatalogConfig = super::parse_toml(content)?;
    validate(config.units)
}

/// Get the built-in unit showcase
pub fn default_catalog() -> Vec<CatalogEntry> {
    let toml = include_str!("../../config/catalog.toml");
    parse_catalog(toml).unwrap_or_else(|err| {
        tracing::error!(error = %err, "built-in catalog failed to load");
        Vec::new()
    })
}

fn validate(units: Vec<CatalogEntry>) -> Result<Vec<CatalogEntry>, ConfigError> {
    {
        let mut seen = HashSet::new();
        for unit in &units {
            if !seen.insert(unit.name.as_str()) {
                return Err(ConfigError::ValidationError(format!(
                    "duplicate unit name: {}",
                    unit.name
                )));
            }
        }
    }
    Ok(units)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Rarity, UnitRole};

    #[test]
    fn test_parse_catalog() {
        let toml = r#"
[[units]]
name = "Kenpachi"
role = "DPS"
rarity = "Mythic"
obtain_method = "Standard summons"
notes = "Top banner target."
tags = ["DPS", "Banner"]

[[units]]
name = "Sakiya"
role = "Crowd Control"
rarity = "Unknown"
obtain_method = "Virtual Shop"
notes = "Utility."
"#;

        let units = parse_catalog(toml).unwrap();
        assert_eq!(units.len(), 2);
        assert_eq!(units[0].rarity, Rarity::Mythic);
        assert_eq!(units[1].role, UnitRole::CrowdControl);
        assert!(units[1].tags.is_empty());
    }

    #[test]
    fn test_duplicate_names_rejected() {
        let toml = r#"
[[units]]
name = "Kirito"
role = "DPS"
rarity = "Mythic"
obtain_method = "a"
notes = "b"

[[units]]
name = "Kirito"
role = "Support"
rarity = "Rare"
obtain_method = "c"
notes = "d"
"#;

        let err = parse_catalog(toml).unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
    }

    #[test]
    fn test_unknown_role_rejected() {
        let toml = r#"
[[units]]
name = "X"
role = "Tank"
rarity = "Rare"
obtain_method = "a"
notes = "b"
"#;
        assert!(matches!(parse_catalog(toml), Err(ConfigError::ParseError(_))));
    }

    #[test]
    fn test_default_catalog_loads_all() {
        let units = default_catalog();
        assert_eq!(units.len(), 7, "Expected 7 units from config");
        let expected = ["Kenpachi", "Kirito", "Sasuke", "Jinwoo", "Ragna", "Lelouch"];
        for name in expected {
            assert!(units.iter().any(|u| u.name == name), "Missing unit: {}", name);
        }
    }
}
