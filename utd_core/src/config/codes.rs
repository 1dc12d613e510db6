//! Redeem code board loading

use super::ConfigError;
use crate::codes::CodeBoard;
use std::path::Path;

/// Load the code board from a TOML file
pub fn load_codes(path: &Path) -> Result<CodeBoard, ConfigError> {
    super::load_toml(path)
}

/// Load the code board from a TOML string
pub fn parse_codes(content: &str) -> Result<CodeBoard, ConfigError> {
    super::parse_toml(content)
}

/// Get the built-in code board
pub fn default_codes() -> CodeBoard {
    let toml = include_str!("../../config/codes.toml");
    parse_codes(toml).unwrap_or_else(|err| {
        tracing::error!(error = %err, "built-in code board failed to load");
        CodeBoard::default()
    })
}
