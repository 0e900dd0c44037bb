//! Configuration file loading and validation.

use crate::error::ConfigError;
use crate::types::{ToolConfig, KNOWN_RULES};
use std::path::Path;

/// Loads `vslint.toml` from the given directory.
///
/// A missing file is not an error; it yields the default configuration.
pub fn load_config(dir: &Path) -> Result<ToolConfig, ConfigError> {
    let config_path = dir.join("vslint.toml");
    if !config_path.is_file() {
        return Ok(ToolConfig::default());
    }
    let content = std::fs::read_to_string(&config_path)?;
    load_config_from_str(&content)
}

/// Parses and validates a configuration from a string.
pub fn load_config_from_str(content: &str) -> Result<ToolConfig, ConfigError> {
    let config: ToolConfig =
        toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))?;
    validate_config(&config)?;
    Ok(config)
}

/// Rejects rule names that no registered rule answers to, so a typo in the
/// config does not silently disable nothing.
fn validate_config(config: &ToolConfig) -> Result<(), ConfigError> {
    for rule in config.lint.deny.iter().chain(config.lint.allow.iter()) {
        if !KNOWN_RULES.contains(&rule.as_str()) {
            return Err(ConfigError::UnknownRule(rule.clone()));
        }
    }
    Ok(())
}
