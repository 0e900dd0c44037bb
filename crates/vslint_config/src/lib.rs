//! Loading and validation of `vslint.toml` configuration files.

#![warn(missing_docs)]

pub mod error;
pub mod loader;
pub mod types;

pub use error::ConfigError;
pub use loader::{load_config, load_config_from_str};
pub use types::{LintConfig, OutputConfig, ToolConfig, KNOWN_RULES};
