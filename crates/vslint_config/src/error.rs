//! Error types for configuration loading and validation.

/// Errors that can occur when loading or validating a `vslint.toml` file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// An I/O error occurred while reading the configuration file.
    #[error("failed to read configuration: {0}")]
    Io(#[from] std::io::Error),

    /// The TOML content could not be parsed.
    #[error("failed to parse configuration: {0}")]
    Parse(String),

    /// A rule name in `allow`/`deny` is not a known rule.
    #[error("unknown lint rule '{0}'")]
    UnknownRule(String),
}
