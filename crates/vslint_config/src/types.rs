//! Configuration types deserialized from `vslint.toml`.

use serde::Deserialize;

/// The rule names accepted in `allow`/`deny` lists.
///
/// Must stay in sync with the `name()` of each registered lint rule; the
/// lint crate cross-checks this in its tests.
pub const KNOWN_RULES: &[&str] = &[
    "unused-signal",
    "continuous-assign-to-reg",
    "procedural-assign-to-wire",
    "undefined-reference",
];

/// The top-level configuration parsed from `vslint.toml`.
///
/// Every section is optional; an absent file behaves like an empty one.
#[derive(Debug, Default, Deserialize)]
pub struct ToolConfig {
    /// Lint rule overrides.
    #[serde(default)]
    pub lint: LintConfig,
    /// Output preferences.
    #[serde(default)]
    pub output: OutputConfig,
}

/// Lint rule overrides: which rules to suppress or promote to errors.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct LintConfig {
    /// Rule names promoted to error severity.
    #[serde(default)]
    pub deny: Vec<String>,
    /// Rule names suppressed entirely.
    #[serde(default)]
    pub allow: Vec<String>,
}

/// Output preferences.
#[derive(Debug, Default, Deserialize)]
pub struct OutputConfig {
    /// Default report format (`"text"` or `"json"`); CLI flags override.
    #[serde(default)]
    pub format: Option<String>,
}
