//! Diagnostic codes identifying the rule or error class of a finding.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The category of a diagnostic code, determining its prefix letter.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum Category {
    /// Signal-usage rule findings, prefixed with `R` (`R1`-`R4`).
    Rule,
    /// Structural and parse errors, prefixed with `E`.
    Error,
}

impl Category {
    /// Returns the single-character prefix for this category.
    pub fn prefix(self) -> char {
        match self {
            Category::Rule => 'R',
            Category::Error => 'E',
        }
    }
}

/// A diagnostic code: a category prefix plus a numeric identifier.
///
/// Rule codes display without padding (`R1`, `R4`); error codes display
/// zero-padded to three digits (`E101`, `E201`).
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct DiagnosticCode {
    /// The category of this diagnostic.
    pub category: Category,
    /// The numeric identifier within the category.
    pub number: u16,
}

impl DiagnosticCode {
    /// Creates a new diagnostic code.
    pub const fn new(category: Category, number: u16) -> Self {
        Self { category, number }
    }
}

impl fmt::Display for DiagnosticCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.category {
            Category::Rule => write!(f, "R{}", self.number),
            Category::Error => write!(f, "E{:03}", self.number),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_prefixes() {
        assert_eq!(Category::Rule.prefix(), 'R');
        assert_eq!(Category::Error.prefix(), 'E');
    }

    #[test]
    fn rule_codes_unpadded() {
        assert_eq!(format!("{}", DiagnosticCode::new(Category::Rule, 1)), "R1");
        assert_eq!(format!("{}", DiagnosticCode::new(Category::Rule, 4)), "R4");
    }

    #[test]
    fn error_codes_padded() {
        assert_eq!(
            format!("{}", DiagnosticCode::new(Category::Error, 101)),
            "E101"
        );
        assert_eq!(format!("{}", DiagnosticCode::new(Category::Error, 7)), "E007");
    }

    #[test]
    fn serde_roundtrip() {
        let code = DiagnosticCode::new(Category::Rule, 2);
        let json = serde_json::to_string(&code).unwrap();
        let back: DiagnosticCode = serde_json::from_str(&json).unwrap();
        assert_eq!(code, back);
    }
}
