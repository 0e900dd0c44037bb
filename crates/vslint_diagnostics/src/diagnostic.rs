//! Structured findings with severity, code, labels, and notes.

use crate::code::DiagnosticCode;
use crate::label::Label;
use crate::severity::Severity;
use serde::{Deserialize, Serialize};
use vslint_source::Span;

/// A single finding reported to the user.
///
/// Carries a severity, the rule or error code that produced it, a primary
/// source span, and optional labels, notes, and help text. Findings are
/// append-only: once emitted into a sink they are never mutated except for
/// severity promotion by the lint engine.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Diagnostic {
    /// The severity level of this diagnostic.
    pub severity: Severity,
    /// The code identifying the rule or error class.
    pub code: DiagnosticCode,
    /// The main diagnostic message.
    pub message: String,
    /// The primary source span where the issue was detected.
    pub primary_span: Span,
    /// Additional annotated source spans providing context.
    pub labels: Vec<Label>,
    /// Explanatory footnotes (`note: ...`).
    pub notes: Vec<String>,
    /// Actionable suggestions (`help: ...`).
    pub help: Vec<String>,
}

impl Diagnostic {
    /// Creates a new error diagnostic.
    pub fn error(code: DiagnosticCode, message: impl Into<String>, span: Span) -> Self {
        Self::with_severity(Severity::Error, code, message, span)
    }

    /// Creates a new warning diagnostic.
    pub fn warning(code: DiagnosticCode, message: impl Into<String>, span: Span) -> Self {
        Self::with_severity(Severity::Warning, code, message, span)
    }

    fn with_severity(
        severity: Severity,
        code: DiagnosticCode,
        message: impl Into<String>,
        span: Span,
    ) -> Self {
        Self {
            severity,
            code,
            message: message.into(),
            primary_span: span,
            labels: Vec::new(),
            notes: Vec::new(),
            help: Vec::new(),
        }
    }

    /// Adds a label to this diagnostic.
    pub fn with_label(mut self, label: Label) -> Self {
        self.labels.push(label);
        self
    }

    /// Adds a note to this diagnostic.
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    /// Adds a help message to this diagnostic.
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help.push(help.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::code::Category;

    #[test]
    fn create_warning() {
        let code = DiagnosticCode::new(Category::Rule, 1);
        let diag = Diagnostic::warning(code, "unused signal 'tmp'", Span::DUMMY);
        assert_eq!(diag.severity, Severity::Warning);
        assert_eq!(diag.message, "unused signal 'tmp'");
        assert_eq!(format!("{}", diag.code), "R1");
    }

    #[test]
    fn create_error() {
        let code = DiagnosticCode::new(Category::Error, 201);
        let diag = Diagnostic::error(code, "conflicting declaration", Span::DUMMY);
        assert_eq!(diag.severity, Severity::Error);
        assert_eq!(format!("{}", diag.code), "E201");
    }

    #[test]
    fn builder_methods() {
        let code = DiagnosticCode::new(Category::Rule, 3);
        let diag = Diagnostic::warning(code, "procedural assignment to wire", Span::DUMMY)
            .with_label(Label::primary(Span::DUMMY, "assigned here"))
            .with_label(Label::secondary(Span::DUMMY, "declared as 'wire' here"))
            .with_note("wires must be driven by 'assign'")
            .with_help("declare the signal as 'reg'");
        assert_eq!(diag.labels.len(), 2);
        assert_eq!(diag.notes.len(), 1);
        assert_eq!(diag.help.len(), 1);
    }

    #[test]
    fn serde_roundtrip() {
        let code = DiagnosticCode::new(Category::Rule, 4);
        let diag = Diagnostic::warning(code, "undefined reference", Span::DUMMY);
        let json = serde_json::to_string(&diag).unwrap();
        let back: Diagnostic = serde_json::from_str(&json).unwrap();
        assert_eq!(back.message, "undefined reference");
        assert_eq!(back.code, code);
    }
}
