//! R4: reference to an undeclared signal.

use vslint_analyze::ModuleAnalysis;
use vslint_common::Interner;
use vslint_diagnostics::{Category, Diagnostic, DiagnosticCode, DiagnosticSink, Label, Severity};

use crate::LintRule;

/// Reports every identifier occurrence that resolved to no declared signal,
/// in source-occurrence order. Each occurrence is its own finding, keyed by
/// the reference's location rather than any signal.
pub struct UndefinedReference;

impl LintRule for UndefinedReference {
    fn code(&self) -> DiagnosticCode {
        DiagnosticCode::new(Category::Rule, 4)
    }

    fn name(&self) -> &str {
        "undefined-reference"
    }

    fn default_severity(&self) -> Severity {
        Severity::Warning
    }

    fn check_module(&self, analysis: &ModuleAnalysis, interner: &Interner, sink: &DiagnosticSink) {
        for occurrence in &analysis.unresolved {
            let name = interner.resolve(occurrence.name);
            sink.emit(
                Diagnostic::warning(
                    self.code(),
                    format!("signal '{name}' is referenced but not declared"),
                    occurrence.span,
                )
                .with_label(Label::primary(occurrence.span, "not declared in this module"))
                .with_help("declare the signal as 'wire' or 'reg', or fix the spelling"),
            );
        }
    }
}
