//! R1: unused signal — declared but never read or written.

use vslint_analyze::ModuleAnalysis;
use vslint_common::Interner;
use vslint_diagnostics::{Category, Diagnostic, DiagnosticCode, DiagnosticSink, Label, Severity};

use crate::LintRule;

/// Detects signals whose reference count stayed zero through resolution:
/// no read, no write, anywhere in the module. The declaration itself does
/// not count as a reference, and port status exempts nothing.
pub struct UnusedSignal;

impl LintRule for UnusedSignal {
    fn code(&self) -> DiagnosticCode {
        DiagnosticCode::new(Category::Rule, 1)
    }

    fn name(&self) -> &str {
        "unused-signal"
    }

    fn default_severity(&self) -> Severity {
        Severity::Warning
    }

    fn check_module(&self, analysis: &ModuleAnalysis, interner: &Interner, sink: &DiagnosticSink) {
        for sym in analysis.table.symbols() {
            if sym.reference_count == 0 {
                let name = interner.resolve(sym.name);
                sink.emit(
                    Diagnostic::warning(
                        self.code(),
                        format!("signal '{name}' is declared but never referenced"),
                        sym.decl_span,
                    )
                    .with_label(Label::primary(sym.decl_span, "never read or written"))
                    .with_help("remove the declaration if the signal is not needed"),
                );
            }
        }
    }
}
