//! R3: procedural assignment to a `wire`-typed signal.

use vslint_analyze::ModuleAnalysis;
use vslint_common::Interner;
use vslint_diagnostics::{Category, Diagnostic, DiagnosticCode, DiagnosticSink, Label, Severity};
use vslint_model::{AssignKind, NetKind};

use crate::LintRule;

/// Detects net-class (`wire`) signals assigned inside an `always` or
/// `initial` block. One finding per offending assignment; blocking and
/// non-blocking operators are treated identically.
pub struct AssignToWire;

impl LintRule for AssignToWire {
    fn code(&self) -> DiagnosticCode {
        DiagnosticCode::new(Category::Rule, 3)
    }

    fn name(&self) -> &str {
        "procedural-assign-to-wire"
    }

    fn default_severity(&self) -> Severity {
        Severity::Warning
    }

    fn check_module(&self, analysis: &ModuleAnalysis, interner: &Interner, sink: &DiagnosticSink) {
        for sym in analysis.table.symbols() {
            if sym.net_kind() != NetKind::Wire {
                continue;
            }
            for drive in &sym.drives {
                let AssignKind::Procedural(block) = drive.kind else {
                    continue;
                };
                let name = interner.resolve(sym.name);
                sink.emit(
                    Diagnostic::warning(
                        self.code(),
                        format!("signal '{name}' is declared as 'wire' but assigned in '{block}' block"),
                        drive.span,
                    )
                    .with_label(Label::primary(drive.span, "assigned here"))
                    .with_label(Label::secondary(sym.decl_span, "declared as 'wire' here"))
                    .with_help("declare the signal as 'reg', or drive it with 'assign'"),
                );
            }
        }
    }
}
