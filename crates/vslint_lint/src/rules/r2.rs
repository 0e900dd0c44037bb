//! R2: continuous assignment to a `reg`-typed signal.

use vslint_analyze::ModuleAnalysis;
use vslint_common::Interner;
use vslint_diagnostics::{Category, Diagnostic, DiagnosticCode, DiagnosticSink, Label, Severity};
use vslint_model::{AssignKind, NetKind};

use crate::LintRule;

/// Detects storage-class (`reg`) signals driven by a continuous `assign`
/// statement. One finding per offending assignment, in occurrence order
/// within each signal, signals visited in declaration order.
pub struct AssignToReg;

impl LintRule for AssignToReg {
    fn code(&self) -> DiagnosticCode {
        DiagnosticCode::new(Category::Rule, 2)
    }

    fn name(&self) -> &str {
        "continuous-assign-to-reg"
    }

    fn default_severity(&self) -> Severity {
        Severity::Warning
    }

    fn check_module(&self, analysis: &ModuleAnalysis, interner: &Interner, sink: &DiagnosticSink) {
        for sym in analysis.table.symbols() {
            if sym.net_kind() != NetKind::Reg {
                continue;
            }
            for drive in sym.drives.iter().filter(|d| d.kind == AssignKind::Continuous) {
                let name = interner.resolve(sym.name);
                sink.emit(
                    Diagnostic::warning(
                        self.code(),
                        format!("signal '{name}' is declared as 'reg' but driven by 'assign' statement"),
                        drive.span,
                    )
                    .with_label(Label::primary(drive.span, "driven here"))
                    .with_label(Label::secondary(sym.decl_span, "declared as 'reg' here"))
                    .with_help("drive the signal from a procedural block, or declare it as 'wire'"),
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vslint_analyze::analyze_module;
    use vslint_model::{AssignStmt, BlockKind, ModuleModel, NameRef, NetDecl};
    use vslint_source::{FileId, Span};

    fn sp(start: u32) -> Span {
        Span::new(FileId::from_raw(0), start, start + 1)
    }

    fn check(m: &ModuleModel, interner: &Interner) -> Vec<Diagnostic> {
        let analysis = analyze_module(m).unwrap();
        let sink = DiagnosticSink::new();
        AssignToReg.check_module(&analysis, interner, &sink);
        sink.take_all()
    }

    fn reg_module(interner: &Interner) -> (ModuleModel, vslint_common::Ident) {
        let r1 = interner.intern("r1");
        let mut m = ModuleModel::new(interner.intern("m"), Span::DUMMY);
        m.decls.push(NetDecl {
            kind: NetKind::Reg,
            width: None,
            names: vec![NameRef::new(r1, sp(10))],
            span: sp(10),
        });
        (m, r1)
    }

    #[test]
    fn continuous_drive_of_reg_fires() {
        let interner = Interner::new();
        let (mut m, r1) = reg_module(&interner);
        m.assigns.push(AssignStmt {
            kind: AssignKind::Continuous,
            target: Some(NameRef::new(r1, sp(20))),
            rhs: Vec::new(),
            span: sp(20),
        });
        let diags = check(&m, &interner);
        assert_eq!(diags.len(), 1);
        assert!(diags[0].message.contains("'r1'"));
        assert_eq!(diags[0].primary_span, sp(20));
    }

    #[test]
    fn procedural_drive_of_reg_is_fine() {
        let interner = Interner::new();
        let (mut m, r1) = reg_module(&interner);
        m.assigns.push(AssignStmt {
            kind: AssignKind::Procedural(BlockKind::Always),
            target: Some(NameRef::new(r1, sp(20))),
            rhs: Vec::new(),
            span: sp(20),
        });
        assert!(check(&m, &interner).is_empty());
    }

    #[test]
    fn one_finding_per_offending_assign() {
        let interner = Interner::new();
        let (mut m, r1) = reg_module(&interner);
        for start in [20, 30] {
            m.assigns.push(AssignStmt {
                kind: AssignKind::Continuous,
                target: Some(NameRef::new(r1, sp(start))),
                rhs: Vec::new(),
                span: sp(start),
            });
        }
        let diags = check(&m, &interner);
        assert_eq!(diags.len(), 2);
        assert_eq!(diags[0].primary_span, sp(20));
        assert_eq!(diags[1].primary_span, sp(30));
    }

    #[test]
    fn wire_target_ignored_by_this_rule() {
        let interner = Interner::new();
        let w = interner.intern("w");
        let mut m = ModuleModel::new(interner.intern("m"), Span::DUMMY);
        m.decls.push(NetDecl {
            kind: NetKind::Wire,
            width: None,
            names: vec![NameRef::new(w, sp(10))],
            span: sp(10),
        });
        m.assigns.push(AssignStmt {
            kind: AssignKind::Continuous,
            target: Some(NameRef::new(w, sp(20))),
            rhs: Vec::new(),
            span: sp(20),
        });
        assert!(check(&m, &interner).is_empty());
    }
}
