//! The four signal-usage rules and the engine that runs them.
//!
//! Rules evaluate a completed [`ModuleAnalysis`] — the populated symbol
//! table plus unresolved references — and emit findings to a sink:
//!
//! - **R1** unused-signal: declared but never read or written
//! - **R2** continuous-assign-to-reg: `assign` drives a `reg`
//! - **R3** procedural-assign-to-wire: an `always`/`initial` block drives a `wire`
//! - **R4** undefined-reference: a name is used but never declared
//!
//! Evaluation order is fixed (declaration conflicts, then R1-R4) so that
//! re-running an unchanged analysis yields byte-identical output.

#![warn(missing_docs)]

mod engine;
mod rules;

pub use engine::LintEngine;
pub use rules::register_builtin_rules;
pub use rules::{AssignToReg, AssignToWire, UndefinedReference, UnusedSignal};

use vslint_analyze::ModuleAnalysis;
use vslint_common::Interner;
use vslint_diagnostics::{DiagnosticCode, DiagnosticSink, Severity};

/// A single lint rule evaluated against one module's analysis.
///
/// Each rule has a stable code (`R1`-`R4`), a kebab-case name used in
/// `allow`/`deny` configuration, and a default severity that the engine
/// applies to every finding the rule emits. Rules must emit their
/// findings in declaration/occurrence order.
pub trait LintRule: Send + Sync {
    /// Returns the diagnostic code for this rule.
    fn code(&self) -> DiagnosticCode;

    /// Returns the short kebab-case name of this rule.
    fn name(&self) -> &str;

    /// Returns the severity the engine stamps on this rule's findings
    /// unless the rule is denied.
    fn default_severity(&self) -> Severity;

    /// Checks one module and emits findings to the sink.
    fn check_module(&self, analysis: &ModuleAnalysis, interner: &Interner, sink: &DiagnosticSink);
}
