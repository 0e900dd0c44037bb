//! Lint engine: rule registration, configuration, and fixed-order execution.

use std::collections::HashSet;

use vslint_analyze::{ConflictReason, ModuleAnalysis};
use vslint_common::Interner;
use vslint_config::LintConfig;
use vslint_diagnostics::{
    Category, Diagnostic, DiagnosticCode, DiagnosticSink, Label, Severity,
};

use crate::rules::register_builtin_rules;
use crate::LintRule;

/// Conflicting declarations of the same name within one module.
pub(crate) const E201: DiagnosticCode = DiagnosticCode::new(Category::Error, 201);

/// Runs the registered rules against each module's analysis.
///
/// Rules execute in registration order (R1, R2, R3, R4 for the builtins),
/// each emitting findings in declaration/occurrence order; together with
/// the append-only sink this makes the output ordering a contract.
/// Declaration conflicts are structural errors, emitted before any rule and
/// not subject to `allow`/`deny`.
pub struct LintEngine {
    rules: Vec<Box<dyn LintRule>>,
    /// Rule names promoted to error severity.
    denied: HashSet<String>,
    /// Rule names suppressed entirely.
    allowed: HashSet<String>,
}

impl LintEngine {
    /// Creates an engine with all builtin rules, configured by `config`.
    pub fn new(config: &LintConfig) -> Self {
        let mut engine = Self {
            rules: Vec::new(),
            denied: config.deny.iter().cloned().collect(),
            allowed: config.allow.iter().cloned().collect(),
        };
        register_builtin_rules(&mut engine);
        engine
    }

    /// Creates an engine with default configuration (no overrides).
    pub fn with_defaults() -> Self {
        Self::new(&LintConfig::default())
    }

    /// Registers a lint rule. Registration order is evaluation order.
    pub fn register(&mut self, rule: Box<dyn LintRule>) {
        self.rules.push(rule);
    }

    /// Returns the number of registered rules.
    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    /// Returns the names of all registered rules, in evaluation order.
    pub fn rule_names(&self) -> Vec<&str> {
        self.rules.iter().map(|r| r.name()).collect()
    }

    /// Runs all enabled rules on one module's analysis.
    pub fn run(&self, analysis: &ModuleAnalysis, interner: &Interner, sink: &DiagnosticSink) {
        self.emit_conflicts(analysis, interner, sink);

        for rule in &self.rules {
            if self.allowed.contains(rule.name()) {
                continue;
            }

            // Capture into a temporary sink so the engine can stamp the
            // severity without the rule knowing about configuration.
            let temp_sink = DiagnosticSink::new();
            rule.check_module(analysis, interner, &temp_sink);

            let is_denied = self.denied.contains(rule.name());
            for mut diag in temp_sink.take_all() {
                diag.severity = if is_denied {
                    Severity::Error
                } else {
                    rule.default_severity()
                };
                sink.emit(diag);
            }
        }
    }

    fn emit_conflicts(
        &self,
        analysis: &ModuleAnalysis,
        interner: &Interner,
        sink: &DiagnosticSink,
    ) {
        for conflict in &analysis.table.conflicts {
            let name = interner.resolve(conflict.name);
            let message = match &conflict.reason {
                ConflictReason::KindClash { first, second } => format!(
                    "signal '{name}' is declared as '{first}' but redeclared as '{second}'"
                ),
                ConflictReason::WidthClash { first, second } => format!(
                    "signal '{name}' is declared with width {first} but redeclared with width {second}"
                ),
            };
            sink.emit(
                Diagnostic::error(E201, message, conflict.second_span)
                    .with_label(Label::primary(conflict.second_span, "conflicting declaration"))
                    .with_label(Label::secondary(conflict.first_span, "first declared here"))
                    .with_note("analysis continues using the first declaration"),
            );
        }
    }
}
