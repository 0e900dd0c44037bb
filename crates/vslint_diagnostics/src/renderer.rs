//! Rendering backends for terminal output.

use crate::diagnostic::Diagnostic;
use crate::label::LabelStyle;
use vslint_source::SourceDb;

/// Trait for rendering diagnostics into formatted output strings.
pub trait DiagnosticRenderer {
    /// Renders a single diagnostic into a formatted string.
    fn render(&self, diag: &Diagnostic, source_db: &SourceDb) -> String;
}

/// Renders diagnostics in a rustc-style terminal format.
///
/// ```text
/// warning[R2]: signal 'r1' is declared as 'reg' but driven by 'assign'
///   --> counter.v:4:12
///    |
///  4 |     assign r1 = din;
///    |            ^^ driven here
///    |
///    = help: use a procedural block, or declare the signal as 'wire'
/// ```
pub struct TerminalRenderer {
    /// Whether to use ANSI color codes in output.
    pub color: bool,
}

impl TerminalRenderer {
    /// Creates a new terminal renderer.
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    fn severity_color(&self, diag: &Diagnostic) -> (&'static str, &'static str) {
        if !self.color {
            return ("", "");
        }
        let start = match diag.severity {
            crate::Severity::Error => "\x1b[1;31m",
            crate::Severity::Warning => "\x1b[1;33m",
            crate::Severity::Note => "\x1b[1;36m",
        };
        (start, "\x1b[0m")
    }
}

impl DiagnosticRenderer for TerminalRenderer {
    fn render(&self, diag: &Diagnostic, source_db: &SourceDb) -> String {
        let mut out = String::new();
        let (color_start, color_end) = self.severity_color(diag);

        out.push_str(&format!(
            "{color_start}{}[{}]{color_end}: {}\n",
            diag.severity, diag.code, diag.message
        ));

        if !diag.primary_span.is_dummy() {
            let resolved = source_db.resolve_span(diag.primary_span);
            out.push_str(&format!("  --> {resolved}\n"));

            let file = source_db.get_file(diag.primary_span.file);
            let (line, col) = file.line_col(diag.primary_span.start);
            let line_num = format!("{line}");
            let padding = " ".repeat(line_num.len());
            let line_content = file.line_text(diag.primary_span.start);

            out.push_str(&format!("{padding} |\n"));
            out.push_str(&format!("{line_num} | {line_content}\n"));

            let span_len = diag.primary_span.len().max(1) as usize;
            let carets = "^".repeat(span_len);
            let col_padding = " ".repeat((col as usize).saturating_sub(1));
            let primary_msg = diag
                .labels
                .iter()
                .find(|l| l.style == LabelStyle::Primary)
                .map(|l| format!(" {}", l.message))
                .unwrap_or_default();
            out.push_str(&format!("{padding} | {col_padding}{carets}{primary_msg}\n"));

            // Secondary labels on their own location lines
            for label in diag.labels.iter().filter(|l| l.style == LabelStyle::Secondary) {
                if !label.span.is_dummy() {
                    let loc = source_db.resolve_span(label.span);
                    out.push_str(&format!("{padding} - {loc}: {}\n", label.message));
                }
            }
        }

        for note in &diag.notes {
            out.push_str(&format!("   = note: {note}\n"));
        }
        for help in &diag.help {
            out.push_str(&format!("   = help: {help}\n"));
        }

        out
    }
}
