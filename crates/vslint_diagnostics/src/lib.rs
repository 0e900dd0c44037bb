//! Diagnostic creation, collection, and rendering.
//!
//! Findings are structured [`Diagnostic`] values with a severity, a code
//! (`R1`-`R4` for the signal rules, `E`-codes for structural problems), a
//! primary source span, and optional labels/notes/help. The thread-safe
//! [`DiagnosticSink`] accumulates them during analysis, and
//! [`DiagnosticRenderer`] implementations format them for output.

#![warn(missing_docs)]

pub mod code;
pub mod diagnostic;
pub mod label;
pub mod renderer;
pub mod severity;
pub mod sink;

pub use code::{Category, DiagnosticCode};
pub use diagnostic::Diagnostic;
pub use label::{Label, LabelStyle};
pub use renderer::{DiagnosticRenderer, TerminalRenderer};
pub use severity::Severity;
pub use sink::DiagnosticSink;
