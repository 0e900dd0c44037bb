//! Source file management and span tracking for diagnostics.
//!
//! This crate owns all loaded Verilog source text. [`FileId`] and [`Span`]
//! identify byte ranges within files, and [`SourceDb`] resolves them to the
//! 1-indexed line/column coordinates shown in lint output.

#![warn(missing_docs)]

pub mod source_db;
pub mod source_file;
pub mod span;

pub use source_db::{ResolvedSpan, SourceDb};
pub use source_file::SourceFile;
pub use span::{FileId, Span};
