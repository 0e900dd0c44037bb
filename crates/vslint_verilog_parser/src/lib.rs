//! Verilog front end for the signal linter.
//!
//! Lexes and parses the Verilog-2005 subset the signal rules care about:
//! module headers in both port styles, `wire`/`reg` and port declarations,
//! continuous assignments, and procedural blocks. Expressions are not
//! modeled; identifier occurrences inside them are harvested as reads.
//! The output is a [`SourceModel`](vslint_model::SourceModel) ready for
//! symbol table construction.

#![warn(missing_docs)]

pub mod lexer;
pub mod parser;
pub mod token;

pub use lexer::lex;
pub use parser::ModelParser;

use vslint_common::Interner;
use vslint_diagnostics::DiagnosticSink;
use vslint_model::SourceModel;
use vslint_source::{FileId, SourceDb};

/// Parses one file from the source database into a [`SourceModel`].
///
/// Lexer and parser errors go to `sink`; the returned model covers
/// whatever was recoverable, so callers can lint partially broken files.
pub fn parse_file(
    file: FileId,
    source_db: &SourceDb,
    interner: &Interner,
    sink: &DiagnosticSink,
) -> SourceModel {
    let source = &source_db.get_file(file).content;
    let tokens = lex(source, file, sink);
    let mut parser = ModelParser::new(tokens, source, file, interner, sink);
    parser.parse_source_file()
}
