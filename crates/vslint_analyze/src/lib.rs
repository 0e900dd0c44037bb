//! Semantic analysis of module models.
//!
//! Two passes run over each [`ModuleModel`](vslint_model::ModuleModel):
//!
//! 1. The **symbol table builder** ([`symbol_table`]) walks ports and
//!    declarations once, canonicalizing ANSI and non-ANSI port styles into
//!    one [`Symbol`] record per declared name and recording unmergeable
//!    re-declarations as conflicts.
//! 2. The **reference resolver** ([`resolver`]) walks every assignment
//!    statement and bare read, incrementing reference counts, tagging
//!    assignment targets with their syntactic context, and collecting
//!    occurrences that resolve to no declared signal.
//!
//! The result is a [`ModuleAnalysis`] the rule engine evaluates. Analysis is
//! per-module and owns all of its state; modules never share tables.

#![warn(missing_docs)]

pub mod error;
pub mod resolver;
pub mod symbol_table;

pub use error::AnalyzeError;
pub use resolver::resolve_references;
pub use symbol_table::{
    build_symbol_table, ConflictReason, DeclConflict, DriveOcc, KindSlot, Symbol, SymbolTable,
};

use vslint_common::Ident;
use vslint_model::{ModuleModel, NameRef};

/// The completed analysis of one module: the populated symbol table plus
/// every reference that failed to resolve, in occurrence order.
#[derive(Debug)]
pub struct ModuleAnalysis {
    /// The analyzed module's name.
    pub module_name: Ident,
    /// Symbols in declaration order, with usage metadata filled in.
    pub table: SymbolTable,
    /// Identifier occurrences that resolve to no declared signal.
    pub unresolved: Vec<NameRef>,
}

/// Analyzes one module: builds its symbol table, then resolves every
/// identifier occurrence against it.
///
/// Rule-level problems (unused signals, drive mismatches, unresolved
/// references, declaration conflicts) are data in the returned analysis,
/// not errors. `Err` means the module model itself violates the upstream
/// contract; the failure is confined to this module.
pub fn analyze_module(module: &ModuleModel) -> Result<ModuleAnalysis, AnalyzeError> {
    let mut table = build_symbol_table(module);
    let unresolved = resolve_references(&mut table, module)?;
    Ok(ModuleAnalysis {
        module_name: module.name,
        table,
        unresolved,
    })
}
