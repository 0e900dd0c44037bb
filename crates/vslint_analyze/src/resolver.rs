//! Reference resolution against the completed symbol table.
//!
//! Every identifier occurrence in assignment statements and bare reads is
//! looked up against the full table, so resolution does not depend on where
//! in the module a signal was declared relative to its uses.

use crate::error::AnalyzeError;
use crate::symbol_table::{DriveOcc, SymbolTable};
use vslint_model::{ModuleModel, NameRef};

/// Resolves every identifier occurrence in the module against `table`.
///
/// Targets gain a drive occurrence (tagged continuous or procedural) plus a
/// reference-count increment; right-hand-side identifiers and bare reads
/// count as reads. Occurrences that match no declared signal are returned
/// in source-occurrence order; they are never inserted into the table.
///
/// An assignment without a target is a contract violation from the upstream
/// parser and fails the whole module.
pub fn resolve_references(
    table: &mut SymbolTable,
    module: &ModuleModel,
) -> Result<Vec<NameRef>, AnalyzeError> {
    let mut unresolved: Vec<NameRef> = Vec::new();

    for assign in &module.assigns {
        let target = assign
            .target
            .ok_or(AnalyzeError::MissingAssignTarget { span: assign.span })?;

        match table.get_mut(target.name) {
            Some(sym) => {
                sym.reference_count += 1;
                sym.drives.push(DriveOcc {
                    kind: assign.kind,
                    span: target.span,
                });
            }
            None => unresolved.push(target),
        }

        for read in &assign.rhs {
            resolve_read(table, *read, &mut unresolved);
        }
    }

    for read in &module.reads {
        resolve_read(table, *read, &mut unresolved);
    }

    // Assignments and bare reads arrive in separate lists; sorting by span
    // restores textual occurrence order for R4.
    unresolved.sort_by_key(|r| (r.span.file, r.span.start));
    Ok(unresolved)
}

fn resolve_read(table: &mut SymbolTable, read: NameRef, unresolved: &mut Vec<NameRef>) {
    match table.get_mut(read.name) {
        Some(sym) => sym.reference_count += 1,
        None => unresolved.push(read),
    }
}
