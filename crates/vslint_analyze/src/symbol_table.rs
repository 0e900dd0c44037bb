//! Symbol table construction from ports and declarations.
//!
//! One walk over the module model produces one [`Symbol`] per declared name.
//! Port-implied declarations (both ANSI and non-ANSI styles) and body
//! `wire`/`reg` declarations merge into the same canonical record, so no
//! later pass can tell which style declared a signal.

use std::collections::HashMap;

use vslint_common::Ident;
use vslint_model::{AssignKind, ModuleModel, NetKind};
use vslint_source::Span;

/// The incrementally merged kind of a declared name.
///
/// A bare `input`/`output` contributes `Unresolved`; an explicit `wire` or
/// `reg` keyword contributes `Known`. Merging is applied clause by clause as
/// declarations are seen, with a defined conflict outcome instead of
/// last-write-wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KindSlot {
    /// No explicit net/variable keyword seen yet; resolves to wire.
    Unresolved,
    /// An explicit `wire` or `reg` keyword was seen.
    Known(NetKind),
}

impl KindSlot {
    /// Merges a later declaration clause into this slot.
    ///
    /// `Unresolved` yields to any explicit keyword. Two explicit keywords
    /// must agree; a clash is returned as `Err` and the caller keeps the
    /// first declaration.
    pub fn merge(self, other: KindSlot) -> Result<KindSlot, (NetKind, NetKind)> {
        match (self, other) {
            (KindSlot::Unresolved, o) => Ok(o),
            (s, KindSlot::Unresolved) => Ok(s),
            (KindSlot::Known(a), KindSlot::Known(b)) if a == b => Ok(KindSlot::Known(a)),
            (KindSlot::Known(a), KindSlot::Known(b)) => Err((a, b)),
        }
    }

    /// Resolves the slot to a concrete kind; `Unresolved` defaults to wire.
    pub fn resolve(self) -> NetKind {
        match self {
            KindSlot::Unresolved => NetKind::Wire,
            KindSlot::Known(kind) => kind,
        }
    }
}

/// One occurrence of a signal as an assignment target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DriveOcc {
    /// The syntactic context of the assignment.
    pub kind: AssignKind,
    /// The span of the target identifier.
    pub span: Span,
}

/// One declared signal with its usage metadata.
///
/// Built with `reference_count == 0` and no drives; the reference resolver
/// fills both in a single pass.
#[derive(Debug, Clone)]
pub struct Symbol {
    /// The declared name.
    pub name: Ident,
    /// The merged kind slot (resolved via [`KindSlot::resolve`]).
    pub kind: KindSlot,
    /// The span of the first declaration of this name.
    pub decl_span: Span,
    /// Whether the name appears in the module's port list. Informational
    /// only; port status exempts a signal from no rule.
    pub is_port: bool,
    /// The raw width token group of the first declaration, if any.
    pub width: Option<String>,
    /// Reads plus writes, excluding the declaration itself.
    pub reference_count: u32,
    /// Every occurrence of this signal as an assignment target.
    pub drives: Vec<DriveOcc>,
}

impl Symbol {
    /// The resolved storage class of this signal.
    pub fn net_kind(&self) -> NetKind {
        self.kind.resolve()
    }

    /// Returns `true` if this signal is ever the target of a continuous
    /// assignment.
    pub fn has_continuous_target(&self) -> bool {
        self.drives
            .iter()
            .any(|d| d.kind == AssignKind::Continuous)
    }

    /// Returns `true` if this signal is ever the target of a procedural
    /// assignment.
    pub fn has_procedural_target(&self) -> bool {
        self.drives
            .iter()
            .any(|d| matches!(d.kind, AssignKind::Procedural(_)))
    }
}

/// Why two declarations of the same name could not be merged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConflictReason {
    /// Explicit `wire` vs. explicit `reg`.
    KindClash {
        /// The kind of the first declaration.
        first: NetKind,
        /// The kind of the conflicting re-declaration.
        second: NetKind,
    },
    /// Same name re-declared with a different width token group.
    WidthClash {
        /// The width of the first declaration.
        first: String,
        /// The width of the conflicting re-declaration.
        second: String,
    },
}

/// An unmergeable re-declaration. Analysis proceeds with the first
/// declaration; the conflict surfaces as a structural diagnostic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeclConflict {
    /// The re-declared name.
    pub name: Ident,
    /// The span of the first declaration (the one kept).
    pub first_span: Span,
    /// The span of the conflicting re-declaration.
    pub second_span: Span,
    /// Why the declarations could not merge.
    pub reason: ConflictReason,
}

/// The per-module symbol table: symbols in declaration order plus the
/// conflicts found while building it.
#[derive(Debug)]
pub struct SymbolTable {
    symbols: Vec<Symbol>,
    index: HashMap<Ident, usize>,
    /// Unmergeable re-declarations, in occurrence order.
    pub conflicts: Vec<DeclConflict>,
}

impl SymbolTable {
    fn new() -> Self {
        Self {
            symbols: Vec::new(),
            index: HashMap::new(),
            conflicts: Vec::new(),
        }
    }

    /// Iterates symbols in declaration order.
    pub fn symbols(&self) -> impl Iterator<Item = &Symbol> {
        self.symbols.iter()
    }

    /// Looks up a symbol by name.
    pub fn get(&self, name: Ident) -> Option<&Symbol> {
        self.index.get(&name).map(|&i| &self.symbols[i])
    }

    /// Looks up a symbol by name for mutation.
    pub fn get_mut(&mut self, name: Ident) -> Option<&mut Symbol> {
        let idx = *self.index.get(&name)?;
        Some(&mut self.symbols[idx])
    }

    /// Returns the number of declared signals.
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Returns `true` if no signals are declared.
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Inserts a declaration clause, merging with any existing entry.
    fn declare(
        &mut self,
        name: Ident,
        kind: KindSlot,
        width: Option<&str>,
        span: Span,
        is_port: bool,
    ) {
        if let Some(&idx) = self.index.get(&name) {
            let sym = &mut self.symbols[idx];
            match sym.kind.merge(kind) {
                Ok(merged) => sym.kind = merged,
                Err((first, second)) => {
                    self.conflicts.push(DeclConflict {
                        name,
                        first_span: sym.decl_span,
                        second_span: span,
                        reason: ConflictReason::KindClash { first, second },
                    });
                    return;
                }
            }
            sym.is_port |= is_port;
            match (&sym.width, width) {
                (Some(a), Some(b)) if normalize_width(a) != normalize_width(b) => {
                    self.conflicts.push(DeclConflict {
                        name,
                        first_span: sym.decl_span,
                        second_span: span,
                        reason: ConflictReason::WidthClash {
                            first: a.clone(),
                            second: b.to_string(),
                        },
                    });
                }
                (None, Some(b)) => sym.width = Some(b.to_string()),
                _ => {}
            }
        } else {
            self.index.insert(name, self.symbols.len());
            self.symbols.push(Symbol {
                name,
                kind,
                decl_span: span,
                is_port,
                width: width.map(str::to_string),
                reference_count: 0,
                drives: Vec::new(),
            });
        }
    }
}

/// Strips whitespace so `[7:0]` and `[ 7 : 0 ]` compare equal.
fn normalize_width(width: &str) -> String {
    width.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Builds the symbol table for one module.
///
/// Ports are walked first in declaration order, then body declarations, so
/// `declaration_site` always points at the textually first declaration of a
/// name. All usage metadata is left empty for the reference resolver.
pub fn build_symbol_table(module: &ModuleModel) -> SymbolTable {
    let mut table = SymbolTable::new();

    for port in &module.ports {
        let slot = match port.net {
            Some(kind) => KindSlot::Known(kind),
            None => KindSlot::Unresolved,
        };
        for name in &port.names {
            table.declare(name.name, slot, port.width.as_deref(), name.span, true);
        }
    }

    for decl in &module.decls {
        for name in &decl.names {
            table.declare(
                name.name,
                KindSlot::Known(decl.kind),
                decl.width.as_deref(),
                name.span,
                false,
            );
        }
    }

    table
}
