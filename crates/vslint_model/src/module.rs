//! The per-module model and the per-file collection of modules.

use crate::assign::AssignStmt;
use crate::decl::{NetDecl, PortDecl};
use crate::refs::NameRef;
use serde::{Deserialize, Serialize};
use vslint_common::Ident;
use vslint_source::Span;

/// Whether ports were declared ANSI-style (inline) or non-ANSI (separate).
///
/// The style is carried for reporting only. The symbol table builder
/// canonicalizes both forms into identical signal records; no rule logic
/// may branch on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PortStyle {
    /// `module m(input a, output reg b);`
    Ansi,
    /// `module m(a, b);` with directions declared in the body.
    NonAnsi,
    /// `module m;` or `module m();`
    Empty,
}

/// The parsed representation of one Verilog module.
///
/// All sequences preserve source order. The model is immutable once built;
/// usage metadata lives in the analyzer's symbol table, not here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModuleModel {
    /// The module name.
    pub name: Ident,
    /// Port declaration style.
    pub port_style: PortStyle,
    /// Port declarations, canonical for both styles.
    pub ports: Vec<PortDecl>,
    /// `wire`/`reg` declarations in the module body.
    pub decls: Vec<NetDecl>,
    /// Assignment statements, continuous and procedural.
    pub assigns: Vec<AssignStmt>,
    /// Bare identifier reads outside assignment RHS positions:
    /// sensitivity lists, `if`/`case` conditions, index expressions.
    pub reads: Vec<NameRef>,
    /// The span of the whole module.
    pub span: Span,
}

impl ModuleModel {
    /// Creates an empty module model with the given name and span.
    pub fn new(name: Ident, span: Span) -> Self {
        Self {
            name,
            port_style: PortStyle::Empty,
            ports: Vec::new(),
            decls: Vec::new(),
            assigns: Vec::new(),
            reads: Vec::new(),
            span,
        }
    }
}

/// All modules parsed from one source file, in source order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceModel {
    /// The modules in this file.
    pub modules: Vec<ModuleModel>,
    /// The span covering the entire file.
    pub span: Span,
}
