//! The module model — the contract between the front end and the analyzer.
//!
//! A [`ModuleModel`] is the already-parsed representation of one Verilog
//! module: its port list, net/reg declarations, assignment statements tagged
//! by syntactic context, and bare identifier reads (sensitivity lists,
//! conditions). The analyzer consumes this model and never re-derives
//! anything from source text; any parser that produces it can front the
//! pipeline.
//!
//! Declaration and statement order is preserved everywhere, which is what
//! makes finding order deterministic downstream.

#![warn(missing_docs)]

pub mod assign;
pub mod decl;
pub mod module;
pub mod refs;

pub use assign::{AssignKind, AssignStmt, BlockKind};
pub use decl::{Direction, NetDecl, NetKind, PortDecl};
pub use module::{ModuleModel, PortStyle, SourceModel};
pub use refs::NameRef;
