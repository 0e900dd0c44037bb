//! Assignment statements tagged by their syntactic context.

use crate::refs::NameRef;
use serde::{Deserialize, Serialize};
use std::fmt;
use vslint_source::Span;

/// The kind of procedural block an assignment occurs in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BlockKind {
    /// An `always` block.
    Always,
    /// An `initial` block.
    Initial,
}

impl fmt::Display for BlockKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BlockKind::Always => write!(f, "always"),
            BlockKind::Initial => write!(f, "initial"),
        }
    }
}

/// The syntactic context of an assignment statement.
///
/// Blocking (`=`) and non-blocking (`<=`) procedural assignments are not
/// distinguished; both are `Procedural` for the signal rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AssignKind {
    /// A continuous `assign lhs = rhs;` statement.
    Continuous,
    /// An assignment inside an `always` or `initial` block.
    Procedural(BlockKind),
}

/// One assignment statement in a module.
///
/// `target` is optional at the model level: a well-formed parser always
/// supplies it, and a `None` target is the canonical malformed-model case
/// that fails the module's analysis.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssignStmt {
    /// The syntactic context of this assignment.
    pub kind: AssignKind,
    /// The left-hand-side identifier, if the upstream parser supplied one.
    pub target: Option<NameRef>,
    /// Identifiers read on the right-hand side, in occurrence order.
    pub rhs: Vec<NameRef>,
    /// The span of the whole statement.
    pub span: Span,
}
