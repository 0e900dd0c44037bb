//! Port and net/reg declaration statements.

use crate::refs::NameRef;
use serde::{Deserialize, Serialize};
use std::fmt;
use vslint_source::Span;

/// Port direction on a module boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// `input`
    Input,
    /// `output`
    Output,
    /// `inout`
    Inout,
}

/// The two declaration storage classes relevant to the signal rules.
///
/// A net (`wire`) must be driven continuously; a variable (`reg`) is storage
/// driven by procedural logic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NetKind {
    /// `wire` — a driven electrical connection.
    Wire,
    /// `reg` — a storage element.
    Reg,
}

impl fmt::Display for NetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NetKind::Wire => write!(f, "wire"),
            NetKind::Reg => write!(f, "reg"),
        }
    }
}

/// A port declaration, ANSI-style (in the header) or standalone (in the body).
///
/// In the non-ANSI style the header lists bare names and the body carries
/// `input`/`output` declarations; both forms produce the same `PortDecl`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortDecl {
    /// Port direction.
    pub direction: Direction,
    /// Optional explicit net/variable keyword (`wire` or `reg`).
    ///
    /// `None` means the direction was declared bare; the builder defaults
    /// the kind to wire unless a later `reg` declaration merges in.
    pub net: Option<NetKind>,
    /// Optional raw width token group (e.g. `[7:0]`), kept verbatim.
    ///
    /// Widths are never evaluated; they are compared textually only to
    /// detect conflicting re-declarations.
    pub width: Option<String>,
    /// Declared names (one declaration may introduce several).
    pub names: Vec<NameRef>,
    /// The span of the whole declaration.
    pub span: Span,
}

/// A `wire`/`reg` declaration statement in the module body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetDecl {
    /// The declared storage class.
    pub kind: NetKind,
    /// Optional raw width token group, kept verbatim.
    pub width: Option<String>,
    /// Declared names.
    pub names: Vec<NameRef>,
    /// The span of the whole declaration.
    pub span: Span,
}
