//! Identifier occurrences with their source locations.

use serde::{Deserialize, Serialize};
use vslint_common::Ident;
use vslint_source::Span;

/// One occurrence of an identifier in source text.
///
/// Used both for declared names (where `span` is the declaration site) and
/// for references (where `span` is the occurrence itself). Unresolved
/// references are keyed by this span, not by any signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameRef {
    /// The interned identifier.
    pub name: Ident,
    /// Where this occurrence appears in source.
    pub span: Span,
}

impl NameRef {
    /// Creates a new name reference.
    pub fn new(name: Ident, span: Span) -> Self {
        Self { name, span }
    }
}
