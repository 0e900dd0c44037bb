//! Contract-violation errors for malformed module models.

use vslint_source::Span;

/// A module model that violates the upstream parser contract.
///
/// These are not design diagnostics: they mean the producer of the model is
/// buggy. The affected module's analysis fails; other modules in the same
/// run are unaffected.
#[derive(Debug, thiserror::Error)]
pub enum AnalyzeError {
    /// An assignment statement arrived without a target identifier.
    #[error("malformed module model: assignment at {span:?} has no target")]
    MissingAssignTarget {
        /// The span of the offending assignment statement.
        span: Span,
    },
}
