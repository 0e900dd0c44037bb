//! Labels that annotate source spans within a diagnostic.

use serde::{Deserialize, Serialize};
use vslint_source::Span;

/// The visual style of a diagnostic label.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum LabelStyle {
    /// The primary label at the main finding location (`^^^^`).
    Primary,
    /// A secondary label giving context (`----`), e.g. a declaration site.
    Secondary,
}

/// An annotated source span within a diagnostic.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Label {
    /// The source span this label annotates.
    pub span: Span,
    /// The message shown next to the underline.
    pub message: String,
    /// Whether this is a primary or secondary label.
    pub style: LabelStyle,
}

impl Label {
    /// Creates a primary label (the main finding location).
    pub fn primary(span: Span, message: impl Into<String>) -> Self {
        Self {
            span,
            message: message.into(),
            style: LabelStyle::Primary,
        }
    }

    /// Creates a secondary label (additional context).
    pub fn secondary(span: Span, message: impl Into<String>) -> Self {
        Self {
            span,
            message: message.into(),
            style: LabelStyle::Secondary,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primary_label() {
        let label = Label::primary(Span::DUMMY, "driven here");
        assert_eq!(label.style, LabelStyle::Primary);
        assert_eq!(label.message, "driven here");
    }

    #[test]
    fn secondary_label() {
        let label = Label::secondary(Span::DUMMY, "declared as 'wire' here");
        assert_eq!(label.style, LabelStyle::Secondary);
    }
}
