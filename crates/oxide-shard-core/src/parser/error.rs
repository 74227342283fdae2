//! Parser error types.

use crate::lexer::{Span, TokenKind};

/// A fatal parse failure.
///
/// Every variant carries the span of the offending input so callers can
/// point at the exact location when they reject the statement. There is no
/// partial statement once one of these is returned.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// A required token was absent.
    #[error("unexpected {found} at {span}: expected {expected}")]
    Unexpected {
        /// What the grammar required at this point.
        expected: String,
        /// The token actually found.
        found: TokenKind,
        /// Location of the found token.
        span: Span,
    },

    /// A construct the router refuses to handle.
    #[error("unsupported {construct} at {span}")]
    Unsupported {
        /// Description of the construct.
        construct: String,
        /// Location of the construct.
        span: Span,
    },

    /// The left side of an assignment does not name a column.
    #[error("expected a column reference at {span}, found {found}")]
    InvalidColumn {
        /// Source text of the expression found instead.
        found: String,
        /// Location of the expression.
        span: Span,
    },

    /// An order item has neither a name nor a qualified name.
    #[error("order item at {span} has no column name")]
    MissingOrderItemName {
        /// Location of the order item.
        span: Span,
    },

    /// The lexer could not scan the input.
    #[error("invalid input at {span}: {message}")]
    Lexical {
        /// The lexer's message.
        message: String,
        /// Location of the invalid input.
        span: Span,
    },
}

impl ParseError {
    /// Creates an "unexpected token" error, turning lexer error tokens into
    /// [`ParseError::Lexical`].
    #[must_use]
    pub fn unexpected(expected: impl Into<String>, found: TokenKind, span: Span) -> Self {
        match found {
            TokenKind::Error(message) => Self::Lexical { message, span },
            found => Self::Unexpected {
                expected: expected.into(),
                found,
                span,
            },
        }
    }

    /// Creates an "unsupported construct" error.
    #[must_use]
    pub fn unsupported(construct: impl Into<String>, span: Span) -> Self {
        Self::Unsupported {
            construct: construct.into(),
            span,
        }
    }

    /// Returns the location of the error in the source.
    #[must_use]
    pub const fn span(&self) -> Span {
        match self {
            Self::Unexpected { span, .. }
            | Self::Unsupported { span, .. }
            | Self::InvalidColumn { span, .. }
            | Self::MissingOrderItemName { span }
            | Self::Lexical { span, .. } => *span,
        }
    }
}

/// Result type alias for parse operations.
pub type Result<T> = std::result::Result<T, ParseError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unexpected_message() {
        let err = ParseError::unexpected("'='", TokenKind::Comma, Span::new(12, 13));
        assert_eq!(err.to_string(), "unexpected ',' at 12..13: expected '='");
        assert_eq!(err.span(), Span::new(12, 13));
    }

    #[test]
    fn test_lexer_error_becomes_lexical() {
        let err = ParseError::unexpected(
            "expression",
            TokenKind::Error("unterminated string literal".to_string()),
            Span::new(4, 9),
        );
        assert!(matches!(err, ParseError::Lexical { .. }));
    }
}
