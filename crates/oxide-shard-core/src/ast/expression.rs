//! Expression shapes produced by the basic expression parser.

use core::fmt;

use crate::lexer::Span;

/// The shape of a parsed expression.
///
/// The router only distinguishes what it needs to resolve columns and
/// literal values. Anything more complex (function calls, arithmetic,
/// subqueries) collapses into [`SqlExpression::Ignore`] with its source
/// text retained verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SqlExpression {
    /// A qualified reference such as `t_order.user_id`.
    Property {
        /// Table name or alias.
        owner: String,
        /// Column name.
        name: String,
    },
    /// A bare identifier.
    Identifier(String),
    /// A numeric literal, kept as written.
    Number(String),
    /// A string literal.
    Text(String),
    /// A `?` placeholder with its index into the bound parameters.
    Placeholder(usize),
    /// Any other expression, as source text.
    Ignore(String),
}

impl fmt::Display for SqlExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Property { owner, name } => write!(f, "{owner}.{name}"),
            Self::Identifier(name) => f.write_str(name),
            Self::Number(n) => f.write_str(n),
            Self::Text(s) => write!(f, "'{s}'"),
            Self::Placeholder(_) => f.write_str("?"),
            Self::Ignore(text) => f.write_str(text),
        }
    }
}

/// A parsed expression with the source span it consumed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expression {
    /// The expression shape.
    pub node: SqlExpression,
    /// The consumed source range.
    pub span: Span,
}

impl Expression {
    /// Creates a new expression.
    #[must_use]
    pub const fn new(node: SqlExpression, span: Span) -> Self {
        Self { node, span }
    }
}

/// Strips identifier and literal quoting characters from `value`.
///
/// Used to compare expressions written with and without quoting, e.g.
/// `` `t_order`.`user_id` `` against `t_order.user_id`.
#[must_use]
pub fn exactly_value(value: &str) -> String {
    value
        .chars()
        .filter(|c| !matches!(c, '`' | '"' | '\'' | '[' | ']'))
        .collect()
}
