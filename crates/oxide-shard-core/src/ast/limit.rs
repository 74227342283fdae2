//! LIMIT / OFFSET values.

use serde::Serialize;

use crate::lexer::Span;

/// One LIMIT operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LimitValue {
    /// An integer literal.
    Literal(u64),
    /// A bound parameter index.
    Placeholder(usize),
}

/// A parsed LIMIT clause.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Limit {
    /// Rows to skip.
    pub offset: Option<LimitValue>,
    /// Rows to return.
    pub row_count: Option<LimitValue>,
    /// Location of the whole clause.
    #[serde(skip)]
    pub span: Span,
}
