//! Rewrite tokens: positional edits recorded against the original SQL.
//!
//! Insertion tokens (items, ORDER BY, insert columns) carry the text to
//! splice in at their start index. Replacement tokens (tables, LIMIT
//! operands, insert values) carry the span an external rewriter replaces.

use core::fmt;

use serde::Serialize;

use crate::ast::InsertValuesKind;
use crate::lexer::Span;

/// A table name occurrence, replaced by the physical table on rewrite.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableToken {
    /// Location of the name, including any schema prefix.
    pub span: Span,
    /// Logical table name without quoting or schema.
    pub table_name: String,
    /// The name as written.
    pub original_literals: String,
}

/// Extra select-list (or insert-column) items appended at `start_index`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ItemsToken {
    /// Insertion offset.
    pub start_index: usize,
    /// Item fragments, each rendered after `", "`.
    pub items: Vec<String>,
}

impl ItemsToken {
    /// Creates an empty token at `start_index`.
    #[must_use]
    pub const fn new(start_index: usize) -> Self {
        Self {
            start_index,
            items: Vec::new(),
        }
    }

    /// Returns true if no items were recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// A synthesized ORDER BY clause.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderByToken {
    /// Insertion offset.
    pub start_index: usize,
    /// Rendered order items, e.g. `dept ASC`.
    pub items: Vec<String>,
}

/// A literal LIMIT offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OffsetToken {
    /// Location of the literal.
    pub span: Span,
    /// The literal value.
    pub offset: u64,
}

/// A literal LIMIT row count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RowCountToken {
    /// Location of the literal.
    pub span: Span,
    /// The literal value.
    pub row_count: u64,
}

/// A column list inserted into an INSERT that omitted one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InsertColumnToken {
    /// Insertion offset.
    pub start_index: usize,
    /// Column names.
    pub columns: Vec<String>,
}

/// The start of an INSERT's value section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct InsertValuesToken {
    /// Offset of `VALUES` or the customized keyword.
    pub start_index: usize,
    /// Values-list or SET form.
    pub kind: InsertValuesKind,
}

/// Discriminant of [`SqlToken`], used to remove tokens by kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SqlTokenKind {
    Table,
    Items,
    OrderBy,
    Offset,
    RowCount,
    InsertColumn,
    InsertValues,
}

impl fmt::Display for SqlTokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Table => "table",
            Self::Items => "items",
            Self::OrderBy => "order_by",
            Self::Offset => "offset",
            Self::RowCount => "row_count",
            Self::InsertColumn => "insert_column",
            Self::InsertValues => "insert_values",
        };
        f.write_str(name)
    }
}

/// A positional rewrite edit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SqlToken {
    Table(TableToken),
    Items(ItemsToken),
    OrderBy(OrderByToken),
    Offset(OffsetToken),
    RowCount(RowCountToken),
    InsertColumn(InsertColumnToken),
    InsertValues(InsertValuesToken),
}

impl SqlToken {
    /// Returns the token's kind.
    #[must_use]
    pub const fn kind(&self) -> SqlTokenKind {
        match self {
            Self::Table(_) => SqlTokenKind::Table,
            Self::Items(_) => SqlTokenKind::Items,
            Self::OrderBy(_) => SqlTokenKind::OrderBy,
            Self::Offset(_) => SqlTokenKind::Offset,
            Self::RowCount(_) => SqlTokenKind::RowCount,
            Self::InsertColumn(_) => SqlTokenKind::InsertColumn,
            Self::InsertValues(_) => SqlTokenKind::InsertValues,
        }
    }

    /// Returns the offset in the original SQL the token applies at.
    #[must_use]
    pub const fn start_index(&self) -> usize {
        match self {
            Self::Table(t) => t.span.start,
            Self::Items(t) => t.start_index,
            Self::OrderBy(t) => t.start_index,
            Self::Offset(t) => t.span.start,
            Self::RowCount(t) => t.span.start,
            Self::InsertColumn(t) => t.start_index,
            Self::InsertValues(t) => t.start_index,
        }
    }

    /// Returns the text an insertion token splices in, or `None` for
    /// replacement tokens.
    #[must_use]
    pub fn inserted_text(&self) -> Option<String> {
        match self {
            Self::Items(t) => Some(t.items.iter().map(|item| format!(", {item}")).collect()),
            Self::OrderBy(t) => Some(format!(" ORDER BY {} ", t.items.join(", "))),
            Self::InsertColumn(t) => Some(format!("({})", t.columns.join(", "))),
            Self::Table(_)
            | Self::Offset(_)
            | Self::RowCount(_)
            | Self::InsertValues(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_items_text() {
        let token = SqlToken::Items(ItemsToken {
            start_index: 20,
            items: vec![
                "COUNT(price) AS AVG_COUNT_0 ".to_string(),
                "SUM(price) AS AVG_SUM_0 ".to_string(),
            ],
        });
        assert_eq!(token.kind(), SqlTokenKind::Items);
        assert_eq!(token.start_index(), 20);
        assert_eq!(
            token.inserted_text().as_deref(),
            Some(", COUNT(price) AS AVG_COUNT_0 , SUM(price) AS AVG_SUM_0 ")
        );
    }

    #[test]
    fn test_order_by_and_columns_text() {
        let order_by = SqlToken::OrderBy(OrderByToken {
            start_index: 5,
            items: vec!["a ASC".to_string(), "b DESC".to_string()],
        });
        assert_eq!(
            order_by.inserted_text().as_deref(),
            Some(" ORDER BY a ASC, b DESC ")
        );
        let columns = SqlToken::InsertColumn(InsertColumnToken {
            start_index: 19,
            columns: vec!["a".to_string(), "b".to_string(), "c".to_string()],
        });
        assert_eq!(columns.inserted_text().as_deref(), Some("(a, b, c)"));
    }

    #[test]
    fn test_replacement_tokens_have_no_text() {
        let token = SqlToken::RowCount(RowCountToken {
            span: Span::new(40, 42),
            row_count: 10,
        });
        assert_eq!(token.start_index(), 40);
        assert!(token.inserted_text().is_none());
    }
}
