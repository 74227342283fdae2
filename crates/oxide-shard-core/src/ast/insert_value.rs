//! Value rows of an INSERT.

use core::ops::Range;

use serde::Serialize;

use crate::lexer::Span;

/// How an INSERT supplies its values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InsertValuesKind {
    /// `VALUES (...), (...)`.
    #[default]
    Values,
    /// `SET col = value, ...`.
    Set,
}

/// One row's worth of values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InsertValue {
    /// Values-list or SET form.
    pub kind: InsertValuesKind,
    /// Indices of the bound parameters used by this row.
    pub placeholder_indices: Vec<usize>,
    /// Location of the row in the source.
    #[serde(skip)]
    pub span: Span,
}

impl InsertValue {
    /// Creates a row covering the parameter indices in `placeholders`.
    #[must_use]
    pub fn new(kind: InsertValuesKind, placeholders: Range<usize>, span: Span) -> Self {
        Self {
            kind,
            placeholder_indices: placeholders.collect(),
            span,
        }
    }

    /// Returns the number of bound parameters in this row.
    #[must_use]
    pub fn parameters_count(&self) -> usize {
        self.placeholder_indices.len()
    }
}
