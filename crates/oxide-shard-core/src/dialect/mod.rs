//! SQL dialect support.
//!
//! Databases differ in the clauses a SELECT may carry, the keywords that
//! introduce an INSERT's alternative value form, and how LIMIT is written.
//! The parser consults a [`Dialect`] at each of those points instead of
//! hard-coding one database's grammar.

mod generic;

pub use generic::GenericDialect;

use crate::lexer::Keyword;

/// The clauses of a SELECT, in the order a dialect parses them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectClause {
    /// Select list, including `DISTINCT`.
    SelectList,
    /// `FROM` with table references, joins and derived tables.
    From,
    /// `WHERE`.
    Where,
    /// `GROUP BY`.
    GroupBy,
    /// `HAVING`.
    Having,
    /// `ORDER BY`.
    OrderBy,
    /// `LIMIT` / `OFFSET`.
    Limit,
    /// Anything trailing, e.g. set operators.
    Rest,
}

/// How a dialect writes LIMIT.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LimitStyle {
    /// `LIMIT count [OFFSET offset]`.
    Standard,
    /// Also accepts `LIMIT offset, count`.
    MySql,
}

/// The select-clause sequence shared by the bundled dialects.
pub const DEFAULT_SELECT_CLAUSES: &[SelectClause] = &[
    SelectClause::SelectList,
    SelectClause::From,
    SelectClause::Where,
    SelectClause::GroupBy,
    SelectClause::Having,
    SelectClause::OrderBy,
    SelectClause::Limit,
    SelectClause::Rest,
];

/// Trait for SQL dialect-specific behavior.
pub trait Dialect {
    /// Returns the name of the dialect.
    fn name(&self) -> &'static str;

    /// Returns the identifier quote character (e.g., `"` for standard SQL, `` ` `` for MySQL).
    fn identifier_quote(&self) -> char {
        '"'
    }

    /// Keywords that introduce the `INSERT ... SET` form. Empty when the
    /// dialect has no such form.
    fn customized_insert_keywords(&self) -> &'static [Keyword] {
        &[]
    }

    /// The clauses of a SELECT in parse order.
    fn select_clauses(&self) -> &'static [SelectClause] {
        DEFAULT_SELECT_CLAUSES
    }

    /// Returns the accepted LIMIT syntax.
    fn limit_style(&self) -> LimitStyle {
        LimitStyle::Standard
    }

    /// Keywords that may trail a GROUP BY list, e.g. `WITH ROLLUP`.
    fn skipped_keywords_after_group_by(&self) -> &'static [Keyword] {
        &[]
    }

    /// Keywords after a SELECT body that make the statement unroutable.
    fn unsupported_trailing_keywords(&self) -> &'static [Keyword] {
        &[Keyword::Union, Keyword::Intersect, Keyword::Except]
    }

    /// Quotes an identifier.
    fn quote_identifier(&self, name: &str) -> String {
        let quote = self.identifier_quote();
        format!("{quote}{name}{quote}")
    }
}
