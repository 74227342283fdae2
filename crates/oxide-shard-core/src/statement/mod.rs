//! Parsed statements and the state they share.

mod insert;
mod select;
mod token;

pub use insert::InsertStatement;
pub use select::SelectStatement;
pub use token::{
    InsertColumnToken, InsertValuesToken, ItemsToken, OffsetToken, OrderByToken, RowCountToken,
    SqlToken, SqlTokenKind, TableToken,
};

use crate::ast::{RouteCondition, Tables};

/// State every statement accumulates while it is parsed.
///
/// Clause parsers receive this by exclusive reference; nothing else
/// mutates it during a parse.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatementContext {
    /// Tables referenced so far.
    pub tables: Tables,
    /// Route conditions extracted so far.
    pub route_conditions: Vec<RouteCondition>,
    /// Rewrite tokens recorded so far.
    pub tokens: Vec<SqlToken>,
    /// Number of `?` placeholders consumed so far.
    pub parameters_index: usize,
}

impl StatementContext {
    /// Records a rewrite token.
    pub fn add_token(&mut self, token: SqlToken) {
        self.tokens.push(token);
    }

    /// Removes every token whose kind is in `kinds`.
    pub fn remove_tokens(&mut self, kinds: &[SqlTokenKind]) {
        self.tokens.retain(|token| !kinds.contains(&token.kind()));
    }

    /// Returns the index for the next placeholder and advances the count.
    pub fn next_parameter_index(&mut self) -> usize {
        let index = self.parameters_index;
        self.parameters_index += 1;
        index
    }

    /// Accounts for `count` placeholders that were skipped over.
    pub fn increase_parameters_index(&mut self, count: usize) {
        self.parameters_index += count;
    }
}

/// A parsed statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    Select(SelectStatement),
    Insert(InsertStatement),
}

impl Statement {
    /// Returns the shared parse state.
    #[must_use]
    pub const fn context(&self) -> &StatementContext {
        match self {
            Self::Select(s) => &s.context,
            Self::Insert(s) => &s.context,
        }
    }

    /// Returns the referenced tables.
    #[must_use]
    pub const fn tables(&self) -> &Tables {
        &self.context().tables
    }

    /// Returns the extracted route conditions.
    #[must_use]
    pub fn route_conditions(&self) -> &[RouteCondition] {
        &self.context().route_conditions
    }

    /// Returns the recorded rewrite tokens.
    #[must_use]
    pub fn tokens(&self) -> &[SqlToken] {
        &self.context().tokens
    }

    /// Returns the number of bound parameters the statement takes.
    #[must_use]
    pub const fn parameters_count(&self) -> usize {
        self.context().parameters_index
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remove_tokens_by_kind() {
        let mut context = StatementContext::default();
        context.add_token(SqlToken::Items(ItemsToken::new(3)));
        context.add_token(SqlToken::InsertColumn(InsertColumnToken {
            start_index: 7,
            columns: vec!["a".to_string()],
        }));
        context.add_token(SqlToken::InsertValues(InsertValuesToken {
            start_index: 9,
            kind: crate::ast::InsertValuesKind::Values,
        }));
        context.remove_tokens(&[SqlTokenKind::InsertColumn, SqlTokenKind::Items]);
        assert_eq!(context.tokens.len(), 1);
        assert_eq!(context.tokens[0].kind(), SqlTokenKind::InsertValues);
    }

    #[test]
    fn test_parameter_index() {
        let mut context = StatementContext::default();
        assert_eq!(context.next_parameter_index(), 0);
        context.increase_parameters_index(2);
        assert_eq!(context.next_parameter_index(), 3);
        assert_eq!(context.parameters_index, 4);
    }
}
