//! SELECT orchestration.

use tracing::trace;

use super::derived;
use super::error::Result;
use super::parser::ClauseParser;
use crate::dialect::SelectClause;
use crate::lexer::{Keyword, TokenKind};
use crate::statement::SelectStatement;

impl ClauseParser<'_> {
    /// Parses a SELECT and prepares it for rewriting.
    ///
    /// Derived tables are merged into one statement, then the helper
    /// columns needed to merge results across shards are appended:
    /// `COUNT`/`SUM` for every `AVG`, select items for ORDER BY and
    /// GROUP BY columns missing from the select list, and an ORDER BY
    /// mirroring GROUP BY when there is none.
    pub(crate) fn parse_select(&mut self) -> Result<SelectStatement> {
        let mut statement = self.parse_select_internal(0)?;
        if statement.contains_subquery() {
            statement = statement.merge_subquery_statement();
        }
        derived::append_derived_columns(&mut statement, self.metadata)?;
        derived::append_derived_order_by(&mut statement);
        Ok(statement)
    }

    /// Parses one SELECT level, starting its placeholder count at
    /// `parameters_index`.
    fn parse_select_internal(&mut self, parameters_index: usize) -> Result<SelectStatement> {
        self.stream.accept_keyword(Keyword::Select)?;
        let mut statement = SelectStatement::default();
        statement.context.parameters_index = parameters_index;
        for clause in self.dialect.select_clauses() {
            match clause {
                SelectClause::SelectList => self.parse_select_list(&mut statement)?,
                SelectClause::From => self.parse_from(&mut statement)?,
                SelectClause::Where => self.parse_where(&mut statement.context)?,
                SelectClause::GroupBy => self.parse_group_by(&mut statement)?,
                SelectClause::Having => self.parse_having()?,
                SelectClause::OrderBy => self.parse_order_by(&mut statement)?,
                SelectClause::Limit => self.parse_limit(&mut statement)?,
                SelectClause::Rest => self.parse_select_rest()?,
            }
        }
        Ok(statement)
    }

    fn parse_from(&mut self, statement: &mut SelectStatement) -> Result<()> {
        self.stream.unsupported_if_keyword(&[Keyword::Into])?;
        if !self.stream.skip_if_keyword(&[Keyword::From]) {
            return Ok(());
        }
        if !(self.stream.check(&TokenKind::LeftParen)
            && self.stream.peek_kind() == TokenKind::Keyword(Keyword::Select))
        {
            return self.parse_table_references(&mut statement.context);
        }
        self.stream.advance();
        let subquery = self.parse_select_internal(statement.context.parameters_index)?;
        statement.context.parameters_index = subquery.context.parameters_index;
        statement.subquery = Some(Box::new(subquery));
        self.stream.accept(&TokenKind::RightParen)?;
        self.parse_alias()?;
        trace!("parsed derived table");
        if self.stream.check_keyword(Keyword::Where) || self.stream.is_eof() {
            return Ok(());
        }
        self.parse_joins(&mut statement.context)?;
        if self.stream.skip_if(&TokenKind::Comma) {
            self.parse_table_references(&mut statement.context)?;
        }
        Ok(())
    }
}
