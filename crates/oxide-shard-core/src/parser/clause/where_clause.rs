//! WHERE clause and the predicate parser shared with join conditions.

use tracing::debug;

use crate::ast::{Column, ConditionValue, RouteCondition, SqlExpression, Tables};
use crate::lexer::{Keyword, TokenKind};
use crate::parser::error::Result;
use crate::parser::parser::ClauseParser;
use crate::statement::StatementContext;

impl ClauseParser<'_> {
    /// Parses an optional WHERE clause into route conditions.
    ///
    /// A top-level `OR` makes routing undeterminable, so every condition
    /// from this clause is dropped in that case.
    pub(crate) fn parse_where(&mut self, context: &mut StatementContext) -> Result<()> {
        if !self.stream.skip_if_keyword(&[Keyword::Where]) {
            return Ok(());
        }
        let mut conditions = Vec::new();
        if self.parse_predicates(context, &mut conditions)? {
            debug!(
                discarded = conditions.len(),
                "OR in WHERE clause, route conditions discarded"
            );
        } else {
            context.route_conditions.append(&mut conditions);
        }
        Ok(())
    }

    /// Parses predicates joined by `AND` / `OR`. Returns true if any `OR`
    /// was seen.
    pub(crate) fn parse_predicates(
        &mut self,
        context: &mut StatementContext,
        conditions: &mut Vec<RouteCondition>,
    ) -> Result<bool> {
        let mut has_or = false;
        loop {
            self.parse_predicate(context, conditions)?;
            if self.stream.skip_if_keyword(&[Keyword::And]) {
                continue;
            }
            if self.stream.skip_if_keyword(&[Keyword::Or]) {
                has_or = true;
                continue;
            }
            return Ok(has_or);
        }
    }

    fn parse_predicate(
        &mut self,
        context: &mut StatementContext,
        conditions: &mut Vec<RouteCondition>,
    ) -> Result<()> {
        let left = self.parse_expression(context)?;
        let column = self.sharding_column(&context.tables, &left.node);
        match self.stream.kind().clone() {
            TokenKind::Eq => {
                self.stream.advance();
                let right = self.parse_expression(context)?;
                if let (Some(column), Some(value)) = (column, ConditionValue::from_node(&right.node))
                {
                    conditions.push(RouteCondition::equal(column, value));
                }
            }
            kind if kind.is_comparison() => {
                self.stream.advance();
                self.parse_expression(context)?;
            }
            TokenKind::Keyword(Keyword::In) => {
                self.stream.advance();
                self.parse_in_list(context, column, conditions)?;
            }
            TokenKind::Keyword(Keyword::Between) => {
                self.stream.advance();
                let low = self.parse_expression(context)?;
                self.stream.accept_keyword(Keyword::And)?;
                let high = self.parse_expression(context)?;
                if let (Some(column), Some(low), Some(high)) = (
                    column,
                    ConditionValue::from_node(&low.node),
                    ConditionValue::from_node(&high.node),
                ) {
                    conditions.push(RouteCondition::between(column, low, high));
                }
            }
            TokenKind::Keyword(Keyword::Not) => {
                self.stream.advance();
                self.skip_negated_predicate(context)?;
            }
            TokenKind::Keyword(Keyword::Like) => {
                self.stream.advance();
                self.parse_expression(context)?;
            }
            TokenKind::Keyword(Keyword::Is) => {
                self.stream.advance();
                self.stream.skip_if_keyword(&[Keyword::Not]);
                if !self
                    .stream
                    .skip_if_keyword(&[Keyword::Null, Keyword::True, Keyword::False])
                {
                    return Err(self.stream.unexpected("NULL"));
                }
            }
            _ => {}
        }
        Ok(())
    }

    fn parse_in_list(
        &mut self,
        context: &mut StatementContext,
        column: Option<Column>,
        conditions: &mut Vec<RouteCondition>,
    ) -> Result<()> {
        if self.stream.peek_kind() == TokenKind::Keyword(Keyword::Select) {
            let skipped = self.stream.skip_parentheses()?;
            context.increase_parameters_index(skipped);
            return Ok(());
        }
        self.stream.accept(&TokenKind::LeftParen)?;
        let mut values = Vec::new();
        let mut all_routable = true;
        loop {
            let expression = self.parse_expression(context)?;
            match ConditionValue::from_node(&expression.node) {
                Some(value) => values.push(value),
                None => all_routable = false,
            }
            if !self.stream.skip_if(&TokenKind::Comma) {
                break;
            }
        }
        self.stream.accept(&TokenKind::RightParen)?;
        if let Some(column) = column.filter(|_| all_routable) {
            conditions.push(RouteCondition::in_list(column, values));
        }
        Ok(())
    }

    fn skip_negated_predicate(&mut self, context: &mut StatementContext) -> Result<()> {
        match self.stream.kind() {
            TokenKind::Keyword(Keyword::In) => {
                self.stream.advance();
                let skipped = self.stream.skip_parentheses()?;
                context.increase_parameters_index(skipped);
            }
            TokenKind::Keyword(Keyword::Between) => {
                self.stream.advance();
                self.parse_expression(context)?;
                self.stream.accept_keyword(Keyword::And)?;
                self.parse_expression(context)?;
            }
            TokenKind::Keyword(Keyword::Like) => {
                self.stream.advance();
                self.parse_expression(context)?;
            }
            _ => return Err(self.stream.unexpected("IN, BETWEEN or LIKE")),
        }
        Ok(())
    }

    /// Resolves `node` to a sharding column of one of `tables`.
    fn sharding_column(&self, tables: &Tables, node: &SqlExpression) -> Option<Column> {
        let column = match node {
            SqlExpression::Property { owner, name } => {
                tables.find(owner).map(|table| Column::new(name, &table.name))
            }
            SqlExpression::Identifier(name) if tables.is_single_table() => tables
                .single_table_name()
                .map(|table| Column::new(name, table)),
            _ => None,
        }?;
        self.rule
            .is_sharding_column(&column.name, &column.table_name)
            .then_some(column)
    }
}
