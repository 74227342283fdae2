//! INSERT ... VALUES rows.

use crate::ast::{ConditionValue, InsertValue, InsertValuesKind, RouteCondition};
use crate::lexer::{Keyword, TokenKind};
use crate::parser::error::Result;
use crate::parser::parser::ClauseParser;
use crate::statement::InsertStatement;

impl ClauseParser<'_> {
    /// Parses `VALUES (...)[, (...)]*`. Values are matched to columns by
    /// position; literal values of sharding columns become route
    /// conditions.
    pub(crate) fn parse_insert_values(&mut self, statement: &mut InsertStatement) -> Result<()> {
        if !self
            .stream
            .skip_if_keyword(&[Keyword::Values, Keyword::Value])
        {
            return Ok(());
        }
        loop {
            let open = self.stream.accept(&TokenKind::LeftParen)?.span;
            let first_parameter = statement.context.parameters_index;
            let mut position = 0;
            loop {
                let expression = self.parse_expression(&mut statement.context)?;
                let column = statement.columns.get(position).filter(|column| {
                    self.rule
                        .is_sharding_column(&column.name, &column.table_name)
                });
                if let (Some(column), Some(value)) =
                    (column, ConditionValue::from_node(&expression.node))
                {
                    let condition = RouteCondition::equal(column.clone(), value);
                    statement.context.route_conditions.push(condition);
                }
                position += 1;
                if !self.stream.skip_if(&TokenKind::Comma) {
                    break;
                }
            }
            let close = self.stream.accept(&TokenKind::RightParen)?.span;
            statement.insert_values.push(InsertValue::new(
                InsertValuesKind::Values,
                first_parameter..statement.context.parameters_index,
                open.merge(close),
            ));
            if !self.stream.skip_if(&TokenKind::Comma) {
                return Ok(());
            }
        }
    }
}
