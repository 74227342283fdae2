//! `INSERT ... SET col = value, ...`, for dialects that support it.

use tracing::trace;

use crate::ast::{
    Column, ConditionValue, Expression, InsertValue, InsertValuesKind, RouteCondition,
    SqlExpression, exactly_value,
};
use crate::lexer::{Span, TokenKind};
use crate::parser::error::{ParseError, Result};
use crate::parser::parser::ClauseParser;
use crate::statement::{InsertStatement, SqlTokenKind};

impl ClauseParser<'_> {
    /// Parses the SET form of an INSERT.
    ///
    /// Does nothing unless the current token is one of the dialect's
    /// customized insert keywords. The column-list and generate-key tokens
    /// recorded earlier are dropped because the SET form names its own
    /// columns, and the values token is switched to SET style. All
    /// assignments together form one inserted row.
    pub(crate) fn parse_insert_set(&mut self, statement: &mut InsertStatement) -> Result<()> {
        if !self
            .stream
            .skip_if_keyword(self.dialect.customized_insert_keywords())
        {
            return Ok(());
        }
        let start = self.stream.previous_end();
        statement
            .context
            .remove_tokens(&[SqlTokenKind::InsertColumn, SqlTokenKind::Items]);
        statement.set_insert_values_kind(InsertValuesKind::Set);
        statement.columns.clear();
        statement.generate_key_column = None;
        let table_name = statement.table_name().unwrap_or_default().to_string();
        let first_parameter = statement.context.parameters_index;
        loop {
            let left = self.parse_expression(&mut statement.context)?;
            let column = assignment_column(&left, &table_name)?;
            self.stream.accept(&TokenKind::Eq)?;
            let right = self.parse_expression(&mut statement.context)?;
            if self
                .rule
                .is_sharding_column(&column.name, &column.table_name)
            {
                if let Some(value) = ConditionValue::from_node(&right.node) {
                    trace!(column = %column.name, "sharding value in SET clause");
                    let condition = RouteCondition::equal(column.clone(), value);
                    statement.context.route_conditions.push(condition);
                }
            }
            statement.columns.push(column);
            if !self.stream.skip_if(&TokenKind::Comma) {
                break;
            }
        }
        statement.insert_values.push(InsertValue::new(
            InsertValuesKind::Set,
            first_parameter..statement.context.parameters_index,
            Span::new(start, self.stream.previous_end()),
        ));
        Ok(())
    }
}

/// Resolves the target column of an assignment or column list entry.
pub(crate) fn assignment_column(expression: &Expression, table_name: &str) -> Result<Column> {
    let name = match &expression.node {
        SqlExpression::Property { name, .. } | SqlExpression::Identifier(name) => {
            exactly_value(name)
        }
        SqlExpression::Ignore(text) => exactly_value(text),
        other => {
            return Err(ParseError::InvalidColumn {
                found: other.to_string(),
                span: expression.span,
            });
        }
    };
    Ok(Column::new(name, table_name))
}
