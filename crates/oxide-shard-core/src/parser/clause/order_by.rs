//! ORDER BY clause and order items.

use crate::ast::{OrderDirection, OrderItem, SqlExpression, exactly_value};
use crate::lexer::{Keyword, TokenKind};
use crate::parser::error::{ParseError, Result};
use crate::parser::parser::ClauseParser;
use crate::statement::SelectStatement;

impl ClauseParser<'_> {
    pub(crate) fn parse_order_by(&mut self, statement: &mut SelectStatement) -> Result<()> {
        if !self.stream.skip_if_keyword(&[Keyword::Order]) {
            return Ok(());
        }
        self.stream.accept_keyword(Keyword::By)?;
        loop {
            let item = self.parse_order_item(statement)?;
            statement.order_by_items.push(item);
            if !self.stream.skip_if(&TokenKind::Comma) {
                return Ok(());
            }
        }
    }

    /// Parses one `expression [ASC | DESC]` item, resolving its alias
    /// against the select list.
    pub(crate) fn parse_order_item(&mut self, statement: &mut SelectStatement) -> Result<OrderItem> {
        let expression = self.parse_expression(&mut statement.context)?;
        let direction = if self.stream.skip_if_keyword(&[Keyword::Desc]) {
            OrderDirection::Desc
        } else {
            self.stream.skip_if_keyword(&[Keyword::Asc]);
            OrderDirection::Asc
        };
        let span = expression.span;
        match expression.node {
            SqlExpression::Number(raw) => raw
                .parse::<usize>()
                .map(|index| OrderItem::index(index, direction, span))
                .map_err(|_| ParseError::unexpected("column position", TokenKind::Number(raw.clone()), span)),
            SqlExpression::Identifier(name) => {
                let alias = statement.alias_of(&name);
                Ok(OrderItem::column(None, name, direction, alias, span))
            }
            SqlExpression::Property { owner, name } => {
                let alias = statement.alias_of(&format!("{owner}.{name}"));
                Ok(OrderItem::column(Some(owner), name, direction, alias, span))
            }
            SqlExpression::Ignore(text) => {
                let alias = statement.alias_of(&text);
                Ok(OrderItem::column(None, exactly_value(&text), direction, alias, span))
            }
            node @ (SqlExpression::Text(_) | SqlExpression::Placeholder(_)) => Err(
                ParseError::unsupported(format!("ordering by literal {node}"), span),
            ),
        }
    }
}
