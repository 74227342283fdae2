//! Basic expression parser.
//!
//! Recognises just enough structure to find columns and literal values.
//! Function calls, parenthesised groups, `CASE` and arithmetic collapse
//! into [`SqlExpression::Ignore`] with their source text, but every `?`
//! inside them still advances the statement's parameter index.

use super::error::Result;
use super::parser::ClauseParser;
use crate::ast::{Expression, SqlExpression};
use crate::lexer::{Keyword, Span, TokenKind};
use crate::statement::{SqlToken, StatementContext, TableToken};

impl ClauseParser<'_> {
    /// Parses one expression.
    pub(crate) fn parse_expression(&mut self, context: &mut StatementContext) -> Result<Expression> {
        let start = self.stream.current_offset();
        let mut node = self.parse_primary(context)?;
        if let SqlExpression::Identifier(owner) = &node {
            if self.stream.check(&TokenKind::Dot) {
                let owner = owner.clone();
                let dot = self.stream.advance().span;
                node = self.parse_property(owner, Span::new(start, dot.start), context)?;
            }
        }
        if self.stream.check(&TokenKind::LeftParen) && is_callable(&node) {
            let skipped = self.stream.skip_parentheses()?;
            context.increase_parameters_index(skipped);
            node = SqlExpression::Ignore(self.text_from(start));
        }
        if self.stream.kind().is_composite_operator() {
            self.skip_composite(context)?;
            node = SqlExpression::Ignore(self.text_from(start));
        }
        Ok(Expression::new(
            node,
            Span::new(start, self.stream.previous_end()),
        ))
    }

    fn parse_primary(&mut self, context: &mut StatementContext) -> Result<SqlExpression> {
        let start = self.stream.current_offset();
        let node = match self.stream.kind().clone() {
            TokenKind::Question => {
                self.stream.advance();
                SqlExpression::Placeholder(context.next_parameter_index())
            }
            TokenKind::String(value) => {
                self.stream.advance();
                SqlExpression::Text(value)
            }
            TokenKind::Number(raw) => {
                self.stream.advance();
                SqlExpression::Number(raw)
            }
            TokenKind::Identifier(name) => {
                self.stream.advance();
                SqlExpression::Identifier(name)
            }
            sign @ (TokenKind::Minus | TokenKind::Plus)
                if matches!(self.stream.peek_kind(), TokenKind::Number(_)) =>
            {
                self.stream.advance();
                let TokenKind::Number(raw) = self.stream.advance().kind else {
                    return Err(self.stream.unexpected("number"));
                };
                if sign == TokenKind::Minus {
                    SqlExpression::Number(format!("-{raw}"))
                } else {
                    SqlExpression::Number(raw)
                }
            }
            TokenKind::Minus
            | TokenKind::Plus
            | TokenKind::Tilde
            | TokenKind::Bang
            | TokenKind::Keyword(Keyword::Not | Keyword::Exists) => {
                self.stream.advance();
                self.parse_expression(context)?;
                SqlExpression::Ignore(self.text_from(start))
            }
            TokenKind::LeftParen => {
                let skipped = self.stream.skip_parentheses()?;
                context.increase_parameters_index(skipped);
                SqlExpression::Ignore(self.text_from(start))
            }
            TokenKind::Keyword(Keyword::Case) => {
                self.skip_case(context)?;
                SqlExpression::Ignore(self.text_from(start))
            }
            TokenKind::Keyword(keyword) if is_value_keyword(keyword) => {
                self.stream.advance();
                SqlExpression::Ignore(self.text_from(start))
            }
            TokenKind::Keyword(_) if self.stream.peek_kind() == TokenKind::LeftParen => {
                self.stream.advance();
                SqlExpression::Ignore(self.text_from(start))
            }
            TokenKind::Variable(_) => {
                self.stream.advance();
                SqlExpression::Ignore(self.text_from(start))
            }
            _ => return Err(self.stream.unexpected("expression")),
        };
        Ok(node)
    }

    /// Parses the part of `owner.name` after the dot.
    fn parse_property(
        &mut self,
        owner: String,
        owner_span: Span,
        context: &mut StatementContext,
    ) -> Result<SqlExpression> {
        let name_start = self.stream.current_offset();
        let name = match self.stream.kind().clone() {
            TokenKind::Identifier(name) => name,
            TokenKind::Keyword(_) | TokenKind::Star => {
                Span::new(name_start, self.stream.current().span.end)
                    .text(self.stream.source())
                    .to_string()
            }
            _ => return Err(self.stream.unexpected("column name")),
        };
        self.stream.advance();
        if self.rule.find_table_rule(&owner).is_some() {
            context.add_token(SqlToken::Table(TableToken {
                span: owner_span,
                table_name: owner.clone(),
                original_literals: owner_span.text(self.stream.source()).to_string(),
            }));
        }
        if self.stream.kind().is_composite_operator() || name == "*" {
            let start = owner_span.start;
            self.skip_composite(context)?;
            return Ok(SqlExpression::Ignore(self.text_from(start)));
        }
        Ok(SqlExpression::Property { owner, name })
    }

    /// Skips operator/operand pairs such as `+ 1` or `* price`.
    pub(crate) fn skip_composite(&mut self, context: &mut StatementContext) -> Result<()> {
        while self.stream.kind().is_composite_operator() {
            self.stream.advance();
            self.parse_expression(context)?;
        }
        Ok(())
    }

    /// Skips a `CASE ... END` expression, including nested ones.
    fn skip_case(&mut self, context: &mut StatementContext) -> Result<()> {
        let mut depth = 0_usize;
        loop {
            match self.stream.kind() {
                TokenKind::Keyword(Keyword::Case) => depth += 1,
                TokenKind::Keyword(Keyword::End) => depth -= 1,
                TokenKind::Question => {
                    context.next_parameter_index();
                }
                TokenKind::Eof | TokenKind::Error(_) => return Err(self.stream.unexpected("END")),
                _ => {}
            }
            self.stream.advance();
            if depth == 0 {
                return Ok(());
            }
        }
    }
}

/// Keywords that stand for a value on their own.
const fn is_value_keyword(keyword: Keyword) -> bool {
    matches!(
        keyword,
        Keyword::Null | Keyword::True | Keyword::False | Keyword::Key | Keyword::Value
    )
}

/// Expressions that may be followed by a call's argument list.
const fn is_callable(node: &SqlExpression) -> bool {
    matches!(
        node,
        SqlExpression::Identifier(_) | SqlExpression::Property { .. } | SqlExpression::Ignore(_)
    )
}
