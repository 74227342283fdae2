//! LIMIT clause.

use crate::ast::{Limit, LimitValue};
use crate::dialect::LimitStyle;
use crate::lexer::{Keyword, Span, TokenKind};
use crate::parser::error::{ParseError, Result};
use crate::parser::parser::ClauseParser;
use crate::statement::{OffsetToken, RowCountToken, SelectStatement, SqlToken, StatementContext};

impl ClauseParser<'_> {
    /// Parses `LIMIT count [OFFSET offset]`, or `LIMIT offset, count` where
    /// the dialect allows it. Literal operands get rewrite tokens.
    pub(crate) fn parse_limit(&mut self, statement: &mut SelectStatement) -> Result<()> {
        let start = self.stream.current_offset();
        if !self.stream.skip_if_keyword(&[Keyword::Limit]) {
            return Ok(());
        }
        let context = &mut statement.context;
        let first = self.parse_limit_value(context)?;
        let (offset, row_count) = if self.dialect.limit_style() == LimitStyle::MySql
            && self.stream.skip_if(&TokenKind::Comma)
        {
            let second = self.parse_limit_value(context)?;
            (Some(first), second)
        } else if self.stream.skip_if_keyword(&[Keyword::Offset]) {
            (Some(self.parse_limit_value(context)?), first)
        } else {
            (None, first)
        };
        if let Some((LimitValue::Literal(offset), span)) = offset {
            context.add_token(SqlToken::Offset(OffsetToken { span, offset }));
        }
        if let (LimitValue::Literal(row_count), span) = row_count {
            context.add_token(SqlToken::RowCount(RowCountToken { span, row_count }));
        }
        statement.limit = Some(Limit {
            offset: offset.map(|(value, _)| value),
            row_count: Some(row_count.0),
            span: Span::new(start, self.stream.previous_end()),
        });
        Ok(())
    }

    fn parse_limit_value(&mut self, context: &mut StatementContext) -> Result<(LimitValue, Span)> {
        match self.stream.kind().clone() {
            TokenKind::Number(raw) => {
                let span = self.stream.advance().span;
                let value = raw.parse::<u64>().map_err(|_| {
                    ParseError::unexpected("non-negative integer", TokenKind::Number(raw.clone()), span)
                })?;
                Ok((LimitValue::Literal(value), span))
            }
            TokenKind::Question => {
                let span = self.stream.advance().span;
                Ok((LimitValue::Placeholder(context.next_parameter_index()), span))
            }
            _ => Err(self.stream.unexpected("LIMIT value")),
        }
    }
}
