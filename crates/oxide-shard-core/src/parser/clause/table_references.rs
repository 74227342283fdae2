//! Table references: FROM lists, joins and INSERT targets.

use crate::ast::{RouteCondition, Table, exactly_value};
use crate::lexer::{Keyword, Span, TokenKind};
use crate::parser::error::{ParseError, Result};
use crate::parser::parser::ClauseParser;
use crate::statement::{SqlToken, StatementContext, TableToken};

impl ClauseParser<'_> {
    /// Parses a comma-separated list of table references.
    pub(crate) fn parse_table_references(&mut self, context: &mut StatementContext) -> Result<()> {
        loop {
            self.parse_table_factor(context)?;
            self.parse_joins(context)?;
            if !self.stream.skip_if(&TokenKind::Comma) {
                return Ok(());
            }
        }
    }

    /// Parses `[schema.]name [[AS] alias]`, recording the table and its
    /// rewrite token.
    pub(crate) fn parse_table_factor(&mut self, context: &mut StatementContext) -> Result<()> {
        if self.stream.check(&TokenKind::LeftParen) {
            if self.stream.peek_kind() == TokenKind::Keyword(Keyword::Select) {
                return Err(ParseError::unsupported(
                    "derived table in join",
                    self.stream.current().span,
                ));
            }
            let skipped = self.stream.skip_parentheses()?;
            context.increase_parameters_index(skipped);
            self.parse_alias()?;
            return Ok(());
        }
        let start = self.stream.current_offset();
        let (mut name, mut name_span) = self.stream.accept_identifier()?;
        if self.stream.skip_if(&TokenKind::Dot) {
            (name, name_span) = self.stream.accept_identifier()?;
        }
        let span = Span::new(start, name_span.end);
        let alias = self.parse_alias()?;
        let table_name = exactly_value(&name);
        context.add_token(SqlToken::Table(TableToken {
            span,
            table_name: table_name.clone(),
            original_literals: span.text(self.stream.source()).to_string(),
        }));
        context.tables.add(Table::new(table_name, alias));
        Ok(())
    }

    /// Parses any number of joined tables with their ON / USING parts.
    pub(crate) fn parse_joins(&mut self, context: &mut StatementContext) -> Result<()> {
        while self.skip_join_keywords()? {
            self.parse_table_factor(context)?;
            if self.stream.skip_if_keyword(&[Keyword::On]) {
                let mut ignored: Vec<RouteCondition> = Vec::new();
                self.parse_predicates(context, &mut ignored)?;
            } else if self.stream.check_keyword(Keyword::Using) {
                self.stream.advance();
                let skipped = self.stream.skip_parentheses()?;
                context.increase_parameters_index(skipped);
            }
        }
        Ok(())
    }

    fn skip_join_keywords(&mut self) -> Result<bool> {
        match self.stream.kind() {
            TokenKind::Keyword(Keyword::Join) => {
                self.stream.advance();
                Ok(true)
            }
            TokenKind::Keyword(Keyword::Inner | Keyword::Cross) => {
                self.stream.advance();
                self.stream.accept_keyword(Keyword::Join)?;
                Ok(true)
            }
            TokenKind::Keyword(Keyword::Left | Keyword::Right | Keyword::Full) => {
                self.stream.advance();
                self.stream.skip_if_keyword(&[Keyword::Outer]);
                self.stream.accept_keyword(Keyword::Join)?;
                Ok(true)
            }
            _ => Ok(false),
        }
    }
}
