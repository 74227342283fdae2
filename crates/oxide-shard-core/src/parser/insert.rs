//! INSERT orchestration.

use tracing::trace;

use super::error::{ParseError, Result};
use super::parser::ClauseParser;
use crate::lexer::{Keyword, TokenKind};
use crate::statement::InsertStatement;

impl ClauseParser<'_> {
    /// Parses `INSERT [INTO] table [(cols)] VALUES ... | SET ...
    /// [ON DUPLICATE KEY UPDATE ...]`.
    pub(crate) fn parse_insert(&mut self) -> Result<InsertStatement> {
        self.stream.accept_keyword(Keyword::Insert)?;
        let mut statement = InsertStatement::default();
        self.parse_insert_into(&mut statement)?;
        self.parse_insert_columns(&mut statement)?;
        if self.stream.check_keyword(Keyword::Select)
            || (self.stream.check(&TokenKind::LeftParen)
                && self.stream.peek_kind() == TokenKind::Keyword(Keyword::Select))
        {
            return Err(ParseError::unsupported(
                "INSERT ... SELECT",
                self.stream.current().span,
            ));
        }
        self.parse_insert_values(&mut statement)?;
        self.parse_insert_set(&mut statement)?;
        if statement.insert_values.is_empty() {
            return Err(self.stream.unexpected(self.expected_values_keywords()));
        }
        self.parse_insert_duplicate_key_update(&mut statement)?;
        trace!(
            rows = statement.insert_values.len(),
            columns = statement.columns.len(),
            "parsed insert"
        );
        Ok(statement)
    }

    fn expected_values_keywords(&self) -> String {
        let mut expected = vec!["VALUES"];
        expected.extend(
            self.dialect
                .customized_insert_keywords()
                .iter()
                .map(|kw| kw.as_str()),
        );
        expected.join(" or ")
    }
}
