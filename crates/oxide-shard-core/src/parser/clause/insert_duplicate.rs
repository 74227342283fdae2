use super::insert_set::assignment_column;
use crate::lexer::{Keyword, TokenKind};
use crate::parser::error::{ParseError, Result};
use crate::parser::parser::ClauseParser;
use crate::statement::InsertStatement;

impl ClauseParser<'_> {
    /// Parses `ON DUPLICATE KEY UPDATE col = expr, ...`. The assignments
    /// do not affect routing, but changing a sharding column would move the
    /// row to another shard and is rejected.
    pub(crate) fn parse_insert_duplicate_key_update(
        &mut self,
        statement: &mut InsertStatement,
    ) -> Result<()> {
        if !self.stream.skip_if_keyword(&[Keyword::On]) {
            return Ok(());
        }
        self.stream.accept_keyword(Keyword::Duplicate)?;
        self.stream.accept_keyword(Keyword::Key)?;
        self.stream.accept_keyword(Keyword::Update)?;
        let table_name = statement.table_name().unwrap_or_default().to_string();
        loop {
            let left = self.parse_expression(&mut statement.context)?;
            let column = assignment_column(&left, &table_name)?;
            if self
                .rule
                .is_sharding_column(&column.name, &column.table_name)
            {
                return Err(ParseError::unsupported(
                    format!("update of sharding column {}", column.name),
                    left.span,
                ));
            }
            self.stream.accept(&TokenKind::Eq)?;
            self.parse_expression(&mut statement.context)?;
            if !self.stream.skip_if(&TokenKind::Comma) {
                return Ok(());
            }
        }
    }
}
