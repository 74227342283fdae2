//! INSERT column list.

use super::insert_set::assignment_column;
use crate::ast::{Column, InsertValuesKind};
use crate::lexer::{Keyword, TokenKind};
use crate::parser::error::Result;
use crate::parser::parser::ClauseParser;
use crate::statement::{
    InsertColumnToken, InsertStatement, InsertValuesToken, ItemsToken, SqlToken,
};

impl ClauseParser<'_> {
    /// Parses the optional column list.
    ///
    /// An explicit list missing the table's generate-key column gets an
    /// items token appending it. Without a list, the metadata columns are
    /// assumed and an insert-column token spells them out. Either way the
    /// start of the value section is recorded.
    pub(crate) fn parse_insert_columns(&mut self, statement: &mut InsertStatement) -> Result<()> {
        let table_name = statement.table_name().unwrap_or_default().to_string();
        let generate_key = self.rule.generate_key_column(&table_name);
        if self.stream.check(&TokenKind::LeftParen)
            && self.stream.peek_kind() != TokenKind::Keyword(Keyword::Select)
        {
            self.stream.advance();
            loop {
                let expression = self.parse_expression(&mut statement.context)?;
                statement
                    .columns
                    .push(assignment_column(&expression, &table_name)?);
                if !self.stream.skip_if(&TokenKind::Comma) {
                    break;
                }
            }
            let close = self.stream.accept(&TokenKind::RightParen)?;
            if let Some(key) = generate_key.filter(|key| !statement.contains_column(key)) {
                statement.context.add_token(SqlToken::Items(ItemsToken {
                    start_index: close.span.start,
                    items: vec![key.to_string()],
                }));
                statement.generate_key_column = Some(key.to_string());
            }
        } else if let Some(known) = self.metadata.columns(&table_name) {
            let mut columns = known.to_vec();
            if let Some(key) = generate_key {
                if !columns.iter().any(|c| c.eq_ignore_ascii_case(key)) {
                    columns.push(key.to_string());
                    statement.generate_key_column = Some(key.to_string());
                }
            }
            statement.columns = columns
                .iter()
                .map(|name| Column::new(name.as_str(), table_name.as_str()))
                .collect();
            statement
                .context
                .add_token(SqlToken::InsertColumn(InsertColumnToken {
                    start_index: self.stream.previous_end(),
                    columns,
                }));
        }
        statement
            .context
            .add_token(SqlToken::InsertValues(InsertValuesToken {
                start_index: self.stream.current_offset(),
                kind: InsertValuesKind::Values,
            }));
        Ok(())
    }
}
