//! GROUP BY clause.

use crate::lexer::{Keyword, TokenKind};
use crate::parser::error::Result;
use crate::parser::parser::ClauseParser;
use crate::statement::SelectStatement;

impl ClauseParser<'_> {
    /// Parses an optional GROUP BY and records where the clause ends, after
    /// any dialect suffix such as `WITH ROLLUP`.
    pub(crate) fn parse_group_by(&mut self, statement: &mut SelectStatement) -> Result<()> {
        if !self.stream.skip_if_keyword(&[Keyword::Group]) {
            return Ok(());
        }
        self.stream.accept_keyword(Keyword::By)?;
        loop {
            let item = self.parse_order_item(statement)?;
            statement.group_by_items.push(item);
            if !self.stream.skip_if(&TokenKind::Comma) {
                break;
            }
        }
        self.stream
            .skip_all_keywords(self.dialect.skipped_keywords_after_group_by());
        statement.group_by_stop_index = Some(self.stream.previous_end());
        Ok(())
    }
}
