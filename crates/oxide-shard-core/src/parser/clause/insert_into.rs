use crate::lexer::Keyword;
use crate::parser::error::Result;
use crate::parser::parser::ClauseParser;
use crate::statement::InsertStatement;

impl ClauseParser<'_> {
    /// Parses `[INTO] table`.
    pub(crate) fn parse_insert_into(&mut self, statement: &mut InsertStatement) -> Result<()> {
        self.stream.skip_if_keyword(&[Keyword::Into]);
        self.parse_table_factor(&mut statement.context)
    }
}
