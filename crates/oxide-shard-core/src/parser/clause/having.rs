use crate::lexer::Keyword;
use crate::parser::error::Result;
use crate::parser::parser::ClauseParser;

impl ClauseParser<'_> {
    /// HAVING cannot be evaluated across shards; reject it.
    pub(crate) fn parse_having(&self) -> Result<()> {
        self.stream.unsupported_if_keyword(&[Keyword::Having])
    }
}
