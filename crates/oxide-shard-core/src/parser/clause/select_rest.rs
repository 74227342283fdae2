use crate::parser::error::Result;
use crate::parser::parser::ClauseParser;

impl ClauseParser<'_> {
    /// Rejects trailing set operators the router cannot merge.
    pub(crate) fn parse_select_rest(&self) -> Result<()> {
        self.stream
            .unsupported_if_keyword(self.dialect.unsupported_trailing_keywords())
    }
}
