//! Parser entry point and the state shared by clause parsers.

use tracing::debug;

use super::error::Result;
use crate::dialect::Dialect;
use crate::lexer::{Keyword, TokenKind, TokenStream};
use crate::rule::{ShardingRule, ShardingTableMetaData};
use crate::statement::Statement;

/// Parses SQL statements for routing and rewriting.
///
/// ```rust
/// use oxide_shard_core::dialect::GenericDialect;
/// use oxide_shard_core::rule::{ShardingRule, ShardingTableMetaData};
/// use oxide_shard_core::{SqlParser, Statement};
///
/// let dialect = GenericDialect::new();
/// let rule = ShardingRule::default();
/// let metadata = ShardingTableMetaData::new();
/// let parser = SqlParser::new(&dialect, &rule, &metadata);
/// let statement = parser.parse("SELECT id FROM t_order WHERE status = 'OK'").unwrap();
/// assert!(matches!(statement, Statement::Select(_)));
/// ```
#[derive(Clone, Copy)]
pub struct SqlParser<'a> {
    dialect: &'a dyn Dialect,
    rule: &'a ShardingRule,
    metadata: &'a ShardingTableMetaData,
}

impl<'a> SqlParser<'a> {
    /// Creates a parser for `dialect` with the given rule and metadata.
    #[must_use]
    pub const fn new(
        dialect: &'a dyn Dialect,
        rule: &'a ShardingRule,
        metadata: &'a ShardingTableMetaData,
    ) -> Self {
        Self {
            dialect,
            rule,
            metadata,
        }
    }

    /// Parses a single SELECT or INSERT statement.
    ///
    /// # Errors
    ///
    /// Returns a `ParseError` if the input is malformed or uses a
    /// construct the router does not support. No partial statement is
    /// produced.
    pub fn parse(&self, sql: &str) -> Result<Statement> {
        let mut parser = ClauseParser::new(sql, self.dialect, self.rule, self.metadata);
        let statement = match parser.stream.kind() {
            TokenKind::Keyword(Keyword::Select) => Statement::Select(parser.parse_select()?),
            TokenKind::Keyword(Keyword::Insert) => Statement::Insert(parser.parse_insert()?),
            _ => return Err(parser.stream.unexpected("SELECT or INSERT")),
        };
        parser.finish()?;
        debug!(
            dialect = self.dialect.name(),
            tables = statement.tables().iter().count(),
            conditions = statement.route_conditions().len(),
            tokens = statement.tokens().len(),
            parameters = statement.parameters_count(),
            "parsed statement"
        );
        Ok(statement)
    }
}

/// A token stream together with the collaborators every clause parser
/// consults. The clause parsers are implemented on this type, one module
/// per clause.
pub(crate) struct ClauseParser<'a> {
    pub(crate) stream: TokenStream<'a>,
    pub(crate) dialect: &'a dyn Dialect,
    pub(crate) rule: &'a ShardingRule,
    pub(crate) metadata: &'a ShardingTableMetaData,
}

impl<'a> ClauseParser<'a> {
    pub(crate) fn new(
        sql: &'a str,
        dialect: &'a dyn Dialect,
        rule: &'a ShardingRule,
        metadata: &'a ShardingTableMetaData,
    ) -> Self {
        Self {
            stream: TokenStream::new(sql),
            dialect,
            rule,
            metadata,
        }
    }

    /// Accepts an optional `;` and requires the end of input.
    pub(crate) fn finish(&mut self) -> Result<()> {
        self.stream.skip_if(&TokenKind::Semicolon);
        if self.stream.is_eof() {
            Ok(())
        } else {
            Err(self.stream.unexpected("end of input"))
        }
    }

    /// Returns the trimmed source text from `start` to the end of the
    /// last consumed token.
    pub(crate) fn text_from(&self, start: usize) -> String {
        self.stream
            .source()
            .get(start..self.stream.previous_end())
            .unwrap_or_default()
            .trim()
            .to_string()
    }

    /// Parses an optional alias: `AS name` or a bare identifier.
    pub(crate) fn parse_alias(&mut self) -> Result<Option<String>> {
        if self.stream.skip_if_keyword(&[Keyword::As]) {
            return match self.stream.kind().clone() {
                TokenKind::Identifier(name) | TokenKind::String(name) => {
                    self.stream.advance();
                    Ok(Some(name))
                }
                TokenKind::Keyword(_) => {
                    let span = self.stream.advance().span;
                    Ok(Some(span.text(self.stream.source()).to_string()))
                }
                _ => Err(self.stream.unexpected("alias")),
            };
        }
        match self.stream.kind().clone() {
            TokenKind::Identifier(name) => {
                self.stream.advance();
                Ok(Some(name))
            }
            _ => Ok(None),
        }
    }
}
