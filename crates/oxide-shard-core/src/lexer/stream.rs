//! Token stream façade used by every clause parser.

use super::{Keyword, Lexer, Span, Token, TokenKind};
use crate::parser::{ParseError, Result};

/// A cursor over the tokens of one SQL statement.
///
/// Each parse owns its stream exclusively. The stream only moves forward;
/// look-ahead works on a cloned lexer and never consumes input.
pub struct TokenStream<'a> {
    lexer: Lexer<'a>,
    current: Token,
    previous: Token,
}

impl<'a> TokenStream<'a> {
    /// Creates a stream positioned on the first token of `input`.
    #[must_use]
    pub fn new(input: &'a str) -> Self {
        let mut lexer = Lexer::new(input);
        let current = lexer.next_token();
        Self {
            lexer,
            current,
            previous: Token::new(TokenKind::Eof, Span::default()),
        }
    }

    /// Returns the SQL text being parsed.
    #[must_use]
    pub const fn source(&self) -> &'a str {
        self.lexer.input()
    }

    /// Returns the current token.
    #[must_use]
    pub const fn current(&self) -> &Token {
        &self.current
    }

    /// Returns the kind of the current token.
    #[must_use]
    pub const fn kind(&self) -> &TokenKind {
        &self.current.kind
    }

    /// Returns the start offset of the current token.
    #[must_use]
    pub const fn current_offset(&self) -> usize {
        self.current.span.start
    }

    /// Returns the end offset of the most recently consumed token.
    #[must_use]
    pub const fn previous_end(&self) -> usize {
        self.previous.span.end
    }

    /// Returns true once the whole input is consumed.
    #[must_use]
    pub const fn is_eof(&self) -> bool {
        self.current.is_eof()
    }

    /// Returns the kind of the token after the current one.
    #[must_use]
    pub fn peek_kind(&self) -> TokenKind {
        self.peek_nth_kind(1)
    }

    /// Returns the kind of the token `n` positions after the current one.
    #[must_use]
    pub fn peek_nth_kind(&self, n: usize) -> TokenKind {
        let mut lexer = self.lexer.clone();
        let mut kind = lexer.next_token().kind;
        for _ in 1..n {
            kind = lexer.next_token().kind;
        }
        kind
    }

    /// Moves to the next token and returns the one just left.
    pub fn advance(&mut self) -> Token {
        let next = self.lexer.next_token();
        self.previous = core::mem::replace(&mut self.current, next);
        self.previous.clone()
    }

    /// Checks if the current token has the same kind as `kind`, ignoring
    /// any payload.
    #[must_use]
    pub fn check(&self, kind: &TokenKind) -> bool {
        core::mem::discriminant(&self.current.kind) == core::mem::discriminant(kind)
    }

    /// Checks if the current token is the given keyword.
    #[must_use]
    pub fn check_keyword(&self, keyword: Keyword) -> bool {
        matches!(&self.current.kind, TokenKind::Keyword(kw) if *kw == keyword)
    }

    /// Checks if the current token is any of `keywords`.
    #[must_use]
    pub fn equal_any_keyword(&self, keywords: &[Keyword]) -> bool {
        keywords.iter().any(|kw| self.check_keyword(*kw))
    }

    /// Consumes the current token if it matches `kind`.
    pub fn skip_if(&mut self, kind: &TokenKind) -> bool {
        if self.check(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Consumes the current token if it is one of `keywords`.
    pub fn skip_if_keyword(&mut self, keywords: &[Keyword]) -> bool {
        if self.equal_any_keyword(keywords) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Consumes every consecutive token that is one of `keywords`.
    pub fn skip_all_keywords(&mut self, keywords: &[Keyword]) {
        while self.skip_if_keyword(keywords) {}
    }

    /// Consumes the current token, failing if it is not of `kind`.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::Unexpected`] naming `kind` when it is absent.
    pub fn accept(&mut self, kind: &TokenKind) -> Result<Token> {
        if self.check(kind) {
            Ok(self.advance())
        } else {
            Err(self.unexpected(kind.to_string()))
        }
    }

    /// Consumes the current token, failing if it is not `keyword`.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::Unexpected`] naming `keyword` when it is absent.
    pub fn accept_keyword(&mut self, keyword: Keyword) -> Result<Token> {
        if self.check_keyword(keyword) {
            Ok(self.advance())
        } else {
            Err(self.unexpected(keyword.as_str()))
        }
    }

    /// Consumes an identifier and returns its name and span.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::Unexpected`] when the current token is not an
    /// identifier.
    pub fn accept_identifier(&mut self) -> Result<(String, Span)> {
        match &self.current.kind {
            TokenKind::Identifier(name) => {
                let name = name.clone();
                let span = self.advance().span;
                Ok((name, span))
            }
            _ => Err(self.unexpected("identifier")),
        }
    }

    /// Fails eagerly when the current token is one of `keywords`.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::Unsupported`] naming the keyword found.
    pub fn unsupported_if_keyword(&self, keywords: &[Keyword]) -> Result<()> {
        match self.current.as_keyword() {
            Some(kw) if keywords.contains(&kw) => {
                Err(ParseError::unsupported(kw.as_str(), self.current.span))
            }
            _ => Ok(()),
        }
    }

    /// Skips a balanced parenthesised group starting at the current token.
    ///
    /// Does nothing unless the current token is `(`. Returns the number of
    /// `?` placeholders passed over, which the caller must account for in
    /// its parameter index.
    ///
    /// # Errors
    ///
    /// Returns an error if input ends before the group is closed.
    pub fn skip_parentheses(&mut self) -> Result<usize> {
        let mut placeholders = 0;
        if !self.check(&TokenKind::LeftParen) {
            return Ok(placeholders);
        }
        let mut depth = 0_usize;
        loop {
            match &self.current.kind {
                TokenKind::LeftParen => depth += 1,
                TokenKind::RightParen => depth -= 1,
                TokenKind::Question => placeholders += 1,
                TokenKind::Eof | TokenKind::Error(_) => return Err(self.unexpected("')'")),
                _ => {}
            }
            self.advance();
            if depth == 0 {
                return Ok(placeholders);
            }
        }
    }

    /// Builds an error reporting that `expected` was wanted here.
    #[must_use]
    pub fn unexpected(&self, expected: impl Into<String>) -> ParseError {
        ParseError::unexpected(expected, self.current.kind.clone(), self.current.span)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accept_and_skip() {
        let mut stream = TokenStream::new("SET a = 1");
        assert!(stream.skip_if_keyword(&[Keyword::Set]));
        let (name, span) = stream.accept_identifier().unwrap();
        assert_eq!(name, "a");
        assert_eq!(span, Span::new(4, 5));
        assert!(stream.accept(&TokenKind::Eq).is_ok());
        assert!(stream.accept(&TokenKind::Eq).is_err());
    }

    #[test]
    fn test_skip_parentheses_counts_placeholders() {
        let mut stream = TokenStream::new("(?, (1, ?)) x");
        assert_eq!(stream.skip_parentheses().unwrap(), 2);
        assert_eq!(
            stream.kind(),
            &TokenKind::Identifier("x".to_string())
        );
    }

    #[test]
    fn test_skip_parentheses_unbalanced() {
        let mut stream = TokenStream::new("(1, 2");
        assert!(stream.skip_parentheses().is_err());
    }

    #[test]
    fn test_unsupported_if_keyword() {
        let stream = TokenStream::new("INTO t");
        let err = stream.unsupported_if_keyword(&[Keyword::Into]).unwrap_err();
        assert!(matches!(err, ParseError::Unsupported { ref construct, .. } if construct == "INTO"));
    }

    #[test]
    fn test_peek_does_not_consume() {
        let stream = TokenStream::new("( SELECT");
        assert_eq!(stream.peek_kind(), TokenKind::Keyword(Keyword::Select));
        assert_eq!(stream.kind(), &TokenKind::LeftParen);
    }

    #[test]
    fn test_peek_nth() {
        let stream = TokenStream::new("o . * FROM");
        assert_eq!(stream.peek_nth_kind(1), TokenKind::Dot);
        assert_eq!(stream.peek_nth_kind(2), TokenKind::Star);
        assert_eq!(stream.peek_nth_kind(5), TokenKind::Eof);
    }

    #[test]
    fn test_offsets() {
        let mut stream = TokenStream::new("SELECT id FROM t");
        stream.advance();
        stream.advance();
        assert_eq!(stream.current_offset(), 10);
        assert_eq!(stream.previous_end(), 9);
    }
}
