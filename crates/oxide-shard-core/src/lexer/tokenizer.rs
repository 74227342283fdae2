//! SQL tokenizer.

use super::{Keyword, Span, Token, TokenKind};

/// A lexer that tokenizes SQL input one token at a time.
///
/// Cloning a lexer is cheap and yields an independent cursor, which is how
/// the token stream looks ahead.
#[derive(Debug, Clone)]
pub struct Lexer<'a> {
    /// The input source code.
    input: &'a str,
    /// The current byte position.
    pos: usize,
    /// The byte position of the start of the current token.
    start: usize,
}

impl<'a> Lexer<'a> {
    /// Creates a new lexer for the given input.
    #[must_use]
    pub const fn new(input: &'a str) -> Self {
        Self {
            input,
            pos: 0,
            start: 0,
        }
    }

    /// Returns the input this lexer scans.
    #[must_use]
    pub const fn input(&self) -> &'a str {
        self.input
    }

    fn peek(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    fn peek_next(&self) -> Option<char> {
        let mut chars = self.input[self.pos..].chars();
        chars.next();
        chars.next()
    }

    fn advance(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    fn advance_while(&mut self, pred: impl Fn(char) -> bool) {
        while self.peek().is_some_and(&pred) {
            self.advance();
        }
    }

    /// Skips whitespace and `--`, `#` and `/* */` comments.
    fn skip_whitespace_and_comments(&mut self) {
        loop {
            self.advance_while(char::is_whitespace);
            match (self.peek(), self.peek_next()) {
                (Some('-'), Some('-')) | (Some('#'), _) => {
                    self.advance_while(|c| c != '\n');
                }
                (Some('/'), Some('*')) => {
                    self.advance();
                    self.advance();
                    loop {
                        match self.advance() {
                            Some('*') if self.peek() == Some('/') => {
                                self.advance();
                                break;
                            }
                            None => break,
                            _ => {}
                        }
                    }
                }
                _ => break,
            }
        }
    }

    fn make_token(&self, kind: TokenKind) -> Token {
        Token::new(kind, Span::new(self.start, self.pos))
    }

    fn error(&self, message: &str) -> Token {
        self.make_token(TokenKind::Error(message.to_string()))
    }

    fn scan_word(&mut self) -> Token {
        self.advance_while(|c| c.is_alphanumeric() || c == '_' || c == '$');
        let text = &self.input[self.start..self.pos];
        match Keyword::from_str(text) {
            Some(keyword) => self.make_token(TokenKind::Keyword(keyword)),
            None => self.make_token(TokenKind::Identifier(text.to_string())),
        }
    }

    /// Scans text enclosed by `quote`, where a doubled quote stands for one.
    ///
    /// Returns `None` when the closing quote is missing.
    fn scan_enclosed(&mut self, quote: char) -> Option<String> {
        let mut value = String::new();
        loop {
            match self.advance()? {
                c if c == quote => {
                    if self.peek() == Some(quote) {
                        self.advance();
                        value.push(quote);
                    } else {
                        return Some(value);
                    }
                }
                '\\' if quote == '\'' => {
                    let escaped = self.advance()?;
                    value.push(escaped);
                }
                c => value.push(c),
            }
        }
    }

    fn scan_number(&mut self, first: char) -> Token {
        if first == '0' && matches!(self.peek(), Some('x' | 'X')) {
            self.advance();
            self.advance_while(|c| c.is_ascii_hexdigit());
        } else {
            self.advance_while(|c| c.is_ascii_digit());
            if self.peek() == Some('.') && self.peek_next().is_some_and(|c| c.is_ascii_digit()) {
                self.advance();
                self.advance_while(|c| c.is_ascii_digit());
            }
            if matches!(self.peek(), Some('e' | 'E')) {
                self.advance();
                if matches!(self.peek(), Some('+' | '-')) {
                    self.advance();
                }
                self.advance_while(|c| c.is_ascii_digit());
            }
        }
        let text = &self.input[self.start..self.pos];
        self.make_token(TokenKind::Number(text.to_string()))
    }

    fn scan_variable(&mut self) -> Token {
        if self.peek() == Some('@') {
            self.advance();
        }
        self.advance_while(|c| c.is_alphanumeric() || c == '_' || c == '.');
        let name = self.input[self.start..self.pos].trim_start_matches('@');
        if name.is_empty() {
            return self.error("empty variable name");
        }
        self.make_token(TokenKind::Variable(name.to_string()))
    }

    /// Scans the next token.
    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace_and_comments();
        self.start = self.pos;

        let Some(c) = self.advance() else {
            return self.make_token(TokenKind::Eof);
        };

        let kind = match c {
            '(' => TokenKind::LeftParen,
            ')' => TokenKind::RightParen,
            ',' => TokenKind::Comma,
            ';' => TokenKind::Semicolon,
            '.' => TokenKind::Dot,
            '?' => TokenKind::Question,
            '+' => TokenKind::Plus,
            '-' => TokenKind::Minus,
            '*' => TokenKind::Star,
            '/' => TokenKind::Slash,
            '%' => TokenKind::Percent,
            '^' => TokenKind::Caret,
            '~' => TokenKind::Tilde,
            '=' => TokenKind::Eq,
            '<' => match self.peek() {
                Some('=') => {
                    self.advance();
                    if self.peek() == Some('>') {
                        self.advance();
                        TokenKind::NullSafeEq
                    } else {
                        TokenKind::LtEq
                    }
                }
                Some('>') => {
                    self.advance();
                    TokenKind::NotEq
                }
                _ => TokenKind::Lt,
            },
            '>' => {
                if self.peek() == Some('=') {
                    self.advance();
                    TokenKind::GtEq
                } else {
                    TokenKind::Gt
                }
            }
            '!' => {
                if self.peek() == Some('=') {
                    self.advance();
                    TokenKind::NotEq
                } else {
                    TokenKind::Bang
                }
            }
            '|' => {
                if self.peek() == Some('|') {
                    self.advance();
                    TokenKind::DoubleBar
                } else {
                    TokenKind::Bar
                }
            }
            '&' => {
                if self.peek() == Some('&') {
                    self.advance();
                    TokenKind::DoubleAmp
                } else {
                    TokenKind::Amp
                }
            }
            '\'' => match self.scan_enclosed('\'') {
                Some(value) => TokenKind::String(value),
                None => return self.error("unterminated string literal"),
            },
            '"' | '`' => match self.scan_enclosed(c) {
                Some(name) => TokenKind::Identifier(name),
                None => return self.error("unterminated quoted identifier"),
            },
            '[' => match self.scan_enclosed(']') {
                Some(name) => TokenKind::Identifier(name),
                None => return self.error("unterminated bracketed identifier"),
            },
            '@' => return self.scan_variable(),
            c if c.is_ascii_digit() => return self.scan_number(c),
            c if c.is_alphabetic() || c == '_' => return self.scan_word(),
            other => TokenKind::Error(format!("unexpected character {other:?}")),
        };
        self.make_token(kind)
    }

    /// Tokenizes the entire input, ending with an EOF token.
    #[must_use]
    pub fn tokenize(&mut self) -> Vec<Token> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token();
            let is_eof = token.is_eof();
            tokens.push(token);
            if is_eof {
                break;
            }
        }
        tokens
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token_kinds(input: &str) -> Vec<TokenKind> {
        Lexer::new(input)
            .tokenize()
            .into_iter()
            .map(|t| t.kind)
            .collect()
    }

    fn ident(name: &str) -> TokenKind {
        TokenKind::Identifier(name.to_string())
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(token_kinds("  \n\t "), vec![TokenKind::Eof]);
    }

    #[test]
    fn test_comments() {
        assert_eq!(
            token_kinds("SELECT -- one\n /* two */ # three\nFROM"),
            vec![
                TokenKind::Keyword(Keyword::Select),
                TokenKind::Keyword(Keyword::From),
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_quoted_identifiers() {
        assert_eq!(
            token_kinds("`user_id` \"order id\" [status]"),
            vec![ident("user_id"), ident("order id"), ident("status"), TokenKind::Eof]
        );
    }

    #[test]
    fn test_numbers_keep_raw_text() {
        assert_eq!(
            token_kinds("42 3.14 0x1F 1e10"),
            vec![
                TokenKind::Number("42".to_string()),
                TokenKind::Number("3.14".to_string()),
                TokenKind::Number("0x1F".to_string()),
                TokenKind::Number("1e10".to_string()),
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_strings() {
        assert_eq!(
            token_kinds(r"'it''s' 'a\'b'"),
            vec![
                TokenKind::String("it's".to_string()),
                TokenKind::String("a'b".to_string()),
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_operators() {
        assert_eq!(
            token_kinds("= != <> < <= <=> > >= || && | & ^"),
            vec![
                TokenKind::Eq,
                TokenKind::NotEq,
                TokenKind::NotEq,
                TokenKind::Lt,
                TokenKind::LtEq,
                TokenKind::NullSafeEq,
                TokenKind::Gt,
                TokenKind::GtEq,
                TokenKind::DoubleBar,
                TokenKind::DoubleAmp,
                TokenKind::Bar,
                TokenKind::Amp,
                TokenKind::Caret,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_variables() {
        assert_eq!(
            token_kinds("@total @@session.sql_mode"),
            vec![
                TokenKind::Variable("total".to_string()),
                TokenKind::Variable("session.sql_mode".to_string()),
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_span_tracking() {
        let tokens = Lexer::new("SELECT id FROM t").tokenize();
        assert_eq!(tokens[0].span, Span::new(0, 6));
        assert_eq!(tokens[1].span, Span::new(7, 9));
        assert_eq!(tokens[2].span, Span::new(10, 14));
        assert_eq!(tokens[4].span, Span::new(16, 16));
    }

    #[test]
    fn test_unterminated_string() {
        assert!(matches!(
            token_kinds("'abc")[0],
            TokenKind::Error(ref message) if message.contains("unterminated")
        ));
    }
}
