//! Token types for the SQL lexer.

use core::fmt;

use super::Span;

/// SQL keywords recognised by the routing parser.
///
/// Only words that steer clause recognition are keywords; everything else
/// (function names, data types) lexes as an identifier and is passed
/// through unexamined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Keyword {
    // Query clauses
    Select,
    From,
    Where,
    Group,
    Order,
    By,
    Having,
    Limit,
    Offset,
    Distinct,
    All,
    As,

    // Joins
    Join,
    Inner,
    Left,
    Right,
    Full,
    Outer,
    Cross,
    On,
    Using,

    // Set operations
    Union,
    Intersect,
    Except,

    // Data manipulation
    Insert,
    Into,
    Values,
    Value,
    Set,
    Update,
    Duplicate,
    Key,

    // Predicates
    And,
    Or,
    Not,
    In,
    Between,
    Like,
    Is,
    Null,
    True,
    False,
    Exists,

    // Ordering
    Asc,
    Desc,
    With,
    Rollup,

    // Aggregates
    Count,
    Sum,
    Avg,
    Min,
    Max,

    // Conditional expressions
    Case,
    When,
    Then,
    Else,
    End,
}

impl Keyword {
    /// Attempts to parse a keyword from a word (case-insensitive).
    #[must_use]
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        let keyword = match s.to_ascii_uppercase().as_str() {
            "SELECT" => Self::Select,
            "FROM" => Self::From,
            "WHERE" => Self::Where,
            "GROUP" => Self::Group,
            "ORDER" => Self::Order,
            "BY" => Self::By,
            "HAVING" => Self::Having,
            "LIMIT" => Self::Limit,
            "OFFSET" => Self::Offset,
            "DISTINCT" => Self::Distinct,
            "ALL" => Self::All,
            "AS" => Self::As,
            "JOIN" => Self::Join,
            "INNER" => Self::Inner,
            "LEFT" => Self::Left,
            "RIGHT" => Self::Right,
            "FULL" => Self::Full,
            "OUTER" => Self::Outer,
            "CROSS" => Self::Cross,
            "ON" => Self::On,
            "USING" => Self::Using,
            "UNION" => Self::Union,
            "INTERSECT" => Self::Intersect,
            "EXCEPT" => Self::Except,
            "INSERT" => Self::Insert,
            "INTO" => Self::Into,
            "VALUES" => Self::Values,
            "VALUE" => Self::Value,
            "SET" => Self::Set,
            "UPDATE" => Self::Update,
            "DUPLICATE" => Self::Duplicate,
            "KEY" => Self::Key,
            "AND" => Self::And,
            "OR" => Self::Or,
            "NOT" => Self::Not,
            "IN" => Self::In,
            "BETWEEN" => Self::Between,
            "LIKE" => Self::Like,
            "IS" => Self::Is,
            "NULL" => Self::Null,
            "TRUE" => Self::True,
            "FALSE" => Self::False,
            "EXISTS" => Self::Exists,
            "ASC" => Self::Asc,
            "DESC" => Self::Desc,
            "WITH" => Self::With,
            "ROLLUP" => Self::Rollup,
            "COUNT" => Self::Count,
            "SUM" => Self::Sum,
            "AVG" => Self::Avg,
            "MIN" => Self::Min,
            "MAX" => Self::Max,
            "CASE" => Self::Case,
            "WHEN" => Self::When,
            "THEN" => Self::Then,
            "ELSE" => Self::Else,
            "END" => Self::End,
            _ => return None,
        };
        Some(keyword)
    }

    /// Returns the keyword as written in SQL.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Select => "SELECT",
            Self::From => "FROM",
            Self::Where => "WHERE",
            Self::Group => "GROUP",
            Self::Order => "ORDER",
            Self::By => "BY",
            Self::Having => "HAVING",
            Self::Limit => "LIMIT",
            Self::Offset => "OFFSET",
            Self::Distinct => "DISTINCT",
            Self::All => "ALL",
            Self::As => "AS",
            Self::Join => "JOIN",
            Self::Inner => "INNER",
            Self::Left => "LEFT",
            Self::Right => "RIGHT",
            Self::Full => "FULL",
            Self::Outer => "OUTER",
            Self::Cross => "CROSS",
            Self::On => "ON",
            Self::Using => "USING",
            Self::Union => "UNION",
            Self::Intersect => "INTERSECT",
            Self::Except => "EXCEPT",
            Self::Insert => "INSERT",
            Self::Into => "INTO",
            Self::Values => "VALUES",
            Self::Value => "VALUE",
            Self::Set => "SET",
            Self::Update => "UPDATE",
            Self::Duplicate => "DUPLICATE",
            Self::Key => "KEY",
            Self::And => "AND",
            Self::Or => "OR",
            Self::Not => "NOT",
            Self::In => "IN",
            Self::Between => "BETWEEN",
            Self::Like => "LIKE",
            Self::Is => "IS",
            Self::Null => "NULL",
            Self::True => "TRUE",
            Self::False => "FALSE",
            Self::Exists => "EXISTS",
            Self::Asc => "ASC",
            Self::Desc => "DESC",
            Self::With => "WITH",
            Self::Rollup => "ROLLUP",
            Self::Count => "COUNT",
            Self::Sum => "SUM",
            Self::Avg => "AVG",
            Self::Min => "MIN",
            Self::Max => "MAX",
            Self::Case => "CASE",
            Self::When => "WHEN",
            Self::Then => "THEN",
            Self::Else => "ELSE",
            Self::End => "END",
        }
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The kind of token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenKind {
    // Literals
    /// Integer, decimal or hexadecimal number, kept as written.
    Number(String),
    /// String literal with quotes removed and escapes resolved.
    String(String),

    // Identifiers and keywords
    /// Identifier, unquoted if it was written with quotes or backticks.
    Identifier(String),
    /// Session or user variable (`@name`, `@@name`).
    Variable(String),
    /// SQL keyword.
    Keyword(Keyword),

    // Operators
    /// +
    Plus,
    /// -
    Minus,
    /// *
    Star,
    /// /
    Slash,
    /// %
    Percent,
    /// =
    Eq,
    /// != or <>
    NotEq,
    /// <
    Lt,
    /// <=
    LtEq,
    /// >
    Gt,
    /// >=
    GtEq,
    /// <=>
    NullSafeEq,
    /// ||
    DoubleBar,
    /// &&
    DoubleAmp,
    /// &
    Amp,
    /// |
    Bar,
    /// ^
    Caret,
    /// ~
    Tilde,
    /// !
    Bang,

    // Delimiters
    /// (
    LeftParen,
    /// )
    RightParen,
    /// ,
    Comma,
    /// ;
    Semicolon,
    /// .
    Dot,
    /// ?
    Question,

    // Special
    /// End of input.
    Eof,
    /// Input the lexer could not scan.
    Error(String),
}

impl TokenKind {
    /// Returns true for the arithmetic and bitwise operators that glue two
    /// operands into a composite expression.
    #[must_use]
    pub const fn is_composite_operator(&self) -> bool {
        matches!(
            self,
            Self::Plus
                | Self::Minus
                | Self::Star
                | Self::Slash
                | Self::Percent
                | Self::Amp
                | Self::Bar
                | Self::DoubleAmp
                | Self::DoubleBar
                | Self::Caret
        )
    }

    /// Returns true for comparison operators.
    #[must_use]
    pub const fn is_comparison(&self) -> bool {
        matches!(
            self,
            Self::Eq
                | Self::NotEq
                | Self::Lt
                | Self::LtEq
                | Self::Gt
                | Self::GtEq
                | Self::NullSafeEq
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "number {n}"),
            Self::String(s) => write!(f, "string '{s}'"),
            Self::Identifier(name) => write!(f, "identifier {name}"),
            Self::Variable(name) => write!(f, "variable @{name}"),
            Self::Keyword(kw) => write!(f, "keyword {kw}"),
            Self::Plus => f.write_str("'+'"),
            Self::Minus => f.write_str("'-'"),
            Self::Star => f.write_str("'*'"),
            Self::Slash => f.write_str("'/'"),
            Self::Percent => f.write_str("'%'"),
            Self::Eq => f.write_str("'='"),
            Self::NotEq => f.write_str("'<>'"),
            Self::Lt => f.write_str("'<'"),
            Self::LtEq => f.write_str("'<='"),
            Self::Gt => f.write_str("'>'"),
            Self::GtEq => f.write_str("'>='"),
            Self::NullSafeEq => f.write_str("'<=>'"),
            Self::DoubleBar => f.write_str("'||'"),
            Self::DoubleAmp => f.write_str("'&&'"),
            Self::Amp => f.write_str("'&'"),
            Self::Bar => f.write_str("'|'"),
            Self::Caret => f.write_str("'^'"),
            Self::Tilde => f.write_str("'~'"),
            Self::Bang => f.write_str("'!'"),
            Self::LeftParen => f.write_str("'('"),
            Self::RightParen => f.write_str("')'"),
            Self::Comma => f.write_str("','"),
            Self::Semicolon => f.write_str("';'"),
            Self::Dot => f.write_str("'.'"),
            Self::Question => f.write_str("'?'"),
            Self::Eof => f.write_str("end of input"),
            Self::Error(message) => write!(f, "invalid input ({message})"),
        }
    }
}

/// A token with its span in the source code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// The kind of token.
    pub kind: TokenKind,
    /// The location in the source code.
    pub span: Span,
}

impl Token {
    /// Creates a new token.
    #[must_use]
    pub const fn new(kind: TokenKind, span: Span) -> Self {
        Self { kind, span }
    }

    /// Returns true if this is an EOF token.
    #[must_use]
    pub const fn is_eof(&self) -> bool {
        matches!(self.kind, TokenKind::Eof)
    }

    /// Returns the keyword if this is a keyword token.
    #[must_use]
    pub const fn as_keyword(&self) -> Option<Keyword> {
        match &self.kind {
            TokenKind::Keyword(kw) => Some(*kw),
            _ => None,
        }
    }
}
