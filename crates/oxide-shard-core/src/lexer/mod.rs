//! SQL lexer and the token stream the clause parsers drive.
//!
//! The lexer works on demand: the [`TokenStream`] pulls one token at a time
//! and keeps byte offsets of every token so that rewrite tokens can later be
//! spliced into the original SQL text.

mod span;
mod stream;
mod token;
mod tokenizer;

pub use span::Span;
pub use stream::TokenStream;
pub use token::{Keyword, Token, TokenKind};
pub use tokenizer::Lexer;
