//! SQL Parser
//!
//! A hand-written clause-by-clause parser that extracts what a sharding
//! router needs from SELECT and INSERT statements: tables, route
//! conditions and positional rewrite tokens.

mod clause;
pub mod derived;
mod error;
mod expression;
mod insert;
mod parser;
mod select;

pub use error::{ParseError, Result};
pub use parser::SqlParser;
