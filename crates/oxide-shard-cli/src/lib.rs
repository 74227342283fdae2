//! Support code for the `oxide-shard` command-line tool.
//!
//! The binary parses one statement against a rule file and shows what a
//! router would see: tables, route conditions, rewrite tokens and the SQL
//! with every insertion applied.

pub mod report;
pub mod rewrite;

pub use report::ParseReport;
pub use rewrite::apply_insertions;
