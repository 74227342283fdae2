//! # oxide-shard-core
//!
//! SQL parsing for a database sharding router.
//!
//! This crate provides:
//! - A tokenizer and clause-by-clause parser for SELECT and INSERT
//! - Route conditions: which values of which sharding columns a
//!   statement targets
//! - Rewrite tokens: positional edits that turn a logical statement into
//!   one that can run on every shard and be merged afterwards
//!
//! ## Routing
//!
//! ```rust
//! use oxide_shard_core::dialect::GenericDialect;
//! use oxide_shard_core::rule::RuleConfiguration;
//! use oxide_shard_core::{ConditionValue, SqlParser};
//!
//! let (rule, metadata) = RuleConfiguration::from_json(
//!     r#"{ "tables": [ { "name": "t_order", "sharding_columns": ["user_id"] } ] }"#,
//! )
//! .unwrap()
//! .build()
//! .unwrap();
//! let dialect = GenericDialect::new();
//! let parser = SqlParser::new(&dialect, &rule, &metadata);
//!
//! let statement = parser
//!     .parse("SELECT * FROM t_order WHERE user_id = ? AND status = 'PAID'")
//!     .unwrap();
//! let conditions = statement.route_conditions();
//! assert_eq!(conditions.len(), 1);
//! assert_eq!(conditions[0].column.name, "user_id");
//! assert_eq!(conditions[0].value(), Some(&ConditionValue::Placeholder(0)));
//! ```
//!
//! ## Derived columns
//!
//! Averages cannot be merged across shards, so every `AVG` gets a `COUNT`
//! and a `SUM` appended to the select list:
//!
//! ```rust
//! use oxide_shard_core::dialect::GenericDialect;
//! use oxide_shard_core::rule::{ShardingRule, ShardingTableMetaData};
//! use oxide_shard_core::SqlParser;
//!
//! let dialect = GenericDialect::new();
//! let rule = ShardingRule::default();
//! let metadata = ShardingTableMetaData::new();
//! let statement = SqlParser::new(&dialect, &rule, &metadata)
//!     .parse("SELECT AVG(price) FROM t_order")
//!     .unwrap();
//! let text = statement.tokens()[1].inserted_text().unwrap();
//! assert_eq!(text, ", COUNT(price) AS AVG_COUNT_0 , SUM(price) AS AVG_SUM_0 ");
//! ```

pub mod ast;
pub mod dialect;
pub mod lexer;
pub mod parser;
pub mod rule;
pub mod statement;

pub use ast::{Column, ConditionValue, RouteCondition, ShardingOperator};
pub use lexer::{Lexer, Token, TokenKind};
pub use parser::{ParseError, SqlParser};
pub use statement::{InsertStatement, SelectStatement, SqlToken, Statement};
