//! # oxide-shard-mysql
//!
//! MySQL dialect for `oxide-shard-core`.
//!
//! # How MySQL differs from the generic dialect
//!
//! - **[INSERT ... SET]**: MySQL accepts `INSERT INTO t SET a = 1, b = 2`
//!   as an alternative to a column list with `VALUES`.
//! - **[LIMIT]**: besides `LIMIT n OFFSET m`, MySQL accepts the
//!   `LIMIT m, n` form with the offset first.
//! - **`GROUP BY ... WITH ROLLUP`**: the modifier is accepted after the
//!   grouping list and does not affect routing.
//! - **Identifier quoting**: backticks. See [MySQL identifiers].
//!
//! [INSERT ... SET]: https://dev.mysql.com/doc/refman/8.0/en/insert.html
//! [LIMIT]: https://dev.mysql.com/doc/refman/8.0/en/select.html
//! [MySQL identifiers]: https://dev.mysql.com/doc/refman/8.0/en/identifiers.html
//!
//! ## Example
//!
//! ```rust
//! use oxide_shard_core::rule::{ShardingRule, ShardingTableMetaData};
//! use oxide_shard_core::{SqlParser, Statement};
//! use oxide_shard_mysql::MySqlDialect;
//!
//! let dialect = MySqlDialect::new();
//! let rule = ShardingRule::default();
//! let metadata = ShardingTableMetaData::new();
//! let parser = SqlParser::new(&dialect, &rule, &metadata);
//!
//! let statement = parser
//!     .parse("INSERT INTO `t_user` SET `name` = ?, age = 30")
//!     .unwrap();
//! assert!(matches!(statement, Statement::Insert(_)));
//! assert_eq!(statement.parameters_count(), 1);
//! ```

mod dialect;

pub use dialect::MySqlDialect;
