//! Sharding rules and table metadata.
//!
//! Rules are usually loaded from JSON:
//!
//! ```rust
//! use oxide_shard_core::rule::RuleConfiguration;
//!
//! let config = RuleConfiguration::from_json(
//!     r#"{ "tables": [ { "name": "t_order", "sharding_columns": ["user_id"] } ] }"#,
//! )
//! .unwrap();
//! let (rule, _metadata) = config.build().unwrap();
//! assert!(rule.is_sharding_column("USER_ID", "t_order"));
//! ```

mod algorithm;
mod metadata;

use std::path::{Path, PathBuf};

use serde::Deserialize;

pub use algorithm::{AlgorithmExpression, InlineShardingAlgorithm};
pub use metadata::ShardingTableMetaData;

/// Errors raised while loading sharding rules.
#[derive(Debug, thiserror::Error)]
pub enum RuleError {
    /// The rule file could not be read.
    #[error("Failed to read rule file '{path}': {source}")]
    Io {
        /// Path of the rule file.
        path: PathBuf,
        /// Underlying error.
        source: std::io::Error,
    },

    /// The rule document is not valid JSON for a rule configuration.
    #[error("Invalid rule configuration: {0}")]
    Json(#[from] serde_json::Error),

    /// Two rules name the same logical table.
    #[error("Table '{0}' is configured more than once")]
    DuplicateTable(String),
}

/// Configuration of one logical table.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TableRuleConfiguration {
    /// Logical table name.
    pub name: String,
    /// Columns whose values select the shard.
    #[serde(default)]
    pub sharding_columns: Vec<String>,
    /// Inline expression of the sharding algorithm.
    #[serde(default)]
    pub algorithm_expression: Option<String>,
    /// Column filled with a generated key when an INSERT omits it.
    #[serde(default)]
    pub generate_key_column: Option<String>,
    /// Known columns, in declaration order.
    #[serde(default)]
    pub columns: Vec<String>,
}

/// The whole rule document.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RuleConfiguration {
    /// Per-table configuration.
    #[serde(default)]
    pub tables: Vec<TableRuleConfiguration>,
}

impl RuleConfiguration {
    /// Parses a configuration from JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`RuleError::Json`] if the document is malformed.
    pub fn from_json(json: &str) -> Result<Self, RuleError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads and parses a configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`RuleError::Io`] if the file cannot be read, or
    /// [`RuleError::Json`] if it is malformed.
    pub fn load(path: &Path) -> Result<Self, RuleError> {
        let json = std::fs::read_to_string(path).map_err(|source| RuleError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "loading sharding rules");
        Self::from_json(&json)
    }

    /// Builds the sharding rule and the table metadata.
    ///
    /// # Errors
    ///
    /// Returns [`RuleError::DuplicateTable`] if a table is configured twice.
    pub fn build(&self) -> Result<(ShardingRule, ShardingTableMetaData), RuleError> {
        let mut rule = ShardingRule::default();
        let mut metadata = ShardingTableMetaData::new();
        for table in &self.tables {
            if rule.find_table_rule(&table.name).is_some() {
                return Err(RuleError::DuplicateTable(table.name.clone()));
            }
            if !table.columns.is_empty() {
                metadata.insert(&table.name, table.columns.clone());
            }
            rule.add_table_rule(TableRule {
                logic_table: table.name.clone(),
                sharding_columns: table.sharding_columns.clone(),
                algorithm: table
                    .algorithm_expression
                    .clone()
                    .map(InlineShardingAlgorithm::new)
                    .unwrap_or_default(),
                generate_key_column: table.generate_key_column.clone(),
            });
        }
        tracing::debug!(tables = rule.table_rules.len(), "built sharding rule");
        Ok((rule, metadata))
    }
}

/// The sharding rule of one logical table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableRule {
    /// Logical table name.
    pub logic_table: String,
    /// Columns whose values select the shard.
    pub sharding_columns: Vec<String>,
    /// The sharding algorithm.
    pub algorithm: InlineShardingAlgorithm,
    /// Column filled with a generated key.
    pub generate_key_column: Option<String>,
}

impl TableRule {
    /// Returns true if `column` shards this table (case-insensitive).
    #[must_use]
    pub fn is_sharding_column(&self, column: &str) -> bool {
        self.sharding_columns
            .iter()
            .any(|c| c.eq_ignore_ascii_case(column))
    }
}

/// All table rules known to the router.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShardingRule {
    table_rules: Vec<TableRule>,
}

impl ShardingRule {
    /// Creates a rule set from table rules.
    #[must_use]
    pub const fn new(table_rules: Vec<TableRule>) -> Self {
        Self { table_rules }
    }

    /// Adds a table rule.
    pub fn add_table_rule(&mut self, table_rule: TableRule) {
        self.table_rules.push(table_rule);
    }

    /// Finds the rule of a logical table (case-insensitive).
    #[must_use]
    pub fn find_table_rule(&self, table: &str) -> Option<&TableRule> {
        self.table_rules
            .iter()
            .find(|r| r.logic_table.eq_ignore_ascii_case(table))
    }

    /// Finds the rule of a logical table for modification.
    pub fn find_table_rule_mut(&mut self, table: &str) -> Option<&mut TableRule> {
        self.table_rules
            .iter_mut()
            .find(|r| r.logic_table.eq_ignore_ascii_case(table))
    }

    /// Returns true if `column` of `table` is a sharding column.
    #[must_use]
    pub fn is_sharding_column(&self, column: &str, table: &str) -> bool {
        self.find_table_rule(table)
            .is_some_and(|r| r.is_sharding_column(column))
    }

    /// Returns the generate-key column of `table`, if configured.
    #[must_use]
    pub fn generate_key_column(&self, table: &str) -> Option<&str> {
        self.find_table_rule(table)
            .and_then(|r| r.generate_key_column.as_deref())
    }

    /// Iterates over the table rules.
    pub fn table_rules(&self) -> impl Iterator<Item = &TableRule> {
        self.table_rules.iter()
    }
}
