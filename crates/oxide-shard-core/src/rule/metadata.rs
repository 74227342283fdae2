//! Known column lists of logical tables.

use std::collections::HashMap;

/// Table name to column list, matched case-insensitively.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShardingTableMetaData {
    tables: HashMap<String, Vec<String>>,
}

impl ShardingTableMetaData {
    /// Creates empty metadata.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers the columns of `table`, replacing any previous entry.
    pub fn insert(&mut self, table: &str, columns: Vec<String>) {
        self.tables.insert(table.to_ascii_lowercase(), columns);
    }

    /// Returns true if `table` is known.
    #[must_use]
    pub fn contains_table(&self, table: &str) -> bool {
        self.tables.contains_key(&table.to_ascii_lowercase())
    }

    /// Returns true if `table` is known to have `column`.
    #[must_use]
    pub fn contains_column(&self, table: &str, column: &str) -> bool {
        self.columns(table)
            .is_some_and(|columns| columns.iter().any(|c| c.eq_ignore_ascii_case(column)))
    }

    /// Returns the columns of `table` in declaration order.
    #[must_use]
    pub fn columns(&self, table: &str) -> Option<&[String]> {
        self.tables
            .get(&table.to_ascii_lowercase())
            .map(Vec::as_slice)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_ignores_case() {
        let mut metadata = ShardingTableMetaData::new();
        metadata.insert("T_Order", vec!["order_id".to_string(), "user_id".to_string()]);
        assert!(metadata.contains_table("t_order"));
        assert!(metadata.contains_column("t_order", "USER_ID"));
        assert!(!metadata.contains_column("t_order", "status"));
        assert!(!metadata.contains_column("t_user", "user_id"));
        assert_eq!(metadata.columns("T_ORDER").map(<[String]>::len), Some(2));
    }
}
