//! The INSERT statement model.

use super::{SqlToken, StatementContext};
use crate::ast::{Column, InsertValue, InsertValuesKind};

/// A parsed INSERT.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InsertStatement {
    /// Tables, route conditions, tokens and parameter count.
    pub context: StatementContext,
    /// Target columns, explicit or taken from table metadata.
    pub columns: Vec<Column>,
    /// One entry per inserted row.
    pub insert_values: Vec<InsertValue>,
    /// Generate-key column the statement leaves out, if any.
    pub generate_key_column: Option<String>,
}

impl InsertStatement {
    /// Returns the target table name.
    #[must_use]
    pub fn table_name(&self) -> Option<&str> {
        self.context.tables.single_table_name()
    }

    /// Returns true if `name` is one of the target columns.
    #[must_use]
    pub fn contains_column(&self, name: &str) -> bool {
        self.columns.iter().any(|c| c.name.eq_ignore_ascii_case(name))
    }

    /// Sets the form of the recorded insert-values token.
    pub fn set_insert_values_kind(&mut self, kind: InsertValuesKind) {
        for token in &mut self.context.tokens {
            if let SqlToken::InsertValues(values) = token {
                values.kind = kind;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::statement::InsertValuesToken;

    #[test]
    fn test_set_insert_values_kind() {
        let mut statement = InsertStatement::default();
        statement
            .context
            .add_token(SqlToken::InsertValues(InsertValuesToken {
                start_index: 20,
                kind: InsertValuesKind::Values,
            }));
        statement.set_insert_values_kind(InsertValuesKind::Set);
        assert!(matches!(
            statement.context.tokens[0],
            SqlToken::InsertValues(InsertValuesToken {
                kind: InsertValuesKind::Set,
                ..
            })
        ));
    }

    #[test]
    fn test_contains_column() {
        let statement = InsertStatement {
            columns: vec![Column::new("user_id", "t_order")],
            ..InsertStatement::default()
        };
        assert!(statement.contains_column("USER_ID"));
        assert!(!statement.contains_column("order_id"));
    }
}
