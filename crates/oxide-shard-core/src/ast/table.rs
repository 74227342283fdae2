//! Table references collected from FROM and INTO clauses.

use serde::Serialize;

/// A referenced table with its optional alias.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Table {
    /// Table name, without schema.
    pub name: String,
    /// Alias, if one was given.
    pub alias: Option<String>,
}

impl Table {
    /// Creates a new table reference.
    #[must_use]
    pub fn new(name: impl Into<String>, alias: Option<String>) -> Self {
        Self {
            name: name.into(),
            alias,
        }
    }
}

/// The tables referenced by a statement, in order of appearance.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Tables {
    tables: Vec<Table>,
}

impl Tables {
    /// Adds a table unless one with the same name is already present.
    pub fn add(&mut self, table: Table) {
        if !self.contains(&table.name) {
            self.tables.push(table);
        }
    }

    /// Returns true if a table with this name is present.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.tables.iter().any(|t| t.name.eq_ignore_ascii_case(name))
    }

    /// Returns true if no tables are present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    /// Returns true if exactly one table is present.
    #[must_use]
    pub fn is_single_table(&self) -> bool {
        self.tables.len() == 1
    }

    /// Returns the name of the first table.
    #[must_use]
    pub fn single_table_name(&self) -> Option<&str> {
        self.tables.first().map(|t| t.name.as_str())
    }

    /// Finds a table by alias, then by name (case-insensitive).
    #[must_use]
    pub fn find(&self, name_or_alias: &str) -> Option<&Table> {
        self.tables
            .iter()
            .find(|t| {
                t.alias
                    .as_deref()
                    .is_some_and(|alias| alias.eq_ignore_ascii_case(name_or_alias))
            })
            .or_else(|| {
                self.tables
                    .iter()
                    .find(|t| t.name.eq_ignore_ascii_case(name_or_alias))
            })
    }

    /// Iterates over the tables.
    pub fn iter(&self) -> impl Iterator<Item = &Table> {
        self.tables.iter()
    }

    /// Appends every table of `other` not already present.
    pub fn extend(&mut self, other: Self) {
        for table in other.tables {
            self.add(table);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_prefers_alias() {
        let mut tables = Tables::default();
        tables.add(Table::new("t_order", Some("o".to_string())));
        tables.add(Table::new("o", None));
        assert_eq!(tables.find("O").map(|t| t.name.as_str()), Some("t_order"));
        assert_eq!(
            tables.find("t_order").map(|t| t.name.as_str()),
            Some("t_order")
        );
        assert!(tables.find("t_user").is_none());
    }

    #[test]
    fn test_add_ignores_duplicates() {
        let mut tables = Tables::default();
        tables.add(Table::new("t_order", None));
        tables.add(Table::new("T_ORDER", Some("x".to_string())));
        assert!(tables.is_single_table());
        assert_eq!(tables.single_table_name(), Some("t_order"));
    }
}
