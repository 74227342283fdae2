//! Columns and the route conditions extracted for them.

use serde::Serialize;

use super::expression::SqlExpression;

/// A column qualified by the table it belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Column {
    /// Column name.
    pub name: String,
    /// Owning table name (never an alias).
    pub table_name: String,
}

impl Column {
    /// Creates a new column.
    #[must_use]
    pub fn new(name: impl Into<String>, table_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            table_name: table_name.into(),
        }
    }
}

/// A value usable for routing: a literal or a bound parameter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ConditionValue {
    /// Numeric literal, as written.
    Number(String),
    /// String literal.
    Text(String),
    /// Index of a bound parameter.
    Placeholder(usize),
}

impl ConditionValue {
    /// Converts an expression into a routing value.
    ///
    /// Returns `None` for any shape other than a number, text or
    /// placeholder; such values leave routing undetermined.
    #[must_use]
    pub fn from_node(node: &SqlExpression) -> Option<Self> {
        match node {
            SqlExpression::Number(n) => Some(Self::Number(n.clone())),
            SqlExpression::Text(s) => Some(Self::Text(s.clone())),
            SqlExpression::Placeholder(index) => Some(Self::Placeholder(*index)),
            SqlExpression::Property { .. }
            | SqlExpression::Identifier(_)
            | SqlExpression::Ignore(_) => None,
        }
    }
}

/// How the values of a route condition constrain the column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ShardingOperator {
    /// `column = value`.
    Equal,
    /// `column IN (values...)`.
    In,
    /// `column BETWEEN low AND high`.
    Between,
}

/// A `(column, values)` fact used to select target shards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteCondition {
    /// The sharding column.
    pub column: Column,
    /// The comparison.
    pub operator: ShardingOperator,
    /// The compared values, in source order.
    pub values: Vec<ConditionValue>,
}

impl RouteCondition {
    /// Creates an equality condition.
    #[must_use]
    pub fn equal(column: Column, value: ConditionValue) -> Self {
        Self {
            column,
            operator: ShardingOperator::Equal,
            values: vec![value],
        }
    }

    /// Creates an `IN` condition.
    #[must_use]
    pub const fn in_list(column: Column, values: Vec<ConditionValue>) -> Self {
        Self {
            column,
            operator: ShardingOperator::In,
            values,
        }
    }

    /// Creates a `BETWEEN` condition.
    #[must_use]
    pub fn between(column: Column, low: ConditionValue, high: ConditionValue) -> Self {
        Self {
            column,
            operator: ShardingOperator::Between,
            values: vec![low, high],
        }
    }

    /// Returns the first value, which is the only one for equality.
    #[must_use]
    pub fn value(&self) -> Option<&ConditionValue> {
        self.values.first()
    }
}
