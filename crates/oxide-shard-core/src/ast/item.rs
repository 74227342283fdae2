//! Select-list items and ORDER BY / GROUP BY items.

use core::fmt;

use serde::Serialize;

use crate::lexer::Span;

/// Aggregate functions recognised in the select list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum AggregationType {
    Count,
    Sum,
    Avg,
    Min,
    Max,
}

impl AggregationType {
    /// Returns the function name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Count => "COUNT",
            Self::Sum => "SUM",
            Self::Avg => "AVG",
            Self::Min => "MIN",
            Self::Max => "MAX",
        }
    }
}

impl fmt::Display for AggregationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An aggregate call in the select list, e.g. `AVG(price) AS p`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AggregationSelectItem {
    /// The aggregate function.
    pub kind: AggregationType,
    /// The parenthesised argument text, unquoted, e.g. `(price)`.
    pub inner_expression: String,
    /// Alias, if one was given or derived.
    pub alias: Option<String>,
    /// Derived helper aggregations: for `AVG`, its `COUNT` and `SUM`.
    pub derived: Vec<AggregationSelectItem>,
}

impl AggregationSelectItem {
    /// Creates an aggregation item without derived helpers.
    #[must_use]
    pub fn new(kind: AggregationType, inner_expression: impl Into<String>, alias: Option<String>) -> Self {
        Self {
            kind,
            inner_expression: inner_expression.into(),
            alias,
            derived: Vec::new(),
        }
    }

    /// Returns the full call text, e.g. `COUNT(price)`.
    #[must_use]
    pub fn expression(&self) -> String {
        format!("{}{}", self.kind, self.inner_expression)
    }
}

/// Any other expression in the select list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommonSelectItem {
    /// The expression text, unquoted.
    pub expression: String,
    /// Alias, if any.
    pub alias: Option<String>,
    /// True when added to satisfy an ORDER BY or GROUP BY item.
    pub derived: bool,
}

/// A `DISTINCT` list, folded into a single item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistinctSelectItem {
    /// The labels (alias or expression) of each distinct column.
    pub column_labels: Vec<String>,
}

impl DistinctSelectItem {
    /// Returns true if `label` is one of the distinct columns.
    #[must_use]
    pub fn contains_label(&self, label: &str) -> bool {
        self.column_labels
            .iter()
            .any(|each| each.eq_ignore_ascii_case(label))
    }
}

/// One entry of a SELECT list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectItem {
    /// `*` or `owner.*`.
    Star {
        /// The table name or alias before `.*`.
        owner: Option<String>,
    },
    /// An aggregate call.
    Aggregation(AggregationSelectItem),
    /// A folded `DISTINCT` list.
    Distinct(DistinctSelectItem),
    /// Any other expression.
    Common(CommonSelectItem),
}

impl SelectItem {
    /// Creates a common item.
    #[must_use]
    pub fn common(expression: impl Into<String>, alias: Option<String>) -> Self {
        Self::Common(CommonSelectItem {
            expression: expression.into(),
            alias,
            derived: false,
        })
    }

    /// Creates a common item that was added by the rewrite engine.
    #[must_use]
    pub fn derived(expression: impl Into<String>, alias: impl Into<String>) -> Self {
        Self::Common(CommonSelectItem {
            expression: expression.into(),
            alias: Some(alias.into()),
            derived: true,
        })
    }

    /// Returns the expression text of the item.
    #[must_use]
    pub fn expression(&self) -> String {
        match self {
            Self::Star { owner: Some(owner) } => format!("{owner}.*"),
            Self::Star { owner: None } => "*".to_string(),
            Self::Aggregation(item) => item.expression(),
            Self::Distinct(item) => format!("DISTINCT {}", item.column_labels.join(", ")),
            Self::Common(item) => item.expression.clone(),
        }
    }

    /// Returns the alias of the item, if any.
    #[must_use]
    pub fn alias(&self) -> Option<&str> {
        match self {
            Self::Aggregation(item) => item.alias.as_deref(),
            Self::Common(item) => item.alias.as_deref(),
            Self::Star { .. } | Self::Distinct(_) => None,
        }
    }

    /// Returns true for items the rewrite engine appended.
    #[must_use]
    pub const fn is_derived(&self) -> bool {
        matches!(self, Self::Common(CommonSelectItem { derived: true, .. }))
    }
}

/// Sort direction of an order item.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum OrderDirection {
    #[default]
    Asc,
    Desc,
}

impl OrderDirection {
    /// Returns the SQL keyword.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

/// An ORDER BY or GROUP BY entry.
///
/// Either `index` is set (`ORDER BY 2`) or `name` is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderItem {
    /// Table name or alias qualifying the column.
    pub owner: Option<String>,
    /// Column name or expression text.
    pub name: Option<String>,
    /// Sort direction.
    pub direction: OrderDirection,
    /// 1-based select-list position for positional items.
    pub index: Option<usize>,
    /// Alias of the matching select item, or the derived alias.
    pub alias: Option<String>,
    /// Location of the item.
    pub span: Span,
}

impl OrderItem {
    /// Creates a named order item.
    #[must_use]
    pub fn column(
        owner: Option<String>,
        name: impl Into<String>,
        direction: OrderDirection,
        alias: Option<String>,
        span: Span,
    ) -> Self {
        Self {
            owner,
            name: Some(name.into()),
            direction,
            index: None,
            alias,
            span,
        }
    }

    /// Creates a positional order item.
    #[must_use]
    pub const fn index(index: usize, direction: OrderDirection, span: Span) -> Self {
        Self {
            owner: None,
            name: None,
            direction,
            index: Some(index),
            alias: None,
            span,
        }
    }

    /// Returns true for positional items.
    #[must_use]
    pub const fn is_index(&self) -> bool {
        self.index.is_some()
    }

    /// Returns `owner.name`, or `name` when there is no owner.
    #[must_use]
    pub fn qualified_name(&self) -> Option<String> {
        let name = self.name.as_ref()?;
        Some(match &self.owner {
            Some(owner) => format!("{owner}.{name}"),
            None => name.clone(),
        })
    }

    /// Returns the label the item is known by in the result set.
    #[must_use]
    pub fn column_label(&self) -> Option<&str> {
        self.alias.as_deref().or(self.name.as_deref())
    }

    /// Renders the item for a synthesized ORDER BY clause.
    #[must_use]
    pub fn order_by_text(&self) -> String {
        let target = self
            .qualified_name()
            .or_else(|| self.index.map(|i| i.to_string()))
            .unwrap_or_default();
        format!("{target} {}", self.direction.as_str())
    }
}

/// The kinds of helper columns the rewrite engine adds to a SELECT list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DerivedColumn {
    AvgCount,
    AvgSum,
    OrderBy,
    GroupBy,
}

impl DerivedColumn {
    const fn pattern(self) -> &'static str {
        match self {
            Self::AvgCount => "AVG_COUNT_",
            Self::AvgSum => "AVG_SUM_",
            Self::OrderBy => "ORDER_BY_DERIVED_",
            Self::GroupBy => "GROUP_BY_DERIVED_",
        }
    }

    /// Returns the alias for the `offset`-th column of this kind.
    #[must_use]
    pub fn alias(self, offset: usize) -> String {
        format!("{}{offset}", self.pattern())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derived_aliases() {
        assert_eq!(DerivedColumn::AvgCount.alias(0), "AVG_COUNT_0");
        assert_eq!(DerivedColumn::GroupBy.alias(3), "GROUP_BY_DERIVED_3");
        assert_eq!(DerivedColumn::OrderBy.alias(12), "ORDER_BY_DERIVED_12");
    }

    #[test]
    fn test_order_item_names() {
        let item = OrderItem::column(
            Some("o".to_string()),
            "created_at",
            OrderDirection::Desc,
            None,
            Span::default(),
        );
        assert_eq!(item.qualified_name().as_deref(), Some("o.created_at"));
        assert_eq!(item.column_label(), Some("created_at"));
        assert_eq!(item.order_by_text(), "o.created_at DESC");

        let positional = OrderItem::index(2, OrderDirection::Asc, Span::default());
        assert!(positional.qualified_name().is_none());
        assert_eq!(positional.order_by_text(), "2 ASC");
    }

    #[test]
    fn test_select_item_expression() {
        let avg = AggregationSelectItem::new(AggregationType::Avg, "(price)", None);
        assert_eq!(avg.expression(), "AVG(price)");
        let star = SelectItem::Star {
            owner: Some("o".to_string()),
        };
        assert_eq!(star.expression(), "o.*");
        assert!(SelectItem::derived("name", "ORDER_BY_DERIVED_0").is_derived());
    }
}
