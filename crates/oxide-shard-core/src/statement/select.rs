//! The SELECT statement model.

use tracing::trace;

use super::StatementContext;
use crate::ast::{Limit, OrderItem, SelectItem, Table, exactly_value};

/// A parsed SELECT.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectStatement {
    /// Tables, route conditions, tokens and parameter count.
    pub context: StatementContext,
    /// The select list.
    pub items: Vec<SelectItem>,
    /// True if the select list has a `*` or `owner.*` item.
    pub contains_star: bool,
    /// Start offset of the token following the select list.
    pub select_list_stop_index: usize,
    /// End offset of the GROUP BY clause, if there is one.
    pub group_by_stop_index: Option<usize>,
    /// GROUP BY items.
    pub group_by_items: Vec<OrderItem>,
    /// ORDER BY items.
    pub order_by_items: Vec<OrderItem>,
    /// The LIMIT clause.
    pub limit: Option<Limit>,
    /// A derived table in FROM, parsed as its own statement.
    pub subquery: Option<Box<SelectStatement>>,
}

impl SelectStatement {
    /// Returns true if a derived table was parsed.
    #[must_use]
    pub const fn contains_subquery(&self) -> bool {
        self.subquery.is_some()
    }

    /// Returns true if the select list has a bare `*`.
    #[must_use]
    pub fn has_unqualified_star_item(&self) -> bool {
        self.items
            .iter()
            .any(|item| matches!(item, SelectItem::Star { owner: None }))
    }

    /// Returns the owners of every `owner.*` item.
    pub fn qualified_star_owners(&self) -> impl Iterator<Item = &str> {
        self.items.iter().filter_map(|item| match item {
            SelectItem::Star { owner: Some(owner) } => Some(owner.as_str()),
            _ => None,
        })
    }

    /// Finds the `owner.*` item whose owner resolves to the same table as
    /// `table_name_or_alias`.
    #[must_use]
    pub fn find_star_item(&self, table_name_or_alias: &str) -> Option<&SelectItem> {
        let table = self.context.tables.find(table_name_or_alias)?;
        self.items.iter().find(|item| match item {
            SelectItem::Star { owner: Some(owner) } => {
                self.context.tables.find(owner) == Some(table)
            }
            _ => false,
        })
    }

    /// Resolves the table a star item's owner refers to.
    #[must_use]
    pub fn find_table(&self, name_or_alias: &str) -> Option<&Table> {
        self.context.tables.find(name_or_alias)
    }

    /// Returns the alias under which `name` appears in the select list.
    ///
    /// A select item whose expression equals `name` yields its alias; an
    /// item whose alias equals `name` yields `name` itself. With a star in
    /// the list, nothing can be resolved.
    #[must_use]
    pub fn alias_of(&self, name: &str) -> Option<String> {
        if self.contains_star {
            return None;
        }
        let raw_name = exactly_value(name);
        let wanted = without_whitespace(&raw_name);
        for item in &self.items {
            let expression = without_whitespace(&exactly_value(&item.expression()));
            if wanted.eq_ignore_ascii_case(&expression) {
                return item.alias().map(str::to_owned);
            }
            if item
                .alias()
                .is_some_and(|alias| raw_name.eq_ignore_ascii_case(alias))
            {
                return Some(raw_name);
            }
        }
        None
    }

    /// Flattens a chain of derived tables into one statement.
    ///
    /// The innermost statement is the result. Tokens and route conditions
    /// of every level are kept, outer levels first. An outer level without
    /// a star item replaces the select list, grouping, ordering and limit
    /// of the levels below it. The parameter count is the outermost one.
    #[must_use]
    pub fn merge_subquery_statement(mut self) -> Self {
        let Some(subquery) = self.subquery.take() else {
            return self;
        };
        let mut inner = subquery.merge_subquery_statement();
        let mut tokens = core::mem::take(&mut self.context.tokens);
        tokens.append(&mut inner.context.tokens);
        inner.context.tokens = tokens;
        let mut conditions = core::mem::take(&mut self.context.route_conditions);
        conditions.append(&mut inner.context.route_conditions);
        inner.context.route_conditions = conditions;
        if !self.contains_star {
            inner.items = self.items;
            inner.contains_star = false;
            inner.select_list_stop_index = self.select_list_stop_index;
            inner.group_by_stop_index = self.group_by_stop_index;
            inner.group_by_items = self.group_by_items;
            inner.order_by_items = self.order_by_items;
            inner.limit = self.limit;
        }
        inner.context.parameters_index = self.context.parameters_index;
        trace!(
            tokens = inner.context.tokens.len(),
            conditions = inner.context.route_conditions.len(),
            "merged subquery statement"
        );
        inner
    }
}

fn without_whitespace(value: &str) -> String {
    value.chars().filter(|c| !c.is_whitespace()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{Column, ConditionValue, OrderDirection, RouteCondition, Table};
    use crate::lexer::Span;
    use crate::statement::{ItemsToken, SqlToken};

    fn statement_with_tables() -> SelectStatement {
        let mut statement = SelectStatement::default();
        statement
            .context
            .tables
            .add(Table::new("t_order", Some("o".to_string())));
        statement.context.tables.add(Table::new("t_user", None));
        statement
    }

    #[test]
    fn test_alias_of() {
        let mut statement = SelectStatement::default();
        statement.items.push(SelectItem::common("o.user_id", Some("uid".to_string())));
        statement.items.push(SelectItem::common("status", None));
        assert_eq!(statement.alias_of("o.`user_id`").as_deref(), Some("uid"));
        assert_eq!(statement.alias_of("UID").as_deref(), Some("UID"));
        assert_eq!(statement.alias_of("status"), None);
        statement.contains_star = true;
        assert_eq!(statement.alias_of("o.user_id"), None);
    }

    #[test]
    fn test_find_star_item_resolves_alias() {
        let mut statement = statement_with_tables();
        statement.items.push(SelectItem::Star {
            owner: Some("o".to_string()),
        });
        assert!(statement.find_star_item("t_order").is_some());
        assert!(statement.find_star_item("O").is_some());
        assert!(statement.find_star_item("t_user").is_none());
        assert!(statement.find_star_item("missing").is_none());
    }

    #[test]
    fn test_merge_keeps_outer_items_without_star() {
        let mut inner = statement_with_tables();
        inner.items.push(SelectItem::Star { owner: None });
        inner.contains_star = true;
        inner.context.parameters_index = 1;
        inner.context.add_token(SqlToken::Items(ItemsToken::new(30)));
        inner.context.route_conditions.push(RouteCondition::equal(
            Column::new("user_id", "t_order"),
            ConditionValue::Placeholder(0),
        ));

        let mut outer = SelectStatement::default();
        outer.items.push(SelectItem::common("x.status", None));
        outer.order_by_items.push(OrderItem::column(
            Some("x".to_string()),
            "status",
            OrderDirection::Desc,
            None,
            Span::default(),
        ));
        outer.context.parameters_index = 2;
        outer.context.add_token(SqlToken::Items(ItemsToken::new(10)));
        outer.subquery = Some(Box::new(inner));

        let merged = outer.merge_subquery_statement();
        assert!(!merged.contains_subquery());
        assert!(!merged.contains_star);
        assert_eq!(merged.items, vec![SelectItem::common("x.status", None)]);
        assert_eq!(merged.order_by_items.len(), 1);
        assert_eq!(merged.context.parameters_index, 2);
        assert_eq!(merged.context.route_conditions.len(), 1);
        let starts: Vec<usize> = merged.context.tokens.iter().map(SqlToken::start_index).collect();
        assert_eq!(starts, vec![10, 30]);
        assert!(merged.context.tables.contains("t_order"));
    }

    #[test]
    fn test_merge_with_outer_star_keeps_inner_items() {
        let mut inner = SelectStatement::default();
        inner.items.push(SelectItem::common("id", None));
        let mut outer = SelectStatement::default();
        outer.items.push(SelectItem::Star { owner: None });
        outer.contains_star = true;
        outer.subquery = Some(Box::new(inner));
        let merged = outer.merge_subquery_statement();
        assert_eq!(merged.items, vec![SelectItem::common("id", None)]);
    }
}
