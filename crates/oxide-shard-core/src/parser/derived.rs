//! Derived select columns.
//!
//! Results from several shards can only be merged if the select list
//! carries everything the merge needs: an `AVG` is recomputed from a
//! `COUNT` and a `SUM`, and every ORDER BY / GROUP BY column must be
//! selected. Missing pieces are appended as aliased items through one
//! [`ItemsToken`] placed where the select list ends.
//!
//! Running these steps again on their own output adds nothing: every
//! appended column is also recorded as a select item, and every satisfied
//! `AVG` keeps its derived helpers.

use tracing::debug;

use super::error::{ParseError, Result};
use crate::ast::{
    AggregationSelectItem, AggregationType, DerivedColumn, OrderItem, SelectItem,
};
use crate::rule::ShardingTableMetaData;
use crate::statement::{ItemsToken, OrderByToken, SelectStatement, SqlToken};

/// Appends the helper columns for `AVG`, ORDER BY and GROUP BY items.
///
/// # Errors
///
/// Returns [`ParseError::MissingOrderItemName`] if an order item must be
/// checked against a qualified star but has no column name.
pub fn append_derived_columns(
    statement: &mut SelectStatement,
    metadata: &ShardingTableMetaData,
) -> Result<()> {
    let mut items_token = ItemsToken::new(statement.select_list_stop_index);
    append_avg_derived_columns(&mut items_token, statement);

    let mut order_by_items = core::mem::take(&mut statement.order_by_items);
    let appended = append_derived_order_columns(
        &mut items_token,
        statement,
        metadata,
        &mut order_by_items,
        DerivedColumn::OrderBy,
    );
    statement.order_by_items = order_by_items;
    appended?;

    let mut group_by_items = core::mem::take(&mut statement.group_by_items);
    let appended = append_derived_order_columns(
        &mut items_token,
        statement,
        metadata,
        &mut group_by_items,
        DerivedColumn::GroupBy,
    );
    statement.group_by_items = group_by_items;
    appended?;

    if !items_token.is_empty() {
        debug!(items = ?items_token.items, "appending derived select items");
        statement.context.add_token(SqlToken::Items(items_token));
    }
    Ok(())
}

/// Copies GROUP BY into ORDER BY when only the former is present, and
/// records the ORDER BY clause to insert after GROUP BY.
pub fn append_derived_order_by(statement: &mut SelectStatement) {
    if statement.group_by_items.is_empty() || !statement.order_by_items.is_empty() {
        return;
    }
    statement.order_by_items = statement.group_by_items.clone();
    if let Some(start_index) = statement.group_by_stop_index {
        let items = statement
            .order_by_items
            .iter()
            .map(OrderItem::order_by_text)
            .collect();
        statement
            .context
            .add_token(SqlToken::OrderBy(OrderByToken { start_index, items }));
    }
}

fn append_avg_derived_columns(items_token: &mut ItemsToken, statement: &mut SelectStatement) {
    let mut offset = 0;
    for item in &mut statement.items {
        let SelectItem::Aggregation(avg) = item else {
            continue;
        };
        if avg.kind != AggregationType::Avg {
            continue;
        }
        if avg.derived.is_empty() {
            let count = AggregationSelectItem::new(
                AggregationType::Count,
                avg.inner_expression.clone(),
                Some(DerivedColumn::AvgCount.alias(offset)),
            );
            let sum = AggregationSelectItem::new(
                AggregationType::Sum,
                avg.inner_expression.clone(),
                Some(DerivedColumn::AvgSum.alias(offset)),
            );
            for derived in [&count, &sum] {
                items_token.items.push(format!(
                    "{} AS {} ",
                    derived.expression(),
                    derived.alias.as_deref().unwrap_or_default()
                ));
            }
            avg.derived.push(count);
            avg.derived.push(sum);
        }
        offset += 1;
    }
}

fn append_derived_order_columns(
    items_token: &mut ItemsToken,
    statement: &mut SelectStatement,
    metadata: &ShardingTableMetaData,
    order_items: &mut [OrderItem],
    kind: DerivedColumn,
) -> Result<()> {
    let mut offset = 0;
    for order_item in order_items {
        if contains_item(statement, metadata, order_item)? {
            continue;
        }
        let qualified_name = order_item
            .qualified_name()
            .ok_or(ParseError::MissingOrderItemName {
                span: order_item.span,
            })?;
        let alias = kind.alias(offset);
        offset += 1;
        items_token
            .items
            .push(format!("{qualified_name} AS {alias} "));
        order_item.alias = Some(alias.clone());
        statement
            .items
            .push(SelectItem::derived(qualified_name, alias));
    }
    Ok(())
}

fn contains_item(
    statement: &SelectStatement,
    metadata: &ShardingTableMetaData,
    order_item: &OrderItem,
) -> Result<bool> {
    if order_item.is_index() || statement.has_unqualified_star_item() {
        return Ok(true);
    }
    if let Some(owner) = &order_item.owner {
        if statement.find_star_item(owner).is_some() {
            return Ok(true);
        }
    } else {
        for star_owner in statement.qualified_star_owners() {
            if is_covered_by_star(statement, metadata, star_owner, order_item)? {
                return Ok(true);
            }
        }
    }
    Ok(statement.items.iter().any(|item| {
        covers_distinct_label(item, order_item)
            || is_same_alias(item, order_item)
            || is_same_qualified_name(item, order_item)
    }))
}

/// Checks whether `owner.*` expands to a column named like `order_item`.
fn is_covered_by_star(
    statement: &SelectStatement,
    metadata: &ShardingTableMetaData,
    star_owner: &str,
    order_item: &OrderItem,
) -> Result<bool> {
    let name = order_item
        .name
        .as_deref()
        .ok_or(ParseError::MissingOrderItemName {
            span: order_item.span,
        })?;
    Ok(statement
        .find_table(star_owner)
        .is_some_and(|table| metadata.contains_column(&table.name, name)))
}

fn covers_distinct_label(item: &SelectItem, order_item: &OrderItem) -> bool {
    match (item, order_item.column_label()) {
        (SelectItem::Distinct(distinct), Some(label)) => distinct.contains_label(label),
        _ => false,
    }
}

fn is_same_alias(item: &SelectItem, order_item: &OrderItem) -> bool {
    match (item.alias(), order_item.alias.as_deref()) {
        (Some(alias), Some(order_alias)) => alias.eq_ignore_ascii_case(order_alias),
        _ => false,
    }
}

fn is_same_qualified_name(item: &SelectItem, order_item: &OrderItem) -> bool {
    item.alias().is_none()
        && order_item
            .qualified_name()
            .is_some_and(|name| item.expression().eq_ignore_ascii_case(&name))
}
