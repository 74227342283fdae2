//! Tests for route conditions and rewrite tokens of SELECT statements:
//! WHERE predicates, joins, placeholders, LIMIT, and rejected constructs.

mod common;
use common::*;

use oxide_shard_core::ast::{LimitValue, Table};
use oxide_shard_core::dialect::GenericDialect;
use oxide_shard_core::lexer::Span;
use oxide_shard_core::statement::{OffsetToken, RowCountToken, TableToken};
use oxide_shard_core::{
    Column, ConditionValue, ParseError, RouteCondition, ShardingOperator, SqlToken,
};

fn number(n: &str) -> ConditionValue {
    ConditionValue::Number(n.to_string())
}

#[test]
fn where_equal_on_sharding_column() {
    let s = parse_select("SELECT * FROM t_order WHERE user_id = 10 AND status = 'PAID'");
    assert_eq!(
        s.context.route_conditions,
        vec![RouteCondition::equal(
            Column::new("user_id", "t_order"),
            number("10")
        )]
    );
}

#[test]
fn where_resolves_table_alias() {
    let s = parse_select("SELECT o.status FROM t_order o WHERE o.user_id = ?");
    assert_eq!(s.context.route_conditions.len(), 1);
    let condition = &s.context.route_conditions[0];
    assert_eq!(condition.column, Column::new("user_id", "t_order"));
    assert_eq!(condition.value(), Some(&ConditionValue::Placeholder(0)));
    assert_eq!(
        s.context.tables.find("o"),
        Some(&Table::new("t_order", Some("o".to_string())))
    );
}

#[test]
fn where_in_list_keeps_placeholder_order() {
    let s = parse_select("SELECT * FROM t_order WHERE status = ? AND user_id IN (?, ?)");
    assert_eq!(s.context.parameters_index, 3);
    let condition = &s.context.route_conditions[0];
    assert_eq!(condition.operator, ShardingOperator::In);
    assert_eq!(
        condition.values,
        vec![ConditionValue::Placeholder(1), ConditionValue::Placeholder(2)]
    );
}

#[test]
fn where_between() {
    let s = parse_select("SELECT * FROM t_order WHERE user_id BETWEEN 1 AND 5");
    let condition = &s.context.route_conditions[0];
    assert_eq!(condition.operator, ShardingOperator::Between);
    assert_eq!(condition.values, vec![number("1"), number("5")]);
}

#[test]
fn where_or_discards_conditions() {
    let s = parse_select("SELECT * FROM t_order WHERE user_id = 1 OR user_id = 2");
    assert!(s.context.route_conditions.is_empty());
}

#[test]
fn where_non_literal_values_are_not_routable() {
    let s = parse_select("SELECT * FROM t_order WHERE user_id = other_id");
    assert!(s.context.route_conditions.is_empty());

    let s = parse_select("SELECT * FROM t_order WHERE user_id = ABS(?) AND user_id IN (1, ?, x)");
    assert!(s.context.route_conditions.is_empty());
    assert_eq!(s.context.parameters_index, 2);
}

#[test]
fn where_skips_other_predicates() {
    let s = parse_select(
        "SELECT * FROM t_order WHERE status <> 'x' AND status NOT IN (?, ?) \
         AND status IS NOT NULL AND status LIKE ? AND user_id = ?",
    );
    assert_eq!(s.context.parameters_index, 4);
    assert_eq!(
        s.context.route_conditions[0].value(),
        Some(&ConditionValue::Placeholder(3))
    );
}

#[test]
fn join_conditions_route_both_tables() {
    let s = parse_select(
        "SELECT i.price FROM t_order o JOIN t_order_item i ON o.order_id = i.order_id \
         WHERE o.user_id = 1 AND i.order_id IN (3, 4)",
    );
    let columns: Vec<&Column> = s.context.route_conditions.iter().map(|c| &c.column).collect();
    assert_eq!(
        columns,
        vec![
            &Column::new("user_id", "t_order"),
            &Column::new("order_id", "t_order_item")
        ]
    );
    let tables: Vec<&SqlToken> = s
        .context
        .tokens
        .iter()
        .filter(|t| matches!(t, SqlToken::Table(_)))
        .collect();
    assert_eq!(tables.len(), 2);
}

#[test]
fn left_outer_join_and_using() {
    let s = parse_select(
        "SELECT * FROM t_order o LEFT OUTER JOIN t_order_item i USING (order_id) WHERE o.user_id = 2",
    );
    assert!(s.context.tables.contains("t_order_item"));
    assert_eq!(s.context.route_conditions.len(), 1);
}

#[test]
fn unqualified_column_needs_single_table() {
    let s = parse_select("SELECT * FROM t_order, t_order_item WHERE user_id = 1");
    assert!(s.context.route_conditions.is_empty());
}

#[test]
fn placeholders_in_select_list_are_counted() {
    let s = parse_select("SELECT IFNULL(status, ?) FROM t_order WHERE user_id = ?");
    assert_eq!(
        s.context.route_conditions[0].value(),
        Some(&ConditionValue::Placeholder(1))
    );
}

#[test]
fn table_token_covers_schema() {
    let s = parse_select("SELECT * FROM db.t_order");
    assert_eq!(
        s.context.tokens,
        vec![SqlToken::Table(TableToken {
            span: Span::new(14, 24),
            table_name: "t_order".to_string(),
            original_literals: "db.t_order".to_string(),
        })]
    );
}

#[test]
fn quoted_identifiers() {
    let s = parse_select("SELECT * FROM `t_order` WHERE `user_id` = 7");
    assert_eq!(s.context.route_conditions.len(), 1);
    let SqlToken::Table(table) = &s.context.tokens[0] else {
        panic!("expected table token");
    };
    assert_eq!(table.table_name, "t_order");
    assert_eq!(table.original_literals, "`t_order`");
}

#[test]
fn mysql_limit_with_offset() {
    let s = parse_select("SELECT * FROM t_order LIMIT 10, 20");
    let limit = s.limit.expect("limit");
    assert_eq!(limit.offset, Some(LimitValue::Literal(10)));
    assert_eq!(limit.row_count, Some(LimitValue::Literal(20)));
    assert!(s.context.tokens.contains(&SqlToken::Offset(OffsetToken {
        span: Span::new(28, 30),
        offset: 10,
    })));
    assert!(s.context.tokens.contains(&SqlToken::RowCount(RowCountToken {
        span: Span::new(32, 34),
        row_count: 20,
    })));
}

#[test]
fn standard_limit_with_placeholders() {
    let statement = parse_with(&GenericDialect::new(), "SELECT * FROM t_order LIMIT ? OFFSET ?");
    let oxide_shard_core::Statement::Select(s) = statement else {
        panic!("expected select");
    };
    let limit = s.limit.expect("limit");
    assert_eq!(limit.row_count, Some(LimitValue::Placeholder(0)));
    assert_eq!(limit.offset, Some(LimitValue::Placeholder(1)));
    assert_eq!(s.context.tokens.len(), 1);
}

#[test]
fn generic_dialect_rejects_comma_limit() {
    let err = parse_generic_err("SELECT * FROM t_order LIMIT 1, 2");
    assert!(matches!(err, ParseError::Unexpected { ref expected, .. } if expected == "end of input"));
}

#[test]
fn having_is_unsupported() {
    let err = parse_err("SELECT user_id, COUNT(*) FROM t_order GROUP BY user_id HAVING COUNT(*) > 1");
    assert!(matches!(err, ParseError::Unsupported { ref construct, .. } if construct == "HAVING"));
}

#[test]
fn union_is_unsupported() {
    let err = parse_err("SELECT status FROM t_order UNION SELECT status FROM t_order_item");
    assert!(matches!(err, ParseError::Unsupported { ref construct, .. } if construct == "UNION"));
}

#[test]
fn select_into_is_unsupported() {
    let err = parse_err("SELECT status INTO @s FROM t_order");
    assert!(matches!(err, ParseError::Unsupported { ref construct, .. } if construct == "INTO"));
}

#[test]
fn unterminated_string_is_lexical_error() {
    let err = parse_err("SELECT * FROM t_order WHERE status = 'open");
    assert!(matches!(err, ParseError::Lexical { .. }));
}

#[test]
fn missing_from_table() {
    let err = parse_err("SELECT * FROM WHERE user_id = 1");
    assert!(matches!(err, ParseError::Unexpected { ref expected, .. } if expected == "identifier"));
}
