#![allow(dead_code)]

use oxide_shard_core::dialect::{Dialect, GenericDialect, LimitStyle};
use oxide_shard_core::lexer::Keyword;
use oxide_shard_core::rule::{RuleConfiguration, ShardingRule, ShardingTableMetaData};
use oxide_shard_core::{InsertStatement, ParseError, SelectStatement, SqlParser, Statement};

pub const RULES: &str = r#"{
    "tables": [
        {
            "name": "t_order",
            "sharding_columns": ["user_id"],
            "algorithm_expression": "t_order_${user_id % 2}",
            "generate_key_column": "order_id",
            "columns": ["order_id", "user_id", "status"]
        },
        {
            "name": "t_order_item",
            "sharding_columns": ["order_id"],
            "columns": ["item_id", "order_id", "user_id", "price"]
        }
    ]
}"#;

/// A dialect with the `INSERT ... SET` form and `LIMIT offset, count`.
#[derive(Debug, Default)]
pub struct SetDialect;

impl Dialect for SetDialect {
    fn name(&self) -> &'static str {
        "set"
    }

    fn customized_insert_keywords(&self) -> &'static [Keyword] {
        &[Keyword::Set]
    }

    fn limit_style(&self) -> LimitStyle {
        LimitStyle::MySql
    }
}

pub fn fixture() -> (ShardingRule, ShardingTableMetaData) {
    RuleConfiguration::from_json(RULES)
        .and_then(|config| config.build())
        .unwrap_or_else(|e| panic!("Invalid fixture rules: {e}"))
}

pub fn try_parse_with(dialect: &dyn Dialect, sql: &str) -> Result<Statement, ParseError> {
    let (rule, metadata) = fixture();
    SqlParser::new(dialect, &rule, &metadata).parse(sql)
}

pub fn parse_with(dialect: &dyn Dialect, sql: &str) -> Statement {
    try_parse_with(dialect, sql)
        .unwrap_or_else(|e| panic!("Failed to parse: {sql}\nError: {e:?}"))
}

pub fn parse(sql: &str) -> Statement {
    parse_with(&SetDialect, sql)
}

pub fn parse_err(sql: &str) -> ParseError {
    try_parse_with(&SetDialect, sql).expect_err(&format!("Expected parse error for: {sql}"))
}

pub fn parse_generic_err(sql: &str) -> ParseError {
    try_parse_with(&GenericDialect::new(), sql)
        .expect_err(&format!("Expected parse error for: {sql}"))
}

pub fn parse_select(sql: &str) -> SelectStatement {
    match parse(sql) {
        Statement::Select(s) => s,
        other => panic!("Expected SELECT, got {other:?}"),
    }
}

pub fn parse_insert(sql: &str) -> InsertStatement {
    match parse(sql) {
        Statement::Insert(i) => i,
        other => panic!("Expected INSERT, got {other:?}"),
    }
}

/// Splices every insertion token into `sql`, in offset order.
pub fn apply_insertions(sql: &str, statement: &Statement) -> String {
    let mut edits: Vec<(usize, String)> = statement
        .tokens()
        .iter()
        .filter_map(|token| token.inserted_text().map(|text| (token.start_index(), text)))
        .collect();
    edits.sort_by_key(|(index, _)| *index);
    let mut result = String::new();
    let mut last = 0;
    for (index, text) in edits {
        result.push_str(&sql[last..index]);
        result.push_str(&text);
        last = index;
    }
    result.push_str(&sql[last..]);
    result
}
