//! The JSON summary printed for a parsed statement.

use serde::Serialize;

use oxide_shard_core::ast::Tables;
use oxide_shard_core::{RouteCondition, SqlToken, Statement};

use crate::rewrite::apply_insertions;

/// What a router learns from one statement.
#[derive(Debug, Serialize)]
pub struct ParseReport<'a> {
    /// `select` or `insert`.
    pub statement: &'static str,
    /// Referenced tables.
    pub tables: &'a Tables,
    /// Sharding conditions usable for routing.
    pub route_conditions: &'a [RouteCondition],
    /// Positional rewrite tokens.
    pub tokens: &'a [SqlToken],
    /// Number of `?` placeholders consumed.
    pub parameters_count: usize,
    /// The input with every insertion token applied.
    pub rewritten_sql: String,
}

impl<'a> ParseReport<'a> {
    /// Builds the report for `statement`, parsed from `sql`.
    #[must_use]
    pub fn new(sql: &str, statement: &'a Statement) -> Self {
        Self {
            statement: match statement {
                Statement::Select(_) => "select",
                Statement::Insert(_) => "insert",
            },
            tables: statement.tables(),
            route_conditions: statement.route_conditions(),
            tokens: statement.tokens(),
            parameters_count: statement.parameters_count(),
            rewritten_sql: apply_insertions(sql, statement.tokens()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use oxide_shard_core::dialect::GenericDialect;
    use oxide_shard_core::rule::RuleConfiguration;
    use oxide_shard_core::SqlParser;

    const RULES: &str = r#"{
        "tables": [
            {
                "name": "t_order",
                "sharding_columns": ["user_id"],
                "columns": ["order_id", "user_id", "price"]
            }
        ]
    }"#;

    fn report_json(sql: &str) -> serde_json::Value {
        let (rule, metadata) = RuleConfiguration::from_json(RULES)
            .and_then(|config| config.build())
            .unwrap();
        let dialect = GenericDialect::new();
        let statement = SqlParser::new(&dialect, &rule, &metadata)
            .parse(sql)
            .unwrap();
        serde_json::to_value(ParseReport::new(sql, &statement)).unwrap()
    }

    #[test]
    fn test_select_report() {
        let json = report_json("SELECT AVG(price) FROM t_order WHERE user_id = ?");
        assert_eq!(json["statement"], "select");
        assert_eq!(json["tables"][0]["name"], "t_order");
        assert_eq!(json["route_conditions"][0]["column"]["name"], "user_id");
        assert_eq!(json["parameters_count"], 1);
        assert_eq!(json["tokens"][0]["kind"], "table");
        assert_eq!(json["tokens"][1]["kind"], "items");
        assert_eq!(
            json["rewritten_sql"],
            "SELECT AVG(price) , COUNT(price) AS AVG_COUNT_0 , SUM(price) AS AVG_SUM_0 \
             FROM t_order WHERE user_id = ?"
        );
    }

    #[test]
    fn test_insert_report() {
        let json = report_json("INSERT INTO t_order VALUES (1, 2, 3)");
        assert_eq!(json["statement"], "insert");
        assert_eq!(
            json["rewritten_sql"],
            "INSERT INTO t_order(order_id, user_id, price) VALUES (1, 2, 3)"
        );
    }
}
