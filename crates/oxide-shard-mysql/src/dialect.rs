//! MySQL dialect implementation.

use oxide_shard_core::dialect::{Dialect, LimitStyle};
use oxide_shard_core::lexer::Keyword;

/// MySQL dialect.
#[derive(Debug, Default, Clone, Copy)]
pub struct MySqlDialect;

impl MySqlDialect {
    /// Creates a new MySQL dialect.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Dialect for MySqlDialect {
    fn name(&self) -> &'static str {
        "mysql"
    }

    fn identifier_quote(&self) -> char {
        '`'
    }

    fn customized_insert_keywords(&self) -> &'static [Keyword] {
        &[Keyword::Set]
    }

    fn limit_style(&self) -> LimitStyle {
        LimitStyle::MySql
    }

    fn skipped_keywords_after_group_by(&self) -> &'static [Keyword] {
        &[Keyword::With, Keyword::Rollup]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use oxide_shard_core::rule::{RuleConfiguration, ShardingRule, ShardingTableMetaData};
    use oxide_shard_core::statement::SqlTokenKind;
    use oxide_shard_core::{ConditionValue, SqlParser, Statement};

    fn rules() -> (ShardingRule, ShardingTableMetaData) {
        RuleConfiguration::from_json(
            r#"{"tables": [{"name": "t_order", "sharding_columns": ["user_id"]}]}"#,
        )
        .and_then(|config| config.build())
        .unwrap()
    }

    fn parse(sql: &str) -> Statement {
        let dialect = MySqlDialect::new();
        let (rule, metadata) = rules();
        SqlParser::new(&dialect, &rule, &metadata)
            .parse(sql)
            .unwrap()
    }

    #[test]
    fn test_mysql_dialect() {
        let dialect = MySqlDialect::new();
        assert_eq!(dialect.name(), "mysql");
        assert_eq!(dialect.identifier_quote(), '`');
        assert_eq!(dialect.quote_identifier("t_order"), "`t_order`");
        assert_eq!(dialect.limit_style(), LimitStyle::MySql);
    }

    #[test]
    fn test_insert_set() {
        let statement = parse("INSERT INTO t_order SET user_id = 7, status = ?");
        assert_eq!(
            statement.route_conditions()[0].value(),
            Some(&ConditionValue::Number("7".to_string()))
        );
        assert_eq!(statement.parameters_count(), 1);
    }

    #[test]
    fn test_limit_offset_first() {
        let statement = parse("SELECT * FROM t_order LIMIT 10, 20");
        let Statement::Select(select) = statement else {
            panic!("expected select");
        };
        let kinds: Vec<_> = select.context.tokens.iter().map(|t| t.kind()).collect();
        assert_eq!(
            kinds,
            vec![SqlTokenKind::Table, SqlTokenKind::Offset, SqlTokenKind::RowCount]
        );
    }

    #[test]
    fn test_group_by_with_rollup() {
        let statement = parse("SELECT status, COUNT(*) FROM t_order GROUP BY status WITH ROLLUP");
        let Statement::Select(select) = statement else {
            panic!("expected select");
        };
        assert_eq!(select.group_by_items.len(), 1);
        assert_eq!(select.order_by_items.len(), 1);
    }
}
