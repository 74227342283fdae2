//! Splicing insertion tokens into SQL text.

use oxide_shard_core::SqlToken;

/// Applies every insertion token to `sql`, in offset order.
///
/// Replacement tokens (tables, limit values, the values section) are left
/// to the routing stage and do not change the text. Insertions sharing an
/// offset keep their recorded order.
#[must_use]
pub fn apply_insertions(sql: &str, tokens: &[SqlToken]) -> String {
    let mut edits: Vec<(usize, String)> = tokens
        .iter()
        .filter_map(|token| token.inserted_text().map(|text| (token.start_index(), text)))
        .collect();
    edits.sort_by_key(|(index, _)| *index);

    let mut rewritten = String::with_capacity(sql.len());
    let mut last = 0;
    for (index, text) in edits {
        let index = index.clamp(last, sql.len());
        rewritten.push_str(sql.get(last..index).unwrap_or_default());
        rewritten.push_str(&text);
        last = index;
    }
    rewritten.push_str(sql.get(last..).unwrap_or_default());
    rewritten
}

#[cfg(test)]
mod tests {
    use super::*;
    use oxide_shard_core::lexer::Span;
    use oxide_shard_core::statement::{ItemsToken, OrderByToken, TableToken};

    #[test]
    fn test_insertions_in_offset_order() {
        let sql = "SELECT a FROM t GROUP BY b";
        let tokens = vec![
            SqlToken::OrderBy(OrderByToken {
                start_index: 26,
                items: vec!["b ASC".to_string()],
            }),
            SqlToken::Table(TableToken {
                span: Span::new(14, 15),
                table_name: "t".to_string(),
                original_literals: "t".to_string(),
            }),
            SqlToken::Items(ItemsToken {
                start_index: 9,
                items: vec!["b AS GROUP_BY_DERIVED_0 ".to_string()],
            }),
        ];
        assert_eq!(
            apply_insertions(sql, &tokens),
            "SELECT a , b AS GROUP_BY_DERIVED_0 FROM t GROUP BY b ORDER BY b ASC "
        );
    }

    #[test]
    fn test_no_tokens() {
        assert_eq!(apply_insertions("SELECT 1", &[]), "SELECT 1");
    }
}
