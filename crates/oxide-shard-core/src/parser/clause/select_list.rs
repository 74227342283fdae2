//! SELECT list.

use crate::ast::{
    AggregationSelectItem, AggregationType, DistinctSelectItem, SelectItem, exactly_value,
};
use crate::lexer::{Keyword, TokenKind};
use crate::parser::error::Result;
use crate::parser::parser::ClauseParser;
use crate::statement::SelectStatement;

impl ClauseParser<'_> {
    /// Parses the select list and records where it stops.
    pub(crate) fn parse_select_list(&mut self, statement: &mut SelectStatement) -> Result<()> {
        let distinct = self.stream.skip_if_keyword(&[Keyword::Distinct]);
        if !distinct {
            self.stream.skip_if_keyword(&[Keyword::All]);
        }
        let mut items = Vec::new();
        loop {
            items.push(self.parse_select_item(statement)?);
            if !self.stream.skip_if(&TokenKind::Comma) {
                break;
            }
        }
        statement.select_list_stop_index = self.stream.current_offset();
        if distinct {
            items = fold_distinct(items);
        }
        statement.items.extend(items);
        Ok(())
    }

    fn parse_select_item(&mut self, statement: &mut SelectStatement) -> Result<SelectItem> {
        if self.stream.skip_if(&TokenKind::Star) {
            statement.contains_star = true;
            return Ok(SelectItem::Star { owner: None });
        }
        if let TokenKind::Identifier(owner) = self.stream.kind().clone() {
            if self.stream.peek_nth_kind(1) == TokenKind::Dot
                && self.stream.peek_nth_kind(2) == TokenKind::Star
            {
                self.stream.advance();
                self.stream.advance();
                self.stream.advance();
                statement.contains_star = true;
                return Ok(SelectItem::Star {
                    owner: Some(exactly_value(&owner)),
                });
            }
        }
        if let Some(kind) = aggregation_type(self.stream.kind()) {
            if self.stream.peek_kind() == TokenKind::LeftParen {
                return self.parse_aggregation_item(kind, statement);
            }
        }
        let expression = self.parse_expression(&mut statement.context)?;
        let text = exactly_value(expression.span.text(self.stream.source()));
        let alias = self.parse_alias()?;
        Ok(SelectItem::common(text, alias))
    }

    fn parse_aggregation_item(
        &mut self,
        kind: AggregationType,
        statement: &mut SelectStatement,
    ) -> Result<SelectItem> {
        let start = self.stream.current_offset();
        self.stream.advance();
        let inner_start = self.stream.current_offset();
        let skipped = self.stream.skip_parentheses()?;
        statement.context.increase_parameters_index(skipped);
        let inner = exactly_value(&self.text_from(inner_start));
        if self.stream.kind().is_composite_operator() {
            self.skip_composite(&mut statement.context)?;
            let text = exactly_value(&self.text_from(start));
            let alias = self.parse_alias()?;
            return Ok(SelectItem::common(text, alias));
        }
        let alias = self.parse_alias()?;
        Ok(SelectItem::Aggregation(AggregationSelectItem::new(
            kind, inner, alias,
        )))
    }
}

const fn aggregation_type(kind: &TokenKind) -> Option<AggregationType> {
    match kind {
        TokenKind::Keyword(Keyword::Count) => Some(AggregationType::Count),
        TokenKind::Keyword(Keyword::Sum) => Some(AggregationType::Sum),
        TokenKind::Keyword(Keyword::Avg) => Some(AggregationType::Avg),
        TokenKind::Keyword(Keyword::Min) => Some(AggregationType::Min),
        TokenKind::Keyword(Keyword::Max) => Some(AggregationType::Max),
        _ => None,
    }
}

/// Folds the plain columns of a `DISTINCT` list into one item that covers
/// every label. Stars and aggregations stay as they are.
fn fold_distinct(items: Vec<SelectItem>) -> Vec<SelectItem> {
    let mut column_labels = Vec::new();
    let mut rest = Vec::new();
    for item in items {
        match item {
            SelectItem::Common(common) => {
                column_labels.push(
                    common
                        .alias
                        .unwrap_or_else(|| column_label(&common.expression)),
                );
            }
            other => rest.push(other),
        }
    }
    if column_labels.is_empty() {
        return rest;
    }
    let mut folded = vec![SelectItem::Distinct(DistinctSelectItem { column_labels })];
    folded.append(&mut rest);
    folded
}

/// The result-set label of a plain column: `o.status` is labelled
/// `status`. Anything else keeps its text.
fn column_label(expression: &str) -> String {
    let plain = expression
        .bytes()
        .all(|b| b.is_ascii_alphanumeric() || b == b'_' || b == b'.' || b == b'$');
    match expression.rsplit_once('.') {
        Some((_, name)) if plain && !name.is_empty() => name.to_string(),
        _ => expression.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fold_distinct() {
        let folded = fold_distinct(vec![
            SelectItem::common("a", None),
            SelectItem::common("b", Some("bee".to_string())),
            SelectItem::Aggregation(AggregationSelectItem::new(
                AggregationType::Count,
                "(c)",
                None,
            )),
        ]);
        assert_eq!(folded.len(), 2);
        let SelectItem::Distinct(distinct) = &folded[0] else {
            panic!("expected distinct item, got {:?}", folded[0]);
        };
        assert_eq!(distinct.column_labels, vec!["a", "bee"]);
        assert!(distinct.contains_label("BEE"));
    }

    #[test]
    fn test_distinct_label_drops_owner() {
        let folded = fold_distinct(vec![
            SelectItem::common("o.status", None),
            SelectItem::common("price * 2", None),
        ]);
        let SelectItem::Distinct(distinct) = &folded[0] else {
            panic!("expected distinct item, got {:?}", folded[0]);
        };
        assert_eq!(distinct.column_labels, vec!["status", "price * 2"]);
    }
}
