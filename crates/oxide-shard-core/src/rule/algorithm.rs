//! Sharding algorithms and their expression capability.

/// A sharding algorithm configured by a textual expression.
///
/// Implemented by each algorithm type that is driven by an expression, so
/// configuration code can read and replace it without knowing the
/// concrete type.
pub trait AlgorithmExpression {
    /// Returns the configured expression, if any.
    fn algorithm_expression(&self) -> Option<&str>;

    /// Replaces the configured expression.
    fn set_algorithm_expression(&mut self, expression: String);
}

/// An algorithm whose target is computed from an inline expression such
/// as `t_order_${user_id % 2}`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InlineShardingAlgorithm {
    expression: Option<String>,
}

impl InlineShardingAlgorithm {
    /// Creates an algorithm with the given expression.
    #[must_use]
    pub fn new(expression: impl Into<String>) -> Self {
        Self {
            expression: Some(expression.into()),
        }
    }
}

impl AlgorithmExpression for InlineShardingAlgorithm {
    fn algorithm_expression(&self) -> Option<&str> {
        self.expression.as_deref()
    }

    fn set_algorithm_expression(&mut self, expression: String) {
        self.expression = Some(expression);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expression_capability() {
        let mut algorithm = InlineShardingAlgorithm::default();
        assert_eq!(algorithm.algorithm_expression(), None);
        algorithm.set_algorithm_expression("t_order_${user_id % 2}".to_string());
        assert_eq!(
            algorithm.algorithm_expression(),
            Some("t_order_${user_id % 2}")
        );
    }

    #[test]
    fn test_trait_object() {
        let mut algorithm: Box<dyn AlgorithmExpression> =
            Box::new(InlineShardingAlgorithm::new("ds_${id % 4}"));
        algorithm.set_algorithm_expression("ds_${id % 8}".to_string());
        assert_eq!(algorithm.algorithm_expression(), Some("ds_${id % 8}"));
    }
}
