//! Generic SQL dialect.

use super::Dialect;

/// A generic SQL dialect using ANSI SQL standards.
///
/// It has no `INSERT ... SET` form and only accepts `LIMIT n OFFSET m`.
#[derive(Debug, Default, Clone, Copy)]
pub struct GenericDialect;

impl GenericDialect {
    /// Creates a new generic dialect.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Dialect for GenericDialect {
    fn name(&self) -> &'static str {
        "generic"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dialect::{DEFAULT_SELECT_CLAUSES, LimitStyle};

    #[test]
    fn test_generic_dialect() {
        let dialect = GenericDialect::new();
        assert_eq!(dialect.name(), "generic");
        assert_eq!(dialect.identifier_quote(), '"');
        assert!(dialect.customized_insert_keywords().is_empty());
        assert_eq!(dialect.limit_style(), LimitStyle::Standard);
        assert_eq!(dialect.select_clauses(), DEFAULT_SELECT_CLAUSES);
        assert_eq!(dialect.quote_identifier("t_order"), "\"t_order\"");
    }
}
