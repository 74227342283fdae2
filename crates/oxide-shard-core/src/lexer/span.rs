//! Source offsets of tokens and expressions.

use core::fmt;

/// A byte range in the original SQL text.
///
/// Rewrite tokens are positioned by these offsets, so every span refers to
/// the untouched input the statement was parsed from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize)]
pub struct Span {
    /// Start byte offset (inclusive).
    pub start: usize,
    /// End byte offset (exclusive).
    pub end: usize,
}

impl Span {
    /// Creates a new span.
    #[must_use]
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Returns the length of the span in bytes.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.end - self.start
    }

    /// Returns true if the span is empty.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Returns a span covering both `self` and `other`.
    #[must_use]
    pub const fn merge(self, other: Self) -> Self {
        let start = if self.start < other.start {
            self.start
        } else {
            other.start
        };
        let end = if self.end > other.end {
            self.end
        } else {
            other.end
        };
        Self { start, end }
    }

    /// Slices the covered text out of `source`.
    ///
    /// Returns an empty string when the span does not fall on the source.
    #[must_use]
    pub fn text(self, source: &str) -> &str {
        source.get(self.start..self.end).unwrap_or_default()
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_span_len() {
        let span = Span::new(5, 10);
        assert_eq!(span.len(), 5);
        assert!(!span.is_empty());
        assert!(Span::new(3, 3).is_empty());
    }

    #[test]
    fn test_span_merge() {
        let merged = Span::new(8, 15).merge(Span::new(5, 10));
        assert_eq!(merged, Span::new(5, 15));
    }

    #[test]
    fn test_span_text() {
        let sql = "SELECT id FROM t";
        assert_eq!(Span::new(7, 9).text(sql), "id");
        assert_eq!(Span::new(40, 50).text(sql), "");
    }
}
