//! Source positions attached to every AST node.
//!
//! Lines and columns are 1-based. The all-zero span is reserved for nodes
//! that cover no source text, such as an empty program.

use serde::Serialize;
use std::fmt;

/// A single point in the source text
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct SourceLocation {
    pub line: usize,
    pub column: usize,
}

impl SourceLocation {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Span information for multi-character source ranges
///
/// `end` is exclusive: it points one column past the last character, so a
/// one-line span covers `end.column - start.column` characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Span {
    pub start: SourceLocation,
    pub end: SourceLocation,
}

impl Span {
    pub fn new(start: SourceLocation, end: SourceLocation) -> Self {
        if end < start {
            Self { start: end, end: start }
        } else {
            Self { start, end }
        }
    }

    /// Shorthand for `Span::new` from raw line/column pairs
    pub fn from_coords(
        start_line: usize,
        start_column: usize,
        end_line: usize,
        end_column: usize,
    ) -> Self {
        Self::new(
            SourceLocation::new(start_line, start_column),
            SourceLocation::new(end_line, end_column),
        )
    }

    pub fn single(location: SourceLocation) -> Self {
        Self {
            start: location,
            end: location,
        }
    }

    /// The zero-width span at `0:0`
    pub fn zero() -> Self {
        Self::single(SourceLocation::new(0, 0))
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Smallest span covering both `self` and `other`
    pub fn union(&self, other: &Span) -> Span {
        Span {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }

    /// Smallest span covering every span in `spans`, `None` if there are none
    pub fn enclosing<I>(spans: I) -> Option<Span>
    where
        I: IntoIterator<Item = Span>,
    {
        spans.into_iter().reduce(|acc, span| acc.union(&span))
    }

    pub fn contains(&self, other: &Span) -> bool {
        self.start <= other.start && other.end <= self.end
    }

    /// Get the start line number
    pub fn start_line(&self) -> usize {
        self.start.line
    }

    /// Get the start column number
    pub fn start_column(&self) -> usize {
        self.start.column
    }

    /// Get the end line number
    pub fn end_line(&self) -> usize {
        self.end.line
    }

    /// Get the end column number
    pub fn end_column(&self) -> usize {
        self.end.column
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.start == self.end {
            write!(f, "{}", self.start)
        } else {
            write!(f, "{}-{}", self.start, self.end)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_union_takes_outermost_bounds() {
        let a = Span::from_coords(1, 5, 1, 9);
        let b = Span::from_coords(3, 1, 4, 2);

        let merged = a.union(&b);
        assert_eq!(merged, Span::from_coords(1, 5, 4, 2));
        assert_eq!(merged, b.union(&a));
        assert!(merged.contains(&a));
        assert!(merged.contains(&b));
    }

    #[test]
    fn test_enclosing_empty_is_none() {
        assert_eq!(Span::enclosing(Vec::new()), None);
        assert_eq!(
            Span::enclosing(vec![Span::from_coords(2, 1, 2, 4), Span::from_coords(7, 3, 7, 8)]),
            Some(Span::from_coords(2, 1, 7, 8))
        );
    }

    #[test]
    fn test_new_orders_endpoints() {
        let span = Span::from_coords(5, 2, 1, 1);
        assert_eq!(span.start, SourceLocation::new(1, 1));
        assert_eq!(span.end, SourceLocation::new(5, 2));
    }

    #[test]
    fn test_display() {
        assert_eq!(Span::single(SourceLocation::new(3, 7)).to_string(), "3:7");
        assert_eq!(Span::from_coords(1, 1, 2, 10).to_string(), "1:1-2:10");
        assert!(Span::zero().is_empty());
        assert_eq!(Span::zero().to_string(), "0:0");
    }
}
