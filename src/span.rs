#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A byte range in the scanned buffer.
#[derive(Debug, Clone, Copy, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Span {
    /// The start offset of the span, inclusive.
    pub start: usize,
    /// The end offset of the span, exclusive.
    pub end: usize,
}

impl Span {
    /// Create a new span.
    #[inline]
    pub fn new(start: usize, end: usize) -> Self {
        Span { start, end }
    }

    /// Check if the span is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    /// Get the length of the span.
    #[inline]
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Get the span as range.
    #[inline]
    pub fn range(self) -> std::ops::Range<usize> {
        self.start..self.end
    }

    /// The span without its first and last byte, e.g. the body of a `{ ... }` block.
    /// Spans shorter than two bytes yield an empty span at their start.
    pub fn inner(self) -> Span {
        if self.len() < 2 {
            Span::new(self.start, self.start)
        } else {
            Span::new(self.start + 1, self.end - 1)
        }
    }

    /// The text the span covers in `buffer`, or `None` if the span does not fit.
    #[inline]
    pub fn text(self, buffer: &str) -> Option<&str> {
        buffer.get(self.range())
    }
}

impl From<std::ops::Range<usize>> for Span {
    fn from(range: std::ops::Range<usize>) -> Self {
        Span::new(range.start, range.end)
    }
}

impl std::fmt::Display for Span {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}
