#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{Delimiter, Span};

/// The lexical class of a token.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TokenKind {
    /// A run of text up to whitespace, a comment, an opening delimiter or a terminator.
    Word,
    /// A complete delimited span, nested content included.
    Delimited(Delimiter),
    /// One of `;`, `)`, `]` or `}`.
    Terminator,
}

/// A token in the haystack.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Token {
    /// The lexical class of the token.
    kind: TokenKind,
    /// The bytes the token covers.
    span: Span,
}

impl Token {
    /// Create a new token.
    pub fn new(kind: TokenKind, span: Span) -> Self {
        Self { kind, span }
    }

    /// Get the start of the token.
    #[inline]
    pub fn start(&self) -> usize {
        self.span.start
    }

    /// Get the end of the token.
    #[inline]
    pub fn end(&self) -> usize {
        self.span.end
    }

    /// Get the span of the token.
    #[inline]
    pub fn span(&self) -> Span {
        self.span
    }

    /// Get the span as range
    #[inline]
    pub fn range(&self) -> std::ops::Range<usize> {
        self.span.range()
    }

    /// Get the kind of the token.
    #[inline]
    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    /// The text of the token within the buffer it was scanned from.
    #[inline]
    pub fn text<'h>(&self, buffer: &'h str) -> Option<&'h str> {
        buffer.get(self.range())
    }
}
