//! Module with the delimiter pair table and the byte classes the scanner distinguishes.
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A pair of opening and closing characters whose content is scanned as one unit.
///
/// Quotes are delimiters too, but their body is opaque: nothing inside a string opens a nested
/// delimiter or starts a comment.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Delimiter {
    /// `{` ... `}`
    Brace,
    /// `(` ... `)`
    Paren,
    /// `[` ... `]`
    Bracket,
    /// `"` ... `"`
    DoubleQuote,
    /// `'` ... `'`
    SingleQuote,
}

impl Delimiter {
    /// All recognized delimiter pairs.
    pub const ALL: [Delimiter; 5] = [
        Delimiter::Brace,
        Delimiter::Paren,
        Delimiter::Bracket,
        Delimiter::DoubleQuote,
        Delimiter::SingleQuote,
    ];

    /// Returns the delimiter opened by `c`, if any.
    #[inline]
    pub const fn from_open(c: char) -> Option<Delimiter> {
        match c {
            '{' => Some(Delimiter::Brace),
            '(' => Some(Delimiter::Paren),
            '[' => Some(Delimiter::Bracket),
            '"' => Some(Delimiter::DoubleQuote),
            '\'' => Some(Delimiter::SingleQuote),
            _ => None,
        }
    }

    /// The opening character.
    #[inline]
    pub const fn open(self) -> char {
        match self {
            Delimiter::Brace => '{',
            Delimiter::Paren => '(',
            Delimiter::Bracket => '[',
            Delimiter::DoubleQuote => '"',
            Delimiter::SingleQuote => '\'',
        }
    }

    /// The closing character.
    #[inline]
    pub const fn close(self) -> char {
        match self {
            Delimiter::Brace => '}',
            Delimiter::Paren => ')',
            Delimiter::Bracket => ']',
            Delimiter::DoubleQuote => '"',
            Delimiter::SingleQuote => '\'',
        }
    }

    /// Check if the delimiter encloses a string literal.
    #[inline]
    pub const fn is_quote(self) -> bool {
        matches!(self, Delimiter::DoubleQuote | Delimiter::SingleQuote)
    }

    /// Byte based lookup used by the scanner loops.
    #[inline]
    pub(crate) const fn from_open_byte(b: u8) -> Option<Delimiter> {
        Self::from_open(b as char)
    }

    #[inline]
    pub(crate) const fn close_byte(self) -> u8 {
        self.close() as u8
    }
}

impl std::fmt::Display for Delimiter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.open(), self.close())
    }
}

/// Structural punctuation that ends the current token and forms a token of its own.
#[inline]
pub(crate) const fn is_terminator(b: u8) -> bool {
    matches!(b, b';' | b')' | b']' | b'}')
}

#[inline]
pub(crate) const fn is_whitespace(b: u8) -> bool {
    b.is_ascii_whitespace()
}
