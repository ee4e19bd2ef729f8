use log::trace;

use crate::{
    internal::{advancer, comment, locator, matcher, stripper},
    Result, ScanError, ScanErrorKind, Span, Tokens, DEFAULT_MAX_DEPTH,
};

/// A scanner for brace/semicolon delimited configuration text.
///
/// The scanner holds no state besides its configuration. Every method is a query against the
/// given buffer and an offset into it; offsets are byte offsets and always lie on character
/// boundaries. A miss is reported as `None`, the `try_*` variants report the reason instead.
///
/// Use the [crate::ScannerBuilder] to create a scanner with a custom configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scanner {
    max_depth: usize,
}

impl Scanner {
    /// Creates a scanner with the default configuration.
    pub const fn new() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    pub(crate) const fn with_max_depth(max_depth: usize) -> Self {
        Self { max_depth }
    }

    /// The maximum number of simultaneously open delimiters.
    #[inline]
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Check if a comment (`#`, `//` or `/*`) starts at `index`.
    #[inline]
    pub fn is_comment_start(&self, buffer: &str, index: usize) -> bool {
        comment::is_comment_start(buffer.as_bytes(), index)
    }

    /// Returns the offset where the comment at `index` ends: the terminating newline of a line
    /// comment, or the `/` of the `*/` closing a block comment.
    pub fn find_end_of_comment(&self, buffer: &str, index: usize) -> Option<usize> {
        self.try_find_end_of_comment(buffer, index).ok()
    }

    /// Like [Scanner::find_end_of_comment], but tells why no end was found.
    pub fn try_find_end_of_comment(&self, buffer: &str, index: usize) -> Result<usize> {
        comment::end_of_comment(buffer.as_bytes(), index).map_err(miss)
    }

    /// Returns the offset of the character closing the delimiter at `index`.
    ///
    /// Nested delimiters, comments and string contents are skipped. An unbalanced nested
    /// delimiter fails the whole match.
    pub fn find_closing_char(&self, buffer: &str, index: usize) -> Option<usize> {
        self.try_find_closing_char(buffer, index).ok()
    }

    /// Like [Scanner::find_closing_char], but tells why no closer was found.
    pub fn try_find_closing_char(&self, buffer: &str, index: usize) -> Result<usize> {
        matcher::closing_char(buffer.as_bytes(), index, self.max_depth).map_err(miss)
    }

    /// Returns a copy of `buffer` without comments.
    ///
    /// Line comments keep their terminating newline. Strings are never searched for comments.
    /// An unterminated string copies the remainder verbatim; an unterminated comment removes it.
    pub fn remove_comments(&self, buffer: &str) -> String {
        stripper::strip_comments(buffer, self.max_depth)
    }

    /// Returns the start of the token that follows the one at `index`.
    ///
    /// `index` may point into the middle of a token, at whitespace or at a comment. Delimited
    /// spans are skipped as one token. Repeated calls from the returned offset advance strictly.
    pub fn find_next_token(&self, buffer: &str, index: usize) -> Option<usize> {
        self.try_find_next_token(buffer, index).ok()
    }

    /// Like [Scanner::find_next_token], but tells why no token was found.
    pub fn try_find_next_token(&self, buffer: &str, index: usize) -> Result<usize> {
        advancer::next_token(buffer.as_bytes(), index, self.max_depth).map_err(miss)
    }

    /// Returns the offset of `key` as a complete token in the scope that contains `index`.
    ///
    /// Keys inside nested blocks are not found. The search does not stop at the end of the
    /// scope it started in, so with unbalanced braces a key of an enclosing scope may be found.
    /// An `index` in the middle of a word starts the search at the following token; it must not
    /// lie inside a comment or a string literal.
    pub fn find_key(&self, buffer: &str, key: &str, index: usize) -> Option<usize> {
        locator::locate_key(buffer.as_bytes(), key.as_bytes(), index, self.max_depth)
    }

    /// Locates `key` like [Scanner::find_key] and returns the span of the `{ ... }` block of its
    /// statement, braces included. Tokens between the key and the block, like the name in
    /// `zone "example.org" { ... };`, are skipped.
    ///
    /// Returns `None` if the statement ends before a block opens.
    pub fn find_section(&self, buffer: &str, key: &str, index: usize) -> Option<Span> {
        locator::locate_section(buffer.as_bytes(), key.as_bytes(), index, self.max_depth)
    }

    /// Returns an iterator over all tokens of `buffer`.
    pub fn tokens<'h>(&self, buffer: &'h str) -> Tokens<'h> {
        Tokens::new(*self, buffer)
    }
}

impl Default for Scanner {
    fn default() -> Self {
        Self::new()
    }
}

fn miss(kind: ScanErrorKind) -> ScanError {
    trace!("Scan miss: {}", kind);
    kind.into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_try_variants_report_reasons() {
        let scanner = Scanner::new();
        let error = scanner.try_find_closing_char("{ \"a }", 0).unwrap_err();
        assert!(matches!(
            error.kind(),
            ScanErrorKind::UnterminatedDelimiter('"', 2)
        ));
        assert_eq!(error.to_string(), "Unterminated '\"' opened at 2");
        assert!(matches!(
            scanner.try_find_end_of_comment("abc", 0).unwrap_err().kind(),
            ScanErrorKind::NotACommentStart(0)
        ));
        assert!(matches!(
            scanner.try_find_next_token("a ", 0).unwrap_err().kind(),
            ScanErrorKind::EndOfInput
        ));
    }

    #[test]
    fn test_non_ascii_offsets_are_char_boundaries() {
        let scanner = Scanner::new();
        let input = "schlüssel \"wert\"; größe { ä; };";
        let mut pos = 0;
        while let Some(next) = scanner.find_next_token(input, pos) {
            assert!(input.is_char_boundary(next));
            pos = next;
        }
        let key = scanner.find_key(input, "größe", 0).unwrap();
        assert_eq!(&input[key..key + "größe".len()], "größe");
    }
}
