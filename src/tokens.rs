use log::trace;

use crate::{
    internal::advancer::{skip_token, skip_trivia, token_kind},
    Scanner, Span, Token,
};

/// An iterator over the tokens of a buffer.
///
/// Whitespace and comments are skipped. Delimited spans are yielded as one token each, nested
/// content included. The iterator stops at the end of the input or at the first delimited
/// token that is never closed.
///
/// * `'h` represents the lifetime of the haystack being searched.
///
/// This iterator can be created with the [`crate::Scanner::tokens`] method.
#[derive(Debug, Clone)]
pub struct Tokens<'h> {
    scanner: Scanner,
    input: &'h str,
    // Start of the next token, `None` once the input is exhausted.
    next: Option<usize>,
}

impl<'h> Tokens<'h> {
    pub(crate) fn new(scanner: Scanner, input: &'h str) -> Self {
        Self {
            scanner,
            input,
            next: skip_trivia(input.as_bytes(), 0).ok(),
        }
    }

    /// Restarts the iteration at `offset`. If `offset` lies inside a token, the remainder of
    /// that token is yielded first.
    pub fn with_offset(self, offset: usize) -> Self {
        Self {
            next: skip_trivia(self.input.as_bytes(), offset).ok(),
            ..self
        }
    }

    /// The start of the token the next call to `next` will yield.
    #[inline]
    pub fn offset(&self) -> Option<usize> {
        self.next
    }
}

impl Iterator for Tokens<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        let start = self.next.take()?;
        let bytes = self.input.as_bytes();
        let end = match skip_token(bytes, start, self.scanner.max_depth()) {
            Ok(end) => end,
            Err(e) => {
                trace!("Token iteration stopped: {}", e);
                return None;
            }
        };
        self.next = skip_trivia(bytes, end).ok();
        Some(Token::new(token_kind(bytes[start]), Span::new(start, end)))
    }
}

impl std::iter::FusedIterator for Tokens<'_> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Delimiter, TokenKind};

    const INPUT: &str = r#"
# primary zone
zone "example.org" {
    type master; /* static */
};
"#;

    #[test]
    fn test_tokens() {
        let scanner = Scanner::new();
        let tokens: Vec<Token> = scanner.tokens(INPUT).collect();
        assert_eq!(
            tokens,
            vec![
                Token::new(TokenKind::Word, Span::new(16, 20)),
                Token::new(
                    TokenKind::Delimited(Delimiter::DoubleQuote),
                    Span::new(21, 34)
                ),
                Token::new(TokenKind::Delimited(Delimiter::Brace), Span::new(35, 68)),
                Token::new(TokenKind::Terminator, Span::new(68, 69)),
            ]
        );
        assert_eq!(
            tokens
                .iter()
                .map(|t| t.text(INPUT).unwrap())
                .collect::<Vec<_>>(),
            vec![
                "zone",
                "\"example.org\"",
                "{\n    type master; /* static */\n}",
                ";"
            ]
        );
    }

    #[test]
    fn test_tokens_follow_find_next_token() {
        let scanner = Scanner::new();
        let starts: Vec<usize> = scanner.tokens(INPUT).map(|t| t.start()).collect();
        for pair in starts.windows(2) {
            assert_eq!(scanner.find_next_token(INPUT, pair[0]), Some(pair[1]));
        }
        assert_eq!(scanner.find_next_token(INPUT, *starts.last().unwrap()), None);
    }

    #[test]
    fn test_with_offset() {
        let scanner = Scanner::new();
        let mut tokens = scanner.tokens(INPUT).with_offset(37);
        assert_eq!(tokens.offset(), Some(41));
        let token = tokens.next().unwrap();
        assert_eq!(token.text(INPUT), Some("type"));
    }

    #[test]
    fn test_stops_at_unterminated_block() {
        let scanner = Scanner::new();
        let input = "a; b { c;";
        let kinds: Vec<TokenKind> = scanner.tokens(input).map(|t| t.kind()).collect();
        assert_eq!(
            kinds,
            vec![TokenKind::Word, TokenKind::Terminator, TokenKind::Word]
        );
        assert_eq!(scanner.tokens("  # only a comment\n").count(), 0);
        assert_eq!(scanner.tokens("").count(), 0);
    }
}
