use log::trace;

use super::{
    advancer::{is_inside_word, next_token},
    matcher::closing_char,
};
use crate::{delimiter::is_terminator, Span};

/// Walks token by token from `index` until a token equal to `key` is found.
///
/// Nested blocks are skipped as whole tokens, so a key inside a deeper `{ ... }` is never
/// reported. The walk does not stop at the `}` that closes the scope it started in: with
/// unbalanced braces, or when called near the end of a block, it may return a key of an
/// enclosing scope.
///
/// Started in the middle of a word, the walk begins with the next token. `index` must not lie
/// inside a comment or a string literal: their text is not recognized from within.
pub(crate) fn locate_key(
    bytes: &[u8],
    key: &[u8],
    index: usize,
    max_depth: usize,
) -> Option<usize> {
    if key.is_empty() || index >= bytes.len() {
        return None;
    }
    let mut pos = if is_inside_word(bytes, index) {
        next_token(bytes, index, max_depth).ok()?
    } else {
        index
    };
    loop {
        if is_key_at(bytes, key, pos) {
            return Some(pos);
        }
        pos = next_token(bytes, pos, max_depth).ok()?;
    }
}

/// Locates `key` and returns the span of the `{ ... }` block of its statement, braces included.
pub(crate) fn locate_section(
    bytes: &[u8],
    key: &[u8],
    index: usize,
    max_depth: usize,
) -> Option<Span> {
    let found = locate_key(bytes, key, index, max_depth)?;
    let mut pos = next_token(bytes, found, max_depth).ok()?;
    loop {
        match bytes[pos] {
            b'{' => {
                let end = closing_char(bytes, pos, max_depth).ok()?;
                return Some(Span::new(pos, end + 1));
            }
            b if is_terminator(b) => {
                trace!("Statement at {} ends without a block", found);
                return None;
            }
            _ => pos = next_token(bytes, pos, max_depth).ok()?,
        }
    }
}

/// The key must be followed by whitespace, `{` or `;` to be a complete token.
#[inline]
fn is_key_at(bytes: &[u8], key: &[u8], pos: usize) -> bool {
    bytes[pos..].starts_with(key)
        && bytes
            .get(pos + key.len())
            .is_some_and(|&b| b.is_ascii_whitespace() || b == b'{' || b == b';')
}
