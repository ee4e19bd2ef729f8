use super::{
    comment::{end_of_comment, is_comment_start},
    matcher::closing_char,
};
use crate::{
    delimiter::{is_terminator, is_whitespace},
    Delimiter, ScanErrorKind, TokenKind,
};

/// Returns the offset just behind the token at `index`.
///
/// A delimited span is one token, as is a comment or a single terminator. Plain text runs up to
/// the next whitespace, comment, opening delimiter or terminator. On whitespace nothing is
/// consumed and `index` itself is returned.
pub(crate) fn skip_token(
    bytes: &[u8],
    index: usize,
    max_depth: usize,
) -> Result<usize, ScanErrorKind> {
    let Some(&b) = bytes.get(index) else {
        return Err(ScanErrorKind::IndexOutOfRange {
            index,
            len: bytes.len(),
        });
    };
    if Delimiter::from_open_byte(b).is_some() {
        Ok(closing_char(bytes, index, max_depth)? + 1)
    } else if is_comment_start(bytes, index) {
        Ok(end_of_comment(bytes, index)? + 1)
    } else if is_terminator(b) {
        Ok(index + 1)
    } else if is_whitespace(b) {
        Ok(index)
    } else {
        let end = bytes[index..]
            .iter()
            .enumerate()
            .position(|(i, &c)| is_word_boundary(bytes, index + i, c))
            .map_or(bytes.len(), |p| index + p);
        Ok(end)
    }
}

/// Returns the offset of the first byte at or after `index` that is neither whitespace nor part
/// of a comment.
pub(crate) fn skip_trivia(bytes: &[u8], mut index: usize) -> Result<usize, ScanErrorKind> {
    while let Some(&b) = bytes.get(index) {
        if is_whitespace(b) {
            index += 1;
        } else if is_comment_start(bytes, index) {
            index = end_of_comment(bytes, index)? + 1;
        } else {
            return Ok(index);
        }
    }
    Err(ScanErrorKind::EndOfInput)
}

/// Returns the start of the token following the one at `index`.
pub(crate) fn next_token(
    bytes: &[u8],
    index: usize,
    max_depth: usize,
) -> Result<usize, ScanErrorKind> {
    let end = skip_token(bytes, index, max_depth)?;
    skip_trivia(bytes, end)
}

/// Classifies the token starting with `b`.
pub(crate) fn token_kind(b: u8) -> TokenKind {
    if let Some(delimiter) = Delimiter::from_open_byte(b) {
        TokenKind::Delimited(delimiter)
    } else if is_terminator(b) {
        TokenKind::Terminator
    } else {
        TokenKind::Word
    }
}

/// Check if `index` continues a word that started before it.
/// The `/` closing a block comment does not count as word text.
pub(crate) fn is_inside_word(bytes: &[u8], index: usize) -> bool {
    match (index.checked_sub(1), bytes.get(index)) {
        (Some(prev), Some(&b)) => {
            !is_word_boundary(bytes, index, b)
                && !is_word_boundary(bytes, prev, bytes[prev])
                && !bytes[..index].ends_with(b"*/")
        }
        _ => false,
    }
}

#[inline]
fn is_word_boundary(bytes: &[u8], index: usize, b: u8) -> bool {
    is_whitespace(b)
        || is_terminator(b)
        || Delimiter::from_open_byte(b).is_some()
        || is_comment_start(bytes, index)
}
