use log::trace;

use crate::ScanErrorKind;

/// Check if a line comment (`#`, `//`) or a block comment (`/*`) starts at `index`.
/// Reads at most two bytes and never past the end of the buffer.
#[inline]
pub(crate) fn is_comment_start(bytes: &[u8], index: usize) -> bool {
    match bytes.get(index) {
        Some(b'#') => true,
        Some(b'/') => matches!(bytes.get(index + 1), Some(b'/') | Some(b'*')),
        _ => false,
    }
}

#[inline]
pub(crate) fn is_block_comment_start(bytes: &[u8], index: usize) -> bool {
    bytes.get(index) == Some(&b'/') && bytes.get(index + 1) == Some(&b'*')
}

/// Returns the offset where the comment starting at `index` ends.
///
/// For line comments this is the offset of the terminating newline, for block comments the
/// offset of the `/` of the closing `*/`. A comment that runs to the end of the input yields
/// [ScanErrorKind::UnterminatedComment].
pub(crate) fn end_of_comment(bytes: &[u8], index: usize) -> Result<usize, ScanErrorKind> {
    if index >= bytes.len() {
        return Err(ScanErrorKind::IndexOutOfRange {
            index,
            len: bytes.len(),
        });
    }
    let end = if is_block_comment_start(bytes, index) {
        bytes[index + 2..]
            .windows(2)
            .position(|w| w == b"*/")
            .map(|p| index + 2 + p + 1)
    } else if is_comment_start(bytes, index) {
        bytes[index..]
            .iter()
            .position(|&b| b == b'\n')
            .map(|p| index + p)
    } else {
        return Err(ScanErrorKind::NotACommentStart(index));
    };
    end.ok_or_else(|| {
        trace!("Comment at {} runs to the end of the input", index);
        ScanErrorKind::UnterminatedComment(index)
    })
}
