use log::trace;

use super::comment::{end_of_comment, is_comment_start};
use crate::{Delimiter, ScanErrorKind};

/// Finds the offset of the character that closes the delimiter opened at `index`.
///
/// Pending closers live on an explicit stack instead of the call stack, so deep nesting costs
/// heap and is capped by `max_depth` (the outermost delimiter counts). Only the closer expected
/// by the innermost open delimiter ends it; stray closers of other kinds are ignored.
///
/// Inside a string nothing but the matching quote and backslash escapes is significant.
/// Outside strings, comments are skipped and a backslash skips the following byte as well.
pub(crate) fn closing_char(
    bytes: &[u8],
    index: usize,
    max_depth: usize,
) -> Result<usize, ScanErrorKind> {
    let Some(&first) = bytes.get(index) else {
        return Err(ScanErrorKind::IndexOutOfRange {
            index,
            len: bytes.len(),
        });
    };
    let Some(outer) = Delimiter::from_open_byte(first) else {
        return Err(ScanErrorKind::NotAnOpener(first as char, index));
    };
    if max_depth == 0 {
        return Err(ScanErrorKind::NestingTooDeep(max_depth));
    }

    let mut pending: Vec<(Delimiter, usize)> = vec![(outer, index)];
    let mut pos = index + 1;
    while let Some((innermost, _)) = pending.last().copied() {
        let Some(&b) = bytes.get(pos) else {
            break;
        };
        if b == innermost.close_byte() {
            pending.pop();
            if pending.is_empty() {
                return Ok(pos);
            }
            pos += 1;
        } else if b == b'\\' {
            pos += 2;
        } else if innermost.is_quote() {
            pos += 1;
        } else if is_comment_start(bytes, pos) {
            pos = end_of_comment(bytes, pos)? + 1;
        } else if let Some(nested) = Delimiter::from_open_byte(b) {
            if pending.len() >= max_depth {
                trace!("Nesting at {} exceeds the depth limit {}", pos, max_depth);
                return Err(ScanErrorKind::NestingTooDeep(max_depth));
            }
            pending.push((nested, pos));
            pos += 1;
        } else {
            pos += 1;
        }
    }

    // Report the innermost delimiter that was left open.
    let (open, at) = pending.last().copied().unwrap_or((outer, index));
    trace!("'{}' opened at {} is never closed", open.open(), at);
    Err(ScanErrorKind::UnterminatedDelimiter(open.open(), at))
}
