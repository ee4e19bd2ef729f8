use log::trace;

use super::{
    comment::{end_of_comment, is_block_comment_start, is_comment_start},
    matcher::closing_char,
};

/// Copies `input` with all comment text removed.
///
/// Line comments lose their text but keep the terminating newline. Block comments vanish with
/// both delimiters. String literals are copied verbatim, whatever they contain.
///
/// Malformed input degrades open: an unterminated string copies the rest of the input as is, an
/// unterminated comment swallows the rest of the input.
pub(crate) fn strip_comments(input: &str, max_depth: usize) -> String {
    let bytes = input.as_bytes();
    let mut output = String::with_capacity(input.len());
    // Start of the text that is copied once the next comment is found.
    let mut kept = 0;
    let mut pos = 0;
    while pos < bytes.len() {
        if is_comment_start(bytes, pos) {
            output.push_str(&input[kept..pos]);
            let block = is_block_comment_start(bytes, pos);
            match end_of_comment(bytes, pos) {
                Ok(end) if block => pos = end + 1,
                Ok(newline) => pos = newline,
                Err(_) => pos = bytes.len(),
            }
            kept = pos;
        } else if matches!(bytes[pos], b'"' | b'\'') {
            match closing_char(bytes, pos, max_depth) {
                Ok(end) => pos = end + 1,
                Err(e) => {
                    trace!("Copying the remaining input verbatim: {}", e);
                    pos = bytes.len();
                }
            }
        } else {
            pos += 1;
        }
    }
    output.push_str(&input[kept..]);
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strip(input: &str) -> String {
        strip_comments(input, 256)
    }

    #[test]
    fn test_line_comments_keep_newline() {
        assert_eq!(
            strip("a 1; # one\nb 2; // two\nc 3;"),
            "a 1; \nb 2; \nc 3;"
        );
    }

    #[test]
    fn test_block_comments_vanish() {
        assert_eq!(strip("a /* x\ny */b"), "a b");
        assert_eq!(strip("/**/"), "");
    }

    #[test]
    fn test_strings_are_kept() {
        let input = r#"file "/var/named/#1.db" /* x */; url 'http://a/*b*/';"#;
        assert_eq!(
            strip(input),
            r#"file "/var/named/#1.db" ; url 'http://a/*b*/';"#
        );
    }

    #[test]
    fn test_unterminated_comments() {
        assert_eq!(strip("/* never closes"), "");
        assert_eq!(strip("a; # trailing"), "a; ");
        assert_eq!(strip("a; // trailing"), "a; ");
    }

    #[test]
    fn test_unterminated_string_copies_rest() {
        assert_eq!(strip("a /* x */ \"open # y"), "a  \"open # y");
    }

    #[test]
    fn test_non_ascii_text() {
        assert_eq!(strip("größe \"ü#\" # ä\n"), "größe \"ü#\" \n");
    }
}
