//! The scanner operations as free functions. They use a [Scanner] with the default
//! configuration.
use crate::Scanner;

const SCANNER: Scanner = Scanner::new();

/// Check if a comment (`#`, `//` or `/*`) starts at `index`.
pub fn is_comment_start(buffer: &str, index: usize) -> bool {
    SCANNER.is_comment_start(buffer, index)
}

/// See [Scanner::find_end_of_comment].
pub fn find_end_of_comment(buffer: &str, index: usize) -> Option<usize> {
    SCANNER.find_end_of_comment(buffer, index)
}

/// See [Scanner::find_closing_char].
pub fn find_closing_char(buffer: &str, index: usize) -> Option<usize> {
    SCANNER.find_closing_char(buffer, index)
}

/// See [Scanner::remove_comments].
pub fn remove_comments(buffer: &str) -> String {
    SCANNER.remove_comments(buffer)
}

/// See [Scanner::find_next_token].
pub fn find_next_token(buffer: &str, index: usize) -> Option<usize> {
    SCANNER.find_next_token(buffer, index)
}

/// See [Scanner::find_key].
pub fn find_key(buffer: &str, key: &str, index: usize) -> Option<usize> {
    SCANNER.find_key(buffer, key, index)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scenarios() {
        let input = "(hello (world) /* ) */ ), he would say";
        let close = find_closing_char(input, 0).unwrap();
        assert_eq!(&input[close + 1..], ", he would say");

        let input = "options { a 1; }; controls { b 2; };";
        assert_eq!(find_key(input, "controls", 0), Some(18));

        assert_eq!(find_key("key1 \"val\"\n", "key1", 0), Some(0));
        assert_eq!(find_key("key1 \"val\"\n", "val", 0), None);

        assert_eq!(remove_comments("/* never closes"), "");
    }

    #[test]
    fn test_out_of_range() {
        assert!(!is_comment_start("#", 1));
        assert_eq!(find_end_of_comment("#\n", 2), None);
        assert_eq!(find_closing_char("{}", 2), None);
        assert_eq!(find_next_token("a b", 3), None);
        assert_eq!(find_key("a b", "a", 3), None);
        assert_eq!(find_closing_char("", 0), None);
    }

    #[test]
    fn test_comment_functions() {
        let input = "a; // x\n";
        assert!(is_comment_start(input, 3));
        assert_eq!(find_end_of_comment(input, 3), Some(7));
        assert_eq!(find_next_token(input, 0), Some(1));
        assert_eq!(find_next_token(input, 1), None);
    }
}
