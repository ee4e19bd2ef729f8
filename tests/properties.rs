//! Property tests for the scanner operations.
use braces::{find_closing_char, find_next_token, remove_comments};
use proptest::prelude::*;

/// Text without delimiters or comment characters, a string literal or a terminated comment.
fn leaf() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-z0-9 ;]{0,6}",
        r#""[a-z )}\]/#*;]{0,6}""#,
        r"/\*[a-z )}\]#;]{0,5}\*/",
        r"#[a-z )}\];]{0,5}\n",
        r"//[a-z )}\]*;]{0,5}\n",
    ]
}

/// Balanced text: leaves and properly closed groups of further balanced text.
fn balanced() -> impl Strategy<Value = String> {
    leaf().prop_recursive(4, 64, 4, |inner| {
        (
            prop::collection::vec(inner, 0..4),
            prop::sample::select(vec![('{', '}'), ('(', ')'), ('[', ']')]),
        )
            .prop_map(|(parts, (open, close))| format!("{}{}{}", open, parts.concat(), close))
    })
}

proptest! {
    #[test]
    fn closing_paren_of_balanced_span(
        body in prop::collection::vec(balanced(), 0..4),
        tail in "[a-z )]{0,5}",
    ) {
        let body = body.concat();
        let input = format!("({}){}", body, tail);
        prop_assert_eq!(find_closing_char(&input, 0), Some(body.len() + 1));
    }

    #[test]
    fn remove_comments_is_idempotent(input in "[ab {};#/*\n]{0,40}") {
        let once = remove_comments(&input);
        prop_assert_eq!(remove_comments(&once), once);
    }

    #[test]
    fn remove_comments_keeps_strings(
        prefix in "[a-z ;{}]{0,8}",
        content in "[a-z #/*]{0,12}",
        suffix in "[a-z ;]{0,5}( # x)?( /\\* y \\*/)?",
    ) {
        let literal = format!("\"{}\"", content);
        let input = format!("{}{}{}", prefix, literal, suffix);
        let stripped = remove_comments(&input);
        let expected = format!("{}{}", prefix, literal);
        prop_assert!(stripped.starts_with(&expected));
    }

    #[test]
    fn token_walk_is_strictly_increasing(input in r#"[a-z {}()\[\];#/*"\\\n]{1,40}"#) {
        let mut pos = 0;
        while let Some(next) = find_next_token(&input, pos) {
            prop_assert!(next > pos);
            prop_assert!(next < input.len());
            pos = next;
        }
    }
}
