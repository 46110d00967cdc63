pub mod parser;
pub mod punctuation;
pub mod token;

pub use parser::{line_at, token_at, SEPARATOR};
pub use punctuation::{PunctuationTrim, TrimPatternError, DEFAULT_PUNCTUATION};
pub use token::{Span, Token};

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn text(line: &str, offset: usize) -> Option<&str> {
        token_at(line, offset).map(|t| t.text)
    }

    #[test]
    fn test_token_at_basic() {
        assert_eq!(text("hello world", 2), Some("hello"));
        assert_eq!(text("hello world", 6), Some("world"));
        assert_eq!(text("", 0), None);
        assert_eq!(text("onlyoneword", 4), Some("onlyoneword"));
    }

    #[test]
    fn test_token_at_run_edges() {
        // Start of line and the separator right after a run both select it.
        assert_eq!(text("hello world", 0), Some("hello"));
        assert_eq!(text("hello world", 5), Some("hello"));
        assert_eq!(text("hello world", 11), Some("world"));
        // Past the end falls back to the last run.
        assert_eq!(text("hello world", 40), Some("world"));
    }

    #[test]
    fn test_token_at_span() {
        let token = token_at("ɡa tuks.", 5).unwrap();
        assert_eq!(token.text, "tuks.");
        // "ɡ" is two bytes in UTF-8.
        assert_eq!(token.span, Span::new(4, 9));
        assert_eq!(&"ɡa tuks."[token.span.start..token.span.end], "tuks.");
        assert_eq!(token.span.len(), 5);
    }

    #[test]
    fn test_token_at_counts_characters() {
        // "ƛ'uχ" is four characters; offset 5 is the first char of "it".
        assert_eq!(text("ƛ'uχ itʔ", 5), Some("itʔ"));
        assert_eq!(text("ƛ'uχ itʔ", 4), Some("ƛ'uχ"));
    }

    #[test]
    fn test_only_space_separates() {
        assert_eq!(text("a\tb c", 1), Some("a\tb"));
        assert_eq!(text("a\u{a0}b", 0), Some("a\u{a0}b"));
    }

    #[test]
    fn test_empty_runs_yield_nothing() {
        assert_eq!(text("a  b", 2), None);
        assert_eq!(text("a  b", 3), Some("b"));
        assert_eq!(text("hello ", 6), None);
        assert_eq!(text(" hello", 0), None);
        assert_eq!(text(" hello", 1), Some("hello"));
    }

    #[test]
    fn test_line_at() {
        let buffer = "first line\r\nsecond line\nthird";
        assert_eq!(line_at(buffer, 0), Some("first line"));
        assert_eq!(line_at(buffer, 1), Some("second line"));
        assert_eq!(line_at(buffer, 2), Some("third"));
        assert_eq!(line_at(buffer, 3), None);
    }

    #[test]
    fn test_default_trim() {
        let trim = PunctuationTrim::default();
        assert_eq!(trim.strip("tuks."), "tuks");
        assert_eq!(trim.strip("(tuks)"), "tuks");
        assert_eq!(trim.strip("\"tuks,\""), "tuks");
        assert_eq!(trim.strip("[itʔ]!"), "itʔ");
        assert_eq!(trim.as_str(), DEFAULT_PUNCTUATION);
    }

    #[test]
    fn test_default_trim_keeps_inner_punctuation() {
        let trim = PunctuationTrim::default();
        assert_eq!(trim.strip("don't"), "don't");
        assert_eq!(trim.strip("a-ɡa"), "a-ɡa");
        assert_eq!(trim.strip("don't."), "don't");
    }

    #[test]
    fn test_custom_trim_pattern() {
        let trim = PunctuationTrim::new(r"[?]+$").unwrap();
        assert_eq!(trim.strip("tuks??"), "tuks");
        assert_eq!(trim.strip("tuks."), "tuks.");

        assert!(PunctuationTrim::new("[unclosed").is_err());
    }

    proptest! {
        #[test]
        fn test_token_is_always_a_slice_of_the_line(
            line in "[a-c \t]{0,24}",
            offset in 0usize..32,
        ) {
            if let Some(token) = token_at(&line, offset) {
                prop_assert!(!token.text.is_empty());
                prop_assert!(!token.text.contains(SEPARATOR));
                prop_assert_eq!(&line[token.span.start..token.span.end], token.text);
            }
        }

        #[test]
        fn test_every_word_is_reachable(words in prop::collection::vec("[a-z]{1,6}", 1..6)) {
            let line = words.join(" ");
            let mut offset = 0;
            for word in &words {
                prop_assert_eq!(text(&line, offset), Some(word.as_str()));
                offset += word.chars().count() + 1;
            }
        }

        #[test]
        fn test_trim_leaves_clean_tokens_alone(word in "[a-zʔƛɬ]{1,10}(['-][a-z]{1,4})?") {
            let trim = PunctuationTrim::default();
            let once = trim.strip(&word).into_owned();
            prop_assert_eq!(&once, &word);
            prop_assert_eq!(trim.strip(&once), once.as_str());
        }
    }
}
