use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

/// Punctuation clusters hugging either edge of a word. Punctuation inside a
/// word (`don't`, `a-b`) never sits on a boundary/non-boundary pair and is
/// left alone.
pub const DEFAULT_PUNCTUATION: &str = r#"\b[-.,()&$#!\[\]{}"']+\B|\B[-.,()&$#!\[\]{}"']+\b"#;

static DEFAULT_TRIM: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(DEFAULT_PUNCTUATION).expect("default punctuation pattern compiles")
});

#[derive(Debug, Error)]
#[error("invalid punctuation pattern: {0}")]
pub struct TrimPatternError(#[from] regex::Error);

/// Strips every match of a punctuation pattern from a token.
#[derive(Debug, Clone)]
pub struct PunctuationTrim {
    pattern: Regex,
}

impl PunctuationTrim {
    pub fn new(pattern: &str) -> Result<Self, TrimPatternError> {
        Ok(Self {
            pattern: Regex::new(pattern)?,
        })
    }

    pub fn strip<'a>(&self, token: &'a str) -> Cow<'a, str> {
        self.pattern.replace_all(token, "")
    }

    pub fn as_str(&self) -> &str {
        self.pattern.as_str()
    }
}

impl Default for PunctuationTrim {
    fn default() -> Self {
        Self {
            pattern: DEFAULT_TRIM.clone(),
        }
    }
}
