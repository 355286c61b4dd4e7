//! Word splitting for pre-tokenization.
//!
//! Every punctuation character becomes its own word; everything else is
//! split on whitespace.

use mergetok_core::PUNCTUATION_PATTERN;
use regex::Regex;
use std::sync::OnceLock;

fn punctuation() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(PUNCTUATION_PATTERN).expect("Invalid punctuation pattern"))
}

fn whitespace() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\s+").expect("Invalid whitespace pattern"))
}

/// Text splitter for pre-tokenization.
#[derive(Debug, Clone, Copy, Default)]
pub struct Splitter;

impl Splitter {
    pub fn new() -> Self {
        Self
    }

    /// Split normalized text into words.
    ///
    /// Empty or whitespace-only text yields no words.
    pub fn split(&self, text: &str) -> Vec<String> {
        let spaced = punctuation().replace_all(text, " $0 ");
        let collapsed = whitespace().replace_all(&spaced, " ");

        collapsed
            .trim()
            .split(' ')
            .filter(|w| !w.is_empty())
            .map(str::to_string)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whitespace_split() {
        let result = Splitter::new().split("hello world  \t test\n");
        assert_eq!(result, vec!["hello", "world", "test"]);
    }

    #[test]
    fn test_punctuation_isolated() {
        let result = Splitter::new().split("hello, world!!");
        assert_eq!(result, vec!["hello", ",", "world", "!", "!"]);
    }

    #[test]
    fn test_ascii_symbols_and_unicode_punctuation() {
        let result = Splitter::new().split("a+b=c «ok»");
        assert_eq!(result, vec!["a", "+", "b", "=", "c", "«", "ok", "»"]);
    }

    #[test]
    fn test_apostrophe_splits_word() {
        let result = Splitter::new().split("don't");
        assert_eq!(result, vec!["don", "'", "t"]);
    }

    #[test]
    fn test_empty_string() {
        assert_eq!(Splitter::new().split(""), Vec::<String>::new());
        assert_eq!(Splitter::new().split(" \n\t "), Vec::<String>::new());
    }
}
