//! Merge history for training provenance.
//!
//! Rules are kept in the order they were learned. Encoding does not replay
//! them; it segments against the final vocabulary instead, so the history is
//! persisted for provenance only.

use crate::error::{Result, TokenizerError};
use compact_str::CompactString;
use std::fmt;
use std::str::FromStr;

/// A pair of token IDs that can be merged.
pub type Pair = (u32, u32);

/// A learned instruction to fuse two adjacent symbols.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MergeRule {
    pub left: CompactString,
    pub right: CompactString,
}

impl MergeRule {
    pub fn new(left: &str, right: &str) -> Self {
        Self {
            left: CompactString::new(left),
            right: CompactString::new(right),
        }
    }

    /// The symbol produced by this merge.
    pub fn merged(&self) -> CompactString {
        let mut out = CompactString::with_capacity(self.left.len() + self.right.len());
        out.push_str(&self.left);
        out.push_str(&self.right);
        out
    }
}

/// Persisted as `"left right"`. Symbols never contain whitespace, so a single
/// space is an unambiguous delimiter.
impl fmt::Display for MergeRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.left, self.right)
    }
}

impl FromStr for MergeRule {
    type Err = TokenizerError;

    fn from_str(s: &str) -> Result<Self> {
        let mut parts = s.split(' ');
        match (parts.next(), parts.next(), parts.next()) {
            (Some(left), Some(right), None) if !left.is_empty() && !right.is_empty() => {
                Ok(Self::new(left, right))
            }
            _ => Err(TokenizerError::malformed(format!(
                "merge '{}' is not two space-delimited symbols",
                s
            ))),
        }
    }
}

/// Ordered sequence of merge rules.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MergeHistory {
    rules: Vec<MergeRule>,
}

impl MergeHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a rule learned after every rule already present.
    pub fn push(&mut self, rule: MergeRule) {
        self.rules.push(rule);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, MergeRule> {
        self.rules.iter()
    }

    pub fn get(&self, rank: usize) -> Option<&MergeRule> {
        self.rules.get(rank)
    }
}

impl FromIterator<MergeRule> for MergeHistory {
    fn from_iter<I: IntoIterator<Item = MergeRule>>(iter: I) -> Self {
        Self {
            rules: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a MergeHistory {
    type Item = &'a MergeRule;
    type IntoIter = std::slice::Iter<'a, MergeRule>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merged_symbol() {
        let rule = MergeRule::new("ab", "c</w>");
        assert_eq!(rule.merged(), "abc</w>");
    }

    #[test]
    fn test_display_and_parse() {
        let rule = MergeRule::new("a", "b");
        assert_eq!(rule.to_string(), "a b");
        assert_eq!("a b".parse::<MergeRule>().unwrap(), rule);
    }

    #[test]
    fn test_parse_rejects_bad_entries() {
        for bad in ["ab", "a b c", " b", "a ", ""] {
            let err = bad.parse::<MergeRule>().unwrap_err();
            assert!(matches!(err, TokenizerError::MalformedState(_)), "{bad:?}");
        }
    }

    #[test]
    fn test_history_keeps_learned_order() {
        let mut history = MergeHistory::new();
        history.push(MergeRule::new("a", "a"));
        history.push(MergeRule::new("aa", "a"));

        assert_eq!(history.len(), 2);
        assert_eq!(history.get(0).unwrap().merged(), "aa");
        assert_eq!(history.get(1).unwrap().merged(), "aaa");

        let rendered: Vec<String> = history.iter().map(|r| r.to_string()).collect();
        assert_eq!(rendered, vec!["a a", "aa a"]);
    }
}
