//! Core data structures shared by training and inference.

pub mod merges;
pub mod vocab;
pub mod word;

pub use merges::{MergeHistory, MergeRule, Pair};
pub use vocab::{
    is_punctuation, validate_separator, SpecialTokens, SpecialTokensConfig, SymbolMap, Vocabulary,
    DEFAULT_SEPARATOR, PUNCTUATION_PATTERN,
};
pub use word::Word;
