//! mergetok-core - Core data structures for the mergetok subword tokenizer
//!
//! This crate provides the vocabulary store, the merge history and the
//! shared error type, independent of how text is segmented or trained.
//!
//! # Example
//!
//! ```rust
//! use mergetok_core::{SpecialTokensConfig, Vocabulary};
//!
//! let mut vocab = Vocabulary::new(SpecialTokensConfig::default(), "</w>")?;
//! let id = vocab.add_symbol("he");
//! assert_eq!(vocab.symbol_of(id), "he");
//! assert_eq!(vocab.id_of("missing"), vocab.special().unk);
//! # Ok::<(), mergetok_core::TokenizerError>(())
//! ```

pub mod error;
pub use error::{Result, TokenizerError};

pub mod core;
pub use core::{
    is_punctuation, validate_separator, MergeHistory, MergeRule, Pair, SpecialTokens,
    SpecialTokensConfig, SymbolMap, Vocabulary, Word, DEFAULT_SEPARATOR, PUNCTUATION_PATTERN,
};
