//! Mergetok - High-level tokenizer API
//!
//! This crate ties the vocabulary, merge learner and greedy encoder into a
//! single tokenizer that can be trained on raw text, persisted as JSON and
//! reloaded.
//!
//! # Features
//!
//! - Builder pattern for tokenizer configuration
//! - Normalizing pre-tokenizer (line endings, Unicode forms, case, punctuation)
//! - Deterministic merge learning, optionally with parallel pair counting
//! - Greedy longest-match encoding and lossy-but-stable decoding
//! - JSON persistence of the vocabulary and merge list
//!
//! # Example
//!
//! ```rust
//! use mergetok::{EncodeOptions, Tokenizer};
//!
//! let mut tokenizer = Tokenizer::builder().vocab_size(40).build()?;
//! tokenizer.train("the cat sat on the mat. the cat sat.")?;
//!
//! let ids = tokenizer.encode("The cat sat.", EncodeOptions::framed());
//! assert_eq!(tokenizer.decode(&ids), "the cat sat .");
//! # Ok::<(), mergetok::TokenizerError>(())
//! ```

// Re-export core types
pub use mergetok_core::{
    MergeHistory, MergeRule, Result, SpecialTokens, SpecialTokensConfig, TokenizerError,
    Vocabulary, DEFAULT_SEPARATOR,
};
pub use mergetok_training::{StopReason, TrainSummary};

// Tokenizer API
pub mod tokenizer;
pub use tokenizer::{EncodeOptions, Tokenizer, TokenizerBuilder, TokenizerConfig};

// Encoding/decoding
pub mod encoding;
pub use encoding::{Decoder, SubwordEncoder};

// IO/Serialization
pub mod io;
pub use io::{TokenizerLoader, TokenizerSaver, VocabRecord};

// Pre-tokenization
pub mod pre_tokenizer;
pub use pre_tokenizer::{NormalizationForm, Normalizer, PreTokenizer, Splitter};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
