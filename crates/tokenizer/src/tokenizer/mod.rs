//! Main tokenizer implementation.
//!
//! This module provides the high-level `Tokenizer` struct that ties the
//! pre-tokenizer, the merge learner, the encoder/decoder and persistence
//! together.

use crate::encoding::{Decoder, SubwordEncoder};
use crate::io::{TokenizerLoader, TokenizerSaver, VocabRecord};
use crate::pre_tokenizer::{NormalizationForm, PreTokenizer};
use log::debug;
use mergetok_core::{
    MergeHistory, Result, SpecialTokensConfig, TokenizerError, Vocabulary, DEFAULT_SEPARATOR,
};
use mergetok_training::{BpeTrainer, TrainSummary, TrainingConfig};
use std::path::Path;

/// Configuration for building a tokenizer.
#[derive(Debug, Clone)]
pub struct TokenizerConfig {
    /// Target vocabulary size
    pub vocab_size: usize,
    /// Minimum frequency for merges during training
    pub min_frequency: u64,
    /// Marker appended to every word
    pub separator: String,
    /// Special tokens configuration
    pub special_tokens: SpecialTokensConfig,
    /// Unicode normalization applied before lowercasing
    pub normalization: NormalizationForm,
    /// Count pairs on the rayon pool during training
    pub parallel: bool,
}

impl Default for TokenizerConfig {
    fn default() -> Self {
        Self {
            vocab_size: 3000,
            min_frequency: 2,
            separator: DEFAULT_SEPARATOR.to_string(),
            special_tokens: SpecialTokensConfig::default(),
            normalization: NormalizationForm::None,
            parallel: false,
        }
    }
}

impl TokenizerConfig {
    fn training(&self) -> TrainingConfig {
        TrainingConfig {
            vocab_size: self.vocab_size,
            min_frequency: self.min_frequency,
            parallel: self.parallel,
            special_tokens: self.special_tokens.clone(),
            separator: self.separator.clone(),
        }
    }
}

/// Builder for creating a tokenizer.
#[derive(Clone, Default)]
pub struct TokenizerBuilder {
    config: TokenizerConfig,
}

impl TokenizerBuilder {
    /// Create a new tokenizer builder with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the target vocabulary size.
    pub fn vocab_size(mut self, size: usize) -> Self {
        self.config.vocab_size = size;
        self
    }

    /// Set the minimum frequency for merges.
    pub fn min_frequency(mut self, freq: u64) -> Self {
        self.config.min_frequency = freq;
        self
    }

    /// Set the word-boundary separator.
    pub fn separator(mut self, separator: impl Into<String>) -> Self {
        self.config.separator = separator.into();
        self
    }

    /// Set special tokens.
    pub fn with_special_tokens(mut self, tokens: SpecialTokensConfig) -> Self {
        self.config.special_tokens = tokens;
        self
    }

    /// Set the Unicode normalization form.
    pub fn normalization(mut self, form: NormalizationForm) -> Self {
        self.config.normalization = form;
        self
    }

    /// Enable sharded pair counting during training.
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.config.parallel = parallel;
        self
    }

    /// Build the tokenizer.
    pub fn build(self) -> Result<Tokenizer> {
        Tokenizer::new(self.config)
    }
}

/// Framing options for encoding.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EncodeOptions {
    /// Prepend the sequence-start token
    pub add_bos: bool,
    /// Append the sequence-end token
    pub add_eos: bool,
}

impl EncodeOptions {
    /// Bracket the sequence with both start and end tokens.
    pub fn framed() -> Self {
        Self {
            add_bos: true,
            add_eos: true,
        }
    }
}

/// Main tokenizer struct.
///
/// Training replaces the vocabulary wholesale; encoding and decoding only
/// read it, so a trained tokenizer can be shared across threads.
pub struct Tokenizer {
    /// Vocabulary
    vocab: Vocabulary,
    /// Merges in learned order
    merges: MergeHistory,
    /// Configuration
    config: TokenizerConfig,
    pre_tokenizer: PreTokenizer,
}

impl Tokenizer {
    /// Create an untrained tokenizer holding only the special tokens.
    pub fn new(config: TokenizerConfig) -> Result<Self> {
        config.training().validate()?;
        let vocab = Vocabulary::new(config.special_tokens.clone(), &config.separator)?;

        Ok(Self {
            vocab,
            merges: MergeHistory::new(),
            pre_tokenizer: PreTokenizer::new(config.normalization),
            config,
        })
    }

    /// Create a tokenizer builder.
    pub fn builder() -> TokenizerBuilder {
        TokenizerBuilder::new()
    }

    /// Train on corpus bytes, which must be UTF-8 text.
    pub fn train_bytes(&mut self, corpus: &[u8]) -> Result<TrainSummary> {
        let text = std::str::from_utf8(corpus).map_err(|e| {
            TokenizerError::invalid(format!("training corpus is not UTF-8 text: {}", e))
        })?;
        self.train(text)
    }

    /// Train the tokenizer on text data, replacing any previous vocabulary.
    pub fn train(&mut self, corpus: &str) -> Result<TrainSummary> {
        let words = self.pre_tokenizer.segment(corpus);
        let output = BpeTrainer::new(self.config.training()).train(&words)?;

        self.vocab = output.vocab;
        self.merges = output.merges;
        Ok(output.summary)
    }

    /// Encode text to token IDs.
    pub fn encode(&self, text: &str, options: EncodeOptions) -> Vec<u32> {
        let separator = self.vocab.separator();
        let words = self
            .pre_tokenizer
            .segment(text)
            .into_iter()
            .map(|mut w| {
                w.push_str(separator);
                w
            });
        let body = SubwordEncoder::new(&self.vocab).encode_words(words);

        let special = self.vocab.special();
        let mut ids = Vec::with_capacity(body.len() + 2);
        if options.add_bos {
            ids.push(special.bos);
        }
        ids.extend(body);
        if options.add_eos {
            ids.push(special.eos);
        }
        ids
    }

    /// Encode text to symbols instead of IDs.
    pub fn encode_symbols(&self, text: &str, options: EncodeOptions) -> Vec<String> {
        self.encode(text, options)
            .into_iter()
            .map(|id| self.vocab.symbol_of(id).to_string())
            .collect()
    }

    /// Encode a batch of texts (parallelized).
    pub fn encode_batch<S>(&self, texts: &[S], options: EncodeOptions) -> Vec<Vec<u32>>
    where
        S: AsRef<str> + Sync,
    {
        use rayon::prelude::*;

        texts
            .par_iter()
            .map(|text| self.encode(text.as_ref(), options))
            .collect()
    }

    /// Decode token IDs back to text.
    pub fn decode(&self, ids: &[u32]) -> String {
        Decoder::new(&self.vocab).decode(ids)
    }

    /// Decode symbols back to text.
    pub fn decode_symbols<S: AsRef<str>>(&self, symbols: &[S]) -> String {
        Decoder::new(&self.vocab).decode_symbols(symbols)
    }

    pub fn token_to_id(&self, token: &str) -> Option<u32> {
        self.vocab.get_id(token)
    }

    pub fn id_to_token(&self, id: u32) -> Option<&str> {
        self.vocab.get_symbol(id)
    }

    /// Get the vocabulary size.
    pub fn vocab_size(&self) -> usize {
        self.vocab.len()
    }

    /// Get a reference to the vocabulary.
    pub fn vocab(&self) -> &Vocabulary {
        &self.vocab
    }

    /// Merges in the order they were learned.
    pub fn merges(&self) -> &MergeHistory {
        &self.merges
    }

    pub fn config(&self) -> &TokenizerConfig {
        &self.config
    }

    /// Serialize to the persisted record form.
    pub fn to_record(&self) -> VocabRecord {
        TokenizerSaver::new(&self.vocab, &self.merges, self.config.normalization).serialize()
    }

    /// Rebuild a tokenizer from a persisted record.
    pub fn from_record(record: &VocabRecord) -> Result<Self> {
        let (vocab, merges) = TokenizerLoader::deserialize(record)?;

        let config = TokenizerConfig {
            vocab_size: vocab.len(),
            separator: vocab.separator().to_string(),
            special_tokens: vocab.special_config().clone(),
            normalization: record.normalization,
            ..Default::default()
        };

        Ok(Self {
            vocab,
            merges,
            pre_tokenizer: PreTokenizer::new(config.normalization),
            config,
        })
    }

    /// Save the tokenizer to a JSON file.
    pub fn save(&self, path: &Path) -> Result<()> {
        TokenizerSaver::new(&self.vocab, &self.merges, self.config.normalization).save(path)
    }

    /// Load a tokenizer from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let tokenizer = Self::from_record(&TokenizerLoader::read_record(path)?)?;
        debug!(
            "Loaded tokenizer from {}: {} symbols, {} merges",
            path.display(),
            tokenizer.vocab_size(),
            tokenizer.merges.len()
        );
        Ok(tokenizer)
    }
}

impl std::str::FromStr for Tokenizer {
    type Err = TokenizerError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::from_record(&TokenizerLoader::from_json(s)?)
    }
}
