//! Pre-tokenization pipeline.
//!
//! Raw text is normalized (line endings, optional Unicode form, lowercase)
//! and split into coarse words before training or encoding. The pipeline is
//! lossy: case and original punctuation spacing are not recoverable.

pub mod normalize;
pub mod split;

pub use normalize::{NormalizationForm, Normalizer};
pub use split::Splitter;

use mergetok_core::Word;

/// Word segmenter combining normalization and splitting.
#[derive(Debug, Clone, Default)]
pub struct PreTokenizer {
    normalizer: Normalizer,
    splitter: Splitter,
}

impl PreTokenizer {
    pub fn new(form: NormalizationForm) -> Self {
        Self {
            normalizer: Normalizer::new(form),
            splitter: Splitter::new(),
        }
    }

    pub fn normalization(&self) -> NormalizationForm {
        self.normalizer.form()
    }

    /// Normalize and split `text` into word strings (no separator).
    pub fn segment(&self, text: &str) -> Vec<String> {
        self.splitter.split(&self.normalizer.normalize(text))
    }

    /// Segment `text` into [`Word`]s terminated by `separator`.
    pub fn words(&self, text: &str, separator: &str) -> Vec<Word> {
        self.segment(text)
            .iter()
            .map(|w| Word::new(w, separator))
            .collect()
    }
}
