//! Merge learner.
//!
//! Each iteration recounts every adjacent pair across the corpus, merges the
//! most frequent one and registers the merged symbol. Ties go to the pair
//! that occurs first in corpus scan order. Full recounting is
//! O(merges * corpus symbols); training targets are a few thousand symbols.

use super::counter::{PairCounter, PairCounts, PairStats};
use log::{debug, info};
use mergetok_core::{
    MergeHistory, MergeRule, Pair, Result, SpecialTokensConfig, TokenizerError, Vocabulary, Word,
    DEFAULT_SEPARATOR,
};

/// Configuration for merge learning.
#[derive(Debug, Clone)]
pub struct TrainingConfig {
    /// Target vocabulary size, special tokens included
    pub vocab_size: usize,
    /// Minimum frequency for a pair to be merged
    pub min_frequency: u64,
    /// Whether to count pairs on the rayon pool
    pub parallel: bool,
    /// Reserved tokens registered before any corpus symbol
    pub special_tokens: SpecialTokensConfig,
    /// Marker appended to every word
    pub separator: String,
}

impl Default for TrainingConfig {
    fn default() -> Self {
        Self {
            vocab_size: 3000,
            min_frequency: 2,
            parallel: false,
            special_tokens: SpecialTokensConfig::default(),
            separator: DEFAULT_SEPARATOR.to_string(),
        }
    }
}

impl TrainingConfig {
    /// Reject values training cannot run with.
    pub fn validate(&self) -> Result<()> {
        if self.vocab_size == 0 {
            return Err(TokenizerError::invalid("target vocabulary size must be positive"));
        }
        if self.min_frequency == 0 {
            return Err(TokenizerError::invalid("minimum merge frequency must be positive"));
        }
        Ok(())
    }
}

/// Why training ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// The vocabulary reached the target size.
    TargetReached,
    /// No adjacent pair occurs at least `min_frequency` times.
    NoQualifyingPair,
}

/// Outcome counters of a training run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrainSummary {
    pub vocab_size: usize,
    pub merge_count: usize,
    pub stop_reason: StopReason,
}

/// Everything a training run produces.
#[derive(Debug, Clone)]
pub struct TrainingOutput {
    pub vocab: Vocabulary,
    pub merges: MergeHistory,
    pub summary: TrainSummary,
}

/// Merge learner.
pub struct BpeTrainer {
    config: TrainingConfig,
}

impl BpeTrainer {
    /// Create a new trainer with the given configuration.
    pub fn new(config: TrainingConfig) -> Self {
        Self { config }
    }

    /// Create a new trainer with default configuration.
    pub fn with_vocab_size(vocab_size: usize) -> Self {
        Self::new(TrainingConfig {
            vocab_size,
            ..Default::default()
        })
    }

    pub fn config(&self) -> &TrainingConfig {
        &self.config
    }

    /// Learn a vocabulary from already segmented words.
    ///
    /// Each item is one occurrence of a normalized word without separator;
    /// the configured separator is appended here.
    pub fn train<I, S>(&self, words: I) -> Result<TrainingOutput>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.config.validate()?;

        let mut vocab =
            Vocabulary::new(self.config.special_tokens.clone(), &self.config.separator)?;

        let mut counter = PairCounter::new();
        for word in words {
            counter.add_word(Word::new(word.as_ref(), &self.config.separator), &mut vocab);
        }

        info!(
            "Starting merge learning: {} distinct words ({} occurrences), base vocabulary {}, target {}",
            counter.word_count(),
            counter.total_word_occurrences(),
            vocab.len(),
            self.config.vocab_size
        );

        let mut merges = MergeHistory::new();
        let stop_reason = loop {
            if vocab.len() >= self.config.vocab_size {
                break StopReason::TargetReached;
            }

            let pair_counts = if self.config.parallel {
                counter.count_pairs_parallel()
            } else {
                counter.count_pairs_sequential()
            };

            let Some((pair, stats)) = select_best(&pair_counts) else {
                break StopReason::NoQualifyingPair;
            };
            if stats.count < self.config.min_frequency {
                break StopReason::NoQualifyingPair;
            }

            let rule = MergeRule::new(vocab.symbol_of(pair.0), vocab.symbol_of(pair.1));
            let new_id = vocab.add_symbol(&rule.merged());
            let replaced = counter.merge_pair_in_words(pair, new_id);

            debug!(
                "merge {}: '{}' + '{}' (count {}, replaced {}) -> id {}",
                merges.len(),
                rule.left,
                rule.right,
                stats.count,
                replaced,
                new_id
            );
            merges.push(rule);
        };

        let summary = TrainSummary {
            vocab_size: vocab.len(),
            merge_count: merges.len(),
            stop_reason,
        };
        info!(
            "Finished merge learning: vocabulary {}, {} merges ({:?})",
            summary.vocab_size, summary.merge_count, summary.stop_reason
        );

        Ok(TrainingOutput {
            vocab,
            merges,
            summary,
        })
    }
}

/// Highest count wins; among equal counts, the pair seen first wins.
fn select_best(pair_counts: &PairCounts) -> Option<(Pair, PairStats)> {
    pair_counts
        .iter()
        .max_by(|(_, a), (_, b)| {
            a.count
                .cmp(&b.count)
                .then_with(|| b.first_seen.cmp(&a.first_seen))
        })
        .map(|(&pair, &stats)| (pair, stats))
}
