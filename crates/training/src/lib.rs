//! mergetok-training - Merge learning for the mergetok tokenizer
//!
//! This crate learns a vocabulary by repeatedly fusing the most frequent
//! adjacent symbol pair across a segmented corpus.
//!
//! # Example
//!
//! ```rust
//! use mergetok_training::{BpeTrainer, StopReason};
//!
//! let trainer = BpeTrainer::with_vocab_size(12);
//! let output = trainer.train(["aaabdaaabac"])?;
//!
//! assert_eq!(output.summary.merge_count, 3);
//! assert_eq!(output.summary.stop_reason, StopReason::TargetReached);
//! # Ok::<(), mergetok_training::TokenizerError>(())
//! ```

pub use mergetok_core::{Result, TokenizerError};

pub mod training;
pub use training::{
    BpeTrainer, PairCounter, PairCounts, PairStats, StopReason, TrainSummary, TrainingConfig,
    TrainingOutput,
};
