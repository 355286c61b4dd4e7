//! Training infrastructure for merge learning.

pub mod counter;
pub mod trainer;

pub use counter::{PairCounter, PairCounts, PairStats};
pub use trainer::{BpeTrainer, StopReason, TrainSummary, TrainingConfig, TrainingOutput};
