//! Train command implementation.

use clap::{Parser, ValueEnum};
use mergetok::NormalizationForm;
use std::path::PathBuf;

/// Unicode normalization forms selectable on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum NormalizationArg {
    Nfc,
    Nfd,
    Nfkc,
    Nfkd,
}

impl From<NormalizationArg> for NormalizationForm {
    fn from(arg: NormalizationArg) -> Self {
        match arg {
            NormalizationArg::Nfc => NormalizationForm::NFC,
            NormalizationArg::Nfd => NormalizationForm::NFD,
            NormalizationArg::Nfkc => NormalizationForm::NFKC,
            NormalizationArg::Nfkd => NormalizationForm::NFKD,
        }
    }
}

/// Train command arguments.
#[derive(Parser)]
pub struct TrainCommand {
    /// Path to the training corpus (UTF-8 text)
    pub corpus: PathBuf,

    /// Where to write the trained vocabulary JSON
    pub out_vocab: PathBuf,

    /// Target vocabulary size, special tokens included
    #[arg(default_value_t = 3000)]
    pub target_size: usize,

    /// Minimum pair frequency for a merge
    #[arg(long, default_value_t = 2)]
    pub min_frequency: u64,

    /// Count pairs in parallel
    #[arg(long, default_value_t = false)]
    pub parallel: bool,

    /// Unicode normalization applied before lowercasing
    #[arg(long, value_enum)]
    pub normalization: Option<NormalizationArg>,
}

use anyhow::{Context, Result as AnyhowResult};
use log::info;
use mergetok::Tokenizer;
use std::fs;
use std::time::Instant;

pub fn run(cmd: TrainCommand) -> AnyhowResult<()> {
    let start = Instant::now();
    let data = fs::read(&cmd.corpus)
        .with_context(|| format!("failed to read corpus {}", cmd.corpus.display()))?;
    info!(
        "Read {} bytes from {} in {:.2}s",
        data.len(),
        cmd.corpus.display(),
        start.elapsed().as_secs_f64()
    );

    let mut tokenizer = Tokenizer::builder()
        .vocab_size(cmd.target_size)
        .min_frequency(cmd.min_frequency)
        .parallel(cmd.parallel)
        .normalization(cmd.normalization.map(NormalizationForm::from).unwrap_or_default())
        .build()?;

    let start = Instant::now();
    let summary = tokenizer.train_bytes(&data)?;
    info!("Training completed in {:.2}s", start.elapsed().as_secs_f64());

    tokenizer.save(&cmd.out_vocab)?;
    println!(
        "Saved vocab to {} (vocab size {}, {} merges, stopped: {:?})",
        cmd.out_vocab.display(),
        summary.vocab_size,
        summary.merge_count,
        summary.stop_reason
    );

    Ok(())
}
