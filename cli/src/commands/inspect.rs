//! Inspect command implementation.

use clap::Parser;
use std::path::PathBuf;

/// Inspect command arguments.
#[derive(Parser)]
pub struct InspectCommand {
    /// Path to the trained vocabulary JSON
    pub vocab: PathBuf,

    /// Also print the first N merges
    #[arg(long, default_value_t = 0)]
    pub merges: usize,
}

use super::load_tokenizer;
use anyhow::Result as AnyhowResult;

pub fn run(cmd: InspectCommand) -> AnyhowResult<()> {
    let tokenizer = load_tokenizer(&cmd.vocab)?;
    let vocab = tokenizer.vocab();
    let special = vocab.special_config();

    println!("Vocabulary: {}", cmd.vocab.display());
    println!("  Size: {}", tokenizer.vocab_size());
    println!("  Merges: {}", tokenizer.merges().len());
    println!("  Separator: {}", vocab.separator());
    println!(
        "  Special tokens: {} {} {} {}",
        special.pad, special.unk, special.bos, special.eos
    );
    println!("  Normalization: {:?}", tokenizer.config().normalization);
    println!("  Longest symbol: {} chars", vocab.max_symbol_chars());

    for (rank, rule) in tokenizer.merges().iter().take(cmd.merges).enumerate() {
        println!("  {:>6}  {}", rank, rule);
    }

    Ok(())
}
