//! Decode command implementation.

use clap::Parser;
use std::path::PathBuf;

/// Decode command arguments.
#[derive(Parser)]
pub struct DecodeCommand {
    /// Path to the trained vocabulary JSON
    pub vocab: PathBuf,

    /// Comma-separated token IDs (or symbols with --symbols)
    pub ids: String,

    /// Treat the input as symbols rather than IDs
    #[arg(long, default_value_t = false)]
    pub symbols: bool,
}

use super::load_tokenizer;
use anyhow::{Context, Result as AnyhowResult};

pub fn run(cmd: DecodeCommand) -> AnyhowResult<()> {
    let tokenizer = load_tokenizer(&cmd.vocab)?;

    let text = if cmd.symbols {
        let symbols: Vec<&str> = cmd.ids.split(',').filter(|s| !s.is_empty()).collect();
        tokenizer.decode_symbols(&symbols)
    } else {
        let ids = parse_ids(&cmd.ids)?;
        tokenizer.decode(&ids)
    };
    println!("{}", text);

    Ok(())
}

fn parse_ids(input: &str) -> AnyhowResult<Vec<u32>> {
    input
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.parse::<u32>()
                .with_context(|| format!("invalid token ID {:?}", s))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_ids() {
        assert_eq!(parse_ids("2,4, 5,3").unwrap(), vec![2, 4, 5, 3]);
        assert_eq!(parse_ids("7,").unwrap(), vec![7]);
        assert!(parse_ids("").unwrap().is_empty());
    }

    #[test]
    fn test_parse_ids_rejects_garbage() {
        assert!(parse_ids("1,x,3").is_err());
        assert!(parse_ids("-1").is_err());
    }
}
