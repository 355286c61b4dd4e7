//! Encode command implementation.

use clap::Parser;
use std::path::PathBuf;

/// Encode command arguments.
#[derive(Parser)]
pub struct EncodeCommand {
    /// Path to the trained vocabulary JSON
    pub vocab: PathBuf,

    /// Text to encode; multiple arguments are joined with spaces, "-" reads stdin
    #[arg(required = true, num_args = 1..)]
    pub text: Vec<String>,

    /// Do not add the start and end tokens
    #[arg(long, default_value_t = false)]
    pub no_special: bool,

    /// Print symbols instead of IDs
    #[arg(long, default_value_t = false)]
    pub symbols: bool,
}

use super::load_tokenizer;
use anyhow::Result as AnyhowResult;
use mergetok::EncodeOptions;

pub fn run(cmd: EncodeCommand) -> AnyhowResult<()> {
    let tokenizer = load_tokenizer(&cmd.vocab)?;

    // Read input text (from stdin if "-")
    let input_text = if cmd.text.len() == 1 && cmd.text[0] == "-" {
        use std::io::Read;
        let mut buffer = String::new();
        std::io::stdin().read_to_string(&mut buffer)?;
        buffer
    } else {
        cmd.text.join(" ")
    };

    let options = if cmd.no_special {
        EncodeOptions::default()
    } else {
        EncodeOptions::framed()
    };

    let output = if cmd.symbols {
        tokenizer.encode_symbols(&input_text, options).join(",")
    } else {
        tokenizer
            .encode(&input_text, options)
            .iter()
            .map(|id| id.to_string())
            .collect::<Vec<_>>()
            .join(",")
    };
    println!("{}", output);

    Ok(())
}
