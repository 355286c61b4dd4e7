//! CLI commands for the mergetok tokenizer.

pub mod decode;
pub mod encode;
pub mod inspect;
pub mod train;

pub use decode::DecodeCommand;
pub use encode::EncodeCommand;
pub use inspect::InspectCommand;
pub use train::TrainCommand;

use anyhow::{Context, Result as AnyhowResult};
use mergetok::Tokenizer;
use std::path::Path;

/// Load a saved vocabulary, attaching the path to any failure.
pub(crate) fn load_tokenizer(path: &Path) -> AnyhowResult<Tokenizer> {
    Tokenizer::load(path).with_context(|| format!("failed to load vocabulary {}", path.display()))
}
