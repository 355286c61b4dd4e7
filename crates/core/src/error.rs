//! Error types for the mergetok tokenizer library.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the tokenizer library.
///
/// Out-of-vocabulary input is not represented here: encoding and decoding
/// substitute the unknown token instead of failing.
#[derive(Error, Debug)]
pub enum TokenizerError {
    /// A caller-supplied argument was rejected (non-UTF-8 corpus, zero
    /// target size, bad separator or special tokens).
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A persisted vocabulary is missing fields or is internally inconsistent.
    #[error("Malformed vocabulary: {0}")]
    MalformedState(String),

    /// I/O error with file context
    #[error("I/O error for {path}: {err}")]
    Io {
        path: PathBuf,
        #[source]
        err: std::io::Error,
    },

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl TokenizerError {
    /// Build a [`TokenizerError::InvalidArgument`] from any message.
    pub fn invalid(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    /// Build a [`TokenizerError::MalformedState`] from any message.
    pub fn malformed(msg: impl Into<String>) -> Self {
        Self::MalformedState(msg.into())
    }

    /// Attach a path to an I/O error.
    pub fn io(path: impl Into<PathBuf>, err: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            err,
        }
    }
}

/// Result type alias for tokenizer operations.
pub type Result<T> = std::result::Result<T, TokenizerError>;
