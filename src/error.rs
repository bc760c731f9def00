//! Error types shared by the traversal engine, node sources and the CLI.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TreeError {
    /// `Lookahead::advance` was called with nothing left to promote.
    #[error("advanced past the end of a child sequence")]
    Exhausted,

    #[error("prefix part {part} is out of range (expected 0..=5)")]
    OutOfRange { part: usize },

    #[error("{context}: {source}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid input: {message}")]
    InvalidInput { message: String },

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("cannot access '{}': No such file or directory", path.display())]
    NotFound { path: PathBuf },
}

pub type Result<T> = std::result::Result<T, TreeError>;
