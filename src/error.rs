use std::path::PathBuf;

use thiserror::Error;

/// Fatal failures that abort a classification run.
///
/// Parse and detection problems are not represented here: they are folded
/// into each snippet's [`Outcome`](crate::classifier::Outcome).
#[derive(Error, Debug)]
pub enum ClassifierError {
    #[error("Corpus root is not a directory: {0}")]
    RootNotDirectory(PathBuf),

    #[error("Failed to enumerate corpus entries")]
    Walk(#[from] ignore::Error),

    #[error("Failed to read file: {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write report: {path}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ClassifierError>;
