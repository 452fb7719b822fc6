//! Crate-wide error types.
//!
//! Parsing has its own error ([`ParseError`](crate::parsing::ParseError));
//! everything that touches the filesystem or the persisted index funnels
//! into [`IndexError`].

use std::path::PathBuf;
use thiserror::Error;

use crate::parsing::ParseError;

#[derive(Debug, Error)]
pub enum IndexError {
    #[error("Failed to parse search data: {0}")]
    Parse(#[from] ParseError),

    #[error("Failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write file {path}: {source}")]
    FileWrite {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to serialize index: {0}")]
    Serialize(#[source] serde_json::Error),

    #[error("Failed to load index from {path}: {source}")]
    Deserialize {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("No index found at {path}. Run `symdex index <searchdata>` first")]
    IndexNotFound { path: PathBuf },

    #[error("{0}")]
    General(String),
}

pub type IndexResult<T> = Result<T, IndexError>;
