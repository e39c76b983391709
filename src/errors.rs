use std::path::PathBuf;
use thiserror::Error;

/// Domain errors surfaced by the library layer
#[derive(Debug, Error)]
pub enum CasemapError {
    #[error("failed to read {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("failed to parse runner results {path}: {source}")]
    ResultParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("unknown test suite: {0}")]
    UnknownSuite(String),
}
