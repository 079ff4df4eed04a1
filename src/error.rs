//! Crate-wide error type.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while configuring or running the preparation pipeline.
#[derive(Debug, Error)]
pub enum PrepError {
    /// Filesystem failure on a specific path.
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid UTF-8.
    #[error("{path} is not valid UTF-8 (first invalid byte at offset {valid_up_to})")]
    Encoding { path: PathBuf, valid_up_to: usize },

    /// Text exceeds the model's configured maximum length.
    #[error("text of {len} bytes exceeds the model limit of {max} bytes")]
    TextTooLong { len: usize, max: usize },

    /// The shared model slot is empty.
    #[error("language model not initialized; call init_shared first")]
    ModelNotInitialized,

    /// The spec failed validation. Carries every error diagnostic, one per line.
    #[error("invalid pipeline spec:\n{0}")]
    InvalidSpec(String),

    #[error("malformed spec JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The rayon worker pool could not be built.
    #[error("failed to start worker pool: {0}")]
    WorkerPool(String),
}

impl PrepError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, PrepError>;
