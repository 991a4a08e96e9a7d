//! Error types for the program boundary.
//!
//! Game logic itself never fails: illegal clicks are silent no-ops.
//! These errors come from the terminal, the log file and CLI input.

use thiserror::Error;

#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("failed to {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    #[error("move #{requested} does not exist (history has {len} entries)")]
    MoveOutOfRange { requested: usize, len: usize },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("failed to initialize logging: {0}")]
    Logging(String),
}

impl Error {
    /// Wrap an I/O error with the operation that failed.
    pub fn io(operation: impl Into<String>, source: std::io::Error) -> Self {
        Error::Io {
            operation: operation.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
