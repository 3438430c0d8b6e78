use std::fmt;

use thiserror::Error;

/// Which revision an input belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    Original,
    Revised,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Original => f.write_str("original"),
            Self::Revised => f.write_str("revised"),
        }
    }
}

/// Errors from the guarded comparison entry points.
///
/// The comparison itself is total; these cover the input ceiling, document
/// resolution, configuration and export.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("{side} document is {bytes} bytes, limit is {limit}")]
    InputTooLarge { side: Side, bytes: usize, limit: usize },

    #[error("{side} document has {lines} lines, limit is {limit}")]
    TooManyLines { side: Side, lines: usize, limit: usize },

    #[error("document not found: {0}")]
    DocumentNotFound(String),

    #[error("document source failed for {id}: {reason}")]
    Source { id: String, reason: String },

    #[error("configuration error: {0}")]
    Config(String),

    #[error("serialization error: {0}")]
    Serialization(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type EngineResult<T> = Result<T, EngineError>;
