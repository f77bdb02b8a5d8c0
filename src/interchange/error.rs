//! Error types for interchange operations.

use thiserror::Error;

use crate::error::SyntaxError;

/// Errors that can occur while encoding or decoding expression trees.
#[derive(Debug, Error)]
pub enum InterchangeError {
    /// JSON parsing or serialization error.
    #[error("JSON error: {0}")]
    Json(String),

    /// A record refers to a source table entry that does not exist.
    #[error("Unknown source index {index} (table has {len} entries)")]
    UnknownSource { index: usize, len: usize },

    /// The node layer rejected the decoded parts.
    #[error(transparent)]
    Syntax(#[from] SyntaxError),
}

impl InterchangeError {
    /// Create a JSON error.
    pub fn json(message: impl Into<String>) -> Self {
        Self::Json(message.into())
    }
}

impl From<serde_json::Error> for InterchangeError {
    fn from(err: serde_json::Error) -> Self {
        Self::json(err.to_string())
    }
}
