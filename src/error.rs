//! Error types for node construction, location resolution and reconstruction.

use std::sync::Arc;

use text_size::TextSize;
use thiserror::Error;

/// Errors raised by the syntax-node layer.
///
/// None of these is retried internally. They are surfaced to the immediate
/// caller (parser or codec) and no node is produced alongside them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SyntaxError {
    /// An offset lies outside its source unit (caller bug).
    #[error("offset {offset} is out of range for {file} (length {len})")]
    OutOfRange {
        file: Arc<str>,
        offset: u32,
        len: u32,
    },

    /// Lexical text cannot be decoded into a constant value.
    #[error("malformed {kind}: {message}")]
    MalformedLiteral { kind: &'static str, message: String },

    /// Parts handed to a reconstruction hook do not form a valid node.
    #[error("cannot reconstruct {kind}: {message}")]
    ReconstructionMismatch { kind: &'static str, message: String },
}

impl SyntaxError {
    /// Create an out-of-range error for `offset` in a source of length `len`.
    pub fn out_of_range(file: &Arc<str>, offset: TextSize, len: TextSize) -> Self {
        Self::OutOfRange {
            file: Arc::clone(file),
            offset: offset.into(),
            len: len.into(),
        }
    }

    /// Create a malformed literal error.
    pub fn malformed(kind: &'static str, message: impl Into<String>) -> Self {
        Self::MalformedLiteral {
            kind,
            message: message.into(),
        }
    }

    /// Create a reconstruction mismatch error.
    pub fn mismatch(kind: &'static str, message: impl Into<String>) -> Self {
        Self::ReconstructionMismatch {
            kind,
            message: message.into(),
        }
    }

    /// True for errors that indicate a bug in the producer rather than bad
    /// user input.
    pub fn is_internal(&self) -> bool {
        !matches!(self, Self::MalformedLiteral { .. })
    }
}
