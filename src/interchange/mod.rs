//! Serialized form of expression trees.
//!
//! This module is the only place that knows about serde. It talks to the
//! node layer exclusively through the public reconstruction hooks
//! ([`Reconstruct`](crate::syntax::Reconstruct),
//! [`reconstruct_leaf`](crate::syntax::reconstruct_leaf)) and the ordinary
//! composite constructors.
//!
//! ```text
//! Expr ──encode──▶ Document { sources, root } ──serde_json──▶ bytes
//!                   │ one SourceRecord per distinct FileLocations
//!                   ▼
//! Expr ◀──decode── Document  (one shared Arc<FileLocations> per source)
//! ```

mod error;
mod record;

pub use error::InterchangeError;
pub use record::{Document, ExprRecord, LeafKind, LeafRecord, SourceRecord};

use crate::syntax::Expr;

/// Serialize `expr` to JSON.
pub fn to_json(expr: &Expr) -> Result<String, InterchangeError> {
    Document::encode(expr).to_json()
}

/// Rebuild an expression from JSON produced by [`to_json`].
pub fn from_json(json: &str) -> Result<Expr, InterchangeError> {
    Document::from_json(json)?.decode()
}
