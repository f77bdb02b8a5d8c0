//! Foundation types for the Lark front end.
//!
//! This module provides the types every syntax node leans on:
//! - [`TextRange`], [`TextSize`] - Source positions (byte offsets)
//! - [`FileLocations`] - Offset map shared by all nodes of one source unit
//! - [`Location`], [`LineCol`] - Resolved, human-facing positions
//!
//! This module has NO dependencies on other lark modules except the error type.

mod locations;

pub use locations::{FileLocations, LineCol, Location};
pub use text_size::{TextRange, TextSize};

// Re-export text-size types for convenience
pub use text_size;
