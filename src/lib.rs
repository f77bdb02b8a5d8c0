//! # lark-syntax
//!
//! Syntax-tree nodes for the Lark configuration language, a Python-like
//! dialect in the Starlark family.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! interchange → Serde records and JSON codec (feature "interchange")
//!   ↓
//! syntax      → Nodes, NodeKind, Visitor, literal decoding, printer, hooks
//!   ↓
//! base        → FileLocations offset map, Location, TextRange/TextSize
//! ```

// ============================================================================
// MODULES (dependency order: base → syntax → interchange)
// ============================================================================

/// Foundation types: FileLocations, Location, TextRange
pub mod base;

mod error;

/// Syntax: expression nodes, dispatch and reconstruction hooks
pub mod syntax;

/// Tree interchange: JSON documents built on the reconstruction hooks
#[cfg(feature = "interchange")]
pub mod interchange;

// Re-export foundation types
pub use base::{FileLocations, LineCol, Location, TextRange, TextSize};
pub use error::SyntaxError;

// Re-export the node layer
pub use syntax::{
    BinaryOp, BinaryOperatorExpression, ByteLiteral, ConditionalExpression, Expr, FloatLiteral,
    Identifier, IntLiteral, LeafParts, ListExpression, Node, NodeKind, Reconstruct, StringLiteral,
    UnaryOp, UnaryOperatorExpression, Visitor,
};
