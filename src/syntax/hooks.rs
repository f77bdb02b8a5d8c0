//! Hooks that let an external codec persist and rebuild leaf nodes.
//!
//! A leaf is fully described by four parts: its offset map, its start
//! offset, its text and its end offset. [`Reconstruct::decompose`] hands
//! those out and [`Reconstruct::reconstruct`] checks and reassembles them.
//! How the parts are encoded is entirely the codec's business; nothing here
//! knows about any serialization format.
//!
//! Composite nodes need no hooks of their own: a codec rebuilds their
//! children first and passes them to the ordinary constructors.

use std::borrow::Cow;
use std::sync::Arc;

use text_size::TextSize;

use super::expr::Identifier;
use super::kind::NodeKind;
use super::literal::{ByteLiteral, FloatLiteral, IntLiteral, StringLiteral};
use super::node::{Expr, Node};
use crate::base::FileLocations;
use crate::error::SyntaxError;

/// The four parts a leaf node is built from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeafParts<'a> {
    /// Opaque to codecs beyond what `FileLocations` exposes publicly.
    pub locations: Arc<FileLocations>,
    pub start_offset: TextSize,
    /// Decoded value for strings and bytes, source spelling for numbers,
    /// name for identifiers.
    pub text: Cow<'a, str>,
    pub end_offset: TextSize,
}

impl LeafParts<'_> {
    pub fn into_owned(self) -> LeafParts<'static> {
        LeafParts {
            locations: self.locations,
            start_offset: self.start_offset,
            text: Cow::Owned(self.text.into_owned()),
            end_offset: self.end_offset,
        }
    }

    /// Reject spans that would violate the node invariants.
    fn check_span(&self, kind: NodeKind) -> Result<(), SyntaxError> {
        let (start, end) = (u32::from(self.start_offset), u32::from(self.end_offset));
        if end < start {
            tracing::debug!(%kind, start, end, "rejecting inverted span");
            return Err(SyntaxError::mismatch(
                kind.name(),
                format!("end offset {end} precedes start offset {start}"),
            ));
        }
        let len = u32::from(self.locations.len());
        if end > len {
            tracing::debug!(%kind, end, len, "rejecting span past end of source");
            return Err(SyntaxError::mismatch(
                kind.name(),
                format!(
                    "end offset {end} is beyond {} (length {len})",
                    self.locations.file()
                ),
            ));
        }
        Ok(())
    }
}

/// Round-trip hooks: `reconstruct(decompose(n))` equals `n` in value and span.
pub trait Reconstruct: Node + Sized {
    const KIND: NodeKind;

    fn decompose(&self) -> LeafParts<'_>;

    fn reconstruct(parts: LeafParts<'_>) -> Result<Self, SyntaxError>;
}

fn parts<'a>(node: &'a impl Node, text: &'a str) -> LeafParts<'a> {
    LeafParts {
        locations: Arc::clone(node.locations()),
        start_offset: node.start_offset(),
        text: Cow::Borrowed(text),
        end_offset: node.end_offset(),
    }
}

impl Reconstruct for ByteLiteral {
    const KIND: NodeKind = NodeKind::BYTE_LITERAL;

    fn decompose(&self) -> LeafParts<'_> {
        parts(self, self.as_str())
    }

    fn reconstruct(parts: LeafParts<'_>) -> Result<Self, SyntaxError> {
        parts.check_span(Self::KIND)?;
        tracing::trace!(start = u32::from(parts.start_offset), "reconstructing bytes literal");
        Ok(Self::new(parts.locations, parts.start_offset, &parts.text, parts.end_offset))
    }
}

impl Reconstruct for StringLiteral {
    const KIND: NodeKind = NodeKind::STRING_LITERAL;

    fn decompose(&self) -> LeafParts<'_> {
        parts(self, self.value())
    }

    fn reconstruct(parts: LeafParts<'_>) -> Result<Self, SyntaxError> {
        parts.check_span(Self::KIND)?;
        Ok(Self::new(parts.locations, parts.start_offset, &parts.text, parts.end_offset))
    }
}

impl Reconstruct for IntLiteral {
    const KIND: NodeKind = NodeKind::INT_LITERAL;

    fn decompose(&self) -> LeafParts<'_> {
        parts(self, self.raw())
    }

    fn reconstruct(parts: LeafParts<'_>) -> Result<Self, SyntaxError> {
        parts.check_span(Self::KIND)?;
        Self::new(parts.locations, parts.start_offset, &parts.text, parts.end_offset)
    }
}

impl Reconstruct for FloatLiteral {
    const KIND: NodeKind = NodeKind::FLOAT_LITERAL;

    fn decompose(&self) -> LeafParts<'_> {
        parts(self, self.raw())
    }

    fn reconstruct(parts: LeafParts<'_>) -> Result<Self, SyntaxError> {
        parts.check_span(Self::KIND)?;
        Self::new(parts.locations, parts.start_offset, &parts.text, parts.end_offset)
    }
}

impl Reconstruct for Identifier {
    const KIND: NodeKind = NodeKind::IDENTIFIER;

    fn decompose(&self) -> LeafParts<'_> {
        parts(self, self.name())
    }

    fn reconstruct(parts: LeafParts<'_>) -> Result<Self, SyntaxError> {
        parts.check_span(Self::KIND)?;
        Self::new(parts.locations, parts.start_offset, &parts.text, parts.end_offset)
    }
}

impl Expr {
    /// Parts of a leaf expression; `None` for composites.
    pub fn decompose(&self) -> Option<LeafParts<'_>> {
        match self {
            Expr::Identifier(node) => Some(node.decompose()),
            Expr::Int(node) => Some(node.decompose()),
            Expr::Float(node) => Some(node.decompose()),
            Expr::String(node) => Some(node.decompose()),
            Expr::Bytes(node) => Some(node.decompose()),
            Expr::Unary(_) | Expr::Binary(_) | Expr::Conditional(_) | Expr::List(_) => None,
        }
    }
}

/// Rebuild a leaf expression of `kind` from its parts.
///
/// Codecs that store the kind tag next to the parts use this instead of
/// naming each leaf type.
pub fn reconstruct_leaf(kind: NodeKind, parts: LeafParts<'_>) -> Result<Expr, SyntaxError> {
    Ok(match kind {
        NodeKind::IDENTIFIER => Identifier::reconstruct(parts)?.into(),
        NodeKind::INT_LITERAL => IntLiteral::reconstruct(parts)?.into(),
        NodeKind::FLOAT_LITERAL => FloatLiteral::reconstruct(parts)?.into(),
        NodeKind::STRING_LITERAL => StringLiteral::reconstruct(parts)?.into(),
        NodeKind::BYTE_LITERAL => ByteLiteral::reconstruct(parts)?.into(),
        NodeKind::UNARY_OPERATOR
        | NodeKind::BINARY_OPERATOR
        | NodeKind::CONDITIONAL
        | NodeKind::LIST_EXPR => {
            return Err(SyntaxError::mismatch(kind.name(), "not a leaf kind"));
        }
    })
}
