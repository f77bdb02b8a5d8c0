//! The node contract and the expression sum type.

use std::sync::Arc;

use text_size::{TextRange, TextSize};

use super::expr::{
    BinaryOperatorExpression, ConditionalExpression, Identifier, ListExpression,
    UnaryOperatorExpression,
};
use super::kind::NodeKind;
use super::literal::{ByteLiteral, FloatLiteral, IntLiteral, StringLiteral};
use super::visitor::Visitor;
use crate::base::{FileLocations, Location};
use crate::error::SyntaxError;

/// Capabilities every syntax-tree element provides.
///
/// Nodes are immutable once built. Their span covers exactly the source text
/// that denotes them; locations are resolved lazily through the shared
/// [`FileLocations`].
pub trait Node {
    fn start_offset(&self) -> TextSize;

    fn end_offset(&self) -> TextSize;

    fn kind(&self) -> NodeKind;

    /// Invoke the visitor method registered for this node's kind.
    fn accept(&self, visitor: &mut dyn Visitor);

    /// The offset map of the source unit this node was parsed from.
    fn locations(&self) -> &Arc<FileLocations>;

    /// Half-open `[start_offset, end_offset)` range.
    fn span(&self) -> TextRange {
        TextRange::new(self.start_offset(), self.end_offset())
    }

    /// Location of the first character of this node.
    fn location(&self) -> Result<Location, SyntaxError> {
        self.locations().location(self.start_offset())
    }

    /// Location just past the last character of this node.
    fn end_location(&self) -> Result<Location, SyntaxError> {
        self.locations().location(self.end_offset())
    }

    /// The source text this node was parsed from.
    fn source_text(&self) -> Option<&str> {
        self.locations().text_at(self.span())
    }
}

/// An expression node of any kind.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Identifier(Identifier),
    Int(IntLiteral),
    Float(FloatLiteral),
    String(StringLiteral),
    Bytes(ByteLiteral),
    Unary(Box<UnaryOperatorExpression>),
    Binary(Box<BinaryOperatorExpression>),
    Conditional(Box<ConditionalExpression>),
    List(ListExpression),
}

macro_rules! for_each_variant {
    ($expr:expr, $node:ident => $body:expr) => {
        match $expr {
            Expr::Identifier($node) => $body,
            Expr::Int($node) => $body,
            Expr::Float($node) => $body,
            Expr::String($node) => $body,
            Expr::Bytes($node) => $body,
            Expr::Unary($node) => $body,
            Expr::Binary($node) => $body,
            Expr::Conditional($node) => $body,
            Expr::List($node) => $body,
        }
    };
}

impl Node for Expr {
    fn start_offset(&self) -> TextSize {
        for_each_variant!(self, node => node.start_offset())
    }

    fn end_offset(&self) -> TextSize {
        for_each_variant!(self, node => node.end_offset())
    }

    fn kind(&self) -> NodeKind {
        for_each_variant!(self, node => node.kind())
    }

    fn accept(&self, visitor: &mut dyn Visitor) {
        for_each_variant!(self, node => node.accept(visitor))
    }

    fn locations(&self) -> &Arc<FileLocations> {
        for_each_variant!(self, node => node.locations())
    }
}

macro_rules! impl_from_node {
    ($($variant:ident($ty:ty)),* $(,)?) => {
        $(
            impl From<$ty> for Expr {
                fn from(node: $ty) -> Self {
                    Expr::$variant(node.into())
                }
            }
        )*
    };
}

impl_from_node!(
    Identifier(Identifier),
    Int(IntLiteral),
    Float(FloatLiteral),
    String(StringLiteral),
    Bytes(ByteLiteral),
    Unary(UnaryOperatorExpression),
    Binary(BinaryOperatorExpression),
    Conditional(ConditionalExpression),
    List(ListExpression),
);

/// Panic unless `start <= end`; spans are validated by the producer.
pub(super) fn assert_span(kind: NodeKind, start: TextSize, end: TextSize) {
    assert!(
        start <= end,
        "{kind} span is inverted: {} > {}",
        u32::from(start),
        u32::from(end)
    );
}

/// Fail unless `before <= after`; composites use this to keep children in
/// source order.
pub(super) fn check_order(kind: NodeKind, before: TextSize, after: TextSize) -> Result<(), SyntaxError> {
    if before > after {
        return Err(SyntaxError::mismatch(
            kind.name(),
            format!(
                "children out of order: offset {} precedes offset {}",
                u32::from(after),
                u32::from(before)
            ),
        ));
    }
    Ok(())
}

/// Fail unless `child` was parsed from a source equivalent to `locations`.
pub(super) fn check_same_source(
    kind: NodeKind,
    locations: &Arc<FileLocations>,
    child: &Expr,
) -> Result<(), SyntaxError> {
    let other = child.locations();
    if !Arc::ptr_eq(locations, other) && **locations != **other {
        return Err(SyntaxError::mismatch(
            kind.name(),
            format!(
                "{} comes from {}, not {}",
                child.kind(),
                other.file(),
                locations.file()
            ),
        ));
    }
    Ok(())
}
