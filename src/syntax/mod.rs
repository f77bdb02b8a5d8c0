//! Immutable expression nodes, kind tags, traversal and reconstruction hooks.

pub mod escape;
mod expr;
mod hooks;
mod kind;
mod literal;
mod node;
mod printer;
pub mod visitor;

pub use expr::{
    BinaryOp, BinaryOperatorExpression, ConditionalExpression, Identifier, ListExpression,
    UnaryOp, UnaryOperatorExpression, is_identifier,
};
pub use hooks::{LeafParts, Reconstruct, reconstruct_leaf};
pub use kind::NodeKind;
pub use literal::{ByteLiteral, FloatLiteral, IntLiteral, StringLiteral};
pub use node::{Expr, Node};
pub use printer::{PrintOptions, Printer, QuoteStyle, print_expr, print_expr_with};
pub use visitor::Visitor;

pub use crate::error::SyntaxError;
