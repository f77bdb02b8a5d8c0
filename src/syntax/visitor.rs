//! Double dispatch over node kinds.
//!
//! [`Node::accept`] calls exactly one method of a [`Visitor`]. The trait has
//! no default bodies: a pass that forgets a kind does not compile, and adding
//! a kind breaks every pass until it handles it.
//!
//! Passes that recurse call the `walk_*` helpers, which visit a composite's
//! children in source order.

use super::expr::{
    BinaryOperatorExpression, ConditionalExpression, Identifier, ListExpression,
    UnaryOperatorExpression,
};
use super::kind::NodeKind;
use super::literal::{ByteLiteral, FloatLiteral, IntLiteral, StringLiteral};
use super::node::Node;

/// One handler per concrete node kind.
pub trait Visitor {
    fn visit_identifier(&mut self, node: &Identifier);
    fn visit_int_literal(&mut self, node: &IntLiteral);
    fn visit_float_literal(&mut self, node: &FloatLiteral);
    fn visit_string_literal(&mut self, node: &StringLiteral);
    fn visit_byte_literal(&mut self, node: &ByteLiteral);
    fn visit_unary_operator(&mut self, node: &UnaryOperatorExpression);
    fn visit_binary_operator(&mut self, node: &BinaryOperatorExpression);
    fn visit_conditional(&mut self, node: &ConditionalExpression);
    fn visit_list(&mut self, node: &ListExpression);
}

pub fn walk_unary_operator(visitor: &mut dyn Visitor, node: &UnaryOperatorExpression) {
    node.operand().accept(visitor);
}

pub fn walk_binary_operator(visitor: &mut dyn Visitor, node: &BinaryOperatorExpression) {
    node.lhs().accept(visitor);
    node.rhs().accept(visitor);
}

pub fn walk_conditional(visitor: &mut dyn Visitor, node: &ConditionalExpression) {
    node.then_case().accept(visitor);
    node.condition().accept(visitor);
    node.else_case().accept(visitor);
}

pub fn walk_list(visitor: &mut dyn Visitor, node: &ListExpression) {
    for element in node.elements() {
        element.accept(visitor);
    }
}

/// Kinds of every node under `root` (inclusive), in pre-order.
pub fn preorder_kinds(root: &dyn Node) -> Vec<NodeKind> {
    let mut collector = KindCollector::default();
    root.accept(&mut collector);
    collector.kinds
}

#[derive(Default)]
struct KindCollector {
    kinds: Vec<NodeKind>,
}

impl Visitor for KindCollector {
    fn visit_identifier(&mut self, node: &Identifier) {
        self.kinds.push(node.kind());
    }

    fn visit_int_literal(&mut self, node: &IntLiteral) {
        self.kinds.push(node.kind());
    }

    fn visit_float_literal(&mut self, node: &FloatLiteral) {
        self.kinds.push(node.kind());
    }

    fn visit_string_literal(&mut self, node: &StringLiteral) {
        self.kinds.push(node.kind());
    }

    fn visit_byte_literal(&mut self, node: &ByteLiteral) {
        self.kinds.push(node.kind());
    }

    fn visit_unary_operator(&mut self, node: &UnaryOperatorExpression) {
        self.kinds.push(node.kind());
        walk_unary_operator(self, node);
    }

    fn visit_binary_operator(&mut self, node: &BinaryOperatorExpression) {
        self.kinds.push(node.kind());
        walk_binary_operator(self, node);
    }

    fn visit_conditional(&mut self, node: &ConditionalExpression) {
        self.kinds.push(node.kind());
        walk_conditional(self, node);
    }

    fn visit_list(&mut self, node: &ListExpression) {
        self.kinds.push(node.kind());
        walk_list(self, node);
    }
}
