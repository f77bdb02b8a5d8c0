//! Dispatch tests: every kind reaches exactly its own handler.

#[path = "helpers/mod.rs"]
mod helpers;

use std::collections::BTreeMap;

use helpers::tree_fixtures::{MIXED_SOURCE, mixed_tree};
use lark::syntax::visitor::{
    preorder_kinds, walk_binary_operator, walk_conditional, walk_list, walk_unary_operator,
};
use lark::syntax::print_expr;
use lark::{
    BinaryOperatorExpression, ByteLiteral, ConditionalExpression, FloatLiteral, Identifier,
    IntLiteral, ListExpression, Node, NodeKind, StringLiteral, UnaryOperatorExpression, Visitor,
};

/// Counts handler invocations and checks each handler sees its own kind.
#[derive(Default)]
struct KindCounter {
    counts: BTreeMap<&'static str, usize>,
}

impl KindCounter {
    fn hit(&mut self, node: &dyn Node, expected: NodeKind) {
        assert_eq!(node.kind(), expected);
        *self.counts.entry(expected.name()).or_default() += 1;
    }
}

impl Visitor for KindCounter {
    fn visit_identifier(&mut self, node: &Identifier) {
        self.hit(node, NodeKind::IDENTIFIER);
    }

    fn visit_int_literal(&mut self, node: &IntLiteral) {
        self.hit(node, NodeKind::INT_LITERAL);
    }

    fn visit_float_literal(&mut self, node: &FloatLiteral) {
        self.hit(node, NodeKind::FLOAT_LITERAL);
    }

    fn visit_string_literal(&mut self, node: &StringLiteral) {
        self.hit(node, NodeKind::STRING_LITERAL);
    }

    fn visit_byte_literal(&mut self, node: &ByteLiteral) {
        self.hit(node, NodeKind::BYTE_LITERAL);
    }

    fn visit_unary_operator(&mut self, node: &UnaryOperatorExpression) {
        self.hit(node, NodeKind::UNARY_OPERATOR);
        walk_unary_operator(self, node);
    }

    fn visit_binary_operator(&mut self, node: &BinaryOperatorExpression) {
        self.hit(node, NodeKind::BINARY_OPERATOR);
        walk_binary_operator(self, node);
    }

    fn visit_conditional(&mut self, node: &ConditionalExpression) {
        self.hit(node, NodeKind::CONDITIONAL);
        walk_conditional(self, node);
    }

    fn visit_list(&mut self, node: &ListExpression) {
        self.hit(node, NodeKind::LIST_EXPR);
        walk_list(self, node);
    }
}

#[test]
fn test_every_kind_is_dispatched_once() {
    let mut counter = KindCounter::default();
    mixed_tree().accept(&mut counter);

    for kind in NodeKind::ALL {
        let expected = if kind == NodeKind::IDENTIFIER { 3 } else { 1 };
        assert_eq!(counter.counts.get(kind.name()), Some(&expected), "{kind}");
    }
}

#[test]
fn test_preorder_kinds() {
    assert_eq!(
        preorder_kinds(&mixed_tree()),
        vec![
            NodeKind::CONDITIONAL,
            NodeKind::BINARY_OPERATOR,
            NodeKind::UNARY_OPERATOR,
            NodeKind::IDENTIFIER,
            NodeKind::LIST_EXPR,
            NodeKind::INT_LITERAL,
            NodeKind::FLOAT_LITERAL,
            NodeKind::STRING_LITERAL,
            NodeKind::BYTE_LITERAL,
            NodeKind::IDENTIFIER,
            NodeKind::IDENTIFIER,
        ]
    );
}

#[test]
fn test_composite_spans_cover_children() {
    let tree = mixed_tree();
    assert_eq!(tree.source_text(), Some(MIXED_SOURCE));
    assert_eq!(u32::from(tree.start_offset()), 0);
}

#[test]
fn test_printer_output() {
    assert_eq!(
        print_expr(&mixed_tree()),
        r#"((-x) + [1, 2.5, "a", b"b"]) if ok else y"#
    );
}
