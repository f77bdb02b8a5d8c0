//! JSON interchange tests.
#![cfg(feature = "interchange")]

#[path = "helpers/mod.rs"]
mod helpers;

use std::sync::Arc;

use helpers::tree_fixtures::{at, ident, locations, mixed_tree};
use lark::interchange::{Document, ExprRecord, InterchangeError, from_json, to_json};
use lark::syntax::print_expr;
use lark::{BinaryOp, BinaryOperatorExpression, Expr, Node, SyntaxError};

#[test]
fn test_json_round_trip() {
    let tree = mixed_tree();
    let json = to_json(&tree).unwrap();
    let decoded = from_json(&json).unwrap();
    assert_eq!(decoded, tree);
    assert_eq!(print_expr(&decoded), print_expr(&tree));
    assert_eq!(
        decoded.location().unwrap(),
        tree.location().unwrap()
    );
}

#[test]
fn test_one_source_record_per_map() {
    let document = Document::encode(&mixed_tree());
    assert_eq!(document.sources.len(), 1);
    assert!(matches!(document.root, ExprRecord::Conditional { .. }));
}

#[test]
fn test_distinct_maps_get_distinct_records() {
    // Same file and text, different allocations: kept apart on encode.
    let left = locations("a.lark", "a + b");
    let right = locations("a.lark", "a + b");
    let sum: Expr = BinaryOperatorExpression::new(
        ident(&left, 0, "a"),
        BinaryOp::Plus,
        at(2),
        ident(&right, 4, "b"),
    )
    .into();

    let document = Document::encode(&sum);
    assert_eq!(document.sources.len(), 2);

    let decoded = document.decode().unwrap();
    assert_eq!(decoded, sum);
}

#[test]
fn test_decoded_tree_shares_one_map() {
    let decoded = from_json(&to_json(&mixed_tree()).unwrap()).unwrap();
    let Expr::Conditional(conditional) = &decoded else {
        panic!("expected conditional");
    };
    assert!(Arc::ptr_eq(
        conditional.then_case().locations(),
        conditional.else_case().locations()
    ));
}

#[test]
fn test_bad_leaf_surfaces_syntax_error() {
    let json = r#"{
        "sources": [{"file": "bad.lark", "text": "0x"}],
        "root": {"node": "leaf", "kind": "int", "source": 0, "start": 0, "text": "0x", "end": 2}
    }"#;
    let err = from_json(json).unwrap_err();
    assert!(matches!(
        err,
        InterchangeError::Syntax(SyntaxError::MalformedLiteral { .. })
    ));
}

#[test]
fn test_unknown_node_tag_is_json_error() {
    let json = r#"{"sources": [], "root": {"node": "lambda"}}"#;
    assert!(matches!(from_json(json), Err(InterchangeError::Json(_))));
}

#[test]
fn test_list_must_contain_its_elements() {
    let json = r#"{
        "sources": [{"file": "list.lark", "text": "x = [y]"}],
        "root": {"node": "list", "source": 0, "start": 4, "end": 5, "elements": [
            {"node": "leaf", "kind": "identifier", "source": 0, "start": 0, "text": "x", "end": 1}
        ]}
    }"#;
    let err = from_json(json).unwrap_err();
    assert!(matches!(
        err,
        InterchangeError::Syntax(SyntaxError::ReconstructionMismatch { .. })
    ));
}
