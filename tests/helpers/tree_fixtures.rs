//! Hand-built expression trees with real offsets into their source text.

use std::sync::Arc;

use lark::{
    BinaryOp, BinaryOperatorExpression, ByteLiteral, ConditionalExpression, Expr, FileLocations,
    FloatLiteral, Identifier, IntLiteral, ListExpression, StringLiteral, TextSize, UnaryOp,
    UnaryOperatorExpression,
};

/// Source for [`mixed_tree`]; every node kind appears at least once.
pub const MIXED_SOURCE: &str = "-x + [1, 2.5, 'a', b'b'] if ok else y";

pub fn at(offset: u32) -> TextSize {
    TextSize::new(offset)
}

pub fn locations(file: &str, text: &str) -> Arc<FileLocations> {
    Arc::new(FileLocations::new(file, text))
}

pub fn ident(locations: &Arc<FileLocations>, start: u32, name: &str) -> Expr {
    let end = start + name.len() as u32;
    Identifier::new(Arc::clone(locations), at(start), name, at(end))
        .unwrap()
        .into()
}

/// `-x + [1, 2.5, 'a', b'b'] if ok else y`
pub fn mixed_tree() -> Expr {
    let locs = locations("mixed.lark", MIXED_SOURCE);

    let negated = UnaryOperatorExpression::new(UnaryOp::Minus, at(0), ident(&locs, 1, "x"));
    let elements: Vec<Expr> = vec![
        IntLiteral::new(Arc::clone(&locs), at(6), "1", at(7)).unwrap().into(),
        FloatLiteral::new(Arc::clone(&locs), at(9), "2.5", at(12)).unwrap().into(),
        StringLiteral::new(Arc::clone(&locs), at(14), "a", at(17)).into(),
        ByteLiteral::new(Arc::clone(&locs), at(19), "b", at(23)).into(),
    ];
    let list = ListExpression::new(Arc::clone(&locs), at(5), elements, at(24));
    let sum = BinaryOperatorExpression::new(negated, BinaryOp::Plus, at(3), list);

    ConditionalExpression::new(sum, ident(&locs, 28, "ok"), ident(&locs, 36, "y")).into()
}
