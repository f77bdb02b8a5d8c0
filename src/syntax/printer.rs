//! Source printer for expression trees.

use super::escape;
use super::expr::{
    BinaryOperatorExpression, ConditionalExpression, Identifier, ListExpression, UnaryOp,
    UnaryOperatorExpression,
};
use super::kind::NodeKind;
use super::literal::{ByteLiteral, FloatLiteral, IntLiteral, StringLiteral};
use super::node::{Expr, Node};
use super::visitor::Visitor;

/// Quote character used for string and bytes literals
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QuoteStyle {
    #[default]
    Double,
    Single,
}

impl QuoteStyle {
    pub fn as_char(self) -> char {
        match self {
            Self::Double => '"',
            Self::Single => '\'',
        }
    }
}

/// Printing options
#[derive(Debug, Clone, Default)]
pub struct PrintOptions {
    pub quote: QuoteStyle,
    /// Escape every non-ASCII character with `\u`/`\U`
    pub ascii_only: bool,
}

/// Renders expressions back to source text.
///
/// Operands that are themselves operators or conditionals are parenthesized,
/// so the output parses back to the same tree regardless of precedence.
pub struct Printer<'a> {
    options: &'a PrintOptions,
    out: String,
}

impl<'a> Printer<'a> {
    pub fn new(options: &'a PrintOptions) -> Self {
        Self {
            options,
            out: String::new(),
        }
    }

    pub fn finish(self) -> String {
        self.out
    }

    fn operand(&mut self, expr: &Expr) {
        let nested = matches!(
            expr.kind(),
            NodeKind::UNARY_OPERATOR | NodeKind::BINARY_OPERATOR | NodeKind::CONDITIONAL
        );
        if nested {
            self.out.push('(');
            expr.accept(self);
            self.out.push(')');
        } else {
            expr.accept(self);
        }
    }

    fn quoted(&mut self, text: &str, bytes: bool) {
        let quoted = escape::quote(
            text,
            bytes,
            self.options.quote.as_char(),
            self.options.ascii_only,
        );
        self.out.push_str(&quoted);
    }
}

impl Visitor for Printer<'_> {
    fn visit_identifier(&mut self, node: &Identifier) {
        self.out.push_str(node.name());
    }

    fn visit_int_literal(&mut self, node: &IntLiteral) {
        self.out.push_str(node.raw());
    }

    fn visit_float_literal(&mut self, node: &FloatLiteral) {
        self.out.push_str(node.raw());
    }

    fn visit_string_literal(&mut self, node: &StringLiteral) {
        self.quoted(node.value(), false);
    }

    fn visit_byte_literal(&mut self, node: &ByteLiteral) {
        self.quoted(node.as_str(), true);
    }

    fn visit_unary_operator(&mut self, node: &UnaryOperatorExpression) {
        self.out.push_str(node.op().symbol());
        if node.op() == UnaryOp::Not {
            self.out.push(' ');
        }
        self.operand(node.operand());
    }

    fn visit_binary_operator(&mut self, node: &BinaryOperatorExpression) {
        self.operand(node.lhs());
        self.out.push(' ');
        self.out.push_str(node.op().symbol());
        self.out.push(' ');
        self.operand(node.rhs());
    }

    fn visit_conditional(&mut self, node: &ConditionalExpression) {
        self.operand(node.then_case());
        self.out.push_str(" if ");
        self.operand(node.condition());
        self.out.push_str(" else ");
        self.operand(node.else_case());
    }

    fn visit_list(&mut self, node: &ListExpression) {
        self.out.push('[');
        for (i, element) in node.elements().iter().enumerate() {
            if i > 0 {
                self.out.push_str(", ");
            }
            element.accept(self);
        }
        self.out.push(']');
    }
}

/// Print `expr` with default options.
pub fn print_expr(expr: &Expr) -> String {
    print_expr_with(expr, &PrintOptions::default())
}

pub fn print_expr_with(expr: &Expr, options: &PrintOptions) -> String {
    let mut printer = Printer::new(options);
    expr.accept(&mut printer);
    printer.finish()
}
