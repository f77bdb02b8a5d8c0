//! Identifier and composite expression nodes.

use std::fmt;
use std::sync::Arc;

use smol_str::SmolStr;
use text_size::TextSize;

use super::kind::NodeKind;
use super::literal::impl_spanned_node;
use super::node::{Expr, Node, assert_span, check_order, check_same_source};
use super::visitor::Visitor;
use crate::base::FileLocations;
use crate::error::SyntaxError;

// ============================================================================
// Operators
// ============================================================================

/// Prefix operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnaryOp {
    Minus,
    Plus,
    Tilde,
    Not,
}

impl UnaryOp {
    pub const ALL: [UnaryOp; 4] = [Self::Minus, Self::Plus, Self::Tilde, Self::Not];

    /// Look up an operator by its source spelling
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|op| op.symbol() == symbol)
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Self::Minus => "-",
            Self::Plus => "+",
            Self::Tilde => "~",
            Self::Not => "not",
        }
    }
}

impl fmt::Display for UnaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Infix operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    Or,
    And,
    EqEq,
    NotEq,
    Lt,
    Gt,
    LtEq,
    GtEq,
    In,
    NotIn,
    Pipe,
    Caret,
    Amp,
    LtLt,
    GtGt,
    Plus,
    Minus,
    Star,
    Slash,
    SlashSlash,
    Percent,
}

impl BinaryOp {
    pub const ALL: [BinaryOp; 21] = [
        Self::Or,
        Self::And,
        Self::EqEq,
        Self::NotEq,
        Self::Lt,
        Self::Gt,
        Self::LtEq,
        Self::GtEq,
        Self::In,
        Self::NotIn,
        Self::Pipe,
        Self::Caret,
        Self::Amp,
        Self::LtLt,
        Self::GtGt,
        Self::Plus,
        Self::Minus,
        Self::Star,
        Self::Slash,
        Self::SlashSlash,
        Self::Percent,
    ];

    /// Look up an operator by its source spelling
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|op| op.symbol() == symbol)
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Self::Or => "or",
            Self::And => "and",
            Self::EqEq => "==",
            Self::NotEq => "!=",
            Self::Lt => "<",
            Self::Gt => ">",
            Self::LtEq => "<=",
            Self::GtEq => ">=",
            Self::In => "in",
            Self::NotIn => "not in",
            Self::Pipe => "|",
            Self::Caret => "^",
            Self::Amp => "&",
            Self::LtLt => "<<",
            Self::GtGt => ">>",
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Star => "*",
            Self::Slash => "/",
            Self::SlashSlash => "//",
            Self::Percent => "%",
        }
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

// ============================================================================
// Identifier
// ============================================================================

/// Syntax node for a name reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identifier {
    locations: Arc<FileLocations>,
    start_offset: TextSize,
    name: SmolStr,
    end_offset: TextSize,
}

impl Identifier {
    /// # Panics
    ///
    /// Panics if `end_offset < start_offset`.
    pub fn new(
        locations: Arc<FileLocations>,
        start_offset: TextSize,
        name: &str,
        end_offset: TextSize,
    ) -> Result<Self, SyntaxError> {
        if !is_identifier(name) {
            return Err(SyntaxError::malformed(
                NodeKind::IDENTIFIER.name(),
                format!("{name:?} is not a valid identifier"),
            ));
        }
        assert_span(NodeKind::IDENTIFIER, start_offset, end_offset);
        Ok(Self {
            locations,
            start_offset,
            name: name.into(),
            end_offset,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl_spanned_node!(Identifier, IDENTIFIER, visit_identifier);

/// `_` or XID_Start, followed by XID_Continue characters.
pub fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    chars
        .next()
        .is_some_and(|c| c == '_' || unicode_ident::is_xid_start(c))
        && chars.all(unicode_ident::is_xid_continue)
}

// ============================================================================
// Composites
// ============================================================================

/// Syntax node for `op operand`.
#[derive(Debug, Clone, PartialEq)]
pub struct UnaryOperatorExpression {
    op: UnaryOp,
    op_offset: TextSize,
    operand: Expr,
}

impl UnaryOperatorExpression {
    /// # Panics
    ///
    /// Panics if the operator starts after its operand.
    pub fn new(op: UnaryOp, op_offset: TextSize, operand: impl Into<Expr>) -> Self {
        Self::try_new(op, op_offset, operand).unwrap_or_else(|err| panic!("{err}"))
    }

    /// Like [`new`](Self::new), for parts that come from outside the parser.
    pub fn try_new(op: UnaryOp, op_offset: TextSize, operand: impl Into<Expr>) -> Result<Self, SyntaxError> {
        let operand = operand.into();
        check_order(NodeKind::UNARY_OPERATOR, op_offset, operand.start_offset())?;
        Ok(Self {
            op,
            op_offset,
            operand,
        })
    }

    pub fn op(&self) -> UnaryOp {
        self.op
    }

    pub fn op_offset(&self) -> TextSize {
        self.op_offset
    }

    pub fn operand(&self) -> &Expr {
        &self.operand
    }
}

impl Node for UnaryOperatorExpression {
    fn start_offset(&self) -> TextSize {
        self.op_offset
    }

    fn end_offset(&self) -> TextSize {
        self.operand.end_offset()
    }

    fn kind(&self) -> NodeKind {
        NodeKind::UNARY_OPERATOR
    }

    fn accept(&self, visitor: &mut dyn Visitor) {
        visitor.visit_unary_operator(self)
    }

    fn locations(&self) -> &Arc<FileLocations> {
        self.operand.locations()
    }
}

/// Syntax node for `lhs op rhs`.
#[derive(Debug, Clone, PartialEq)]
pub struct BinaryOperatorExpression {
    lhs: Expr,
    op: BinaryOp,
    op_offset: TextSize,
    rhs: Expr,
}

impl BinaryOperatorExpression {
    /// # Panics
    ///
    /// Panics if the operands overlap, are out of order or come from
    /// different sources.
    pub fn new(lhs: impl Into<Expr>, op: BinaryOp, op_offset: TextSize, rhs: impl Into<Expr>) -> Self {
        Self::try_new(lhs, op, op_offset, rhs).unwrap_or_else(|err| panic!("{err}"))
    }

    /// Like [`new`](Self::new), for parts that come from outside the parser.
    pub fn try_new(
        lhs: impl Into<Expr>,
        op: BinaryOp,
        op_offset: TextSize,
        rhs: impl Into<Expr>,
    ) -> Result<Self, SyntaxError> {
        let kind = NodeKind::BINARY_OPERATOR;
        let (lhs, rhs) = (lhs.into(), rhs.into());
        check_order(kind, lhs.end_offset(), op_offset)?;
        check_order(kind, op_offset, rhs.start_offset())?;
        check_same_source(kind, lhs.locations(), &rhs)?;
        Ok(Self {
            lhs,
            op,
            op_offset,
            rhs,
        })
    }

    pub fn lhs(&self) -> &Expr {
        &self.lhs
    }

    pub fn op(&self) -> BinaryOp {
        self.op
    }

    pub fn op_offset(&self) -> TextSize {
        self.op_offset
    }

    pub fn rhs(&self) -> &Expr {
        &self.rhs
    }
}

impl Node for BinaryOperatorExpression {
    fn start_offset(&self) -> TextSize {
        self.lhs.start_offset()
    }

    fn end_offset(&self) -> TextSize {
        self.rhs.end_offset()
    }

    fn kind(&self) -> NodeKind {
        NodeKind::BINARY_OPERATOR
    }

    fn accept(&self, visitor: &mut dyn Visitor) {
        visitor.visit_binary_operator(self)
    }

    fn locations(&self) -> &Arc<FileLocations> {
        self.lhs.locations()
    }
}

/// Syntax node for `then_case if condition else else_case`.
#[derive(Debug, Clone, PartialEq)]
pub struct ConditionalExpression {
    then_case: Expr,
    condition: Expr,
    else_case: Expr,
}

impl ConditionalExpression {
    /// # Panics
    ///
    /// Panics if the parts are out of source order or come from different
    /// sources.
    pub fn new(then_case: impl Into<Expr>, condition: impl Into<Expr>, else_case: impl Into<Expr>) -> Self {
        Self::try_new(then_case, condition, else_case).unwrap_or_else(|err| panic!("{err}"))
    }

    /// Like [`new`](Self::new), for parts that come from outside the parser.
    pub fn try_new(
        then_case: impl Into<Expr>,
        condition: impl Into<Expr>,
        else_case: impl Into<Expr>,
    ) -> Result<Self, SyntaxError> {
        let kind = NodeKind::CONDITIONAL;
        let (then_case, condition, else_case) = (then_case.into(), condition.into(), else_case.into());
        check_order(kind, then_case.end_offset(), condition.start_offset())?;
        check_order(kind, condition.end_offset(), else_case.start_offset())?;
        check_same_source(kind, then_case.locations(), &condition)?;
        check_same_source(kind, then_case.locations(), &else_case)?;
        Ok(Self {
            then_case,
            condition,
            else_case,
        })
    }

    pub fn then_case(&self) -> &Expr {
        &self.then_case
    }

    pub fn condition(&self) -> &Expr {
        &self.condition
    }

    pub fn else_case(&self) -> &Expr {
        &self.else_case
    }
}

impl Node for ConditionalExpression {
    fn start_offset(&self) -> TextSize {
        self.then_case.start_offset()
    }

    fn end_offset(&self) -> TextSize {
        self.else_case.end_offset()
    }

    fn kind(&self) -> NodeKind {
        NodeKind::CONDITIONAL
    }

    fn accept(&self, visitor: &mut dyn Visitor) {
        visitor.visit_conditional(self)
    }

    fn locations(&self) -> &Arc<FileLocations> {
        self.then_case.locations()
    }
}

/// Syntax node for `[e1, e2, ...]`; the span includes the brackets.
#[derive(Debug, Clone, PartialEq)]
pub struct ListExpression {
    locations: Arc<FileLocations>,
    start_offset: TextSize,
    elements: Vec<Expr>,
    end_offset: TextSize,
}

impl ListExpression {
    /// # Panics
    ///
    /// Panics unless the elements lie in order inside
    /// `[start_offset, end_offset)` of the same source.
    pub fn new(
        locations: Arc<FileLocations>,
        start_offset: TextSize,
        elements: Vec<Expr>,
        end_offset: TextSize,
    ) -> Self {
        Self::try_new(locations, start_offset, elements, end_offset).unwrap_or_else(|err| panic!("{err}"))
    }

    /// Like [`new`](Self::new), for parts that come from outside the parser.
    pub fn try_new(
        locations: Arc<FileLocations>,
        start_offset: TextSize,
        elements: Vec<Expr>,
        end_offset: TextSize,
    ) -> Result<Self, SyntaxError> {
        let kind = NodeKind::LIST_EXPR;
        check_order(kind, start_offset, end_offset)?;
        if end_offset > locations.len() {
            return Err(SyntaxError::mismatch(
                kind.name(),
                format!(
                    "end offset {} is beyond {} (length {})",
                    u32::from(end_offset),
                    locations.file(),
                    u32::from(locations.len())
                ),
            ));
        }
        let mut cursor = start_offset;
        for element in &elements {
            check_same_source(kind, &locations, element)?;
            check_order(kind, cursor, element.start_offset())?;
            cursor = element.end_offset();
        }
        check_order(kind, cursor, end_offset)?;
        Ok(Self {
            locations,
            start_offset,
            elements,
            end_offset,
        })
    }

    pub fn elements(&self) -> &[Expr] {
        &self.elements
    }
}

impl_spanned_node!(ListExpression, LIST_EXPR, visit_list);
