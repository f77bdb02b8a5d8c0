//! Serde records mirroring the expression tree.

use std::borrow::Cow;
use std::sync::Arc;

use indexmap::IndexMap;
use rustc_hash::FxBuildHasher;
use serde::{Deserialize, Serialize};
use text_size::TextSize;

use super::InterchangeError;
use crate::base::FileLocations;
use crate::error::SyntaxError;
use crate::syntax::{
    BinaryOp, BinaryOperatorExpression, ConditionalExpression, Expr, LeafParts, ListExpression,
    Node, NodeKind, Reconstruct, UnaryOp, UnaryOperatorExpression, reconstruct_leaf,
};

/// One source unit referenced by the tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceRecord {
    pub file: String,
    pub text: String,
}

/// Leaf node kinds as they appear on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeafKind {
    Identifier,
    Int,
    Float,
    String,
    Bytes,
}

impl LeafKind {
    pub fn node_kind(self) -> NodeKind {
        match self {
            Self::Identifier => NodeKind::IDENTIFIER,
            Self::Int => NodeKind::INT_LITERAL,
            Self::Float => NodeKind::FLOAT_LITERAL,
            Self::String => NodeKind::STRING_LITERAL,
            Self::Bytes => NodeKind::BYTE_LITERAL,
        }
    }
}

/// A leaf node's four parts plus its kind; `source` indexes the source table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeafRecord {
    pub kind: LeafKind,
    pub source: usize,
    pub start: u32,
    pub text: String,
    pub end: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "node", rename_all = "snake_case")]
pub enum ExprRecord {
    Leaf(LeafRecord),
    Unary {
        op: String,
        op_offset: u32,
        operand: Box<ExprRecord>,
    },
    Binary {
        lhs: Box<ExprRecord>,
        op: String,
        op_offset: u32,
        rhs: Box<ExprRecord>,
    },
    Conditional {
        then_case: Box<ExprRecord>,
        condition: Box<ExprRecord>,
        else_case: Box<ExprRecord>,
    },
    List {
        source: usize,
        start: u32,
        elements: Vec<ExprRecord>,
        end: u32,
    },
}

/// A serialized tree together with the sources it was parsed from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub sources: Vec<SourceRecord>,
    pub root: ExprRecord,
}

impl Document {
    pub fn encode(expr: &Expr) -> Self {
        let mut encoder = Encoder::default();
        let root = encoder.expr(expr);
        let sources = encoder
            .sources
            .into_values()
            .map(|locations| SourceRecord {
                file: locations.file().to_owned(),
                text: locations.text().to_owned(),
            })
            .collect();
        Self { sources, root }
    }

    pub fn decode(&self) -> Result<Expr, InterchangeError> {
        tracing::trace!(sources = self.sources.len(), "decoding document");
        let sources: Vec<Arc<FileLocations>> = self
            .sources
            .iter()
            .map(|source| Arc::new(FileLocations::new(source.file.as_str(), source.text.as_str())))
            .collect();
        Decoder { sources }.expr(&self.root)
    }

    pub fn to_json(&self) -> Result<String, InterchangeError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self, InterchangeError> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Collects distinct offset maps by identity while building records.
#[derive(Default)]
struct Encoder {
    sources: IndexMap<*const FileLocations, Arc<FileLocations>, FxBuildHasher>,
}

impl Encoder {
    fn source(&mut self, locations: &Arc<FileLocations>) -> usize {
        let (index, _) = self
            .sources
            .insert_full(Arc::as_ptr(locations), Arc::clone(locations));
        index
    }

    fn leaf(&mut self, kind: LeafKind, parts: LeafParts<'_>) -> ExprRecord {
        ExprRecord::Leaf(LeafRecord {
            kind,
            source: self.source(&parts.locations),
            start: parts.start_offset.into(),
            text: parts.text.into_owned(),
            end: parts.end_offset.into(),
        })
    }

    fn expr(&mut self, expr: &Expr) -> ExprRecord {
        match expr {
            Expr::Identifier(node) => self.leaf(LeafKind::Identifier, node.decompose()),
            Expr::Int(node) => self.leaf(LeafKind::Int, node.decompose()),
            Expr::Float(node) => self.leaf(LeafKind::Float, node.decompose()),
            Expr::String(node) => self.leaf(LeafKind::String, node.decompose()),
            Expr::Bytes(node) => self.leaf(LeafKind::Bytes, node.decompose()),
            Expr::Unary(node) => ExprRecord::Unary {
                op: node.op().symbol().to_owned(),
                op_offset: node.op_offset().into(),
                operand: Box::new(self.expr(node.operand())),
            },
            Expr::Binary(node) => ExprRecord::Binary {
                lhs: Box::new(self.expr(node.lhs())),
                op: node.op().symbol().to_owned(),
                op_offset: node.op_offset().into(),
                rhs: Box::new(self.expr(node.rhs())),
            },
            Expr::Conditional(node) => ExprRecord::Conditional {
                then_case: Box::new(self.expr(node.then_case())),
                condition: Box::new(self.expr(node.condition())),
                else_case: Box::new(self.expr(node.else_case())),
            },
            Expr::List(node) => ExprRecord::List {
                source: self.source(node.locations()),
                start: node.start_offset().into(),
                elements: node.elements().iter().map(|element| self.expr(element)).collect(),
                end: node.end_offset().into(),
            },
        }
    }
}

struct Decoder {
    sources: Vec<Arc<FileLocations>>,
}

impl Decoder {
    fn source(&self, index: usize) -> Result<&Arc<FileLocations>, InterchangeError> {
        self.sources.get(index).ok_or(InterchangeError::UnknownSource {
            index,
            len: self.sources.len(),
        })
    }

    fn expr(&self, record: &ExprRecord) -> Result<Expr, InterchangeError> {
        Ok(match record {
            ExprRecord::Leaf(leaf) => {
                let parts = LeafParts {
                    locations: Arc::clone(self.source(leaf.source)?),
                    start_offset: TextSize::new(leaf.start),
                    text: Cow::Borrowed(leaf.text.as_str()),
                    end_offset: TextSize::new(leaf.end),
                };
                reconstruct_leaf(leaf.kind.node_kind(), parts)?
            }
            ExprRecord::Unary {
                op,
                op_offset,
                operand,
            } => {
                let op = UnaryOp::from_symbol(op).ok_or_else(|| unknown_operator(NodeKind::UNARY_OPERATOR, op))?;
                UnaryOperatorExpression::try_new(op, TextSize::new(*op_offset), self.expr(operand)?)?.into()
            }
            ExprRecord::Binary {
                lhs,
                op,
                op_offset,
                rhs,
            } => {
                let op = BinaryOp::from_symbol(op).ok_or_else(|| unknown_operator(NodeKind::BINARY_OPERATOR, op))?;
                BinaryOperatorExpression::try_new(self.expr(lhs)?, op, TextSize::new(*op_offset), self.expr(rhs)?)?
                    .into()
            }
            ExprRecord::Conditional {
                then_case,
                condition,
                else_case,
            } => ConditionalExpression::try_new(
                self.expr(then_case)?,
                self.expr(condition)?,
                self.expr(else_case)?,
            )?
            .into(),
            ExprRecord::List {
                source,
                start,
                elements,
                end,
            } => {
                let locations = Arc::clone(self.source(*source)?);
                let elements = elements
                    .iter()
                    .map(|element| self.expr(element))
                    .collect::<Result<Vec<_>, _>>()?;
                ListExpression::try_new(locations, TextSize::new(*start), elements, TextSize::new(*end))?.into()
            }
        })
    }
}

fn unknown_operator(kind: NodeKind, op: &str) -> SyntaxError {
    SyntaxError::mismatch(kind.name(), format!("unknown operator {op:?}"))
}
