//! Node kinds for the expression tree.

use std::fmt;

/// Closed tag identifying the concrete variant of a node.
///
/// Consumers that need exhaustive handling without naming each concrete
/// node type can `match` on this.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[allow(non_camel_case_types)]
pub enum NodeKind {
    // =========================================================================
    // LEAVES
    // =========================================================================
    IDENTIFIER,     // name
    INT_LITERAL,    // 42, 0x2A
    FLOAT_LITERAL,  // 4.2e1
    STRING_LITERAL, // "text"
    BYTE_LITERAL,   // b"text"

    // =========================================================================
    // COMPOSITES
    // =========================================================================
    UNARY_OPERATOR,  // -x, not x
    BINARY_OPERATOR, // x + y
    CONDITIONAL,     // x if c else y
    LIST_EXPR,       // [x, y]
}

impl NodeKind {
    pub const ALL: [NodeKind; 9] = [
        Self::IDENTIFIER,
        Self::INT_LITERAL,
        Self::FLOAT_LITERAL,
        Self::STRING_LITERAL,
        Self::BYTE_LITERAL,
        Self::UNARY_OPERATOR,
        Self::BINARY_OPERATOR,
        Self::CONDITIONAL,
        Self::LIST_EXPR,
    ];

    /// Check if this is a constant literal
    pub fn is_literal(self) -> bool {
        matches!(
            self,
            Self::INT_LITERAL | Self::FLOAT_LITERAL | Self::STRING_LITERAL | Self::BYTE_LITERAL
        )
    }

    /// Check if nodes of this kind have no children
    pub fn is_leaf(self) -> bool {
        self.is_literal() || self == Self::IDENTIFIER
    }

    /// Human-readable name used in diagnostics
    pub fn name(self) -> &'static str {
        match self {
            Self::IDENTIFIER => "identifier",
            Self::INT_LITERAL => "int literal",
            Self::FLOAT_LITERAL => "float literal",
            Self::STRING_LITERAL => "string literal",
            Self::BYTE_LITERAL => "bytes literal",
            Self::UNARY_OPERATOR => "unary operator",
            Self::BINARY_OPERATOR => "binary operator",
            Self::CONDITIONAL => "conditional expression",
            Self::LIST_EXPR => "list expression",
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
