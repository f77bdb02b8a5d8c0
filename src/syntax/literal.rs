//! Constant literal nodes.
//!
//! Every literal carries its span explicitly. The decoded value and the raw
//! source spelling can differ in length (escapes, prefixes, quotes), so
//! `end_offset - start_offset` says nothing about `value().len()`.

use std::sync::Arc;

use smol_str::SmolStr;
use text_size::TextSize;

use super::escape;
use super::kind::NodeKind;
use super::node::{Node, assert_span};
use super::visitor::Visitor;
use crate::base::FileLocations;
use crate::error::SyntaxError;

/// Implements [`Node`] for a type holding `locations`, `start_offset` and
/// `end_offset` fields.
macro_rules! impl_spanned_node {
    ($ty:ident, $kind:ident, $visit:ident) => {
        impl Node for $ty {
            fn start_offset(&self) -> TextSize {
                self.start_offset
            }

            fn end_offset(&self) -> TextSize {
                self.end_offset
            }

            fn kind(&self) -> NodeKind {
                NodeKind::$kind
            }

            fn accept(&self, visitor: &mut dyn Visitor) {
                visitor.$visit(self)
            }

            fn locations(&self) -> &Arc<FileLocations> {
                &self.locations
            }
        }
    };
}

pub(super) use impl_spanned_node;

/// Syntax node for a bytes literal, `b"..."`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ByteLiteral {
    locations: Arc<FileLocations>,
    start_offset: TextSize,
    // UTF-8 encoding of the decoded text.
    value: Box<str>,
    end_offset: TextSize,
}

impl ByteLiteral {
    /// Build the node from the lexer's decoded text.
    ///
    /// The value is the UTF-8 encoding of `text`, independent of how the
    /// host represents strings, so identical source always yields identical
    /// bytes.
    ///
    /// # Panics
    ///
    /// Panics if `end_offset < start_offset`.
    pub fn new(
        locations: Arc<FileLocations>,
        start_offset: TextSize,
        text: &str,
        end_offset: TextSize,
    ) -> Self {
        assert_span(NodeKind::BYTE_LITERAL, start_offset, end_offset);
        Self {
            locations,
            start_offset,
            value: text.into(),
            end_offset,
        }
    }

    /// Build the node from its quoted source spelling, e.g. `b"café"`.
    pub fn parse(
        locations: Arc<FileLocations>,
        start_offset: TextSize,
        source: &str,
        end_offset: TextSize,
    ) -> Result<Self, SyntaxError> {
        let unquoted = escape::unquote(source)?;
        if !unquoted.bytes {
            return Err(SyntaxError::malformed(
                NodeKind::BYTE_LITERAL.name(),
                "missing b prefix",
            ));
        }
        Ok(Self::new(locations, start_offset, &unquoted.text, end_offset))
    }

    /// Returns the value denoted by the literal.
    pub fn value(&self) -> &[u8] {
        self.value.as_bytes()
    }

    /// The value as the text it was decoded from.
    pub fn as_str(&self) -> &str {
        &self.value
    }
}

impl_spanned_node!(ByteLiteral, BYTE_LITERAL, visit_byte_literal);

/// Syntax node for a string literal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StringLiteral {
    locations: Arc<FileLocations>,
    start_offset: TextSize,
    value: Box<str>,
    end_offset: TextSize,
}

impl StringLiteral {
    /// # Panics
    ///
    /// Panics if `end_offset < start_offset`.
    pub fn new(
        locations: Arc<FileLocations>,
        start_offset: TextSize,
        text: &str,
        end_offset: TextSize,
    ) -> Self {
        assert_span(NodeKind::STRING_LITERAL, start_offset, end_offset);
        Self {
            locations,
            start_offset,
            value: text.into(),
            end_offset,
        }
    }

    /// Build the node from its quoted source spelling, e.g. `'a\tb'`.
    pub fn parse(
        locations: Arc<FileLocations>,
        start_offset: TextSize,
        source: &str,
        end_offset: TextSize,
    ) -> Result<Self, SyntaxError> {
        let unquoted = escape::unquote(source)?;
        if unquoted.bytes {
            return Err(SyntaxError::malformed(
                NodeKind::STRING_LITERAL.name(),
                "unexpected b prefix",
            ));
        }
        Ok(Self::new(locations, start_offset, &unquoted.text, end_offset))
    }

    pub fn value(&self) -> &str {
        &self.value
    }
}

impl_spanned_node!(StringLiteral, STRING_LITERAL, visit_string_literal);

/// Syntax node for an integer literal (`42`, `0x2A`, `0o52`, `0b101010`).
///
/// Only the `i64` range is supported. The language's integers are
/// arbitrary precision, but a literal above `i64::MAX` is rejected here as
/// [`SyntaxError::MalformedLiteral`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntLiteral {
    locations: Arc<FileLocations>,
    start_offset: TextSize,
    raw: SmolStr,
    value: i64,
    end_offset: TextSize,
}

impl IntLiteral {
    /// # Panics
    ///
    /// Panics if `end_offset < start_offset`.
    pub fn new(
        locations: Arc<FileLocations>,
        start_offset: TextSize,
        raw: &str,
        end_offset: TextSize,
    ) -> Result<Self, SyntaxError> {
        let value = parse_int(raw)?;
        assert_span(NodeKind::INT_LITERAL, start_offset, end_offset);
        Ok(Self {
            locations,
            start_offset,
            raw: raw.into(),
            value,
            end_offset,
        })
    }

    pub fn value(&self) -> i64 {
        self.value
    }

    /// The literal as spelled in source.
    pub fn raw(&self) -> &str {
        &self.raw
    }
}

impl_spanned_node!(IntLiteral, INT_LITERAL, visit_int_literal);

fn parse_int(raw: &str) -> Result<i64, SyntaxError> {
    let kind = NodeKind::INT_LITERAL.name();
    let (digits, radix) = match raw.get(..2) {
        Some("0x" | "0X") => (&raw[2..], 16),
        Some("0o" | "0O") => (&raw[2..], 8),
        Some("0b" | "0B") => (&raw[2..], 2),
        _ => (raw, 10),
    };

    if digits.is_empty() {
        return Err(SyntaxError::malformed(kind, format!("missing digits in {raw:?}")));
    }
    if let Some(bad) = digits.chars().find(|c| !c.is_digit(radix)) {
        return Err(SyntaxError::malformed(
            kind,
            format!("invalid digit {bad:?} in {raw:?}"),
        ));
    }
    if radix == 10 && digits.len() > 1 && digits.starts_with('0') {
        return Err(SyntaxError::malformed(
            kind,
            format!("leading zeros are not allowed in {raw:?}; use 0o for octal"),
        ));
    }

    i64::from_str_radix(digits, radix)
        .map_err(|_| SyntaxError::malformed(kind, format!("{raw} is out of range")))
}

/// Syntax node for a floating-point literal (`1.5`, `.5`, `1e9`).
#[derive(Debug, Clone, PartialEq)]
pub struct FloatLiteral {
    locations: Arc<FileLocations>,
    start_offset: TextSize,
    raw: SmolStr,
    value: f64,
    end_offset: TextSize,
}

impl FloatLiteral {
    /// # Panics
    ///
    /// Panics if `end_offset < start_offset`.
    pub fn new(
        locations: Arc<FileLocations>,
        start_offset: TextSize,
        raw: &str,
        end_offset: TextSize,
    ) -> Result<Self, SyntaxError> {
        let value = parse_float(raw)?;
        assert_span(NodeKind::FLOAT_LITERAL, start_offset, end_offset);
        Ok(Self {
            locations,
            start_offset,
            raw: raw.into(),
            value,
            end_offset,
        })
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    /// The literal as spelled in source.
    pub fn raw(&self) -> &str {
        &self.raw
    }
}

impl_spanned_node!(FloatLiteral, FLOAT_LITERAL, visit_float_literal);

fn parse_float(raw: &str) -> Result<f64, SyntaxError> {
    let kind = NodeKind::FLOAT_LITERAL.name();
    // Rust's parser also accepts "inf", "NaN" and signs; the grammar does not.
    if !raw.starts_with(|c: char| c.is_ascii_digit() || c == '.') {
        return Err(SyntaxError::malformed(kind, format!("invalid float literal {raw:?}")));
    }
    let value: f64 = raw
        .parse()
        .map_err(|_| SyntaxError::malformed(kind, format!("invalid float literal {raw:?}")))?;
    if !value.is_finite() {
        return Err(SyntaxError::malformed(kind, format!("{raw} is out of range")));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn locs() -> Arc<FileLocations> {
        Arc::new(FileLocations::new("lit.lark", "x = b\"abc\"\ny = 0x2A\n"))
    }

    #[test]
    fn test_byte_literal_value_is_utf8() {
        let node = ByteLiteral::new(locs(), TextSize::new(4), "é", TextSize::new(10));
        assert_eq!(node.value(), &[0xC3, 0xA9]);
        assert_eq!(node.as_str(), "é");
    }

    #[test]
    fn test_byte_literal_parse_requires_prefix() {
        let err = ByteLiteral::parse(locs(), TextSize::new(4), "\"abc\"", TextSize::new(9)).unwrap_err();
        assert!(matches!(err, SyntaxError::MalformedLiteral { kind: "bytes literal", .. }));
    }

    #[test]
    fn test_string_literal_parse_rejects_bytes() {
        assert!(StringLiteral::parse(locs(), TextSize::new(4), "b\"abc\"", TextSize::new(10)).is_err());
        let node = StringLiteral::parse(locs(), TextSize::new(4), "'a\\tb'", TextSize::new(10)).unwrap();
        assert_eq!(node.value(), "a\tb");
    }

    #[test]
    #[should_panic(expected = "span is inverted")]
    fn test_inverted_span_panics() {
        let _ = ByteLiteral::new(locs(), TextSize::new(5), "x", TextSize::new(4));
    }

    #[test]
    fn test_parse_int() {
        assert_eq!(parse_int("0").unwrap(), 0);
        assert_eq!(parse_int("42").unwrap(), 42);
        assert_eq!(parse_int("0x2A").unwrap(), 42);
        assert_eq!(parse_int("0o52").unwrap(), 42);
        assert_eq!(parse_int("0b101010").unwrap(), 42);
        assert_eq!(parse_int("9223372036854775807").unwrap(), i64::MAX);
    }

    #[test]
    fn test_parse_int_rejects() {
        for raw in ["", "0x", "012", "0b102", "-1", "+1", "9223372036854775808", "1_000"] {
            assert!(parse_int(raw).is_err(), "{raw:?} should be rejected");
        }
    }

    #[test]
    fn test_parse_float() {
        assert_eq!(parse_float("1.5").unwrap(), 1.5);
        assert_eq!(parse_float(".5").unwrap(), 0.5);
        assert_eq!(parse_float("1e3").unwrap(), 1000.0);
        for raw in ["inf", "NaN", "-1.0", "1e999", "1.2.3", ""] {
            assert!(parse_float(raw).is_err(), "{raw:?} should be rejected");
        }
    }

    #[test]
    fn test_int_literal_keeps_raw() {
        let node = IntLiteral::new(locs(), TextSize::new(15), "0x2A", TextSize::new(19)).unwrap();
        assert_eq!(node.raw(), "0x2A");
        assert_eq!(node.value(), 42);
        assert_eq!(node.kind(), NodeKind::INT_LITERAL);
    }
}
