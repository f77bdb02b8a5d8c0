//! Decoding and encoding of quoted literal spellings.
//!
//! The lexer hands literal nodes their decoded text; this module does that
//! decoding for callers holding the quoted source form (`b"café"`), and
//! the reverse for printers.
//!
//! Decoded text is always UTF-8. Escapes that would denote a lone byte above
//! 0x7F (`\xff`, `\377`) are rejected so that every implementation decodes
//! the same source to the same bytes; spell the character or use `\u00ff`.

use std::fmt::Write as _;

use logos::Logos;

use super::kind::NodeKind;
use crate::error::SyntaxError;

/// A decoded literal spelling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Unquoted {
    /// The decoded text.
    pub text: String,
    /// Had a `b` prefix.
    pub bytes: bool,
    /// Had an `r` prefix; backslashes were kept verbatim.
    pub raw: bool,
    /// Delimited by `'''` or `"""`.
    pub triple: bool,
    /// The quote character, `'` or `"`.
    pub quote: char,
}

impl Unquoted {
    /// Kind of node this spelling denotes.
    pub fn kind(&self) -> NodeKind {
        if self.bytes {
            NodeKind::BYTE_LITERAL
        } else {
            NodeKind::STRING_LITERAL
        }
    }
}

/// Pieces of a literal body between its delimiters.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
enum Piece {
    #[regex(r#"[^\\\n"']+"#)]
    Text,

    #[regex(r#"["']"#)]
    Quote,

    #[token("\n")]
    Newline,

    #[token("\\\n")]
    LineContinuation,

    #[regex(r"\\[0-7]{1,3}")]
    Octal,

    #[regex(r"\\x[0-9a-fA-F]{2}")]
    Hex,

    #[regex(r"\\u[0-9a-fA-F]{4}")]
    Unicode,

    #[regex(r"\\U[0-9a-fA-F]{8}")]
    LongUnicode,

    #[regex(r#"\\[abfnrtv\\'"]"#)]
    Simple,
}

/// Decode a quoted literal spelling such as `"a\tb"`, `b'x'`, `r"\d"` or
/// `"""multi\nline"""`.
pub fn unquote(source: &str) -> Result<Unquoted, SyntaxError> {
    let (bytes, raw, rest) = match source.as_bytes() {
        [b'r', b'b', ..] | [b'b', b'r', ..] => (true, true, &source[2..]),
        [b'b', ..] => (true, false, &source[1..]),
        [b'r', ..] => (false, true, &source[1..]),
        _ => (false, false, source),
    };
    let kind = if bytes {
        NodeKind::BYTE_LITERAL.name()
    } else {
        NodeKind::STRING_LITERAL.name()
    };

    let quote = match rest.chars().next() {
        Some(quote @ ('"' | '\'')) => quote,
        _ => return Err(SyntaxError::malformed(kind, "missing opening quote")),
    };
    let triple_delimiter: String = std::iter::repeat_n(quote, 3).collect();
    let triple = rest.starts_with(&triple_delimiter);
    let delimiter_len = if triple { 3 } else { 1 };

    if rest.len() < 2 * delimiter_len || !rest[delimiter_len..].ends_with(&rest[..delimiter_len]) {
        return Err(SyntaxError::malformed(kind, "unterminated literal"));
    }
    let body = &rest[delimiter_len..rest.len() - delimiter_len];
    // A backslash escapes the closing quote even in raw literals.
    let trailing_backslashes = body.bytes().rev().take_while(|&b| b == b'\\').count();
    if trailing_backslashes % 2 == 1 {
        return Err(SyntaxError::malformed(kind, "unterminated literal"));
    }

    let text = decode_body(body, kind, quote, triple, raw)?;
    Ok(Unquoted {
        text,
        bytes,
        raw,
        triple,
        quote,
    })
}

fn decode_body(
    body: &str,
    kind: &'static str,
    quote: char,
    triple: bool,
    raw: bool,
) -> Result<String, SyntaxError> {
    let mut text = String::with_capacity(body.len());
    let mut lexer = Piece::lexer(body);
    // Consecutive unescaped closing-quote characters seen so far.
    let mut quote_run = 0;

    while let Some(piece) = lexer.next() {
        let slice = lexer.slice();
        let piece = match piece {
            Ok(piece) => piece,
            // A backslash that starts no known escape.
            Err(()) if raw => {
                quote_run = 0;
                text.push_str(slice);
                continue;
            }
            Err(()) => {
                let start = lexer.span().start;
                let snippet: String = body[start..].chars().take(2).collect();
                tracing::debug!(kind, snippet = %snippet, "invalid escape sequence");
                return Err(SyntaxError::malformed(
                    kind,
                    format!("invalid escape sequence {snippet}"),
                ));
            }
        };

        if piece == Piece::Quote && slice.starts_with(quote) {
            quote_run += 1;
            if !triple || quote_run == 3 {
                return Err(SyntaxError::malformed(kind, format!("unescaped {quote} in literal")));
            }
            text.push(quote);
            continue;
        }
        quote_run = 0;

        match piece {
            Piece::Text | Piece::Quote => text.push_str(slice),
            Piece::Newline if triple => text.push('\n'),
            Piece::Newline => {
                return Err(SyntaxError::malformed(kind, "unterminated literal: newline before closing quote"));
            }
            _ if raw => text.push_str(slice),
            Piece::LineContinuation => {}
            Piece::Octal => push_ascii(&mut text, kind, slice, 8)?,
            Piece::Hex => push_ascii(&mut text, kind, slice, 16)?,
            Piece::Unicode | Piece::LongUnicode => {
                let code = u32::from_str_radix(&slice[2..], 16)
                    .map_err(|err| SyntaxError::malformed(kind, err.to_string()))?;
                let c = char::from_u32(code).ok_or_else(|| {
                    SyntaxError::malformed(kind, format!("invalid Unicode code point {slice}"))
                })?;
                text.push(c);
            }
            Piece::Simple => text.push(match &slice[1..] {
                "a" => '\x07',
                "b" => '\x08',
                "f" => '\x0c',
                "n" => '\n',
                "r" => '\r',
                "t" => '\t',
                "v" => '\x0b',
                other => other.chars().next().unwrap_or('\\'),
            }),
        }
    }

    if triple && quote_run > 0 {
        return Err(SyntaxError::malformed(kind, format!("unescaped {quote} before closing delimiter")));
    }
    Ok(text)
}

/// Push the character named by an octal (`\NNN`) or hex (`\xNN`) escape.
fn push_ascii(text: &mut String, kind: &'static str, slice: &str, radix: u32) -> Result<(), SyntaxError> {
    let digits = if radix == 16 { &slice[2..] } else { &slice[1..] };
    let code = u32::from_str_radix(digits, radix)
        .map_err(|err| SyntaxError::malformed(kind, err.to_string()))?;
    match u8::try_from(code) {
        Ok(byte) if byte.is_ascii() => {
            text.push(char::from(byte));
            Ok(())
        }
        _ => Err(SyntaxError::malformed(
            kind,
            format!("non-ASCII escape {slice}; use a \\u escape for non-ASCII characters"),
        )),
    }
}

/// Render `text` as a quoted literal that [`unquote`] decodes back to `text`.
pub fn quote(text: &str, bytes: bool, quote: char, ascii_only: bool) -> String {
    let mut out = String::with_capacity(text.len() + 3);
    if bytes {
        out.push('b');
    }
    out.push(quote);
    for c in text.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c == quote => {
                out.push('\\');
                out.push(c);
            }
            c if c.is_ascii_control() => {
                let _ = write!(out, "\\x{:02x}", u32::from(c));
            }
            c if ascii_only && !c.is_ascii() => {
                let code = u32::from(c);
                let _ = if code <= 0xFFFF {
                    write!(out, "\\u{code:04x}")
                } else {
                    write!(out, "\\U{code:08x}")
                };
            }
            c => out.push(c),
        }
    }
    out.push(quote);
    out
}
