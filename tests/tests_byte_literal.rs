//! Bytes literal tests: decoding, spans and the UTF-8 value contract.

use std::sync::Arc;

use lark::syntax::escape;
use lark::{ByteLiteral, FileLocations, Node, NodeKind, SyntaxError, TextRange, TextSize};
use rstest::rstest;

fn at(offset: u32) -> TextSize {
    TextSize::new(offset)
}

fn locs(text: &str) -> Arc<FileLocations> {
    Arc::new(FileLocations::new("bytes.lark", text))
}

#[test]
fn test_abc_at_ten() {
    let locations = locs("x = 1\nz = b\"abc\"\n");
    let node = ByteLiteral::new(locations, at(10), "abc", at(15));

    assert_eq!(node.value(), &[0x61, 0x62, 0x63]);
    assert_eq!(node.span(), TextRange::new(at(10), at(15)));
    assert_eq!(node.kind(), NodeKind::BYTE_LITERAL);

    let location = node.location().unwrap();
    assert_eq!(location.file(), "bytes.lark");
    assert_eq!((location.line(), location.column()), (2, 5));
}

#[test]
fn test_empty_span() {
    let node = ByteLiteral::new(locs("b''"), at(3), "", at(3));
    assert!(node.span().is_empty());
    assert!(node.value().is_empty());
    assert!(node.location().is_ok());
}

#[test]
#[should_panic(expected = "span is inverted")]
fn test_inverted_span_panics() {
    let _ = ByteLiteral::new(locs("b'x'"), at(4), "x", at(0));
}

// ============================================================================
// Decoding from source spelling
// ============================================================================

#[rstest]
#[case(r#"b"abc""#, b"abc".as_slice())]
#[case(r#"b'\x41\102'"#, b"AB".as_slice())]
#[case(r#"b"caf\u00e9""#, "café".as_bytes())]
#[case(r#"b"café""#, "café".as_bytes())]
#[case(r#"rb"\n""#, br"\n".as_slice())]
#[case("b\"\"\"a\nb\"\"\"", b"a\nb".as_slice())]
fn test_parse(#[case] source: &str, #[case] expected: &[u8]) {
    let end = TextSize::of(source);
    let node = ByteLiteral::parse(locs(source), at(0), source, end).unwrap();
    assert_eq!(node.value(), expected);
    assert_eq!(node.source_text(), Some(source));
}

#[test]
fn test_value_length_is_independent_of_span() {
    let source = r#"b"\x41\x42""#;
    let node = ByteLiteral::parse(locs(source), at(0), source, TextSize::of(source)).unwrap();
    assert_eq!(node.value().len(), 2);
    assert_eq!(u32::from(node.span().len()), 11);
}

#[rstest]
#[case(r#""abc""#)]
#[case(r#"b"\xff""#)]
#[case(r#"b"\400""#)]
#[case(r#"b"abc"#)]
#[case(r#"b"\q""#)]
#[case(r#"rb"a\""#)]
#[case(r#"br"\""#)]
fn test_parse_rejects(#[case] source: &str) {
    let err = ByteLiteral::parse(locs(source), at(0), source, TextSize::of(source)).unwrap_err();
    assert!(matches!(err, SyntaxError::MalformedLiteral { .. }), "{source}: {err}");
    assert!(!err.is_internal());
}

#[test]
fn test_identical_source_gives_identical_bytes() {
    let source = "b\"\\u00ff\u{1F600}\"";
    let first = ByteLiteral::parse(locs(source), at(0), source, TextSize::of(source)).unwrap();
    let second = ByteLiteral::parse(locs(source), at(0), source, TextSize::of(source)).unwrap();
    assert_eq!(first.value(), second.value());
    assert_eq!(first.value(), "ÿ😀".as_bytes());
}

#[test]
fn test_quote_round_trips_through_unquote() {
    let text = "tab\there \"quoted\" é";
    let quoted = escape::quote(text, true, '"', true);
    let unquoted = escape::unquote(&quoted).unwrap();
    assert!(unquoted.bytes);
    assert_eq!(unquoted.text, text);
}
