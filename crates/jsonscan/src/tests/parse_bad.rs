use alloc::{string::ToString, vec::Vec};

use rstest::rstest;

use super::{first_error, read_all};
use crate::{Container, ErrorKind, JsonReader, Literal, SyntaxError, TokenKind};

fn unexpected(found: u8, expected: &'static str) -> ErrorKind {
    SyntaxError::UnexpectedByte { found, expected }.into()
}

fn ended(expected: &'static str) -> ErrorKind {
    SyntaxError::UnexpectedEndOfInput(expected).into()
}

#[rstest]
#[case(b"[1,]", unexpected(b']', "a value"), 3)]
#[case(br#"{"a" 1}"#, unexpected(b'1', "':' after a property name"), 5)]
#[case(b"{1:2}", unexpected(b'1', "property name or '}'"), 1)]
#[case(b"[1 2]", unexpected(b'2', "',' or a closing bracket"), 3)]
#[case(br#"{"a":1,}"#, unexpected(b'}', "a property name"), 7)]
#[case(b"[1x]", unexpected(b'x', "a delimiter after the number"), 2)]
#[case(b"[1,,2]", unexpected(b',', "a value"), 3)]
#[case(b"[1}", SyntaxError::MismatchedCloser { found: b'}', open: Container::Array }.into(), 2)]
#[case(br#"{"a":1]"#, SyntaxError::MismatchedCloser { found: b']', open: Container::Object }.into(), 6)]
#[case(b"]", SyntaxError::Unbalanced(b']').into(), 0)]
#[case(br#"{"a":1}}"#, SyntaxError::TrailingContent.into(), 7)]
#[case(b"1 2", SyntaxError::TrailingContent.into(), 2)]
#[case(b"[01]", SyntaxError::InvalidNumber.into(), 3)]
#[case(b"[-]", SyntaxError::InvalidNumber.into(), 2)]
#[case(b"[1.e3]", SyntaxError::InvalidNumber.into(), 5)]
#[case(b"tru3", ErrorKind::MalformedLiteral { expected: Literal::True, found: Some(b'3') }, 0)]
#[case(b"[nul]", ErrorKind::MalformedLiteral { expected: Literal::Null, found: Some(b']') }, 1)]
#[case(b"/", ErrorKind::Unsupported, 0)]
#[case(b"[1, // no\n2]", ErrorKind::Unsupported, 4)]
#[case(b"'a'", unexpected(b'\'', "a value"), 0)]
fn invalid_documents(#[case] input: &[u8], #[case] kind: ErrorKind, #[case] position: usize) {
    let error = first_error(input);
    assert_eq!(error.kind(), &kind, "{error}");
    assert_eq!(error.position(), position, "{error}");
}

#[rstest]
#[case(b"[", ended("a value or ']'"), 1)]
#[case(b"{", ended("property name or '}'"), 1)]
#[case(br#"{"a":"#, ended("a value"), 5)]
#[case(b"[1,", ended("a value"), 3)]
#[case(br#"{"a":1,"#, ended("a property name"), 7)]
#[case(br#"{"a""#, ended("':' after a property name"), 4)]
#[case(br#"{"a":1 "#, ended("',' or '}'"), 7)]
#[case(br#"{"a":1"#, ErrorKind::TruncatedNumber, 6)]
#[case(b"[[]", ended("',' or ']'"), 3)]
#[case(br#""abc"#, ErrorKind::UnterminatedString, 1)]
#[case(br#"["a\"]"#, ErrorKind::UnterminatedString, 2)]
#[case(b"-", ErrorKind::TruncatedNumber, 1)]
#[case(b"[12", ErrorKind::TruncatedNumber, 3)]
#[case(b"[1.", ErrorKind::TruncatedNumber, 3)]
#[case(b"nul", ErrorKind::MalformedLiteral { expected: Literal::Null, found: None }, 0)]
fn truncated_documents(#[case] input: &[u8], #[case] kind: ErrorKind, #[case] position: usize) {
    let error = first_error(input);
    assert_eq!(error.kind(), &kind, "{error}");
    assert_eq!(error.position(), position, "{error}");
}

#[test]
fn error_reports_line_and_column() {
    let error = first_error(b"{\n  \"a\": tru\n}");
    assert_eq!(error.position(), 9);
    assert_eq!((error.line(), error.column()), (2, 8));
    assert_eq!(error.to_string(), "malformed literal, expected `true` at 2:8");
}

#[test]
fn segmented_errors_match_contiguous() {
    let segments: [&[u8]; 3] = [b"{\n \"k\"", b": [1,\n", b" 2 }"];
    let whole = segments.concat();
    let contiguous = first_error(&whole);
    let segmented = super::read_all_segments(&segments).unwrap_err();
    assert_eq!(segmented, contiguous);
    assert_eq!((segmented.line(), segmented.column()), (3, 4));
}

#[test]
fn error_is_sticky() {
    let mut reader = JsonReader::new(b"[1, ?]");
    assert!(reader.read().unwrap());
    assert!(reader.read().unwrap());
    let error = reader.read().unwrap_err();
    assert_eq!(reader.read().unwrap_err(), error);
    assert_eq!(reader.skip().unwrap_err(), error);
    assert_eq!(reader.token_kind(), TokenKind::Value);
}

#[test]
fn iterator_stops_after_error() {
    let results: Vec<_> = JsonReader::new(b"[true, x, false]").into_iter().collect();
    assert_eq!(results.len(), 3);
    assert!(results[0].is_ok());
    assert!(results[1].is_ok());
    assert!(results[2].is_err());

    let mut reader = JsonReader::new(b"[true, x, false]");
    let error = reader.tokens().find_map(Result::err).unwrap();
    assert_eq!(reader.tokens().next(), None);
    assert_eq!(reader.read().unwrap_err(), error);
}

#[test]
fn strict_input_rejects_unclosed_containers() {
    let error = read_all(br#"{"a": [1, 2"#).unwrap_err();
    assert_eq!(error.kind(), &ErrorKind::TruncatedNumber);
    let error = read_all(br#"{"a": [1, 2]"#).unwrap_err();
    assert_eq!(error.kind(), &ended("',' or '}'"));
    assert_eq!(error.position(), 12);
}
