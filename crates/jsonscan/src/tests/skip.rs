use alloc::vec::Vec;

use crate::{ErrorKind, JsonReader, ReaderOptions, SyntaxError, TokenKind, ValueKind};

const DOC: &[u8] = br#"{"a":{"b":[1,2,3]},"c":1}"#;

#[test]
fn skip_from_start_object_hides_the_subtree() {
    let mut reader = JsonReader::new(DOC);
    reader.read().unwrap();
    reader.read().unwrap();
    reader.read().unwrap();
    assert_eq!(reader.token_kind(), TokenKind::StartObject);
    assert_eq!(reader.depth(), 2);

    reader.skip().unwrap();
    assert_eq!(reader.token_kind(), TokenKind::EndObject);
    assert_eq!(reader.depth(), 1);

    assert!(reader.read().unwrap());
    assert_eq!(reader.token_kind(), TokenKind::PropertyName);
    assert_eq!(reader.value_bytes(), b"c");
}

#[test]
fn skip_between_token_iteration_leaves_only_the_tail() {
    let mut reader = JsonReader::new(DOC);
    let head: Vec<TokenKind> = reader
        .tokens()
        .take(3)
        .map(|token| token.unwrap().kind)
        .collect();
    assert_eq!(head, [TokenKind::StartObject, TokenKind::PropertyName, TokenKind::StartObject]);

    reader.skip().unwrap();
    let tail: Vec<(TokenKind, usize)> = reader
        .tokens()
        .map(|token| token.map(|token| (token.kind, token.depth)).unwrap())
        .collect();
    assert_eq!(
        tail,
        [(TokenKind::PropertyName, 1), (TokenKind::Value, 1), (TokenKind::EndObject, 0)]
    );
}

#[test]
fn skip_from_property_name_reads_the_value_first() {
    let mut reader = JsonReader::new(DOC);
    reader.read().unwrap();
    reader.read().unwrap();
    assert_eq!(reader.token_kind(), TokenKind::PropertyName);
    reader.skip().unwrap();
    assert_eq!(reader.token_kind(), TokenKind::EndObject);
    assert_eq!(reader.depth(), 1);
    assert_eq!(reader.position(), 18);
}

#[test]
fn skip_on_a_scalar_is_a_no_op() {
    let mut reader = JsonReader::new(br#"[1, {"x": []}]"#);
    reader.read().unwrap();
    reader.read().unwrap();
    let position = reader.position();
    reader.skip().unwrap();
    assert_eq!(reader.position(), position);
    assert_eq!(reader.value_kind(), ValueKind::Number);
}

#[test]
fn skip_to_the_end_of_the_root() {
    let mut reader = JsonReader::new(DOC);
    reader.read().unwrap();
    reader.skip().unwrap();
    assert_eq!(reader.depth(), 0);
    assert_eq!(reader.position(), DOC.len());
    assert!(!reader.read().unwrap());
}

#[test]
fn skip_an_empty_container() {
    let mut reader = JsonReader::new(br#"[[], 1]"#);
    reader.read().unwrap();
    reader.read().unwrap();
    reader.skip().unwrap();
    assert_eq!(reader.token_kind(), TokenKind::EndArray);
    assert_eq!(reader.depth(), 1);
}

#[test]
fn skip_propagates_errors_inside_the_subtree() {
    let mut reader = JsonReader::new(br#"[{"a": tru}]"#);
    reader.read().unwrap();
    reader.read().unwrap();
    let error = reader.skip().unwrap_err();
    assert!(matches!(error.kind(), ErrorKind::MalformedLiteral { .. }));
}

#[test]
fn skip_past_the_end_of_strict_input() {
    let mut reader = JsonReader::new(br#"[{"a": [1, 2"#);
    reader.read().unwrap();
    reader.read().unwrap();
    let error = reader.skip().unwrap_err();
    assert_eq!(error.kind(), &ErrorKind::TruncatedNumber);
}

#[test]
fn skip_past_the_end_of_partial_input() {
    let options = ReaderOptions {
        allow_partial_input: true,
        ..ReaderOptions::default()
    };
    let mut reader = JsonReader::with_options(br#"[{"a": [1, 2"#, options).unwrap();
    reader.read().unwrap();
    reader.read().unwrap();
    let error = reader.skip().unwrap_err();
    assert_eq!(
        error.kind(),
        &ErrorKind::Syntax(SyntaxError::UnexpectedEndOfInput("a closing bracket"))
    );
}

#[test]
fn try_skip_restores_the_reader_on_partial_input() {
    let options = ReaderOptions {
        allow_partial_input: true,
        ..ReaderOptions::default()
    };
    let input = br#"{"a": {"b": [1, 2"#;
    let mut reader = JsonReader::with_options(input, options).unwrap();
    reader.read().unwrap();
    reader.read().unwrap();
    let (position, start) = (reader.position(), reader.token_start());
    assert_eq!(reader.token_kind(), TokenKind::PropertyName);

    assert!(!reader.try_skip().unwrap());
    assert_eq!(reader.token_kind(), TokenKind::PropertyName);
    assert_eq!(reader.value_bytes(), b"a");
    assert_eq!(reader.depth(), 1);
    assert_eq!(reader.position(), position);
    assert_eq!(reader.token_start(), start);

    // The reader is still usable afterwards.
    assert!(reader.read().unwrap());
    assert_eq!(reader.token_kind(), TokenKind::StartObject);
}

#[test]
fn try_skip_completes_when_the_subtree_is_present() {
    let options = ReaderOptions {
        allow_partial_input: true,
        ..ReaderOptions::default()
    };
    let mut reader = JsonReader::with_options(br#"{"a": {"b": [1, 2]}, "c"#, options).unwrap();
    reader.read().unwrap();
    reader.read().unwrap();
    assert!(reader.try_skip().unwrap());
    assert_eq!(reader.token_kind(), TokenKind::EndObject);
    assert_eq!(reader.depth(), 1);
    assert!(!reader.read().unwrap());
}

#[test]
fn try_skip_in_strict_mode_behaves_like_skip() {
    let mut reader = JsonReader::new(DOC);
    reader.read().unwrap();
    reader.read().unwrap();
    assert!(reader.try_skip().unwrap());
    assert_eq!(reader.depth(), 1);
}
