use super::{read_all, read_all_segments};
use crate::chunk_utils::{produce_prefixes, produce_segments, split_at_offsets};

#[test]
fn produce_helpers_example() {
    let payload = br#"["foo","bar"]"#;
    let segments = produce_segments(payload, 5);
    let expected: [&[u8]; 5] = [br#"["f"#, br#"oo""#, br#","b"#, br#"ar""#, b"]"];
    assert_eq!(segments, expected);
    let prefixes = produce_prefixes(payload, 5);
    assert_eq!(prefixes.len(), 5);
    assert_eq!(prefixes[1], br#"["foo""#);
    assert_eq!(prefixes.last(), Some(&&payload[..]));
}

#[test]
fn split_at_offsets_sorts_and_keeps_empty_segments() {
    let segments = split_at_offsets(b"abcdef", &[4, 1, 4, 13]);
    let expected: [&[u8]; 5] = [b"a", b"", b"bcd", b"", b"ef"];
    assert_eq!(segments, expected);
    let empty: [&[u8]; 1] = [b""];
    assert_eq!(split_at_offsets(b"", &[3]), empty);
}

#[test]
fn cuts_inside_multibyte_code_points() {
    let payload = "[\"f😊o\",\"b🚀r\"]".as_bytes();
    let expected = read_all(payload).unwrap();
    for parts in 1..=payload.len() {
        let segments = produce_segments(payload, parts);
        assert_eq!(segments.concat(), payload);
        assert_eq!(read_all_segments(&segments).unwrap(), expected, "{parts} parts");
    }
}
