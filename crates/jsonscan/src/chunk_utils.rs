//! Helpers for cutting a document into segments, shared by the tests and
//! the fuzz target.

use alloc::vec::Vec;

/// Splits `payload` into `parts` segments of roughly equal size. Cuts may
/// fall anywhere, including inside multi-byte UTF-8 sequences.
///
/// # Panics
///
/// Panics if `parts` is zero.
#[must_use]
pub fn produce_segments(payload: &[u8], parts: usize) -> Vec<&[u8]> {
    assert!(parts > 0);
    let size = payload.len().div_ceil(parts).max(1);
    payload.chunks(size).collect()
}

/// Splits `payload` at the offsets `cuts`, taken modulo the payload length
/// and sorted. Repeated offsets yield empty segments.
#[must_use]
pub fn split_at_offsets<'a>(payload: &'a [u8], cuts: &[usize]) -> Vec<&'a [u8]> {
    if payload.is_empty() {
        return Vec::from([payload]);
    }
    let mut offsets: Vec<usize> = cuts.iter().map(|cut| cut % payload.len()).collect();
    offsets.sort_unstable();
    let mut segments = Vec::with_capacity(offsets.len() + 1);
    let mut start = 0;
    for end in offsets {
        segments.push(&payload[start..end]);
        start = end;
    }
    segments.push(&payload[start..]);
    segments
}

/// Every prefix of `payload` ending on a segment boundary of
/// [`produce_segments`].
///
/// # Panics
///
/// Panics if `parts` is zero.
#[must_use]
pub fn produce_prefixes(payload: &[u8], parts: usize) -> Vec<&[u8]> {
    let mut end = 0;
    produce_segments(payload, parts)
        .into_iter()
        .map(|segment| {
            end += segment.len();
            &payload[..end]
        })
        .collect()
}
