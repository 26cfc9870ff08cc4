//! Byte cursors and the lexical scanners built on them.
//!
//! A [`Cursor`] is the reader's only view of its input. Two implementations
//! exist:
//!
//! - [`SliceCursor`] indexes directly into one contiguous buffer. Every span
//!   it produces is borrowed.
//! - [`SegmentCursor`] walks an ordered list of disjoint segments. Each
//!   scanner first tries to finish inside the current segment (the fast
//!   path); only when a token runs off the end of a segment does it fall
//!   back to a slow path that continues segment by segment and, for spans,
//!   copies the bytes into the caller's scratch buffer.
//!
//! Both run the same byte-level rules, which live in this module: the
//! backslash-parity search for unescaped delimiters, the number byte
//! classes, and the number grammar check.
//!
//! Invariants
//! - Scanners either succeed and advance past what they matched, or fail and
//!   leave the cursor where it was.
//! - A `Capture::Owned` is only produced when a span is not contiguous in
//!   the input.

use alloc::vec::Vec;

use bstr::ByteSlice;

use crate::token::{Capture, Literal};

mod segmented;
mod slice;

pub use segmented::SegmentCursor;
pub use slice::SliceCursor;

/// A forward-only position in JSON input, with the lexical scanners the
/// reader needs.
///
/// Cursors are cheap to clone; the reader clones one to mark a token start
/// and to rewind when partial input runs out.
pub trait Cursor<'src>: Clone {
    /// Logical byte offset from the start of the input.
    fn position(&self) -> usize;

    /// The next byte, without consuming it.
    fn peek(&self) -> Option<u8>;

    /// Consumes `n` bytes, crossing segment boundaries as needed. `n` must
    /// not exceed what is left of the input.
    fn advance(&mut self, n: usize);

    /// The unread bytes of the current segment, or of the whole buffer for
    /// contiguous input. Empty only at the end of input.
    fn remaining(&self) -> &'src [u8];

    /// The bytes between `mark` (an earlier clone of this cursor) and the
    /// current position. Borrowed when contiguous, otherwise copied into
    /// `scratch`, which is taken.
    fn slice_since(&self, mark: &Self, scratch: &mut Vec<u8>) -> Capture<'src>;

    /// Skips JSON whitespace, returning the number of bytes skipped.
    fn skip_whitespace(&mut self) -> usize;

    /// Scans to the next `delimiter` not escaped by an odd run of
    /// backslashes, returning the bytes before it and consuming the
    /// delimiter. Returns `None` without moving when there is none, and
    /// always for a backslash delimiter.
    fn try_read_until(&mut self, delimiter: u8, scratch: &mut Vec<u8>) -> Option<Capture<'src>>;

    /// Consumes the longest run of number bytes. The flag reports whether
    /// the run stopped at the end of input rather than at another byte.
    fn scan_number(&mut self, scratch: &mut Vec<u8>) -> (Capture<'src>, bool);

    /// Matches `literal` exactly and consumes it. On failure the cursor does
    /// not move and the error carries the first mismatching byte, or `None`
    /// if the input ended first.
    fn match_literal(&mut self, literal: Literal) -> Result<(), Option<u8>>;

    /// 1-based line and column of a logical offset at or before the current
    /// position.
    fn line_column(&self, position: usize) -> (usize, usize);

    /// Whether all input has been consumed.
    fn is_at_end(&self) -> bool {
        self.peek().is_none()
    }
}

#[inline]
pub(crate) fn is_whitespace(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\n' | b'\r')
}

/// Bytes that may follow a number.
#[inline]
pub(crate) fn is_delimiter(byte: u8) -> bool {
    is_whitespace(byte) || matches!(byte, b',' | b'}' | b']')
}

#[inline]
pub(crate) fn is_number_byte(byte: u8) -> bool {
    matches!(byte, b'0'..=b'9' | b'-' | b'+' | b'.' | b'e' | b'E')
}

#[inline]
pub(crate) fn whitespace_prefix(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|&&b| is_whitespace(b)).count()
}

#[inline]
pub(crate) fn number_prefix(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|&&b| is_number_byte(b)).count()
}

/// Outcome of searching one chunk for an unescaped delimiter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Search {
    /// Index of the terminating delimiter within the chunk.
    Found(usize),
    /// No terminator; the backslash run the chunk ends with, to carry into
    /// the next chunk.
    Pending(usize),
}

/// Length of the backslash run at the end of `bytes`. When `bytes` is all
/// backslashes the run continues into the previous chunk, whose trailing
/// run is `carry`.
#[inline]
fn backslash_run(bytes: &[u8], carry: usize) -> usize {
    let run = bytes.iter().rev().take_while(|&&b| b == b'\\').count();
    if run == bytes.len() { run + carry } else { run }
}

/// Finds the first `delimiter` in `chunk` preceded by an even number of
/// backslashes. An odd run means the delimiter itself is escaped; an even
/// run is made of escaped backslashes, so `\\"` terminates while `\"` does
/// not. A backslash can only escape, so it is never found as a delimiter.
pub(crate) fn search_unescaped(chunk: &[u8], delimiter: u8, carry: usize) -> Search {
    if delimiter == b'\\' {
        return Search::Pending(0);
    }
    let mut from = 0;
    while let Some(found) = chunk[from..].find_byte(delimiter) {
        let at = from + found;
        if backslash_run(&chunk[..at], carry) % 2 == 0 {
            return Search::Found(at);
        }
        from = at + 1;
    }
    Search::Pending(backslash_run(chunk, carry))
}

/// Index of the first `delimiter` in `haystack` that is not escaped by an
/// odd run of backslashes. Always `None` for a backslash delimiter.
///
/// ```rust
/// use jsonscan::scanner::find_unescaped;
///
/// assert_eq!(find_unescaped(br#"a\"b" tail"#, b'"'), Some(4));
/// assert_eq!(find_unescaped(br#"a\\" tail"#, b'"'), Some(3));
/// assert_eq!(find_unescaped(br#"a\" tail"#, b'"'), None);
/// assert_eq!(find_unescaped(br"a\b", b'\\'), None);
/// ```
#[must_use]
pub fn find_unescaped(haystack: &[u8], delimiter: u8) -> Option<usize> {
    match search_unescaped(haystack, delimiter, 0) {
        Search::Found(at) => Some(at),
        Search::Pending(_) => None,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum NumberError {
    /// A valid prefix of a number that needs more bytes.
    Truncated,
    Invalid,
}

/// Checks `bytes` against `-?(0|[1-9][0-9]*)(\.[0-9]+)?([eE][+-]?[0-9]+)?`.
pub(crate) fn validate_number(bytes: &[u8]) -> Result<(), NumberError> {
    fn digits(bytes: &[u8], at: usize) -> usize {
        bytes[at..].iter().take_while(|b| b.is_ascii_digit()).count()
    }

    let len = bytes.len();
    let mut at = usize::from(bytes.first() == Some(&b'-'));
    match bytes.get(at) {
        None => return Err(NumberError::Truncated),
        Some(b'0') => at += 1,
        Some(b'1'..=b'9') => at += digits(bytes, at),
        Some(_) => return Err(NumberError::Invalid),
    }
    if bytes.get(at) == Some(&b'.') {
        at += 1;
        let n = digits(bytes, at);
        if n == 0 {
            return Err(if at == len { NumberError::Truncated } else { NumberError::Invalid });
        }
        at += n;
    }
    if matches!(bytes.get(at), Some(b'e' | b'E')) {
        at += 1;
        if matches!(bytes.get(at), Some(b'+' | b'-')) {
            at += 1;
        }
        let n = digits(bytes, at);
        if n == 0 {
            return Err(if at == len { NumberError::Truncated } else { NumberError::Invalid });
        }
        at += n;
    }
    if at == len { Ok(()) } else { Err(NumberError::Invalid) }
}

/// Line and column after consuming `chunks` in order.
pub(crate) fn line_column<'a>(chunks: impl IntoIterator<Item = &'a [u8]>) -> (usize, usize) {
    let (mut line, mut column) = (1, 1);
    for chunk in chunks {
        line += chunk.iter().filter(|&&b| b == b'\n').count();
        match chunk.rfind_byte(b'\n') {
            Some(newline) => column = chunk.len() - newline,
            None => column += chunk.len(),
        }
    }
    (line, column)
}
