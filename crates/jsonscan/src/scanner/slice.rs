use alloc::vec::Vec;

use super::{Cursor, Search, line_column, number_prefix, search_unescaped, whitespace_prefix};
use crate::token::{Capture, Literal};

/// Cursor over one contiguous buffer.
#[derive(Debug, Clone, Copy)]
pub struct SliceCursor<'src> {
    bytes: &'src [u8],
    pos: usize,
}

impl<'src> SliceCursor<'src> {
    /// A cursor at the start of `bytes`.
    #[must_use]
    pub fn new(bytes: &'src [u8]) -> Self {
        Self { bytes, pos: 0 }
    }

    /// The whole input.
    #[must_use]
    pub fn as_bytes(&self) -> &'src [u8] {
        self.bytes
    }
}

impl<'src> Cursor<'src> for SliceCursor<'src> {
    #[inline]
    fn position(&self) -> usize {
        self.pos
    }

    #[inline]
    fn peek(&self) -> Option<u8> {
        self.bytes.get(self.pos).copied()
    }

    #[inline]
    fn advance(&mut self, n: usize) {
        debug_assert!(self.pos + n <= self.bytes.len(), "advanced past end of input");
        self.pos = (self.pos + n).min(self.bytes.len());
    }

    #[inline]
    fn remaining(&self) -> &'src [u8] {
        &self.bytes[self.pos..]
    }

    #[inline]
    fn slice_since(&self, mark: &Self, _scratch: &mut Vec<u8>) -> Capture<'src> {
        Capture::Borrowed(&self.bytes[mark.pos..self.pos])
    }

    #[inline]
    fn skip_whitespace(&mut self) -> usize {
        let n = whitespace_prefix(self.remaining());
        self.pos += n;
        n
    }

    fn try_read_until(&mut self, delimiter: u8, _scratch: &mut Vec<u8>) -> Option<Capture<'src>> {
        let rest = self.remaining();
        match search_unescaped(rest, delimiter, 0) {
            Search::Found(at) => {
                self.pos += at + 1;
                Some(Capture::Borrowed(&rest[..at]))
            }
            Search::Pending(_) => None,
        }
    }

    fn scan_number(&mut self, _scratch: &mut Vec<u8>) -> (Capture<'src>, bool) {
        let rest = self.remaining();
        let n = number_prefix(rest);
        self.pos += n;
        (Capture::Borrowed(&rest[..n]), n == rest.len())
    }

    fn match_literal(&mut self, literal: Literal) -> Result<(), Option<u8>> {
        let expected = literal.bytes();
        let rest = self.remaining();
        for (i, &want) in expected.iter().enumerate() {
            match rest.get(i) {
                Some(&got) if got == want => {}
                other => return Err(other.copied()),
            }
        }
        self.pos += expected.len();
        Ok(())
    }

    fn line_column(&self, position: usize) -> (usize, usize) {
        line_column([&self.bytes[..position.min(self.bytes.len())]])
    }
}
