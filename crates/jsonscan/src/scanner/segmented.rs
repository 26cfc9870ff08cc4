use alloc::vec::Vec;
use core::mem;

use super::{Cursor, Search, line_column, number_prefix, search_unescaped, whitespace_prefix};
use crate::token::{Capture, Literal};

/// Cursor over an ordered list of disjoint segments, read as one logical
/// stream.
///
/// Empty segments are skipped, so unless the input is exhausted the cursor
/// always rests on a segment with at least one unread byte.
#[derive(Debug, Clone, Copy)]
pub struct SegmentCursor<'src> {
    segments: &'src [&'src [u8]],
    index: usize,
    offset: usize,
    position: usize,
}

impl<'src> SegmentCursor<'src> {
    /// A cursor at the start of the first segment.
    #[must_use]
    pub fn new(segments: &'src [&'src [u8]]) -> Self {
        let mut cursor = Self {
            segments,
            index: 0,
            offset: 0,
            position: 0,
        };
        cursor.settle();
        cursor
    }

    /// Index of the segment holding the next byte. Equal to the number of
    /// segments at the end of input.
    #[must_use]
    pub fn segment(&self) -> usize {
        self.index
    }

    /// Offset of the next byte within its segment.
    #[must_use]
    pub fn offset_in_segment(&self) -> usize {
        self.offset
    }

    /// Moves past exhausted and empty segments.
    fn settle(&mut self) {
        while let Some(segment) = self.segments.get(self.index) {
            if self.offset < segment.len() {
                break;
            }
            self.index += 1;
            self.offset = 0;
        }
    }

    fn read_until_slow(
        &mut self,
        delimiter: u8,
        mut carry: usize,
        scratch: &mut Vec<u8>,
    ) -> Option<Capture<'src>> {
        let mut ahead = *self;
        ahead.advance(ahead.remaining().len());
        loop {
            let chunk = ahead.remaining();
            if chunk.is_empty() {
                return None;
            }
            match search_unescaped(chunk, delimiter, carry) {
                Search::Found(at) => {
                    ahead.advance(at);
                    let span = ahead.slice_since(self, scratch);
                    ahead.advance(1);
                    *self = ahead;
                    return Some(span);
                }
                Search::Pending(run) => {
                    carry = run;
                    ahead.advance(chunk.len());
                }
            }
        }
    }

    fn scan_number_slow(&mut self, scratch: &mut Vec<u8>) -> (Capture<'src>, bool) {
        let mark = *self;
        loop {
            let chunk = self.remaining();
            if chunk.is_empty() {
                break;
            }
            let n = number_prefix(chunk);
            self.advance(n);
            if n < chunk.len() {
                break;
            }
        }
        (self.slice_since(&mark, scratch), self.is_at_end())
    }

    fn match_literal_slow(&mut self, expected: &[u8]) -> Result<(), Option<u8>> {
        let mut ahead = *self;
        for &want in expected {
            match ahead.peek() {
                Some(got) if got == want => ahead.advance(1),
                other => return Err(other),
            }
        }
        *self = ahead;
        Ok(())
    }
}

impl<'src> Cursor<'src> for SegmentCursor<'src> {
    #[inline]
    fn position(&self) -> usize {
        self.position
    }

    #[inline]
    fn peek(&self) -> Option<u8> {
        self.remaining().first().copied()
    }

    fn advance(&mut self, mut n: usize) {
        while n > 0 {
            let available = self.remaining().len();
            if available == 0 {
                debug_assert!(false, "advanced past end of input");
                return;
            }
            let step = n.min(available);
            self.offset += step;
            self.position += step;
            n -= step;
            self.settle();
        }
    }

    #[inline]
    fn remaining(&self) -> &'src [u8] {
        match self.segments.get(self.index) {
            Some(&segment) => &segment[self.offset..],
            None => &[],
        }
    }

    fn slice_since(&self, mark: &Self, scratch: &mut Vec<u8>) -> Capture<'src> {
        let len = self.position - mark.position;
        let first = mark.remaining();
        if len <= first.len() {
            return Capture::Borrowed(&first[..len]);
        }
        scratch.clear();
        scratch.reserve(len);
        let mut walker = *mark;
        while walker.position < self.position {
            let chunk = walker.remaining();
            let take = chunk.len().min(self.position - walker.position);
            scratch.extend_from_slice(&chunk[..take]);
            walker.advance(take);
        }
        Capture::Owned(mem::take(scratch))
    }

    fn skip_whitespace(&mut self) -> usize {
        let start = self.position;
        loop {
            let chunk = self.remaining();
            let n = whitespace_prefix(chunk);
            self.advance(n);
            if n == 0 || n < chunk.len() {
                break;
            }
        }
        self.position - start
    }

    fn try_read_until(&mut self, delimiter: u8, scratch: &mut Vec<u8>) -> Option<Capture<'src>> {
        let chunk = self.remaining();
        match search_unescaped(chunk, delimiter, 0) {
            Search::Found(at) => {
                self.advance(at + 1);
                Some(Capture::Borrowed(&chunk[..at]))
            }
            Search::Pending(carry) => self.read_until_slow(delimiter, carry, scratch),
        }
    }

    fn scan_number(&mut self, scratch: &mut Vec<u8>) -> (Capture<'src>, bool) {
        let chunk = self.remaining();
        let n = number_prefix(chunk);
        if n < chunk.len() {
            self.advance(n);
            return (Capture::Borrowed(&chunk[..n]), false);
        }
        self.scan_number_slow(scratch)
    }

    fn match_literal(&mut self, literal: Literal) -> Result<(), Option<u8>> {
        let expected = literal.bytes();
        let chunk = self.remaining();
        if chunk.len() < expected.len() {
            return self.match_literal_slow(expected);
        }
        match chunk.iter().zip(expected).position(|(got, want)| got != want) {
            None => {
                self.advance(expected.len());
                Ok(())
            }
            Some(i) => Err(Some(chunk[i])),
        }
    }

    fn line_column(&self, position: usize) -> (usize, usize) {
        let mut left = position;
        line_column(self.segments.iter().map_while(|&segment| {
            if left == 0 {
                return None;
            }
            let take = left.min(segment.len());
            left -= take;
            Some(&segment[..take])
        }))
    }
}
