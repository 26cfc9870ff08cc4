use alloc::vec::Vec;

use crate::{JsonReader, ReaderError, ReaderOptions, Token, TokenKind, ValueKind};

mod chunk_helpers;
mod parse_bad;
mod skip;

/// Reads `input` to the end over a contiguous buffer.
pub(crate) fn read_all(input: &[u8]) -> Result<Vec<Token<'_>>, ReaderError> {
    JsonReader::new(input).into_iter().collect()
}

/// Reads `segments` to the end.
pub(crate) fn read_all_segments<'a>(segments: &'a [&'a [u8]]) -> Result<Vec<Token<'a>>, ReaderError> {
    JsonReader::from_segments(segments).into_iter().collect()
}

/// Reads `input` with `options`, panicking on a configuration error.
pub(crate) fn read_all_with(
    input: &[u8],
    options: ReaderOptions,
) -> Result<Vec<Token<'_>>, ReaderError> {
    JsonReader::with_options(input, options).unwrap().into_iter().collect()
}

/// The first error reading `input`.
pub(crate) fn first_error(input: &[u8]) -> ReaderError {
    read_all(input).unwrap_err()
}

/// Compact token form for assertions.
pub(crate) fn shape<'a>(tokens: &'a [Token<'_>]) -> Vec<(TokenKind, ValueKind, &'a [u8])> {
    tokens
        .iter()
        .map(|token| (token.kind, token.value_kind, token.value.as_bytes()))
        .collect()
}

/// One entry of [`shape`].
pub(crate) fn tok(kind: TokenKind, value_kind: ValueKind, value: &[u8]) -> (TokenKind, ValueKind, &[u8]) {
    (kind, value_kind, value)
}
