//! A forward-only JSON tokenizer over raw UTF-8 bytes.
//!
//! `jsonscan` turns a byte buffer into a stream of structural and value
//! tokens without building a document tree, without recursion, and without
//! copying input bytes. The input is either one contiguous slice or a
//! sequence of disjoint segments; both go through the same grammar and
//! produce the same tokens. Only a value that straddles a segment boundary
//! is materialized into an owned buffer.
//!
//! # Examples
//!
//! ```rust
//! use jsonscan::{JsonReader, TokenKind, ValueKind};
//!
//! let mut reader = JsonReader::new(br#"{"key": [null, true, 3.14]}"#);
//! while reader.read().unwrap() {
//!     if reader.token_kind() == TokenKind::Value {
//!         println!("{:?} {:?}", reader.value_kind(), reader.value());
//!     }
//! }
//! assert_eq!(reader.depth(), 0);
//! ```
//!
//! Segmented input behaves identically:
//!
//! ```rust
//! use jsonscan::JsonReader;
//!
//! let segments: [&[u8]; 3] = [b"[\"spl", b"it\", 1", b"2]"];
//! let tokens: Vec<_> = JsonReader::from_segments(&segments)
//!     .into_iter()
//!     .collect::<Result<_, _>>()
//!     .unwrap();
//! assert_eq!(tokens[1].value.as_bytes(), b"split");
//! assert_eq!(tokens[2].value.as_bytes(), b"12");
//! ```

#![no_std]
extern crate alloc;

#[cfg(test)]
extern crate std;

mod depth;
mod error;
mod options;
mod reader;
pub mod scanner;
mod token;

#[cfg(any(test, feature = "fuzzing"))]
#[doc(hidden)]
pub mod chunk_utils;

#[cfg(test)]
mod tests;

pub use depth::{Container, FAST_DEPTH};
pub use error::{ErrorKind, ReaderError, SyntaxError};
pub use options::{DEFAULT_MAX_DEPTH, ReaderOptions};
pub use reader::{IntoTokens, JsonReader, ReaderState, SegmentReader, SliceReader, Tokens};
pub use scanner::{Cursor, SegmentCursor, SliceCursor};
pub use token::{Capture, Literal, Token, TokenKind, ValueKind};
