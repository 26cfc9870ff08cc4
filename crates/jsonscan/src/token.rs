use alloc::vec::Vec;
use core::{fmt, hash, ops::Deref};

use bstr::BStr;

/// The kind of the most recently read token.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum TokenKind {
    /// Nothing has been read yet.
    #[default]
    None,
    /// `{`
    StartObject,
    /// `}`
    EndObject,
    /// `[`
    StartArray,
    /// `]`
    EndArray,
    /// An object key, including the `:` that follows it.
    PropertyName,
    /// A string, number or literal.
    Value,
}

impl TokenKind {
    /// Whether this token delimits document shape.
    #[must_use]
    pub fn is_structural(self) -> bool {
        !matches!(self, TokenKind::None | TokenKind::Value)
    }
}

/// The kind of value the current token carries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum ValueKind {
    /// No token has been read.
    #[default]
    Unknown,
    /// Reported with `StartObject` and `EndObject`.
    Object,
    /// Reported with `StartArray` and `EndArray`.
    Array,
    /// A string value or a property name.
    String,
    /// A number. Its bytes are not converted.
    Number,
    /// `true`
    True,
    /// `false`
    False,
    /// `null`
    Null,
}

/// One of the three fixed JSON literals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Literal {
    /// `true`
    True,
    /// `false`
    False,
    /// `null`
    Null,
}

impl Literal {
    /// Selects a literal from its first byte.
    #[must_use]
    pub fn from_marker(byte: u8) -> Option<Self> {
        match byte {
            b't' => Some(Literal::True),
            b'f' => Some(Literal::False),
            b'n' => Some(Literal::Null),
            _ => None,
        }
    }

    /// The canonical bytes of the literal.
    #[must_use]
    pub fn bytes(self) -> &'static [u8] {
        match self {
            Literal::True => b"true",
            Literal::False => b"false",
            Literal::Null => b"null",
        }
    }

    /// The value kind a token of this literal reports.
    #[must_use]
    pub fn value_kind(self) -> ValueKind {
        match self {
            Literal::True => ValueKind::True,
            Literal::False => ValueKind::False,
            Literal::Null => ValueKind::Null,
        }
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Literal::True => "true",
            Literal::False => "false",
            Literal::Null => "null",
        })
    }
}

/// The byte span of a token's value.
///
/// Spans are zero-copy views into the input unless the value crossed a
/// segment boundary, in which case its bytes were copied into an owned
/// buffer. Equality and hashing only look at the bytes.
#[derive(Clone)]
pub enum Capture<'src> {
    /// A view into the input.
    Borrowed(&'src [u8]),
    /// Bytes joined from several segments.
    Owned(Vec<u8>),
}

impl Default for Capture<'_> {
    fn default() -> Self {
        Capture::Borrowed(&[])
    }
}

impl Capture<'_> {
    /// The raw bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            Capture::Borrowed(b) => b,
            Capture::Owned(b) => b,
        }
    }

    /// The raw bytes as a byte string, for display and searching.
    #[must_use]
    pub fn as_bstr(&self) -> &BStr {
        BStr::new(self.as_bytes())
    }

    /// Whether the span points into the input.
    #[must_use]
    pub fn is_borrowed(&self) -> bool {
        matches!(self, Capture::Borrowed(_))
    }

    /// Copies a borrowed span, or returns the owned buffer.
    #[must_use]
    pub fn into_owned(self) -> Vec<u8> {
        match self {
            Capture::Borrowed(b) => b.to_vec(),
            Capture::Owned(b) => b,
        }
    }
}

impl Deref for Capture<'_> {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl AsRef<[u8]> for Capture<'_> {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl PartialEq for Capture<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl Eq for Capture<'_> {}

impl PartialEq<[u8]> for Capture<'_> {
    fn eq(&self, other: &[u8]) -> bool {
        self.as_bytes() == other
    }
}

impl<const N: usize> PartialEq<&[u8; N]> for Capture<'_> {
    fn eq(&self, other: &&[u8; N]) -> bool {
        self.as_bytes() == other.as_slice()
    }
}

impl hash::Hash for Capture<'_> {
    fn hash<H: hash::Hasher>(&self, state: &mut H) {
        self.as_bytes().hash(state);
    }
}

impl fmt::Debug for Capture<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Capture::Borrowed(b) => f.debug_tuple("Borrowed").field(&BStr::new(b)).finish(),
            Capture::Owned(b) => f.debug_tuple("Owned").field(&BStr::new(b)).finish(),
        }
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Capture<'_> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self.as_bstr())
    }
}

/// An owned snapshot of one token, yielded by the reader's iterator.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Token<'src> {
    /// Token kind.
    pub kind: TokenKind,
    /// Value kind.
    pub value_kind: ValueKind,
    /// Raw value bytes; empty for structural tokens other than property names.
    pub value: Capture<'src>,
    /// Logical offset of the token's first byte.
    pub start: usize,
    /// Nesting depth after the token was read.
    pub depth: usize,
}
