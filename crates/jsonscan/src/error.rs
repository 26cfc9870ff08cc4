use thiserror::Error;

use crate::token::Literal;

/// An error raised while reading. Fatal to the current scan.
///
/// The reader is poisoned once it returns an error; further calls to
/// [`JsonReader::read`](crate::JsonReader::read) return the same error.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{kind} at {line}:{column}")]
pub struct ReaderError {
    pub(crate) kind: ErrorKind,
    pub(crate) position: usize,
    pub(crate) line: usize,
    pub(crate) column: usize,
}

impl ReaderError {
    /// What went wrong.
    #[must_use]
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    /// Logical byte offset at which the error was detected.
    #[must_use]
    pub fn position(&self) -> usize {
        self.position
    }

    /// 1-based line of [`position`](Self::position).
    #[must_use]
    pub fn line(&self) -> usize {
        self.line
    }

    /// 1-based byte column of [`position`](Self::position).
    #[must_use]
    pub fn column(&self) -> usize {
        self.column
    }
}

/// The category of a [`ReaderError`].
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The next significant byte is inconsistent with the grammar.
    #[error("syntax error: {0}")]
    Syntax(#[from] SyntaxError),
    /// A container open would exceed the configured maximum depth.
    #[error("maximum depth of {max_depth} exceeded")]
    DepthExceeded {
        /// The configured ceiling.
        max_depth: usize,
    },
    /// `true`, `false` or `null` did not match exactly.
    #[error("malformed literal, expected `{expected}`")]
    MalformedLiteral {
        /// The literal selected by the marker byte.
        expected: Literal,
        /// First mismatching byte, `None` when the input ended early.
        found: Option<u8>,
    },
    /// No unescaped closing quote before the end of input.
    #[error("unterminated string")]
    UnterminatedString,
    /// A number was cut short by the end of input.
    #[error("truncated number")]
    TruncatedNumber,
    /// `/` where a value was expected. Comments are not supported.
    #[error("comments are not supported")]
    Unsupported,
    /// Rejected reader configuration.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(&'static str),
}

impl ErrorKind {
    /// Whether this error was caused by the input ending, rather than by a
    /// byte that can never be valid. Partial-input readers turn these into a
    /// clean "no more tokens" result.
    pub(crate) fn is_end_of_input(&self) -> bool {
        matches!(
            self,
            ErrorKind::UnterminatedString
                | ErrorKind::TruncatedNumber
                | ErrorKind::MalformedLiteral { found: None, .. }
                | ErrorKind::Syntax(SyntaxError::UnexpectedEndOfInput(_))
        )
    }
}

/// Structural errors.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SyntaxError {
    /// A byte that is not valid in the current state.
    #[error("unexpected byte {:?}, expected {expected}", char::from(*.found))]
    UnexpectedByte {
        /// The offending byte.
        found: u8,
        /// What the grammar allows here.
        expected: &'static str,
    },
    /// A closer that does not match the innermost open container.
    #[error("mismatched '{}', innermost container is an {open}", char::from(*.found))]
    MismatchedCloser {
        /// The closer, `}` or `]`.
        found: u8,
        /// The innermost open container.
        open: crate::Container,
    },
    /// A closer with no open container.
    #[error("unbalanced '{}'", char::from(*.0))]
    Unbalanced(u8),
    /// Non-whitespace after the root value.
    #[error("trailing content after the root value")]
    TrailingContent,
    /// Number bytes that do not form a JSON number.
    #[error("invalid number")]
    InvalidNumber,
    /// The input ended where more was required.
    #[error("unexpected end of input, expected {0}")]
    UnexpectedEndOfInput(&'static str),
}
