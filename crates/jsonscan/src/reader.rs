//! The pull tokenizer.
//!
//! [`JsonReader`] advances one token per [`read`](JsonReader::read) call.
//! Each call is a single step of a small state machine:
//!
//! 1. Skip whitespace and look at the next significant byte.
//! 2. Combine it with the kind of the previous token to
//!    decide what the byte starts: a value, a property name, a closer, or a
//!    separator.
//! 3. Run the matching scanner on the cursor and publish the token.
//!
//! Nothing is published until the token has been scanned completely, so a
//! failed step leaves the previous token observable. With
//! [`allow_partial_input`](ReaderOptions::allow_partial_input) the cursor is
//! also rewound to where the step began, which is what makes
//! [`into_state`](JsonReader::into_state) resumption possible.

use alloc::vec::Vec;
use core::mem;

use bstr::ByteSlice;

use crate::{
    depth::{Container, ContainerStack},
    error::{ErrorKind, ReaderError, SyntaxError},
    options::ReaderOptions,
    scanner::{Cursor, NumberError, SegmentCursor, SliceCursor, is_delimiter, validate_number},
    token::{Capture, Literal, Token, TokenKind, ValueKind},
};

/// What the next significant byte starts, given the previous token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    /// A value, dispatched on its first byte.
    Value,
    /// An object key.
    PropertyName,
    /// `}` or `]`.
    Close(Container),
    /// `,` followed by the next member or element.
    Separator,
}

fn transition(previous: TokenKind, byte: u8) -> Result<Step, SyntaxError> {
    match (previous, byte) {
        (TokenKind::None, b'}') => Ok(Step::Close(Container::Object)),
        (TokenKind::None, b']') => Ok(Step::Close(Container::Array)),
        (TokenKind::None | TokenKind::PropertyName, _) => Ok(Step::Value),
        (TokenKind::StartObject, b'"') => Ok(Step::PropertyName),
        (TokenKind::StartObject, b'}') => Ok(Step::Close(Container::Object)),
        (TokenKind::StartObject, found) => Err(SyntaxError::UnexpectedByte {
            found,
            expected: "property name or '}'",
        }),
        (TokenKind::StartArray, b']') => Ok(Step::Close(Container::Array)),
        (TokenKind::StartArray, _) => Ok(Step::Value),
        (_, b',') => Ok(Step::Separator),
        (_, b'}') => Ok(Step::Close(Container::Object)),
        (_, b']') => Ok(Step::Close(Container::Array)),
        (_, found) => Err(SyntaxError::UnexpectedByte {
            found,
            expected: "',' or a closing bracket",
        }),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ValueStart {
    Open(Container),
    String,
    Number,
    Literal(Literal),
}

fn dispatch_value(byte: u8) -> Result<ValueStart, ErrorKind> {
    match byte {
        b'{' => Ok(ValueStart::Open(Container::Object)),
        b'[' => Ok(ValueStart::Open(Container::Array)),
        b'"' => Ok(ValueStart::String),
        b'-' | b'0'..=b'9' => Ok(ValueStart::Number),
        b'/' => Err(ErrorKind::Unsupported),
        _ => Literal::from_marker(byte).map(ValueStart::Literal).ok_or_else(|| {
            SyntaxError::UnexpectedByte {
                found: byte,
                expected: "a value",
            }
            .into()
        }),
    }
}

/// Forward-only JSON tokenizer over a [`Cursor`].
///
/// Construct one with [`JsonReader::new`] for contiguous input or
/// [`JsonReader::from_segments`] for segmented input, then call
/// [`read`](Self::read) until it returns `Ok(false)`. Owned [`Token`]
/// snapshots are available through [`tokens`](Self::tokens) or by consuming
/// the reader with `into_iter`.
///
/// ```rust
/// use jsonscan::{JsonReader, TokenKind, ValueKind};
///
/// let mut reader = JsonReader::new(br#"{"a": [1, "two"]}"#);
/// let mut seen = Vec::new();
/// while reader.read().unwrap() {
///     seen.push((reader.token_kind(), reader.value_kind(), reader.depth()));
/// }
/// assert_eq!(seen[1], (TokenKind::PropertyName, ValueKind::String, 1));
/// assert_eq!(seen[3], (TokenKind::Value, ValueKind::Number, 2));
/// assert_eq!(reader.depth(), 0);
/// ```
#[derive(Debug)]
pub struct JsonReader<'src, C> {
    cursor: C,
    options: ReaderOptions,
    containers: ContainerStack,
    token_kind: TokenKind,
    value_kind: ValueKind,
    token_start: usize,
    value: Capture<'src>,
    value_is_escaped: bool,
    /// Joins spans that cross segment boundaries. Recycled from the
    /// previous owned value.
    scratch: Vec<u8>,
    failed: Option<ReaderError>,
}

/// Reader over one contiguous buffer.
pub type SliceReader<'src> = JsonReader<'src, SliceCursor<'src>>;

/// Reader over an ordered list of segments.
pub type SegmentReader<'src> = JsonReader<'src, SegmentCursor<'src>>;

/// Everything a reader needs to continue over the next piece of a document:
/// options, open containers and the last token kinds.
///
/// Obtained from [`JsonReader::into_state`]; the input itself is not part of
/// the state, the caller passes the unconsumed bytes to the next reader.
#[derive(Debug, Clone)]
pub struct ReaderState {
    options: ReaderOptions,
    containers: ContainerStack,
    token_kind: TokenKind,
    value_kind: ValueKind,
}

impl ReaderState {
    /// A fresh state with the given options.
    ///
    /// # Errors
    ///
    /// [`ErrorKind::InvalidConfiguration`] when the options are rejected. The
    /// error position is 0.
    pub fn new(options: ReaderOptions) -> Result<Self, ReaderError> {
        options.validate().map_err(|kind| ReaderError {
            kind,
            position: 0,
            line: 1,
            column: 1,
        })?;
        Ok(Self {
            options,
            containers: ContainerStack::new(options.max_depth),
            token_kind: TokenKind::None,
            value_kind: ValueKind::Unknown,
        })
    }

    /// Marks the next piece as the last one. Partial input is turned off, so
    /// a root number at the end of that piece completes and a container left
    /// open is an error.
    #[must_use]
    pub fn finish(mut self) -> Self {
        self.options.allow_partial_input = false;
        self
    }

    /// The options carried over.
    #[must_use]
    pub fn options(&self) -> &ReaderOptions {
        &self.options
    }

    /// Number of containers left open.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.containers.depth()
    }

    /// Kind of the last token read.
    #[must_use]
    pub fn token_kind(&self) -> TokenKind {
        self.token_kind
    }

    /// Value kind of the last token read.
    #[must_use]
    pub fn value_kind(&self) -> ValueKind {
        self.value_kind
    }
}

impl Default for ReaderState {
    fn default() -> Self {
        Self {
            options: ReaderOptions::default(),
            containers: ContainerStack::default(),
            token_kind: TokenKind::None,
            value_kind: ValueKind::Unknown,
        }
    }
}

impl<'src> SliceReader<'src> {
    /// A reader with default options over contiguous input.
    #[must_use]
    pub fn new(bytes: &'src [u8]) -> Self {
        Self::resume(SliceCursor::new(bytes), ReaderState::default())
    }

    /// A reader over contiguous input.
    ///
    /// # Errors
    ///
    /// [`ErrorKind::InvalidConfiguration`] when `options.max_depth` is 0.
    pub fn with_options(bytes: &'src [u8], options: ReaderOptions) -> Result<Self, ReaderError> {
        Self::from_cursor(SliceCursor::new(bytes), options)
    }

    /// Continues a document whose earlier bytes were read by another reader.
    #[must_use]
    pub fn with_state(bytes: &'src [u8], state: ReaderState) -> Self {
        Self::resume(SliceCursor::new(bytes), state)
    }
}

impl<'src> SegmentReader<'src> {
    /// A reader with default options over segmented input. Empty segments
    /// are allowed.
    #[must_use]
    pub fn from_segments(segments: &'src [&'src [u8]]) -> Self {
        Self::resume(SegmentCursor::new(segments), ReaderState::default())
    }

    /// A reader over segmented input.
    ///
    /// # Errors
    ///
    /// [`ErrorKind::InvalidConfiguration`] when `options.max_depth` is 0.
    pub fn from_segments_with_options(
        segments: &'src [&'src [u8]],
        options: ReaderOptions,
    ) -> Result<Self, ReaderError> {
        Self::from_cursor(SegmentCursor::new(segments), options)
    }

    /// Continues a document whose earlier bytes were read by another reader.
    #[must_use]
    pub fn from_segments_with_state(segments: &'src [&'src [u8]], state: ReaderState) -> Self {
        Self::resume(SegmentCursor::new(segments), state)
    }
}

impl<'src, C: Cursor<'src>> JsonReader<'src, C> {
    /// A reader over any cursor.
    ///
    /// # Errors
    ///
    /// [`ErrorKind::InvalidConfiguration`] when `options.max_depth` is 0.
    pub fn from_cursor(cursor: C, options: ReaderOptions) -> Result<Self, ReaderError> {
        if let Err(kind) = options.validate() {
            return Err(error_at(&cursor, kind));
        }
        let state = ReaderState {
            options,
            containers: ContainerStack::new(options.max_depth),
            ..ReaderState::default()
        };
        Ok(Self::resume(cursor, state))
    }

    fn resume(cursor: C, state: ReaderState) -> Self {
        let ReaderState {
            options,
            containers,
            token_kind,
            value_kind,
        } = state;
        Self {
            token_start: cursor.position(),
            cursor,
            options,
            containers,
            token_kind,
            value_kind,
            value: Capture::default(),
            value_is_escaped: false,
            scratch: Vec::new(),
            failed: None,
        }
    }

    /// Gives up the input, keeping what is needed to continue on the bytes
    /// after [`position`](Self::position).
    #[must_use]
    pub fn into_state(self) -> ReaderState {
        ReaderState {
            options: self.options,
            containers: self.containers,
            token_kind: self.token_kind,
            value_kind: self.value_kind,
        }
    }

    /// The options in effect.
    #[must_use]
    pub fn options(&self) -> &ReaderOptions {
        &self.options
    }

    /// Declares that no input follows what this reader holds. Later reads
    /// behave as if partial input had never been allowed.
    pub fn finish(&mut self) {
        self.options.allow_partial_input = false;
    }

    /// The nesting ceiling.
    #[must_use]
    pub fn max_depth(&self) -> usize {
        self.options.max_depth
    }

    /// Changes the nesting ceiling. A ceiling above 64 provisions the
    /// overflow stack now rather than on a later push.
    ///
    /// # Errors
    ///
    /// [`ErrorKind::InvalidConfiguration`] when `max_depth` is 0. The reader
    /// is left unchanged.
    pub fn set_max_depth(&mut self, max_depth: usize) -> Result<(), ReaderError> {
        let options = ReaderOptions {
            max_depth,
            ..self.options
        };
        if let Err(kind) = options.validate() {
            return Err(error_at(&self.cursor, kind));
        }
        self.containers.provision(max_depth);
        self.options = options;
        Ok(())
    }

    /// Number of currently open containers.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.containers.depth()
    }

    /// Whether the innermost open container is an object.
    #[must_use]
    pub fn in_object(&self) -> bool {
        self.containers.in_object()
    }

    /// Logical offset of the next unread byte.
    #[must_use]
    pub fn position(&self) -> usize {
        self.cursor.position()
    }

    /// Logical offset of the first byte of the current token. For strings
    /// and property names this is the opening quote.
    #[must_use]
    pub fn token_start(&self) -> usize {
        self.token_start
    }

    /// Kind of the current token.
    #[must_use]
    pub fn token_kind(&self) -> TokenKind {
        self.token_kind
    }

    /// Value kind of the current token.
    #[must_use]
    pub fn value_kind(&self) -> ValueKind {
        self.value_kind
    }

    /// Raw bytes of the current token's value: the string contents without
    /// quotes, the number or literal text, or nothing for brackets.
    #[must_use]
    pub fn value_bytes(&self) -> &[u8] {
        self.value.as_bytes()
    }

    /// The current value span.
    #[must_use]
    pub fn value(&self) -> &Capture<'src> {
        &self.value
    }

    /// Whether the current string or property name contains a backslash
    /// escape. Escapes are never decoded.
    #[must_use]
    pub fn value_is_escaped(&self) -> bool {
        self.value_is_escaped
    }

    /// The underlying cursor.
    #[must_use]
    pub fn cursor(&self) -> &C {
        &self.cursor
    }

    /// An owned snapshot of the current token.
    #[must_use]
    pub fn token(&self) -> Token<'src> {
        Token {
            kind: self.token_kind,
            value_kind: self.value_kind,
            value: self.value.clone(),
            start: self.token_start,
            depth: self.containers.depth(),
        }
    }

    /// Advances to the next token.
    ///
    /// Returns `Ok(false)` at the end of input when the document is complete,
    /// or, with partial input allowed, when the remaining bytes do not hold a
    /// whole token.
    ///
    /// # Errors
    ///
    /// Any [`ErrorKind`] other than `InvalidConfiguration`. The error is
    /// sticky: every later call returns it again.
    pub fn read(&mut self) -> Result<bool, ReaderError> {
        if let Some(error) = &self.failed {
            return Err(error.clone());
        }
        let mark = self.cursor.clone();
        match self.read_token() {
            Ok(read) => Ok(read),
            Err(kind) if self.options.allow_partial_input && kind.is_end_of_input() => {
                log::debug!("partial input ends at {}: {kind}", mark.position());
                self.cursor = mark;
                Ok(false)
            }
            Err(kind) => Err(self.fail(kind)),
        }
    }

    /// Skips the children of the current container.
    ///
    /// On a start token this reads through the matching end token; on a
    /// property name it first reads the value. Scalars are left in place.
    ///
    /// # Errors
    ///
    /// Whatever [`read`](Self::read) reports, and
    /// [`SyntaxError::UnexpectedEndOfInput`] if the input ends before the
    /// container closes.
    pub fn skip(&mut self) -> Result<(), ReaderError> {
        if let Some(error) = &self.failed {
            return Err(error.clone());
        }
        if self.token_kind == TokenKind::PropertyName {
            self.read_required("a value")?;
        }
        if !matches!(self.token_kind, TokenKind::StartObject | TokenKind::StartArray) {
            return Ok(());
        }
        let target = self.containers.depth() - 1;
        while self.containers.depth() > target {
            self.read_required("a closing bracket")?;
        }
        Ok(())
    }

    /// Like [`skip`](Self::skip), but with partial input allowed a container
    /// that does not close before the end of input is not an error: the
    /// reader is restored to the token it started on and `Ok(false)` is
    /// returned.
    ///
    /// # Errors
    ///
    /// As [`skip`](Self::skip).
    pub fn try_skip(&mut self) -> Result<bool, ReaderError> {
        if !self.options.allow_partial_input {
            self.skip()?;
            return Ok(true);
        }
        if let Some(error) = &self.failed {
            return Err(error.clone());
        }
        let cursor = self.cursor.clone();
        let depth = self.containers.depth();
        let (token_kind, value_kind, token_start, escaped) =
            (self.token_kind, self.value_kind, self.token_start, self.value_is_escaped);
        let value = self.value.clone();

        if self.token_kind == TokenKind::PropertyName && !self.read()? {
            return Ok(false);
        }
        if matches!(self.token_kind, TokenKind::StartObject | TokenKind::StartArray) {
            let target = self.containers.depth() - 1;
            while self.containers.depth() > target {
                if !self.read()? {
                    self.cursor = cursor;
                    self.containers.truncate(depth);
                    self.token_kind = token_kind;
                    self.value_kind = value_kind;
                    self.token_start = token_start;
                    self.value_is_escaped = escaped;
                    self.value = value;
                    return Ok(false);
                }
            }
        }
        Ok(true)
    }

    /// Raw scan to the next `delimiter` not escaped by a backslash, outside
    /// the token grammar. Consumes the delimiter. Returns `None` without
    /// moving when there is none.
    pub fn try_read_until(&mut self, delimiter: u8) -> Option<Capture<'src>> {
        self.cursor.try_read_until(delimiter, &mut self.scratch)
    }

    /// Iterates over owned snapshots of the remaining tokens.
    ///
    /// ```rust
    /// use jsonscan::{JsonReader, TokenKind};
    ///
    /// let mut reader = JsonReader::new(b"[1, 2] ");
    /// assert!(reader.read().unwrap());
    /// let rest: Vec<_> = reader.tokens().map(|token| token.unwrap().kind).collect();
    /// assert_eq!(rest, [TokenKind::Value, TokenKind::Value, TokenKind::EndArray]);
    /// ```
    pub fn tokens(&mut self) -> Tokens<'_, 'src, C> {
        Tokens { reader: self }
    }

    fn next_token(&mut self) -> Option<Result<Token<'src>, ReaderError>> {
        if self.failed.is_some() {
            return None;
        }
        match self.read() {
            Ok(true) => Some(Ok(self.token())),
            Ok(false) => None,
            Err(error) => Some(Err(error)),
        }
    }

    fn read_required(&mut self, expected: &'static str) -> Result<(), ReaderError> {
        if self.read()? {
            return Ok(());
        }
        Err(self.fail(SyntaxError::UnexpectedEndOfInput(expected).into()))
    }

    #[cold]
    fn fail(&mut self, kind: ErrorKind) -> ReaderError {
        let error = error_at(&self.cursor, kind);
        log::debug!("json reader failed: {error}");
        self.failed = Some(error.clone());
        error
    }

    fn read_token(&mut self) -> Result<bool, ErrorKind> {
        self.cursor.skip_whitespace();
        let Some(byte) = self.cursor.peek() else {
            return self.end_of_input();
        };
        let mut previous = self.token_kind;
        if previous != TokenKind::None && self.containers.depth() == 0 {
            if !self.options.allow_multiple_json_values {
                return Err(SyntaxError::TrailingContent.into());
            }
            previous = TokenKind::None;
        }
        match transition(previous, byte)? {
            Step::Value => self.read_value(byte)?,
            Step::PropertyName => self.read_property_name()?,
            Step::Close(container) => self.close(container)?,
            Step::Separator => self.read_after_separator()?,
        }
        Ok(true)
    }

    fn end_of_input(&self) -> Result<bool, ErrorKind> {
        let Some(open) = self.containers.innermost() else {
            return Ok(false);
        };
        let expected = match (self.token_kind, open) {
            (TokenKind::PropertyName, _) => "a value",
            (TokenKind::StartObject, _) => "property name or '}'",
            (TokenKind::StartArray, _) => "a value or ']'",
            (_, Container::Object) => "',' or '}'",
            (_, Container::Array) => "',' or ']'",
        };
        Err(SyntaxError::UnexpectedEndOfInput(expected).into())
    }

    fn read_value(&mut self, byte: u8) -> Result<(), ErrorKind> {
        let start = self.cursor.position();
        match dispatch_value(byte)? {
            ValueStart::Open(container) => self.open(container)?,
            ValueStart::String => {
                self.cursor.advance(1);
                let span = self
                    .cursor
                    .try_read_until(b'"', &mut self.scratch)
                    .ok_or(ErrorKind::UnterminatedString)?;
                self.publish(TokenKind::Value, ValueKind::String, start, span);
            }
            ValueStart::Number => {
                let span = self.read_number()?;
                self.publish(TokenKind::Value, ValueKind::Number, start, span);
            }
            ValueStart::Literal(literal) => {
                self.cursor
                    .match_literal(literal)
                    .map_err(|found| ErrorKind::MalformedLiteral {
                        expected: literal,
                        found,
                    })?;
                let span = Capture::Borrowed(literal.bytes());
                self.publish(TokenKind::Value, literal.value_kind(), start, span);
            }
        }
        Ok(())
    }

    fn read_number(&mut self) -> Result<Capture<'src>, ErrorKind> {
        let (span, at_end) = self.cursor.scan_number(&mut self.scratch);
        match validate_number(&span) {
            Err(NumberError::Truncated) if at_end => return Err(ErrorKind::TruncatedNumber),
            Err(_) => return Err(SyntaxError::InvalidNumber.into()),
            Ok(()) => {}
        }
        // A complete root number may end the input, unless more could follow.
        if at_end && (self.containers.depth() > 0 || self.options.allow_partial_input) {
            return Err(ErrorKind::TruncatedNumber);
        }
        match self.cursor.peek() {
            Some(found) if !is_delimiter(found) => Err(SyntaxError::UnexpectedByte {
                found,
                expected: "a delimiter after the number",
            }
            .into()),
            _ => Ok(span),
        }
    }

    fn read_property_name(&mut self) -> Result<(), ErrorKind> {
        let start = self.cursor.position();
        self.cursor.advance(1);
        let span = self
            .cursor
            .try_read_until(b'"', &mut self.scratch)
            .ok_or(ErrorKind::UnterminatedString)?;
        self.cursor.skip_whitespace();
        match self.cursor.peek() {
            Some(b':') => self.cursor.advance(1),
            Some(found) => {
                return Err(SyntaxError::UnexpectedByte {
                    found,
                    expected: "':' after a property name",
                }
                .into());
            }
            None => {
                return Err(SyntaxError::UnexpectedEndOfInput("':' after a property name").into());
            }
        }
        self.publish(TokenKind::PropertyName, ValueKind::String, start, span);
        Ok(())
    }

    fn read_after_separator(&mut self) -> Result<(), ErrorKind> {
        self.cursor.advance(1);
        self.cursor.skip_whitespace();
        let in_object = self.containers.in_object();
        let Some(byte) = self.cursor.peek() else {
            let expected = if in_object { "a property name" } else { "a value" };
            return Err(SyntaxError::UnexpectedEndOfInput(expected).into());
        };
        let trailing = self.options.allow_trailing_commas;
        match (in_object, byte) {
            (true, b'"') => self.read_property_name(),
            (true, b'}') if trailing => self.close(Container::Object),
            (false, b']') if trailing => self.close(Container::Array),
            (true, found) => Err(SyntaxError::UnexpectedByte {
                found,
                expected: "a property name",
            }
            .into()),
            (false, _) => self.read_value(byte),
        }
    }

    fn open(&mut self, container: Container) -> Result<(), ErrorKind> {
        let start = self.cursor.position();
        self.containers.push(container, self.options.max_depth)?;
        self.cursor.advance(1);
        let (kind, value_kind) = match container {
            Container::Object => (TokenKind::StartObject, ValueKind::Object),
            Container::Array => (TokenKind::StartArray, ValueKind::Array),
        };
        self.publish(kind, value_kind, start, Capture::default());
        Ok(())
    }

    fn close(&mut self, container: Container) -> Result<(), ErrorKind> {
        let start = self.cursor.position();
        self.containers.pop(container)?;
        self.cursor.advance(1);
        let (kind, value_kind) = match container {
            Container::Object => (TokenKind::EndObject, ValueKind::Object),
            Container::Array => (TokenKind::EndArray, ValueKind::Array),
        };
        self.publish(kind, value_kind, start, Capture::default());
        Ok(())
    }

    fn publish(&mut self, kind: TokenKind, value_kind: ValueKind, start: usize, value: Capture<'src>) {
        #[cfg(trace_scanner)]
        log::trace!("{kind:?} {value_kind:?} {value:?} at {start}");
        self.token_kind = kind;
        self.value_kind = value_kind;
        self.token_start = start;
        self.value_is_escaped = value_kind == ValueKind::String && value.find_byte(b'\\').is_some();
        if let Capture::Owned(mut spent) = mem::replace(&mut self.value, value) {
            if self.scratch.capacity() == 0 {
                spent.clear();
                self.scratch = spent;
            }
        }
    }
}

fn error_at<'src, C: Cursor<'src>>(cursor: &C, kind: ErrorKind) -> ReaderError {
    let position = cursor.position();
    let (line, column) = cursor.line_column(position);
    ReaderError {
        kind,
        position,
        line,
        column,
    }
}

/// Borrowing token iterator, from [`JsonReader::tokens`]. Fused after the
/// first error.
#[derive(Debug)]
pub struct Tokens<'r, 'src, C> {
    reader: &'r mut JsonReader<'src, C>,
}

impl<'src, C: Cursor<'src>> Iterator for Tokens<'_, 'src, C> {
    type Item = Result<Token<'src>, ReaderError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.reader.next_token()
    }
}

impl<'src, C: Cursor<'src>> core::iter::FusedIterator for Tokens<'_, 'src, C> {}

/// Owning token iterator, from consuming a [`JsonReader`] with `into_iter`.
/// Fused after the first error.
#[derive(Debug)]
pub struct IntoTokens<'src, C> {
    reader: JsonReader<'src, C>,
}

impl<'src, C> IntoTokens<'src, C> {
    /// Gives the reader back, for [`into_state`](JsonReader::into_state) or
    /// further reads.
    #[must_use]
    pub fn into_reader(self) -> JsonReader<'src, C> {
        self.reader
    }
}

impl<'src, C: Cursor<'src>> Iterator for IntoTokens<'src, C> {
    type Item = Result<Token<'src>, ReaderError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.reader.next_token()
    }
}

impl<'src, C: Cursor<'src>> core::iter::FusedIterator for IntoTokens<'src, C> {}

impl<'src, C: Cursor<'src>> IntoIterator for JsonReader<'src, C> {
    type Item = Result<Token<'src>, ReaderError>;
    type IntoIter = IntoTokens<'src, C>;

    fn into_iter(self) -> Self::IntoIter {
        IntoTokens { reader: self }
    }
}
