#![allow(clippy::struct_excessive_bools)]

use crate::error::ErrorKind;

/// Default nesting ceiling.
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// Configuration options for [`JsonReader`](crate::JsonReader).
///
/// # Examples
///
/// ```rust
/// use jsonscan::{JsonReader, ReaderOptions};
///
/// let options = ReaderOptions {
///     max_depth: 256,
///     allow_multiple_json_values: true,
///     ..Default::default()
/// };
/// let reader = JsonReader::with_options(b"{} {}", options).unwrap();
/// assert_eq!(reader.max_depth(), 256);
/// ```
///
/// # Default
///
/// `max_depth` defaults to [`DEFAULT_MAX_DEPTH`], all flags to `false`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ReaderOptions {
    /// Maximum number of simultaneously open containers. Must be non-zero.
    ///
    /// Nesting up to 64 levels is tracked in a bitmask. A larger ceiling
    /// provisions an overflow stack once, when the option is applied.
    ///
    /// # Default
    ///
    /// `64`
    pub max_depth: usize,

    /// Whether to read multiple JSON values from a single input.
    ///
    /// When `true`, whitespace-separated roots are read one after another,
    /// as in JSON Lines (JSONL) and newline-delimited JSON (ND-JSON).
    ///
    /// ```json
    /// {}{}{}
    /// ```
    ///
    /// ```json
    /// 123 45 678 9
    /// ```
    ///
    /// # Default
    ///
    /// `false`
    pub allow_multiple_json_values: bool,

    /// Whether a `,` directly before `}` or `]` is accepted.
    ///
    /// # Default
    ///
    /// `false`
    pub allow_trailing_commas: bool,

    /// Whether the input may be a prefix of a longer document.
    ///
    /// When `true`, running out of input inside an open container or inside a
    /// token makes [`read`](crate::JsonReader::read) return `false` instead
    /// of failing. The reader rewinds to the start of the incomplete token,
    /// so [`position`](crate::JsonReader::position) is the number of fully
    /// consumed bytes and [`into_state`](crate::JsonReader::into_state) can
    /// be used to continue over the remaining bytes.
    ///
    /// # Default
    ///
    /// `false`
    pub allow_partial_input: bool,
}

impl Default for ReaderOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            allow_multiple_json_values: false,
            allow_trailing_commas: false,
            allow_partial_input: false,
        }
    }
}

impl ReaderOptions {
    pub(crate) fn validate(&self) -> Result<(), ErrorKind> {
        if self.max_depth == 0 {
            return Err(ErrorKind::InvalidConfiguration("max_depth must be positive"));
        }
        Ok(())
    }
}
