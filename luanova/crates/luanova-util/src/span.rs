//! Span module - Byte ranges into a source buffer.
//!
//! A [`Span`] records where a lexeme came from as a half-open byte range.
//! Spans never carry line or column information.
//!
//! # Examples
//!
//! ```
//! use luanova_util::span::Span;
//!
//! let source = "local x = 1";
//! let span = Span::new(6, 7);
//! assert_eq!(span.slice(source).unwrap(), "x");
//! ```

use crate::error::{SpanError, SpanResult};

/// Source location span
///
/// A half-open range `start..end` of byte offsets.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Span {
    /// Start byte offset in source
    pub start: usize,
    /// End byte offset in source (exclusive)
    pub end: usize,
}

impl Span {
    /// Dummy span for diagnostics that have no location
    ///
    /// # Examples
    ///
    /// ```
    /// use luanova_util::span::Span;
    ///
    /// assert_eq!(Span::DUMMY.start, 0);
    /// assert_eq!(Span::DUMMY.end, 0);
    /// ```
    pub const DUMMY: Span = Span { start: 0, end: 0 };

    /// Create a new span
    ///
    /// # Examples
    ///
    /// ```
    /// use luanova_util::span::Span;
    ///
    /// let span = Span::new(10, 20);
    /// assert_eq!(span.start, 10);
    /// assert_eq!(span.end, 20);
    /// ```
    #[inline]
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Returns true if the span covers no bytes
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    /// Resolve the span against the source text it was taken from.
    ///
    /// # Errors
    ///
    /// Fails if the range is inverted, runs past the end of `source`, or
    /// splits a multi-byte character.
    pub fn slice<'s>(&self, source: &'s str) -> SpanResult<&'s str> {
        if self.start > self.end {
            return Err(SpanError::InvalidSpan {
                start: self.start,
                end: self.end,
            });
        }
        if self.end > source.len() {
            return Err(SpanError::OutOfBounds {
                source_len: source.len(),
                start: self.start,
                end: self.end,
            });
        }
        source
            .get(self.start..self.end)
            .ok_or(SpanError::NotCharBoundary {
                start: self.start,
                end: self.end,
            })
    }
}

impl std::fmt::Display for Span {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}
