//! Core error types for luanova-util crate

use thiserror::Error;

/// Error type for resolving a [`Span`](crate::Span) against source text
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SpanError {
    /// The span ends before it starts
    #[error("Invalid span: start {start} > end {end}")]
    InvalidSpan {
        /// Start byte offset
        start: usize,
        /// End byte offset
        end: usize,
    },

    /// The span reaches past the end of the source
    #[error("Span out of bounds: source has {source_len} bytes, span is {start}..{end}")]
    OutOfBounds {
        /// Length of the source in bytes
        source_len: usize,
        /// Start byte offset
        start: usize,
        /// End byte offset
        end: usize,
    },

    /// One of the offsets splits a UTF-8 sequence
    #[error("Span {start}..{end} does not fall on character boundaries")]
    NotCharBoundary {
        /// Start byte offset
        start: usize,
        /// End byte offset
        end: usize,
    },
}

/// Result type alias for span operations
pub type SpanResult<T> = std::result::Result<T, SpanError>;
