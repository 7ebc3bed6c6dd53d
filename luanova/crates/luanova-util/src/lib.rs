//! luanova-util - Shared foundation types for the Luanova front end
//!
//! This crate holds the pieces every phase of the Luanova toolchain needs
//! regardless of what it does with source text:
//!
//! - [`span`] - byte ranges into a source buffer
//! - [`diagnostic`] - error reporting with codes, spans and a collecting
//!   [`Handler`]
//! - [`error`] - `thiserror` error types for the utilities above
//!
//! Spans are byte offsets only. Line and column resolution belongs to the
//! consumer that owns the file.
//!
//! # Example
//!
//! ```
//! use luanova_util::{DiagnosticBuilder, DiagnosticCode, Handler, Span};
//!
//! let handler = Handler::new();
//! DiagnosticBuilder::error("unterminated string literal")
//!     .code(DiagnosticCode::E_LEXER_UNTERMINATED_STRING)
//!     .span(Span::new(4, 9))
//!     .emit(&handler);
//!
//! assert!(handler.has_errors());
//! ```

#![warn(missing_docs)]

pub mod diagnostic;
pub mod error;
pub mod span;

pub use diagnostic::{Diagnostic, DiagnosticBuilder, DiagnosticCode, Handler};
pub use error::{SpanError, SpanResult};
pub use span::Span;
