//! Diagnostic module - Error reporting infrastructure.
//!
//! Phases report problems into a shared [`Handler`] instead of aborting.
//! The handler collects every [`Diagnostic`] so the caller decides what to do
//! with them once the phase is finished.
//!
//! # Examples
//!
//! ```
//! use luanova_util::diagnostic::{DiagnosticBuilder, DiagnosticCode, Handler, Span};
//!
//! let handler = Handler::new();
//! DiagnosticBuilder::error("unexpected character '@'")
//!     .code(DiagnosticCode::E_LEXER_UNEXPECTED_CHAR)
//!     .span(Span::new(0, 1))
//!     .emit(&handler);
//!
//! assert_eq!(handler.error_count(), 1);
//! ```

mod builder;
mod codes;

pub use builder::DiagnosticBuilder;
pub use codes::DiagnosticCode;

pub use crate::Span;
use std::cell::RefCell;
use std::fmt;

/// An error report with a code and source location
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    /// Main diagnostic message
    pub message: String,
    /// Source location
    pub span: Span,
    /// Optional diagnostic code
    pub code: Option<DiagnosticCode>,
    /// Additional notes for context
    pub notes: Vec<String>,
    /// Help suggestions for fixing the issue
    pub helps: Vec<String>,
}

impl Diagnostic {
    /// Create an error diagnostic
    pub fn error(message: impl Into<String>, span: Span) -> Self {
        Self {
            message: message.into(),
            span,
            code: None,
            notes: Vec::new(),
            helps: Vec::new(),
        }
    }

    /// Render the diagnostic as plain text, quoting the offending source.
    ///
    /// If the span cannot be resolved against `source` the snippet is
    /// omitted and only the header is printed.
    ///
    /// # Examples
    ///
    /// ```
    /// use luanova_util::diagnostic::{DiagnosticBuilder, DiagnosticCode, Span};
    ///
    /// let source = "x = \"abc";
    /// let diag = DiagnosticBuilder::error("unterminated string literal")
    ///     .code(DiagnosticCode::E_LEXER_UNTERMINATED_STRING)
    ///     .span(Span::new(4, 8))
    ///     .build();
    ///
    /// let text = diag.render(source);
    /// assert!(text.starts_with("error[E1002]: unterminated string literal"));
    /// assert!(text.contains("| \"abc"));
    /// ```
    pub fn render(&self, source: &str) -> String {
        Rendered {
            diagnostic: self,
            source,
        }
        .to_string()
    }

    fn write_header(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.code {
            Some(code) => write!(f, "error[{}]: {}", code, self.message),
            None => write!(f, "error: {}", self.message),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_header(f)?;
        write!(f, " at {}", self.span)
    }
}

/// A diagnostic paired with the source it points into.
struct Rendered<'a> {
    diagnostic: &'a Diagnostic,
    source: &'a str,
}

impl fmt::Display for Rendered<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let diag = self.diagnostic;
        diag.write_header(f)?;
        writeln!(f)?;
        writeln!(f, " --> {}", diag.span)?;
        if let Ok(snippet) = diag.span.slice(self.source) {
            writeln!(f, "  |")?;
            for line in snippet.lines() {
                writeln!(f, "  | {}", line)?;
            }
        }
        for note in &diag.notes {
            writeln!(f, "  = note: {}", note)?;
        }
        for help in &diag.helps {
            writeln!(f, "  = help: {}", help)?;
        }
        Ok(())
    }
}

/// Collector for diagnostics emitted during a phase
///
/// Uses interior mutability so several readers of the same source can share
/// one handler through a shared reference.
///
/// # Examples
///
/// ```
/// use luanova_util::diagnostic::{Diagnostic, Handler, Span};
///
/// let handler = Handler::new();
/// handler.emit_diagnostic(Diagnostic::error("unexpected token", Span::DUMMY));
///
/// if handler.has_errors() {
///     eprintln!("Scanning failed with {} errors", handler.error_count());
/// }
/// ```
#[derive(Debug, Default)]
pub struct Handler {
    diagnostics: RefCell<Vec<Diagnostic>>,
}

impl Handler {
    /// Create a new, empty handler
    pub fn new() -> Self {
        Self {
            diagnostics: RefCell::new(Vec::new()),
        }
    }

    /// Emit a pre-built diagnostic
    pub fn emit_diagnostic(&self, diagnostic: Diagnostic) {
        self.diagnostics.borrow_mut().push(diagnostic);
    }

    /// Check if any errors have been reported
    pub fn has_errors(&self) -> bool {
        !self.diagnostics.borrow().is_empty()
    }

    /// Get the number of errors
    pub fn error_count(&self) -> usize {
        self.diagnostics.borrow().len()
    }

    /// Get all diagnostics in emission order
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.diagnostics.borrow().clone()
    }
}
