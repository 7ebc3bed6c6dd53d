//! Fluent builder for [`Diagnostic`] values.

use super::{Diagnostic, DiagnosticCode, Handler};
use crate::Span;

/// Builder for constructing diagnostics step by step
///
/// # Examples
///
/// ```
/// use luanova_util::diagnostic::{DiagnosticBuilder, DiagnosticCode, Span};
///
/// let diag = DiagnosticBuilder::error("unexpected character '@'")
///     .code(DiagnosticCode::E_LEXER_UNEXPECTED_CHAR)
///     .span(Span::new(0, 1))
///     .help("remove the character")
///     .build();
/// assert_eq!(diag.helps.len(), 1);
/// ```
pub struct DiagnosticBuilder {
    message: String,
    span: Span,
    code: Option<DiagnosticCode>,
    notes: Vec<String>,
    helps: Vec<String>,
}

impl DiagnosticBuilder {
    /// Create an error builder
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            span: Span::DUMMY,
            code: None,
            notes: Vec::new(),
            helps: Vec::new(),
        }
    }

    /// Set the diagnostic code
    pub fn code(mut self, code: DiagnosticCode) -> Self {
        self.code = Some(code);
        self
    }

    /// Set the source span
    pub fn span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }

    /// Add a note to the diagnostic
    pub fn note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    /// Add a help suggestion to the diagnostic
    pub fn help(mut self, help: impl Into<String>) -> Self {
        self.helps.push(help.into());
        self
    }

    /// Build the diagnostic
    pub fn build(self) -> Diagnostic {
        Diagnostic {
            message: self.message,
            span: self.span,
            code: self.code,
            notes: self.notes,
            helps: self.helps,
        }
    }

    /// Build and emit the diagnostic to the given handler
    ///
    /// # Examples
    ///
    /// ```
    /// use luanova_util::diagnostic::{DiagnosticBuilder, Handler, Span};
    ///
    /// let handler = Handler::new();
    /// DiagnosticBuilder::error("something went wrong")
    ///     .span(Span::DUMMY)
    ///     .emit(&handler);
    ///
    /// assert!(handler.has_errors());
    /// ```
    pub fn emit(self, handler: &Handler) {
        handler.emit_diagnostic(self.build());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let diag = DiagnosticBuilder::error("oops").build();
        assert_eq!(diag.message, "oops");
        assert_eq!(diag.span, Span::DUMMY);
        assert!(diag.code.is_none());
        assert!(diag.notes.is_empty());
        assert!(diag.helps.is_empty());
    }

    #[test]
    fn test_builder_chain() {
        let diag = DiagnosticBuilder::error("unterminated string literal")
            .code(DiagnosticCode::E_LEXER_UNTERMINATED_STRING)
            .span(Span::new(2, 4))
            .note("first")
            .note("second")
            .help("try this")
            .build();

        assert_eq!(diag.code, Some(DiagnosticCode::E_LEXER_UNTERMINATED_STRING));
        assert_eq!(diag.span, Span::new(2, 4));
        assert_eq!(diag.notes, vec!["first", "second"]);
        assert_eq!(diag.helps, vec!["try this"]);
    }

    #[test]
    fn test_builder_emit() {
        let handler = Handler::new();
        DiagnosticBuilder::error("heads up").emit(&handler);
        assert_eq!(handler.error_count(), 1);
        assert_eq!(handler.diagnostics()[0].message, "heads up");
    }
}
