//! String literal lexing.
//!
//! Strings are double-quoted with no escape sequences; the token text is the
//! raw interior. Newlines are allowed inside a string.

use luanova_util::{DiagnosticBuilder, DiagnosticCode};
use tracing::debug;

use super::Scanner;
use crate::token::{Token, TokenKind};

impl<'a> Scanner<'a> {
    /// Lexes a string literal. The cursor is on the opening quote.
    ///
    /// An unterminated string absorbs the rest of the input.
    pub(super) fn lex_string(&mut self) -> Token<'a> {
        self.cursor.advance();
        let content_start = self.cursor.position();

        self.cursor.advance_while(|c| c != '"');
        let content = self.cursor.slice_from(content_start);

        if !self.cursor.eat('"') {
            debug!(offset = self.token_start, "unterminated string literal");
            if self.config.report_unterminated {
                self.report(|| {
                    DiagnosticBuilder::error("unterminated string literal")
                        .code(DiagnosticCode::E_LEXER_UNTERMINATED_STRING)
                        .note("string literals have no escape sequences")
                        .help("add a closing `\"`")
                });
            }
        }

        Token::new(TokenKind::StringDelim, content)
    }
}

#[cfg(test)]
mod tests {
    use crate::config::ScanConfig;
    use crate::token::{Token, TokenKind};
    use crate::Scanner;
    use luanova_util::{DiagnosticCode, Handler, Span};

    fn lex(source: &str) -> Vec<Token<'_>> {
        Scanner::new(source).scan_all()
    }

    #[test]
    fn test_two_strings() {
        assert_eq!(
            lex("\"hello world\" \"test\""),
            [
                Token::new(TokenKind::StringDelim, "hello world"),
                Token::new(TokenKind::StringDelim, "test"),
                Token::eof(),
            ]
        );
    }

    #[test]
    fn test_empty_string() {
        assert_eq!(
            lex("\"\""),
            [Token::new(TokenKind::StringDelim, ""), Token::eof()]
        );
    }

    #[test]
    fn test_string_keeps_backslashes() {
        let tokens = lex(r#""a\nb\""#);
        assert_eq!(tokens[0], Token::new(TokenKind::StringDelim, r"a\nb\"));
        assert!(tokens[1].is_eof());
    }

    #[test]
    fn test_string_spans_newlines() {
        let tokens = lex("\"line one\nline two\"");
        assert_eq!(
            tokens[0],
            Token::new(TokenKind::StringDelim, "line one\nline two")
        );
    }

    #[test]
    fn test_string_with_unicode() {
        let tokens = lex("\"olá, 世界\"");
        assert_eq!(tokens[0], Token::new(TokenKind::StringDelim, "olá, 世界"));
    }

    #[test]
    fn test_unterminated_string() {
        assert_eq!(
            lex("x = \"open"),
            [
                Token::new(TokenKind::Literal, "x"),
                Token::new(TokenKind::Assign, "="),
                Token::new(TokenKind::StringDelim, "open"),
                Token::eof(),
            ]
        );
    }

    #[test]
    fn test_lone_quote() {
        assert_eq!(
            lex("\""),
            [Token::new(TokenKind::StringDelim, ""), Token::eof()]
        );
    }

    #[test]
    fn test_unterminated_string_reports() {
        let handler = Handler::new();
        let tokens = Scanner::with_handler("x = \"open", ScanConfig::default(), &handler).scan_all();
        assert_eq!(tokens[2].text, "open");

        let diagnostics = handler.diagnostics();
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(
            diagnostics[0].code,
            Some(DiagnosticCode::E_LEXER_UNTERMINATED_STRING)
        );
        assert_eq!(diagnostics[0].span, Span::new(4, 9));
        assert_eq!(diagnostics[0].notes, ["string literals have no escape sequences"]);
        assert_eq!(diagnostics[0].helps, ["add a closing `\"`"]);
    }

    #[test]
    fn test_terminated_string_does_not_report() {
        let handler = Handler::new();
        Scanner::with_handler("\"done\"", ScanConfig::default(), &handler).scan_all();
        assert!(!handler.has_errors());
    }
}
