//! Comment lexing.
//!
//! Comments are real tokens in this dialect. Line comments run from `--` to
//! the end of the line; block comments are bracketed by `-*` and `*-` and do
//! not nest. Both keep their markers in the token text.

use luanova_util::{DiagnosticBuilder, DiagnosticCode};
use tracing::debug;

use super::Scanner;
use crate::token::{Token, TokenKind};

impl<'a> Scanner<'a> {
    /// Lexes a line comment. The cursor is on the first `-` of `--`.
    ///
    /// The terminating newline is left for the whitespace skipper.
    pub(super) fn lex_line_comment(&mut self) -> Token<'a> {
        self.cursor.advance_while(|c| c != '\n');
        self.make(TokenKind::Comment)
    }

    /// Lexes a block comment. The cursor is on the `-` of `-*`.
    ///
    /// The search for `*-` starts on the opener's `*`, so `-*-` is a
    /// complete comment. Without a closer the comment runs to end of input.
    pub(super) fn lex_block_comment(&mut self) -> Token<'a> {
        self.cursor.advance();

        loop {
            match self.cursor.current() {
                None => {
                    debug!(offset = self.token_start, "unterminated block comment");
                    if self.config.report_unterminated {
                        self.report(|| {
                            DiagnosticBuilder::error("unterminated block comment")
                                .code(DiagnosticCode::E_LEXER_UNTERMINATED_COMMENT)
                                .note("block comments do not nest")
                                .help("close the comment with `*-`")
                        });
                    }
                    break;
                },
                Some('*') if self.cursor.peek() == Some('-') => {
                    self.cursor.advance();
                    self.cursor.advance();
                    break;
                },
                Some(_) => self.cursor.advance(),
            }
        }

        self.make(TokenKind::CommentBlock)
    }
}
