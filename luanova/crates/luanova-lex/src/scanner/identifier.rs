//! Identifier and keyword lexing.

use super::Scanner;
use crate::token::{lookup_ident, Token};
use crate::unicode::is_ident_continue;

impl<'a> Scanner<'a> {
    /// Lexes an identifier or keyword.
    ///
    /// Reads the whole word, then resolves it through the keyword catalog;
    /// unreserved words are literals.
    pub(super) fn lex_identifier(&mut self) -> Token<'a> {
        self.cursor.advance();
        self.cursor.advance_while(is_ident_continue);

        let text = self.cursor.slice_from(self.token_start);
        Token::new(lookup_ident(text), text)
    }
}
