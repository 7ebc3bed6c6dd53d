//! Operator lexing.
//!
//! Every operator is decided by its first character plus at most one
//! character of lookahead. `-` also opens comments; that case is handed to
//! the comment module before any character is consumed.

use super::Scanner;
use crate::token::{Token, TokenKind};

impl<'a> Scanner<'a> {
    /// Lexes plus or plus-assign.
    ///
    /// Handles: `+`, `+=`
    pub(super) fn lex_plus(&mut self) -> Token<'a> {
        self.cursor.advance();
        if self.cursor.eat('=') {
            self.make(TokenKind::PlusAssign)
        } else {
            self.make(TokenKind::Plus)
        }
    }

    /// Lexes minus, sub-assign, arrow, or a comment.
    ///
    /// Handles: `-`, `-=`, `->`, `--`, `-*`
    pub(super) fn lex_minus(&mut self) -> Token<'a> {
        match self.cursor.peek() {
            Some('-') => return self.lex_line_comment(),
            Some('*') => return self.lex_block_comment(),
            _ => {},
        }

        self.cursor.advance();
        if self.cursor.eat('=') {
            self.make(TokenKind::SubAssign)
        } else if self.cursor.eat('>') {
            self.make(TokenKind::Arrow)
        } else {
            self.make(TokenKind::Sub)
        }
    }

    /// Lexes star or multi-assign.
    ///
    /// Handles: `*`, `*=`
    pub(super) fn lex_star(&mut self) -> Token<'a> {
        self.cursor.advance();
        if self.cursor.eat('=') {
            self.make(TokenKind::MultiAssign)
        } else {
            self.make(TokenKind::Multi)
        }
    }

    /// Lexes slash or div-assign.
    ///
    /// Handles: `/`, `/=`
    pub(super) fn lex_slash(&mut self) -> Token<'a> {
        self.cursor.advance();
        if self.cursor.eat('=') {
            self.make(TokenKind::DivAssign)
        } else {
            self.make(TokenKind::Div)
        }
    }

    /// Lexes percent or mod-assign.
    ///
    /// Handles: `%`, `%=`
    pub(super) fn lex_percent(&mut self) -> Token<'a> {
        self.cursor.advance();
        if self.cursor.eat('=') {
            self.make(TokenKind::ModAssign)
        } else {
            self.make(TokenKind::Mod)
        }
    }

    /// Lexes dot, concatenation, or variadic dots.
    ///
    /// Handles: `.`, `..`, `...`
    pub(super) fn lex_dot(&mut self) -> Token<'a> {
        self.cursor.advance();
        if self.cursor.eat('.') {
            if self.cursor.eat('.') {
                self.make(TokenKind::Dots)
            } else {
                self.make(TokenKind::Concat)
            }
        } else {
            self.make(TokenKind::Dot)
        }
    }

    /// Lexes assign or equal.
    ///
    /// Handles: `=`, `==`
    pub(super) fn lex_equals(&mut self) -> Token<'a> {
        self.cursor.advance();
        if self.cursor.eat('=') {
            self.make(TokenKind::Equal)
        } else {
            self.make(TokenKind::Assign)
        }
    }

    /// Lexes not-equal. A bare `~` is illegal.
    ///
    /// Handles: `~=`
    pub(super) fn lex_tilde(&mut self) -> Token<'a> {
        if self.cursor.peek() == Some('=') {
            self.cursor.advance();
            self.cursor.advance();
            self.make(TokenKind::NotEqual)
        } else {
            self.lex_illegal()
        }
    }

    /// Lexes less or less-equal.
    ///
    /// Handles: `<`, `<=`
    pub(super) fn lex_less(&mut self) -> Token<'a> {
        self.cursor.advance();
        if self.cursor.eat('=') {
            self.make(TokenKind::LessEqual)
        } else {
            self.make(TokenKind::Less)
        }
    }

    /// Lexes greater or greater-equal.
    ///
    /// Handles: `>`, `>=`
    pub(super) fn lex_greater(&mut self) -> Token<'a> {
        self.cursor.advance();
        if self.cursor.eat('=') {
            self.make(TokenKind::GreaterEqual)
        } else {
            self.make(TokenKind::Greater)
        }
    }
}
