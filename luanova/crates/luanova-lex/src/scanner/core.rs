//! Core scanner implementation.
//!
//! This module contains the Scanner struct, whitespace skipping and the
//! first-character dispatch.

use std::iter::FusedIterator;

use luanova_util::{DiagnosticBuilder, DiagnosticCode, Handler, Span};
use tracing::{debug, trace};

use crate::config::ScanConfig;
use crate::cursor::Cursor;
use crate::token::{Token, TokenKind};
use crate::unicode::{is_ident_start, is_whitespace};

/// Scanner for Luanova source text.
///
/// Produces one [`Token`] per [`next_token`](Scanner::next_token) call and
/// never fails: characters it does not recognize come back as
/// [`TokenKind::Illegal`] tokens. Once the input is exhausted every further
/// call returns an [`TokenKind::EndOfInput`] token with empty text.
///
/// # Example
///
/// ```
/// use luanova_lex::{Scanner, TokenKind};
///
/// let mut scanner = Scanner::new("local x: number? = 1");
/// assert_eq!(scanner.next_token().kind, TokenKind::Local);
/// assert_eq!(scanner.next_token().text, "x");
/// assert_eq!(scanner.next_token().kind, TokenKind::Colom);
/// ```
pub struct Scanner<'a> {
    /// Character cursor for source traversal.
    pub(super) cursor: Cursor<'a>,

    /// Scanning options.
    pub(super) config: ScanConfig,

    /// Optional sink for diagnostics about malformed input.
    handler: Option<&'a Handler>,

    /// Byte offset where the current token starts.
    pub(super) token_start: usize,

    /// Byte offset just past the most recently returned token.
    token_end: usize,
}

impl<'a> Scanner<'a> {
    /// Creates a scanner with the default configuration.
    pub fn new(source: &'a str) -> Self {
        Self::with_config(source, ScanConfig::default())
    }

    /// Creates a scanner with explicit options.
    pub fn with_config(source: &'a str, config: ScanConfig) -> Self {
        Self {
            cursor: Cursor::new(source),
            config,
            handler: None,
            token_start: 0,
            token_end: 0,
        }
    }

    /// Creates a scanner that also reports malformed input to `handler`.
    ///
    /// The token stream is identical to the one produced without a handler.
    ///
    /// # Example
    ///
    /// ```
    /// use luanova_lex::{ScanConfig, Scanner, TokenKind};
    /// use luanova_util::Handler;
    ///
    /// let handler = Handler::new();
    /// let mut scanner = Scanner::with_handler("\"open", ScanConfig::default(), &handler);
    /// assert_eq!(scanner.next_token().kind, TokenKind::StringDelim);
    /// assert_eq!(handler.error_count(), 1);
    /// ```
    pub fn with_handler(source: &'a str, config: ScanConfig, handler: &'a Handler) -> Self {
        Self {
            handler: Some(handler),
            ..Self::with_config(source, config)
        }
    }

    /// Returns the options this scanner was built with.
    pub fn config(&self) -> &ScanConfig {
        &self.config
    }

    /// Returns the next token from the source.
    ///
    /// Skips whitespace, then dispatches on the current character.
    pub fn next_token(&mut self) -> Token<'a> {
        self.skip_whitespace();

        self.token_start = self.cursor.position();
        let token = self.scan_token();
        self.token_end = self.cursor.position();

        trace!(
            kind = %token.kind,
            start = self.token_start,
            end = self.token_end,
            "scanned token"
        );
        token
    }

    /// Byte range of the lexeme behind the most recently returned token.
    ///
    /// For strings this includes the quotes; for end of input it is empty.
    pub fn token_span(&self) -> Span {
        Span::new(self.token_start, self.token_end)
    }

    /// Consumes the scanner, returning every remaining token up to and
    /// including the end-of-input token.
    pub fn scan_all(mut self) -> Vec<Token<'a>> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token();
            let done = token.is_eof();
            tokens.push(token);
            if done {
                return tokens;
            }
        }
    }

    fn skip_whitespace(&mut self) {
        self.cursor.advance_while(is_whitespace);
    }

    fn scan_token(&mut self) -> Token<'a> {
        let Some(c) = self.cursor.current() else {
            return Token::eof();
        };

        match c {
            '(' => self.single(TokenKind::LParen),
            ')' => self.single(TokenKind::RParen),
            '{' => self.single(TokenKind::LBrace),
            '}' => self.single(TokenKind::RBrace),
            '[' => self.single(TokenKind::LBrack),
            ']' => self.single(TokenKind::RBrack),
            ',' => self.single(TokenKind::Comma),
            ':' => self.single(TokenKind::Colom),
            ';' => self.single(TokenKind::Semi),
            '?' => self.single(TokenKind::Question),
            '^' => self.single(TokenKind::Po),
            '+' => self.lex_plus(),
            '-' => self.lex_minus(),
            '*' => self.lex_star(),
            '/' => self.lex_slash(),
            '%' => self.lex_percent(),
            '.' => self.lex_dot(),
            '=' => self.lex_equals(),
            '~' => self.lex_tilde(),
            '<' => self.lex_less(),
            '>' => self.lex_greater(),
            '"' => self.lex_string(),
            c if is_ident_start(c) => self.lex_identifier(),
            c if c.is_ascii_digit() => self.lex_number(),
            _ => self.lex_illegal(),
        }
    }

    /// Builds a token whose text runs from the token start to the cursor.
    pub(super) fn make(&self, kind: TokenKind) -> Token<'a> {
        Token::new(kind, self.cursor.slice_from(self.token_start))
    }

    /// Consumes one character and emits it as `kind`.
    pub(super) fn single(&mut self, kind: TokenKind) -> Token<'a> {
        self.cursor.advance();
        self.make(kind)
    }

    /// Consumes one character and emits it as an illegal token.
    pub(super) fn lex_illegal(&mut self) -> Token<'a> {
        self.cursor.advance();
        let token = self.make(TokenKind::Illegal);
        debug!(text = token.text, offset = self.token_start, "illegal character");
        self.report(|| {
            let diag = DiagnosticBuilder::error(format!("unexpected character '{}'", token.text))
                .code(DiagnosticCode::E_LEXER_UNEXPECTED_CHAR);
            if token.text == "~" {
                diag.help("use `~=` for not-equal")
            } else {
                diag
            }
        });
        token
    }

    /// Reports an error spanning the current token, if a handler is attached.
    ///
    /// `build` runs only when there is a handler to receive the result.
    pub(super) fn report(&self, build: impl FnOnce() -> DiagnosticBuilder) {
        let Some(handler) = self.handler else {
            return;
        };
        build()
            .span(Span::new(self.token_start, self.cursor.position()))
            .emit(handler);
    }
}

impl<'a> Iterator for Scanner<'a> {
    type Item = Token<'a>;

    /// Yields tokens until end of input; the end-of-input token itself is
    /// not yielded.
    fn next(&mut self) -> Option<Self::Item> {
        let token = self.next_token();
        if token.is_eof() {
            None
        } else {
            Some(token)
        }
    }
}

impl FusedIterator for Scanner<'_> {}
