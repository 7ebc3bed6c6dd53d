//! Scanner module.
//!
//! The scanner implementation is split by token category:
//! - `core` - Scanner struct, whitespace skipping and dispatch
//! - `operator` - operators and single-character delimiters
//! - `comment` - `--` line comments and `-* *-` block comments
//! - `string` - double-quoted string literals
//! - `number` - digit runs
//! - `identifier` - names and reserved words

mod comment;
mod core;
mod identifier;
mod number;
mod operator;
mod string;

pub use self::core::Scanner;

use crate::token::Token;

/// Scans `source` to completion with the default configuration.
///
/// The returned vector always ends with exactly one
/// [`TokenKind::EndOfInput`](crate::TokenKind::EndOfInput) token.
///
/// # Example
///
/// ```
/// use luanova_lex::{tokenize, TokenKind};
///
/// let kinds: Vec<TokenKind> = tokenize("x ~= nil").iter().map(|t| t.kind).collect();
/// assert_eq!(
///     kinds,
///     [TokenKind::Literal, TokenKind::NotEqual, TokenKind::Literal, TokenKind::EndOfInput]
/// );
/// ```
pub fn tokenize(source: &str) -> Vec<Token<'_>> {
    Scanner::new(source).scan_all()
}
