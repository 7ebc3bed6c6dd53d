//! luanova-lex - Lexical front end for the Luanova scripting dialect
//!
//! Luanova is a Lua-family language with optional type annotations
//! (`x: number`, `number?`, `(string) -> boolean`). This crate turns source
//! text into a flat stream of classified tokens for the parser.
//!
//! # Example Usage
//!
//! ```
//! use luanova_lex::{Scanner, TokenKind};
//!
//! let mut scanner = Scanner::new("local f = function(n: number) -> number");
//!
//! // Pull tokens one at a time
//! assert_eq!(scanner.next_token().kind, TokenKind::Local);
//!
//! // Or iterate; iteration stops before the end-of-input token
//! let rest: Vec<TokenKind> = scanner.map(|t| t.kind).collect();
//! assert_eq!(rest.last(), Some(&TokenKind::Literal));
//! ```
//!
//! # Module Structure
//!
//! - [`token`] - token kinds, the keyword catalog and kind names
//! - [`scanner`] - the scanner state machine
//! - [`cursor`] - forward-only character cursor
//! - [`unicode`] - character classes
//! - [`config`] - scanner options and their TOML form
//! - [`error`] - configuration errors
//!
//! # Token Categories
//!
//! **Keywords**: `function local if else elseif and or not while for return
//! break continue true false do in then end`
//!
//! **Literals**: every other word, every digit run, and string interiors
//! (as [`TokenKind::StringDelim`])
//!
//! **Operators**: `+ - * / % ^ .. = == ~= < > <= >= += -= *= /= %=`
//!
//! **Delimiters**: `( ) { } [ ] , ; : . ... -> ?`
//!
//! **Comments**: `-- line` and `-* block *-`, kept as tokens
//!
//! **Special**: end of input, and illegal characters

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod cursor;
pub mod error;
pub mod scanner;
pub mod token;
pub mod unicode;

mod edge_cases;

// Re-export main types for convenience
pub use config::{NumberMode, ScanConfig};
pub use cursor::Cursor;
pub use error::{ConfigError, ConfigResult};
pub use scanner::{tokenize, Scanner};
pub use token::{lookup_ident, token_name, Token, TokenKind, CATALOG_VERSION, KEYWORDS};

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(source: &str) -> Vec<TokenKind> {
        tokenize(source).iter().map(|t| t.kind).collect()
    }

    #[test]
    fn test_operator_precedence_line() {
        let tokens = tokenize("a += 1 - 2 * 3 / 4 % 5 ^ 6");
        let expected = [
            (TokenKind::Literal, "a"),
            (TokenKind::PlusAssign, "+="),
            (TokenKind::Literal, "1"),
            (TokenKind::Sub, "-"),
            (TokenKind::Literal, "2"),
            (TokenKind::Multi, "*"),
            (TokenKind::Literal, "3"),
            (TokenKind::Div, "/"),
            (TokenKind::Literal, "4"),
            (TokenKind::Mod, "%"),
            (TokenKind::Literal, "5"),
            (TokenKind::Po, "^"),
            (TokenKind::Literal, "6"),
            (TokenKind::EndOfInput, ""),
        ];
        assert_eq!(tokens.len(), expected.len());
        for (token, (kind, text)) in tokens.iter().zip(expected) {
            assert_eq!(*token, Token::new(kind, text));
        }
    }

    #[test]
    fn test_comments_keep_markers() {
        let tokens = tokenize("-- line\n-* block *-");
        assert_eq!(
            tokens,
            [
                Token::new(TokenKind::Comment, "-- line"),
                Token::new(TokenKind::CommentBlock, "-* block *-"),
                Token::eof(),
            ]
        );
    }

    #[test]
    fn test_type_annotation_program() {
        let source = "local function test(x: number, y: string): boolean";
        assert_eq!(
            kinds(source),
            [
                TokenKind::Local,
                TokenKind::Function,
                TokenKind::Literal,
                TokenKind::LParen,
                TokenKind::Literal,
                TokenKind::Colom,
                TokenKind::Literal,
                TokenKind::Comma,
                TokenKind::Literal,
                TokenKind::Colom,
                TokenKind::Literal,
                TokenKind::RParen,
                TokenKind::Colom,
                TokenKind::Literal,
                TokenKind::EndOfInput,
            ]
        );
    }

    #[test]
    fn test_function_type_and_optional() {
        assert_eq!(
            kinds("type Callback = (string) -> boolean?"),
            [
                TokenKind::Literal,
                TokenKind::Literal,
                TokenKind::Assign,
                TokenKind::LParen,
                TokenKind::Literal,
                TokenKind::RParen,
                TokenKind::Arrow,
                TokenKind::Literal,
                TokenKind::Question,
                TokenKind::EndOfInput,
            ]
        );
    }

    #[test]
    fn test_illegal_at_sign() {
        assert_eq!(
            tokenize("@"),
            [Token::new(TokenKind::Illegal, "@"), Token::eof()]
        );
    }

    #[test]
    fn test_keyword_catalog_drives_scanner() {
        let source = KEYWORDS.map(|(spelling, _)| spelling).join(" ");
        let mut scanned = kinds(&source);
        assert_eq!(scanned.pop(), Some(TokenKind::EndOfInput));

        let expected: Vec<TokenKind> = KEYWORDS.iter().map(|&(_, kind)| kind).collect();
        assert_eq!(scanned, expected);
        for kind in expected {
            assert!(kind.is_keyword(), "{kind} should classify as a keyword");
            assert_ne!(token_name(kind.code()), "Unknown");
        }
    }
}
