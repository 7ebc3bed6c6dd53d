//! Number literal lexing.
//!
//! Numbers are runs of ASCII digits and come out as
//! [`TokenKind::Literal`]. Whether a fractional part is attached depends on
//! [`NumberMode`].

use super::Scanner;
use crate::config::NumberMode;
use crate::token::{Token, TokenKind};

impl<'a> Scanner<'a> {
    /// Lexes a number. The cursor is on the first digit.
    pub(super) fn lex_number(&mut self) -> Token<'a> {
        self.cursor.advance_while(|c| c.is_ascii_digit());

        if self.config.number_mode == NumberMode::Fractional
            && self.cursor.current() == Some('.')
            && self.cursor.peek().is_some_and(|c| c.is_ascii_digit())
        {
            self.cursor.advance();
            self.cursor.advance_while(|c| c.is_ascii_digit());
        }

        self.make(TokenKind::Literal)
    }
}

#[cfg(test)]
mod tests {
    use crate::config::{NumberMode, ScanConfig};
    use crate::token::{Token, TokenKind};
    use crate::Scanner;

    fn lex(source: &str) -> Vec<Token<'_>> {
        Scanner::new(source).scan_all()
    }

    fn lex_fractional(source: &str) -> Vec<Token<'_>> {
        let config = ScanConfig {
            number_mode: NumberMode::Fractional,
            ..ScanConfig::default()
        };
        Scanner::with_config(source, config).scan_all()
    }

    #[test]
    fn test_integers() {
        assert_eq!(
            lex("0 42 007"),
            [
                Token::new(TokenKind::Literal, "0"),
                Token::new(TokenKind::Literal, "42"),
                Token::new(TokenKind::Literal, "007"),
                Token::eof(),
            ]
        );
    }

    #[test]
    fn test_split_mode_breaks_at_dot() {
        assert_eq!(
            lex("123 456.789"),
            [
                Token::new(TokenKind::Literal, "123"),
                Token::new(TokenKind::Literal, "456"),
                Token::new(TokenKind::Dot, "."),
                Token::new(TokenKind::Literal, "789"),
                Token::eof(),
            ]
        );
    }

    #[test]
    fn test_digits_then_letters() {
        let tokens = lex("12abc");
        assert_eq!(tokens[0], Token::new(TokenKind::Literal, "12"));
        assert_eq!(tokens[1], Token::new(TokenKind::Literal, "abc"));
    }

    #[test]
    fn test_fractional_mode_joins_decimal() {
        assert_eq!(
            lex_fractional("123 456.789"),
            [
                Token::new(TokenKind::Literal, "123"),
                Token::new(TokenKind::Literal, "456.789"),
                Token::eof(),
            ]
        );
    }

    #[test]
    fn test_fractional_mode_keeps_concat() {
        assert_eq!(
            lex_fractional("1..2"),
            [
                Token::new(TokenKind::Literal, "1"),
                Token::new(TokenKind::Concat, ".."),
                Token::new(TokenKind::Literal, "2"),
                Token::eof(),
            ]
        );
    }

    #[test]
    fn test_fractional_mode_trailing_dot() {
        assert_eq!(
            lex_fractional("3."),
            [
                Token::new(TokenKind::Literal, "3"),
                Token::new(TokenKind::Dot, "."),
                Token::eof(),
            ]
        );
    }

    #[test]
    fn test_fractional_mode_single_fraction() {
        let tokens = lex_fractional("1.2.3");
        assert_eq!(tokens[0], Token::new(TokenKind::Literal, "1.2"));
        assert_eq!(tokens[1], Token::new(TokenKind::Dot, "."));
        assert_eq!(tokens[2], Token::new(TokenKind::Literal, "3"));
    }

    #[test]
    fn test_leading_dot_is_not_a_number() {
        let tokens = lex_fractional(".5");
        assert_eq!(tokens[0], Token::new(TokenKind::Dot, "."));
        assert_eq!(tokens[1], Token::new(TokenKind::Literal, "5"));
    }
}
