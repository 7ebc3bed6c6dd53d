//! Character classes used by the scanner.

use unicode_general_category::{get_general_category, GeneralCategory};

/// Checks if a character is in one of the Unicode letter categories
/// (`Lu`, `Ll`, `Lt`, `Lm`, `Lo`).
///
/// Letter numbers such as `Ⅻ` and combining marks are not letters, even
/// though both carry the Unicode `Alphabetic` property.
#[inline]
pub fn is_letter(c: char) -> bool {
    if c.is_ascii() {
        return c.is_ascii_alphabetic();
    }
    matches!(
        get_general_category(c),
        GeneralCategory::UppercaseLetter
            | GeneralCategory::LowercaseLetter
            | GeneralCategory::TitlecaseLetter
            | GeneralCategory::ModifierLetter
            | GeneralCategory::OtherLetter
    )
}

/// Checks if a character can start an identifier.
///
/// Any Unicode letter or an underscore.
///
/// # Example
///
/// ```
/// use luanova_lex::unicode::is_ident_start;
///
/// assert!(is_ident_start('a'));
/// assert!(is_ident_start('_'));
/// assert!(is_ident_start('ç'));
/// assert!(!is_ident_start('1'));
/// assert!(!is_ident_start('Ⅻ'));
/// ```
#[inline]
pub fn is_ident_start(c: char) -> bool {
    c == '_' || is_letter(c)
}

/// Checks if a character can continue an identifier.
///
/// Identifier start characters plus ASCII digits. Digits from other scripts
/// are not accepted.
///
/// # Example
///
/// ```
/// use luanova_lex::unicode::is_ident_continue;
///
/// assert!(is_ident_continue('9'));
/// assert!(is_ident_continue('ã'));
/// assert!(!is_ident_continue('-'));
/// assert!(!is_ident_continue('٣'));
/// ```
#[inline]
pub fn is_ident_continue(c: char) -> bool {
    is_ident_start(c) || c.is_ascii_digit()
}

/// Checks if a character is skipped between tokens.
#[inline]
pub fn is_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ident_start() {
        assert!(is_ident_start('Z'));
        assert!(is_ident_start('λ'));
        assert!(!is_ident_start('0'));
        assert!(!is_ident_start('@'));
        assert!(!is_ident_start(' '));
    }

    #[test]
    fn test_letter_categories() {
        // Lu, Ll, Lt, Lm, Lo
        for c in ['Q', 'ß', 'ǅ', 'ʰ', '中'] {
            assert!(is_letter(c), "{c:?} should be a letter");
        }
    }

    #[test]
    fn test_alphabetic_non_letters_rejected() {
        // Nl letter number, Mn combining mark, Mc spacing mark
        for c in ['\u{216B}', '\u{0345}', '\u{0903}'] {
            assert!(c.is_alphabetic());
            assert!(!is_letter(c), "{c:?} should not be a letter");
            assert!(!is_ident_start(c));
            assert!(!is_ident_continue(c));
        }
    }

    #[test]
    fn test_ident_continue() {
        assert!(is_ident_continue('_'));
        assert!(is_ident_continue('0'));
        assert!(!is_ident_continue('.'));
    }

    #[test]
    fn test_whitespace_set() {
        for c in [' ', '\t', '\n', '\r'] {
            assert!(is_whitespace(c));
        }
        // Form feed and vertical tab are not skipped.
        assert!(!is_whitespace('\x0c'));
        assert!(!is_whitespace('\x0b'));
        assert!(!is_whitespace('\u{a0}'));
    }
}
