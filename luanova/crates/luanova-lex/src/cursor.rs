//! Character cursor for traversing source code.
//!
//! The cursor holds the current character and the offset of the one after
//! it, so the scanner can decide every token with one character of
//! lookahead plus a single [`Cursor::peek`].

/// A forward-only cursor over UTF-8 source text.
///
/// `current` is the character at `position`, or `None` once the cursor has
/// passed the last character. `None` is distinct from every source character,
/// NUL included.
///
/// # Example
///
/// ```
/// use luanova_lex::cursor::Cursor;
///
/// let mut cursor = Cursor::new("x=1");
/// assert_eq!(cursor.current(), Some('x'));
/// assert_eq!(cursor.peek(), Some('='));
/// cursor.advance();
/// assert!(cursor.eat('='));
/// assert_eq!(cursor.current(), Some('1'));
/// ```
#[derive(Clone, Debug)]
pub struct Cursor<'a> {
    /// The source text being traversed.
    source: &'a str,

    /// Byte offset of `current`.
    position: usize,

    /// Byte offset of the character after `current`.
    next_position: usize,

    /// Character at `position`, `None` past the end.
    current: Option<char>,
}

impl<'a> Cursor<'a> {
    /// Creates a cursor positioned on the first character of `source`.
    pub fn new(source: &'a str) -> Self {
        let current = source.chars().next();
        Self {
            source,
            position: 0,
            next_position: current.map_or(1, char::len_utf8),
            current,
        }
    }

    /// Returns the current character, or `None` at end of input.
    #[inline]
    pub fn current(&self) -> Option<char> {
        self.current
    }

    /// Returns the character after the current one without consuming it.
    #[inline]
    pub fn peek(&self) -> Option<char> {
        self.source
            .get(self.next_position..)
            .and_then(|rest| rest.chars().next())
    }

    /// Byte offset of the current character.
    #[inline]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Moves to the next character. Does nothing at end of input.
    #[inline]
    pub fn advance(&mut self) {
        if self.current.is_none() {
            return;
        }
        self.position = self.next_position;
        self.current = self.source[self.position..].chars().next();
        self.next_position = self.position + self.current.map_or(1, char::len_utf8);
    }

    /// Consumes the current character if it equals `expected`.
    #[inline]
    pub fn eat(&mut self, expected: char) -> bool {
        if self.current == Some(expected) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Advances while `predicate` holds for the current character.
    pub fn advance_while(&mut self, mut predicate: impl FnMut(char) -> bool) {
        while let Some(c) = self.current {
            if !predicate(c) {
                break;
            }
            self.advance();
        }
    }

    /// Source text from `start` up to the current position.
    #[inline]
    pub fn slice_from(&self, start: usize) -> &'a str {
        &self.source[start..self.position]
    }
}
