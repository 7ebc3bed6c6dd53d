//! Token definitions and the keyword catalog.
//!
//! [`TokenKind`] is the closed set of token classes the scanner produces,
//! [`Token`] pairs a kind with the lexeme it was scanned from, and
//! [`lookup_ident`] decides which spellings are reserved.
//!
//! Kinds carry a stable numeric code (their declaration order) so tools that
//! only have a raw code can still name it with [`token_name`].

use std::fmt;

/// Version of the keyword/token catalog.
///
/// Bumped whenever a kind is added, removed or a reserved spelling changes.
pub const CATALOG_VERSION: u32 = 1;

/// Display name used for numeric codes that do not map to a kind.
pub const UNKNOWN_NAME: &str = "Unknown";

/// Token classes produced by the scanner.
///
/// Declaration order defines the numeric code returned by
/// [`TokenKind::code`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum TokenKind {
    /// Unrecognized character
    Illegal,
    /// End of input
    EndOfInput,

    /// `-- ...`
    Comment,
    /// `-* ... *-`
    CommentBlock,
    /// `true`
    True,
    /// `false`
    False,

    /// Names, numbers and any other unreserved word
    Literal,

    // Keywords
    /// `function`
    Function,
    /// `local`
    Local,
    /// `if`
    If,
    /// `elseif`
    ElseIf,
    /// `else`
    Else,
    /// `while`
    While,
    /// `for`
    For,
    /// `end`
    End,
    /// `then`
    Then,
    /// Reserved, never produced
    Repeat,
    /// `continue`
    Continue,
    /// `break`
    Break,
    /// `in`
    In,
    /// `return`
    Return,
    /// `do`
    Do,

    // Operators
    /// `not`
    Not,
    /// `~=`
    NotEqual,
    /// `or`
    Or,
    /// `>`
    Greater,
    /// `<`
    Less,
    /// `>=`
    GreaterEqual,
    /// `<=`
    LessEqual,
    /// `and`
    And,
    /// `=`
    Assign,
    /// `==`
    Equal,
    /// `+=`
    PlusAssign,
    /// `-=`
    SubAssign,
    /// `*=`
    MultiAssign,
    /// `/=`
    DivAssign,
    /// `%=`
    ModAssign,
    /// `+`
    Plus,
    /// `-`
    Sub,
    /// `*`
    Multi,
    /// `/`
    Div,
    /// `%`
    Mod,
    /// `^`
    Po,
    /// `..`
    Concat,

    // Delimiters
    /// `"..."`, text is the interior
    StringDelim,
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// `{`
    LBrace,
    /// `}`
    RBrace,
    /// `[`
    LBrack,
    /// `]`
    RBrack,
    /// `,`
    Comma,
    /// `;`
    Semi,
    /// `:`
    Colom,
    /// `.`
    Dot,
    /// `...`
    Dots,
    /// `->`
    Arrow,
    /// `?`
    Question,

    // Primitive types, reserved, never produced
    /// `string`
    String,
    /// `int`
    Int,
    /// `bool`
    Bool,
    /// `float`
    Float,
}

impl TokenKind {
    /// Every kind, indexed by its numeric code.
    pub const ALL: [TokenKind; 62] = [
        TokenKind::Illegal,
        TokenKind::EndOfInput,
        TokenKind::Comment,
        TokenKind::CommentBlock,
        TokenKind::True,
        TokenKind::False,
        TokenKind::Literal,
        TokenKind::Function,
        TokenKind::Local,
        TokenKind::If,
        TokenKind::ElseIf,
        TokenKind::Else,
        TokenKind::While,
        TokenKind::For,
        TokenKind::End,
        TokenKind::Then,
        TokenKind::Repeat,
        TokenKind::Continue,
        TokenKind::Break,
        TokenKind::In,
        TokenKind::Return,
        TokenKind::Do,
        TokenKind::Not,
        TokenKind::NotEqual,
        TokenKind::Or,
        TokenKind::Greater,
        TokenKind::Less,
        TokenKind::GreaterEqual,
        TokenKind::LessEqual,
        TokenKind::And,
        TokenKind::Assign,
        TokenKind::Equal,
        TokenKind::PlusAssign,
        TokenKind::SubAssign,
        TokenKind::MultiAssign,
        TokenKind::DivAssign,
        TokenKind::ModAssign,
        TokenKind::Plus,
        TokenKind::Sub,
        TokenKind::Multi,
        TokenKind::Div,
        TokenKind::Mod,
        TokenKind::Po,
        TokenKind::Concat,
        TokenKind::StringDelim,
        TokenKind::LParen,
        TokenKind::RParen,
        TokenKind::LBrace,
        TokenKind::RBrace,
        TokenKind::LBrack,
        TokenKind::RBrack,
        TokenKind::Comma,
        TokenKind::Semi,
        TokenKind::Colom,
        TokenKind::Dot,
        TokenKind::Dots,
        TokenKind::Arrow,
        TokenKind::Question,
        TokenKind::String,
        TokenKind::Int,
        TokenKind::Bool,
        TokenKind::Float,
    ];

    /// Numeric code of this kind.
    #[inline]
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Kind for a numeric code, or `None` if the code is out of range.
    ///
    /// # Example
    ///
    /// ```
    /// use luanova_lex::TokenKind;
    ///
    /// assert_eq!(TokenKind::from_code(TokenKind::Arrow.code()), Some(TokenKind::Arrow));
    /// assert_eq!(TokenKind::from_code(200), None);
    /// ```
    pub fn from_code(code: u8) -> Option<TokenKind> {
        Self::ALL.get(code as usize).copied()
    }

    /// Human-readable name used in diagnostics and test failures.
    pub const fn name(self) -> &'static str {
        match self {
            TokenKind::Illegal => "Illegal",
            TokenKind::EndOfInput => "EndOfInput",
            TokenKind::Comment => "Comment",
            TokenKind::CommentBlock => "CommentBlock",
            TokenKind::True => "True",
            TokenKind::False => "False",
            TokenKind::Literal => "Literal",
            TokenKind::Function => "Function",
            TokenKind::Local => "Local",
            TokenKind::If => "If",
            TokenKind::ElseIf => "ElseIf",
            TokenKind::Else => "Else",
            TokenKind::While => "While",
            TokenKind::For => "For",
            TokenKind::End => "End",
            TokenKind::Then => "Then",
            TokenKind::Repeat => "Repeat",
            TokenKind::Continue => "Continue",
            TokenKind::Break => "Break",
            TokenKind::In => "In",
            TokenKind::Return => "Return",
            TokenKind::Do => "Do",
            TokenKind::Not => "Not",
            TokenKind::NotEqual => "NotEqual",
            TokenKind::Or => "Or",
            TokenKind::Greater => "Greater",
            TokenKind::Less => "Less",
            TokenKind::GreaterEqual => "GreaterEqual",
            TokenKind::LessEqual => "LessEqual",
            TokenKind::And => "And",
            TokenKind::Assign => "Assign",
            TokenKind::Equal => "Equal",
            TokenKind::PlusAssign => "PlusAssign",
            TokenKind::SubAssign => "SubAssign",
            TokenKind::MultiAssign => "MultiAssign",
            TokenKind::DivAssign => "DivAssign",
            TokenKind::ModAssign => "ModAssign",
            TokenKind::Plus => "Plus",
            TokenKind::Sub => "Sub",
            TokenKind::Multi => "Multi",
            TokenKind::Div => "Div",
            TokenKind::Mod => "Mod",
            TokenKind::Po => "Po",
            TokenKind::Concat => "Concat",
            TokenKind::StringDelim => "StringDelim",
            TokenKind::LParen => "LParen",
            TokenKind::RParen => "RParen",
            TokenKind::LBrace => "LBrace",
            TokenKind::RBrace => "RBrace",
            TokenKind::LBrack => "LBrack",
            TokenKind::RBrack => "RBrack",
            TokenKind::Comma => "Comma",
            TokenKind::Semi => "Semi",
            TokenKind::Colom => "Colom",
            TokenKind::Dot => "Dot",
            TokenKind::Dots => "Dots",
            TokenKind::Arrow => "Arrow",
            TokenKind::Question => "Question",
            TokenKind::String => "String",
            TokenKind::Int => "Int",
            TokenKind::Bool => "Bool",
            TokenKind::Float => "Float",
        }
    }

    /// Kinds spelled as reserved words, including the word operators
    /// `and`/`or`/`not` and the reserved `Repeat`.
    pub const fn is_keyword(self) -> bool {
        matches!(
            self,
            TokenKind::True
                | TokenKind::False
                | TokenKind::Function
                | TokenKind::Local
                | TokenKind::If
                | TokenKind::ElseIf
                | TokenKind::Else
                | TokenKind::While
                | TokenKind::For
                | TokenKind::End
                | TokenKind::Then
                | TokenKind::Repeat
                | TokenKind::Continue
                | TokenKind::Break
                | TokenKind::In
                | TokenKind::Return
                | TokenKind::Do
                | TokenKind::Not
                | TokenKind::Or
                | TokenKind::And
        )
    }

    /// Symbolic operators (word operators are keywords).
    pub const fn is_operator(self) -> bool {
        matches!(
            self,
            TokenKind::NotEqual
                | TokenKind::Greater
                | TokenKind::Less
                | TokenKind::GreaterEqual
                | TokenKind::LessEqual
                | TokenKind::Assign
                | TokenKind::Equal
                | TokenKind::PlusAssign
                | TokenKind::SubAssign
                | TokenKind::MultiAssign
                | TokenKind::DivAssign
                | TokenKind::ModAssign
                | TokenKind::Plus
                | TokenKind::Sub
                | TokenKind::Multi
                | TokenKind::Div
                | TokenKind::Mod
                | TokenKind::Po
                | TokenKind::Concat
        )
    }

    /// Punctuation and bracketing kinds.
    pub const fn is_delimiter(self) -> bool {
        matches!(
            self,
            TokenKind::LParen
                | TokenKind::RParen
                | TokenKind::LBrace
                | TokenKind::RBrace
                | TokenKind::LBrack
                | TokenKind::RBrack
                | TokenKind::Comma
                | TokenKind::Semi
                | TokenKind::Colom
                | TokenKind::Dot
                | TokenKind::Dots
                | TokenKind::Arrow
                | TokenKind::Question
        )
    }

    /// Line or block comment.
    pub const fn is_comment(self) -> bool {
        matches!(self, TokenKind::Comment | TokenKind::CommentBlock)
    }

    /// Primitive type kinds reserved for the type-annotation grammar.
    pub const fn is_primitive_type(self) -> bool {
        matches!(
            self,
            TokenKind::String | TokenKind::Int | TokenKind::Bool | TokenKind::Float
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Name for a raw numeric kind code, falling back to [`UNKNOWN_NAME`].
///
/// # Example
///
/// ```
/// use luanova_lex::token::{token_name, TokenKind};
///
/// assert_eq!(token_name(TokenKind::PlusAssign.code()), "PlusAssign");
/// assert_eq!(token_name(250), "Unknown");
/// ```
pub fn token_name(code: u8) -> &'static str {
    TokenKind::from_code(code).map_or(UNKNOWN_NAME, TokenKind::name)
}

/// Reserved spellings and the kinds they resolve to.
pub const KEYWORDS: [(&str, TokenKind); 19] = [
    ("function", TokenKind::Function),
    ("local", TokenKind::Local),
    ("if", TokenKind::If),
    ("else", TokenKind::Else),
    ("elseif", TokenKind::ElseIf),
    ("and", TokenKind::And),
    ("or", TokenKind::Or),
    ("not", TokenKind::Not),
    ("while", TokenKind::While),
    ("for", TokenKind::For),
    ("return", TokenKind::Return),
    ("break", TokenKind::Break),
    ("continue", TokenKind::Continue),
    ("true", TokenKind::True),
    ("false", TokenKind::False),
    ("do", TokenKind::Do),
    ("in", TokenKind::In),
    ("then", TokenKind::Then),
    ("end", TokenKind::End),
];

/// Resolves an identifier spelling to its token kind.
///
/// Reserved spellings map to their keyword kind; everything else, type
/// names included, is a [`TokenKind::Literal`].
///
/// # Example
///
/// ```
/// use luanova_lex::{lookup_ident, TokenKind};
///
/// assert_eq!(lookup_ident("elseif"), TokenKind::ElseIf);
/// assert_eq!(lookup_ident("number"), TokenKind::Literal);
/// ```
pub fn lookup_ident(spelling: &str) -> TokenKind {
    match spelling {
        "function" => TokenKind::Function,
        "local" => TokenKind::Local,
        "if" => TokenKind::If,
        "else" => TokenKind::Else,
        "elseif" => TokenKind::ElseIf,
        "and" => TokenKind::And,
        "or" => TokenKind::Or,
        "not" => TokenKind::Not,
        "while" => TokenKind::While,
        "for" => TokenKind::For,
        "return" => TokenKind::Return,
        "break" => TokenKind::Break,
        "continue" => TokenKind::Continue,
        "true" => TokenKind::True,
        "false" => TokenKind::False,
        "do" => TokenKind::Do,
        "in" => TokenKind::In,
        "then" => TokenKind::Then,
        "end" => TokenKind::End,
        _ => TokenKind::Literal,
    }
}

/// A classified lexeme borrowed from the source buffer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Token<'a> {
    /// Token class
    pub kind: TokenKind,
    /// Lexeme text; string interiors exclude their quotes
    pub text: &'a str,
}

impl<'a> Token<'a> {
    /// Creates a token.
    #[inline]
    pub const fn new(kind: TokenKind, text: &'a str) -> Self {
        Self { kind, text }
    }

    /// The end-of-input token.
    #[inline]
    pub const fn eof() -> Self {
        Self::new(TokenKind::EndOfInput, "")
    }

    /// Returns true for the end-of-input token.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::EndOfInput
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:?}", self.kind, self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_follow_declaration_order() {
        for (index, kind) in TokenKind::ALL.iter().enumerate() {
            assert_eq!(kind.code() as usize, index, "{kind}");
        }
        assert_eq!(TokenKind::Illegal.code(), 0);
        assert_eq!(TokenKind::Float.code(), 61);
    }

    #[test]
    fn test_from_code_round_trip() {
        for kind in TokenKind::ALL {
            assert_eq!(TokenKind::from_code(kind.code()), Some(kind));
        }
        assert_eq!(TokenKind::from_code(62), None);
        assert_eq!(TokenKind::from_code(u8::MAX), None);
    }

    #[test]
    fn test_names_are_unique_and_known() {
        let mut names: Vec<&str> = TokenKind::ALL.iter().map(|k| k.name()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), TokenKind::ALL.len());
        assert!(!names.contains(&UNKNOWN_NAME));
    }

    #[test]
    fn test_token_name_fallback() {
        assert_eq!(token_name(TokenKind::Illegal.code()), "Illegal");
        assert_eq!(token_name(TokenKind::EndOfInput.code()), "EndOfInput");
        assert_eq!(token_name(62), UNKNOWN_NAME);
        assert_eq!(token_name(255), UNKNOWN_NAME);
    }

    #[test]
    fn test_keyword_table_matches_lookup() {
        for (spelling, kind) in KEYWORDS {
            assert_eq!(lookup_ident(spelling), kind, "{spelling}");
            assert!(kind.is_keyword(), "{spelling}");
            assert_ne!(kind.name(), UNKNOWN_NAME);
        }
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        assert_eq!(lookup_ident("If"), TokenKind::Literal);
        assert_eq!(lookup_ident("LOCAL"), TokenKind::Literal);
        assert_eq!(lookup_ident("True"), TokenKind::Literal);
    }

    #[test]
    fn test_type_words_are_literals() {
        for word in ["type", "number", "string", "boolean", "int", "float", "bool", "repeat"] {
            assert_eq!(lookup_ident(word), TokenKind::Literal, "{word}");
        }
    }

    #[test]
    fn test_classification_is_disjoint() {
        for kind in TokenKind::ALL {
            let groups = [
                kind.is_keyword(),
                kind.is_operator(),
                kind.is_delimiter(),
                kind.is_comment(),
                kind.is_primitive_type(),
            ];
            assert!(groups.iter().filter(|g| **g).count() <= 1, "{kind}");
        }
    }

    #[test]
    fn test_token_display() {
        assert_eq!(Token::new(TokenKind::Arrow, "->").to_string(), "Arrow \"->\"");
        assert_eq!(Token::eof().to_string(), "EndOfInput \"\"");
    }

    #[test]
    fn test_token_eof() {
        assert!(Token::eof().is_eof());
        assert!(!Token::new(TokenKind::Literal, "x").is_eof());
    }
}
