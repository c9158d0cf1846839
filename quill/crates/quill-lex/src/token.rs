//! Token type definitions.
//!
//! A [`Token`] pairs a [`TokenKind`] with the exact source text it was
//! scanned from and its location. Kinds are fine-grained: every symbol has
//! its own variant, and literal kinds carry their decoded payload.

use std::fmt;

use num_bigint::BigInt;
use quill_util::Span;

/// How a numeric literal was written
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NumberFormat {
    /// Plain decimal digits, optionally with a fractional part: `42`, `3.5`
    Decimal,
    /// Decimal with an exponent marker: `1e10`, `1.5e-3`
    Exponential,
    /// `0b` / `0B` prefix
    Binary,
    /// `0o` / `0O` prefix
    Octal,
    /// `0x` / `0X` prefix
    Hexadecimal,
}

impl NumberFormat {
    /// Returns the radix the digits of this format are written in
    pub const fn radix(&self) -> u32 {
        match self {
            NumberFormat::Decimal | NumberFormat::Exponential => 10,
            NumberFormat::Binary => 2,
            NumberFormat::Octal => 8,
            NumberFormat::Hexadecimal => 16,
        }
    }

    /// Returns the radix format selected by the letter after a leading `0`
    ///
    /// # Examples
    ///
    /// ```
    /// use quill_lex::NumberFormat;
    ///
    /// assert_eq!(NumberFormat::from_marker('X'), Some(NumberFormat::Hexadecimal));
    /// assert_eq!(NumberFormat::from_marker('e'), None);
    /// ```
    pub fn from_marker(marker: char) -> Option<Self> {
        match marker.to_ascii_lowercase() {
            'b' => Some(NumberFormat::Binary),
            'o' => Some(NumberFormat::Octal),
            'x' => Some(NumberFormat::Hexadecimal),
            _ => None,
        }
    }

    /// Returns the lowercase name of this format
    pub const fn name(&self) -> &'static str {
        match self {
            NumberFormat::Decimal => "decimal",
            NumberFormat::Exponential => "exponential",
            NumberFormat::Binary => "binary",
            NumberFormat::Octal => "octal",
            NumberFormat::Hexadecimal => "hexadecimal",
        }
    }
}

impl fmt::Display for NumberFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Decoded value of a numeric literal
#[derive(Clone, Debug, PartialEq)]
pub enum NumberValue {
    /// Fixed-precision decode
    Float(f64),
    /// Arbitrary-precision decode, selected by the `n` suffix
    BigInt(BigInt),
}

impl fmt::Display for NumberValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumberValue::Float(value) => write!(f, "{}", value),
            NumberValue::BigInt(value) => write!(f, "{}n", value),
        }
    }
}

/// Lexical category of a token
#[derive(Clone, Debug, PartialEq)]
pub enum TokenKind {
    // Single-character punctuation
    /// `(`
    LeftParen,
    /// `)`
    RightParen,
    /// `{`
    LeftBrace,
    /// `}`
    RightBrace,
    /// `,`
    Comma,
    /// `.`
    Dot,
    /// `;`
    Semicolon,

    // One- or two-character operators
    /// `!`
    Bang,
    /// `!=`
    BangEqual,
    /// `=`
    Equal,
    /// `==`
    EqualEqual,
    /// `<`
    Less,
    /// `<=`
    LessEqual,
    /// `>`
    Greater,
    /// `>=`
    GreaterEqual,

    // Arithmetic
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Star,
    /// `/`
    Slash,

    // Literals
    /// Numeric literal with its decoded value and how it was written
    Number {
        /// Decoded value
        value: NumberValue,
        /// Radix or exponent form
        format: NumberFormat,
    },
    /// String literal; the text between the quotes, undecoded
    String(String),

    /// End of input. Always the last token, exactly once.
    Eof,
}

impl TokenKind {
    /// Returns a stable snake-case name for this kind
    ///
    /// # Examples
    ///
    /// ```
    /// use quill_lex::TokenKind;
    ///
    /// assert_eq!(TokenKind::BangEqual.name(), "bang_equal");
    /// assert_eq!(TokenKind::Eof.name(), "eof");
    /// ```
    pub const fn name(&self) -> &'static str {
        match self {
            TokenKind::LeftParen => "left_paren",
            TokenKind::RightParen => "right_paren",
            TokenKind::LeftBrace => "left_brace",
            TokenKind::RightBrace => "right_brace",
            TokenKind::Comma => "comma",
            TokenKind::Dot => "dot",
            TokenKind::Semicolon => "semicolon",
            TokenKind::Bang => "bang",
            TokenKind::BangEqual => "bang_equal",
            TokenKind::Equal => "equal",
            TokenKind::EqualEqual => "equal_equal",
            TokenKind::Less => "less",
            TokenKind::LessEqual => "less_equal",
            TokenKind::Greater => "greater",
            TokenKind::GreaterEqual => "greater_equal",
            TokenKind::Plus => "plus",
            TokenKind::Minus => "minus",
            TokenKind::Star => "star",
            TokenKind::Slash => "slash",
            TokenKind::Number { .. } => "number",
            TokenKind::String(_) => "string",
            TokenKind::Eof => "eof",
        }
    }

    /// Returns true for literal kinds (numbers and strings)
    pub fn is_literal(&self) -> bool {
        matches!(self, TokenKind::Number { .. } | TokenKind::String(_))
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            TokenKind::LeftParen => "(",
            TokenKind::RightParen => ")",
            TokenKind::LeftBrace => "{",
            TokenKind::RightBrace => "}",
            TokenKind::Comma => ",",
            TokenKind::Dot => ".",
            TokenKind::Semicolon => ";",
            TokenKind::Bang => "!",
            TokenKind::BangEqual => "!=",
            TokenKind::Equal => "=",
            TokenKind::EqualEqual => "==",
            TokenKind::Less => "<",
            TokenKind::LessEqual => "<=",
            TokenKind::Greater => ">",
            TokenKind::GreaterEqual => ">=",
            TokenKind::Plus => "+",
            TokenKind::Minus => "-",
            TokenKind::Star => "*",
            TokenKind::Slash => "/",
            TokenKind::Number { .. } => "number",
            TokenKind::String(_) => "string",
            TokenKind::Eof => "end of input",
        };
        f.write_str(text)
    }
}

/// A scanned token
///
/// `lexeme` borrows from the source text. For string literals it excludes
/// the quotes, while `span` still covers them, so consecutive spans tile the
/// source apart from skipped whitespace and comments.
#[derive(Clone, Debug, PartialEq)]
pub struct Token<'src> {
    /// Lexical category and payload
    pub kind: TokenKind,
    /// Exact source text of the token
    pub lexeme: &'src str,
    /// Byte range, line and column of the token's first character
    pub span: Span,
}

impl<'src> Token<'src> {
    /// Create a new token
    pub fn new(kind: TokenKind, lexeme: &'src str, span: Span) -> Self {
        Self { kind, lexeme, span }
    }

    /// Line (1-based) on which the token starts
    pub fn line(&self) -> u32 {
        self.span.line
    }

    /// Column (1-based, in characters) at which the token starts
    pub fn column(&self) -> u32 {
        self.span.column
    }

    /// Returns true for the end-of-input sentinel
    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }
}
