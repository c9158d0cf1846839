//! Operator and punctuation scanning.

use crate::token::{Token, TokenKind};
use crate::Scanner;

impl<'src, 'h> Scanner<'src, 'h> {
    /// Consumes one character and emits `kind`.
    pub(crate) fn single(&mut self, kind: TokenKind) -> Token<'src> {
        self.cursor.advance();
        self.make_token(kind)
    }

    /// Consumes one character, plus `=` if it follows, and emits the matching kind.
    fn with_optional_equal(&mut self, with_equal: TokenKind, alone: TokenKind) -> Token<'src> {
        self.cursor.advance();
        if self.cursor.match_char('=') {
            self.make_token(with_equal)
        } else {
            self.make_token(alone)
        }
    }

    /// Handles: `!`, `!=`
    pub(crate) fn scan_bang(&mut self) -> Token<'src> {
        self.with_optional_equal(TokenKind::BangEqual, TokenKind::Bang)
    }

    /// Handles: `=`, `==`
    pub(crate) fn scan_equal(&mut self) -> Token<'src> {
        self.with_optional_equal(TokenKind::EqualEqual, TokenKind::Equal)
    }

    /// Handles: `<`, `<=`
    pub(crate) fn scan_less(&mut self) -> Token<'src> {
        self.with_optional_equal(TokenKind::LessEqual, TokenKind::Less)
    }

    /// Handles: `>`, `>=`
    pub(crate) fn scan_greater(&mut self) -> Token<'src> {
        self.with_optional_equal(TokenKind::GreaterEqual, TokenKind::Greater)
    }

    pub(crate) fn scan_plus(&mut self) -> Token<'src> {
        self.single(TokenKind::Plus)
    }

    /// Handles `-`, or a `--` line comment which produces no token.
    pub(crate) fn scan_minus(&mut self) -> Option<Token<'src>> {
        if self.cursor.peek_char() == '-' {
            self.skip_line_comment();
            return None;
        }
        Some(self.single(TokenKind::Minus))
    }

    pub(crate) fn scan_star(&mut self) -> Token<'src> {
        self.single(TokenKind::Star)
    }

    pub(crate) fn scan_slash(&mut self) -> Token<'src> {
        self.single(TokenKind::Slash)
    }
}
