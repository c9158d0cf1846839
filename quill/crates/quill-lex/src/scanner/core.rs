//! Core scanner implementation.
//!
//! This module contains the `Scanner` struct, its character dispatch and the
//! diagnostic plumbing shared by the literal and comment scanners.

use std::iter::FusedIterator;

use quill_util::{Diagnostic, DiagnosticBuilder, DiagnosticCode, Handler, Span};
use tracing::{debug, trace};

use crate::cursor::Cursor;
use crate::token::{Token, TokenKind};

/// Scanner for the Quill scripting language.
///
/// Turns source text into tokens in a single left-to-right pass. Lexical
/// errors are reported to the [`Handler`] and scanning resumes with the next
/// unconsumed character, so a scan always runs to the end of its input and
/// always finishes with exactly one [`TokenKind::Eof`].
///
/// # Example
///
/// ```
/// use quill_lex::{Scanner, TokenKind};
/// use quill_util::Handler;
///
/// let mut handler = Handler::new();
/// let mut scanner = Scanner::new("a", &mut handler);
/// assert_eq!(scanner.next_token().kind, TokenKind::Eof);
/// assert!(handler.has_errors());
/// ```
pub struct Scanner<'src, 'h> {
    /// Character cursor for source traversal.
    pub(crate) cursor: Cursor<'src>,

    /// Collector for lexical errors.
    handler: &'h mut Handler,

    /// Byte offset where the current token starts.
    pub(crate) token_start: usize,

    /// Line number where the current token starts (1-based).
    token_start_line: u32,

    /// Column number where the current token starts (1-based).
    token_start_column: u32,

    /// Tokens produced so far, excluding `Eof`.
    token_count: usize,

    /// Errors reported by this scanner.
    error_count: usize,

    /// Whether `Eof` has been produced.
    finished: bool,
}

impl<'src, 'h> Scanner<'src, 'h> {
    /// Creates a new scanner for the given source text.
    pub fn new(source: &'src str, handler: &'h mut Handler) -> Self {
        Self {
            cursor: Cursor::new(source),
            handler,
            token_start: 0,
            token_start_line: 1,
            token_start_column: 1,
            token_count: 0,
            error_count: 0,
            finished: false,
        }
    }

    /// Scans the whole input, returning every token including the final `Eof`.
    pub fn scan_tokens(self) -> Vec<Token<'src>> {
        self.collect()
    }

    /// Returns the next token.
    ///
    /// Whitespace, comments and malformed input are consumed until a token
    /// can be produced. At the end of input this returns `Eof`, and keeps
    /// returning it on further calls.
    pub fn next_token(&mut self) -> Token<'src> {
        loop {
            self.begin_token();

            if self.cursor.is_at_end() {
                return self.finish();
            }

            if let Some(token) = self.scan_token() {
                self.token_count += 1;
                return token;
            }
        }
    }

    /// Dispatches on the current character.
    ///
    /// Returns `None` when the consumed text produces no token: whitespace,
    /// comments, and anything reported as an error.
    fn scan_token(&mut self) -> Option<Token<'src>> {
        match self.cursor.current_char() {
            '(' => Some(self.single(TokenKind::LeftParen)),
            ')' => Some(self.single(TokenKind::RightParen)),
            '{' if self.cursor.peek_char() == '-' => {
                self.skip_block_comment();
                None
            },
            '{' => Some(self.single(TokenKind::LeftBrace)),
            '}' => Some(self.single(TokenKind::RightBrace)),
            ',' => Some(self.single(TokenKind::Comma)),
            '.' => Some(self.single(TokenKind::Dot)),
            ';' => Some(self.single(TokenKind::Semicolon)),
            '!' => Some(self.scan_bang()),
            '=' => Some(self.scan_equal()),
            '<' => Some(self.scan_less()),
            '>' => Some(self.scan_greater()),
            '+' => Some(self.scan_plus()),
            '-' => self.scan_minus(),
            '*' => Some(self.scan_star()),
            '/' => Some(self.scan_slash()),
            ' ' | '\r' | '\t' | '\n' => {
                self.skip_whitespace();
                None
            },
            '"' => self.scan_string(),
            c if c.is_ascii_digit() => self.scan_number(),
            c => {
                self.cursor.advance();
                let diagnostic = self
                    .error(
                        DiagnosticCode::E_LEXER_UNEXPECTED_CHAR,
                        format!("unknown character `{}`", c.escape_debug()),
                    )
                    .help("remove the character");
                self.report(diagnostic);
                None
            },
        }
    }

    fn begin_token(&mut self) {
        self.token_start = self.cursor.position();
        self.token_start_line = self.cursor.line();
        self.token_start_column = self.cursor.column();
    }

    fn finish(&mut self) -> Token<'src> {
        if !self.finished {
            self.finished = true;
            debug!(
                tokens = self.token_count,
                errors = self.error_count,
                lines = self.cursor.line(),
                "scan complete"
            );
        }
        Token::new(TokenKind::Eof, "", self.token_span())
    }

    /// Span from the start of the current token to the cursor.
    pub(crate) fn token_span(&self) -> Span {
        Span::new(
            self.token_start,
            self.cursor.position(),
            self.token_start_line,
            self.token_start_column,
        )
    }

    /// Builds a token whose lexeme is everything consumed since the token start.
    pub(crate) fn make_token(&self, kind: TokenKind) -> Token<'src> {
        Token::new(kind, self.cursor.slice_from(self.token_start), self.token_span())
    }

    /// Starts an error diagnostic covering the text consumed for the current token.
    pub(crate) fn error(&self, code: DiagnosticCode, message: impl Into<String>) -> DiagnosticBuilder {
        DiagnosticBuilder::error(message)
            .code(code)
            .span(self.token_span())
    }

    /// Records a diagnostic with the handler.
    pub(crate) fn report(&mut self, builder: DiagnosticBuilder) {
        let diagnostic: Diagnostic = builder.build();
        trace!(
            code = ?diagnostic.code,
            line = diagnostic.span.line,
            column = diagnostic.span.column,
            "{}",
            diagnostic.message
        );
        self.error_count += 1;
        self.handler.emit_diagnostic(diagnostic);
    }

    /// Reports an error with no extra notes.
    pub(crate) fn report_error(&mut self, code: DiagnosticCode, message: impl Into<String>) {
        let diagnostic = self.error(code, message);
        self.report(diagnostic);
    }

    /// Returns the current line number (1-based).
    pub fn line(&self) -> u32 {
        self.cursor.line()
    }

    /// Returns the current column number (1-based).
    pub fn column(&self) -> u32 {
        self.cursor.column()
    }

    /// Returns the current byte position in the source.
    pub fn position(&self) -> usize {
        self.cursor.position()
    }
}

impl<'src, 'h> Iterator for Scanner<'src, 'h> {
    type Item = Token<'src>;

    /// Yields every token, `Eof` included, then `None`.
    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        Some(self.next_token())
    }
}

impl FusedIterator for Scanner<'_, '_> {}
