//! String literal scanning.

use quill_util::DiagnosticCode;

use crate::token::{Token, TokenKind};
use crate::Scanner;

impl<'src, 'h> Scanner<'src, 'h> {
    /// Scans a string literal enclosed in double quotes.
    ///
    /// Strings may span lines. A backslash keeps the following character in
    /// the literal (so `\"` does not close it) but escapes are not decoded:
    /// the payload is the raw text between the quotes.
    ///
    /// Returns `None` after reporting an error if the input ends first.
    pub(crate) fn scan_string(&mut self) -> Option<Token<'src>> {
        self.cursor.advance();
        let content_start = self.cursor.position();

        loop {
            if self.cursor.is_at_end() {
                let diagnostic = self
                    .error(
                        DiagnosticCode::E_LEXER_UNTERMINATED_STRING,
                        "unterminated string literal",
                    )
                    .help("add a closing `\"`");
                self.report(diagnostic);
                return None;
            }

            match self.cursor.current_char() {
                '"' => break,
                '\\' => {
                    self.cursor.advance();
                    self.cursor.advance();
                },
                _ => self.cursor.advance(),
            }
        }

        let content = self.cursor.slice(content_start, self.cursor.position());
        self.cursor.advance();

        Some(Token::new(
            TokenKind::String(content.to_string()),
            content,
            self.token_span(),
        ))
    }
}
