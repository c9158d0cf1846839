//! Whitespace and comment skipping.

use quill_util::DiagnosticCode;

use crate::Scanner;

impl<'src, 'h> Scanner<'src, 'h> {
    /// Skips spaces, tabs, carriage returns and line feeds.
    pub(crate) fn skip_whitespace(&mut self) {
        self.cursor
            .eat_while(|c| matches!(c, ' ' | '\t' | '\r' | '\n'));
    }

    /// Skips a `--` comment up to, not including, the next line feed.
    pub(crate) fn skip_line_comment(&mut self) {
        self.cursor.eat_while(|c| c != '\n');
    }

    /// Skips a `{- ... -}` block comment.
    ///
    /// Block comments do not nest: the first `-}` closes the comment.
    pub(crate) fn skip_block_comment(&mut self) {
        self.cursor.advance();
        self.cursor.advance();

        loop {
            if self.cursor.is_at_end() {
                let diagnostic = self
                    .error(
                        DiagnosticCode::E_LEXER_UNTERMINATED_COMMENT,
                        "unterminated block comment",
                    )
                    .help("close the comment with `-}`");
                self.report(diagnostic);
                return;
            }

            if self.cursor.current_char() == '-' && self.cursor.peek_char() == '}' {
                self.cursor.advance();
                self.cursor.advance();
                return;
            }

            self.cursor.advance();
        }
    }
}
