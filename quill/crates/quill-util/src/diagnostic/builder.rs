//! Diagnostic builder for fluent diagnostic construction.
//!
//! This module provides the [`DiagnosticBuilder`] type for constructing
//! diagnostics with a fluent API, and [`SourceSnippet`] for the annotated
//! source line shown underneath a diagnostic.

use super::{Diagnostic, DiagnosticCode, Handler, Level};
use crate::Span;

/// A source code snippet for display in diagnostics
///
/// Contains one source line with the highlighted column range.
///
/// # Examples
///
/// ```
/// use quill_util::diagnostic::SourceSnippet;
///
/// let snippet = SourceSnippet::new("1 # 2", 1, 3, 4);
/// assert_eq!(snippet.format(1), "1 | 1 # 2\n  |   ^");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceSnippet {
    /// The source line content
    pub line: String,
    /// Line number (1-based)
    pub line_number: usize,
    /// Column where the issue starts (1-based)
    pub start_column: usize,
    /// Column where the issue ends (1-based, exclusive)
    pub end_column: usize,
}

impl SourceSnippet {
    /// Create a new source snippet
    ///
    /// # Arguments
    ///
    /// * `line` - The source line content
    /// * `line_number` - Line number (1-based)
    /// * `start_column` - Column where the issue starts (1-based)
    /// * `end_column` - Column where the issue ends (1-based, exclusive)
    pub fn new(
        line: impl Into<String>,
        line_number: usize,
        start_column: usize,
        end_column: usize,
    ) -> Self {
        Self {
            line: line.into(),
            line_number,
            start_column,
            end_column,
        }
    }

    /// Width of the line-number gutter needed by this snippet
    pub fn gutter_width(&self) -> usize {
        self.line_number.to_string().len()
    }

    /// Format the snippet for display
    ///
    /// Returns the source line prefixed with its line number, right-aligned
    /// in a gutter of `width` columns, followed by a caret line (`^`) under
    /// the highlighted range. Tabs in the source line are mirrored in the
    /// caret line so the carets stay aligned.
    pub fn format(&self, width: usize) -> String {
        let mut result = format!(
            "{:>width$} | {}\n{:>width$} | ",
            self.line_number,
            self.line,
            "",
            width = width
        );

        let underline_start = self.start_column.saturating_sub(1);
        let underline_len = self.end_column.saturating_sub(self.start_column).max(1);

        result.extend(
            self.line
                .chars()
                .chain(std::iter::repeat(' '))
                .take(underline_start)
                .map(|c| if c == '\t' { '\t' } else { ' ' }),
        );
        result.extend(std::iter::repeat('^').take(underline_len));

        result
    }
}

/// Builder for constructing diagnostics with a fluent API
///
/// # Examples
///
/// ```
/// use quill_util::diagnostic::{DiagnosticBuilder, DiagnosticCode, Handler};
/// use quill_util::Span;
///
/// let mut handler = Handler::new();
/// DiagnosticBuilder::error("unknown character `#`")
///     .code(DiagnosticCode::E_LEXER_UNEXPECTED_CHAR)
///     .span(Span::new(2, 3, 1, 3))
///     .help("remove the character")
///     .emit(&mut handler);
///
/// assert_eq!(handler.error_count(), 1);
/// ```
#[derive(Debug)]
#[must_use = "a diagnostic builder does nothing until built or emitted"]
pub struct DiagnosticBuilder {
    level: Level,
    message: String,
    span: Span,
    code: Option<DiagnosticCode>,
    notes: Vec<String>,
    helps: Vec<String>,
}

impl DiagnosticBuilder {
    /// Create a new diagnostic builder
    pub fn new(level: Level, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
            span: Span::DUMMY,
            code: None,
            notes: Vec::new(),
            helps: Vec::new(),
        }
    }

    /// Create an error builder
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(Level::Error, message)
    }

    /// Set the diagnostic code
    pub fn code(mut self, code: DiagnosticCode) -> Self {
        self.code = Some(code);
        self
    }

    /// Set the source span
    pub fn span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }

    /// Add a note to the diagnostic
    ///
    /// Notes provide additional context about the diagnostic.
    pub fn note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    /// Add a help suggestion to the diagnostic
    pub fn help(mut self, help: impl Into<String>) -> Self {
        self.helps.push(help.into());
        self
    }

    /// Build the diagnostic
    pub fn build(self) -> Diagnostic {
        Diagnostic {
            level: self.level,
            message: self.message,
            span: self.span,
            code: self.code,
            notes: self.notes,
            helps: self.helps,
        }
    }

    /// Build the diagnostic and hand it to the handler
    pub fn emit(self, handler: &mut Handler) {
        handler.emit_diagnostic(self.build());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snippet_format_single_caret() {
        let snippet = SourceSnippet::new("1 # 2", 1, 3, 4);
        assert_eq!(snippet.format(1), "1 | 1 # 2\n  |   ^");
    }

    #[test]
    fn test_snippet_format_range() {
        let snippet = SourceSnippet::new("x = 0b2", 12, 5, 7);
        assert_eq!(snippet.gutter_width(), 2);
        assert_eq!(snippet.format(2), "12 | x = 0b2\n   |     ^^");
    }

    #[test]
    fn test_snippet_empty_range_still_has_caret() {
        let snippet = SourceSnippet::new("\"abc", 1, 5, 5);
        assert!(snippet.format(1).ends_with("    ^"));
    }

    #[test]
    fn test_snippet_keeps_tabs_aligned() {
        let snippet = SourceSnippet::new("\t#", 1, 2, 3);
        assert_eq!(snippet.format(1), "1 | \t#\n  | \t^");
    }

    #[test]
    fn test_snippet_wider_gutter() {
        let snippet = SourceSnippet::new("#", 3, 1, 2);
        assert_eq!(snippet.format(3), "  3 | #\n    | ^");
    }

    #[test]
    fn test_builder_build() {
        let span = Span::new(0, 1, 1, 1);
        let diag = DiagnosticBuilder::error("boom")
            .code(DiagnosticCode::E_LEXER_UNEXPECTED_CHAR)
            .span(span)
            .note("n")
            .help("h")
            .build();

        assert_eq!(diag.level, Level::Error);
        assert_eq!(diag.message, "boom");
        assert_eq!(diag.span, span);
        assert_eq!(diag.code, Some(DiagnosticCode::E_LEXER_UNEXPECTED_CHAR));
        assert_eq!(diag.notes, vec!["n"]);
        assert_eq!(diag.helps, vec!["h"]);
    }

    #[test]
    fn test_builder_defaults() {
        let diag = DiagnosticBuilder::error("bare").build();
        assert_eq!(diag.span, Span::DUMMY);
        assert!(diag.code.is_none());
        assert!(diag.notes.is_empty() && diag.helps.is_empty());
    }

    #[test]
    fn test_builder_emit() {
        let mut handler = Handler::new();
        DiagnosticBuilder::error("careful").emit(&mut handler);
        assert_eq!(handler.error_count(), 1);
    }
}
