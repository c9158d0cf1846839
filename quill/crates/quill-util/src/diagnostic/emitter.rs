//! Terminal rendering of diagnostics.
//!
//! The layout follows the usual compiler convention:
//!
//! ```text
//! error[E1001]: unknown character `#`
//!  --> demo.ql:1:3
//!   |
//! 1 | 1 # 2
//!   |   ^
//!   = help: remove the character
//! ```

use super::{ColorConfig, Diagnostic, Level, SourceSnippet};
use crate::SourceFile;

/// ANSI color of the `-->`, `|` and `=` gutter decorations (blue)
const GUTTER_COLOR: &str = "34";

/// Renders diagnostics against the source file they point into
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Emitter {
    color: bool,
}

impl Emitter {
    /// Create an emitter, resolving `config` against whether the output is a terminal
    pub fn new(config: ColorConfig, is_tty: bool) -> Self {
        Self {
            color: config.use_color(is_tty),
        }
    }

    /// Create an emitter that never produces escape sequences
    pub fn plain() -> Self {
        Self { color: false }
    }

    fn paint(&self, text: &str, color: &str, bold: bool) -> String {
        if !self.color {
            return text.to_string();
        }
        let weight = if bold { "1;" } else { "" };
        format!("\x1b[{weight}{color}m{text}\x1b[0m")
    }

    /// Build the snippet for a diagnostic's primary span
    ///
    /// A span that runs past the end of its first line (an unterminated
    /// string, say) is underlined to the end of that line.
    fn primary_snippet(diagnostic: &Diagnostic, source: &SourceFile) -> Option<SourceSnippet> {
        let span = diagnostic.span;
        if span.line == 0 {
            return None;
        }
        let line = source.line_at(span.line as usize)?;
        let start_column = span.column as usize;
        let end = span.end.min(source.content().len());
        let (end_line, end_column) = source.offset_to_line_col(end);
        let end_column = if end_line == span.line as usize {
            end_column
        } else {
            line.chars().count() + 1
        };

        Some(SourceSnippet::new(
            line,
            span.line as usize,
            start_column,
            end_column,
        ))
    }

    /// Render one diagnostic
    pub fn render(&self, diagnostic: &Diagnostic, source: &SourceFile) -> String {
        let level = diagnostic.level;
        let title = match diagnostic.code {
            Some(code) => format!("{}[{}]", level, code),
            None => level.to_string(),
        };

        let mut out = format!(
            "{}{}\n",
            self.paint(&title, level.color_code(), true),
            self.paint(&format!(": {}", diagnostic.message), "0", true),
        );

        let snippet = Self::primary_snippet(diagnostic, source);
        let width = snippet.as_ref().map_or(1, SourceSnippet::gutter_width);

        if diagnostic.span.line > 0 {
            out.push_str(&format!(
                "{:width$}{} {}:{}\n",
                "",
                self.paint("-->", GUTTER_COLOR, true),
                source.name(),
                diagnostic.span,
                width = width
            ));
        }

        if let Some(snippet) = snippet {
            let bar = self.paint("|", GUTTER_COLOR, true);
            out.push_str(&format!("{:width$} {}\n", "", bar, width = width));
            out.push_str(&snippet.format(width));
            out.push('\n');
        }

        let eq = self.paint("=", GUTTER_COLOR, true);
        for note in &diagnostic.notes {
            out.push_str(&format!(
                "{:width$} {} {}: {}\n",
                "",
                eq,
                self.paint(Level::Note.name(), Level::Note.color_code(), true),
                note,
                width = width
            ));
        }
        for help in &diagnostic.helps {
            out.push_str(&format!(
                "{:width$} {} {}: {}\n",
                "",
                eq,
                self.paint(Level::Help.name(), Level::Help.color_code(), true),
                help,
                width = width
            ));
        }

        out
    }

    /// Render every diagnostic, separated by blank lines
    pub fn render_all(&self, diagnostics: &[Diagnostic], source: &SourceFile) -> String {
        diagnostics
            .iter()
            .map(|d| self.render(d, source))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Render the closing lines printed after a file failed to scan
    pub fn render_abort(&self, error_count: usize, file_name: &str) -> String {
        let error = self.paint(Level::Error.name(), Level::Error.color_code(), true);
        let plural = if error_count == 1 { "" } else { "s" };
        format!(
            "{}{}\n\n{}{}\n",
            error,
            self.paint(
                &format!(": aborting due to {} previous error{}", error_count, plural),
                "0",
                true
            ),
            error,
            self.paint(&format!(": could not tokenize `{}`", file_name), "0", true),
        )
    }
}
