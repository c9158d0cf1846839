//! Source files and line/column lookup.
//!
//! [`SourceFile`] keeps a precomputed table of line start offsets so that
//! diagnostics can recover the source line a span points into.

use std::sync::Arc;

/// A source file with its content and metadata
///
/// # Examples
///
/// ```
/// use quill_util::span::SourceFile;
///
/// let file = SourceFile::new("main.ql", "1 + 2");
/// assert_eq!(file.name(), "main.ql");
/// assert_eq!(file.content(), "1 + 2");
/// ```
#[derive(Clone)]
pub struct SourceFile {
    /// File name (path or display name)
    name: String,
    /// File content
    content: Arc<str>,
    /// Precomputed line start offsets
    line_starts: Arc<[usize]>,
}

impl SourceFile {
    /// Create a new source file
    ///
    /// # Arguments
    ///
    /// * `name` - File name or path, used when rendering locations
    /// * `content` - File content
    pub fn new(name: impl Into<String>, content: impl Into<Arc<str>>) -> Self {
        let content = content.into();
        let line_starts = Self::line_starts(&content);
        Self {
            name: name.into(),
            content,
            line_starts,
        }
    }

    /// Compute line start offsets from content
    fn line_starts(content: &str) -> Arc<[usize]> {
        let mut line_starts = vec![0];
        line_starts.extend(
            content
                .bytes()
                .enumerate()
                .filter(|&(_, b)| b == b'\n')
                .map(|(i, _)| i + 1),
        );
        line_starts.into()
    }

    /// Get the file name
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the file content
    #[inline]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Get the total number of lines
    ///
    /// An empty file, and a file without a trailing newline, still count
    /// their last (possibly empty) line.
    ///
    /// # Examples
    ///
    /// ```
    /// use quill_util::span::SourceFile;
    ///
    /// let file = SourceFile::new("main.ql", "1\n2\n3");
    /// assert_eq!(file.line_count(), 3);
    /// ```
    #[inline]
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Get the byte offset where a line starts (0-indexed line number)
    ///
    /// Returns `None` if the line number is out of bounds.
    #[inline]
    pub fn line_start(&self, line: usize) -> Option<usize> {
        self.line_starts.get(line).copied()
    }

    /// Convert a byte offset to (line, column) coordinates
    ///
    /// Line and column are 1-indexed. Column is measured in characters from
    /// the start of the line, matching the scanner's column tracking.
    ///
    /// # Examples
    ///
    /// ```
    /// use quill_util::span::SourceFile;
    ///
    /// let file = SourceFile::new("main.ql", "1 +\n 22");
    /// assert_eq!(file.offset_to_line_col(2), (1, 3));
    /// assert_eq!(file.offset_to_line_col(5), (2, 2));
    /// ```
    pub fn offset_to_line_col(&self, offset: usize) -> (usize, usize) {
        let line = match self.line_starts.binary_search(&offset) {
            Ok(line) => line,
            // line_starts[0] == 0, so insert_point is never 0
            Err(insert_point) => insert_point.saturating_sub(1),
        };
        let line_start = self.line_starts[line];
        let column = match self.content.get(line_start..offset) {
            Some(prefix) => prefix.chars().count(),
            None => offset.saturating_sub(line_start),
        };
        (line + 1, column + 1)
    }

    /// Get a specific source line (1-indexed), without its line terminator
    ///
    /// # Examples
    ///
    /// ```
    /// use quill_util::span::SourceFile;
    ///
    /// let file = SourceFile::new("main.ql", "one\r\ntwo\nthree");
    /// assert_eq!(file.line_at(1), Some("one"));
    /// assert_eq!(file.line_at(3), Some("three"));
    /// assert_eq!(file.line_at(4), None);
    /// ```
    pub fn line_at(&self, line: usize) -> Option<&str> {
        if line == 0 {
            return None;
        }
        let start = self.line_start(line - 1)?;
        let end = self.line_start(line).unwrap_or(self.content.len());

        let line_content = self.content.get(start..end)?;
        Some(line_content.trim_end_matches(['\n', '\r']))
    }
}

impl std::fmt::Debug for SourceFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SourceFile")
            .field("name", &self.name)
            .field("line_count", &self.line_count())
            .finish()
    }
}
