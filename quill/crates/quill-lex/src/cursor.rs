//! Character cursor for traversing source text.
//!
//! This module provides the `Cursor` struct which maintains position state
//! while iterating through source characters. It steps over multi-byte UTF-8
//! characters as a single character and tracks line/column information for
//! diagnostics.

/// A cursor for traversing source text character by character.
///
/// # Example
///
/// ```
/// use quill_lex::cursor::Cursor;
///
/// let mut cursor = Cursor::new("1 + 2");
///
/// assert_eq!(cursor.current_char(), '1');
/// cursor.advance();
/// assert_eq!(cursor.current_char(), ' ');
/// ```
#[derive(Clone, Debug)]
pub struct Cursor<'src> {
    /// The source text being traversed.
    source: &'src str,

    /// Current byte position in the source.
    position: usize,

    /// Current line number (1-based).
    line: u32,

    /// Current column number (1-based, in characters).
    column: u32,
}

impl<'src> Cursor<'src> {
    /// Creates a new cursor positioned at the first character of `source`.
    pub fn new(source: &'src str) -> Self {
        Self {
            source,
            position: 0,
            line: 1,
            column: 1,
        }
    }

    /// Returns the character at the cursor position.
    ///
    /// Returns '\0' if at the end of the source.
    ///
    /// # Example
    ///
    /// ```
    /// use quill_lex::cursor::Cursor;
    ///
    /// let cursor = Cursor::new("abc");
    /// assert_eq!(cursor.current_char(), 'a');
    /// assert_eq!(Cursor::new("").current_char(), '\0');
    /// ```
    #[inline]
    pub fn current_char(&self) -> char {
        self.char_at(self.position)
    }

    /// Returns the character after the current one, or '\0' past the end.
    ///
    /// # Example
    ///
    /// ```
    /// use quill_lex::cursor::Cursor;
    ///
    /// let cursor = Cursor::new("ab");
    /// assert_eq!(cursor.peek_char(), 'b');
    /// assert_eq!(Cursor::new("a").peek_char(), '\0');
    /// ```
    #[inline]
    pub fn peek_char(&self) -> char {
        if self.is_at_end() {
            return '\0';
        }
        self.char_at(self.position + self.current_char().len_utf8())
    }

    #[inline]
    fn char_at(&self, pos: usize) -> char {
        if pos >= self.source.len() {
            return '\0';
        }

        // Fast path for ASCII
        let b = self.source.as_bytes()[pos];
        if b < 128 {
            return b as char;
        }

        self.source[pos..].chars().next().unwrap_or('\0')
    }

    /// Advances the cursor to the next character.
    ///
    /// Consuming a `\n` moves to column 1 of the next line. Does nothing if
    /// already at end.
    #[inline]
    pub fn advance(&mut self) {
        if self.is_at_end() {
            return;
        }

        let c = self.current_char();
        self.position += c.len_utf8();
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
    }

    /// Returns true if the cursor is at the end of the source.
    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.position >= self.source.len()
    }

    /// Consumes the current character if it equals `expected`.
    ///
    /// # Example
    ///
    /// ```
    /// use quill_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("==");
    /// assert!(cursor.match_char('='));
    /// assert!(cursor.match_char('='));
    /// assert!(!cursor.match_char('='));
    /// ```
    pub fn match_char(&mut self, expected: char) -> bool {
        if !self.is_at_end() && self.current_char() == expected {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Consumes characters while `predicate` holds, returning how many were consumed.
    ///
    /// # Example
    ///
    /// ```
    /// use quill_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("123abc");
    /// assert_eq!(cursor.eat_while(|c| c.is_ascii_digit()), 3);
    /// assert_eq!(cursor.current_char(), 'a');
    /// ```
    pub fn eat_while(&mut self, mut predicate: impl FnMut(char) -> bool) -> usize {
        let mut count = 0;
        while !self.is_at_end() && predicate(self.current_char()) {
            self.advance();
            count += 1;
        }
        count
    }

    /// Returns the current line number (1-based).
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Returns the current column number (1-based).
    pub fn column(&self) -> u32 {
        self.column
    }

    /// Returns the current byte position in the source.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Returns the source text from `start` up to the current position.
    ///
    /// # Example
    ///
    /// ```
    /// use quill_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("0x1A;");
    /// let start = cursor.position();
    /// cursor.eat_while(|c| c != ';');
    /// assert_eq!(cursor.slice_from(start), "0x1A");
    /// ```
    pub fn slice_from(&self, start: usize) -> &'src str {
        &self.source[start..self.position]
    }

    /// Returns the source text between two byte offsets.
    pub fn slice(&self, start: usize, end: usize) -> &'src str {
        &self.source[start..end]
    }

    /// Returns the source text from the current position to the end.
    pub fn remaining(&self) -> &'src str {
        &self.source[self.position..]
    }
}
