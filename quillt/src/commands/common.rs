//! Common types and utilities for quillt commands.
//!
//! Shared by every subcommand: source loading, diagnostic output and the
//! token listing formats.

use std::io::IsTerminal;
use std::path::Path;

use quill_lex::{Token, TokenKind};
use quill_util::{ColorConfig, Emitter, Handler, SourceFile};
use serde::Serialize;

use crate::error::{QuilltError, Result};

// ============================================================================
// Output Format
// ============================================================================

/// Supported token listing formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// One token per line
    Text,
    /// A JSON array of token records
    Json,
}

impl OutputFormat {
    /// Parse a format name, ignoring case.
    pub fn parse(name: &str) -> Result<Self> {
        match name.to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(QuilltError::Validation(format!(
                "{}: {} (expected text or json)",
                error_messages::UNKNOWN_FORMAT,
                name
            ))),
        }
    }
}

// ============================================================================
// Token Records
// ============================================================================

/// Serializable view of a token.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TokenRecord {
    /// Snake-case kind name
    pub kind: &'static str,
    /// Source text of the token
    pub lexeme: String,
    /// Line (1-based)
    pub line: u32,
    /// Column (1-based)
    pub column: u32,
    /// Decoded numeric value
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    /// Numeric format name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<&'static str>,
}

impl From<&Token<'_>> for TokenRecord {
    fn from(token: &Token<'_>) -> Self {
        let (value, format) = match &token.kind {
            TokenKind::Number { value, format } => (Some(value.to_string()), Some(format.name())),
            _ => (None, None),
        };
        Self {
            kind: token.kind.name(),
            lexeme: token.lexeme.to_string(),
            line: token.line(),
            column: token.column(),
            value,
            format,
        }
    }
}

impl TokenRecord {
    /// Render as one line of the text listing: `line:column  kind  lexeme  value`.
    pub fn to_text(&self) -> String {
        let mut line = format!(
            "{}:{}  {}  {:?}",
            self.line, self.column, self.kind, self.lexeme
        );
        if let (Some(value), Some(format)) = (&self.value, self.format) {
            line.push_str(&format!("  {} ({})", value, format));
        }
        line
    }
}

// ============================================================================
// Source and Diagnostics
// ============================================================================

/// Read a source file, checking that it exists and is a file.
pub fn read_source(path: &Path) -> Result<SourceFile> {
    if !path.exists() {
        return Err(QuilltError::Validation(format!(
            "{}: {}",
            error_messages::INPUT_PATH_NOT_EXIST,
            path.display()
        )));
    }
    if !path.is_file() {
        return Err(QuilltError::Validation(format!(
            "{}: {}",
            error_messages::INPUT_PATH_NOT_FILE,
            path.display()
        )));
    }

    let content = std::fs::read_to_string(path)?;
    Ok(SourceFile::new(path.display().to_string(), content))
}

/// Create an emitter for stderr.
pub fn stderr_emitter(color: ColorConfig) -> Emitter {
    Emitter::new(color, std::io::stderr().is_terminal())
}

/// Render every collected diagnostic to stderr.
pub fn print_diagnostics(emitter: &Emitter, handler: &Handler, source: &SourceFile) {
    if handler.diagnostics().is_empty() {
        return;
    }
    eprint!("{}", emitter.render_all(handler.diagnostics(), source));
}

// ============================================================================
// Error Messages
// ============================================================================

/// Standard error message templates.
pub mod error_messages {
    /// Error when no input files are specified.
    pub const NO_INPUT_FILES: &str = "No input files specified";

    /// Error when input path does not exist.
    pub const INPUT_PATH_NOT_EXIST: &str = "Input path does not exist";

    /// Error when input path is not a file.
    pub const INPUT_PATH_NOT_FILE: &str = "Input path is not a file";

    /// Error when an unknown format is specified.
    pub const UNKNOWN_FORMAT: &str = "Unknown format";
}
