//! Diagnostic module - Error reporting infrastructure.
//!
//! This module provides types for creating, collecting, and rendering
//! diagnostics (errors with their notes and help messages).
//!
//! # Examples
//!
//! ```
//! use quill_util::diagnostic::{DiagnosticBuilder, DiagnosticCode, Handler};
//! use quill_util::Span;
//!
//! let mut handler = Handler::new();
//! DiagnosticBuilder::error("unterminated string literal")
//!     .code(DiagnosticCode::E_LEXER_UNTERMINATED_STRING)
//!     .span(Span::new(0, 4, 1, 1))
//!     .emit(&mut handler);
//!
//! if handler.has_errors() {
//!     eprintln!("scan failed with {} errors", handler.error_count());
//! }
//! ```

mod builder;
mod codes;
mod emitter;
mod level;

pub use builder::{DiagnosticBuilder, SourceSnippet};
pub use codes::DiagnosticCode;
pub use emitter::Emitter;
pub use level::{ColorConfig, Level};

use crate::Span;

/// A diagnostic message with severity and location
///
/// Diagnostics are assembled with [`DiagnosticBuilder`].
///
/// # Examples
///
/// ```
/// use quill_util::diagnostic::{DiagnosticBuilder, Level};
/// use quill_util::Span;
///
/// let diag = DiagnosticBuilder::error("something went wrong")
///     .span(Span::new(0, 1, 1, 1))
///     .build();
/// assert_eq!(diag.level, Level::Error);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Diagnostic {
    /// Diagnostic severity level
    pub level: Level,
    /// Main diagnostic message
    pub message: String,
    /// Source location
    pub span: Span,
    /// Optional diagnostic code
    pub code: Option<DiagnosticCode>,
    /// Additional notes for context
    pub notes: Vec<String>,
    /// Help suggestions for fixing the issue
    pub helps: Vec<String>,
}

/// Collector for diagnostics
///
/// The `Handler` is passed by `&mut` into whatever produces diagnostics and
/// owned by the caller afterwards, who decides whether the output can be
/// trusted.
///
/// # Examples
///
/// ```
/// use quill_util::diagnostic::{DiagnosticBuilder, Handler};
/// use quill_util::Span;
///
/// let mut handler = Handler::new();
/// DiagnosticBuilder::error("unknown character `#`")
///     .span(Span::new(0, 1, 1, 1))
///     .emit(&mut handler);
///
/// assert!(handler.has_errors());
/// assert_eq!(handler.diagnostics().len(), 1);
/// ```
#[derive(Clone, Debug, Default)]
pub struct Handler {
    /// Collected diagnostics, in emission order
    diagnostics: Vec<Diagnostic>,
}

impl Handler {
    /// Create a new, empty handler
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a diagnostic
    pub fn emit_diagnostic(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    /// Check if any errors have been reported
    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(|d| d.level.is_error())
    }

    /// Get the number of errors
    pub fn error_count(&self) -> usize {
        self.diagnostics.iter().filter(|d| d.level.is_error()).count()
    }

    /// Get all diagnostics, in emission order
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }
}
