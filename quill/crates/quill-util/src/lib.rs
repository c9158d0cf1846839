//! quill-util - Core Utilities and Foundation Types
//!
//! ============================================================================
//! MODULE OVERVIEW
//! ============================================================================
//!
//! Shared infrastructure for the Quill front end. Nothing in here knows about
//! tokens; the scanner and the command-line tool both build on these types.
//!
//! - [`span`] - byte ranges with line/column information, and [`SourceFile`]
//!   for line lookup when rendering diagnostics
//! - [`diagnostic`] - [`Diagnostic`], the [`Handler`] collector, the fluent
//!   [`DiagnosticBuilder`] and the terminal [`Emitter`]
//!
//! DIAGNOSTICS FLOW:
//! -----------------
//! ```text
//! Scanner ──report──▶ DiagnosticBuilder ──emit──▶ Handler (Vec<Diagnostic>)
//!                                                    │
//!                              caller inspects ◀─────┤
//!                                                    ▼
//!                                 Emitter::render(&Diagnostic, &SourceFile)
//! ```
//!
//! The handler is an explicit value owned by the caller. There is no global
//! error sink, so a scan's diagnostics can be asserted on directly in tests.

#![warn(missing_docs)]

pub mod diagnostic;
pub mod span;

pub use diagnostic::{
    ColorConfig, Diagnostic, DiagnosticBuilder, DiagnosticCode, Emitter, Handler, Level,
    SourceSnippet,
};
pub use span::{SourceFile, Span};
