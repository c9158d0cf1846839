//! Diagnostic severity levels and color configuration.
//!
//! # Examples
//!
//! ```
//! use quill_util::diagnostic::{ColorConfig, Level};
//!
//! assert!(Level::Error.is_error());
//! assert!(!ColorConfig::Never.use_color(true));
//! ```

use std::fmt;

/// Diagnostic severity level
///
/// Scanner problems are always errors; notes and help lines hang off an
/// error and are rendered in their own color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Level {
    /// An error: the offending input produced no token
    Error,
    /// Additional information about a diagnostic
    Note,
    /// A suggestion for fixing an issue
    Help,
}

impl Level {
    /// Returns true if this level represents an error
    #[inline]
    pub const fn is_error(&self) -> bool {
        matches!(self, Level::Error)
    }

    /// Returns the canonical name for this level
    ///
    /// # Examples
    ///
    /// ```
    /// use quill_util::diagnostic::Level;
    ///
    /// assert_eq!(Level::Error.name(), "error");
    /// assert_eq!(Level::Help.name(), "help");
    /// ```
    #[inline]
    pub const fn name(&self) -> &'static str {
        match self {
            Level::Error => "error",
            Level::Note => "note",
            Level::Help => "help",
        }
    }

    /// Returns the ANSI color code for this level
    #[inline]
    pub const fn color_code(&self) -> &'static str {
        match self {
            Level::Error => "31",   // Red
            Level::Note => "36",    // Cyan
            Level::Help => "32",    // Green
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Color configuration for diagnostic rendering
///
/// Controls how colors are applied when rendering diagnostics to the terminal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum ColorConfig {
    /// Use colors when the output is a terminal
    #[default]
    Auto,
    /// Always use colors, even in pipes
    Always,
    /// Never use colors
    Never,
}

impl ColorConfig {
    /// Returns true if colors should be used for the given environment
    ///
    /// # Arguments
    ///
    /// * `is_tty` - Whether the output is a terminal
    pub fn use_color(&self, is_tty: bool) -> bool {
        match self {
            ColorConfig::Auto => is_tty,
            ColorConfig::Always => true,
            ColorConfig::Never => false,
        }
    }

    /// Parse a configuration value (`auto`, `always`, `never`), ignoring case
    ///
    /// # Examples
    ///
    /// ```
    /// use quill_util::diagnostic::ColorConfig;
    ///
    /// assert_eq!(ColorConfig::from_name("Always"), Some(ColorConfig::Always));
    /// assert_eq!(ColorConfig::from_name("sometimes"), None);
    /// ```
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "auto" => Some(ColorConfig::Auto),
            "always" => Some(ColorConfig::Always),
            "never" => Some(ColorConfig::Never),
            _ => None,
        }
    }
}
