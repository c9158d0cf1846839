//! Command trait and common result type for the quillt CLI.

use std::process::ExitCode;

use crate::error::Result;

/// Standard command trait that all quillt commands implement.
///
/// # Type Parameters
/// * `Args` - The arguments type for this command
pub trait Command {
    /// The arguments type for this command.
    type Args;

    /// Create a new command instance with the given arguments.
    fn new(args: Self::Args) -> Self;

    /// Execute the command.
    ///
    /// Lexical errors in the scanned files are part of the returned
    /// [`CommandResult`]; `Err` means the command itself could not run.
    fn execute(&self) -> Result<CommandResult>;

    /// Get the command name.
    fn name() -> &'static str;
}

/// Outcome of scanning one or more files.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandResult {
    /// Number of files scanned.
    pub files_scanned: usize,

    /// Number of files with at least one error.
    pub files_failed: usize,

    /// Total errors reported across all files.
    pub errors: usize,
}

impl CommandResult {
    /// Record one scanned file and the number of errors it produced.
    pub fn record_file(&mut self, errors: usize) {
        self.files_scanned += 1;
        self.errors += errors;
        if errors > 0 {
            self.files_failed += 1;
        }
    }

    /// Returns true if no file produced an error.
    pub fn is_success(&self) -> bool {
        self.files_failed == 0
    }

    /// Process exit status: 0 on success, 1 when any file had errors.
    pub fn exit_code(&self) -> ExitCode {
        if self.is_success() {
            ExitCode::SUCCESS
        } else {
            ExitCode::from(1)
        }
    }
}
