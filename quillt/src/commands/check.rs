//! Check command implementation.
//!
//! Scans each file and reports whether it tokenizes cleanly.

use std::path::PathBuf;

use quill_lex::scan;
use quill_util::{ColorConfig, Emitter, Handler, SourceFile};
use tracing::debug;

use crate::commands::common::{error_messages, read_source, stderr_emitter};
use crate::commands::traits::{Command, CommandResult};
use crate::error::{QuilltError, Result};

/// Arguments for the check command.
#[derive(Debug, Clone)]
pub struct CheckArgs {
    /// Files to scan.
    pub files: Vec<PathBuf>,
    /// Print a summary line for files without errors.
    pub verbose: bool,
    /// Diagnostic coloring.
    pub color: ColorConfig,
}

/// Check command handler.
pub struct CheckCommand {
    args: CheckArgs,
}

impl CheckCommand {
    /// Execute the command.
    pub fn run(&self) -> Result<CommandResult> {
        if self.args.files.is_empty() {
            return Err(QuilltError::Validation(
                error_messages::NO_INPUT_FILES.to_string(),
            ));
        }

        let emitter = stderr_emitter(self.args.color);
        let mut result = CommandResult::default();

        for path in &self.args.files {
            let source = read_source(path)?;
            let errors = self.check_source(&emitter, &source);
            result.record_file(errors);
        }

        debug!(
            files = result.files_scanned,
            failed = result.files_failed,
            errors = result.errors,
            "check finished"
        );
        Ok(result)
    }

    /// Scan one source file, print its report and return its error count.
    fn check_source(&self, emitter: &Emitter, source: &SourceFile) -> usize {
        let mut handler = Handler::new();
        let tokens = scan(source.content(), &mut handler);

        if !handler.diagnostics().is_empty() {
            eprint!("{}", report(emitter, &handler, source));
        } else if self.args.verbose {
            println!("{}: ok ({} tokens)", source.name(), tokens.len());
        }

        handler.error_count()
    }
}

/// Render the diagnostics of a file, followed by the abort notice when any is an error.
fn report(emitter: &Emitter, handler: &Handler, source: &SourceFile) -> String {
    let mut out = emitter.render_all(handler.diagnostics(), source);
    if handler.has_errors() {
        out.push('\n');
        out.push_str(&emitter.render_abort(handler.error_count(), source.name()));
    }
    out
}

impl Command for CheckCommand {
    type Args = CheckArgs;

    fn new(args: Self::Args) -> Self {
        Self { args }
    }

    fn execute(&self) -> Result<CommandResult> {
        debug!(command = Self::name(), "executing command");
        self.run()
    }

    fn name() -> &'static str {
        "check"
    }
}

/// Run the check command.
pub fn run_check(args: CheckArgs) -> Result<CommandResult> {
    CheckCommand::new(args).execute()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn args(files: Vec<PathBuf>) -> CheckArgs {
        CheckArgs {
            files,
            verbose: false,
            color: ColorConfig::Never,
        }
    }

    #[test]
    fn test_report_layout() {
        let source = SourceFile::new("demo.ql", "1 # 2\n");
        let mut handler = Handler::new();
        scan(source.content(), &mut handler);

        let rendered = report(&Emitter::plain(), &handler, &source);
        assert_eq!(
            rendered,
            "error[E1001]: unknown character `#`\n \
             --> demo.ql:1:3\n  \
             |\n\
             1 | 1 # 2\n  \
             |   ^\n  \
             = help: remove the character\n\
             \n\
             error: aborting due to 1 previous error\n\
             \n\
             error: could not tokenize `demo.ql`\n"
        );
    }

    #[test]
    fn test_check_counts_failures() {
        let dir = TempDir::new().unwrap();
        let good = dir.path().join("good.ql");
        let bad = dir.path().join("bad.ql");
        std::fs::write(&good, "1 + 2;").unwrap();
        std::fs::write(&bad, "\"open").unwrap();

        let result = run_check(args(vec![good, bad])).unwrap();
        assert_eq!(result.files_scanned, 2);
        assert_eq!(result.files_failed, 1);
        assert_eq!(result.errors, 1);
    }

    #[test]
    fn test_check_requires_files() {
        let err = run_check(args(Vec::new())).unwrap_err();
        assert!(matches!(err, QuilltError::Validation(_)));
    }

    #[test]
    fn test_command_name() {
        assert_eq!(CheckCommand::name(), "check");
    }

    #[test]
    fn test_check_missing_file() {
        let err = run_check(args(vec![PathBuf::from("/nonexistent/a.ql")])).unwrap_err();
        assert!(matches!(err, QuilltError::Validation(_)));
    }
}
