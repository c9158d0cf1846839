//! Tokens command implementation.
//!
//! Scans one file and lists its tokens on stdout, with any diagnostics
//! rendered to stderr.

use std::io::Write;
use std::path::PathBuf;

use quill_lex::{scan, Token};
use quill_util::{ColorConfig, Handler};
use tracing::debug;

use crate::commands::common::{
    print_diagnostics, read_source, stderr_emitter, OutputFormat, TokenRecord,
};
use crate::commands::traits::{Command, CommandResult};
use crate::error::Result;

/// Arguments for the tokens command.
#[derive(Debug, Clone)]
pub struct TokensArgs {
    /// File to scan.
    pub file: PathBuf,
    /// Listing format.
    pub format: OutputFormat,
    /// Include the end-of-input token in the listing.
    pub show_eof: bool,
    /// Diagnostic coloring.
    pub color: ColorConfig,
}

/// Tokens command handler.
pub struct TokensCommand {
    args: TokensArgs,
}

impl TokensCommand {
    /// Execute the command.
    pub fn run(&self) -> Result<CommandResult> {
        let source = read_source(&self.args.file)?;
        let mut handler = Handler::new();
        let tokens = scan(source.content(), &mut handler);
        debug!(
            file = %source.name(),
            tokens = tokens.len(),
            errors = handler.error_count(),
            "scanned file"
        );

        let listing = self.render(&tokens)?;
        let mut stdout = std::io::stdout().lock();
        stdout.write_all(listing.as_bytes())?;
        stdout.flush()?;

        print_diagnostics(&stderr_emitter(self.args.color), &handler, &source);

        let mut result = CommandResult::default();
        result.record_file(handler.error_count());
        Ok(result)
    }

    /// Render the token listing in the requested format.
    pub fn render(&self, tokens: &[Token<'_>]) -> Result<String> {
        let records: Vec<TokenRecord> = tokens
            .iter()
            .filter(|token| self.args.show_eof || !token.is_eof())
            .map(TokenRecord::from)
            .collect();

        let mut out = match self.args.format {
            OutputFormat::Text => records
                .iter()
                .map(TokenRecord::to_text)
                .collect::<Vec<_>>()
                .join("\n"),
            OutputFormat::Json => serde_json::to_string_pretty(&records)?,
        };
        if !out.is_empty() {
            out.push('\n');
        }
        Ok(out)
    }
}

impl Command for TokensCommand {
    type Args = TokensArgs;

    fn new(args: Self::Args) -> Self {
        Self { args }
    }

    fn execute(&self) -> Result<CommandResult> {
        debug!(command = Self::name(), "executing command");
        self.run()
    }

    fn name() -> &'static str {
        "tokens"
    }
}

/// Run the tokens command.
pub fn run_tokens(args: TokensArgs) -> Result<CommandResult> {
    TokensCommand::new(args).execute()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn command(format: OutputFormat, show_eof: bool) -> TokensCommand {
        TokensCommand::new(TokensArgs {
            file: PathBuf::from("unused.ql"),
            format,
            show_eof,
            color: ColorConfig::Never,
        })
    }

    #[test]
    fn test_render_text() {
        let mut handler = Handler::new();
        let tokens = scan("1 + 2", &mut handler);
        let listing = command(OutputFormat::Text, true).render(&tokens).unwrap();

        assert_eq!(
            listing,
            "1:1  number  \"1\"  1 (decimal)\n\
             1:3  plus  \"+\"\n\
             1:5  number  \"2\"  2 (decimal)\n\
             1:6  eof  \"\"\n"
        );
    }

    #[test]
    fn test_render_without_eof() {
        let mut handler = Handler::new();
        let tokens = scan("", &mut handler);
        let listing = command(OutputFormat::Text, false).render(&tokens).unwrap();
        assert_eq!(listing, "");
    }

    #[test]
    fn test_render_json() {
        let mut handler = Handler::new();
        let tokens = scan("7n;", &mut handler);
        let listing = command(OutputFormat::Json, false).render(&tokens).unwrap();

        let value: serde_json::Value = serde_json::from_str(&listing).unwrap();
        let records = value.as_array().unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0]["kind"], "number");
        assert_eq!(records[0]["lexeme"], "7n");
        assert_eq!(records[0]["value"], "7n");
        assert_eq!(records[0]["format"], "decimal");
        assert_eq!(records[1]["kind"], "semicolon");
    }

    #[test]
    fn test_command_name() {
        assert_eq!(TokensCommand::name(), "tokens");
    }
}
