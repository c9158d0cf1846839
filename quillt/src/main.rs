//! Quillt CLI - A command-line tool for Quill source files.
//!
//! This is the main entry point for the quillt CLI application.
//! It uses clap for argument parsing and dispatches to the appropriate
//! command handler based on user input.

mod commands;
mod config;
mod error;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use quill_util::ColorConfig;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use commands::{
    check::{run_check, CheckArgs},
    common::OutputFormat,
    tokens::{run_tokens, TokensArgs},
    traits::CommandResult,
};
use config::Config;
use error::{QuilltError, Result};

/// Quillt - A CLI tool for Quill source files
///
/// Quillt scans Quill source files, lists their tokens, and reports lexical
/// errors in a compiler-style layout.
#[derive(Parser, Debug)]
#[command(name = "quillt")]
#[command(author = "Quill Team")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "A CLI tool for Quill source files", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true, env = "QUILLT_VERBOSE")]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "QUILLT_CONFIG")]
    config: Option<PathBuf>,

    /// Disable color output
    #[arg(long, global = true, env = "QUILLT_NO_COLOR")]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands for the quillt CLI.
#[derive(Subcommand, Debug)]
enum Commands {
    /// List the tokens of a source file
    ///
    /// Prints one token per line, or a JSON array, on stdout. Diagnostics
    /// are rendered to stderr.
    Tokens(TokensCommand),

    /// Check that source files tokenize without errors
    ///
    /// Renders every diagnostic and exits with status 1 if any file
    /// contains a lexical error.
    Check(CheckCommand),
}

/// Arguments for the tokens subcommand.
#[derive(Parser, Debug)]
struct TokensCommand {
    /// Source file to scan
    file: PathBuf,

    /// Output format (text, json)
    #[arg(short = 'F', long)]
    format: Option<String>,

    /// Leave the end-of-input token out of the listing
    #[arg(long)]
    no_eof: bool,
}

/// Arguments for the check subcommand.
#[derive(Parser, Debug)]
struct CheckCommand {
    /// Source files to check
    #[arg(required = true)]
    files: Vec<PathBuf>,
}

/// Main entry point for the quillt CLI.
///
/// Exits with 0 on success, 1 when a scanned file contains lexical errors,
/// and 2 when the tool itself fails.
fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(result) => result.exit_code(),
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::from(2)
        },
    }
}

fn run(cli: Cli) -> Result<CommandResult> {
    let config = load_config(cli.config.as_deref())?;
    let verbose = cli.verbose || config.verbose;

    init_logging(verbose, cli.no_color)?;

    execute_command(cli.command, verbose, cli.no_color, config)
}

/// Initialize the logging system.
///
/// Log output goes to stderr so that token listings on stdout stay clean.
fn init_logging(verbose: bool, no_color: bool) -> Result<()> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    let subscriber = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(!no_color)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .try_init()
        .map_err(|e| QuilltError::Config(format!("Failed to initialize logging: {}", e)))?;

    Ok(())
}

/// Load configuration from file or use defaults.
fn load_config(config_path: Option<&std::path::Path>) -> Result<Config> {
    match config_path {
        Some(path) => Config::load_from_path(path),
        None => Config::load(),
    }
}

/// Resolve the color mode: `--no-color` wins over the configuration.
fn color_config(no_color: bool, config: &Config) -> Result<ColorConfig> {
    if no_color {
        Ok(ColorConfig::Never)
    } else {
        config.output.color_config()
    }
}

/// Execute the selected command.
fn execute_command(
    command: Commands,
    verbose: bool,
    no_color: bool,
    config: Config,
) -> Result<CommandResult> {
    let color = color_config(no_color, &config)?;
    match command {
        Commands::Tokens(args) => execute_tokens(args, color, config),
        Commands::Check(args) => execute_check(args, verbose, color),
    }
}

/// Execute the tokens command.
fn execute_tokens(args: TokensCommand, color: ColorConfig, config: Config) -> Result<CommandResult> {
    let format = match args.format {
        Some(ref name) => OutputFormat::parse(name)?,
        None => config.output.output_format()?,
    };
    let tokens_args = TokensArgs {
        file: args.file,
        format,
        show_eof: config.output.show_eof && !args.no_eof,
        color,
    };
    run_tokens(tokens_args)
}

/// Execute the check command.
fn execute_check(args: CheckCommand, verbose: bool, color: ColorConfig) -> Result<CommandResult> {
    let check_args = CheckArgs {
        files: args.files,
        verbose,
        color,
    };
    run_check(check_args)
}
