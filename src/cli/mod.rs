//! CLI module for the TanglawPL front end
//!
//! ## Commands
//!
//! - `lex <file>` - Print the token stream
//! - `parse <file>` - Print the AST as an indented tree
//!
//! ## Design
//!
//! The CLI uses clap for argument parsing with derive macros.
//! Command functions return `CliResult<T>` instead of calling `process::exit`.
//! Only the top-level `run()` function handles errors and exits.

// Enforce explicit error handling - no panicking in production code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use crate::config::FrontendConfig;
use crate::version::TANGLAW_VERSION;

// ============================================================================
// CLI Error handling
// ============================================================================

/// Exit code for CLI operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCode(pub i32);

impl ExitCode {
    pub const SUCCESS: ExitCode = ExitCode(0);
    pub const FAILURE: ExitCode = ExitCode(1);
}

/// Error type for CLI operations.
///
/// Contains a user-facing message and an exit code. The CLI entry point
/// catches these errors, prints the message, and exits with the code.
#[derive(Debug, thiserror::Error)]
#[error("{message}")]
pub struct CliError {
    /// User-facing error message (already formatted for display)
    pub message: String,
    /// Exit code to return to the shell
    pub exit_code: ExitCode,
}

impl CliError {
    /// Create a new CLI error with a message and exit code.
    pub fn new(message: impl Into<String>, exit_code: ExitCode) -> Self {
        Self {
            message: message.into(),
            exit_code,
        }
    }

    /// Create a failure error (exit code 1).
    pub fn failure(message: impl Into<String>) -> Self {
        Self::new(message, ExitCode::FAILURE)
    }
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

// ============================================================================
// Clap CLI definition
// ============================================================================

/// Lexer and parser for TanglawPL
#[derive(Parser, Debug)]
#[command(name = "tanglaw")]
#[command(version = TANGLAW_VERSION)]
#[command(about = "Lexer and parser for the TanglawPL language", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Print diagnostics as plain `kind: message` lines instead of rich reports
    #[arg(long, global = true)]
    pub plain: bool,

    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Tokenize a source file and print the tokens
    Lex {
        /// Source file (.lit)
        #[arg(value_name = "FILE")]
        file: PathBuf,
        /// Keep comments as COMMENT tokens
        #[arg(long)]
        comments: bool,
    },

    /// Parse a source file and print the AST
    Parse {
        /// Source file (.lit)
        #[arg(value_name = "FILE")]
        file: PathBuf,
        /// Keep comments as COMMENT tokens (they are never parsed)
        #[arg(long)]
        comments: bool,
        /// Do not parse when lexing reported errors
        #[arg(long)]
        strict: bool,
    },
}

/// How diagnostics are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportStyle {
    /// miette graphical reports with source snippets
    Rich,
    /// The two-line `render()` form
    Plain,
}

// ============================================================================
// CLI entry point
// ============================================================================

/// Main CLI entry point.
///
/// This is the only place where `process::exit` is called. All command
/// implementations return `CliResult` and errors are handled here.
pub fn run(cli: Cli) {
    match execute(cli) {
        Ok(exit_code) => {
            if exit_code.0 != 0 {
                process::exit(exit_code.0);
            }
        }
        Err(e) => {
            if !e.message.is_empty() {
                eprintln!("{}", e.message);
            }
            process::exit(e.exit_code.0);
        }
    }
}

/// Execute the CLI command and return result.
fn execute(cli: Cli) -> CliResult<ExitCode> {
    let style = if cli.plain { ReportStyle::Plain } else { ReportStyle::Rich };

    match cli.command {
        Command::Lex { file, comments } => {
            let config = FrontendConfig::new().with_comments(comments);
            commands::lex_file(&file, &config, style)
        }
        Command::Parse {
            file,
            comments,
            strict,
        } => {
            let config = FrontendConfig::new()
                .with_comments(comments)
                .with_parse_on_lex_errors(!strict);
            commands::parse_file(&file, &config, style)
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_lex() {
        let cli = Cli::try_parse_from(["tanglaw", "lex", "main.lit"]).unwrap();
        assert!(matches!(cli.command, Command::Lex { comments: false, .. }));
        assert!(!cli.plain);
    }

    #[test]
    fn test_cli_parse_parse_with_flags() {
        let cli = Cli::try_parse_from(["tanglaw", "parse", "main.lit", "--strict", "--comments", "--plain"]).unwrap();
        if let Command::Parse { strict, comments, .. } = cli.command {
            assert!(strict);
            assert!(comments);
        } else {
            panic!("Expected Parse command");
        }
        assert!(cli.plain);
    }

    #[test]
    fn test_cli_global_flags_before_subcommand() {
        let cli = Cli::try_parse_from(["tanglaw", "-v", "--plain", "lex", "main.lit"]).unwrap();
        assert!(cli.verbose);
        assert!(cli.plain);
    }

    #[test]
    fn test_cli_requires_subcommand() {
        assert!(Cli::try_parse_from(["tanglaw"]).is_err());
    }

    #[test]
    fn test_cli_error_codes() {
        let err = CliError::failure("boom");
        assert_eq!(err.exit_code, ExitCode::FAILURE);
        assert_eq!(err.to_string(), "boom");
    }
}
