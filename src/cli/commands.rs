//! CLI command implementations
//!
//! All command functions return `CliResult<ExitCode>` instead of calling
//! `process::exit`. Error handling and exits happen in the top-level `run()`.

use std::fs;
use std::path::Path;

use crate::config::FrontendConfig;
use crate::frontend::diagnostics::SyntaxError;
use crate::frontend::lexer::Token;
use crate::frontend::{self, lexer};

use super::{CliError, CliResult, ExitCode, ReportStyle};

/// Maximum source file size (100 MB)
///
/// Files larger than this are rejected to prevent out-of-memory conditions
/// while tokenizing.
const MAX_SOURCE_SIZE: u64 = 100 * 1024 * 1024;

/// File extension of TanglawPL sources.
pub const SOURCE_EXTENSION: &str = "lit";

/// Read source file contents.
///
/// ## Errors
///
/// Returns an error if:
/// - The file does not have the `.lit` extension
/// - The file cannot be read (I/O error)
/// - The file exceeds `MAX_SOURCE_SIZE` (100 MB)
pub fn read_source(file_path: &Path) -> CliResult<String> {
    if file_path.extension().and_then(|e| e.to_str()) != Some(SOURCE_EXTENSION) {
        return Err(CliError::failure(format!(
            "Error: '{}' is not a TanglawPL source file (expected a .{SOURCE_EXTENSION} extension)",
            file_path.display()
        )));
    }

    let metadata = fs::metadata(file_path)
        .map_err(|e| CliError::failure(format!("Cannot access file '{}': {}", file_path.display(), e)))?;

    if metadata.len() > MAX_SOURCE_SIZE {
        return Err(CliError::failure(format!(
            "Source file '{}' is too large ({} bytes, max {} bytes)",
            file_path.display(),
            metadata.len(),
            MAX_SOURCE_SIZE
        )));
    }

    fs::read_to_string(file_path)
        .map_err(|e| CliError::failure(format!("Error reading file '{}': {}", file_path.display(), e)))
}

/// Tokenize and print one token per line.
pub fn lex_file(file_path: &Path, config: &FrontendConfig, style: ReportStyle) -> CliResult<ExitCode> {
    let source = read_source(file_path)?;
    let (tokens, errors) = lexer::tokenize_with(&file_path.to_string_lossy(), &source, &config.lex);

    for tok in &tokens {
        println!("{}", format_token(tok));
    }

    let diagnostics: Vec<SyntaxError> = errors.into_iter().map(SyntaxError::from).collect();
    report(&diagnostics, style)
}

/// Parse and print the AST tree.
///
/// A partial tree is still printed when there were errors, but the exit code is then non-zero.
pub fn parse_file(file_path: &Path, config: &FrontendConfig, style: ReportStyle) -> CliResult<ExitCode> {
    let source = read_source(file_path)?;
    let analysis = frontend::analyze(&file_path.to_string_lossy(), &source, config);

    if let Some(program) = &analysis.program {
        print!("{program}");
    }

    report(&analysis.diagnostics(), style)
}

/// `line:col  CATEGORY  lexeme`, 1-based.
fn format_token(tok: &Token) -> String {
    let start = tok.pos_start();
    format!(
        "{:>4}:{:<4} {:<20} {}",
        start.ln + 1,
        start.col + 1,
        tok.category().as_str(),
        tok.lexeme
    )
}

/// Print diagnostics to stderr and pick the exit code.
fn report(diagnostics: &[SyntaxError], style: ReportStyle) -> CliResult<ExitCode> {
    if diagnostics.is_empty() {
        return Ok(ExitCode::SUCCESS);
    }

    for diag in diagnostics {
        match style {
            ReportStyle::Plain => eprintln!("{}\n", diag.render()),
            ReportStyle::Rich => eprintln!("{:?}", miette::Report::new(diag.clone())),
        }
    }

    let noun = if diagnostics.len() == 1 { "error" } else { "errors" };
    Err(CliError::failure(format!("{} {noun} found", diagnostics.len())))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_read_source_rejects_wrong_extension() {
        let err = read_source(Path::new("program.txt")).unwrap_err();
        assert!(err.message.contains(".lit"), "{}", err.message);
        assert_eq!(err.exit_code, ExitCode::FAILURE);
    }

    #[test]
    fn test_read_source_missing_file() {
        let err = read_source(Path::new("definitely/not/here.lit")).unwrap_err();
        assert!(err.message.starts_with("Cannot access file"), "{}", err.message);
    }

    #[test]
    fn test_read_source_ok() {
        let path = std::env::temp_dir().join(format!("tanglaw_read_{}.lit", std::process::id()));
        fs::write(&path, "int x = 1;").unwrap();
        let source = read_source(&path);
        let _ = fs::remove_file(&path);
        assert_eq!(source.unwrap(), "int x = 1;");
    }

    #[test]
    fn test_format_token() {
        let (tokens, _) = lexer::tokenize("t.lit", "\n  x");
        let line = format_token(&tokens[0]);
        assert!(line.trim_start().starts_with("2:3"), "{line}");
        assert!(line.contains("IDENTIFIER"));
        assert!(line.ends_with(" x"));
    }

    #[test]
    fn test_report_exit_code() {
        assert_eq!(report(&[], ReportStyle::Plain).unwrap(), ExitCode::SUCCESS);

        let (_, errors) = lexer::tokenize("t.lit", "§");
        let diags: Vec<SyntaxError> = errors.into_iter().map(SyntaxError::from).collect();
        let err = report(&diags, ReportStyle::Plain).unwrap_err();
        assert_eq!(err.message, "1 error found");
    }
}
