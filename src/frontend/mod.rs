//! TanglawPL front-end facade
//!
//! This module re-exports the syntax components from `tanglaw_syntax` and chains them:
//! - `lexer`: tokenization of source code
//! - `parser`: parsing tokens into an AST
//! - `ast`: abstract syntax tree definitions
//! - `diagnostics`: error types and rendering
//!
//! [`analyze`] runs both stages over one source file and keeps every intermediate result, so hosts can print tokens,
//! the tree, or diagnostics from a single call.

pub use tanglaw_syntax::{ast, diagnostics, lexer, parser};

use crate::config::FrontendConfig;
use ast::Program;
use diagnostics::{LexError, ParseError, SyntaxError};
use lexer::Token;

/// Everything the front end produced for one source file.
#[derive(Debug, Clone)]
pub struct Analysis {
    /// Token stream, including `COMMENT` tokens when enabled and the final `EOF`.
    pub tokens: Vec<Token>,
    pub lex_errors: Vec<LexError>,
    /// `None` when parsing was skipped or the token stream was empty.
    pub program: Option<Program>,
    pub parse_errors: Vec<ParseError>,
}

impl Analysis {
    /// Return `true` if lexing or parsing reported anything.
    pub fn has_errors(&self) -> bool {
        !self.lex_errors.is_empty() || !self.parse_errors.is_empty()
    }

    /// Every diagnostic, lexical errors first, each group in source order.
    pub fn diagnostics(&self) -> Vec<SyntaxError> {
        self.lex_errors
            .iter()
            .cloned()
            .map(SyntaxError::from)
            .chain(self.parse_errors.iter().cloned().map(SyntaxError::from))
            .collect()
    }

    /// The program, only if the whole file was free of errors.
    pub fn valid_program(&self) -> Option<&Program> {
        if self.has_errors() { None } else { self.program.as_ref() }
    }
}

/// Lex and parse `source`.
///
/// ## Notes
/// - `COMMENT` tokens are kept in [`Analysis::tokens`]; the parser skips them.
/// - With `parse_on_lex_errors` off, a file with lexical errors is not parsed and `program` is `None`.
#[tracing::instrument(skip_all, fields(file = filename))]
pub fn analyze(filename: &str, source: &str, config: &FrontendConfig) -> Analysis {
    let (tokens, lex_errors) = lexer::tokenize_with(filename, source, &config.lex);

    let (program, parse_errors) = if lex_errors.is_empty() || config.parse_on_lex_errors {
        parser::parse(&tokens)
    } else {
        tracing::debug!(lex_errors = lex_errors.len(), "skipping parse after lexical errors");
        (None, Vec::new())
    };

    Analysis {
        tokens,
        lex_errors,
        program,
        parse_errors,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analyze_clean_source() {
        let analysis = analyze("main.lit", "int x = 5;", &FrontendConfig::default());
        assert!(!analysis.has_errors());
        assert!(analysis.valid_program().is_some());
        assert!(analysis.diagnostics().is_empty());
    }

    #[test]
    fn test_lex_errors_come_first() {
        let analysis = analyze("main.lit", "int ; x = §;", &FrontendConfig::default());
        let names: Vec<_> = analysis.diagnostics().iter().map(|d| d.name()).collect();
        assert_eq!(names.first(), Some(&"Illegal Character"));
        assert!(names.len() >= 2, "{names:?}");
        assert!(analysis.valid_program().is_none());
    }

    #[test]
    fn test_strict_mode_skips_parse() {
        let config = FrontendConfig::new().with_parse_on_lex_errors(false);
        let analysis = analyze("main.lit", "int x = §;", &config);
        assert_eq!(analysis.lex_errors.len(), 1);
        assert!(analysis.program.is_none());
        assert!(analysis.parse_errors.is_empty());
    }

    #[test]
    fn test_comments_are_kept_and_ignored_by_parser() {
        let config = FrontendConfig::new().with_comments(true);
        let analysis = analyze("main.lit", "int x = 1; # note # int y = 2;", &config);
        assert!(analysis.tokens.iter().any(|t| t.kind.is_comment()));
        assert!(analysis.parse_errors.is_empty(), "{:?}", analysis.parse_errors);
        assert_eq!(analysis.program.map(|p| p.statements.len()), Some(2));
    }
}
