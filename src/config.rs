//! Front-end configuration
//!
//! [`FrontendConfig`] bundles the lexer options with the knobs that decide how the lexer and parser are chained.

use tanglaw_syntax::lexer::LexOptions;

/// Front-end configuration
#[derive(Debug, Clone)]
pub struct FrontendConfig {
    /// Options passed to the lexer
    pub lex: LexOptions,
    /// Whether to run the parser when lexing reported errors
    pub parse_on_lex_errors: bool,
}

impl Default for FrontendConfig {
    fn default() -> Self {
        Self {
            lex: LexOptions::default(),
            parse_on_lex_errors: true,
        }
    }
}

impl FrontendConfig {
    /// Create a new config with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Emit `COMMENT` tokens from the lexer
    pub fn with_comments(mut self, emit: bool) -> Self {
        self.lex = self.lex.with_comments(emit);
        self
    }

    /// Set whether parsing continues after lexical errors
    pub fn with_parse_on_lex_errors(mut self, parse: bool) -> Self {
        self.parse_on_lex_errors = parse;
        self
    }
}
