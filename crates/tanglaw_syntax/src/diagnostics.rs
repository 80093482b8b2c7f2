//! Lexical and syntactic error taxonomies.
//!
//! Errors are values: the lexer and parser accumulate them in `Vec`s and keep going. Each error knows its kind name,
//! its message (`Display`), and its [`Span`], and can render itself two ways:
//!
//! - [`LexError::render`] / [`ParseError::render`]: the plain two-line form
//!   `"<kind>: <message>\nFile <name>, line <L>, column <C1>-<C2>"` (1-based).
//! - `miette::Diagnostic`: a stable code, a labelled span, and the named source file, for rich terminal reports.
//!
//! ## Notes
//! - [`SyntaxError`] unifies both taxonomies for callers that report everything in one list.

use std::fmt;

use miette::{Diagnostic, LabeledSpan, SourceCode};
use tanglaw_core::lang::reserved::ReservedWordId;
use tanglaw_core::lang::types::{DataTypeId, LiteralKind};
use thiserror::Error;

use crate::source::Span;

// ============================================================================
// Lexical errors
// ============================================================================

/// An error found while tokenizing.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LexError {
    #[error("'{ch}' is not allowed.")]
    IllegalCharacter { ch: char, span: Span },

    #[error("String literal was not closed.")]
    UnclosedString { span: Span },

    /// Empty, overlong, or unterminated character literal; `detail` says which.
    #[error("{detail}")]
    UnclosedCharacterLiteral { detail: String, span: Span },

    #[error("{detail}")]
    InvalidNumber { detail: String, span: Span },

    #[error("Unknown symbol '{text}'")]
    UnknownSymbol { text: String, span: Span },

    #[error("Comment was not closed.")]
    UnclosedComment { span: Span },
}

impl LexError {
    /// Human-readable kind name.
    pub fn name(&self) -> &'static str {
        match self {
            LexError::IllegalCharacter { .. } => "Illegal Character",
            LexError::UnclosedString { .. } => "Unclosed String Literal",
            LexError::UnclosedCharacterLiteral { .. } => "Unclosed Character Literal",
            LexError::InvalidNumber { .. } => "Invalid Number",
            LexError::UnknownSymbol { .. } => "Unknown Symbol",
            LexError::UnclosedComment { .. } => "Unclosed Comment",
        }
    }

    pub fn span(&self) -> &Span {
        match self {
            LexError::IllegalCharacter { span, .. }
            | LexError::UnclosedString { span }
            | LexError::UnclosedCharacterLiteral { span, .. }
            | LexError::InvalidNumber { span, .. }
            | LexError::UnknownSymbol { span, .. }
            | LexError::UnclosedComment { span } => span,
        }
    }

    fn code_suffix(&self) -> &'static str {
        match self {
            LexError::IllegalCharacter { .. } => "illegal_character",
            LexError::UnclosedString { .. } => "unclosed_string",
            LexError::UnclosedCharacterLiteral { .. } => "unclosed_character_literal",
            LexError::InvalidNumber { .. } => "invalid_number",
            LexError::UnknownSymbol { .. } => "unknown_symbol",
            LexError::UnclosedComment { .. } => "unclosed_comment",
        }
    }

    /// Plain two-line rendering with file, line and column range.
    pub fn render(&self) -> String {
        render_with_span(self.name(), &self.to_string(), Some(self.span()))
    }
}

impl Diagnostic for LexError {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        Some(Box::new(format!("tanglaw::lex::{}", self.code_suffix())))
    }

    fn source_code(&self) -> Option<&dyn SourceCode> {
        Some(self.span().file())
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        Some(label_for(self.span(), self.name()))
    }
}

// ============================================================================
// Parse errors
// ============================================================================

/// An error found while parsing.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    #[error("Expected {expected}, found {found}")]
    UnexpectedToken { expected: String, found: String, span: Span },

    #[error("Expected closing parenthesis.")]
    MissingClosingParenthesis { span: Span },

    #[error("Cannot initialise a '{declared}' variable with a {found} literal.")]
    TypeMismatch {
        declared: DataTypeId,
        found: LiteralKind,
        span: Span,
    },

    #[error("No tokens to parse.")]
    NoTokens,

    #[error("'{form}' expects {expected} argument(s), found {found}.")]
    ArgumentCount {
        form: ReservedWordId,
        expected: String,
        found: usize,
        span: Span,
    },

    #[error("Nesting exceeds the maximum depth of {limit}.")]
    NestingTooDeep { limit: usize, span: Span },
}

impl ParseError {
    /// Human-readable kind name.
    pub fn name(&self) -> &'static str {
        match self {
            ParseError::UnexpectedToken { .. } => "Unexpected Token",
            ParseError::MissingClosingParenthesis { .. } => "Missing Closing Parenthesis",
            ParseError::TypeMismatch { .. } => "Type Mismatch",
            ParseError::NoTokens => "No Tokens",
            ParseError::ArgumentCount { .. } => "Argument Count",
            ParseError::NestingTooDeep { .. } => "Nesting Too Deep",
        }
    }

    /// Location of the error; `None` only for [`ParseError::NoTokens`].
    pub fn span(&self) -> Option<&Span> {
        match self {
            ParseError::UnexpectedToken { span, .. }
            | ParseError::MissingClosingParenthesis { span }
            | ParseError::TypeMismatch { span, .. }
            | ParseError::ArgumentCount { span, .. }
            | ParseError::NestingTooDeep { span, .. } => Some(span),
            ParseError::NoTokens => None,
        }
    }

    fn code_suffix(&self) -> &'static str {
        match self {
            ParseError::UnexpectedToken { .. } => "unexpected_token",
            ParseError::MissingClosingParenthesis { .. } => "missing_closing_parenthesis",
            ParseError::TypeMismatch { .. } => "type_mismatch",
            ParseError::NoTokens => "no_tokens",
            ParseError::ArgumentCount { .. } => "argument_count",
            ParseError::NestingTooDeep { .. } => "nesting_too_deep",
        }
    }

    /// Plain two-line rendering with file, line and column range.
    pub fn render(&self) -> String {
        render_with_span(self.name(), &self.to_string(), self.span())
    }
}

impl Diagnostic for ParseError {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        Some(Box::new(format!("tanglaw::parse::{}", self.code_suffix())))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match self {
            ParseError::TypeMismatch { declared, .. } => Some(Box::new(format!(
                "change the declared type or use a literal that fits '{declared}'"
            ))),
            ParseError::MissingClosingParenthesis { .. } => Some(Box::new("add the missing ')'")),
            _ => None,
        }
    }

    fn source_code(&self) -> Option<&dyn SourceCode> {
        self.span().map(|span| span.file() as &dyn SourceCode)
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        self.span().map(|span| label_for(span, self.name()))
    }
}

// ============================================================================
// Unified
// ============================================================================

/// Any error the front end can report.
#[derive(Debug, Clone, PartialEq, Error, Diagnostic)]
pub enum SyntaxError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Lex(#[from] LexError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Parse(#[from] ParseError),
}

impl SyntaxError {
    pub fn name(&self) -> &'static str {
        match self {
            SyntaxError::Lex(e) => e.name(),
            SyntaxError::Parse(e) => e.name(),
        }
    }

    pub fn span(&self) -> Option<&Span> {
        match self {
            SyntaxError::Lex(e) => Some(e.span()),
            SyntaxError::Parse(e) => e.span(),
        }
    }

    pub fn render(&self) -> String {
        match self {
            SyntaxError::Lex(e) => e.render(),
            SyntaxError::Parse(e) => e.render(),
        }
    }
}

// ============================================================================
// Helpers
// ============================================================================

/// A span that ends on a later line only reports its starting column.
fn render_with_span(name: &str, message: &str, span: Option<&Span>) -> String {
    let Some(span) = span else {
        return format!("{name}: {message}");
    };
    let columns = if span.start.ln == span.end.ln {
        format!("{}-{}", span.start.col + 1, span.end.col + 1)
    } else {
        (span.start.col + 1).to_string()
    };
    format!(
        "{name}: {message}\nFile {file}, line {line}, column {columns}",
        file = span.file().name(),
        line = span.start.ln + 1,
    )
}

fn label_for<'a>(span: &Span, label: &str) -> Box<dyn Iterator<Item = LabeledSpan> + 'a> {
    Box::new(std::iter::once(LabeledSpan::new_with_span(
        Some(label.to_lowercase()),
        span.range(),
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::{Position, SourceFile};

    fn span(text: &str, start: usize, end: usize) -> Span {
        let file = SourceFile::new("demo.lit", text);
        let mut pos = Position::start_of(file);
        let mut start_pos = pos.clone();
        for (i, c) in text.char_indices() {
            if i == start {
                start_pos = pos.clone();
            }
            if i == end {
                break;
            }
            pos.advance(c);
        }
        Span::new(start_pos, pos)
    }

    #[test]
    fn test_render_uses_one_based_columns() {
        let err = LexError::IllegalCharacter {
            ch: '§',
            span: span("int §", 4, 6),
        };
        assert_eq!(
            err.render(),
            "Illegal Character: '§' is not allowed.\nFile demo.lit, line 1, column 5-6"
        );
    }

    #[test]
    fn test_render_second_line() {
        let err = ParseError::MissingClosingParenthesis {
            span: span("x;\n(1;", 5, 6),
        };
        assert_eq!(
            err.render(),
            "Missing Closing Parenthesis: Expected closing parenthesis.\nFile demo.lit, line 2, column 3-4"
        );
    }

    #[test]
    fn test_render_multiline_span_reports_start_column() {
        let err = LexError::UnclosedString {
            span: span("x = \"ab\ncd", 4, 10),
        };
        assert_eq!(
            err.render(),
            "Unclosed String Literal: String literal was not closed.\nFile demo.lit, line 1, column 5"
        );
    }

    #[test]
    fn test_no_tokens_has_no_location() {
        assert_eq!(ParseError::NoTokens.render(), "No Tokens: No tokens to parse.");
        assert!(ParseError::NoTokens.labels().is_none());
    }

    #[test]
    fn test_diagnostic_codes_are_namespaced() {
        let err = SyntaxError::from(LexError::UnclosedString { span: span("\"ab", 0, 3) });
        let code = err.code().map(|c| c.to_string());
        assert_eq!(code.as_deref(), Some("tanglaw::lex::unclosed_string"));
    }
}
