//! Lexer for the TanglawPL programming language
//!
//! Handles tokenization including:
//! - Data types, booleans, keywords, reserved words and identifiers
//! - Integer/real literals with an optional folded sign
//! - String and character literals with escapes
//! - Operators (maximal munch) and punctuation
//! - `#...#` / `##...##` comments
//!
//! ## Module Structure
//!
//! - `tokens` - Token types (TokenKind, TokenCategory, Token)
//! - `strings` - String/character literal scanning
//! - `numbers` - Numeric literal scanning
//!
//! ## Notes
//! - The lexer never stops early. Every problem becomes a [`LexError`] and scanning resumes after it, so a single
//!   call reports all lexical errors in the file.
//! - `+`/`-` are context-dependent: after a value-producing token they are binary [`OperatorClass::Arithmetic`],
//!   otherwise they are [`OperatorClass::Unary`] (or fold into a following number as its sign).

mod numbers;
mod strings;
pub mod tokens;

pub use tokens::{Token, TokenCategory, TokenKind};

use std::sync::Arc;

use crate::diagnostics::LexError;
use crate::source::{Position, SourceFile, Span};
use tanglaw_core::lang::operators::{self, OperatorClass, OperatorId};
use tanglaw_core::lang::punctuation::{self, PunctuationId};
use tanglaw_core::lang::{self, keywords, reserved, types};

// ============================================================================
// OPTIONS
// ============================================================================

/// Lexer configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LexOptions {
    /// Emit [`TokenKind::Comment`] tokens instead of discarding comments.
    pub emit_comments: bool,
}

impl LexOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable comment tokens.
    pub fn with_comments(mut self, emit: bool) -> Self {
        self.emit_comments = emit;
        self
    }
}

// ============================================================================
// LEXER STATE
// ============================================================================

/// Lexer for TanglawPL source code.
///
/// The only state carried between tokens is the category of the last emitted (non-comment) token, which decides
/// how a following `+`/`-` is read.
pub struct Lexer<'a> {
    source: &'a str,
    options: LexOptions,
    pos: Position,
    prev: Option<TokenCategory>,
    tokens: Vec<Token>,
    errors: Vec<LexError>,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer over `source`, attributing positions to `filename`.
    pub fn new(filename: &str, source: &'a str, options: LexOptions) -> Self {
        let file: Arc<SourceFile> = SourceFile::new(filename, source);
        Self {
            source,
            options,
            pos: Position::start_of(file),
            prev: None,
            tokens: Vec::new(),
            errors: Vec::new(),
        }
    }

    /// Tokenize the entire source.
    ///
    /// The token list always ends with exactly one [`TokenKind::Eof`].
    pub fn tokenize(mut self) -> (Vec<Token>, Vec<LexError>) {
        while !self.is_at_end() {
            self.scan_token();
        }

        let end = self.pos.clone();
        self.tokens.push(Token::new(TokenKind::Eof, "", Span::new(end.clone(), end)));
        (self.tokens, self.errors)
    }

    // ========================================================================
    // Core character handling
    // ========================================================================

    fn is_at_end(&self) -> bool {
        self.pos.idx >= self.source.len()
    }

    fn peek(&self) -> Option<char> {
        self.source[self.pos.idx..].chars().next()
    }

    fn peek_next(&self) -> Option<char> {
        let mut iter = self.source[self.pos.idx..].chars();
        iter.next();
        iter.next()
    }

    fn advance(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos.advance(c);
        Some(c)
    }

    fn match_char(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.advance();
            true
        } else {
            false
        }
    }

    fn span_from(&self, start: &Position) -> Span {
        Span::new(start.clone(), self.pos.clone())
    }

    fn text_from(&self, start: &Position) -> &'a str {
        &self.source[start.idx..self.pos.idx]
    }

    /// Return `true` if a `+`/`-` at the current position is a binary operator.
    fn after_value(&self) -> bool {
        self.prev.is_some_and(TokenCategory::is_value_producing)
    }

    // ========================================================================
    // Main scanning dispatch
    // ========================================================================

    fn scan_token(&mut self) {
        let start = self.pos.clone();
        let Some(c) = self.peek() else {
            return;
        };

        match c {
            ' ' | '\t' | '\n' | '\x0b' | '\r' => {
                self.advance();
            }

            // `\t`, `\n`, `\v` written out in source count as whitespace.
            '\\' if matches!(self.peek_next(), Some('t' | 'n' | 'v')) => {
                self.advance();
                self.advance();
            }

            '#' => self.scan_comment(start),

            '"' => self.scan_string(start),
            '\'' => self.scan_char(start),

            '0'..='9' => self.scan_number(start),
            '.' if self.peek_next().is_some_and(|n| n.is_ascii_digit()) => self.scan_number(start),
            '+' | '-' if !self.after_value() && self.peek_next().is_some_and(|n| n.is_ascii_digit()) => {
                self.scan_number(start)
            }

            _ if is_ident_start(c) => self.scan_identifier(start),

            '.' => {
                self.advance();
                self.add_token(TokenKind::Punctuation(PunctuationId::Dot), &start);
            }

            _ if is_symbol_char(c) => self.scan_symbol(start),

            _ => {
                self.advance();
                let err = LexError::IllegalCharacter {
                    ch: c,
                    span: self.span_from(&start),
                };
                self.error(err);
            }
        }
    }

    // ========================================================================
    // Emission
    // ========================================================================

    fn add_token(&mut self, kind: TokenKind, start: &Position) {
        let lexeme = self.text_from(start).to_string();
        self.add_token_with_lexeme(kind, lexeme, start);
    }

    fn add_token_with_lexeme(&mut self, kind: TokenKind, lexeme: String, start: &Position) {
        let category = kind.category();
        if category != TokenCategory::Comment {
            self.prev = Some(category);
        }
        let span = self.span_from(start);
        self.tokens.push(Token::new(kind, lexeme, span));
    }

    fn error(&mut self, err: LexError) {
        tracing::debug!(kind = err.name(), error = %err, "lexical error");
        self.errors.push(err);
    }

    // ========================================================================
    // Comments
    // ========================================================================

    /// Scan `#...#` or `##...##`. Unterminated comments run to end of input.
    fn scan_comment(&mut self, start: Position) {
        self.advance();
        let block = self.match_char('#');
        let body_start = self.pos.idx;

        loop {
            let Some(c) = self.peek() else {
                let err = LexError::UnclosedComment {
                    span: self.span_from(&start),
                };
                self.error(err);
                return;
            };
            if c == '#' && (!block || self.peek_next() == Some('#')) {
                let body = self.source[body_start..self.pos.idx].trim().to_string();
                self.advance();
                if block {
                    self.advance();
                }
                if self.options.emit_comments {
                    self.add_token_with_lexeme(TokenKind::Comment(body.clone()), body, &start);
                }
                return;
            }
            self.advance();
        }
    }

    // ========================================================================
    // Identifier scanning
    // ========================================================================

    fn scan_identifier(&mut self, start: Position) {
        while self.peek().is_some_and(is_ident_continue) {
            self.advance();
        }
        let spelling = self.text_from(&start);

        // `name.` starts a member access: the name is never a keyword or type, and the dot is emitted here.
        if self.peek() == Some('.') {
            let kind = match reserved::from_str(spelling) {
                Some(id) => TokenKind::ReservedWord(id),
                None => TokenKind::Identifier(spelling.to_string()),
            };
            self.add_token(kind, &start);
            let dot = self.pos.clone();
            self.advance();
            self.add_token(TokenKind::Punctuation(PunctuationId::Dot), &dot);
            return;
        }

        self.add_token(classify_word(spelling), &start);
    }

    // ========================================================================
    // Symbol scanning
    // ========================================================================

    /// Scan one operator or punctuation symbol using maximal munch.
    fn scan_symbol(&mut self, start: Position) {
        self.advance();
        while let Some(next) = self.peek() {
            let candidate_end = self.pos.idx + next.len_utf8();
            if operators::is_compound(&self.source[start.idx..candidate_end]) {
                self.advance();
            } else {
                break;
            }
        }

        let text = self.text_from(&start);
        if let Some(id) = operators::from_str(text) {
            let class = match id {
                OperatorId::Plus | OperatorId::Minus if !self.after_value() => OperatorClass::Unary,
                _ => operators::class(id),
            };
            self.add_token(TokenKind::Operator(class, id), &start);
        } else if let Some(id) = punctuation::from_str(text) {
            self.add_token(TokenKind::Punctuation(id), &start);
        } else {
            let err = LexError::UnknownSymbol {
                text: text.to_string(),
                span: self.span_from(&start),
            };
            self.error(err);
        }
    }
}

// ============================================================================
// Helper functions
// ============================================================================

/// Classify a complete word: data type, boolean, keyword, reserved word, then identifier.
fn classify_word(spelling: &str) -> TokenKind {
    if let Some(id) = types::from_str(spelling) {
        TokenKind::DataType(id)
    } else if let Some(value) = lang::boolean_from_str(spelling) {
        TokenKind::Boolean(value)
    } else if let Some(id) = keywords::from_str(spelling) {
        TokenKind::Keyword(id)
    } else if let Some(id) = reserved::from_str(spelling) {
        TokenKind::ReservedWord(id)
    } else {
        TokenKind::Identifier(spelling.to_string())
    }
}

/// Check if a character can start an identifier (ASCII-only).
fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

/// Check if a character can continue an identifier (ASCII-only).
fn is_ident_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Characters that start an operator or punctuation symbol. `` ` `` and `?` are included so they are reported as
/// unknown symbols rather than illegal characters.
fn is_symbol_char(c: char) -> bool {
    "+-*/%|&=<>!^~:;,()[]{}@$\\`?".contains(c)
}

/// Tokenize `source` with default options (comments discarded).
pub fn tokenize(filename: &str, source: &str) -> (Vec<Token>, Vec<LexError>) {
    tokenize_with(filename, source, &LexOptions::default())
}

/// Tokenize `source` with explicit options.
///
/// ## Returns
/// - An EOF-terminated token list and every lexical error found, in source order.
#[tracing::instrument(skip_all, fields(file = filename, source_len = source.len(), token_count = tracing::field::Empty))]
pub fn tokenize_with(filename: &str, source: &str, options: &LexOptions) -> (Vec<Token>, Vec<LexError>) {
    let (tokens, errors) = Lexer::new(filename, source, *options).tokenize();
    tracing::Span::current().record("token_count", tokens.len());
    (tokens, errors)
}

// ============================================================================
// TESTS
// ============================================================================
