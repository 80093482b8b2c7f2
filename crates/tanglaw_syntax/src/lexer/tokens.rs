//! Token types for the TanglawPL lexer.
//!
//! Vocabulary tokens carry **registry-backed IDs**:
//! - `Keyword(KeywordId)`, `DataType(DataTypeId)`, `ReservedWord(ReservedWordId)` for words
//! - `Operator(OperatorClass, OperatorId)` for operators; the class is stored because `+`/`-` change class with context
//! - `Punctuation(PunctuationId)` for punctuation
//!
//! ## Notes
//! - Every [`TokenKind`] maps to a payload-free [`TokenCategory`]. Categories are what token tables print and what
//!   the lexer remembers as the previous token.
//! - Use `crate::token_helpers` for ergonomic token matching at call sites.

use std::fmt;

use crate::source::{Position, Span};
use tanglaw_core::lang::keywords::KeywordId;
use tanglaw_core::lang::operators::{OperatorClass, OperatorId};
use tanglaw_core::lang::punctuation::PunctuationId;
use tanglaw_core::lang::reserved::ReservedWordId;
use tanglaw_core::lang::types::DataTypeId;

// ============================================================================
// TOKEN TYPES
// ============================================================================

/// Kind of token produced by the lexer.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    // ========== Literals ==========
    Integer(i64),
    RealNumber(f64),
    StringLiteral(String),
    CharacterLiteral(char),
    Boolean(bool),

    // ========== Names ==========
    Identifier(String),
    Keyword(KeywordId),
    ReservedWord(ReservedWordId),
    DataType(DataTypeId),

    // ========== Operators / punctuation (ID-based) ==========
    Operator(OperatorClass, OperatorId),
    Punctuation(PunctuationId),

    // ========== Special ==========
    /// Only produced when comment emission is enabled.
    Comment(String),
    Eof,
}

/// Payload-free token category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenCategory {
    Integer,
    RealNumber,
    StringLiteral,
    CharacterLiteral,
    Boolean,
    Identifier,
    Keyword,
    ReservedWord,
    DataType,
    Assignment,
    Arithmetic,
    Relational,
    Logical,
    Bitwise,
    Unary,
    LParenthesis,
    RParenthesis,
    LCurly,
    RCurly,
    LBracket,
    RBracket,
    Semicolon,
    SeparatingSymbol,
    AccessorSymbol,
    SpecialSymbol,
    Comment,
    Eof,
}

impl TokenCategory {
    /// Category name as shown in token tables.
    pub fn as_str(self) -> &'static str {
        match self {
            TokenCategory::Integer => "INTEGER",
            TokenCategory::RealNumber => "REAL_NUMBER",
            TokenCategory::StringLiteral => "STRING_LITERAL",
            TokenCategory::CharacterLiteral => "CHARACTER_LITERAL",
            TokenCategory::Boolean => "BOOLEAN",
            TokenCategory::Identifier => "IDENTIFIER",
            TokenCategory::Keyword => "KEYWORD",
            TokenCategory::ReservedWord => "RESERVED_WORD",
            TokenCategory::DataType => "DATA_TYPE",
            TokenCategory::Assignment => "ASSIGNMENT",
            TokenCategory::Arithmetic => "ARITHMETIC",
            TokenCategory::Relational => "RELATIONAL",
            TokenCategory::Logical => "LOGICAL",
            TokenCategory::Bitwise => "BITWISE",
            TokenCategory::Unary => "UNARY",
            TokenCategory::LParenthesis => "L_PARENTHESIS",
            TokenCategory::RParenthesis => "R_PARENTHESIS",
            TokenCategory::LCurly => "L_CURLY",
            TokenCategory::RCurly => "R_CURLY",
            TokenCategory::LBracket => "L_BRACKET",
            TokenCategory::RBracket => "R_BRACKET",
            TokenCategory::Semicolon => "SEMICOLON",
            TokenCategory::SeparatingSymbol => "SEPARATING_SYMBOL",
            TokenCategory::AccessorSymbol => "ACCESSOR_SYMBOL",
            TokenCategory::SpecialSymbol => "SPECIAL_SYMBOL",
            TokenCategory::Comment => "COMMENT",
            TokenCategory::Eof => "EOF",
        }
    }

    /// Return `true` if a `+`/`-` right after a token of this category is a binary operator rather than a sign.
    pub fn is_value_producing(self) -> bool {
        matches!(
            self,
            TokenCategory::Identifier
                | TokenCategory::Integer
                | TokenCategory::RealNumber
                | TokenCategory::RParenthesis
                | TokenCategory::StringLiteral
                | TokenCategory::CharacterLiteral
                | TokenCategory::Boolean
                | TokenCategory::ReservedWord
                | TokenCategory::RBracket
        )
    }
}

impl fmt::Display for TokenCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A token with its kind, matched text and source span.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    /// Source text for names, numbers and symbols; the decoded value for string and character literals.
    pub lexeme: String,
    pub span: Span,
}

impl Token {
    /// Construct a new token.
    pub fn new(kind: TokenKind, lexeme: impl Into<String>, span: Span) -> Self {
        Self {
            kind,
            lexeme: lexeme.into(),
            span,
        }
    }

    pub fn pos_start(&self) -> &Position {
        &self.span.start
    }

    pub fn pos_end(&self) -> &Position {
        &self.span.end
    }
}
