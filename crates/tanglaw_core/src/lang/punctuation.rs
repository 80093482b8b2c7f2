//! Punctuation vocabulary.
//!
//! This module defines the canonical set of non-operator symbols used by the lexer/parser: brackets, the
//! statement terminator, the argument separator, the member accessor, and the special symbols that lex but have
//! no grammar rule.
//!
//! ## Examples
//! ```rust
//! use tanglaw_core::lang::punctuation::{self, PunctuationCategory, PunctuationId};
//!
//! assert_eq!(punctuation::from_str(";"), Some(PunctuationId::Semicolon));
//! assert_eq!(punctuation::category(PunctuationId::Dot), PunctuationCategory::Accessor);
//! ```

/// Broad syntactic grouping for punctuation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PunctuationCategory {
    /// `:`, `@`, `$`, `\`.
    Special,
    /// `;`.
    Terminating,
    /// `,`.
    Separating,
    /// Brackets and braces.
    Parenthesis,
    /// `.` in member access.
    Accessor,
}

/// Stable identifier for punctuation tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PunctuationId {
    LParen,
    RParen,
    LCurly,
    RCurly,
    LBracket,
    RBracket,
    Semicolon,
    Comma,
    Dot,
    Colon,
    At,
    Dollar,
    Backslash,
}

/// Metadata for a punctuation token.
#[derive(Debug, Clone, Copy)]
pub struct PunctuationInfo {
    pub id: PunctuationId,
    pub canonical: &'static str,
    pub category: PunctuationCategory,
}

/// Registry of all punctuation tokens.
pub const PUNCTUATION: &[PunctuationInfo] = &[
    info(PunctuationId::Colon, ":", PunctuationCategory::Special),
    info(PunctuationId::At, "@", PunctuationCategory::Special),
    info(PunctuationId::Dollar, "$", PunctuationCategory::Special),
    info(PunctuationId::Backslash, "\\", PunctuationCategory::Special),
    info(PunctuationId::Semicolon, ";", PunctuationCategory::Terminating),
    info(PunctuationId::Comma, ",", PunctuationCategory::Separating),
    info(PunctuationId::LParen, "(", PunctuationCategory::Parenthesis),
    info(PunctuationId::RParen, ")", PunctuationCategory::Parenthesis),
    info(PunctuationId::LCurly, "{", PunctuationCategory::Parenthesis),
    info(PunctuationId::RCurly, "}", PunctuationCategory::Parenthesis),
    info(PunctuationId::LBracket, "[", PunctuationCategory::Parenthesis),
    info(PunctuationId::RBracket, "]", PunctuationCategory::Parenthesis),
    info(PunctuationId::Dot, ".", PunctuationCategory::Accessor),
];

/// Return the canonical spelling for a punctuation token.
pub fn as_str(id: PunctuationId) -> &'static str {
    info_for(id).canonical
}

/// Return the category for a punctuation token.
pub fn category(id: PunctuationId) -> PunctuationCategory {
    info_for(id).category
}

/// Return the full metadata entry for a punctuation token.
///
/// ## Panics
/// - If the registry is missing an entry for `id` (this indicates a programming error).
pub fn info_for(id: PunctuationId) -> &'static PunctuationInfo {
    PUNCTUATION
        .iter()
        .find(|p| p.id == id)
        .expect("punctuation info missing")
}

/// Resolve a punctuation spelling to its identifier.
pub fn from_str(s: &str) -> Option<PunctuationId> {
    PUNCTUATION.iter().find(|p| p.canonical == s).map(|p| p.id)
}

const fn info(id: PunctuationId, canonical: &'static str, category: PunctuationCategory) -> PunctuationInfo {
    PunctuationInfo { id, canonical, category }
}
