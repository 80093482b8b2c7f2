//! TanglawPL vocabulary registries.
//!
//! This module is the “front door” for language-level vocabulary: control-flow keywords, data types, the
//! geometry/unit reserved words, operators, and punctuation.
//!
//! The design goal is to avoid stringly-typed checks scattered across the lexer and parser. Callers work with
//! **stable IDs** (e.g. `KeywordId`, `OperatorId`) and look up spellings/metadata via registry tables.
//!
//! ## Notes
//! - Registries are **pure**: no AST types, no IO, no side effects.
//! - The lexer/parser enforce syntax; registries provide spellings and metadata (category, precedence, arity).
//!
//! ## Examples
//! ```rust
//! use tanglaw_core::lang::keywords::{self, KeywordId};
//!
//! assert_eq!(keywords::from_str("repeat"), Some(KeywordId::Repeat));
//! assert_eq!(keywords::as_str(KeywordId::Repeat), "repeat");
//! ```

pub mod keywords;
pub mod operators;
pub mod punctuation;
pub mod reserved;
pub mod types;

/// Spellings of the two boolean literals.
pub const BOOLEAN_LITERALS: &[(&str, bool)] = &[("true", true), ("false", false)];

/// Resolve a boolean literal spelling.
///
/// ## Examples
/// ```rust
/// assert_eq!(tanglaw_core::lang::boolean_from_str("true"), Some(true));
/// assert_eq!(tanglaw_core::lang::boolean_from_str("True"), None);
/// ```
pub fn boolean_from_str(s: &str) -> Option<bool> {
    BOOLEAN_LITERALS.iter().find(|(sp, _)| *sp == s).map(|(_, v)| *v)
}
