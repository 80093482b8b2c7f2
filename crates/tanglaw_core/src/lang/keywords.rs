//! Define the control-flow keyword vocabulary for TanglawPL.
//!
//! This module is the single source of truth for keywords: a stable identifier ([`KeywordId`]) plus a const
//! metadata table ([`KEYWORDS`]) that records canonical spellings and categories.
//!
//! ## Notes
//! - Lookup via [`from_str`] is **case-sensitive**.
//! - Data types (`int`, `String`, ...) and the geometry/unit vocabulary are *not* keywords; see
//!   [`crate::lang::types`] and [`crate::lang::reserved`].
//! - Many entries are reserved for future use and have no parse rule yet (`try`, `switch`, ...). They still lex as
//!   keywords so they cannot be used as variable names.
//!
//! ## Examples
//! ```rust
//! use tanglaw_core::lang::keywords::{self, KeywordCategory, KeywordId};
//!
//! assert_eq!(keywords::from_str("println"), Some(KeywordId::Println));
//! assert_eq!(keywords::category(KeywordId::While), KeywordCategory::ControlFlow);
//! ```

/// Stable identifier for every keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeywordId {
    // Control flow
    If,
    Else,
    While,
    For,
    Do,
    Each,
    Repeat,
    Times,
    Switch,
    Case,
    Default,
    Break,
    Continue,
    Return,
    Try,
    Catch,
    Finally,
    Throw,
    Throws,

    // Input / output
    Print,
    Println,
    Input,

    // Declarations / modifiers
    Main,
    Def,
    Class,
    Import,
    Package,
    Implements,
    Extends,
    Public,
    Protected,
    Private,
    Static,
    Const,
    New,
    This,
}

/// High-level grouping for documentation and tooling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeywordCategory {
    ControlFlow,
    InputOutput,
    Declaration,
}

/// Metadata for a keyword.
#[derive(Debug, Clone, Copy)]
pub struct KeywordInfo {
    pub id: KeywordId,
    pub canonical: &'static str,
    pub category: KeywordCategory,
    /// Whether the parser has a dedicated statement rule starting with this keyword.
    pub starts_statement: bool,
}

/// Registry of all keywords.
///
/// ## Notes
/// - The ordering is not semantically meaningful, but is grouped for readability.
pub const KEYWORDS: &[KeywordInfo] = &[
    // Control flow
    info(KeywordId::If, "if", KeywordCategory::ControlFlow, true),
    info(KeywordId::Else, "else", KeywordCategory::ControlFlow, false),
    info(KeywordId::While, "while", KeywordCategory::ControlFlow, true),
    info(KeywordId::For, "for", KeywordCategory::ControlFlow, true),
    info(KeywordId::Do, "do", KeywordCategory::ControlFlow, false),
    info(KeywordId::Each, "each", KeywordCategory::ControlFlow, false),
    info(KeywordId::Repeat, "repeat", KeywordCategory::ControlFlow, true),
    info(KeywordId::Times, "times", KeywordCategory::ControlFlow, false),
    info(KeywordId::Switch, "switch", KeywordCategory::ControlFlow, false),
    info(KeywordId::Case, "case", KeywordCategory::ControlFlow, false),
    info(KeywordId::Default, "default", KeywordCategory::ControlFlow, false),
    info(KeywordId::Break, "break", KeywordCategory::ControlFlow, false),
    info(KeywordId::Continue, "continue", KeywordCategory::ControlFlow, false),
    info(KeywordId::Return, "return", KeywordCategory::ControlFlow, false),
    info(KeywordId::Try, "try", KeywordCategory::ControlFlow, false),
    info(KeywordId::Catch, "catch", KeywordCategory::ControlFlow, false),
    info(KeywordId::Finally, "finally", KeywordCategory::ControlFlow, false),
    info(KeywordId::Throw, "throw", KeywordCategory::ControlFlow, false),
    info(KeywordId::Throws, "throws", KeywordCategory::ControlFlow, false),
    // Input / output
    info(KeywordId::Print, "print", KeywordCategory::InputOutput, true),
    info(KeywordId::Println, "println", KeywordCategory::InputOutput, true),
    info(KeywordId::Input, "input", KeywordCategory::InputOutput, true),
    // Declarations / modifiers
    info(KeywordId::Main, "main", KeywordCategory::Declaration, false),
    info(KeywordId::Def, "def", KeywordCategory::Declaration, false),
    info(KeywordId::Class, "class", KeywordCategory::Declaration, false),
    info(KeywordId::Import, "import", KeywordCategory::Declaration, false),
    info(KeywordId::Package, "package", KeywordCategory::Declaration, false),
    info(KeywordId::Implements, "implements", KeywordCategory::Declaration, false),
    info(KeywordId::Extends, "extends", KeywordCategory::Declaration, false),
    info(KeywordId::Public, "public", KeywordCategory::Declaration, false),
    info(KeywordId::Protected, "protected", KeywordCategory::Declaration, false),
    info(KeywordId::Private, "private", KeywordCategory::Declaration, false),
    info(KeywordId::Static, "static", KeywordCategory::Declaration, false),
    info(KeywordId::Const, "const", KeywordCategory::Declaration, false),
    info(KeywordId::New, "new", KeywordCategory::Declaration, false),
    info(KeywordId::This, "this", KeywordCategory::Declaration, false),
];

/// Canonical spelling.
pub fn as_str(id: KeywordId) -> &'static str {
    info_for(id).canonical
}

/// Category.
pub fn category(id: KeywordId) -> KeywordCategory {
    info_for(id).category
}

/// Return `true` if the parser has a statement rule introduced by `id`.
pub fn starts_statement(id: KeywordId) -> bool {
    info_for(id).starts_statement
}

/// Full metadata.
///
/// ## Panics
/// - If the registry is missing an entry for `id` (this indicates a programming error).
pub fn info_for(id: KeywordId) -> &'static KeywordInfo {
    KEYWORDS.iter().find(|k| k.id == id).expect("keyword info missing")
}

/// Lookup by spelling.
///
/// ## Returns
/// - `Some(KeywordId)` if the spelling matches this registry.
/// - `None` otherwise.
pub fn from_str(s: &str) -> Option<KeywordId> {
    KEYWORDS.iter().find(|k| k.canonical == s).map(|k| k.id)
}

// --- helpers -----------------------------------------------------------------

const fn info(id: KeywordId, canonical: &'static str, category: KeywordCategory, starts_statement: bool) -> KeywordInfo {
    KeywordInfo {
        id,
        canonical,
        category,
        starts_statement,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_statement_keywords() {
        let starters: Vec<&str> = KEYWORDS
            .iter()
            .filter(|k| k.starts_statement)
            .map(|k| k.canonical)
            .collect();
        assert_eq!(starters, vec!["if", "while", "for", "repeat", "print", "println", "input"]);
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        assert_eq!(from_str("If"), None);
        assert_eq!(from_str("if"), Some(KeywordId::If));
    }
}
