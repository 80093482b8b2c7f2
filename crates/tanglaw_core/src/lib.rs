//! Canonical language vocabulary for TanglawPL.
//!
//! This crate is intentionally small and dependency-free. It holds the closed word and symbol sets that the lexer
//! classifies against and that the parser dispatches on, plus the one semantic helper the parser is allowed to use
//! (literal/declared-type compatibility).
//!
//! ## Notes
//!
//! - **No IO**, no global mutable state, no syntax types (tokens/AST live in `tanglaw_syntax`).
//! - Callers work with stable IDs (`KeywordId`, `OperatorId`, ...) and look up spellings through the registries.

pub mod lang;
