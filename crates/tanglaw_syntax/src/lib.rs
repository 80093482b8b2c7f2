//! Syntax front end for TanglawPL: source positions, lexer, AST, parser, diagnostics.
//!
//! ## Notes
//! - This crate is syntax-only. Beyond the literal-versus-declared-type check done while parsing declarations, it
//!   performs no semantic analysis.
//! - Vocabulary identity (keywords/data types/reserved words/operators/punctuation) comes from `tanglaw_core::lang`.
//! - Neither the lexer nor the parser stops at the first problem: both return everything they could build plus every
//!   error they found.
//!
//! ## Examples
//! ```rust
//! use tanglaw_syntax::{lexer, parser};
//!
//! let (tokens, lex_errors) = lexer::tokenize("main.lit", "int x = 5;");
//! assert!(lex_errors.is_empty());
//! let (program, parse_errors) = parser::parse(&tokens);
//! assert!(parse_errors.is_empty());
//! assert_eq!(program.unwrap().statements.len(), 1);
//! ```

pub mod ast;
pub mod diagnostics;
pub mod lexer;
pub mod parser;
pub mod source;
pub mod token_helpers;
