//! Parser for the TanglawPL programming language
//!
//! Converts a token stream into an AST by predictive recursive descent, with precedence climbing for binary
//! operators. Parsing never stops at the first error: a failed statement is recorded and the parser synchronizes to
//! the next statement boundary.
//!
//! ## Examples
//!
//! ```rust
//! use tanglaw_syntax::{lexer, parser};
//!
//! let (tokens, _) = lexer::tokenize("demo.lit", "int ;  int y = 2;");
//! let (program, errors) = parser::parse(&tokens);
//! assert_eq!(errors.len(), 1);
//! // The partial program still holds the declaration of `y`.
//! assert_eq!(program.unwrap().statements.len(), 1);
//! ```

use crate::ast::*;
use crate::diagnostics::ParseError;
use crate::lexer::{Token, TokenKind};
use tanglaw_core::lang::keywords::{self, KeywordId};
use tanglaw_core::lang::operators::{self, Associativity, OperatorClass, OperatorId};
use tanglaw_core::lang::punctuation::PunctuationId;
use tanglaw_core::lang::reserved::{self, ReservedWordId};
use tanglaw_core::lang::types;

// NOTE: This module is split across multiple files using `include!` to keep all parser
// methods in the same Rust module (preserving privacy + call patterns) while avoiding
// a single large source file.

include!("parser/core.rs");
include!("parser/helpers.rs");
include!("parser/decl.rs");
include!("parser/stmts.rs");
include!("parser/expr.rs");
include!("parser/reserved.rs");
include!("parser/util.rs");
include!("parser/api.rs");
include!("parser/tests.rs");
