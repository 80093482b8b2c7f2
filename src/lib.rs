#![forbid(unsafe_code)]
//! TanglawPL front end
//!
//! TanglawPL is a small statically-typed teaching language with a built-in geometry vocabulary
//! (`areaOf(circle(5))`, `float d cm = 2.5;`). This crate ties the syntax front end together: it lexes and parses
//! a source file in one call and collects every diagnostic along the way. The `tanglaw` binary is a thin host
//! around it.
//!
//! ## Panic Policy
//!
//! This codebase follows explicit error handling:
//!
//! - **Production code**: Use `Result` or `Option` with `?` / `ok_or` / `map_err`. The `cli` module enforces
//!   `#![deny(clippy::unwrap_used)]`.
//!
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.
//!
//! - **True invariants**: Registry lookups in `tanglaw_core` use `.expect(...)` because a missing entry is a bug in
//!   the table itself, never a property of the input.

pub mod cli;
pub mod config;
pub mod frontend;
pub mod version;

pub use frontend::{Analysis, analyze};
pub use frontend::{ast, diagnostics, lexer, parser};

pub use config::FrontendConfig;
