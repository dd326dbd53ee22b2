//! An interpreter for a small indentation-sensitive, dynamically-typed
//! object-oriented language: source text goes in, tokens come out of the
//! lexer, the parser builds an AST from those tokens, and the evaluator
//! walks that AST to produce output. See `DESIGN.md` for how each piece is
//! grounded.

pub mod ast;
pub mod builtins;
pub mod cli;
pub mod error;
pub mod eval;
pub mod lexer;
pub mod parser;
pub mod repl;
pub mod span;
pub mod token;
pub mod value;

use std::io::Write;

use indexmap::IndexMap;

pub use error::Error;

/// Lexes, parses, and evaluates `src` against a fresh global closure,
/// writing `print`/`str` output to `out`. The crate's one-call embedding
/// surface (spec.md §6).
pub fn run_source(src: &str, out: &mut dyn Write) -> Result<(), Error> {
  let program = parser::parse(src)?;
  let mut closure = IndexMap::new();
  let mut ctx = eval::Context::new(out);
  eval::exec_program(&program, &mut closure, &mut ctx)
}

/// Like [`run_source`], but stops after parsing — used by `check` and by
/// editor tooling that only wants syntax validation.
pub fn check_source(src: &str) -> Result<(), Error> {
  parser::parse(src)?;
  Ok(())
}
