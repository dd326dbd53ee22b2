//! The crate's error taxonomy: lexer, syntax (parser), and runtime errors,
//! all carried as [`SpannedError`]s and unified under [`Error`].

use std::error::Error as StdError;
use std::fmt::{self, Display};

use crate::span::SpannedError;

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Ill-formed source text: bad indent parity, unterminated string literal,
/// unrecognized escape, newline inside a string, a solitary `!`.
#[derive(Clone, Debug)]
pub struct LexerError(pub SpannedError);

/// A token stream that does not form a valid program.
#[derive(Clone, Debug)]
pub struct SyntaxError(pub SpannedError);

/// A failure during AST evaluation: unknown variable, missing method of the
/// required arity, a type mismatch in arithmetic/comparison, division by
/// zero.
#[derive(Clone, Debug)]
pub struct RuntimeError(pub SpannedError);

#[derive(Debug)]
pub enum Error {
  Lexer(LexerError),
  Syntax(SyntaxError),
  Runtime(RuntimeError),
}

impl Error {
  pub fn lexer(message: impl ToString, span: impl Into<crate::span::Span>) -> Self {
    Error::Lexer(LexerError(SpannedError::new(message, span)))
  }

  pub fn syntax(message: impl ToString, span: impl Into<crate::span::Span>) -> Self {
    Error::Syntax(SyntaxError(SpannedError::new(message, span)))
  }

  pub fn runtime(message: impl ToString, span: impl Into<crate::span::Span>) -> Self {
    Error::Runtime(RuntimeError(SpannedError::new(message, span)))
  }

  /// Render a source snippet for this error, the way the CLI and REPL do.
  pub fn report(&self, src: &str, use_color: bool) -> String {
    match self {
      Error::Lexer(LexerError(e)) => e.report(src, use_color),
      Error::Syntax(SyntaxError(e)) => e.report(src, use_color),
      Error::Runtime(RuntimeError(e)) => e.report(src, use_color),
    }
  }
}

impl From<LexerError> for Error {
  fn from(value: LexerError) -> Self {
    Error::Lexer(value)
  }
}

impl From<SyntaxError> for Error {
  fn from(value: SyntaxError) -> Self {
    Error::Syntax(value)
  }
}

impl From<RuntimeError> for Error {
  fn from(value: RuntimeError) -> Self {
    Error::Runtime(value)
  }
}

impl Display for Error {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Error::Lexer(LexerError(e)) => write!(f, "{e}"),
      Error::Syntax(SyntaxError(e)) => write!(f, "{e}"),
      Error::Runtime(RuntimeError(e)) => write!(f, "{e}"),
    }
  }
}

impl StdError for Error {}
