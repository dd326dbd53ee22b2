//! Byte-offset spans and span-carrying errors used for diagnostics.

use std::error::Error as StdError;
use std::fmt::{self, Display, Write};
use std::ops::Range;

/// A span of bytes in some source string.
///
/// Like [`std::ops::Range<usize>`], but [`Copy`], since it's attached to
/// every token and AST node.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Span {
  pub start: usize,
  pub end: usize,
}

impl Span {
  /// A span starting at `self.start` and ending at `other.end`.
  pub fn join(&self, other: Span) -> Span {
    Span {
      start: self.start,
      end: other.end,
    }
  }

  pub fn range(&self) -> Range<usize> {
    self.start..self.end
  }

  pub fn is_empty(&self) -> bool {
    self.start == self.end
  }
}

impl From<Range<usize>> for Span {
  fn from(value: Range<usize>) -> Self {
    Self {
      start: value.start,
      end: value.end,
    }
  }
}

impl From<Span> for Range<usize> {
  fn from(value: Span) -> Self {
    value.start..value.end
  }
}

impl Display for Span {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}..{}", self.start, self.end)
  }
}

/// An error tied to a location in the source text.
#[derive(Clone, Debug)]
pub struct SpannedError {
  pub span: Span,
  pub message: String,
}

impl SpannedError {
  pub fn new(message: impl ToString, span: impl Into<Span>) -> Self {
    Self {
      span: span.into(),
      message: message.to_string(),
    }
  }

  /// Render a one- or two-line snippet of `src` underlining this error's
  /// span, preceded by the message. Falls back to a bare message for a
  /// zero-width span (e.g. an error synthesized at end-of-input).
  pub fn report(&self, src: &str, use_color: bool) -> String {
    if self.span.is_empty() {
      return self.message.clone();
    }
    if self.span.start > src.len() || self.span.end > src.len() {
      return self.message.clone();
    }

    let line_start = src[..self.span.start].rfind('\n').map(|i| i + 1).unwrap_or(0);
    let line_end = src[self.span.end..]
      .find('\n')
      .map(|v| v + self.span.end)
      .unwrap_or(src.len());

    let (reset, underline) = if use_color {
      ("\x1b[0m", "\x1b[4;31m")
    } else {
      ("", "")
    };

    let pre = &src[line_start..self.span.start];
    let content = &src[self.span.start..self.span.end];
    let post = &src[self.span.end..line_end];

    let mut out = String::new();
    writeln!(out, "{}", self.message).unwrap();
    write!(out, "| {pre}{underline}{content}{reset}{post}").unwrap();
    out
  }
}

impl Display for SpannedError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.message)
  }
}

impl StdError for SpannedError {}
