//! The token model (C1): a discriminated union of token kinds, compared
//! structurally and dumped in a stable textual form for tests.

use std::fmt::{self, Display};

use crate::span::Span;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TokenKind {
  Number(i64),
  Id(String),
  String(String),
  Char(char),

  Class,
  Return,
  If,
  Else,
  Def,
  Print,
  And,
  Or,
  Not,
  None,
  True,
  False,

  Eq,
  NotEq,
  LessOrEq,
  GreaterOrEq,

  Newline,
  Indent,
  Dedent,
  Eof,
}

impl TokenKind {
  pub fn keyword(ident: &str) -> Option<TokenKind> {
    use TokenKind::*;
    Some(match ident {
      "class" => Class,
      "return" => Return,
      "if" => If,
      "else" => Else,
      "def" => Def,
      "print" => Print,
      "and" => And,
      "or" => Or,
      "not" => Not,
      "None" => None,
      "True" => True,
      "False" => False,
      _ => return Option::None,
    })
  }

  /// A stable name for this variant, used both by [`Display`] and by the
  /// dump format tests assert against.
  pub fn name(&self) -> &'static str {
    use TokenKind::*;
    match self {
      Number(_) => "Number",
      Id(_) => "Id",
      String(_) => "String",
      Char(_) => "Char",
      Class => "Class",
      Return => "Return",
      If => "If",
      Else => "Else",
      Def => "Def",
      Print => "Print",
      And => "And",
      Or => "Or",
      Not => "Not",
      None => "None",
      True => "True",
      False => "False",
      Eq => "Eq",
      NotEq => "NotEq",
      LessOrEq => "LessOrEq",
      GreaterOrEq => "GreaterOrEq",
      Newline => "Newline",
      Indent => "Indent",
      Dedent => "Dedent",
      Eof => "Eof",
    }
  }
}

/// `Name{value}` for valued variants, bare `Name` for valueless ones —
/// the dump format the round-trip tests in spec §8 rely on.
impl Display for TokenKind {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    use TokenKind::*;
    match self {
      Number(n) => write!(f, "Number{{{n}}}"),
      Id(s) => write!(f, "Id{{{s}}}"),
      String(s) => write!(f, "String{{{s}}}"),
      Char(c) => write!(f, "Char{{{c}}}"),
      _ => write!(f, "{}", self.name()),
    }
  }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
  pub kind: TokenKind,
  pub span: Span,
}

impl Token {
  pub fn new(kind: TokenKind, span: impl Into<Span>) -> Self {
    Self {
      kind,
      span: span.into(),
    }
  }

  pub fn is(&self, kind: &TokenKind) -> bool {
    &self.kind == kind
  }
}

impl Display for Token {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    Display::fmt(&self.kind, f)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn valued_variants_dump_with_payload() {
    assert_eq!(TokenKind::Number(42).to_string(), "Number{42}");
    assert_eq!(TokenKind::Id("x".into()).to_string(), "Id{x}");
    assert_eq!(TokenKind::String("hi".into()).to_string(), "String{hi}");
    assert_eq!(TokenKind::Char('!').to_string(), "Char{!}");
  }

  #[test]
  fn valueless_variants_dump_bare() {
    assert_eq!(TokenKind::Eof.to_string(), "Eof");
    assert_eq!(TokenKind::Indent.to_string(), "Indent");
  }

  #[test]
  fn equality_is_structural() {
    assert_eq!(TokenKind::Number(1), TokenKind::Number(1));
    assert_ne!(TokenKind::Number(1), TokenKind::Number(2));
    assert_eq!(TokenKind::Eof, TokenKind::Eof);
  }

  #[test]
  fn keywords_are_recognized() {
    assert_eq!(TokenKind::keyword("class"), Some(TokenKind::Class));
    assert_eq!(TokenKind::keyword("True"), Some(TokenKind::True));
    assert_eq!(TokenKind::keyword("frobnicate"), Option::None);
  }
}
