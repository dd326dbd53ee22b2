//! The lexer (C2): converts a character stream into a token stream with
//! synthesized `Indent`/`Dedent` tokens.
//!
//! INDENT/DEDENT tokens can't be produced by a per-character (or per-regex)
//! scanner in isolation — the decision to open or close a block only makes
//! sense once a complete logical line (skipping blank and comment-only
//! lines) has been seen. This lexer is therefore line-buffered: each call
//! that needs a fresh token first finishes scanning the current logical
//! line into a small queue, then drains it one token at a time.

use std::collections::VecDeque;

use crate::error::Error;
use crate::span::Span;
use crate::token::{Token, TokenKind};

pub struct Lexer<'src> {
  src: &'src str,
  pos: usize,
  indent_stack: Vec<usize>,
  pending: VecDeque<Token>,
  previous: Token,
  current: Token,
  eof_emitted: bool,
}

impl<'src> Lexer<'src> {
  pub fn new(src: &'src str) -> Result<Self, Error> {
    let mut lexer = Lexer {
      src,
      pos: 0,
      indent_stack: vec![0],
      pending: VecDeque::new(),
      previous: Token::new(TokenKind::Eof, 0..0),
      current: Token::new(TokenKind::Eof, 0..0),
      eof_emitted: false,
    };
    lexer.current = lexer.advance_raw()?;
    Ok(lexer)
  }

  pub fn previous(&self) -> &Token {
    &self.previous
  }

  pub fn current(&self) -> &Token {
    &self.current
  }

  pub fn lexeme(&self, token: &Token) -> &'src str {
    &self.src[token.span.range()]
  }

  pub fn bump(&mut self) -> Result<(), Error> {
    let next = self.advance_raw()?;
    self.previous = std::mem::replace(&mut self.current, next);
    Ok(())
  }

  fn advance_raw(&mut self) -> Result<Token, Error> {
    if self.pending.is_empty() {
      self.lex_line()?;
    }
    Ok(self.pending.pop_front().expect("lex_line always queues at least one token"))
  }

  fn peek_char(&self) -> Option<char> {
    self.src[self.pos..].chars().next()
  }

  fn bump_char(&mut self) -> Option<char> {
    let c = self.peek_char()?;
    self.pos += c.len_utf8();
    Some(c)
  }

  fn find_line_end(&self) -> usize {
    self.src[self.pos..]
      .find('\n')
      .map(|i| i + self.pos)
      .unwrap_or(self.src.len())
  }

  fn skip_newline(&mut self) {
    if self.src[self.pos..].starts_with('\n') {
      self.pos += 1;
    }
  }

  /// Scan exactly one logical line's worth of tokens into `self.pending`:
  /// any `Indent`/`Dedent` tokens the line's indentation implies, then the
  /// line's own tokens, then a trailing `Newline`. Blank and comment-only
  /// lines are skipped without producing any tokens, per spec.
  fn lex_line(&mut self) -> Result<(), Error> {
    if self.eof_emitted {
      self.pending.push_back(Token::new(TokenKind::Eof, self.pos..self.pos));
      return Ok(());
    }

    loop {
      if self.pos >= self.src.len() {
        self.drain_indent_to(0);
        self.pending.push_back(Token::new(TokenKind::Eof, self.pos..self.pos));
        self.eof_emitted = true;
        return Ok(());
      }

      let line_start = self.pos;
      let mut indent = 0usize;
      while self.src.as_bytes().get(self.pos) == Some(&b' ') {
        indent += 1;
        self.pos += 1;
      }

      let content_start = self.pos;
      let line_end = self.find_line_end();
      let rest = &self.src[content_start..line_end];

      if rest.trim().is_empty() || rest.trim_start().starts_with('#') {
        self.pos = line_end;
        self.skip_newline();
        continue;
      }

      if indent % 2 != 0 {
        return Err(Error::lexer(
          "indentation must use an even number of spaces",
          line_start..content_start,
        ));
      }

      self.adjust_indent(
        indent,
        Span {
          start: line_start,
          end: content_start,
        },
      );
      self.tokenize_line(line_end)?;
      self.pending.push_back(Token::new(TokenKind::Newline, line_end..line_end));
      self.pos = line_end;
      self.skip_newline();
      return Ok(());
    }
  }

  fn drain_indent_to(&mut self, target: usize) {
    while target < *self.indent_stack.last().unwrap_or(&0) {
      let top = self.indent_stack.pop().unwrap();
      let below = *self.indent_stack.last().unwrap_or(&0);
      let steps = (top - below.max(target)) / 2;
      for _ in 0..steps {
        self.pending.push_back(Token::new(TokenKind::Dedent, self.pos..self.pos));
      }
    }
  }

  fn adjust_indent(&mut self, new_indent: usize, span: Span) {
    let top = *self.indent_stack.last().unwrap();
    if new_indent > top {
      let steps = (new_indent - top) / 2;
      for _ in 0..steps {
        self.pending.push_back(Token::new(TokenKind::Indent, span));
      }
      self.indent_stack.push(new_indent);
    } else {
      while new_indent < *self.indent_stack.last().unwrap() {
        let top = self.indent_stack.pop().unwrap();
        let below = *self.indent_stack.last().unwrap();
        let steps = (top - below) / 2;
        for _ in 0..steps {
          self.pending.push_back(Token::new(TokenKind::Dedent, span));
        }
      }
    }
  }

  fn tokenize_line(&mut self, line_end: usize) -> Result<(), Error> {
    while self.pos < line_end {
      let c = self.peek_char().expect("pos < line_end implies a char is present");
      match c {
        ' ' | '\t' => {
          self.pos += 1;
        }
        '#' => {
          self.pos = line_end;
        }
        '0'..='9' => self.lex_number()?,
        c if c.is_alphabetic() || c == '_' => self.lex_ident(),
        '\'' | '"' => self.lex_string(line_end)?,
        '=' => self.lex_maybe_double('=', TokenKind::Eq, TokenKind::Char('=')),
        '<' => self.lex_maybe_double('=', TokenKind::LessOrEq, TokenKind::Char('<')),
        '>' => self.lex_maybe_double('=', TokenKind::GreaterOrEq, TokenKind::Char('>')),
        '!' => {
          let start = self.pos;
          self.bump_char();
          if self.peek_char() == Some('=') {
            self.bump_char();
            self.pending.push_back(Token::new(TokenKind::NotEq, start..self.pos));
          } else {
            return Err(Error::lexer("stray `!`", start..self.pos));
          }
        }
        other => {
          let start = self.pos;
          self.bump_char();
          self.pending.push_back(Token::new(TokenKind::Char(other), start..self.pos));
        }
      }
    }
    Ok(())
  }

  /// Scans `first-char` optionally followed by `=`, producing `double` if
  /// so and `single` otherwise. Used for `==`, `<=`, `>=`.
  fn lex_maybe_double(&mut self, second: char, double: TokenKind, single: TokenKind) {
    let start = self.pos;
    self.bump_char();
    if self.peek_char() == Some(second) {
      self.bump_char();
      self.pending.push_back(Token::new(double, start..self.pos));
    } else {
      self.pending.push_back(Token::new(single, start..self.pos));
    }
  }

  fn lex_number(&mut self) -> Result<(), Error> {
    let start = self.pos;
    while matches!(self.peek_char(), Some(c) if c.is_ascii_digit()) {
      self.bump_char();
    }
    let text = &self.src[start..self.pos];
    let value = text
      .parse::<i64>()
      .map_err(|_| Error::lexer("number literal out of range for a 64-bit signed integer", start..self.pos))?;
    self.pending.push_back(Token::new(TokenKind::Number(value), start..self.pos));
    Ok(())
  }

  fn lex_ident(&mut self) {
    let start = self.pos;
    while matches!(self.peek_char(), Some(c) if c.is_alphanumeric() || c == '_') {
      self.bump_char();
    }
    let text = &self.src[start..self.pos];
    let kind = TokenKind::keyword(text).unwrap_or_else(|| TokenKind::Id(text.to_string()));
    self.pending.push_back(Token::new(kind, start..self.pos));
  }

  fn lex_string(&mut self, line_end: usize) -> Result<(), Error> {
    let start = self.pos;
    let quote = self.bump_char().expect("caller only calls this on a quote char");
    let mut value = String::new();
    loop {
      if self.pos >= line_end {
        return Err(Error::lexer("unterminated string literal", start..self.pos));
      }
      let c = self.peek_char().expect("pos < line_end implies a char is present");
      if c == quote {
        self.bump_char();
        break;
      }
      if c == '\\' {
        self.bump_char();
        let esc_start = self.pos;
        match self.peek_char() {
          Some('n') => value.push('\n'),
          Some('t') => value.push('\t'),
          Some('r') => value.push('\r'),
          Some('"') => value.push('"'),
          Some('\'') => value.push('\''),
          Some('\\') => value.push('\\'),
          _ => return Err(Error::lexer("unrecognized escape sequence", esc_start..line_end.min(esc_start + 1))),
        }
        self.bump_char();
        continue;
      }
      value.push(c);
      self.bump_char();
    }
    self.pending.push_back(Token::new(TokenKind::String(value), start..self.pos));
    Ok(())
  }
}
