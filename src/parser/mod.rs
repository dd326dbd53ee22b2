//! The parser (C8, glue): recursive-descent construction of the AST from
//! the lexer's token stream. External to the "core" per spec.md §1, but
//! required for the crate to run end to end — see SPEC_FULL.md §4.8 for
//! the grammar this follows.
//!
//! The parser never re-derives indentation itself: it only consumes the
//! `Indent`/`Dedent`/`Newline` tokens the lexer already synthesized.

mod expr;

use crate::ast::{Block, ClassDef, MethodDef, Stmt};
use crate::error::Error;
use crate::lexer::Lexer;
use crate::span::Span;
use crate::token::{Token, TokenKind};

pub struct Parser<'src> {
  lex: Lexer<'src>,
}

pub fn parse(src: &str) -> Result<Block, Error> {
  Parser::new(src)?.program()
}

impl<'src> Parser<'src> {
  pub fn new(src: &'src str) -> Result<Self, Error> {
    Ok(Self { lex: Lexer::new(src)? })
  }

  fn current(&self) -> &Token {
    self.lex.current()
  }

  fn previous_span(&self) -> Span {
    self.lex.previous().span
  }

  fn check(&self, kind: &TokenKind) -> bool {
    self.current().is(kind)
  }

  fn bump(&mut self) -> Result<(), Error> {
    self.lex.bump()
  }

  fn bump_if(&mut self, kind: &TokenKind) -> Result<bool, Error> {
    if self.check(kind) {
      self.bump()?;
      Ok(true)
    } else {
      Ok(false)
    }
  }

  fn expect(&mut self, kind: TokenKind) -> Result<Token, Error> {
    let token = self.current().clone();
    if token.kind == kind {
      self.bump()?;
      Ok(token)
    } else {
      Err(Error::syntax(format!("expected `{}`, found `{}`", kind, token.kind), token.span))
    }
  }

  fn expect_ident(&mut self) -> Result<(String, Span), Error> {
    match self.current().kind.clone() {
      TokenKind::Id(name) => {
        let span = self.current().span;
        self.bump()?;
        Ok((name, span))
      }
      other => Err(Error::syntax(format!("expected an identifier, found `{other}`"), self.current().span)),
    }
  }

  fn skip_newlines(&mut self) -> Result<(), Error> {
    while self.check(&TokenKind::Newline) {
      self.bump()?;
    }
    Ok(())
  }

  pub fn program(&mut self) -> Result<Block, Error> {
    let mut body = Vec::new();
    self.skip_newlines()?;
    while !self.check(&TokenKind::Eof) {
      body.push(self.stmt()?);
      self.skip_newlines()?;
    }
    Ok(body)
  }

  /// A statement's body: either `Newline Indent stmt+ Dedent` (the usual
  /// multi-line block), or a single statement inline on the header's own
  /// line (`if 0: print 'a'`) — spec.md's end-to-end scenario 5 relies on
  /// the inline form.
  fn body(&mut self) -> Result<Block, Error> {
    if self.check(&TokenKind::Newline) {
      self.bump()?;
      self.skip_newlines()?;
      self.expect(TokenKind::Indent)?;
      let mut stmts = Vec::new();
      self.skip_newlines()?;
      while !self.check(&TokenKind::Dedent) {
        stmts.push(self.stmt()?);
        self.skip_newlines()?;
      }
      self.expect(TokenKind::Dedent)?;
      Ok(stmts)
    } else {
      Ok(vec![self.stmt()?])
    }
  }

  fn stmt(&mut self) -> Result<Stmt, Error> {
    match &self.current().kind {
      TokenKind::Class => self.class_stmt(),
      TokenKind::If => self.if_stmt(),
      TokenKind::Return => self.return_stmt(),
      TokenKind::Print => self.print_stmt(),
      TokenKind::Id(_) => self.assign_or_expr_stmt(),
      _ => Ok(Stmt::Expr(self.expr()?)),
    }
  }

  fn class_stmt(&mut self) -> Result<Stmt, Error> {
    let start = self.current().span;
    self.expect(TokenKind::Class)?;
    let (name, _) = self.expect_ident()?;
    let parent = if self.bump_if(&TokenKind::Char('('))? {
      let (parent, _) = self.expect_ident()?;
      self.expect(TokenKind::Char(')'))?;
      Some(parent)
    } else {
      Option::None
    };
    self.expect(TokenKind::Char(':'))?;
    let methods = self.class_body()?;
    let span = start.join(self.previous_span());
    Ok(Stmt::ClassDef(ClassDef { name, parent, methods, span }))
  }

  fn class_body(&mut self) -> Result<Vec<MethodDef>, Error> {
    self.expect(TokenKind::Newline)?;
    self.skip_newlines()?;
    self.expect(TokenKind::Indent)?;
    let mut methods = Vec::new();
    self.skip_newlines()?;
    while !self.check(&TokenKind::Dedent) {
      methods.push(self.method_def()?);
      self.skip_newlines()?;
    }
    self.expect(TokenKind::Dedent)?;
    Ok(methods)
  }

  fn method_def(&mut self) -> Result<MethodDef, Error> {
    let start = self.current().span;
    self.expect(TokenKind::Def)?;
    let (name, _) = self.expect_ident()?;
    self.expect(TokenKind::Char('('))?;
    let mut params = Vec::new();
    if !self.check(&TokenKind::Char(')')) {
      let (param, _) = self.expect_ident()?;
      params.push(param);
      while self.bump_if(&TokenKind::Char(','))? {
        let (param, _) = self.expect_ident()?;
        params.push(param);
      }
    }
    self.expect(TokenKind::Char(')'))?;
    self.expect(TokenKind::Char(':'))?;
    let body = self.body()?;
    let span = start.join(self.previous_span());
    Ok(MethodDef { name, params, body, span })
  }

  fn if_stmt(&mut self) -> Result<Stmt, Error> {
    let start = self.current().span;
    self.expect(TokenKind::If)?;
    let cond = self.expr()?;
    self.expect(TokenKind::Char(':'))?;
    let then_branch = self.body()?;
    let else_branch = if self.check(&TokenKind::Else) {
      self.bump()?;
      self.expect(TokenKind::Char(':'))?;
      Some(self.body()?)
    } else {
      Option::None
    };
    let span = start.join(self.previous_span());
    Ok(Stmt::If { cond, then_branch, else_branch, span })
  }

  fn return_stmt(&mut self) -> Result<Stmt, Error> {
    let start = self.current().span;
    self.expect(TokenKind::Return)?;
    let value = self.expr()?;
    let span = start.join(value.span());
    Ok(Stmt::Return { value, span })
  }

  fn print_stmt(&mut self) -> Result<Stmt, Error> {
    let start = self.current().span;
    self.expect(TokenKind::Print)?;
    let mut args = vec![self.expr()?];
    while self.bump_if(&TokenKind::Char(','))? {
      args.push(self.expr()?);
    }
    let span = start.join(self.previous_span());
    Ok(Stmt::Print { args, span })
  }

  /// An identifier-led statement is either an assignment (`name = expr` or
  /// `a.b.c = expr`) or a bare expression statement (a method call used
  /// for its side effects). `expr()` alone is enough to disambiguate: `=`
  /// isn't a token any expression-precedence level consumes, so parsing
  /// the target as a full expression naturally stops right before it.
  fn assign_or_expr_stmt(&mut self) -> Result<Stmt, Error> {
    let start = self.current().span;
    let target = self.expr()?;
    if self.bump_if(&TokenKind::Char('='))? {
      let value = self.expr()?;
      let span = start.join(value.span());
      return match target {
        crate::ast::Expr::Var(name, _) => Ok(Stmt::Assign { name, value, span }),
        crate::ast::Expr::Field { object, field, .. } => Ok(Stmt::FieldAssign { object: *object, field, value, span }),
        other => Err(Error::syntax("invalid assignment target", other.span())),
      };
    }
    Ok(Stmt::Expr(target))
  }
}

#[cfg(test)]
mod tests;
