//! Precedence-climbing expression parser, mirroring the lineage's
//! `or_expr -> and_expr -> eq_expr -> comp_expr -> add_expr -> mul_expr ->
//! unary_expr -> postfix_expr -> primary_expr` chain, trimmed to the
//! operators spec.md's value/evaluator model actually defines.

use super::Parser;
use crate::ast::{BinaryOp, Expr, UnaryOp};
use crate::error::Error;
use crate::span::Span;
use crate::token::TokenKind;

impl<'src> Parser<'src> {
  pub(super) fn expr(&mut self) -> Result<Expr, Error> {
    self.or_expr()
  }

  fn or_expr(&mut self) -> Result<Expr, Error> {
    let mut left = self.and_expr()?;
    while self.bump_if(&TokenKind::Or)? {
      let right = self.and_expr()?;
      left = binary(BinaryOp::Or, left, right);
    }
    Ok(left)
  }

  fn and_expr(&mut self) -> Result<Expr, Error> {
    let mut left = self.eq_expr()?;
    while self.bump_if(&TokenKind::And)? {
      let right = self.eq_expr()?;
      left = binary(BinaryOp::And, left, right);
    }
    Ok(left)
  }

  fn eq_expr(&mut self) -> Result<Expr, Error> {
    let mut left = self.comp_expr()?;
    loop {
      let op = match &self.current().kind {
        TokenKind::Eq => BinaryOp::Eq,
        TokenKind::NotEq => BinaryOp::NotEq,
        _ => break,
      };
      self.bump()?;
      let right = self.comp_expr()?;
      left = binary(op, left, right);
    }
    Ok(left)
  }

  fn comp_expr(&mut self) -> Result<Expr, Error> {
    let mut left = self.add_expr()?;
    loop {
      let op = match &self.current().kind {
        TokenKind::Char('<') => BinaryOp::Less,
        TokenKind::LessOrEq => BinaryOp::LessEq,
        TokenKind::Char('>') => BinaryOp::Greater,
        TokenKind::GreaterOrEq => BinaryOp::GreaterEq,
        _ => break,
      };
      self.bump()?;
      let right = self.add_expr()?;
      left = binary(op, left, right);
    }
    Ok(left)
  }

  fn add_expr(&mut self) -> Result<Expr, Error> {
    let mut left = self.mul_expr()?;
    loop {
      let op = match &self.current().kind {
        TokenKind::Char('+') => BinaryOp::Add,
        TokenKind::Char('-') => BinaryOp::Sub,
        _ => break,
      };
      self.bump()?;
      let right = self.mul_expr()?;
      left = binary(op, left, right);
    }
    Ok(left)
  }

  fn mul_expr(&mut self) -> Result<Expr, Error> {
    let mut left = self.unary_expr()?;
    loop {
      let op = match &self.current().kind {
        TokenKind::Char('*') => BinaryOp::Mul,
        TokenKind::Char('/') => BinaryOp::Div,
        _ => break,
      };
      self.bump()?;
      let right = self.unary_expr()?;
      left = binary(op, left, right);
    }
    Ok(left)
  }

  fn unary_expr(&mut self) -> Result<Expr, Error> {
    if self.check(&TokenKind::Not) {
      let start = self.current().span.start;
      self.bump()?;
      let value = self.unary_expr()?;
      let span = Span { start, end: value.span().end };
      return Ok(Expr::Unary { op: UnaryOp::Not, value: Box::new(value), span });
    }
    if self.check(&TokenKind::Char('-')) {
      let start = self.current().span.start;
      self.bump()?;
      let value = self.unary_expr()?;
      let span = Span { start, end: value.span().end };
      return Ok(Expr::Unary { op: UnaryOp::Neg, value: Box::new(value), span });
    }
    self.postfix_expr()
  }

  fn postfix_expr(&mut self) -> Result<Expr, Error> {
    let mut expr = self.primary_expr()?;
    loop {
      if self.bump_if(&TokenKind::Char('.'))? {
        let start = expr.span().start;
        let (name, name_span) = self.expect_ident()?;
        if self.check(&TokenKind::Char('(')) {
          let args = self.call_args()?;
          let end = self.previous_span().end;
          expr = Expr::Call { receiver: Box::new(expr), method: name, args, span: Span { start, end } };
        } else {
          expr = Expr::Field { object: Box::new(expr), field: name, span: Span { start, end: name_span.end } };
        }
      } else {
        break;
      }
    }
    Ok(expr)
  }

  fn call_args(&mut self) -> Result<Vec<Expr>, Error> {
    self.expect(TokenKind::Char('('))?;
    let mut args = Vec::new();
    if !self.check(&TokenKind::Char(')')) {
      args.push(self.expr()?);
      while self.bump_if(&TokenKind::Char(','))? {
        args.push(self.expr()?);
      }
    }
    self.expect(TokenKind::Char(')'))?;
    Ok(args)
  }

  fn primary_expr(&mut self) -> Result<Expr, Error> {
    let token = self.current().clone();
    match token.kind.clone() {
      TokenKind::None => {
        self.bump()?;
        Ok(Expr::None(token.span))
      }
      TokenKind::True => {
        self.bump()?;
        Ok(Expr::Bool(true, token.span))
      }
      TokenKind::False => {
        self.bump()?;
        Ok(Expr::Bool(false, token.span))
      }
      TokenKind::Number(n) => {
        self.bump()?;
        Ok(Expr::Number(n, token.span))
      }
      TokenKind::String(s) => {
        self.bump()?;
        Ok(Expr::Str(s, token.span))
      }
      // `str(...)` is the one built-in function call the grammar
      // recognizes; every other `Ident(args)` is a NewInstance — the
      // language has no user-defined free functions, so there's no other
      // thing that syntax could mean.
      TokenKind::Id(name) if name == "str" => {
        self.bump()?;
        if self.check(&TokenKind::Char('(')) {
          self.bump()?;
          let value = self.expr()?;
          let close = self.expect(TokenKind::Char(')'))?;
          Ok(Expr::Stringify { value: Box::new(value), span: token.span.join(close.span) })
        } else {
          Ok(Expr::Var(name, token.span))
        }
      }
      TokenKind::Id(name) => {
        self.bump()?;
        if self.check(&TokenKind::Char('(')) {
          let args = self.call_args()?;
          let span = token.span.join(self.previous_span());
          Ok(Expr::New { class: name, args, span })
        } else {
          Ok(Expr::Var(name, token.span))
        }
      }
      TokenKind::Char('(') => {
        self.bump()?;
        let inner = self.expr()?;
        self.expect(TokenKind::Char(')'))?;
        Ok(inner)
      }
      other => Err(Error::syntax(format!("unexpected token `{other}`"), token.span)),
    }
  }
}

fn binary(op: BinaryOp, left: Expr, right: Expr) -> Expr {
  let span = left.span().join(right.span());
  Expr::Binary { op, lhs: Box::new(left), rhs: Box::new(right), span }
}
