//! Centralized built-in predicates (C7): `IsTrue` and the six comparators.
//! These are exactly the functions `eval::cmp` computes the evaluator's
//! `Comparison`/`Logical` nodes with — re-exported here, ungrouped by AST
//! node, so an embedder (or a test) can call `builtins::equal(...)`
//! directly without going through the evaluator, per spec.md §6.

use crate::error::Error;
use crate::eval::{cmp, Context};
use crate::span::Span;
use crate::value::{Holder, Value};

pub fn is_true(value: &Value) -> bool {
  value.is_true()
}

pub fn equal(lhs: &Holder, rhs: &Holder, ctx: &mut Context, span: Span) -> Result<bool, Error> {
  cmp::equal(lhs, rhs, ctx, span)
}

pub fn not_equal(lhs: &Holder, rhs: &Holder, ctx: &mut Context, span: Span) -> Result<bool, Error> {
  Ok(!equal(lhs, rhs, ctx, span)?)
}

pub fn less(lhs: &Holder, rhs: &Holder, ctx: &mut Context, span: Span) -> Result<bool, Error> {
  cmp::less(lhs, rhs, ctx, span)
}

pub fn greater(lhs: &Holder, rhs: &Holder, ctx: &mut Context, span: Span) -> Result<bool, Error> {
  Ok(!(less(lhs, rhs, ctx, span)? || equal(lhs, rhs, ctx, span)?))
}

pub fn less_or_equal(lhs: &Holder, rhs: &Holder, ctx: &mut Context, span: Span) -> Result<bool, Error> {
  Ok(!greater(lhs, rhs, ctx, span)?)
}

pub fn greater_or_equal(lhs: &Holder, rhs: &Holder, ctx: &mut Context, span: Span) -> Result<bool, Error> {
  Ok(!less(lhs, rhs, ctx, span)?)
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::io;

  #[test]
  fn negated_comparators_match_spec_symmetry() {
    let mut sink = io::sink();
    let mut ctx = Context::new(&mut sink);
    let a = Holder::own(Value::Number(1));
    let b = Holder::own(Value::Number(2));
    let span = Span::default();

    assert_eq!(not_equal(&a, &b, &mut ctx, span).unwrap(), !equal(&a, &b, &mut ctx, span).unwrap());
    assert_eq!(
      greater(&a, &b, &mut ctx, span).unwrap(),
      !(less(&a, &b, &mut ctx, span).unwrap() || equal(&a, &b, &mut ctx, span).unwrap())
    );
    assert_eq!(less_or_equal(&a, &b, &mut ctx, span).unwrap(), !greater(&a, &b, &mut ctx, span).unwrap());
    assert_eq!(greater_or_equal(&a, &b, &mut ctx, span).unwrap(), !less(&a, &b, &mut ctx, span).unwrap());
  }
}
