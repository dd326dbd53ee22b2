//! Comparators (C6/C7): `Equal`/`Less` are the two primitive comparisons,
//! each with a dunder-dispatch hook (`__eq__`/`__lt__`); every other
//! comparator in spec.md §4.6 is derived from these two, never
//! hand-duplicated per direction — `NotEqual = !Equal`, `Greater =
//! !(Less || Equal)`, `LessOrEqual = !Greater`, `GreaterOrEqual = !Less`.

use crate::error::Error;
use crate::span::Span;
use crate::value::{Holder, Value};

use super::{call_method, Context};

pub fn equal(lhs: &Holder, rhs: &Holder, ctx: &mut Context, span: Span) -> Result<bool, Error> {
  if lhs.is_empty() && rhs.is_empty() {
    return Ok(true);
  }
  match (lhs.get(), rhs.get()) {
    (Value::Bool(a), Value::Bool(b)) => Ok(a == b),
    (Value::Number(a), Value::Number(b)) => Ok(a == b),
    (Value::String(a), Value::String(b)) => Ok(a == b),
    (Value::Instance(instance), _) => match instance.class.lookup("__eq__", 1) {
      Some(method) => Ok(call_method(lhs, &method, vec![rhs.share()], ctx, span)?.get().is_true()),
      Option::None => Err(cannot_compare(&Value::Instance(instance), &rhs.get(), span)),
    },
    (left, right) => Err(cannot_compare(&left, &right, span)),
  }
}

pub fn less(lhs: &Holder, rhs: &Holder, ctx: &mut Context, span: Span) -> Result<bool, Error> {
  match (lhs.get(), rhs.get()) {
    (Value::Bool(a), Value::Bool(b)) => Ok(!a && b),
    (Value::Number(a), Value::Number(b)) => Ok(a < b),
    (Value::String(a), Value::String(b)) => Ok(a < b),
    (Value::Instance(instance), _) => match instance.class.lookup("__lt__", 1) {
      Some(method) => Ok(call_method(lhs, &method, vec![rhs.share()], ctx, span)?.get().is_true()),
      Option::None => Err(cannot_compare(&Value::Instance(instance), &rhs.get(), span)),
    },
    (left, right) => Err(cannot_compare(&left, &right, span)),
  }
}

fn cannot_compare(lhs: &Value, rhs: &Value, span: Span) -> Error {
  Error::runtime(
    format!("cannot compare a {} and a {}", lhs.type_name(), rhs.type_name()),
    span,
  )
}
