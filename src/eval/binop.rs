//! Arithmetic operators (C6/C7): `Add`/`Sub`/`Mul`/`Div` over `Number`,
//! plus `Add`'s two extra hooks — `String` concatenation and the
//! `__add__` dunder dispatch on a class instance.

use crate::error::Error;
use crate::span::Span;
use crate::value::{Holder, Value};

use super::{call_method, Context};

pub fn add(lhs: &Holder, rhs: &Holder, ctx: &mut Context, span: Span) -> Result<Holder, Error> {
  match (lhs.get(), rhs.get()) {
    (Value::Number(a), Value::Number(b)) => Ok(Holder::own(Value::Number(a.wrapping_add(b)))),
    (Value::String(a), Value::String(b)) => Ok(Holder::own(Value::String(a + &b))),
    (Value::Instance(instance), _) => match instance.class.lookup("__add__", 1) {
      Some(method) => call_method(lhs, &method, vec![rhs.share()], ctx, span),
      Option::None => Err(type_error("+", &Value::Instance(instance), &rhs.get(), span)),
    },
    (left, right) => Err(type_error("+", &left, &right, span)),
  }
}

pub fn sub(lhs: &Holder, rhs: &Holder, span: Span) -> Result<Holder, Error> {
  match (lhs.get(), rhs.get()) {
    (Value::Number(a), Value::Number(b)) => Ok(Holder::own(Value::Number(a.wrapping_sub(b)))),
    (left, right) => Err(type_error("-", &left, &right, span)),
  }
}

pub fn mul(lhs: &Holder, rhs: &Holder, span: Span) -> Result<Holder, Error> {
  match (lhs.get(), rhs.get()) {
    (Value::Number(a), Value::Number(b)) => Ok(Holder::own(Value::Number(a.wrapping_mul(b)))),
    (left, right) => Err(type_error("*", &left, &right, span)),
  }
}

pub fn div(lhs: &Holder, rhs: &Holder, span: Span) -> Result<Holder, Error> {
  match (lhs.get(), rhs.get()) {
    (Value::Number(_), Value::Number(0)) => Err(Error::runtime("division by zero", span)),
    (Value::Number(a), Value::Number(b)) => Ok(Holder::own(Value::Number(a / b))),
    (left, right) => Err(type_error("/", &left, &right, span)),
  }
}

fn type_error(op: &str, lhs: &Value, rhs: &Value, span: Span) -> Error {
  Error::runtime(
    format!("cannot apply `{op}` to a {} and a {}", lhs.type_name(), rhs.type_name()),
    span,
  )
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::io;

  #[test]
  fn numbers_add_subtract_multiply_divide() {
    let mut sink = io::sink();
    let mut ctx = Context::new(&mut sink);
    let a = Holder::own(Value::Number(6));
    let b = Holder::own(Value::Number(4));
    assert!(matches!(add(&a, &b, &mut ctx, Span::default()).unwrap().get(), Value::Number(10)));
    assert!(matches!(sub(&a, &b, Span::default()).unwrap().get(), Value::Number(2)));
    assert!(matches!(mul(&a, &b, Span::default()).unwrap().get(), Value::Number(24)));
    assert!(matches!(div(&a, &b, Span::default()).unwrap().get(), Value::Number(1)));
  }

  #[test]
  fn division_by_zero_is_a_runtime_error() {
    let zero = Holder::own(Value::Number(0));
    let one = Holder::own(Value::Number(1));
    assert!(div(&one, &zero, Span::default()).is_err());
  }

  #[test]
  fn strings_concatenate() {
    let mut sink = io::sink();
    let mut ctx = Context::new(&mut sink);
    let a = Holder::own(Value::String("hello ".into()));
    let b = Holder::own(Value::String("world".into()));
    match add(&a, &b, &mut ctx, Span::default()).unwrap().get() {
      Value::String(s) => assert_eq!(s, "hello world"),
      _ => panic!("expected a string"),
    }
  }
}
