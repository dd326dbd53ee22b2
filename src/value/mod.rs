//! The value model (C3): a closed, tagged union of runtime values.
//!
//! A fixed, closed set of kinds is a natural fit for a plain Rust `enum`
//! rather than an inheritance hierarchy (spec.md §9, "polymorphism over
//! value kinds") — printing and truthiness are implemented as functions
//! over the enum instead of a trait object per kind.

pub mod class;
pub mod holder;
pub mod instance;

use std::rc::Rc;

pub use class::{Class, Method};
pub use holder::Holder;
pub use instance::Instance;

use crate::error::Error;
use crate::eval::Context;
use crate::span::Span;

#[derive(Clone, Debug)]
pub enum Value {
  None,
  Bool(bool),
  Number(i64),
  String(String),
  Class(Rc<Class>),
  Instance(Rc<Instance>),
}

impl Value {
  /// Truthiness coercion (§4.3): `None` and objects are always false,
  /// primitives coerce by their own notion of emptiness/zero.
  pub fn is_true(&self) -> bool {
    match self {
      Value::None => false,
      Value::Bool(b) => *b,
      Value::Number(n) => *n != 0,
      Value::String(s) => !s.is_empty(),
      Value::Class(_) | Value::Instance(_) => false,
    }
  }

  pub fn type_name(&self) -> &'static str {
    match self {
      Value::None => "None",
      Value::Bool(_) => "Bool",
      Value::Number(_) => "Number",
      Value::String(_) => "String",
      Value::Class(_) => "Class",
      Value::Instance(_) => "ClassInstance",
    }
  }

  /// The textual form `Print`/`Stringify` use: primitives print in their
  /// built-in form, a `ClassInstance` defers to `__str__` if it has one
  /// with zero parameters, otherwise falls back to a stable debug token.
  pub fn print_form(&self, ctx: &mut Context, span: Span) -> Result<String, Error> {
    Ok(match self {
      Value::None => "None".to_string(),
      Value::Bool(true) => "True".to_string(),
      Value::Bool(false) => "False".to_string(),
      Value::Number(n) => n.to_string(),
      Value::String(s) => s.clone(),
      Value::Class(c) => format!("Class {}", c.name),
      Value::Instance(instance) => match instance.class.lookup("__str__", 0) {
        Some(method) => {
          let self_holder = Holder::own(Value::Instance(instance.clone()));
          let result = crate::eval::call_method(&self_holder, &method, Vec::new(), ctx, span)?;
          result.get().print_form(ctx, span)?
        }
        Option::None => format!("<{} instance>", instance.class.name),
      },
    })
  }
}
