//! Class & method tables (C4): a class's own methods, keyed by name for
//! O(1) local lookup, plus an optional parent for single inheritance.

use std::rc::Rc;

use indexmap::IndexMap;

use crate::ast::Block;
use crate::span::Span;

/// A method as stored on a class: its own formal parameters (never
/// including `self` — the method-call frame binds that separately) and its
/// body, evaluated in a fresh closure per call.
#[derive(Clone, Debug)]
pub struct Method {
  pub name: String,
  pub params: Vec<String>,
  pub body: Block,
  pub span: Span,
}

#[derive(Debug)]
pub struct Class {
  pub name: String,
  pub methods: IndexMap<String, Rc<Method>>,
  pub parent: Option<Rc<Class>>,
}

impl Class {
  pub fn new(name: String, methods: IndexMap<String, Rc<Method>>, parent: Option<Rc<Class>>) -> Self {
    Self { name, methods, parent }
  }

  /// Resolves `name` with exactly `arity` formal parameters, walking
  /// `self`, then `parent`, then `parent.parent`, etc. A same-named method
  /// with the wrong arity does *not* shadow an ancestor's matching one —
  /// spec.md's "arity-sensitive lookup" means a class only "has" a method
  /// for the (name, arity) pairs it actually declares.
  pub fn lookup(&self, name: &str, arity: usize) -> Option<Rc<Method>> {
    if let Some(method) = self.methods.get(name) {
      if method.params.len() == arity {
        return Some(method.clone());
      }
    }
    self.parent.as_ref().and_then(|parent| parent.lookup(name, arity))
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn method(name: &str, arity: usize) -> Rc<Method> {
    Rc::new(Method {
      name: name.to_string(),
      params: (0..arity).map(|i| format!("p{i}")).collect(),
      body: Vec::new(),
      span: Span::default(),
    })
  }

  #[test]
  fn lookup_finds_local_method_by_name_and_arity() {
    let mut methods = IndexMap::new();
    methods.insert("greet".to_string(), method("greet", 1));
    let class = Class::new("Greeter".to_string(), methods, None);
    assert!(class.lookup("greet", 1).is_some());
    assert!(class.lookup("greet", 2).is_none());
    assert!(class.lookup("missing", 0).is_none());
  }

  #[test]
  fn lookup_falls_through_to_parent_on_arity_mismatch() {
    let mut parent_methods = IndexMap::new();
    parent_methods.insert("f".to_string(), method("f", 1));
    let parent = Rc::new(Class::new("Base".to_string(), parent_methods, None));

    let mut methods = IndexMap::new();
    methods.insert("f".to_string(), method("f", 2));
    let child = Class::new("Derived".to_string(), methods, Some(parent));

    assert_eq!(child.lookup("f", 2).unwrap().params.len(), 2);
    assert_eq!(child.lookup("f", 1).unwrap().params.len(), 1);
    assert!(child.lookup("f", 3).is_none());
  }

  #[test]
  fn lookup_is_deterministic() {
    let mut methods = IndexMap::new();
    methods.insert("f".to_string(), method("f", 0));
    let class = Class::new("C".to_string(), methods, None);
    let a = class.lookup("f", 0);
    let b = class.lookup("f", 0);
    assert_eq!(a.map(|m| m.name.clone()), b.map(|m| m.name.clone()));
  }
}
