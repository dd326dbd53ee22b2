//! Class instances (C4/§4.6): a reference to the defining class plus an
//! owned closure of field bindings. Fields are created on first
//! field-assignment — there is no predeclared field list.

use std::cell::RefCell;
use std::rc::Rc;

use super::class::Class;
use super::holder::Holder;
use crate::eval::Closure;

#[derive(Debug)]
pub struct Instance {
  pub class: Rc<Class>,
  fields: RefCell<Closure>,
}

impl Instance {
  pub fn new(class: Rc<Class>) -> Self {
    Self {
      class,
      fields: RefCell::new(Closure::new()),
    }
  }

  pub fn get_field(&self, name: &str) -> Option<Holder> {
    self.fields.borrow().get(name).cloned()
  }

  pub fn set_field(&self, name: &str, value: Holder) {
    self.fields.borrow_mut().insert(name.to_string(), value);
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::value::Value;
  use indexmap::IndexMap;

  #[test]
  fn fields_are_created_on_first_assignment() {
    let class = Rc::new(Class::new("Point".to_string(), IndexMap::new(), None));
    let instance = Instance::new(class);
    assert!(instance.get_field("x").is_none());
    instance.set_field("x", Holder::own(Value::Number(3)));
    assert!(matches!(instance.get_field("x").unwrap().get(), Value::Number(3)));
  }
}
