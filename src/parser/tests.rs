use super::*;
use crate::ast::{BinaryOp, Expr, Stmt};

#[test]
fn parses_simple_assignment() {
  let body = parse("x = 4\n").unwrap();
  assert_eq!(body.len(), 1);
  match &body[0] {
    Stmt::Assign { name, value, .. } => {
      assert_eq!(name, "x");
      assert!(matches!(value, Expr::Number(4, _)));
    }
    other => panic!("expected an assignment, got {other:?}"),
  }
}

#[test]
fn parses_field_assignment() {
  let body = parse("self.x = a\n").unwrap();
  match &body[0] {
    Stmt::FieldAssign { field, .. } => assert_eq!(field, "x"),
    other => panic!("expected a field assignment, got {other:?}"),
  }
}

#[test]
fn parses_binary_precedence() {
  // `1 + 2 * 3` should parse as `1 + (2 * 3)`.
  let body = parse("print 1 + 2 * 3\n").unwrap();
  let Stmt::Print { args, .. } = &body[0] else { panic!("expected print") };
  match &args[0] {
    Expr::Binary { op: BinaryOp::Add, rhs, .. } => {
      assert!(matches!(**rhs, Expr::Binary { op: BinaryOp::Mul, .. }));
    }
    other => panic!("expected a `+` at the top, got {other:?}"),
  }
}

#[test]
fn parses_inline_if_else() {
  let body = parse("if 0:\n  print 'a'\nelse:\n  print 'b'\n").unwrap();
  assert_eq!(body.len(), 1);
  assert!(matches!(body[0], Stmt::If { .. }));
}

#[test]
fn parses_single_line_if_else() {
  let body = parse("if 0: print 'a'\nelse: print 'b'\n").unwrap();
  let Stmt::If { then_branch, else_branch, .. } = &body[0] else { panic!("expected if") };
  assert_eq!(then_branch.len(), 1);
  assert_eq!(else_branch.as_ref().unwrap().len(), 1);
}

#[test]
fn parses_class_with_methods_and_parent() {
  let src = "class Base:\n  def __init__():\n    x = 1\nclass Child(Base):\n  def __init__():\n    x = 2\n";
  let body = parse(src).unwrap();
  assert_eq!(body.len(), 2);
  let Stmt::ClassDef(def) = &body[1] else { panic!("expected class def") };
  assert_eq!(def.name, "Child");
  assert_eq!(def.parent.as_deref(), Some("Base"));
  assert_eq!(def.methods.len(), 1);
  assert_eq!(def.methods[0].name, "__init__");
}

#[test]
fn parses_new_instance_and_method_call() {
  let body = parse("p = Point(3, 4)\np.move(1, 1)\n").unwrap();
  match &body[0] {
    Stmt::Assign { value: Expr::New { class, args, .. }, .. } => {
      assert_eq!(class, "Point");
      assert_eq!(args.len(), 2);
    }
    other => panic!("expected a NewInstance assignment, got {other:?}"),
  }
  match &body[1] {
    Stmt::Expr(Expr::Call { method, args, .. }) => {
      assert_eq!(method, "move");
      assert_eq!(args.len(), 2);
    }
    other => panic!("expected a method-call statement, got {other:?}"),
  }
}

#[test]
fn parses_stringify_builtin() {
  let body = parse("print str(1)\n").unwrap();
  let Stmt::Print { args, .. } = &body[0] else { panic!("expected print") };
  assert!(matches!(args[0], Expr::Stringify { .. }));
}

#[test]
fn invalid_assignment_target_is_a_syntax_error() {
  assert!(parse("1 = 2\n").is_err());
}

#[test]
fn bare_method_call_is_an_expression_statement() {
  let body = parse("obj.greet()\n").unwrap();
  assert!(matches!(body[0], Stmt::Expr(Expr::Call { .. })));
}
