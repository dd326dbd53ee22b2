//! The tree-walking evaluator (C6): statement and expression node
//! semantics over the AST, threading a [`Closure`] (lexical scope) and a
//! [`Context`] (output stream) through the tree exactly as spec.md §4.6
//! describes.

pub mod binop;
pub mod cmp;

use std::io::Write;
use std::rc::Rc;

use indexmap::IndexMap;

use crate::ast::{BinaryOp, Block, Expr, Stmt, UnaryOp};
use crate::error::Error;
use crate::span::Span;
use crate::value::class::{Class, Method};
use crate::value::instance::Instance;
use crate::value::{Holder, Value};

/// A lexical scope frame: name to value-holder. Used both as the global
/// scope and as each method call's fresh frame; insertion order carries no
/// semantic weight (spec.md §3), `IndexMap` is used purely because it's
/// this crate's one ordered-map type already in the dependency graph.
pub type Closure = IndexMap<String, Holder>;

/// The execution environment threaded through every node: the output
/// stream, and the "self name" hint `Assignment`/`NewInstance` share (see
/// spec.md §9, "the self name hack").
pub struct Context<'out> {
  pub out: &'out mut dyn Write,
  pub self_name: Option<String>,
}

impl<'out> Context<'out> {
  pub fn new(out: &'out mut dyn Write) -> Self {
    Self { out, self_name: Option::None }
  }
}

/// Non-local control flow out of a method body. `Return` is caught at the
/// `MethodBody` boundary ([`call_method`]); `Error` propagates all the way
/// to the top via `?`.
enum Unwind {
  Return(Holder),
  Error(Error),
}

impl From<Error> for Unwind {
  fn from(value: Error) -> Self {
    Unwind::Error(value)
  }
}

type EvalResult<T> = Result<T, Unwind>;

/// Executes a parsed program's top-level statements against `closure` and
/// `ctx`. A top-level `return` (outside any method) simply ends execution
/// early rather than erroring — there is no enclosing `MethodBody` frame
/// for it to unwind out of, so treating it as "stop running" is the
/// closest analogue to the spec's method-scoped `Return`.
pub fn exec_program(program: &Block, closure: &mut Closure, ctx: &mut Context) -> Result<(), Error> {
  match exec_block(program, closure, ctx) {
    Ok(()) | Err(Unwind::Return(_)) => Ok(()),
    Err(Unwind::Error(e)) => Err(e),
  }
}

fn exec_block(block: &Block, closure: &mut Closure, ctx: &mut Context) -> EvalResult<()> {
  for stmt in block {
    exec_stmt(stmt, closure, ctx)?;
  }
  Ok(())
}

fn exec_stmt(stmt: &Stmt, closure: &mut Closure, ctx: &mut Context) -> EvalResult<()> {
  match stmt {
    Stmt::ClassDef(def) => {
      let parent = match &def.parent {
        Some(name) => match closure.get(name).map(Holder::get) {
          Some(Value::Class(parent)) => Some(parent),
          Some(_) => return Err(Error::runtime(format!("`{name}` is not a class"), def.span).into()),
          Option::None => return Err(Error::runtime(format!("unknown class `{name}`"), def.span).into()),
        },
        Option::None => Option::None,
      };
      let mut methods = IndexMap::new();
      for m in &def.methods {
        methods.insert(
          m.name.clone(),
          Rc::new(Method {
            name: m.name.clone(),
            params: m.params.clone(),
            body: m.body.clone(),
            span: m.span,
          }),
        );
      }
      let class = Rc::new(Class::new(def.name.clone(), methods, parent));
      closure.insert(def.name.clone(), Holder::own(Value::Class(class)));
      Ok(())
    }
    Stmt::Assign { name, value, .. } => {
      ctx.self_name = Some(name.clone());
      let result = eval_expr(value, closure, ctx);
      ctx.self_name = Option::None;
      let holder = result?;
      closure.insert(name.clone(), holder);
      Ok(())
    }
    Stmt::FieldAssign { object, field, value, span } => {
      let object_holder = eval_expr(object, closure, ctx)?;
      let value_holder = eval_expr(value, closure, ctx)?;
      match object_holder.get() {
        Value::Instance(instance) => {
          instance.set_field(field, value_holder);
          Ok(())
        }
        other => Err(Error::runtime(format!("cannot assign a field on a {}", other.type_name()), *span).into()),
      }
    }
    Stmt::Print { args, span } => {
      let mut rendered = Vec::with_capacity(args.len());
      for arg in args {
        let holder = eval_expr(arg, closure, ctx)?;
        rendered.push(holder.get().print_form(ctx, *span)?);
      }
      writeln!(ctx.out, "{}", rendered.join(" ")).map_err(|e| Error::runtime(e.to_string(), *span))?;
      Ok(())
    }
    Stmt::If { cond, then_branch, else_branch, .. } => {
      let cond_holder = eval_expr(cond, closure, ctx)?;
      if cond_holder.get().is_true() {
        exec_block(then_branch, closure, ctx)
      } else if let Some(else_branch) = else_branch {
        exec_block(else_branch, closure, ctx)
      } else {
        Ok(())
      }
    }
    Stmt::Return { value, .. } => {
      let holder = eval_expr(value, closure, ctx)?;
      Err(Unwind::Return(holder))
    }
    Stmt::Expr(expr) => {
      eval_expr(expr, closure, ctx)?;
      Ok(())
    }
  }
}

fn eval_expr(expr: &Expr, closure: &mut Closure, ctx: &mut Context) -> EvalResult<Holder> {
  Ok(match expr {
    Expr::None(_) => Holder::none(),
    Expr::Bool(b, _) => Holder::own(Value::Bool(*b)),
    Expr::Number(n, _) => Holder::own(Value::Number(*n)),
    Expr::Str(s, _) => Holder::own(Value::String(s.clone())),
    Expr::Var(name, span) => closure
      .get(name)
      .cloned()
      .ok_or_else(|| Error::runtime(format!("unknown variable `{name}`"), *span))?,
    Expr::Field { object, field, span } => {
      let object_holder = eval_expr(object, closure, ctx)?;
      match object_holder.get() {
        Value::Instance(instance) => instance
          .get_field(field)
          .ok_or_else(|| Error::runtime(format!("no field `{field}`"), *span))?,
        other => return Err(Error::runtime(format!("cannot access a field on a {}", other.type_name()), *span).into()),
      }
    }
    Expr::New { class, args, span } => eval_new(class, args, *span, closure, ctx)?,
    Expr::Call { receiver, method, args, .. } => {
      let receiver_holder = eval_expr(receiver, closure, ctx)?;
      let mut arg_holders = Vec::with_capacity(args.len());
      for arg in args {
        arg_holders.push(eval_expr(arg, closure, ctx)?);
      }
      match receiver_holder.get() {
        Value::Instance(instance) => match instance.class.lookup(method, arg_holders.len()) {
          Some(m) => call_method(&receiver_holder, &m, arg_holders, ctx, expr.span())?,
          Option::None => Holder::none(),
        },
        _ => Holder::none(),
      }
    }
    Expr::Stringify { value, span } => {
      let holder = eval_expr(value, closure, ctx)?;
      Holder::own(Value::String(holder.get().print_form(ctx, *span)?))
    }
    Expr::Unary { op, value, span } => {
      let holder = eval_expr(value, closure, ctx)?;
      match op {
        UnaryOp::Not => Holder::own(Value::Bool(!holder.get().is_true())),
        UnaryOp::Neg => match holder.get() {
          Value::Number(n) => Holder::own(Value::Number(-n)),
          other => return Err(Error::runtime(format!("cannot negate a {}", other.type_name()), *span).into()),
        },
      }
    }
    Expr::Binary { op, lhs, rhs, span } => eval_binary(*op, lhs, rhs, *span, closure, ctx)?,
  })
}

fn eval_new(class_name: &str, args: &[Expr], span: Span, closure: &mut Closure, ctx: &mut Context) -> EvalResult<Holder> {
  let class = match closure.get(class_name).map(Holder::get) {
    Some(Value::Class(class)) => class,
    Some(other) => return Err(Error::runtime(format!("`{class_name}` is not a class, found a {}", other.type_name()), span).into()),
    Option::None => return Err(Error::runtime(format!("unknown class `{class_name}`"), span).into()),
  };

  let instance = Rc::new(Instance::new(class.clone()));
  let holder = Holder::own(Value::Instance(instance));

  // Pre-insert the partially constructed instance into the caller's scope
  // under the assignment's target name *before* evaluating constructor
  // arguments, so a self-referential constructor call (e.g. `node =
  // Node(node)`) can see the binding being created. See spec.md §9.
  if let Some(name) = &ctx.self_name {
    closure.insert(name.clone(), holder.share());
  }

  let mut arg_holders = Vec::with_capacity(args.len());
  for arg in args {
    arg_holders.push(eval_expr(arg, closure, ctx)?);
  }

  if let Value::Instance(instance) = holder.get() {
    if let Some(init) = instance.class.lookup("__init__", arg_holders.len()) {
      call_method(&holder, &init, arg_holders, ctx, span)?;
    }
  }

  Ok(holder)
}

fn eval_binary(op: BinaryOp, lhs: &Expr, rhs: &Expr, span: Span, closure: &mut Closure, ctx: &mut Context) -> EvalResult<Holder> {
  match op {
    BinaryOp::And => {
      let left = eval_expr(lhs, closure, ctx)?;
      if !left.get().is_true() {
        return Ok(Holder::own(Value::Bool(false)));
      }
      let right = eval_expr(rhs, closure, ctx)?;
      Ok(Holder::own(Value::Bool(right.get().is_true())))
    }
    BinaryOp::Or => {
      let left = eval_expr(lhs, closure, ctx)?;
      if left.get().is_true() {
        return Ok(Holder::own(Value::Bool(true)));
      }
      let right = eval_expr(rhs, closure, ctx)?;
      Ok(Holder::own(Value::Bool(right.get().is_true())))
    }
    BinaryOp::Add | BinaryOp::Sub | BinaryOp::Mul | BinaryOp::Div => {
      let left = eval_expr(lhs, closure, ctx)?;
      let right = eval_expr(rhs, closure, ctx)?;
      Ok(match op {
        BinaryOp::Add => binop::add(&left, &right, ctx, span)?,
        BinaryOp::Sub => binop::sub(&left, &right, span)?,
        BinaryOp::Mul => binop::mul(&left, &right, span)?,
        BinaryOp::Div => binop::div(&left, &right, span)?,
        _ => unreachable!(),
      })
    }
    BinaryOp::Eq | BinaryOp::NotEq | BinaryOp::Less | BinaryOp::LessEq | BinaryOp::Greater | BinaryOp::GreaterEq => {
      let left = eval_expr(lhs, closure, ctx)?;
      let right = eval_expr(rhs, closure, ctx)?;
      let result = match op {
        BinaryOp::Eq => crate::builtins::equal(&left, &right, ctx, span)?,
        BinaryOp::NotEq => crate::builtins::not_equal(&left, &right, ctx, span)?,
        BinaryOp::Less => crate::builtins::less(&left, &right, ctx, span)?,
        BinaryOp::Greater => crate::builtins::greater(&left, &right, ctx, span)?,
        BinaryOp::LessEq => crate::builtins::less_or_equal(&left, &right, ctx, span)?,
        BinaryOp::GreaterEq => crate::builtins::greater_or_equal(&left, &right, ctx, span)?,
        _ => unreachable!(),
      };
      Ok(Holder::own(Value::Bool(result)))
    }
  }
}

/// The method-call frame (§4.6): a fresh closure with `self` bound to a
/// share of `self_holder` (never extending the receiver's lifetime beyond
/// what the caller already holds) and each formal parameter bound to the
/// corresponding actual-argument holder. Catches the body's `Return`
/// unwind; a body that runs to completion without one yields `None`.
pub fn call_method(self_holder: &Holder, method: &Rc<Method>, args: Vec<Holder>, ctx: &mut Context, span: Span) -> Result<Holder, Error> {
  if args.len() != method.params.len() {
    return Err(Error::runtime(
      format!("`{}` expects {} argument(s), got {}", method.name, method.params.len(), args.len()),
      span,
    ));
  }

  let mut frame = Closure::new();
  frame.insert("self".to_string(), self_holder.share());
  for (name, value) in method.params.iter().zip(args) {
    frame.insert(name.clone(), value);
  }

  match exec_block(&method.body, &mut frame, ctx) {
    Ok(()) => Ok(Holder::none()),
    Err(Unwind::Return(holder)) => Ok(holder),
    Err(Unwind::Error(e)) => Err(e),
  }
}
