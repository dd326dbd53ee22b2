//! AST node contract (C5): every node is a plain variant of [`Stmt`] or
//! [`Expr`], each carrying its [`Span`]. Evaluation follows in `eval/mod.rs`
//! as a single recursive `match` per node kind — Rust's closed sum-type
//! idiom is the natural translation of "every node exposes
//! `execute(closure, context) -> holder`": there is no open-ended node
//! hierarchy to dispatch through a trait object for, since the node kinds
//! are fixed and enumerable.

use crate::span::Span;

pub type Block = Vec<Stmt>;

#[derive(Clone, Debug)]
pub struct MethodDef {
  pub name: String,
  pub params: Vec<String>,
  pub body: Block,
  pub span: Span,
}

#[derive(Clone, Debug)]
pub struct ClassDef {
  pub name: String,
  pub parent: Option<String>,
  pub methods: Vec<MethodDef>,
  pub span: Span,
}

#[derive(Clone, Debug)]
pub enum Stmt {
  ClassDef(ClassDef),
  Assign {
    name: String,
    value: Expr,
    span: Span,
  },
  FieldAssign {
    object: Expr,
    field: String,
    value: Expr,
    span: Span,
  },
  Print {
    args: Vec<Expr>,
    span: Span,
  },
  If {
    cond: Expr,
    then_branch: Block,
    else_branch: Option<Block>,
    span: Span,
  },
  Return {
    value: Expr,
    span: Span,
  },
  Expr(Expr),
}

impl Stmt {
  pub fn span(&self) -> Span {
    match self {
      Stmt::ClassDef(c) => c.span,
      Stmt::Assign { span, .. } => *span,
      Stmt::FieldAssign { span, .. } => *span,
      Stmt::Print { span, .. } => *span,
      Stmt::If { span, .. } => *span,
      Stmt::Return { span, .. } => *span,
      Stmt::Expr(e) => e.span(),
    }
  }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UnaryOp {
  Neg,
  Not,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BinaryOp {
  Add,
  Sub,
  Mul,
  Div,
  Eq,
  NotEq,
  Less,
  LessEq,
  Greater,
  GreaterEq,
  And,
  Or,
}

#[derive(Clone, Debug)]
pub enum Expr {
  None(Span),
  Bool(bool, Span),
  Number(i64, Span),
  Str(String, Span),
  Var(String, Span),
  Field {
    object: Box<Expr>,
    field: String,
    span: Span,
  },
  New {
    class: String,
    args: Vec<Expr>,
    span: Span,
  },
  Call {
    receiver: Box<Expr>,
    method: String,
    args: Vec<Expr>,
    span: Span,
  },
  Stringify {
    value: Box<Expr>,
    span: Span,
  },
  Unary {
    op: UnaryOp,
    value: Box<Expr>,
    span: Span,
  },
  Binary {
    op: BinaryOp,
    lhs: Box<Expr>,
    rhs: Box<Expr>,
    span: Span,
  },
}

impl Expr {
  pub fn span(&self) -> Span {
    match self {
      Expr::None(s)
      | Expr::Bool(_, s)
      | Expr::Number(_, s)
      | Expr::Str(_, s)
      | Expr::Var(_, s) => *s,
      Expr::Field { span, .. }
      | Expr::New { span, .. }
      | Expr::Call { span, .. }
      | Expr::Stringify { span, .. }
      | Expr::Unary { span, .. }
      | Expr::Binary { span, .. } => *span,
    }
  }
}
