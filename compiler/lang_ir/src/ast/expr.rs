//! Expression nodes.

use std::fmt;
use std::sync::Arc;

use super::{BinaryOp, Block, UnaryOp};
use crate::{Name, Span, Spanned};

/// An identifier occurrence with its location.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Ident {
    pub name: Name,
    pub span: Span,
}

impl Ident {
    pub fn new(name: impl Into<Name>, span: Span) -> Self {
        Ident {
            name: name.into(),
            span,
        }
    }
}

impl fmt::Debug for Ident {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} @ {:?}", self.name, self.span)
    }
}

/// Expression node.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Expr {
    pub kind: ExprKind,
    pub span: Span,
}

impl Expr {
    pub fn new(kind: ExprKind, span: Span) -> Self {
        Expr { kind, span }
    }
}

impl fmt::Debug for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} @ {:?}", self.kind, self.span)
    }
}

impl Spanned for Expr {
    fn span(&self) -> Span {
        self.span
    }
}

/// Expression kinds.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub enum ExprKind {
    /// Integer literal: `42`
    Int(i64),
    /// String literal: `"hello"`
    Str(String),
    /// Boolean literal: `true`, `false`
    Bool(bool),
    /// Array literal: `[a, b, c]`
    Array(Vec<Expr>),
    /// Identifier reference: `x`, `int.parse`
    Ident(Name),
    /// Prefix operation: `!x`, `-x`
    Prefix { op: UnaryOp, operand: Box<Expr> },
    /// Infix operation: `a + b`
    Infix {
        op: BinaryOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },
    /// Index access: `items[i]`
    Index {
        collection: Box<Expr>,
        index: Box<Expr>,
    },
    /// Function literal: `function(a, b) { ... }`
    ///
    /// Shared so that every closure created from this literal points at the
    /// same parameter list and body.
    Function(Arc<FunctionLiteral>),
    /// Call: `f(a, b)`
    Call { callee: Box<Expr>, args: Vec<Expr> },
    /// Conditional: `if (c) { ... } else { ... }`
    If {
        condition: Box<Expr>,
        consequence: Block,
        alternative: Option<Block>,
    },
}

/// Parameters and body of a function literal.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct FunctionLiteral {
    pub params: Vec<Ident>,
    pub body: Block,
    pub span: Span,
}

impl FunctionLiteral {
    pub fn new(params: Vec<Ident>, body: Block, span: Span) -> Self {
        FunctionLiteral { params, body, span }
    }
}
