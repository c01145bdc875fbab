//! Statement, block and program nodes.

use std::fmt;

use super::{Expr, Ident};
use crate::{Span, Spanned};

/// Statement node.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Stmt {
    pub kind: StmtKind,
    pub span: Span,
}

impl Stmt {
    pub fn new(kind: StmtKind, span: Span) -> Self {
        Stmt { kind, span }
    }
}

impl fmt::Debug for Stmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} @ {:?}", self.kind, self.span)
    }
}

impl Spanned for Stmt {
    fn span(&self) -> Span {
        self.span
    }
}

/// Statement kinds.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub enum StmtKind {
    /// Expression evaluated for its value: `f(x);`
    Expr(Expr),
    /// Declaration: `var x = e;`
    Var { name: Ident, value: Expr },
    /// Assignment: `x = e;`
    Assign { name: Ident, value: Expr },
    /// `return e;`
    Return(Expr),
    /// Bounded loop over an array binding: `for (x, i in xs) { ... }`
    Loop(LoopStmt),
}

/// A bounded loop over the elements of a named array.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct LoopStmt {
    /// Identifier naming the array to iterate.
    pub source: Ident,
    /// Name bound to each element.
    pub element: Ident,
    /// Optional name bound to each element's 0-based position.
    pub index: Option<Ident>,
    pub body: Block,
}

/// Braced statement sequence.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct Block {
    pub statements: Vec<Stmt>,
    pub span: Span,
}

impl Block {
    pub fn new(statements: Vec<Stmt>, span: Span) -> Self {
        Block { statements, span }
    }
}

impl Spanned for Block {
    fn span(&self) -> Span {
        self.span
    }
}

/// Root node handed to the evaluator.
#[derive(Clone, PartialEq, Eq, Hash, Debug, Default)]
pub struct Program {
    pub statements: Vec<Stmt>,
}

impl Program {
    pub fn new(statements: Vec<Stmt>) -> Self {
        Program { statements }
    }
}
