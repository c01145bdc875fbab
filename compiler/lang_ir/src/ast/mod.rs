//! Syntax tree consumed by the evaluator.
//!
//! The tree is plain owned data: boxed children, vectors for sequences, and an
//! `Arc` around function literals so closures can share their body without
//! copying it. Nodes are never mutated after parsing.
//!
//! # Module Structure
//!
//! - `expr`: Expressions (`Expr`, `ExprKind`, `FunctionLiteral`, `Ident`)
//! - `stmt`: Statements, blocks and the `Program` root
//! - `operators`: Prefix and infix operators
//! - `display`: Source-text rendering of every node

mod display;
mod expr;
mod operators;
mod stmt;

pub use expr::{Expr, ExprKind, FunctionLiteral, Ident};
pub use operators::{BinaryOp, UnaryOp};
pub use stmt::{Block, LoopStmt, Program, Stmt, StmtKind};
