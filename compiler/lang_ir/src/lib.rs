//! Lang IR - shared front-end data structures.
//!
//! This crate contains the types that flow between the Lang crates:
//! - `Span` for source locations
//! - `Name` for identifiers
//! - `Token`, `TokenKind` and `TokenList` for lexer output
//! - The syntax tree (`Program`, `Stmt`, `Expr`, ...) consumed by the evaluator
//!
//! Nothing here depends on how source text is tokenized or how the tree is
//! evaluated; the lexer, parser and evaluator crates all build on it.

pub mod ast;
mod name;
mod span;
mod token;

pub use ast::{
    BinaryOp, Block, Expr, ExprKind, FunctionLiteral, Ident, LoopStmt, Program, Stmt, StmtKind,
    UnaryOp,
};
pub use name::Name;
pub use span::{Span, SpanOverflow, Spanned};
pub use token::{Token, TokenKind, TokenList};
