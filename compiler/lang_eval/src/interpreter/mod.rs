//! The tree-walking interpreter.
//!
//! # Module Structure
//!
//! - `mod.rs`: `Interpreter`, the public `evaluate`/`apply` boundary
//! - `builder.rs`: `InterpreterBuilder`
//! - `expr.rs`: Expression evaluation
//! - `stmt.rs`: Statements, blocks, loops and whole programs
//! - `function_call.rs`: Applying closures and builtins
//!
//! Internally every evaluation returns an [`EvalResult`]; `?` carries both
//! errors and `return` upward. Only the public methods turn those back into
//! ordinary values.

mod builder;
mod expr;
mod function_call;
mod stmt;

pub use builder::InterpreterBuilder;

use lang_ir::{Block, Expr, Program, Stmt};

use crate::{
    ControlAction, Environment, EvalResult, SharedInputHandler, SharedPrintHandler, Value,
};

/// Any node the interpreter can be asked to evaluate.
#[derive(Copy, Clone, Debug)]
pub enum Node<'a> {
    Program(&'a Program),
    Block(&'a Block),
    Stmt(&'a Stmt),
    Expr(&'a Expr),
}

impl<'a> From<&'a Program> for Node<'a> {
    fn from(program: &'a Program) -> Self {
        Node::Program(program)
    }
}

impl<'a> From<&'a Block> for Node<'a> {
    fn from(block: &'a Block) -> Self {
        Node::Block(block)
    }
}

impl<'a> From<&'a Stmt> for Node<'a> {
    fn from(stmt: &'a Stmt) -> Self {
        Node::Stmt(stmt)
    }
}

impl<'a> From<&'a Expr> for Node<'a> {
    fn from(expr: &'a Expr) -> Self {
        Node::Expr(expr)
    }
}

/// Evaluates syntax trees against environments.
///
/// The interpreter holds no bindings itself; all program state lives in the
/// [`Environment`] passed to each call, so one interpreter can serve many
/// independent environments.
pub struct Interpreter {
    print_handler: SharedPrintHandler,
    input_handler: SharedInputHandler,
    max_call_depth: Option<usize>,
    call_depth: usize,
}

impl Interpreter {
    /// Interpreter wired to stdout and stdin with no call depth limit.
    pub fn new() -> Self {
        InterpreterBuilder::new().build()
    }

    pub fn builder() -> InterpreterBuilder {
        InterpreterBuilder::new()
    }

    pub fn print_handler(&self) -> &SharedPrintHandler {
        &self.print_handler
    }

    pub fn max_call_depth(&self) -> Option<usize> {
        self.max_call_depth
    }

    /// Evaluate `node` in `env`.
    ///
    /// Never panics on a well-formed tree: failures come back as
    /// `Value::Error`. A program absorbs a top-level `return`; evaluating a
    /// smaller node that returns yields `Value::Return` for the caller to
    /// unwrap.
    pub fn evaluate<'n>(&mut self, node: impl Into<Node<'n>>, env: &Environment) -> Value {
        let result = match node.into() {
            Node::Program(program) => self.eval_program(program, env),
            Node::Block(block) => self.eval_block(block, env),
            Node::Stmt(stmt) => self.eval_stmt(stmt, env),
            Node::Expr(expr) => self.eval_expr(expr, env),
        };
        into_value(result)
    }

    /// Apply a callable to arguments.
    ///
    /// An `Error` among the arguments is returned as-is without calling.
    pub fn apply(&mut self, callee: &Value, args: Vec<Value>) -> Value {
        if let Some(error) = args.iter().find(|arg| arg.is_error()) {
            return error.clone();
        }
        match self.call_value(callee, args) {
            Ok(value) => value,
            Err(error) => into_value(Err(error.into())),
        }
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}

/// Fold an internal result into a first-class value.
fn into_value(result: EvalResult) -> Value {
    match result {
        Ok(value) => value,
        Err(ControlAction::Return(value)) => Value::return_signal(value),
        Err(ControlAction::Error(error)) => {
            tracing::debug!(error = %error, "evaluation failed");
            Value::error(error)
        }
    }
}

/// Turn a stored value back into a result, so errors a host placed in an
/// environment still short-circuit when read.
fn lift(value: Value) -> EvalResult {
    match value {
        Value::Error(error) => Err(ControlAction::Error((*error).clone())),
        Value::Return(inner) => Ok((*inner).clone()),
        other => Ok(other),
    }
}
