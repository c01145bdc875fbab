//! Statements, blocks, loops and programs.

use lang_ir::{Block, LoopStmt, Program, Stmt, StmtKind};

use super::expr::lookup;
use super::Interpreter;
use crate::errors::{loop_variable_in_use, not_iterable};
use crate::{ControlAction, Environment, EvalResult, Value};

impl Interpreter {
    /// Run a whole program. A top-level `return` ends it with the returned
    /// value; an empty program is `null`.
    pub(crate) fn eval_program(&mut self, program: &Program, env: &Environment) -> EvalResult {
        let mut result = Value::Null;
        for stmt in &program.statements {
            match self.eval_stmt(stmt, env) {
                Ok(value) => result = value,
                Err(ControlAction::Return(value)) => return Ok(value),
                Err(error @ ControlAction::Error(_)) => return Err(error),
            }
        }
        Ok(result)
    }

    /// Blocks share the enclosing scope; only calls introduce new ones.
    pub(crate) fn eval_block(&mut self, block: &Block, env: &Environment) -> EvalResult {
        let mut result = Value::Null;
        for stmt in &block.statements {
            result = self.eval_stmt(stmt, env)?;
        }
        Ok(result)
    }

    pub(crate) fn eval_stmt(&mut self, stmt: &Stmt, env: &Environment) -> EvalResult {
        tracing::trace!(span = %stmt.span, "statement");
        match &stmt.kind {
            StmtKind::Expr(expr) => self.eval_expr(expr, env),
            StmtKind::Var { name, value } | StmtKind::Assign { name, value } => {
                let value = self.eval_expr(value, env)?;
                env.set(name.name.clone(), value);
                Ok(Value::Null)
            }
            StmtKind::Return(expr) => {
                let value = self.eval_expr(expr, env)?;
                Err(ControlAction::Return(value))
            }
            StmtKind::Loop(stmt) => self.eval_loop(stmt, env),
        }
    }

    /// `for (x, i in xs) { ... }`
    ///
    /// The loop names must be unbound in the whole environment chain. They
    /// are bound in the current scope and stay bound after the loop finishes.
    fn eval_loop(&mut self, stmt: &LoopStmt, env: &Environment) -> EvalResult {
        let items = match lookup(&stmt.source.name, env)? {
            Value::Array(items) => items,
            other => return Err(not_iterable(other.kind()).into()),
        };

        for binding in std::iter::once(&stmt.element).chain(&stmt.index) {
            if env.get(&binding.name).is_some() {
                return Err(loop_variable_in_use(&binding.name).into());
            }
        }

        for (position, item) in items.iter().enumerate() {
            tracing::trace!(element = %stmt.element.name, position, "loop iteration");
            env.set(stmt.element.name.clone(), item.clone());
            if let Some(index) = &stmt.index {
                let position = i64::try_from(position).unwrap_or(i64::MAX);
                env.set(index.name.clone(), Value::int(position));
            }
            self.eval_block(&stmt.body, env)?;
        }
        Ok(Value::Null)
    }
}
