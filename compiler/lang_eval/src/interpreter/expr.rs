//! Expression evaluation.

use lang_ir::{Expr, ExprKind};
use lang_stack::ensure_sufficient_stack;

use super::{lift, Interpreter};
use crate::errors::{identifier_not_found, index_not_supported};
use crate::operators::evaluate_binary;
use crate::unary_operators::evaluate_unary;
use crate::{BuiltinFunction, ControlAction, Environment, EvalError, EvalResult, Value};

impl Interpreter {
    pub(crate) fn eval_expr(&mut self, expr: &Expr, env: &Environment) -> EvalResult {
        ensure_sufficient_stack(|| self.eval_expr_inner(expr, env))
    }

    fn eval_expr_inner(&mut self, expr: &Expr, env: &Environment) -> EvalResult {
        match &expr.kind {
            ExprKind::Int(n) => Ok(Value::int(*n)),
            ExprKind::Str(s) => Ok(Value::string(s.as_str())),
            ExprKind::Bool(b) => Ok(Value::bool(*b)),
            ExprKind::Array(elements) => {
                let values = self.eval_exprs(elements, env)?;
                Ok(Value::array(values))
            }
            ExprKind::Ident(name) => lookup(name, env),
            ExprKind::Prefix { op, operand } => {
                let value = self.eval_expr(operand, env)?;
                Ok(evaluate_unary(&value, *op)?)
            }
            // Left operand first, then right; no short-circuiting.
            ExprKind::Infix { op, left, right } => {
                let left = self.eval_expr(left, env)?;
                let right = self.eval_expr(right, env)?;
                Ok(evaluate_binary(&left, &right, *op)?)
            }
            ExprKind::Index { collection, index } => {
                let collection = self.eval_expr(collection, env)?;
                let index = self.eval_expr(index, env)?;
                Ok(eval_index(&collection, &index)?)
            }
            ExprKind::Function(literal) => Ok(Value::function(literal.clone(), env.clone())),
            ExprKind::Call { callee, args } => {
                let callee = self.eval_expr(callee, env)?;
                let args = self.eval_exprs(args, env)?;
                Ok(self.call_value(&callee, args)?)
            }
            ExprKind::If {
                condition,
                consequence,
                alternative,
            } => {
                let condition = self.eval_expr(condition, env)?;
                if condition.is_truthy() {
                    self.eval_block(consequence, env)
                } else if let Some(alternative) = alternative {
                    self.eval_block(alternative, env)
                } else {
                    Ok(Value::Null)
                }
            }
        }
    }

    /// Evaluate left to right, stopping at the first failure.
    fn eval_exprs(
        &mut self,
        exprs: &[Expr],
        env: &Environment,
    ) -> Result<Vec<Value>, ControlAction> {
        exprs.iter().map(|expr| self.eval_expr(expr, env)).collect()
    }
}

/// Resolve a name: the environment chain first, then the builtin library.
pub(super) fn lookup(name: &str, env: &Environment) -> EvalResult {
    if let Some(value) = env.get(name) {
        return lift(value);
    }
    match BuiltinFunction::lookup(name) {
        Some(builtin) => Ok(Value::builtin(builtin)),
        None => Err(identifier_not_found(name).into()),
    }
}

/// `array[integer]`; anything outside `0..len` is `null`.
fn eval_index(collection: &Value, index: &Value) -> Result<Value, EvalError> {
    match (collection, index) {
        (Value::Array(items), Value::Int(i)) => Ok(usize::try_from(*i)
            .ok()
            .and_then(|i| items.get(i))
            .cloned()
            .unwrap_or(Value::Null)),
        _ => Err(index_not_supported(collection.kind(), index.kind())),
    }
}
