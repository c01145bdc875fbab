//! Prefix operators.

use lang_ir::UnaryOp;

use crate::errors::{integer_overflow, unknown_prefix_operator, EvalError};
use crate::Value;

/// Apply a prefix operator to an evaluated operand.
///
/// `!` works on every value through truthiness; `-` only on integers.
pub fn evaluate_unary(value: &Value, op: UnaryOp) -> Result<Value, EvalError> {
    match (value, op) {
        (_, UnaryOp::Not) => Ok(Value::Bool(!value.is_truthy())),
        (Value::Int(n), UnaryOp::Neg) => n
            .checked_neg()
            .map(Value::Int)
            .ok_or_else(|| integer_overflow("negation")),
        (_, UnaryOp::Neg) => Err(unknown_prefix_operator(op.as_symbol(), value.kind())),
    }
}
