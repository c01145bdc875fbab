//! Binary operators.
//!
//! Dispatch is on the joint kind of both operands. Integer arithmetic is
//! checked: overflow and division by zero are errors, never host panics.

use lang_ir::BinaryOp;

use crate::errors::{
    division_by_zero, integer_overflow, type_mismatch, unknown_operator, EvalError,
};
use crate::{Value, ValueKind};

#[inline]
fn checked(result: Option<i64>, operation: &'static str) -> Result<Value, EvalError> {
    result.map(Value::Int).ok_or_else(|| integer_overflow(operation))
}

/// Apply `op` to two already-evaluated operands.
pub fn evaluate_binary(left: &Value, right: &Value, op: BinaryOp) -> Result<Value, EvalError> {
    match (left, right) {
        (Value::Int(a), Value::Int(b)) => eval_int_binary(*a, *b, op),
        (Value::Str(a), Value::Str(b)) => eval_string_binary(a, b, op),
        (Value::Array(a), Value::Array(b)) => eval_array_binary(a, b, op),
        _ if left.kind() != right.kind() => match op {
            BinaryOp::Eq => Ok(Value::Bool(false)),
            BinaryOp::NotEq => Ok(Value::Bool(true)),
            _ => Err(type_mismatch(left.kind(), op.as_symbol(), right.kind())),
        },
        // Same kind, no arithmetic: booleans and null compare by value,
        // functions by identity.
        _ => match op {
            BinaryOp::Eq => Ok(Value::Bool(left == right)),
            BinaryOp::NotEq => Ok(Value::Bool(left != right)),
            _ => Err(unknown_operator(left.kind(), op.as_symbol(), right.kind())),
        },
    }
}

fn eval_int_binary(a: i64, b: i64, op: BinaryOp) -> Result<Value, EvalError> {
    match op {
        BinaryOp::Add => checked(a.checked_add(b), "addition"),
        BinaryOp::Sub => checked(a.checked_sub(b), "subtraction"),
        BinaryOp::Mul => checked(a.checked_mul(b), "multiplication"),
        BinaryOp::Div => {
            if b == 0 {
                Err(division_by_zero())
            } else {
                checked(a.checked_div(b), "division")
            }
        }
        BinaryOp::Lt => Ok(Value::Bool(a < b)),
        BinaryOp::Gt => Ok(Value::Bool(a > b)),
        BinaryOp::Eq => Ok(Value::Bool(a == b)),
        BinaryOp::NotEq => Ok(Value::Bool(a != b)),
    }
}

fn eval_string_binary(a: &str, b: &str, op: BinaryOp) -> Result<Value, EvalError> {
    match op {
        BinaryOp::Add => {
            let mut joined = String::with_capacity(a.len() + b.len());
            joined.push_str(a);
            joined.push_str(b);
            Ok(Value::string(joined))
        }
        BinaryOp::Eq => Ok(Value::Bool(a == b)),
        _ => Err(unknown_operator(ValueKind::String, op.as_symbol(), ValueKind::String)),
    }
}

fn eval_array_binary(a: &[Value], b: &[Value], op: BinaryOp) -> Result<Value, EvalError> {
    match op {
        BinaryOp::Add => {
            let mut joined = Vec::with_capacity(a.len() + b.len());
            joined.extend_from_slice(a);
            joined.extend_from_slice(b);
            Ok(Value::array(joined))
        }
        BinaryOp::Eq => Ok(Value::Bool(arrays_equal(a, b)?)),
        _ => Err(unknown_operator(ValueKind::Array, op.as_symbol(), ValueKind::Array)),
    }
}

/// Element-wise `==`, stopping at the first mismatch.
fn arrays_equal(a: &[Value], b: &[Value]) -> Result<bool, EvalError> {
    if a.len() != b.len() {
        return Ok(false);
    }
    for (x, y) in a.iter().zip(b) {
        let same = lang_stack::ensure_sufficient_stack(|| evaluate_binary(x, y, BinaryOp::Eq))?;
        if !matches!(same, Value::Bool(true)) {
            return Ok(false);
        }
    }
    Ok(true)
}

#[cfg(test)]
mod tests;
