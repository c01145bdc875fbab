#![allow(clippy::unwrap_used)]

use lang_ir::BinaryOp;
use pretty_assertions::assert_eq;

use super::evaluate_binary;
use crate::{EvalErrorKind, Value, ValueKind};

fn ok(left: &Value, right: &Value, op: BinaryOp) -> Value {
    match evaluate_binary(left, right, op) {
        Ok(value) => value,
        Err(e) => panic!("{left:?} {op:?} {right:?} failed: {e}"),
    }
}

fn err(left: &Value, right: &Value, op: BinaryOp) -> String {
    match evaluate_binary(left, right, op) {
        Ok(value) => panic!("{left:?} {op:?} {right:?} should fail, got {value:?}"),
        Err(e) => e.message,
    }
}

fn ints(values: &[i64]) -> Value {
    Value::array(values.iter().copied().map(Value::int).collect())
}

#[test]
fn integer_arithmetic() {
    let (a, b) = (Value::int(7), Value::int(2));
    assert_eq!(ok(&a, &b, BinaryOp::Add), Value::int(9));
    assert_eq!(ok(&a, &b, BinaryOp::Sub), Value::int(5));
    assert_eq!(ok(&a, &b, BinaryOp::Mul), Value::int(14));
    assert_eq!(ok(&a, &b, BinaryOp::Div), Value::int(3));
    assert_eq!(ok(&Value::int(-7), &b, BinaryOp::Div), Value::int(-3));
}

#[test]
fn integer_comparison() {
    let (a, b) = (Value::int(1), Value::int(2));
    assert_eq!(ok(&a, &b, BinaryOp::Lt), Value::Bool(true));
    assert_eq!(ok(&a, &b, BinaryOp::Gt), Value::Bool(false));
    assert_eq!(ok(&a, &a, BinaryOp::Eq), Value::Bool(true));
    assert_eq!(ok(&a, &b, BinaryOp::NotEq), Value::Bool(true));
}

#[test]
fn division_by_zero_is_an_error() {
    let e = evaluate_binary(&Value::int(1), &Value::int(0), BinaryOp::Div).unwrap_err();
    assert_eq!(e.kind, EvalErrorKind::DivisionByZero);
}

#[test]
fn overflow_is_an_error() {
    assert_eq!(
        err(&Value::int(i64::MAX), &Value::int(1), BinaryOp::Add),
        "integer overflow in addition"
    );
    assert_eq!(
        err(&Value::int(i64::MIN), &Value::int(-1), BinaryOp::Div),
        "integer overflow in division"
    );
    assert_eq!(
        err(&Value::int(i64::MIN), &Value::int(1), BinaryOp::Sub),
        "integer overflow in subtraction"
    );
}

#[test]
fn string_operators() {
    let (a, b) = (Value::string("foo"), Value::string("bar"));
    assert_eq!(ok(&a, &b, BinaryOp::Add), Value::string("foobar"));
    assert_eq!(ok(&a, &Value::string("foo"), BinaryOp::Eq), Value::Bool(true));
    assert_eq!(ok(&a, &b, BinaryOp::Eq), Value::Bool(false));
    assert_eq!(err(&a, &b, BinaryOp::Sub), "unknown operator: string - string");
    assert_eq!(err(&a, &b, BinaryOp::Lt), "unknown operator: string < string");
}

#[test]
fn array_concatenation_leaves_operands_alone() {
    let (a, b) = (ints(&[1, 2]), ints(&[3]));
    assert_eq!(ok(&a, &b, BinaryOp::Add), ints(&[1, 2, 3]));
    assert_eq!(a, ints(&[1, 2]));
    assert_eq!(b, ints(&[3]));
}

#[test]
fn array_equality_is_deep() {
    assert_eq!(ok(&ints(&[1, 2]), &ints(&[1, 2]), BinaryOp::Eq), Value::Bool(true));
    assert_eq!(ok(&ints(&[1, 2]), &ints(&[2, 1]), BinaryOp::Eq), Value::Bool(false));
    assert_eq!(ok(&ints(&[1]), &ints(&[1, 1]), BinaryOp::Eq), Value::Bool(false));
    assert_eq!(ok(&ints(&[]), &ints(&[]), BinaryOp::Eq), Value::Bool(true));

    let nested_a = Value::array(vec![ints(&[1]), Value::string("x"), Value::Null]);
    let nested_b = Value::array(vec![ints(&[1]), Value::string("x"), Value::Null]);
    assert_eq!(ok(&nested_a, &nested_b, BinaryOp::Eq), Value::Bool(true));

    let mixed = Value::array(vec![Value::int(1)]);
    let other = Value::array(vec![Value::string("1")]);
    assert_eq!(ok(&mixed, &other, BinaryOp::Eq), Value::Bool(false));
}

#[test]
fn array_other_operators_are_unknown() {
    assert_eq!(
        err(&ints(&[1]), &ints(&[1]), BinaryOp::Mul),
        "unknown operator: array * array"
    );
}

#[test]
fn mismatched_kinds() {
    let (i, b) = (Value::int(1), Value::Bool(true));
    assert_eq!(ok(&i, &b, BinaryOp::Eq), Value::Bool(false));
    assert_eq!(ok(&i, &b, BinaryOp::NotEq), Value::Bool(true));
    assert_eq!(err(&i, &b, BinaryOp::Add), "type mismatch: integer + boolean");
    assert_eq!(
        err(&Value::string("1"), &Value::int(1), BinaryOp::Add),
        "type mismatch: string + integer"
    );
}

#[test]
fn booleans_and_null() {
    let (t, f) = (Value::Bool(true), Value::Bool(false));
    assert_eq!(ok(&t, &t, BinaryOp::Eq), Value::Bool(true));
    assert_eq!(ok(&t, &f, BinaryOp::NotEq), Value::Bool(true));
    assert_eq!(ok(&Value::Null, &Value::Null, BinaryOp::Eq), Value::Bool(true));
    assert_eq!(err(&t, &f, BinaryOp::Add), "unknown operator: boolean + boolean");
    let e = evaluate_binary(&t, &f, BinaryOp::Gt).unwrap_err();
    assert_eq!(
        e.kind,
        EvalErrorKind::UnknownOperator {
            left: ValueKind::Boolean,
            op: ">",
            right: ValueKind::Boolean
        }
    );
}
