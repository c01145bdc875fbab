use std::sync::Arc;

use lang_ir::{BinaryOp, Block, Expr, ExprKind, FunctionLiteral, Ident, Span, Stmt, StmtKind};
use pretty_assertions::assert_eq;

use super::*;
use crate::errors::division_by_zero;

fn ident_expr(name: &str) -> Box<Expr> {
    Box::new(Expr::new(ExprKind::Ident(name.into()), Span::DUMMY))
}

/// `function(a, b) { return a + b; }`
fn add_literal() -> Arc<FunctionLiteral> {
    let sum = Expr::new(
        ExprKind::Infix {
            op: BinaryOp::Add,
            left: ident_expr("a"),
            right: ident_expr("b"),
        },
        Span::DUMMY,
    );
    let body = Block::new(vec![Stmt::new(StmtKind::Return(sum), Span::DUMMY)], Span::DUMMY);
    Arc::new(FunctionLiteral::new(
        vec![Ident::new("a", Span::DUMMY), Ident::new("b", Span::DUMMY)],
        body,
        Span::DUMMY,
    ))
}

#[test]
fn kind_names() {
    let cases = [
        (Value::int(1), "integer"),
        (Value::string("s"), "string"),
        (Value::bool(true), "boolean"),
        (Value::Null, "null"),
        (Value::array(vec![]), "array"),
        (Value::function(add_literal(), Environment::new()), "function"),
        (Value::builtin(BuiltinFunction::Length), "builtin"),
        (Value::return_signal(Value::int(1)), "return"),
        (Value::error(division_by_zero()), "error"),
    ];
    for (value, name) in cases {
        assert_eq!(value.kind().as_str(), name);
        assert_eq!(value.kind().to_string(), name);
    }
}

#[test]
fn only_null_and_false_are_falsy() {
    assert!(!Value::Null.is_truthy());
    assert!(!Value::bool(false).is_truthy());
    assert!(Value::bool(true).is_truthy());
    assert!(Value::int(0).is_truthy());
    assert!(Value::string("").is_truthy());
    assert!(Value::array(vec![]).is_truthy());
}

#[test]
fn render_scalars_and_arrays() {
    assert_eq!(Value::int(-7).render(), "-7");
    assert_eq!(Value::string("hi there").render(), "hi there");
    assert_eq!(Value::bool(false).render(), "false");
    assert_eq!(Value::Null.render(), "null");
    let nested = Value::array(vec![
        Value::int(1),
        Value::string("x"),
        Value::array(vec![Value::Null]),
    ]);
    assert_eq!(nested.render(), "[1, x, [null]]");
    assert_eq!(Value::array(vec![]).render(), "[]");
}

#[test]
fn render_callables_and_signals() {
    let function = Value::function(add_literal(), Environment::new());
    assert_eq!(function.render(), "function(a, b) { return (a + b); }");
    assert_eq!(
        Value::builtin(BuiltinFunction::Length).render(),
        "builtin function length"
    );
    assert_eq!(Value::return_signal(Value::int(3)).render(), "3");
    assert_eq!(
        Value::error(division_by_zero()).render(),
        "ERROR: division by zero"
    );
}

#[test]
fn functions_compare_by_identity() {
    let literal = add_literal();
    let env = Environment::new();
    let f = Value::function(literal.clone(), env.clone());
    let g = Value::function(literal, env);
    assert_eq!(f, f.clone());
    assert_ne!(f, g);
}

#[test]
fn structural_equality_for_data() {
    assert_eq!(
        Value::array(vec![Value::int(1), Value::string("a")]),
        Value::from(vec![Value::from(1), Value::from("a")])
    );
    assert_ne!(Value::int(1), Value::bool(true));
    assert_eq!(Value::from(division_by_zero()), Value::error(division_by_zero()));
}

#[test]
fn accessors() {
    assert_eq!(Value::int(4).as_int(), Some(4));
    assert_eq!(Value::string("s").as_str(), Some("s"));
    assert_eq!(Value::Null.as_int(), None);
    assert_eq!(
        Value::array(vec![Value::int(1)]).as_array(),
        Some(&[Value::int(1)][..])
    );
    let err = Value::error(division_by_zero());
    assert!(err.is_error());
    assert_eq!(err.as_error().map(|e| e.message.as_str()), Some("division by zero"));
    assert!(Value::Null.is_null());
}

#[test]
fn function_arity() {
    let f = FunctionValue::new(add_literal(), Environment::new());
    assert_eq!(f.arity(), 2);
    assert_eq!(f.literal().params.len(), 2);
}
