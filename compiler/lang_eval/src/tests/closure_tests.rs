use pretty_assertions::assert_eq;

use super::{error_message, eval_in, run};
use crate::{errors::division_by_zero, BuiltinFunction, Environment, Interpreter, Value};

#[test]
fn closures_observe_later_reassignment() {
    let source = "var y = 1; var f = function() { return y; }; y = 2; f()";
    assert_eq!(run(source), Value::int(2));
}

#[test]
fn shadowing_leaves_outer_binding_unchanged() {
    let source = "var x = 1; var f = function() { var x = 2; return x; }; f(); x";
    assert_eq!(run(source), Value::int(1));
}

#[test]
fn parameters_shadow_outer_names() {
    let source = "var a = 10; var f = function(a) { return a * 2; }; f(3) + a";
    assert_eq!(run(source), Value::int(16));
}

#[test]
fn returned_closure_keeps_its_environment() {
    let source = "
        var adder = function(a) { return function(b) { return a + b; }; };
        var add2 = adder(2);
        var add5 = adder(5);
        add2(3) + add5(1)
    ";
    assert_eq!(run(source), Value::int(11));
}

#[test]
fn recursion_through_the_defining_scope() {
    let source = "
        var fib = function(n) {
            if (n < 2) { return n; }
            return fib(n - 1) + fib(n - 2);
        };
        fib(15)
    ";
    assert_eq!(run(source), Value::int(610));
}

#[test]
fn body_value_without_return() {
    assert_eq!(run("var f = function() { 1; 2 }; f()"), Value::int(2));
    assert_eq!(run("var f = function() { }; f()"), Value::Null);
}

#[test]
fn functions_are_first_class() {
    let source = "
        var twice = function(f, x) { return f(f(x)); };
        twice(function(n) { return n * 3; }, 2)
    ";
    assert_eq!(run(source), Value::int(18));
    assert_eq!(run("function(x) { x }(4)"), Value::int(4));
}

#[test]
fn arity_is_exact() {
    let source = "var f = function(a) { a }; f(1, 2)";
    assert_eq!(
        error_message(&run(source)),
        "wrong number of arguments: expected 1, got 2"
    );
    assert_eq!(
        error_message(&run("var f = function(a, b) { a }; f(1)")),
        "wrong number of arguments: expected 2, got 1"
    );
}

#[test]
fn calling_a_non_function() {
    assert_eq!(error_message(&run("5(1)")), "not a function: integer");
    assert_eq!(error_message(&run("var s = \"x\"; s()")), "not a function: string");
}

#[test]
fn user_bindings_shadow_builtins() {
    let source = r#"var length = function(x) { return 99; }; length("a")"#;
    assert_eq!(run(source), Value::int(99));
}

#[test]
fn builtins_are_values() {
    assert_eq!(run("var l = len; l([1, 2])"), Value::int(2));
    assert_eq!(run("len").render(), "builtin function length");
    assert_eq!(run("len == length"), Value::bool(true));
}

#[test]
fn function_values_render_their_source() {
    let value = run("function(a, b) { return a + b; }");
    assert_eq!(value.render(), "function(a, b) { return (a + b); }");
}

#[test]
fn call_depth_limit() {
    let mut interpreter = Interpreter::builder().max_call_depth(50).build();
    let env = Environment::new();
    let value = eval_in(
        &mut interpreter,
        &env,
        "var f = function(n) { return f(n + 1); }; f(0)",
    );
    assert_eq!(
        error_message(&value),
        "maximum recursion depth exceeded (limit: 50)"
    );
    // The depth counter unwinds with the error.
    let value = eval_in(&mut interpreter, &env, "var g = function(n) { n }; g(7)");
    assert_eq!(value, Value::int(7));
}

#[test]
fn apply_calls_functions_and_builtins() {
    let mut interpreter = Interpreter::new();
    let env = Environment::new();
    let add = eval_in(&mut interpreter, &env, "function(a, b) { return a + b; }");
    assert_eq!(
        interpreter.apply(&add, vec![Value::int(1), Value::int(2)]),
        Value::int(3)
    );
    let reverse = Value::builtin(BuiltinFunction::Reverse);
    assert_eq!(
        interpreter.apply(&reverse, vec![Value::array(vec![Value::int(1), Value::int(2)])]),
        Value::array(vec![Value::int(2), Value::int(1)])
    );
    assert_eq!(
        error_message(&interpreter.apply(&Value::int(1), vec![])),
        "not a function: integer"
    );
}

#[test]
fn apply_passes_error_arguments_through() {
    let mut interpreter = Interpreter::new();
    let error = Value::error(division_by_zero());
    let length = Value::builtin(BuiltinFunction::Length);
    assert_eq!(interpreter.apply(&length, vec![error.clone()]), error);
}

#[test]
fn host_bindings_are_visible() {
    let mut interpreter = Interpreter::new();
    let env = Environment::new();
    env.set("limit", Value::int(10));
    assert_eq!(eval_in(&mut interpreter, &env, "limit * 2"), Value::int(20));

    env.set("broken", Value::error(division_by_zero()));
    let value = eval_in(&mut interpreter, &env, "broken + 1");
    assert_eq!(error_message(&value), "division by zero");
}

#[test]
fn sessions_share_an_environment() {
    let mut interpreter = Interpreter::new();
    let env = Environment::new();
    eval_in(&mut interpreter, &env, "var counter = 1");
    eval_in(&mut interpreter, &env, "counter = counter + 1");
    assert_eq!(eval_in(&mut interpreter, &env, "counter"), Value::int(2));
    assert_eq!(env.get("counter"), Some(Value::int(2)));
}
