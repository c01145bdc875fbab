//! Evaluator tests over real source text.
//!
//! - `scenario_tests`: End-to-end programs
//! - `closure_tests`: Capture, shadowing, recursion and `apply`
//! - `control_flow_tests`: Conditionals, `return`, errors, loops
//! - `builtin_tests`: Builtins that call back into the interpreter
//! - `property_tests`: Algebraic laws of operators and builtins

#![allow(clippy::unwrap_used, clippy::expect_used)]

mod closure_tests;

use crate::{buffer_handler, scripted_handler, Environment, Interpreter, Value};

/// Lex and parse `source`, failing the test on any front-end error.
pub(crate) fn parse_program(source: &str) -> lang_ir::Program {
    let lexed = lang_lexer::lex(source);
    assert!(lexed.errors.is_empty(), "lex errors: {:?}", lexed.errors);
    let parsed = lang_parse::parse(&lexed.tokens);
    assert!(!parsed.has_errors(), "parse errors: {:?}", parsed.errors);
    parsed.program
}

/// Evaluate `source` in `env` with an existing interpreter.
pub(crate) fn eval_in(interpreter: &mut Interpreter, env: &Environment, source: &str) -> Value {
    let program = parse_program(source);
    interpreter.evaluate(&program, env)
}

/// Evaluate `source` in a fresh environment, returning the result and
/// everything it printed.
pub(crate) fn run_with_input(source: &str, input: &[&str]) -> (Value, String) {
    let output = buffer_handler();
    let mut interpreter = Interpreter::builder()
        .print_handler(output.clone())
        .input_handler(scripted_handler(input.iter().copied()))
        .build();
    let value = eval_in(&mut interpreter, &Environment::new(), source);
    (value, output.output())
}

pub(crate) fn run(source: &str) -> Value {
    run_with_input(source, &[]).0
}

/// Message of an error result, failing the test on success.
pub(crate) fn error_message(value: &Value) -> String {
    match value.as_error() {
        Some(error) => error.message.clone(),
        None => panic!("expected an error, got {value:?}"),
    }
}
