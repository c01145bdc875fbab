//! Lang Eval - tree-walking evaluator for Lang programs.
//!
//! # Architecture
//!
//! - `Value`: the runtime object model, with `Heap` for shared payloads
//! - `Environment`: lexical scopes chained through shared parents
//! - `evaluate_binary` / `evaluate_unary`: enum-based operator dispatch
//! - `BuiltinFunction`: the native function library
//! - `Interpreter`: walks syntax trees, applies closures and builtins
//!
//! Failures are first-class `Value::Error`s at the public boundary; inside
//! the interpreter they travel as `Err(ControlAction)` so `?` unwinds them.

mod builtins;
mod environment;
pub mod errors;
mod input_handler;
pub mod interpreter;
mod operators;
mod print_handler;
mod unary_operators;
mod value;

pub use builtins::{BuiltinFunction, BuiltinHost};
pub use environment::{Environment, LocalScope};
pub use errors::{ControlAction, EvalError, EvalErrorKind, EvalResult};
pub use input_handler::{scripted_handler, stdin_handler, InputHandlerImpl, SharedInputHandler};
pub use interpreter::{Interpreter, InterpreterBuilder, Node};
pub use operators::evaluate_binary;
pub use print_handler::{
    buffer_handler, silent_handler, stdout_handler, PrintHandlerImpl, SharedPrintHandler,
};
pub use unary_operators::evaluate_unary;
pub use value::{FunctionValue, Heap, Value, ValueKind};

/// Evaluate `node` in `env` with a default interpreter (stdout, stdin).
pub fn evaluate<'n>(node: impl Into<Node<'n>>, env: &Environment) -> Value {
    Interpreter::new().evaluate(node, env)
}

/// Apply `callee` to `args` with a default interpreter (stdout, stdin).
pub fn apply(callee: &Value, args: Vec<Value>) -> Value {
    Interpreter::new().apply(callee, args)
}

#[cfg(test)]
mod tests;
