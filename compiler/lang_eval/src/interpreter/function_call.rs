//! Applying callables.

use super::Interpreter;
use crate::errors::{arity_mismatch, not_a_function, recursion_limit_exceeded};
use crate::{BuiltinHost, ControlAction, EvalError, FunctionValue, Value};

impl Interpreter {
    /// Apply `callee` to already evaluated arguments.
    #[tracing::instrument(
        level = "debug",
        skip_all,
        fields(callee = %callee.kind(), argc = args.len())
    )]
    pub(crate) fn call_value(
        &mut self,
        callee: &Value,
        args: Vec<Value>,
    ) -> Result<Value, EvalError> {
        match callee {
            Value::Function(function) => self.call_function(function, args),
            Value::Builtin(builtin) => builtin.call(&args, self),
            _ => Err(not_a_function(callee.kind())),
        }
    }

    fn call_function(
        &mut self,
        function: &FunctionValue,
        args: Vec<Value>,
    ) -> Result<Value, EvalError> {
        if args.len() != function.arity() {
            return Err(arity_mismatch(function.arity(), args.len()));
        }
        self.check_call_depth()?;

        let call_env = function.env().child();
        tracing::debug!(params = function.arity(), "call environment");
        for (param, arg) in function.literal().params.iter().zip(args) {
            call_env.set(param.name.clone(), arg);
        }

        self.call_depth += 1;
        let result = self.eval_block(&function.literal().body, &call_env);
        self.call_depth -= 1;

        match result {
            Ok(value) | Err(ControlAction::Return(value)) => Ok(value),
            Err(ControlAction::Error(error)) => Err(error),
        }
    }

    fn check_call_depth(&self) -> Result<(), EvalError> {
        match self.max_call_depth {
            Some(limit) if self.call_depth >= limit => Err(recursion_limit_exceeded(limit)),
            _ => Ok(()),
        }
    }
}

impl BuiltinHost for Interpreter {
    fn call(&mut self, callee: &Value, args: Vec<Value>) -> Result<Value, EvalError> {
        self.call_value(callee, args)
    }

    fn print_line(&mut self, line: &str) {
        self.print_handler.println(line);
    }

    fn read_line(&mut self) -> std::io::Result<Option<String>> {
        self.input_handler.read_line()
    }
}
