//! `InterpreterBuilder` for configuring an [`Interpreter`].

use super::Interpreter;
use crate::{stdin_handler, stdout_handler, SharedInputHandler, SharedPrintHandler};

/// Builder for [`Interpreter`].
///
/// Defaults: output to stdout, input from stdin, no call depth limit.
#[derive(Default)]
pub struct InterpreterBuilder {
    print_handler: Option<SharedPrintHandler>,
    input_handler: Option<SharedInputHandler>,
    max_call_depth: Option<usize>,
}

impl InterpreterBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Where `print` writes.
    #[must_use]
    pub fn print_handler(mut self, handler: SharedPrintHandler) -> Self {
        self.print_handler = Some(handler);
        self
    }

    /// Where `read_line` reads from.
    #[must_use]
    pub fn input_handler(mut self, handler: SharedInputHandler) -> Self {
        self.input_handler = Some(handler);
        self
    }

    /// Fail with an error instead of recursing deeper than `depth` nested
    /// function calls.
    #[must_use]
    pub fn max_call_depth(mut self, depth: usize) -> Self {
        self.max_call_depth = Some(depth);
        self
    }

    pub fn build(self) -> Interpreter {
        Interpreter {
            print_handler: self.print_handler.unwrap_or_else(stdout_handler),
            input_handler: self.input_handler.unwrap_or_else(stdin_handler),
            max_call_depth: self.max_call_depth,
            call_depth: 0,
        }
    }
}
