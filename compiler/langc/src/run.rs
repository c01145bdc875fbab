//! The `run` command: evaluate a source file once.

use lang_eval::{Environment, Value};

use crate::frontend::parse_source;
use crate::{report, Options};

/// Evaluate the file at `path`, returning the process exit code.
pub(crate) fn run_file(path: &str, options: Options) -> i32 {
    let source = match std::fs::read_to_string(path) {
        Ok(source) => source,
        Err(error) => {
            eprintln!("error: cannot read `{path}`: {error}");
            return 1;
        }
    };

    let program = match parse_source(&source) {
        Ok(program) => program,
        Err(diagnostics) => {
            report::emit(path, &source, &diagnostics);
            return 1;
        }
    };

    let mut interpreter = options.interpreter();
    match interpreter.evaluate(&program, &Environment::new()) {
        Value::Null => 0,
        value @ Value::Error(_) => {
            eprintln!("{}", value.render());
            1
        }
        value => {
            println!("{}", value.render());
            0
        }
    }
}
