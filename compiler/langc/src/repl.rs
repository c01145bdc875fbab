//! Interactive read-eval-print loop.

use std::io::{self, Write};

use lang_eval::{stdin_handler, Environment, Interpreter, Value};

use crate::frontend::parse_source;
use crate::{report, Options};

const PROMPT: &str = ">> ";

/// What one line of input asks for.
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum Command<'a> {
    Exit,
    Skip,
    /// `file <path>`: evaluate a file in the session environment.
    File(&'a str),
    Eval(&'a str),
}

pub(crate) fn classify(line: &str) -> Command<'_> {
    let line = line.trim();
    if line.is_empty() {
        return Command::Skip;
    }
    if line == "exit" {
        return Command::Exit;
    }
    match line.strip_prefix("file ") {
        Some(path) => Command::File(path.trim()),
        None => Command::Eval(line),
    }
}

/// Run the session until `exit` or end of input.
///
/// Prompt lines and `read_line` calls share one input handler, so a program
/// reading input consumes the lines typed after it.
pub(crate) fn repl(options: Options) {
    let input = stdin_handler();
    let mut interpreter = options.builder().input_handler(input.clone()).build();
    let env = Environment::new();

    loop {
        print!("{PROMPT}");
        if io::stdout().flush().is_err() {
            break;
        }
        let line = match input.read_line() {
            Ok(Some(line)) => line,
            Ok(None) => break,
            Err(error) => {
                eprintln!("error: {error}");
                break;
            }
        };

        match classify(&line) {
            Command::Exit => break,
            Command::Skip => {}
            Command::File(path) => match std::fs::read_to_string(path) {
                Ok(source) => eval_source(&mut interpreter, &env, path, &source),
                Err(error) => eprintln!("error: cannot read `{path}`: {error}"),
            },
            Command::Eval(source) => eval_source(&mut interpreter, &env, "<repl>", source),
        }
    }
}

fn eval_source(interpreter: &mut Interpreter, env: &Environment, name: &str, source: &str) {
    match parse_source(source) {
        Ok(program) => {
            let value = interpreter.evaluate(&program, env);
            if !matches!(value, Value::Null) {
                println!("{}", value.render());
            }
        }
        Err(diagnostics) => report::emit(name, source, &diagnostics),
    }
}
