//! Lang CLI
//!
//! Runs source files or an interactive session on the tree-walking
//! evaluator.

mod frontend;
mod repl;
mod report;
mod run;

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Install the hierarchical log subscriber, only when `RUST_LOG` is set.
fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{prelude::*, EnvFilter};
        use tracing_tree::HierarchicalLayer;

        if std::env::var("RUST_LOG").is_ok() {
            tracing_subscriber::registry()
                .with(EnvFilter::from_default_env())
                .with(HierarchicalLayer::new(2).with_targets(true))
                .init();
        }
    });
}

/// Options shared by every command.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct Options {
    /// Deepest allowed nesting of function calls; unlimited when `None`.
    pub max_call_depth: Option<usize>,
}

impl Options {
    pub(crate) fn builder(self) -> lang_eval::InterpreterBuilder {
        let builder = lang_eval::Interpreter::builder();
        match self.max_call_depth {
            Some(depth) => builder.max_call_depth(depth),
            None => builder,
        }
    }

    pub(crate) fn interpreter(self) -> lang_eval::Interpreter {
        self.builder().build()
    }
}

fn main() {
    init_tracing();

    let mut options = Options::default();
    let mut positional = Vec::new();
    for arg in std::env::args().skip(1) {
        if let Some(value) = arg.strip_prefix("--max-depth=") {
            match value.parse::<usize>() {
                Ok(depth) => options.max_call_depth = Some(depth),
                Err(_) => {
                    eprintln!("error: invalid --max-depth value `{value}`");
                    std::process::exit(2);
                }
            }
        } else if arg == "--help" || arg == "-h" {
            print_usage();
            return;
        } else {
            positional.push(arg);
        }
    }

    let Some(command) = positional.first() else {
        repl::repl(options);
        return;
    };

    match command.as_str() {
        "run" => {
            let Some(path) = positional.get(1) else {
                eprintln!("Usage: lang run <file> [--max-depth=<n>]");
                std::process::exit(1);
            };
            std::process::exit(run::run_file(path, options));
        }
        "repl" => repl::repl(options),
        "help" => print_usage(),
        other => {
            eprintln!("error: unknown command `{other}`");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    }
}

fn print_usage() {
    println!("Lang interpreter");
    println!();
    println!("Usage: lang <command> [options]");
    println!();
    println!("Commands:");
    println!("  run <file>       Evaluate a source file");
    println!("  repl             Start an interactive session (default)");
    println!("  help             Show this message");
    println!();
    println!("Options:");
    println!("  --max-depth=<n>  Fail instead of nesting more than <n> calls");
    println!();
    println!("Set RUST_LOG (e.g. RUST_LOG=lang_eval=debug) to enable logging.");
}
