//! Native functions.
//!
//! [`BuiltinFunction`] is a finite enum; a `Value::Builtin` carries one of its
//! variants and calls dispatch with a single `match`. Names are resolved only
//! after the environment chain comes up empty, so user bindings shadow them.
//!
//! Every builtin checks its argument count and argument kinds and reports
//! violations as errors. The few that need more than their arguments (calling
//! a predicate, writing output, reading input) reach the interpreter through
//! [`BuiltinHost`].

use std::io;

use crate::errors::{
    builtin_arity_mismatch, empty_array, io_error, parse_int_failed, predicate_not_boolean,
    wrong_argument_type, EvalError,
};
use crate::Value;

/// What a builtin may ask of the interpreter running it.
pub trait BuiltinHost {
    /// Apply a callable value to arguments.
    fn call(&mut self, callee: &Value, args: Vec<Value>) -> Result<Value, EvalError>;

    /// Write one line of program output.
    fn print_line(&mut self, line: &str);

    /// Read one line of input without its terminator; `None` at end of input.
    fn read_line(&mut self) -> io::Result<Option<String>>;
}

/// A native operation.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum BuiltinFunction {
    Length,
    First,
    Last,
    StringConcat,
    ListConcat,
    Push,
    Reverse,
    Partition,
    ParseInt,
    Print,
    ReadLine,
}

/// Every name a builtin answers to. Qualified names group builtins by the
/// kind they operate on; the short names are the free-function spellings.
const BUILTIN_NAMES: &[(&str, BuiltinFunction)] = &[
    ("len", BuiltinFunction::Length),
    ("length", BuiltinFunction::Length),
    ("string.length", BuiltinFunction::Length),
    ("list.length", BuiltinFunction::Length),
    ("first", BuiltinFunction::First),
    ("list.first", BuiltinFunction::First),
    ("last", BuiltinFunction::Last),
    ("list.last", BuiltinFunction::Last),
    ("concat", BuiltinFunction::StringConcat),
    ("string.concat", BuiltinFunction::StringConcat),
    ("list.concat", BuiltinFunction::ListConcat),
    ("push", BuiltinFunction::Push),
    ("list.push", BuiltinFunction::Push),
    ("reverse", BuiltinFunction::Reverse),
    ("list.reverse", BuiltinFunction::Reverse),
    ("partition", BuiltinFunction::Partition),
    ("list.partition", BuiltinFunction::Partition),
    ("int.parse", BuiltinFunction::ParseInt),
    ("print", BuiltinFunction::Print),
    ("read_line", BuiltinFunction::ReadLine),
];

impl BuiltinFunction {
    /// Resolve a builtin by any of its names.
    pub fn lookup(name: &str) -> Option<Self> {
        BUILTIN_NAMES
            .iter()
            .find(|(candidate, _)| *candidate == name)
            .map(|(_, builtin)| *builtin)
    }

    /// All names a builtin can be called by, in table order.
    pub fn names() -> impl Iterator<Item = &'static str> {
        BUILTIN_NAMES.iter().map(|(name, _)| *name)
    }

    /// Canonical name, used when rendering and in error messages.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Length => "length",
            Self::First => "first",
            Self::Last => "last",
            Self::StringConcat => "concat",
            Self::ListConcat => "list.concat",
            Self::Push => "push",
            Self::Reverse => "reverse",
            Self::Partition => "partition",
            Self::ParseInt => "int.parse",
            Self::Print => "print",
            Self::ReadLine => "read_line",
        }
    }

    pub const fn arity(self) -> usize {
        match self {
            Self::ReadLine => 0,
            Self::Length
            | Self::First
            | Self::Last
            | Self::Reverse
            | Self::ParseInt
            | Self::Print => 1,
            Self::StringConcat | Self::ListConcat | Self::Push | Self::Partition => 2,
        }
    }

    pub(crate) fn check_arity(self, args: &[Value]) -> Result<(), EvalError> {
        if args.len() == self.arity() {
            Ok(())
        } else {
            Err(builtin_arity_mismatch(self.name(), self.arity(), args.len()))
        }
    }

    /// Run the builtin on already-evaluated arguments.
    #[tracing::instrument(level = "debug", skip(args, host), fields(argc = args.len()))]
    pub fn call(self, args: &[Value], host: &mut dyn BuiltinHost) -> Result<Value, EvalError> {
        match self {
            Self::Length => length(self, args),
            Self::First => first_or_last(self, args, <[Value]>::first),
            Self::Last => first_or_last(self, args, <[Value]>::last),
            Self::StringConcat => string_concat(self, args),
            Self::ListConcat => list_concat(self, args),
            Self::Push => push(self, args),
            Self::Reverse => reverse(self, args),
            Self::Partition => partition(self, args, host),
            Self::ParseInt => parse_int(self, args),
            Self::Print => {
                self.check_arity(args)?;
                host.print_line(&args[0].render());
                Ok(Value::Null)
            }
            Self::ReadLine => {
                self.check_arity(args)?;
                let line = host.read_line().map_err(|e| io_error(&e))?;
                Ok(Value::string(line.unwrap_or_default()))
            }
        }
    }
}

/// Array argument at `index`, or a type error naming the builtin.
fn expect_array(
    builtin: BuiltinFunction,
    args: &[Value],
    index: usize,
) -> Result<&[Value], EvalError> {
    match &args[index] {
        Value::Array(items) => Ok(items.as_slice()),
        other => Err(wrong_argument_type(builtin.name(), "array", other.kind())),
    }
}

fn expect_string(builtin: BuiltinFunction, args: &[Value], index: usize) -> Result<&str, EvalError> {
    match &args[index] {
        Value::Str(s) => Ok(s.as_str()),
        other => Err(wrong_argument_type(builtin.name(), "string", other.kind())),
    }
}

fn length(builtin: BuiltinFunction, args: &[Value]) -> Result<Value, EvalError> {
    builtin.check_arity(args)?;
    let count = match &args[0] {
        Value::Str(s) => s.chars().count(),
        Value::Array(items) => items.len(),
        other => {
            return Err(wrong_argument_type(
                builtin.name(),
                "string or array",
                other.kind(),
            ))
        }
    };
    // Lengths of in-memory collections always fit.
    Ok(Value::int(i64::try_from(count).unwrap_or(i64::MAX)))
}

fn first_or_last(
    builtin: BuiltinFunction,
    args: &[Value],
    pick: fn(&[Value]) -> Option<&Value>,
) -> Result<Value, EvalError> {
    builtin.check_arity(args)?;
    let items = expect_array(builtin, args, 0)?;
    pick(items)
        .cloned()
        .ok_or_else(|| empty_array(builtin.name()))
}

fn string_concat(builtin: BuiltinFunction, args: &[Value]) -> Result<Value, EvalError> {
    builtin.check_arity(args)?;
    let left = expect_string(builtin, args, 0)?;
    let right = expect_string(builtin, args, 1)?;
    Ok(Value::string(format!("{left}{right}")))
}

fn list_concat(builtin: BuiltinFunction, args: &[Value]) -> Result<Value, EvalError> {
    builtin.check_arity(args)?;
    let left = expect_array(builtin, args, 0)?;
    let right = expect_array(builtin, args, 1)?;
    let mut joined = Vec::with_capacity(left.len() + right.len());
    joined.extend_from_slice(left);
    joined.extend_from_slice(right);
    Ok(Value::array(joined))
}

fn push(builtin: BuiltinFunction, args: &[Value]) -> Result<Value, EvalError> {
    builtin.check_arity(args)?;
    let items = expect_array(builtin, args, 0)?;
    let mut pushed = Vec::with_capacity(items.len() + 1);
    pushed.extend_from_slice(items);
    pushed.push(args[1].clone());
    Ok(Value::array(pushed))
}

fn reverse(builtin: BuiltinFunction, args: &[Value]) -> Result<Value, EvalError> {
    builtin.check_arity(args)?;
    let items = expect_array(builtin, args, 0)?;
    Ok(Value::array(items.iter().rev().cloned().collect()))
}

/// Split by a predicate into `[matching, rest]`, preserving order.
///
/// The predicate runs on each element left to right and must return a
/// boolean; anything else aborts the whole call.
fn partition(
    builtin: BuiltinFunction,
    args: &[Value],
    host: &mut dyn BuiltinHost,
) -> Result<Value, EvalError> {
    builtin.check_arity(args)?;
    let items = expect_array(builtin, args, 0)?;
    let predicate = &args[1];
    if !matches!(predicate, Value::Function(_) | Value::Builtin(_)) {
        return Err(wrong_argument_type(builtin.name(), "function", predicate.kind()));
    }

    let mut matching = Vec::new();
    let mut rest = Vec::new();
    for item in items {
        match host.call(predicate, vec![item.clone()])? {
            Value::Bool(true) => matching.push(item.clone()),
            Value::Bool(false) => rest.push(item.clone()),
            other => return Err(predicate_not_boolean(other.kind())),
        }
    }
    Ok(Value::array(vec![Value::array(matching), Value::array(rest)]))
}

/// Accepts an optional `-` followed by decimal digits and nothing else: no
/// surrounding whitespace, no `+`, and the value must fit in an `i64`.
fn parse_int(builtin: BuiltinFunction, args: &[Value]) -> Result<Value, EvalError> {
    builtin.check_arity(args)?;
    let text = expect_string(builtin, args, 0)?;
    if text.starts_with('+') {
        return Err(parse_int_failed());
    }
    text.parse::<i64>()
        .map(Value::int)
        .map_err(|_| parse_int_failed())
}

#[cfg(test)]
mod tests;
