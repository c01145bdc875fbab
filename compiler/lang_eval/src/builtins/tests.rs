#![allow(clippy::unwrap_used)]

use std::collections::VecDeque;
use std::io;

use pretty_assertions::assert_eq;

use super::{BuiltinFunction, BuiltinHost};
use crate::errors::{not_a_function, EvalError};
use crate::{EvalErrorKind, Value, ValueKind};

/// Host that only knows how to call builtins, records output and replays
/// scripted input.
#[derive(Default)]
struct TestHost {
    output: Vec<String>,
    input: VecDeque<String>,
}

impl BuiltinHost for TestHost {
    fn call(&mut self, callee: &Value, args: Vec<Value>) -> Result<Value, EvalError> {
        match callee {
            Value::Builtin(builtin) => builtin.call(&args, self),
            other => Err(not_a_function(other.kind())),
        }
    }

    fn print_line(&mut self, line: &str) {
        self.output.push(line.to_string());
    }

    fn read_line(&mut self) -> io::Result<Option<String>> {
        Ok(self.input.pop_front())
    }
}

fn call(builtin: BuiltinFunction, args: &[Value]) -> Result<Value, String> {
    builtin
        .call(args, &mut TestHost::default())
        .map_err(|e| e.message)
}

fn ints(values: &[i64]) -> Value {
    Value::array(values.iter().copied().map(Value::int).collect())
}

#[test]
fn lookup_by_every_name() {
    assert_eq!(BuiltinFunction::lookup("len"), Some(BuiltinFunction::Length));
    assert_eq!(BuiltinFunction::lookup("length"), Some(BuiltinFunction::Length));
    assert_eq!(BuiltinFunction::lookup("string.length"), Some(BuiltinFunction::Length));
    assert_eq!(BuiltinFunction::lookup("list.first"), Some(BuiltinFunction::First));
    assert_eq!(BuiltinFunction::lookup("concat"), Some(BuiltinFunction::StringConcat));
    assert_eq!(BuiltinFunction::lookup("list.concat"), Some(BuiltinFunction::ListConcat));
    assert_eq!(BuiltinFunction::lookup("int.parse"), Some(BuiltinFunction::ParseInt));
    assert_eq!(BuiltinFunction::lookup("read_line"), Some(BuiltinFunction::ReadLine));
    assert_eq!(BuiltinFunction::lookup("nope"), None);
    assert_eq!(BuiltinFunction::lookup("list"), None);
}

#[test]
fn every_name_resolves() {
    for name in BuiltinFunction::names() {
        assert!(BuiltinFunction::lookup(name).is_some(), "{name}");
    }
}

#[test]
fn length_of_strings_and_arrays() {
    assert_eq!(call(BuiltinFunction::Length, &[Value::string("hello")]), Ok(Value::int(5)));
    assert_eq!(call(BuiltinFunction::Length, &[ints(&[1, 2, 3])]), Ok(Value::int(3)));
    assert_eq!(call(BuiltinFunction::Length, &[Value::string("")]), Ok(Value::int(0)));
    assert_eq!(
        call(BuiltinFunction::Length, &[Value::int(1)]),
        Err("wrong argument type for length: expected string or array, got integer".into())
    );
}

#[test]
fn arity_is_checked_before_kinds() {
    assert_eq!(
        call(BuiltinFunction::Length, &[Value::int(1), Value::int(2)]),
        Err("wrong number of arguments to length: expected 1, got 2".into())
    );
    assert_eq!(
        call(BuiltinFunction::Push, &[ints(&[])]),
        Err("wrong number of arguments to push: expected 2, got 1".into())
    );
}

#[test]
fn first_and_last() {
    let xs = ints(&[4, 5, 6]);
    assert_eq!(call(BuiltinFunction::First, &[xs.clone()]), Ok(Value::int(4)));
    assert_eq!(call(BuiltinFunction::Last, &[xs]), Ok(Value::int(6)));
}

#[test]
fn first_and_last_of_empty_array_are_errors() {
    let result = BuiltinFunction::First.call(&[ints(&[])], &mut TestHost::default());
    let Err(error) = result else {
        panic!("expected an error, got {result:?}");
    };
    assert_eq!(error.kind, EvalErrorKind::EmptyArray { name: "first" });
    assert_eq!(
        call(BuiltinFunction::Last, &[ints(&[])]),
        Err("last called on an empty array".into())
    );
}

#[test]
fn string_concat() {
    assert_eq!(
        call(BuiltinFunction::StringConcat, &[Value::string("ab"), Value::string("cd")]),
        Ok(Value::string("abcd"))
    );
    assert_eq!(
        call(BuiltinFunction::StringConcat, &[Value::string("ab"), Value::int(1)]),
        Err("wrong argument type for concat: expected string, got integer".into())
    );
}

#[test]
fn list_concat_push_and_reverse_build_new_arrays() {
    let xs = ints(&[1, 2]);
    assert_eq!(
        call(BuiltinFunction::ListConcat, &[xs.clone(), ints(&[3])]),
        Ok(ints(&[1, 2, 3]))
    );
    assert_eq!(
        call(BuiltinFunction::Push, &[xs.clone(), Value::string("x")]),
        Ok(Value::array(vec![Value::int(1), Value::int(2), Value::string("x")]))
    );
    assert_eq!(call(BuiltinFunction::Reverse, &[xs.clone()]), Ok(ints(&[2, 1])));
    assert_eq!(xs, ints(&[1, 2]));
}

#[test]
fn parse_int() {
    assert_eq!(call(BuiltinFunction::ParseInt, &[Value::string("42")]), Ok(Value::int(42)));
    assert_eq!(call(BuiltinFunction::ParseInt, &[Value::string("-7")]), Ok(Value::int(-7)));
    for text in [" 42 ", "+5", "4 2", "", "-"] {
        assert_eq!(
            call(BuiltinFunction::ParseInt, &[Value::string(text)]),
            Err("could not parse integer".into()),
            "{text:?}"
        );
    }
    assert_eq!(
        call(BuiltinFunction::ParseInt, &[Value::string("abc")]),
        Err("could not parse integer".into())
    );
    assert_eq!(
        call(BuiltinFunction::ParseInt, &[Value::string("99999999999999999999")]),
        Err("could not parse integer".into())
    );
}

#[test]
fn print_renders_through_the_host() {
    let mut host = TestHost::default();
    let args = [Value::array(vec![Value::string("a"), Value::int(1)])];
    assert_eq!(BuiltinFunction::Print.call(&args, &mut host), Ok(Value::Null));
    assert_eq!(host.output, vec!["[a, 1]".to_string()]);
}

#[test]
fn read_line_returns_empty_string_at_end_of_input() {
    let mut host = TestHost {
        input: VecDeque::from(["typed".to_string()]),
        ..TestHost::default()
    };
    assert_eq!(
        BuiltinFunction::ReadLine.call(&[], &mut host),
        Ok(Value::string("typed"))
    );
    assert_eq!(
        BuiltinFunction::ReadLine.call(&[], &mut host),
        Ok(Value::string(""))
    );
    assert_eq!(
        call(BuiltinFunction::ReadLine, &[Value::Null]),
        Err("wrong number of arguments to read_line: expected 0, got 1".into())
    );
}

#[test]
fn partition_predicate_must_return_boolean() {
    let predicate = Value::builtin(BuiltinFunction::Length);
    assert_eq!(
        call(BuiltinFunction::Partition, &[ints(&[]), predicate.clone()]),
        Ok(Value::array(vec![ints(&[]), ints(&[])]))
    );
    let words = Value::array(vec![Value::string("ab")]);
    assert_eq!(
        call(BuiltinFunction::Partition, &[words, predicate]),
        Err("partition predicate must return boolean, got integer".into())
    );
}

#[test]
fn partition_requires_a_callable() {
    assert_eq!(
        call(BuiltinFunction::Partition, &[ints(&[1]), Value::int(3)]),
        Err("wrong argument type for partition: expected function, got integer".into())
    );
}

#[test]
fn rendering_uses_canonical_name() {
    let value = Value::builtin(BuiltinFunction::lookup("len").unwrap());
    assert_eq!(value.render(), "builtin function length");
    assert_eq!(value.kind(), ValueKind::Builtin);
}
