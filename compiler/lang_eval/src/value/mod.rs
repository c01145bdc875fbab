//! Runtime values.
//!
//! `Value` is a closed enum; every dispatch point in the evaluator matches on
//! it exhaustively. Scalars are stored inline. Strings, arrays, functions and
//! the two signal variants live behind [`Heap`], so assigning a value to a new
//! name shares the allocation instead of copying it. Nothing in the evaluator
//! mutates a heap value after creation: array builtins build new arrays.
//!
//! # Construction
//!
//! ```text
//! let s = Value::string("hello");
//! let xs = Value::array(vec![Value::int(1), Value::int(2)]);
//! let err = Value::error(division_by_zero());
//! ```

mod heap;

use std::fmt;
use std::sync::Arc;

use lang_ir::FunctionLiteral;

use crate::{BuiltinFunction, Environment, EvalError};

pub use heap::Heap;

/// Runtime value.
#[derive(Clone)]
pub enum Value {
    Int(i64),
    Str(Heap<String>),
    Bool(bool),
    Null,
    Array(Heap<Vec<Value>>),
    /// User-defined closure.
    Function(Heap<FunctionValue>),
    /// Native operation.
    Builtin(BuiltinFunction),
    /// Value carried out of a function body by `return`.
    ///
    /// Absorbed by the enclosing call or program evaluation; never the final
    /// result of either.
    Return(Heap<Value>),
    /// A recoverable failure. Short-circuits everything that consumes it.
    Error(Heap<EvalError>),
}

/// Kind tag of a [`Value`], used for dispatch and in error messages.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Integer,
    String,
    Boolean,
    Null,
    Array,
    Function,
    Builtin,
    Return,
    Error,
}

impl ValueKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            ValueKind::Integer => "integer",
            ValueKind::String => "string",
            ValueKind::Boolean => "boolean",
            ValueKind::Null => "null",
            ValueKind::Array => "array",
            ValueKind::Function => "function",
            ValueKind::Builtin => "builtin",
            ValueKind::Return => "return",
            ValueKind::Error => "error",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A closure: a function literal plus the environment it was defined in.
///
/// The environment is captured by reference, so later changes to bindings in
/// the defining scope are visible when the closure runs.
pub struct FunctionValue {
    literal: Arc<FunctionLiteral>,
    env: Environment,
}

impl FunctionValue {
    pub fn new(literal: Arc<FunctionLiteral>, env: Environment) -> Self {
        FunctionValue { literal, env }
    }

    #[inline]
    pub fn literal(&self) -> &FunctionLiteral {
        &self.literal
    }

    #[inline]
    pub fn arity(&self) -> usize {
        self.literal.params.len()
    }

    /// Environment captured at the definition site.
    #[inline]
    pub fn env(&self) -> &Environment {
        &self.env
    }
}

impl fmt::Debug for FunctionValue {
    // The captured environment may contain this function, so it is not printed.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let params: Vec<&str> = self.literal.params.iter().map(|p| p.name.as_str()).collect();
        f.debug_struct("FunctionValue")
            .field("params", &params)
            .finish_non_exhaustive()
    }
}

impl Value {
    #[inline]
    pub fn int(n: i64) -> Self {
        Value::Int(n)
    }

    pub fn string(s: impl Into<String>) -> Self {
        Value::Str(Heap::new(s.into()))
    }

    #[inline]
    pub fn bool(b: bool) -> Self {
        Value::Bool(b)
    }

    pub fn array(elements: Vec<Value>) -> Self {
        Value::Array(Heap::new(elements))
    }

    pub fn function(literal: Arc<FunctionLiteral>, env: Environment) -> Self {
        Value::Function(Heap::new(FunctionValue::new(literal, env)))
    }

    #[inline]
    pub fn builtin(builtin: BuiltinFunction) -> Self {
        Value::Builtin(builtin)
    }

    pub fn return_signal(value: Value) -> Self {
        Value::Return(Heap::new(value))
    }

    pub fn error(error: EvalError) -> Self {
        Value::Error(Heap::new(error))
    }

    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Int(_) => ValueKind::Integer,
            Value::Str(_) => ValueKind::String,
            Value::Bool(_) => ValueKind::Boolean,
            Value::Null => ValueKind::Null,
            Value::Array(_) => ValueKind::Array,
            Value::Function(_) => ValueKind::Function,
            Value::Builtin(_) => ValueKind::Builtin,
            Value::Return(_) => ValueKind::Return,
            Value::Error(_) => ValueKind::Error,
        }
    }

    /// `null` and `false` are falsy; every other value is truthy.
    #[inline]
    pub fn is_truthy(&self) -> bool {
        !matches!(self, Value::Null | Value::Bool(false))
    }

    #[inline]
    pub fn is_error(&self) -> bool {
        matches!(self, Value::Error(_))
    }

    #[inline]
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s.as_str()),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(items) => Some(items.as_slice()),
            _ => None,
        }
    }

    pub fn as_error(&self) -> Option<&EvalError> {
        match self {
            Value::Error(e) => Some(&**e),
            _ => None,
        }
    }

    /// Human-readable rendering for hosts. Never used for comparisons.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(n) => write!(f, "{n}"),
            Value::Str(s) => f.write_str(s),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Null => f.write_str("null"),
            Value::Array(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("]")
            }
            Value::Function(func) => write!(f, "{}", func.literal()),
            Value::Builtin(builtin) => write!(f, "builtin function {}", builtin.name()),
            Value::Return(inner) => write!(f, "{}", &**inner),
            Value::Error(error) => write!(f, "ERROR: {}", error.message),
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(n) => write!(f, "Int({n})"),
            Value::Str(s) => write!(f, "Str({:?})", &***s),
            Value::Bool(b) => write!(f, "Bool({b})"),
            Value::Null => f.write_str("Null"),
            Value::Array(items) => f.debug_tuple("Array").field(&**items).finish(),
            Value::Function(func) => f.debug_tuple("Function").field(&**func).finish(),
            Value::Builtin(builtin) => write!(f, "Builtin({})", builtin.name()),
            Value::Return(inner) => f.debug_tuple("Return").field(&**inner).finish(),
            Value::Error(error) => write!(f, "Error({:?})", error.message),
        }
    }
}

/// Structural equality for host code and tests.
///
/// Functions compare by identity. Language-level `==` lives in the operator
/// module and differs for mismatched kinds.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Str(a), Value::Str(b)) => **a == **b,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Null, Value::Null) => true,
            (Value::Array(a), Value::Array(b)) => **a == **b,
            (Value::Function(a), Value::Function(b)) => Heap::ptr_eq(a, b),
            (Value::Builtin(a), Value::Builtin(b)) => a == b,
            (Value::Return(a), Value::Return(b)) => **a == **b,
            (Value::Error(a), Value::Error(b)) => **a == **b,
            _ => false,
        }
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::string(s)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::string(s)
    }
}

impl From<Vec<Value>> for Value {
    fn from(elements: Vec<Value>) -> Self {
        Value::array(elements)
    }
}

impl From<EvalError> for Value {
    fn from(error: EvalError) -> Self {
        Value::error(error)
    }
}

#[cfg(test)]
mod tests;
