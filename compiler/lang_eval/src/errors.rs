//! Evaluation errors and control signals.
//!
//! Every language-level failure is an [`EvalError`] built by one of the
//! `#[cold]` factory functions below; the message is always the `Display` of
//! its [`EvalErrorKind`], so wording lives in exactly one place.
//!
//! Inside the evaluator, errors and `return` travel as the `Err` side of
//! [`EvalResult`] so `?` unwinds both. The public entry points fold them back
//! into `Value::Error` and `Value::Return`.

use std::fmt;

use crate::{Value, ValueKind};

/// Result of evaluating a node.
pub type EvalResult = Result<Value, ControlAction>;

/// Non-local exits from an evaluation.
#[derive(Clone, Debug, PartialEq)]
pub enum ControlAction {
    /// A failure; aborts everything up to the host.
    Error(EvalError),
    /// `return`; absorbed by the nearest function call or the program.
    Return(Value),
}

impl From<EvalError> for ControlAction {
    #[inline]
    fn from(error: EvalError) -> Self {
        ControlAction::Error(error)
    }
}

/// Typed error category.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EvalErrorKind {
    // Arithmetic
    DivisionByZero,
    IntegerOverflow {
        operation: &'static str,
    },

    // Operators
    TypeMismatch {
        left: ValueKind,
        op: &'static str,
        right: ValueKind,
    },
    UnknownOperator {
        left: ValueKind,
        op: &'static str,
        right: ValueKind,
    },
    UnknownPrefixOperator {
        op: &'static str,
        operand: ValueKind,
    },
    IndexNotSupported {
        collection: ValueKind,
        index: ValueKind,
    },

    // Lookup
    IdentifierNotFound {
        name: String,
    },
    LoopVariableInUse {
        name: String,
    },
    NotIterable {
        kind: ValueKind,
    },

    // Calls
    NotAFunction {
        kind: ValueKind,
    },
    ArityMismatch {
        expected: usize,
        got: usize,
    },
    BuiltinArityMismatch {
        name: &'static str,
        expected: usize,
        got: usize,
    },
    WrongArgumentType {
        name: &'static str,
        expected: &'static str,
        got: ValueKind,
    },
    EmptyArray {
        name: &'static str,
    },
    PredicateNotBoolean {
        got: ValueKind,
    },
    ParseIntFailed,
    StackOverflow {
        limit: usize,
    },

    // Host
    Io {
        message: String,
    },
}

impl fmt::Display for EvalErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DivisionByZero => write!(f, "division by zero"),
            Self::IntegerOverflow { operation } => write!(f, "integer overflow in {operation}"),
            Self::TypeMismatch { left, op, right } => {
                write!(f, "type mismatch: {left} {op} {right}")
            }
            Self::UnknownOperator { left, op, right } => {
                write!(f, "unknown operator: {left} {op} {right}")
            }
            Self::UnknownPrefixOperator { op, operand } => {
                write!(f, "unknown operator: {op}{operand}")
            }
            Self::IndexNotSupported { collection, index } => {
                write!(f, "index operator not supported: {collection}[{index}]")
            }
            Self::IdentifierNotFound { name } => write!(f, "identifier not found: {name}"),
            Self::LoopVariableInUse { name } => write!(f, "loop variable already in use: {name}"),
            Self::NotIterable { kind } => write!(f, "cannot iterate over {kind}"),
            Self::NotAFunction { kind } => write!(f, "not a function: {kind}"),
            Self::ArityMismatch { expected, got } => {
                write!(f, "wrong number of arguments: expected {expected}, got {got}")
            }
            Self::BuiltinArityMismatch {
                name,
                expected,
                got,
            } => write!(
                f,
                "wrong number of arguments to {name}: expected {expected}, got {got}"
            ),
            Self::WrongArgumentType {
                name,
                expected,
                got,
            } => write!(
                f,
                "wrong argument type for {name}: expected {expected}, got {got}"
            ),
            Self::EmptyArray { name } => write!(f, "{name} called on an empty array"),
            Self::PredicateNotBoolean { got } => {
                write!(f, "partition predicate must return boolean, got {got}")
            }
            Self::ParseIntFailed => write!(f, "could not parse integer"),
            Self::StackOverflow { limit } => {
                write!(f, "maximum recursion depth exceeded (limit: {limit})")
            }
            Self::Io { message } => write!(f, "input error: {message}"),
        }
    }
}

/// Evaluation error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EvalError {
    pub kind: EvalErrorKind,
    /// Equals `kind.to_string()`.
    pub message: String,
}

impl EvalError {
    fn from_kind(kind: EvalErrorKind) -> Self {
        let message = kind.to_string();
        EvalError { kind, message }
    }
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for EvalError {}

// Arithmetic

#[cold]
pub fn division_by_zero() -> EvalError {
    EvalError::from_kind(EvalErrorKind::DivisionByZero)
}

#[cold]
pub fn integer_overflow(operation: &'static str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::IntegerOverflow { operation })
}

// Operators

/// Binary operator applied to operands of different kinds.
#[cold]
pub fn type_mismatch(left: ValueKind, op: &'static str, right: ValueKind) -> EvalError {
    EvalError::from_kind(EvalErrorKind::TypeMismatch { left, op, right })
}

/// Binary operator not defined for two operands of the same kind.
#[cold]
pub fn unknown_operator(left: ValueKind, op: &'static str, right: ValueKind) -> EvalError {
    EvalError::from_kind(EvalErrorKind::UnknownOperator { left, op, right })
}

#[cold]
pub fn unknown_prefix_operator(op: &'static str, operand: ValueKind) -> EvalError {
    EvalError::from_kind(EvalErrorKind::UnknownPrefixOperator { op, operand })
}

#[cold]
pub fn index_not_supported(collection: ValueKind, index: ValueKind) -> EvalError {
    EvalError::from_kind(EvalErrorKind::IndexNotSupported { collection, index })
}

// Lookup

#[cold]
pub fn identifier_not_found(name: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::IdentifierNotFound {
        name: name.to_string(),
    })
}

#[cold]
pub fn loop_variable_in_use(name: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::LoopVariableInUse {
        name: name.to_string(),
    })
}

#[cold]
pub fn not_iterable(kind: ValueKind) -> EvalError {
    EvalError::from_kind(EvalErrorKind::NotIterable { kind })
}

// Calls

#[cold]
pub fn not_a_function(kind: ValueKind) -> EvalError {
    EvalError::from_kind(EvalErrorKind::NotAFunction { kind })
}

#[cold]
pub fn arity_mismatch(expected: usize, got: usize) -> EvalError {
    EvalError::from_kind(EvalErrorKind::ArityMismatch { expected, got })
}

#[cold]
pub fn builtin_arity_mismatch(name: &'static str, expected: usize, got: usize) -> EvalError {
    EvalError::from_kind(EvalErrorKind::BuiltinArityMismatch {
        name,
        expected,
        got,
    })
}

#[cold]
pub fn wrong_argument_type(name: &'static str, expected: &'static str, got: ValueKind) -> EvalError {
    EvalError::from_kind(EvalErrorKind::WrongArgumentType {
        name,
        expected,
        got,
    })
}

#[cold]
pub fn empty_array(name: &'static str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::EmptyArray { name })
}

#[cold]
pub fn predicate_not_boolean(got: ValueKind) -> EvalError {
    EvalError::from_kind(EvalErrorKind::PredicateNotBoolean { got })
}

#[cold]
pub fn parse_int_failed() -> EvalError {
    EvalError::from_kind(EvalErrorKind::ParseIntFailed)
}

#[cold]
pub fn recursion_limit_exceeded(limit: usize) -> EvalError {
    EvalError::from_kind(EvalErrorKind::StackOverflow { limit })
}

// Host

#[cold]
pub fn io_error(error: &std::io::Error) -> EvalError {
    EvalError::from_kind(EvalErrorKind::Io {
        message: error.to_string(),
    })
}
