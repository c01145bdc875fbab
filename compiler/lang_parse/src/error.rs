//! Parse errors.

use lang_ir::Span;
use thiserror::Error;

/// A parse error and the source range it refers to.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("{kind}")]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub span: Span,
}

impl ParseError {
    pub fn new(kind: ParseErrorKind, span: Span) -> Self {
        ParseError { kind, span }
    }

    #[cold]
    pub fn unexpected(expected: impl Into<String>, found: &'static str, span: Span) -> Self {
        ParseError::new(
            ParseErrorKind::UnexpectedToken {
                expected: expected.into(),
                found,
            },
            span,
        )
    }

    #[cold]
    pub fn expected_expression(found: &'static str, span: Span) -> Self {
        ParseError::new(ParseErrorKind::ExpectedExpression { found }, span)
    }
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ParseErrorKind {
    #[error("expected {expected}, found {found}")]
    UnexpectedToken {
        expected: String,
        found: &'static str,
    },
    #[error("expected an expression, found {found}")]
    ExpectedExpression { found: &'static str },
}
