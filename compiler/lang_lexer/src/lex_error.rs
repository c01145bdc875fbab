//! Lexer diagnostics.

use lang_ir::Span;
use thiserror::Error;

/// A lexer error and where it happened.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("{kind}")]
pub struct LexError {
    pub kind: LexErrorKind,
    pub span: Span,
}

impl LexError {
    pub fn new(kind: LexErrorKind, span: Span) -> Self {
        LexError { kind, span }
    }
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum LexErrorKind {
    #[error("unexpected character `{0}`")]
    UnexpectedCharacter(char),
    #[error("integer literal does not fit in 64 bits")]
    IntegerOverflow,
    #[error("unterminated string literal")]
    UnterminatedString,
    #[error("unknown escape sequence `\\{0}`")]
    InvalidEscape(char),
    #[error("source text is larger than 4 GiB")]
    SourceTooLarge,
}
