//! Lexing and parsing with diagnostics collected in one list.

use lang_ir::{Program, Span};

/// A front-end error ready for rendering.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Diagnostic {
    pub message: String,
    pub span: Span,
}

/// Lex and parse `source`. Any lexical or syntax error rejects the whole
/// input; a partially parsed program is never evaluated.
pub(crate) fn parse_source(source: &str) -> Result<Program, Vec<Diagnostic>> {
    let lexed = lang_lexer::lex(source);
    let mut diagnostics: Vec<Diagnostic> = lexed
        .errors
        .iter()
        .map(|error| Diagnostic {
            message: error.to_string(),
            span: error.span,
        })
        .collect();

    let parsed = lang_parse::parse(&lexed.tokens);
    diagnostics.extend(parsed.errors.iter().map(|error| Diagnostic {
        message: error.to_string(),
        span: error.span,
    }));

    if diagnostics.is_empty() {
        Ok(parsed.program)
    } else {
        tracing::debug!(count = diagnostics.len(), "front-end errors");
        Err(diagnostics)
    }
}
