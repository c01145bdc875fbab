//! Parser tests.
//!
//! - `expressions`: Precedence, prefix and postfix chains, literals
//! - `statements`: Declarations, assignment, loops, blocks and spans
//! - `recovery`: Error reporting and resynchronization

#![allow(clippy::unwrap_used, clippy::expect_used)]

mod statements;

use crate::{parse, ParseOutput};

pub(crate) fn parse_source(source: &str) -> ParseOutput {
    let lexed = lang_lexer::lex(source);
    assert!(lexed.errors.is_empty(), "lex errors: {:?}", lexed.errors);
    parse(&lexed.tokens)
}

/// Parse and render back to source, failing on any parse error.
pub(crate) fn render(source: &str) -> String {
    let output = parse_source(source);
    assert!(!output.has_errors(), "parse errors: {:?}", output.errors);
    output.program.to_string()
}
