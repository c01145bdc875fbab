//! Resynchronization after a statement fails to parse.

use lang_ir::TokenKind;

use crate::Parser;

/// Tokens that begin a new statement.
fn starts_statement(kind: &TokenKind) -> bool {
    matches!(
        kind,
        TokenKind::Var | TokenKind::Return | TokenKind::For | TokenKind::If
    )
}

impl Parser<'_> {
    /// Skip ahead to the next statement boundary.
    ///
    /// Stops after a `;`, or before a statement keyword, a closing `}` or the
    /// end of input. At least one token is consumed when the failed statement
    /// made no progress, so recovery always terminates.
    pub(crate) fn recover_to_statement(&mut self, start: usize) {
        if self.cursor.position() == start {
            self.cursor.advance();
        }
        while !self.is_at_end() {
            let kind = self.current_kind();
            if matches!(kind, TokenKind::Semicolon) {
                self.cursor.advance();
                return;
            }
            if matches!(kind, TokenKind::RBrace) || starts_statement(kind) {
                return;
            }
            self.cursor.advance();
        }
    }
}
