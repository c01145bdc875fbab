//! Statement parsing.

use lang_ir::{Block, LoopStmt, Stmt, StmtKind, TokenKind};

use crate::{ParseError, Parser};

impl Parser<'_> {
    /// Parse one statement. A trailing `;` is optional everywhere.
    pub(crate) fn parse_statement(&mut self) -> Result<Stmt, ParseError> {
        let start = self.current_span();
        let kind = match self.current_kind() {
            TokenKind::Var => self.parse_var()?,
            TokenKind::Return => {
                self.cursor.advance();
                StmtKind::Return(self.parse_expr()?)
            }
            TokenKind::For => StmtKind::Loop(self.parse_loop()?),
            TokenKind::Ident(_) if matches!(self.cursor.peek_kind(), TokenKind::Eq) => {
                let name = self.cursor.expect_ident()?;
                self.expect(&TokenKind::Eq)?;
                let value = self.parse_expr()?;
                StmtKind::Assign { name, value }
            }
            _ => StmtKind::Expr(self.parse_expr()?),
        };
        self.eat(&TokenKind::Semicolon);
        Ok(Stmt::new(kind, start.merge(self.previous_span())))
    }

    /// `var name = value`
    fn parse_var(&mut self) -> Result<StmtKind, ParseError> {
        self.expect(&TokenKind::Var)?;
        let name = self.cursor.expect_ident()?;
        self.expect(&TokenKind::Eq)?;
        let value = self.parse_expr()?;
        Ok(StmtKind::Var { name, value })
    }

    /// `for (element in source) { ... }` or `for (element, index in source) { ... }`
    fn parse_loop(&mut self) -> Result<LoopStmt, ParseError> {
        self.expect(&TokenKind::For)?;
        self.expect(&TokenKind::LParen)?;
        let element = self.cursor.expect_ident()?;
        let index = if self.eat(&TokenKind::Comma) {
            Some(self.cursor.expect_ident()?)
        } else {
            None
        };
        self.expect(&TokenKind::In)?;
        let source = self.cursor.expect_ident()?;
        self.expect(&TokenKind::RParen)?;
        let body = self.parse_block()?;
        Ok(LoopStmt {
            source,
            element,
            index,
            body,
        })
    }

    /// `{ statement* }`
    ///
    /// Statements that fail inside the block are recorded and skipped so the
    /// closing brace still lines up.
    pub(crate) fn parse_block(&mut self) -> Result<Block, ParseError> {
        let start = self.expect(&TokenKind::LBrace)?;
        let mut statements = Vec::new();
        while !self.check(&TokenKind::RBrace) && !self.is_at_end() {
            let position = self.cursor.position();
            match self.parse_statement() {
                Ok(stmt) => statements.push(stmt),
                Err(error) => {
                    self.errors.push(error);
                    self.recover_to_statement(position);
                }
            }
        }
        let end = self.expect(&TokenKind::RBrace)?;
        Ok(Block::new(statements, start.merge(end)))
    }
}
