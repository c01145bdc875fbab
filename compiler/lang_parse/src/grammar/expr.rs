//! Expression parsing.
//!
//! Binary operators are handled by precedence climbing over
//! `BinaryOp::precedence`; everything is left-associative. Below that sit
//! prefix operators, then postfix calls and indexing, then primaries.

use std::sync::Arc;

use lang_ir::{BinaryOp, Block, Expr, ExprKind, FunctionLiteral, Stmt, StmtKind, TokenKind, UnaryOp};
use lang_stack::ensure_sufficient_stack;

use crate::{ParseError, Parser};

/// Map the current token to an infix operator, if it is one.
fn binary_op(kind: &TokenKind) -> Option<BinaryOp> {
    Some(match kind {
        TokenKind::Plus => BinaryOp::Add,
        TokenKind::Minus => BinaryOp::Sub,
        TokenKind::Star => BinaryOp::Mul,
        TokenKind::Slash => BinaryOp::Div,
        TokenKind::Lt => BinaryOp::Lt,
        TokenKind::Gt => BinaryOp::Gt,
        TokenKind::EqEq => BinaryOp::Eq,
        TokenKind::NotEq => BinaryOp::NotEq,
        _ => return None,
    })
}

impl Parser<'_> {
    /// Parse an expression.
    pub(crate) fn parse_expr(&mut self) -> Result<Expr, ParseError> {
        ensure_sufficient_stack(|| self.parse_binary(1))
    }

    fn parse_binary(&mut self, min_precedence: u8) -> Result<Expr, ParseError> {
        let mut left = self.parse_prefix()?;
        while let Some(op) = binary_op(self.current_kind()) {
            let precedence = op.precedence();
            if precedence < min_precedence {
                break;
            }
            self.cursor.advance();
            let right = self.parse_binary(precedence + 1)?;
            let span = left.span.merge(right.span);
            left = Expr::new(
                ExprKind::Infix {
                    op,
                    left: Box::new(left),
                    right: Box::new(right),
                },
                span,
            );
        }
        Ok(left)
    }

    fn parse_prefix(&mut self) -> Result<Expr, ParseError> {
        let op = match self.current_kind() {
            TokenKind::Bang => UnaryOp::Not,
            TokenKind::Minus => UnaryOp::Neg,
            _ => return self.parse_postfix(),
        };
        let start = self.cursor.advance().span;
        let operand = ensure_sufficient_stack(|| self.parse_prefix())?;
        let span = start.merge(operand.span);
        Ok(Expr::new(
            ExprKind::Prefix {
                op,
                operand: Box::new(operand),
            },
            span,
        ))
    }

    /// Calls `f(a, b)` and indexing `xs[i]`, chained left to right.
    fn parse_postfix(&mut self) -> Result<Expr, ParseError> {
        let mut expr = self.parse_primary()?;
        loop {
            if self.eat(&TokenKind::LParen) {
                let args = self.parse_comma_list(&TokenKind::RParen)?;
                let span = expr.span.merge(self.previous_span());
                expr = Expr::new(
                    ExprKind::Call {
                        callee: Box::new(expr),
                        args,
                    },
                    span,
                );
            } else if self.eat(&TokenKind::LBracket) {
                let index = self.parse_expr()?;
                let end = self.expect(&TokenKind::RBracket)?;
                let span = expr.span.merge(end);
                expr = Expr::new(
                    ExprKind::Index {
                        collection: Box::new(expr),
                        index: Box::new(index),
                    },
                    span,
                );
            } else {
                return Ok(expr);
            }
        }
    }

    fn parse_primary(&mut self) -> Result<Expr, ParseError> {
        let token = self.cursor.current();
        let span = token.span;
        let kind = match &token.kind {
            TokenKind::Int(n) => ExprKind::Int(*n),
            TokenKind::Str(s) => ExprKind::Str(s.clone()),
            TokenKind::True => ExprKind::Bool(true),
            TokenKind::False => ExprKind::Bool(false),
            TokenKind::Ident(name) => ExprKind::Ident(name.clone()),
            TokenKind::LParen => {
                self.cursor.advance();
                let inner = self.parse_expr()?;
                let end = self.expect(&TokenKind::RParen)?;
                return Ok(Expr::new(inner.kind, span.merge(end)));
            }
            TokenKind::LBracket => {
                self.cursor.advance();
                let elements = self.parse_comma_list(&TokenKind::RBracket)?;
                return Ok(Expr::new(
                    ExprKind::Array(elements),
                    span.merge(self.previous_span()),
                ));
            }
            TokenKind::Function => return self.parse_function(),
            TokenKind::If => return self.parse_if(),
            other => return Err(ParseError::expected_expression(other.display_name(), span)),
        };
        self.cursor.advance();
        Ok(Expr::new(kind, span))
    }

    /// Comma-separated expressions up to and including `close`.
    /// A trailing comma is accepted.
    fn parse_comma_list(&mut self, close: &TokenKind) -> Result<Vec<Expr>, ParseError> {
        let mut items = Vec::new();
        while !self.check(close) {
            items.push(self.parse_expr()?);
            if !self.eat(&TokenKind::Comma) {
                break;
            }
        }
        self.expect(close)?;
        Ok(items)
    }

    /// `function(a, b) { ... }`
    fn parse_function(&mut self) -> Result<Expr, ParseError> {
        let start = self.expect(&TokenKind::Function)?;
        self.expect(&TokenKind::LParen)?;
        let mut params = Vec::new();
        while !self.check(&TokenKind::RParen) {
            params.push(self.cursor.expect_ident()?);
            if !self.eat(&TokenKind::Comma) {
                break;
            }
        }
        self.expect(&TokenKind::RParen)?;
        let body = self.parse_block()?;
        let span = start.merge(body.span);
        let literal = FunctionLiteral::new(params, body, span);
        Ok(Expr::new(ExprKind::Function(Arc::new(literal)), span))
    }

    /// `if (condition) { ... } else { ... }`
    ///
    /// `else if` is sugar for an `else` block holding a single `if`.
    fn parse_if(&mut self) -> Result<Expr, ParseError> {
        let start = self.expect(&TokenKind::If)?;
        self.expect(&TokenKind::LParen)?;
        let condition = self.parse_expr()?;
        self.expect(&TokenKind::RParen)?;
        let consequence = self.parse_block()?;
        let alternative = if self.eat(&TokenKind::Else) {
            if self.check(&TokenKind::If) {
                let nested = ensure_sufficient_stack(|| self.parse_if())?;
                Some(else_if_block(nested))
            } else {
                Some(self.parse_block()?)
            }
        } else {
            None
        };
        let end = alternative.as_ref().map_or(consequence.span, |b| b.span);
        Ok(Expr::new(
            ExprKind::If {
                condition: Box::new(condition),
                consequence,
                alternative,
            },
            start.merge(end),
        ))
    }
}

fn else_if_block(nested: Expr) -> Block {
    let span = nested.span;
    Block::new(vec![Stmt::new(StmtKind::Expr(nested), span)], span)
}
