//! Lexer for Lang.
//!
//! [`lex`] turns source text into a [`TokenList`] that always ends with
//! `TokenKind::Eof`. Problems are collected rather than fatal: an offending
//! byte range is reported and skipped, and lexing continues after it so the
//! parser can still report its own errors for the rest of the file.

mod lex_error;
mod raw_token;

use lang_ir::{Name, Span, Token, TokenKind, TokenList};
use logos::Logos;

pub use lex_error::{LexError, LexErrorKind};
use raw_token::RawToken;

/// Tokens plus any errors found while producing them.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LexOutput {
    pub tokens: TokenList,
    pub errors: Vec<LexError>,
}

impl LexOutput {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

/// Tokenize `source`.
pub fn lex(source: &str) -> LexOutput {
    let mut output = LexOutput::default();
    let Ok(eof) = u32::try_from(source.len()) else {
        output.errors.push(LexError::new(
            LexErrorKind::SourceTooLarge,
            Span::DUMMY,
        ));
        output.tokens.push(Token::new(TokenKind::Eof, Span::DUMMY));
        return output;
    };

    let mut lexer = RawToken::lexer(source);
    while let Some(result) = lexer.next() {
        // Offsets fit because the whole source fits in u32.
        let span = Span::try_from_range(lexer.span()).unwrap_or(Span::point(eof));
        let slice = lexer.slice();
        match result {
            Ok(RawToken::UnterminatedString) => {
                output
                    .errors
                    .push(LexError::new(LexErrorKind::UnterminatedString, span));
            }
            Ok(raw) => {
                let kind = convert(raw, slice, span, &mut output.errors);
                output.tokens.push(Token::new(kind, span));
            }
            Err(()) => output.errors.push(classify_failure(slice, span)),
        }
    }

    output.tokens.push(Token::new(TokenKind::Eof, Span::point(eof)));
    output
}

fn classify_failure(slice: &str, span: Span) -> LexError {
    let kind = if !slice.is_empty() && slice.bytes().all(|b| b.is_ascii_digit()) {
        LexErrorKind::IntegerOverflow
    } else {
        LexErrorKind::UnexpectedCharacter(slice.chars().next().unwrap_or('\0'))
    };
    LexError::new(kind, span)
}

fn convert(raw: RawToken, slice: &str, span: Span, errors: &mut Vec<LexError>) -> TokenKind {
    match raw {
        RawToken::Int(n) => TokenKind::Int(n),
        RawToken::String => TokenKind::Str(cook_string(&slice[1..slice.len() - 1], span, errors)),
        RawToken::Ident => TokenKind::Ident(Name::new(slice)),

        RawToken::Var => TokenKind::Var,
        RawToken::Function => TokenKind::Function,
        RawToken::Return => TokenKind::Return,
        RawToken::If => TokenKind::If,
        RawToken::Else => TokenKind::Else,
        RawToken::For => TokenKind::For,
        RawToken::In => TokenKind::In,
        RawToken::True => TokenKind::True,
        RawToken::False => TokenKind::False,

        RawToken::EqEq => TokenKind::EqEq,
        RawToken::Eq => TokenKind::Eq,
        RawToken::NotEq => TokenKind::NotEq,
        RawToken::Bang => TokenKind::Bang,
        RawToken::Lt => TokenKind::Lt,
        RawToken::Gt => TokenKind::Gt,
        RawToken::Plus => TokenKind::Plus,
        RawToken::Minus => TokenKind::Minus,
        RawToken::Star => TokenKind::Star,
        RawToken::Slash => TokenKind::Slash,

        RawToken::Comma => TokenKind::Comma,
        RawToken::Semicolon => TokenKind::Semicolon,
        RawToken::LParen => TokenKind::LParen,
        RawToken::RParen => TokenKind::RParen,
        RawToken::LBrace => TokenKind::LBrace,
        RawToken::RBrace => TokenKind::RBrace,
        RawToken::LBracket => TokenKind::LBracket,
        RawToken::RBracket => TokenKind::RBracket,

        // Handled by the caller before conversion.
        RawToken::UnterminatedString => TokenKind::Eof,
    }
}

/// Resolve escape sequences inside a string literal body.
///
/// Unknown escapes are reported and kept verbatim.
fn cook_string(body: &str, span: Span, errors: &mut Vec<LexError>) -> String {
    let mut cooked = String::with_capacity(body.len());
    let mut chars = body.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            cooked.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => cooked.push('\n'),
            Some('t') => cooked.push('\t'),
            Some('r') => cooked.push('\r'),
            Some('0') => cooked.push('\0'),
            Some('"') => cooked.push('"'),
            Some('\\') => cooked.push('\\'),
            Some(other) => {
                errors.push(LexError::new(LexErrorKind::InvalidEscape(other), span));
                cooked.push('\\');
                cooked.push(other);
            }
            None => cooked.push('\\'),
        }
    }
    cooked
}
