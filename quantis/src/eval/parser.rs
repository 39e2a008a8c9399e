//! Precedence-climbing parser for unit formulas
//!
//! Grammar:
//!
//! ```text
//! expr    := unary (binop unary)*
//! unary   := '-' unary | primary
//! primary := IDENT | NUMBER | '(' expr ')'
//! binop   := '+' | '-'        precedence 1
//!          | '*' | '/'        precedence 2
//!          | '^'              precedence 3
//! ```
//!
//! Every binary operator is left-associative, `^` included, so `m^2^3` is
//! `(m^2)^3`. Unary minus binds tighter than any binary operator: `-2^2`
//! is `(-2)^2` and `s^-2` needs no parentheses.

use super::ast::{BinaryOp, Expr};
use super::error::EvalError;
use super::lexer::{Token, TokenKind, lex};
use super::literal::parse_number;
use crate::common::Span;

/// Parse a formula into an expression tree
pub fn parse(source: &str) -> Result<Expr, EvalError> {
    let tokens = lex(source)?;
    let mut parser = Parser::new(&tokens);
    let expr = parser.parse_expr_with_precedence(1)?;
    if !parser.at(TokenKind::Eof) {
        return Err(parser.unexpected("an operator"));
    }
    Ok(expr)
}

pub struct Parser<'a> {
    tokens: &'a [Token],
    pos: usize,
}

impl<'a> Parser<'a> {
    /// `tokens` must end with an [`TokenKind::Eof`] token, as [`lex`] produces
    pub fn new(tokens: &'a [Token]) -> Self {
        Self { tokens, pos: 0 }
    }

    // ==================== Token helpers ====================

    fn current(&self) -> Option<&'a Token> {
        self.tokens.get(self.pos)
    }

    fn peek(&self) -> TokenKind {
        self.current().map(|t| t.kind).unwrap_or(TokenKind::Eof)
    }

    fn at(&self, kind: TokenKind) -> bool {
        self.peek() == kind
    }

    fn span(&self) -> Span {
        match self.current() {
            Some(token) => token.span,
            None => Span::point(self.tokens.last().map(|t| t.span.end).unwrap_or(0)),
        }
    }

    fn advance(&mut self) -> Option<&'a Token> {
        let token = self.current();
        if self.pos < self.tokens.len() {
            self.pos += 1;
        }
        token
    }

    fn expect(&mut self, kind: TokenKind, expected: &'static str) -> Result<Span, EvalError> {
        if self.at(kind) {
            let span = self.span();
            self.advance();
            Ok(span)
        } else {
            Err(self.unexpected(expected))
        }
    }

    fn unexpected(&self, expected: &'static str) -> EvalError {
        match self.current() {
            Some(token) if token.kind != TokenKind::Eof => EvalError::UnexpectedToken {
                expected,
                found: token.text.clone(),
                span: token.span.into(),
            },
            _ => EvalError::UnexpectedEnd {
                expected,
                span: self.span().into(),
            },
        }
    }

    // ==================== Expressions ====================

    /// Parse expression with precedence climbing
    pub fn parse_expr_with_precedence(&mut self, min_prec: u8) -> Result<Expr, EvalError> {
        let mut left = self.parse_unary()?;

        while let Some((op, prec)) = self.binary_op_info() {
            if prec < min_prec {
                break;
            }

            self.advance();
            // Left-associative: the right operand only takes tighter operators
            let right = self.parse_expr_with_precedence(prec + 1)?;

            let span = left.span().merge(right.span());
            left = Expr::Binary {
                op,
                left: Box::new(left),
                right: Box::new(right),
                span,
            };
        }

        Ok(left)
    }

    fn binary_op_info(&self) -> Option<(BinaryOp, u8)> {
        let info = match self.peek() {
            TokenKind::Plus => (BinaryOp::Add, 1),
            TokenKind::Minus => (BinaryOp::Sub, 1),
            TokenKind::Star => (BinaryOp::Mul, 2),
            TokenKind::Slash => (BinaryOp::Div, 2),
            TokenKind::Caret => (BinaryOp::Pow, 3),
            _ => return None,
        };
        Some(info)
    }

    fn parse_unary(&mut self) -> Result<Expr, EvalError> {
        if self.at(TokenKind::Minus) {
            let start = self.span();
            self.advance();
            let expr = self.parse_unary()?;
            let span = start.merge(expr.span());
            return Ok(Expr::Neg {
                expr: Box::new(expr),
                span,
            });
        }
        self.parse_primary()
    }

    fn parse_primary(&mut self) -> Result<Expr, EvalError> {
        match self.peek() {
            TokenKind::Ident => {
                let Some(token) = self.advance() else {
                    return Err(self.unexpected("a unit or number"));
                };
                Ok(Expr::Ident {
                    name: token.text.clone(),
                    span: token.span,
                })
            }
            TokenKind::Number => {
                let Some(token) = self.advance() else {
                    return Err(self.unexpected("a unit or number"));
                };
                let value =
                    parse_number(&token.text).map_err(|kind| EvalError::MalformedLiteral {
                        text: token.text.clone(),
                        kind,
                        span: token.span.into(),
                    })?;
                Ok(Expr::Number {
                    value,
                    span: token.span,
                })
            }
            TokenKind::LParen => {
                let start = self.span();
                self.advance();
                let inner = self.parse_expr_with_precedence(1)?;
                let end = self.expect(TokenKind::RParen, "`)`")?;
                Ok(regroup(inner, start.merge(end)))
            }
            _ => Err(self.unexpected("a unit or number")),
        }
    }
}

/// Widen the outermost span of a parenthesized expression to its parentheses
fn regroup(expr: Expr, span: Span) -> Expr {
    match expr {
        Expr::Ident { name, .. } => Expr::Ident { name, span },
        Expr::Number { value, .. } => Expr::Number { value, span },
        Expr::Neg { expr, .. } => Expr::Neg { expr, span },
        Expr::Binary {
            op, left, right, ..
        } => Expr::Binary {
            op,
            left,
            right,
            span,
        },
    }
}
