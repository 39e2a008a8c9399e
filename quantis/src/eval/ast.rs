//! Transient syntax tree of a formula
//!
//! Built by the parser and consumed by a single fold; nothing here outlives
//! one evaluation.

use std::fmt;

use super::literal::Number;
use crate::common::Span;

#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A unit name, resolved during the fold
    Ident { name: String, span: Span },
    /// A numeric literal, already parsed
    Number { value: Number, span: Span },
    /// Unary minus
    Neg { expr: Box<Expr>, span: Span },
    Binary {
        op: BinaryOp,
        left: Box<Expr>,
        right: Box<Expr>,
        span: Span,
    },
}

impl Expr {
    pub fn span(&self) -> Span {
        match self {
            Expr::Ident { span, .. }
            | Expr::Number { span, .. }
            | Expr::Neg { span, .. }
            | Expr::Binary { span, .. } => *span,
        }
    }
}

/// Binary operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Pow,
}

impl BinaryOp {
    pub fn symbol(self) -> &'static str {
        match self {
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Mul => "*",
            BinaryOp::Div => "/",
            BinaryOp::Pow => "^",
        }
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Fully parenthesized rendering, handy for checking how a formula grouped
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Ident { name, .. } => write!(f, "{}", name),
            Expr::Number { value, .. } => write!(f, "{}", value.as_f64()),
            Expr::Neg { expr, .. } => write!(f, "(-{})", expr),
            Expr::Binary {
                op, left, right, ..
            } => write!(f, "({} {} {})", left, op, right),
        }
    }
}
