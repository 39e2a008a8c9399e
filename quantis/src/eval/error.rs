//! Evaluation diagnostics
//!
//! Every failure aborts the whole evaluation with exactly one of these. Each
//! carries a stable code and a label over the offending bytes so callers can
//! render it against the formula with `miette`.

use miette::{Diagnostic, SourceSpan};
use thiserror::Error;

use super::literal::LiteralError;
use crate::units::UnitDef;

/// A formula that could not be turned into a unit
#[derive(Debug, Clone, PartialEq, Error, Diagnostic)]
pub enum EvalError {
    #[error("unresolved identifier `{name}`")]
    #[diagnostic(
        code(U0001),
        help(
            "`{}` is neither a known unit, a caller-supplied identifier, nor a metric prefix (T G M k h d c m u n p) applied to one",
            .name
        )
    )]
    UnresolvedIdentifier {
        name: String,
        #[label("unknown unit")]
        span: SourceSpan,
    },

    #[error("malformed numeric literal `{text}`: {kind}")]
    #[diagnostic(code(U0002))]
    MalformedLiteral {
        text: String,
        kind: LiteralError,
        #[label("invalid literal")]
        span: SourceSpan,
    },

    #[error("exponent must be a whole number, found {found}")]
    #[diagnostic(
        code(U0003),
        help("`^` raises a unit to an integer power written in the formula, e.g. `m^3` or `s^-2`")
    )]
    NonIntegerExponent {
        found: String,
        #[label("not a whole number")]
        span: SourceSpan,
    },

    #[error("cannot {op} `{left}` and `{right}`: both terms must be the same unit")]
    #[diagnostic(
        code(U0004),
        help("`+` and `-` never convert; write both terms in the same unit")
    )]
    MismatchedTerms {
        op: &'static str,
        left: UnitDef,
        right: UnitDef,
        #[label("terms differ")]
        span: SourceSpan,
    },

    #[error("scale factor must be positive and finite")]
    #[diagnostic(
        code(U0005),
        help("a unit can only be scaled by a positive number, e.g. `0.3048 * m`")
    )]
    InvalidScale {
        #[label("this scale is zero, negative, or out of range")]
        span: SourceSpan,
    },

    #[error("a unit cannot be negated")]
    #[diagnostic(code(U0006), help("negation only applies to numbers, e.g. `s^-2`"))]
    NegatedUnit {
        #[label("negated unit")]
        span: SourceSpan,
    },

    #[error("dimension exponent out of range")]
    #[diagnostic(code(U0007), help("exponents are limited to -128..=127 per dimension"))]
    ExponentOverflow {
        #[label("exponent overflows here")]
        span: SourceSpan,
    },

    #[error("unexpected character `{found}`")]
    #[diagnostic(
        code(U0008),
        help("formulas contain identifiers, numbers, `+ - * / ^` and parentheses")
    )]
    UnexpectedCharacter {
        found: String,
        #[label("not allowed in a formula")]
        span: SourceSpan,
    },

    #[error("expected {expected}, found `{found}`")]
    #[diagnostic(code(U0009))]
    UnexpectedToken {
        expected: &'static str,
        found: String,
        #[label("unexpected token")]
        span: SourceSpan,
    },

    #[error("expected {expected}, found end of formula")]
    #[diagnostic(code(U0010))]
    UnexpectedEnd {
        expected: &'static str,
        #[label("formula ends here")]
        span: SourceSpan,
    },
}

impl EvalError {
    /// Byte range of the formula this error points at
    pub fn span(&self) -> SourceSpan {
        match self {
            EvalError::UnresolvedIdentifier { span, .. }
            | EvalError::MalformedLiteral { span, .. }
            | EvalError::NonIntegerExponent { span, .. }
            | EvalError::MismatchedTerms { span, .. }
            | EvalError::InvalidScale { span }
            | EvalError::NegatedUnit { span }
            | EvalError::ExponentOverflow { span }
            | EvalError::UnexpectedCharacter { span, .. }
            | EvalError::UnexpectedToken { span, .. }
            | EvalError::UnexpectedEnd { span, .. } => *span,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::Span;

    #[test]
    fn test_codes() {
        let err = EvalError::UnresolvedIdentifier {
            name: "furlong".into(),
            span: Span::new(0, 7).into(),
        };
        assert_eq!(err.code().map(|c| c.to_string()), Some("U0001".into()));
        assert_eq!(err.to_string(), "unresolved identifier `furlong`");
        assert_eq!(err.span().offset(), 0);
        assert_eq!(err.span().len(), 7);
    }

    #[test]
    fn test_literal_message() {
        let err = EvalError::MalformedLiteral {
            text: "1_.5".into(),
            kind: LiteralError::InvalidUnderscore { offset: 1 },
            span: Span::new(0, 4).into(),
        };
        assert!(err.to_string().starts_with("malformed numeric literal `1_.5`"));
        assert!(err.to_string().contains("separator"));
    }
}
