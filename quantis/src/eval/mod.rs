//! Unit formula evaluator
//!
//! Turns text such as `"kg / m^3"` or `"ft * slug / s^2"` into a
//! [`UnitDef`] by tokenizing, parsing with operator precedence, and folding
//! the tree through the unit algebra. Identifiers resolve against a
//! [`SymbolTable`] plus caller-supplied overrides.
//!
//! Operands fold to either a unit or a plain number. Numbers combine with
//! each other arithmetically; a number times a unit scales the unit; a unit
//! raised to a number needs a whole-number power. A formula that reduces to
//! a bare number denotes a dimensionless scale.
//!
//! ```
//! use quantis::eval::eval_unit;
//! use quantis::units::si::{Joule, Watt};
//! use quantis::units::Unit;
//!
//! let power = eval_unit("J / s", &[]).unwrap();
//! assert!(power.same_as(&Watt::DEF));
//!
//! let kwh = eval_unit("kW * h", &[]).unwrap();
//! assert!(kwh.same_as(&Joule::DEF.scale(3_600_000.0)));
//! ```
//!
//! Any failure aborts the whole evaluation with a single [`EvalError`].

pub mod ast;
pub mod error;
pub mod lexer;
pub mod literal;
pub mod parser;
pub mod symbols;

pub use ast::{BinaryOp, Expr};
pub use error::EvalError;
pub use lexer::{Token, TokenKind, lex};
pub use literal::{LiteralError, Number, parse_number};
pub use parser::parse;
pub use symbols::{Resolution, SymbolTable};

use rustc_hash::FxHashMap;
use tracing::{debug, trace};

use crate::common::Span;
use crate::units::{AlgebraError, QuantityKind, UnitDef};

/// Evaluate a formula against the default symbol table
///
/// `extras` binds additional names; they take precedence over the table.
pub fn eval_unit(formula: &str, extras: &[(&str, UnitDef)]) -> Result<UnitDef, EvalError> {
    Evaluator::new(SymbolTable::defaults())
        .with_identifiers(extras)
        .eval_unit(formula)
}

/// Evaluate a formula to the kind of quantity `N` over the resulting unit
///
/// ```
/// use quantis::eval::{eval_quantity, eval_unit};
/// use quantis::units::si::Newton;
/// use quantis::units::Unit;
///
/// let slug = eval_unit("32.174_049 * lb", &[]).unwrap();
/// let lbf = eval_quantity::<f32>("ft * my_slug / s^2", &[("my_slug", slug)]).unwrap();
/// let newtons = lbf.init(1.0).convert_to_value(Newton::DEF).unwrap();
/// assert!((newtons - 4.448_221_6).abs() < 1e-6);
/// ```
pub fn eval_quantity<N>(
    formula: &str,
    extras: &[(&str, UnitDef)],
) -> Result<QuantityKind<N>, EvalError> {
    eval_unit(formula, extras).map(QuantityKind::new)
}

/// Value of a subexpression during the fold
#[derive(Debug, Clone, Copy, PartialEq)]
enum Operand {
    /// Dimensionless literal arithmetic, not yet a unit
    Number(f64),
    Unit(UnitDef),
}

/// Formula evaluator over a symbol table and named overrides
#[derive(Debug, Clone)]
pub struct Evaluator<'a> {
    table: &'a SymbolTable,
    overrides: FxHashMap<&'a str, UnitDef>,
}

impl<'a> Evaluator<'a> {
    pub fn new(table: &'a SymbolTable) -> Self {
        Self {
            table,
            overrides: FxHashMap::default(),
        }
    }

    /// Bind caller-supplied identifiers
    pub fn with_identifiers(mut self, extras: &[(&'a str, UnitDef)]) -> Self {
        for &(name, unit) in extras {
            self.define(name, unit);
        }
        self
    }

    pub fn define(&mut self, name: &'a str, unit: UnitDef) {
        self.overrides.insert(name, unit);
    }

    /// Resolve an identifier
    ///
    /// Order: exact override, exact table entry, then prefix + base where
    /// the base is again looked up in the overrides first.
    pub fn resolve(&self, name: &str) -> Option<Resolution> {
        if let Some(&unit) = self.overrides.get(name) {
            return Some(Resolution::Exact(unit));
        }
        if let Some(unit) = self.table.lookup(name) {
            return Some(Resolution::Exact(unit));
        }
        let (prefix, rest) = symbols::split_prefix(name)?;
        let base = self
            .overrides
            .get(rest)
            .copied()
            .or_else(|| self.table.lookup(rest))?;
        Some(Resolution::Prefixed { prefix, base })
    }

    /// Evaluate a formula to a unit
    pub fn eval_unit(&self, formula: &str) -> Result<UnitDef, EvalError> {
        debug!(formula, "evaluating unit formula");
        let expr = parser::parse(formula)?;
        let unit = match self.fold(&expr)? {
            Operand::Unit(unit) => unit,
            Operand::Number(k) => UnitDef::ONE
                .checked_scale(k)
                .map_err(|err| algebra_error(err, expr.span()))?,
        };
        debug!(formula, %unit, "evaluated unit formula");
        Ok(unit)
    }

    /// Evaluate a formula to the kind of quantity `N` over its unit
    pub fn eval_quantity<N>(&self, formula: &str) -> Result<QuantityKind<N>, EvalError> {
        self.eval_unit(formula).map(QuantityKind::new)
    }

    fn fold(&self, expr: &Expr) -> Result<Operand, EvalError> {
        match expr {
            Expr::Ident { name, span } => {
                let resolution =
                    self.resolve(name)
                        .ok_or_else(|| EvalError::UnresolvedIdentifier {
                            name: name.clone(),
                            span: (*span).into(),
                        })?;
                trace!(name = name.as_str(), ?resolution, "resolved identifier");
                Ok(Operand::Unit(resolution.unit()))
            }
            Expr::Number { value, .. } => Ok(Operand::Number(value.as_f64())),
            Expr::Neg { expr: inner, span } => match self.fold(inner)? {
                Operand::Number(k) => Ok(Operand::Number(-k)),
                Operand::Unit(_) => Err(EvalError::NegatedUnit {
                    span: (*span).into(),
                }),
            },
            Expr::Binary {
                op,
                left,
                right,
                span,
            } => {
                let lhs = self.fold(left)?;
                let rhs = self.fold(right)?;
                let result = self.apply(*op, lhs, rhs, right.span(), *span)?;
                trace!(op = %op, ?result, "folded");
                Ok(result)
            }
        }
    }

    fn apply(
        &self,
        op: BinaryOp,
        lhs: Operand,
        rhs: Operand,
        rhs_span: Span,
        span: Span,
    ) -> Result<Operand, EvalError> {
        use Operand::{Number, Unit};

        let algebra = |err: AlgebraError| algebra_error(err, span);
        let as_unit = |k: f64| UnitDef::ONE.checked_scale(k).map_err(algebra);

        let result = match (op, lhs, rhs) {
            (BinaryOp::Add, Number(a), Number(b)) => Number(a + b),
            (BinaryOp::Sub, Number(a), Number(b)) => Number(a - b),
            (BinaryOp::Add | BinaryOp::Sub, lhs, rhs) => {
                let left = match lhs {
                    Number(k) => as_unit(k)?,
                    Unit(u) => u,
                };
                let right = match rhs {
                    Number(k) => as_unit(k)?,
                    Unit(u) => u,
                };
                if !left.same_as(&right) {
                    return Err(EvalError::MismatchedTerms {
                        op: if op == BinaryOp::Add { "add" } else { "subtract" },
                        left,
                        right,
                        span: span.into(),
                    });
                }
                Unit(left)
            }

            (BinaryOp::Mul, Number(a), Number(b)) => Number(a * b),
            (BinaryOp::Mul, Number(k), Unit(u)) | (BinaryOp::Mul, Unit(u), Number(k)) => {
                Unit(u.checked_scale(k).map_err(algebra)?)
            }
            (BinaryOp::Mul, Unit(a), Unit(b)) => Unit(a.checked_multiply(&b).map_err(algebra)?),

            (BinaryOp::Div, Number(a), Number(b)) => Number(a / b),
            (BinaryOp::Div, Unit(u), Number(k)) => Unit(u.checked_scale(1.0 / k).map_err(algebra)?),
            (BinaryOp::Div, Number(k), Unit(u)) => Unit(
                UnitDef::ONE
                    .checked_divide(&u)
                    .and_then(|inverse| inverse.checked_scale(k))
                    .map_err(algebra)?,
            ),
            (BinaryOp::Div, Unit(a), Unit(b)) => Unit(a.checked_divide(&b).map_err(algebra)?),

            (BinaryOp::Pow, _, Unit(u)) => {
                return Err(EvalError::NonIntegerExponent {
                    found: format!("the unit `{}`", u),
                    span: rhs_span.into(),
                });
            }
            (BinaryOp::Pow, base, Number(k)) => {
                let n = whole_exponent(k, rhs_span, span)?;
                match base {
                    Number(a) => Number(a.powi(n)),
                    Unit(u) => Unit(u.checked_raise(n).map_err(algebra)?),
                }
            }
        };
        Ok(result)
    }
}

/// Exponents must be whole numbers that fit an `i32`
fn whole_exponent(k: f64, rhs_span: Span, span: Span) -> Result<i32, EvalError> {
    if !k.is_finite() || k.fract() != 0.0 {
        return Err(EvalError::NonIntegerExponent {
            found: k.to_string(),
            span: rhs_span.into(),
        });
    }
    if k < f64::from(i32::MIN) || k > f64::from(i32::MAX) {
        return Err(EvalError::ExponentOverflow { span: span.into() });
    }
    Ok(k as i32)
}

fn algebra_error(err: AlgebraError, span: Span) -> EvalError {
    match err {
        AlgebraError::ExponentOverflow => EvalError::ExponentOverflow { span: span.into() },
        AlgebraError::FactorOutOfRange => EvalError::InvalidScale { span: span.into() },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::customary::{Foot, Hour, Minute, Pound};
    use crate::units::dimension::Dimension;
    use crate::units::si::{Gram, Joule, Kilogram, Meter, Newton, Second, Watt};
    use crate::units::unit::Unit;
    use crate::units::{Prefix, UnitDef};
    use approx::assert_relative_eq;

    fn eval(formula: &str) -> Result<UnitDef, EvalError> {
        eval_unit(formula, &[])
    }

    #[test]
    fn test_eval_matches_algebra() {
        assert!(eval("J / s").unwrap().same_as(&Joule::DEF.divide(&Second::DEF)));
        assert!(eval("J / s").unwrap().same_as(&Watt::DEF));
        assert_eq!(eval("kg / m^3").unwrap().dimension, Dimension::DENSITY);
        assert!(eval("N*m").unwrap().same_as(&eval("m*N").unwrap()));
    }

    #[test]
    fn test_prefixes() {
        assert!(
            eval("mg")
                .unwrap()
                .same_as(&Gram::DEF.apply_prefix(Prefix::Milli))
        );
        assert_relative_eq!(eval("kW * h").unwrap().factor, 3_600_000.0);
        assert!(eval("min").unwrap().same_as(&Minute::DEF));
        assert_eq!(eval("km").unwrap().factor, 1000.0);
    }

    #[test]
    fn test_numbers_scale_units() {
        let slug = eval("32.174_049 * lb").unwrap();
        assert!(slug.same_as(&Pound::DEF.scale(32.174_049)));
        assert!(eval("lb * 32.174_049").unwrap().same_as(&slug));
        assert!(eval("m / 2").unwrap().same_as(&Meter::DEF.scale(0.5)));
        assert_eq!(eval("1 / s").unwrap().dimension, Dimension::FREQUENCY);
        assert!(eval("60 * 60 * s").unwrap().same_as(&Hour::DEF));
    }

    #[test]
    fn test_bare_number_is_dimensionless() {
        let unit = eval("2 + 3").unwrap();
        assert!(unit.same_as(&UnitDef::ONE.scale(5.0)));
        assert!(eval("m / m").unwrap().same_as(&UnitDef::ONE));
        assert!(eval("m / m + 1").unwrap().same_as(&UnitDef::ONE));
    }

    #[test]
    fn test_exponents() {
        assert_eq!(eval("s^-2").unwrap().dimension, Dimension::new(0, -2, 0, 0, 0));
        assert!(eval("m^0").unwrap().same_as(&UnitDef::ONE));
        assert!(eval("ft^2").unwrap().same_as(&Foot::DEF.raise(2)));
        assert!(eval("m^(1+1)").unwrap().same_as(&Meter::DEF.raise(2)));
        assert_eq!(eval("2^3 * m").unwrap().factor, 8.0);
    }

    #[test]
    fn test_same_unit_terms() {
        assert!(eval("N + N").unwrap().same_as(&Newton::DEF));
        assert!(eval("kg*m/s^2 - N").unwrap().same_as(&Newton::DEF));
        assert!(matches!(
            eval("m + ft"),
            Err(EvalError::MismatchedTerms { op: "add", .. })
        ));
        assert!(matches!(
            eval("kg - 1"),
            Err(EvalError::MismatchedTerms { op: "subtract", .. })
        ));
    }

    #[test]
    fn test_overrides_win() {
        let custom = Kilogram::DEF.scale(7.0);
        let unit = eval_unit("m", &[("m", custom)]).unwrap();
        assert!(unit.same_as(&custom));

        // Prefix fallback sees overrides too
        let unit = eval_unit("kslug", &[("slug", custom)]).unwrap();
        assert!(unit.same_as(&custom.apply_prefix(Prefix::Kilo)));
    }

    #[test]
    fn test_errors() {
        assert!(matches!(
            eval("kg * furlongs"),
            Err(EvalError::UnresolvedIdentifier { ref name, .. }) if name == "furlongs"
        ));
        assert!(matches!(
            eval("1_.5 * m"),
            Err(EvalError::MalformedLiteral {
                kind: LiteralError::InvalidUnderscore { .. },
                ..
            })
        ));
        assert!(matches!(
            eval("m^1.5"),
            Err(EvalError::NonIntegerExponent { .. })
        ));
        assert!(matches!(
            eval("m^s"),
            Err(EvalError::NonIntegerExponent { .. })
        ));
        assert!(matches!(eval("0 * m"), Err(EvalError::InvalidScale { .. })));
        assert!(matches!(eval("-2 * m"), Err(EvalError::InvalidScale { .. })));
        assert!(matches!(eval("m / 0"), Err(EvalError::InvalidScale { .. })));
        assert!(matches!(eval("-m"), Err(EvalError::NegatedUnit { .. })));
        assert!(matches!(
            eval("m^100 * m^100"),
            Err(EvalError::ExponentOverflow { .. })
        ));
        assert!(matches!(
            eval("m^3000000000"),
            Err(EvalError::ExponentOverflow { .. })
        ));
    }

    #[test]
    fn test_error_spans_point_at_operand() {
        let err = eval("kg * furlongs").unwrap_err();
        assert_eq!(err.span().offset(), 5);
        assert_eq!(err.span().len(), 8);

        let err = eval("m^1.5").unwrap_err();
        assert_eq!(err.span().offset(), 2);
    }

    #[test]
    fn test_eval_quantity() {
        let kind = eval_quantity::<f64>("km / h", &[]).unwrap();
        let speed = kind.init(36.0);
        let mps = speed
            .convert_to_value(Meter::DEF.divide(&Second::DEF))
            .unwrap();
        assert_relative_eq!(mps, 10.0);
    }
}
