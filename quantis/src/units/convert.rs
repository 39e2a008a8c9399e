//! Unit Conversion
//!
//! Conversions are pure scale factors: a value in unit `A` becomes a value
//! in unit `B` by multiplying with `A.factor / B.factor`. There are no
//! offsets, so temperatures are absolute (kelvin-based) throughout.
//!
//! The typed path ([`Quantity::convert_to`]) rejects incompatible targets at
//! compile time. The functions here serve runtime unit definitions and
//! report the same condition as a [`ConversionError`].

use miette::Diagnostic;
use num_traits::{AsPrimitive, Float};
use thiserror::Error;

use super::def::UnitDef;
use super::dimension::Dimension;
use super::quantity::Quantity;
use super::unit::Unit;

/// Error for runtime conversion and same-unit arithmetic failures
#[derive(Debug, Clone, PartialEq, Error, Diagnostic)]
pub enum ConversionError {
    /// Dimensions don't match
    #[error("units are only interconvertible if they measure the same kind of dimension.")]
    #[diagnostic(
        code(U0101),
        help("cannot convert a quantity of dimension `{}` into one of dimension `{}`", .from, .to)
    )]
    Incompatible { from: Dimension, to: Dimension },

    /// Addition or subtraction across two different units
    #[error("cannot combine `{left}` with `{right}`: both terms must carry the same unit")]
    #[diagnostic(
        code(U0102),
        help("convert one operand with `convert_to` before adding or subtracting")
    )]
    UnitMismatch { left: UnitDef, right: UnitDef },
}

/// Scale factor from `from` to `to`
pub fn conversion_factor(from: &UnitDef, to: &UnitDef) -> Result<f64, ConversionError> {
    from.conversion_factor(to)
}

/// Convert a raw value between two runtime unit definitions
pub fn convert_value(value: f64, from: &UnitDef, to: &UnitDef) -> Result<f64, ConversionError> {
    Ok(value * conversion_factor(from, to)?)
}

/// Convert a quantity from one unit type to another with the same dimension
///
/// Free-function spelling of [`Quantity::convert_to`], handy when the
/// target is inferred from context.
///
/// ```
/// use quantis::units::{Quantity, convert};
/// use quantis::units::customary::Inch;
/// use quantis::units::si::Meter;
///
/// let width = Quantity::<f64, Inch>::new(100.0);
/// let meters: Quantity<f64, Meter> = convert(width);
/// assert!((meters.value() - 2.54).abs() < 1e-12);
/// ```
pub fn convert<N, From, To>(qty: Quantity<N, From>) -> Quantity<N, To>
where
    N: Float + 'static,
    f64: AsPrimitive<N>,
    From: Unit,
    To: Unit,
{
    qty.convert_to::<To>()
}
