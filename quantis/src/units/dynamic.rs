//! Runtime-checked quantities
//!
//! A unit built from a formula string is only known once the formula has
//! been evaluated, so it cannot be a type. [`DynQuantity`] stores the
//! [`UnitDef`] beside the value and checks compatibility on every operation
//! that needs it, returning a [`ConversionError`] where [`Quantity`] would
//! have failed to compile. Use [`DynQuantity::into_static`] to move back to
//! the compile-time checked world once the target unit type is known.

use num_traits::{AsPrimitive, Float};
use std::fmt;
use std::marker::PhantomData;
use std::ops::{Div, Mul, Neg};

use super::convert::ConversionError;
use super::def::{AlgebraError, UnitDef};
use super::quantity::Quantity;
use super::unit::Unit;

/// A unit identity paired with a numeric type, with no value yet
///
/// This is what [`eval_quantity`](crate::eval::eval_quantity) produces:
/// evaluation yields the kind of quantity, and [`QuantityKind::init`]
/// supplies an instance.
pub struct QuantityKind<N> {
    unit: UnitDef,
    _numeric: PhantomData<fn() -> N>,
}

impl<N> QuantityKind<N> {
    pub const fn new(unit: UnitDef) -> Self {
        Self {
            unit,
            _numeric: PhantomData,
        }
    }

    pub const fn unit(&self) -> UnitDef {
        self.unit
    }

    /// Attach a value expressed in this unit
    pub const fn init(&self, value: N) -> DynQuantity<N> {
        DynQuantity::new(value, self.unit)
    }
}

impl<N> Clone for QuantityKind<N> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<N> Copy for QuantityKind<N> {}

impl<N> fmt::Debug for QuantityKind<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QuantityKind")
            .field("unit", &self.unit)
            .field("numeric", &std::any::type_name::<N>())
            .finish()
    }
}

impl<N> PartialEq for QuantityKind<N> {
    fn eq(&self, other: &Self) -> bool {
        self.unit.same_as(&other.unit)
    }
}

/// A value with its unit identity carried at run time
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DynQuantity<N> {
    value: N,
    unit: UnitDef,
}

impl<N> DynQuantity<N> {
    pub const fn new(value: N, unit: UnitDef) -> Self {
        Self { value, unit }
    }

    pub const fn unit(&self) -> UnitDef {
        self.unit
    }

    pub fn into_value(self) -> N {
        self.value
    }

    pub fn is_compatible(&self, other: &DynQuantity<N>) -> bool {
        self.unit.is_compatible(&other.unit)
    }

    fn ensure_same_unit(&self, other: &DynQuantity<N>) -> Result<(), ConversionError> {
        if self.unit.same_as(&other.unit) {
            Ok(())
        } else {
            Err(ConversionError::UnitMismatch {
                left: self.unit,
                right: other.unit,
            })
        }
    }
}

impl<N: Copy> DynQuantity<N> {
    pub fn value(&self) -> N {
        self.value
    }
}

impl<N: Float> DynQuantity<N> {
    /// Add a quantity carrying the same unit
    ///
    /// Compatible but differently scaled units are refused; convert first.
    pub fn try_add(self, other: DynQuantity<N>) -> Result<DynQuantity<N>, ConversionError> {
        self.ensure_same_unit(&other)?;
        Ok(DynQuantity::new(self.value + other.value, self.unit))
    }

    /// Subtract a quantity carrying the same unit
    pub fn try_sub(self, other: DynQuantity<N>) -> Result<DynQuantity<N>, ConversionError> {
        self.ensure_same_unit(&other)?;
        Ok(DynQuantity::new(self.value - other.value, self.unit))
    }

    /// Raise to an integer power
    ///
    /// # Panics
    ///
    /// Panics if a dimension exponent leaves the `i8` range or the unit
    /// factor overflows. See [`DynQuantity::checked_pow`].
    pub fn pow(self, n: i32) -> DynQuantity<N> {
        DynQuantity::new(self.value.powi(n), self.unit.raise(n))
    }

    pub fn checked_pow(self, n: i32) -> Result<DynQuantity<N>, AlgebraError> {
        let unit = self.unit.checked_raise(n)?;
        Ok(DynQuantity::new(self.value.powi(n), unit))
    }
}

impl<N: Mul<Output = N>> DynQuantity<N> {
    /// Multiply, reporting an unrepresentable product unit instead of panicking
    pub fn checked_mul(self, rhs: DynQuantity<N>) -> Result<DynQuantity<N>, AlgebraError> {
        let unit = self.unit.checked_multiply(&rhs.unit)?;
        Ok(DynQuantity::new(self.value * rhs.value, unit))
    }
}

impl<N: Div<Output = N>> DynQuantity<N> {
    pub fn checked_div(self, rhs: DynQuantity<N>) -> Result<DynQuantity<N>, AlgebraError> {
        let unit = self.unit.checked_divide(&rhs.unit)?;
        Ok(DynQuantity::new(self.value / rhs.value, unit))
    }
}

impl<N> DynQuantity<N>
where
    N: Float + 'static,
    f64: AsPrimitive<N>,
{
    /// Convert into a compatible unit, multiplying by the factor ratio
    pub fn convert_to(self, target: UnitDef) -> Result<DynQuantity<N>, ConversionError> {
        let ratio: N = self.unit.conversion_factor(&target)?.as_();
        Ok(DynQuantity::new(self.value * ratio, target))
    }

    pub fn convert_to_value(self, target: UnitDef) -> Result<N, ConversionError> {
        self.convert_to(target).map(|q| q.value)
    }

    /// Convert into the unit type `U` and hand the value to the static layer
    pub fn into_static<U: Unit>(self) -> Result<Quantity<N, U>, ConversionError> {
        self.convert_to(U::DEF).map(|q| Quantity::new(q.value))
    }
}

impl<N: Neg<Output = N>> Neg for DynQuantity<N> {
    type Output = DynQuantity<N>;

    fn neg(self) -> Self::Output {
        DynQuantity::new(-self.value, self.unit)
    }
}

/// Multiplication derives the product unit
///
/// # Panics
///
/// Panics if a dimension exponent leaves the `i8` range or the product of
/// the unit factors is not a positive finite number. See
/// [`DynQuantity::checked_mul`].
impl<N: Mul<Output = N>> Mul for DynQuantity<N> {
    type Output = DynQuantity<N>;

    fn mul(self, rhs: DynQuantity<N>) -> Self::Output {
        DynQuantity::new(self.value * rhs.value, self.unit.multiply(&rhs.unit))
    }
}

/// Division derives the quotient unit
///
/// # Panics
///
/// Panics if a dimension exponent leaves the `i8` range or the quotient of
/// the unit factors is not a positive finite number. See
/// [`DynQuantity::checked_div`].
impl<N: Div<Output = N>> Div for DynQuantity<N> {
    type Output = DynQuantity<N>;

    fn div(self, rhs: DynQuantity<N>) -> Self::Output {
        DynQuantity::new(self.value / rhs.value, self.unit.divide(&rhs.unit))
    }
}

impl<N: fmt::Display> fmt::Display for DynQuantity<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.unit.same_as(&UnitDef::ONE) {
            write!(f, "{}", self.value)
        } else {
            write!(f, "{} [{}]", self.value, self.unit)
        }
    }
}
