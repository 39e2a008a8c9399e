//! The Quantity Type: Numeric Value with Compile-Time Units
//!
//! `Quantity<N, U>` represents a numeric value of type `N` with unit `U`.
//! The unit lives only in the type; the value is always expressed directly
//! in `U` and is never rescaled implicitly.
//!
//! Adding quantities whose units are not the same unit is rejected when the
//! program is compiled:
//!
//! ```compile_fail
//! use quantis::units::Quantity;
//! use quantis::units::si::Meter;
//! use quantis::units::customary::Foot;
//!
//! let a: Quantity<f64, Meter> = Quantity::new(3.0);
//! let b: Quantity<f64, Foot> = Quantity::new(2.0);
//! let _ = a + b;
//! ```
//!
//! and so is converting between different dimensions:
//!
//! ```compile_fail
//! use quantis::units::Quantity;
//! use quantis::units::si::{Joule, Meter};
//!
//! let energy: Quantity<f64, Joule> = Quantity::new(1.0);
//! let _ = energy.convert_to::<Meter>();
//! ```

use num_traits::{AsPrimitive, Float};
use std::cmp::Ordering;
use std::fmt;
use std::marker::PhantomData;
use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};

use super::dimension::Dimension;
use super::dynamic::DynQuantity;
use super::unit::{Pow, Prod, Quot, Unit};

/// A numeric quantity with compile-time unit checking
///
/// # Type Parameters
///
/// * `N` - The numeric type (f64, f32, etc.)
/// * `U` - The unit type (must implement `Unit`)
///
/// # Examples
///
/// ```
/// use quantis::units::{Quantity, Quot};
/// use quantis::units::si::{Meter, Second};
///
/// let distance: Quantity<f64, Meter> = Quantity::new(23.0);
/// let time: Quantity<f64, Second> = Quantity::new(17.0);
///
/// // Derived units come out of the operation
/// let velocity: Quantity<f64, Quot<Meter, Second>> = distance / time;
/// assert_eq!(velocity.value(), 23.0 / 17.0);
/// ```
#[derive(Clone, Copy)]
pub struct Quantity<N, U: Unit> {
    value: N,
    _unit: PhantomData<U>,
}

impl<N, U: Unit> Quantity<N, U> {
    /// Create a new quantity with the given value (`init`)
    #[inline]
    pub const fn new(value: N) -> Self {
        Self {
            value,
            _unit: PhantomData,
        }
    }

    /// Get the raw numeric value (consuming)
    #[inline]
    pub fn into_value(self) -> N {
        self.value
    }

    /// Get the unit symbol
    #[inline]
    pub fn symbol() -> std::borrow::Cow<'static, str> {
        U::symbol()
    }

    /// Get the dimension
    #[inline]
    pub fn dimension() -> Dimension {
        U::DEF.dimension
    }

    /// Get the unit definition
    #[inline]
    pub fn unit() -> super::UnitDef {
        U::DEF
    }
}

impl<N: Copy, U: Unit> Quantity<N, U> {
    /// Get the raw numeric value
    #[inline]
    pub fn value(&self) -> N {
        self.value
    }

    /// Forget the static unit and check future operations at run time
    pub fn into_dyn(self) -> DynQuantity<N> {
        DynQuantity::new(self.value, U::DEF)
    }
}

impl<N, U> Quantity<N, U>
where
    N: Float + 'static,
    f64: AsPrimitive<N>,
    U: Unit,
{
    /// Raise to a whole power known at compile time
    #[inline]
    pub fn pow<const E: i32>(self) -> Quantity<N, Pow<U, E>> {
        Quantity::new(self.value.powi(E))
    }

    /// Convert into a compatible unit
    ///
    /// The value is multiplied by `U.factor / V.factor`; an incompatible
    /// target is a compile error.
    #[inline]
    pub fn convert_to<V: Unit>(self) -> Quantity<N, V> {
        const {
            assert!(
                U::DEF.is_compatible(&V::DEF),
                "units are only interconvertible if they measure the same kind of dimension."
            )
        };
        let ratio: N = (U::DEF.factor / V::DEF.factor).as_();
        Quantity::new(self.value * ratio)
    }

    /// Shorthand for `convert_to::<V>().value()`
    #[inline]
    pub fn convert_to_value<V: Unit>(self) -> N {
        self.convert_to::<V>().value
    }
}

// =============================================================================
// Same-Unit Arithmetic
// =============================================================================

/// Addition: the two units must be the same unit (`N·m` and `m·N` are)
impl<N: Add<Output = N>, U: Unit, V: Unit> Add<Quantity<N, V>> for Quantity<N, U> {
    type Output = Quantity<N, U>;

    #[inline]
    fn add(self, rhs: Quantity<N, V>) -> Self::Output {
        const { assert!(U::DEF.same_as(&V::DEF), "cannot add quantities of different units") };
        Quantity::new(self.value + rhs.value)
    }
}

/// Subtraction: the two units must be the same unit
impl<N: Sub<Output = N>, U: Unit, V: Unit> Sub<Quantity<N, V>> for Quantity<N, U> {
    type Output = Quantity<N, U>;

    #[inline]
    fn sub(self, rhs: Quantity<N, V>) -> Self::Output {
        const {
            assert!(
                U::DEF.same_as(&V::DEF),
                "cannot subtract quantities of different units"
            )
        };
        Quantity::new(self.value - rhs.value)
    }
}

impl<N: AddAssign, U: Unit, V: Unit> AddAssign<Quantity<N, V>> for Quantity<N, U> {
    #[inline]
    fn add_assign(&mut self, rhs: Quantity<N, V>) {
        const { assert!(U::DEF.same_as(&V::DEF), "cannot add quantities of different units") };
        self.value += rhs.value;
    }
}

impl<N: SubAssign, U: Unit, V: Unit> SubAssign<Quantity<N, V>> for Quantity<N, U> {
    #[inline]
    fn sub_assign(&mut self, rhs: Quantity<N, V>) {
        const {
            assert!(
                U::DEF.same_as(&V::DEF),
                "cannot subtract quantities of different units"
            )
        };
        self.value -= rhs.value;
    }
}

/// Negation
impl<N: Neg<Output = N>, U: Unit> Neg for Quantity<N, U> {
    type Output = Quantity<N, U>;

    #[inline]
    fn neg(self) -> Self::Output {
        Quantity::new(-self.value)
    }
}

// =============================================================================
// Unit-Deriving Arithmetic
// =============================================================================

impl<N: Mul<Output = N>, U: Unit, V: Unit> Mul<Quantity<N, V>> for Quantity<N, U> {
    type Output = Quantity<N, Prod<U, V>>;

    #[inline]
    fn mul(self, rhs: Quantity<N, V>) -> Self::Output {
        Quantity::new(self.value * rhs.value)
    }
}

impl<N: Div<Output = N>, U: Unit, V: Unit> Div<Quantity<N, V>> for Quantity<N, U> {
    type Output = Quantity<N, Quot<U, V>>;

    #[inline]
    fn div(self, rhs: Quantity<N, V>) -> Self::Output {
        Quantity::new(self.value / rhs.value)
    }
}

// =============================================================================
// Scalar Multiplication/Division
// =============================================================================

macro_rules! scalar_ops {
    ($($t:ty),*) => {
        $(
            /// Multiplication by scalar (right)
            impl<U: Unit> Mul<$t> for Quantity<$t, U> {
                type Output = Quantity<$t, U>;

                #[inline]
                fn mul(self, rhs: $t) -> Self::Output {
                    Quantity::new(self.value * rhs)
                }
            }

            /// Multiplication by scalar (left)
            impl<U: Unit> Mul<Quantity<$t, U>> for $t {
                type Output = Quantity<$t, U>;

                #[inline]
                fn mul(self, rhs: Quantity<$t, U>) -> Self::Output {
                    Quantity::new(self * rhs.value)
                }
            }

            /// Division by scalar
            impl<U: Unit> Div<$t> for Quantity<$t, U> {
                type Output = Quantity<$t, U>;

                #[inline]
                fn div(self, rhs: $t) -> Self::Output {
                    Quantity::new(self.value / rhs)
                }
            }
        )*
    };
}

scalar_ops!(f32, f64);

// =============================================================================
// Comparison
// =============================================================================

impl<N: PartialEq, U: Unit> PartialEq for Quantity<N, U> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<N: Eq, U: Unit> Eq for Quantity<N, U> {}

impl<N: PartialOrd, U: Unit> PartialOrd for Quantity<N, U> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.value.partial_cmp(&other.value)
    }
}

impl<N: Ord, U: Unit> Ord for Quantity<N, U> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.value.cmp(&other.value)
    }
}

// =============================================================================
// Display and Debug
// =============================================================================

impl<N: fmt::Display, U: Unit> fmt::Display for Quantity<N, U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if U::DEF.same_as(&super::UnitDef::ONE) {
            write!(f, "{}", self.value)
        } else {
            write!(f, "{} {}", self.value, U::symbol())
        }
    }
}

impl<N: fmt::Debug, U: Unit> fmt::Debug for Quantity<N, U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Quantity")
            .field("value", &self.value)
            .field("unit", &U::symbol())
            .field("dimension", &U::DEF.dimension)
            .finish()
    }
}

impl<N: Default, U: Unit> Default for Quantity<N, U> {
    fn default() -> Self {
        Self::new(N::default())
    }
}

/// Extension trait for attaching a unit to a bare number
pub trait WithUnit: Sized {
    fn with_unit<U: Unit>(self) -> Quantity<Self, U>;
}

impl<N> WithUnit for N {
    #[inline]
    fn with_unit<U: Unit>(self) -> Quantity<Self, U> {
        Quantity::new(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::customary::{Foot, Hour, Knot, NauticalMile};
    use crate::units::si::*;
    use crate::units::unit::One;
    use approx::assert_relative_eq;

    #[test]
    fn test_quantity_creation() {
        let mass: Quantity<f64, Kilogram> = Quantity::new(70.0);
        assert_eq!(mass.value(), 70.0);
        assert_eq!(Quantity::<f64, Kilogram>::symbol(), "kg");
    }

    #[test]
    fn test_same_unit_addition() {
        let m1: Quantity<f64, Kilogram> = Quantity::new(50.0);
        let m2: Quantity<f64, Kilogram> = Quantity::new(20.0);
        assert_eq!((m1 + m2).value(), 70.0);
        assert_eq!((m1 - m2).value(), 30.0);
        assert_eq!((-m1).value(), -50.0);
    }

    #[test]
    fn test_structural_identity_addition() {
        let torque: Quantity<f64, Prod<Newton, Meter>> = Quantity::new(2.0);
        let other: Quantity<f64, Prod<Meter, Newton>> = Quantity::new(3.0);
        let mut sum = torque + other;
        sum += other;
        sum -= torque;
        assert_eq!(sum.value(), 6.0);
    }

    #[test]
    fn test_derived_units() {
        let d: Quantity<f64, Meter> = Quantity::new(23.0);
        let t: Quantity<f64, Second> = Quantity::new(17.0);
        let v = d / t;
        assert_eq!(v.value(), 23.0 / 17.0);
        assert_eq!(Quantity::<f64, Quot<Meter, Second>>::dimension(), Dimension::VELOCITY);

        let area = d * d;
        assert_eq!(area.value(), 529.0);
        assert_eq!(
            Quantity::<f64, Prod<Meter, Meter>>::dimension(),
            Dimension::AREA
        );
    }

    #[test]
    fn test_pow() {
        let side: Quantity<f64, Meter> = Quantity::new(3.0);
        let volume = side.pow::<3>();
        assert_eq!(volume.value(), 27.0);
        assert_eq!(Quantity::<f64, Pow<Meter, 3>>::dimension(), Dimension::VOLUME);

        let period: Quantity<f64, Second> = Quantity::new(4.0);
        assert_eq!(period.pow::<-1>().value(), 0.25);
    }

    #[test]
    fn test_convert_to() {
        let length: Quantity<f64, Foot> = Quantity::new(10.0);
        let meters = length.convert_to::<Meter>();
        assert_relative_eq!(meters.value(), 3.048);
        assert_relative_eq!(meters.convert_to_value::<Foot>(), 10.0);

        let speed: Quantity<f64, Knot> = Quantity::new(1.0);
        let per_hour = speed.convert_to_value::<Quot<NauticalMile, Hour>>();
        assert_relative_eq!(per_hour, 1.0);
    }

    #[test]
    fn test_convert_f32() {
        let work: Quantity<f32, Joule> = Quantity::new(1500.0);
        let kj = work.convert_to_value::<crate::units::Prefixed<Joule, crate::units::Kilo>>();
        assert_relative_eq!(kj, 1.5_f32, epsilon = 1e-6);
    }

    #[test]
    fn test_scalar_multiplication() {
        let mass: Quantity<f64, Kilogram> = Quantity::new(10.0);
        assert_eq!((mass * 2.0).value(), 20.0);
        assert_eq!((2.0 * mass).value(), 20.0);
        assert_eq!((mass / 4.0).value(), 2.5);
    }

    #[test]
    fn test_with_unit() {
        let mass = 70.0.with_unit::<Kilogram>();
        assert_eq!(mass.value(), 70.0);
    }

    #[test]
    fn test_display() {
        let mass: Quantity<f64, Kilogram> = Quantity::new(70.0);
        assert_eq!(format!("{}", mass), "70 kg");

        let ratio: Quantity<f64, One> = Quantity::new(0.5);
        assert_eq!(format!("{}", ratio), "0.5");

        let speed: Quantity<f64, Quot<Meter, Second>> = Quantity::new(3.0);
        assert_eq!(format!("{}", speed), "3 m/s");
    }

    #[test]
    fn test_comparison() {
        let m1: Quantity<f64, Kilogram> = Quantity::new(50.0);
        let m2: Quantity<f64, Kilogram> = Quantity::new(70.0);
        assert!(m1 < m2);
        assert!(m2 > m1);
        assert_eq!(m1, Quantity::new(50.0));
    }

    #[test]
    fn test_into_dyn() {
        let d: Quantity<f64, Foot> = Quantity::new(2.0);
        let dynamic = d.into_dyn();
        assert_eq!(dynamic.value(), 2.0);
        assert!(dynamic.unit().same_as(&Foot::DEF));
    }
}
