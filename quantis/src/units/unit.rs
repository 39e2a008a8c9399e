//! Unit types
//!
//! Every unit is a zero-sized type whose [`UnitDef`] is an associated
//! constant, so the algebra runs during compilation and only the numeric
//! payload of a [`Quantity`](super::Quantity) survives into the program.
//!
//! Composite units are spelled with the combinators in this module:
//!
//! ```
//! use quantis::units::{Milli, Prefixed, Pow, Quot, Unit};
//! use quantis::units::si::{Gram, Meter, Second};
//!
//! type Acceleration = Quot<Meter, Pow<Second, 2>>;
//! type Milligram = Prefixed<Gram, Milli>;
//!
//! assert_eq!(Acceleration::symbol(), "m/s^2");
//! assert_eq!(Milligram::DEF.factor, Gram::DEF.factor * 1e-3);
//! ```

use std::borrow::Cow;
use std::fmt;
use std::marker::PhantomData;

use super::def::UnitDef;
use super::dimension::Dimension;
use super::prefix::MetricPrefix;

/// Trait for all units of measure
///
/// The definition is a constant; the symbol is rendered on demand because
/// composite units build theirs from their parts.
pub trait Unit: Copy + Default + fmt::Debug + 'static {
    /// Dimension and scale factor of this unit
    const DEF: UnitDef;

    /// Unit symbol (e.g. "kg", "m/s^2")
    fn symbol() -> Cow<'static, str>;

    fn def() -> UnitDef {
        Self::DEF
    }

    fn dimension() -> Dimension {
        Self::DEF.dimension
    }

    /// Scale factor relative to the coherent SI unit
    fn factor() -> f64 {
        Self::DEF.factor
    }
}

/// A unit with a catalogue symbol and a long name
pub trait NamedUnit: Unit {
    const SYMBOL: &'static str;
    const NAME: &'static str;
}

// =============================================================================
// Combinators
// =============================================================================

/// The dimensionless unit
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct One;

impl Unit for One {
    const DEF: UnitDef = UnitDef::ONE;

    fn symbol() -> Cow<'static, str> {
        Cow::Borrowed("1")
    }
}

/// Product of two units
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Prod<A, B>(PhantomData<(A, B)>);

impl<A: Unit, B: Unit> Unit for Prod<A, B> {
    const DEF: UnitDef = A::DEF.multiply(&B::DEF);

    fn symbol() -> Cow<'static, str> {
        Cow::Owned(format!("{}·{}", A::symbol(), B::symbol()))
    }
}

/// Quotient of two units
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Quot<A, B>(PhantomData<(A, B)>);

impl<A: Unit, B: Unit> Unit for Quot<A, B> {
    const DEF: UnitDef = A::DEF.divide(&B::DEF);

    fn symbol() -> Cow<'static, str> {
        Cow::Owned(format!("{}/{}", A::symbol(), grouped(B::symbol(), &['·', '/'])))
    }
}

/// A unit raised to an integer power
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Pow<A, const N: i32>(PhantomData<A>);

impl<A: Unit, const N: i32> Unit for Pow<A, N> {
    const DEF: UnitDef = A::DEF.raise(N);

    fn symbol() -> Cow<'static, str> {
        Cow::Owned(format!("{}^{}", grouped(A::symbol(), OPERATORS), N))
    }
}

/// A unit with a metric prefix applied
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Prefixed<A, P>(PhantomData<(A, P)>);

impl<A: Unit, P: MetricPrefix> Unit for Prefixed<A, P> {
    const DEF: UnitDef = A::DEF.apply_prefix(P::PREFIX);

    fn symbol() -> Cow<'static, str> {
        Cow::Owned(format!(
            "{}{}",
            P::PREFIX.symbol(),
            grouped(A::symbol(), OPERATORS)
        ))
    }
}

const OPERATORS: &[char] = &['·', '/', '^'];

/// Parenthesize compound symbols so `m/(s·s)` reads unambiguously
fn grouped(symbol: Cow<'static, str>, operators: &[char]) -> Cow<'static, str> {
    if symbol.contains(operators) {
        Cow::Owned(format!("({})", symbol))
    } else {
        symbol
    }
}

/// Declare named unit types from constant [`UnitDef`] expressions
///
/// The expression is evaluated at compile time, so an invalid definition
/// (zero scale, exponent overflow) fails the build.
///
/// ```
/// use quantis::define_unit;
/// use quantis::units::{NamedUnit, Unit};
/// use quantis::units::customary::Pound;
///
/// define_unit! {
///     /// Slug, the imperial mass unit accelerated 1 ft/s² by 1 lbf
///     pub Slug: "slug", "slug" = Pound::DEF.scale(32.174_049);
/// }
///
/// assert_eq!(Slug::SYMBOL, "slug");
/// assert!((Slug::DEF.factor - 14.593_902_9).abs() < 1e-6);
/// ```
#[macro_export]
macro_rules! define_unit {
    ($($(#[$meta:meta])* $vis:vis $name:ident : $symbol:literal, $long:literal = $def:expr;)*) => {
        $(
            $(#[$meta])*
            #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
            $vis struct $name;

            impl $crate::units::Unit for $name {
                const DEF: $crate::units::UnitDef = $def;

                fn symbol() -> ::std::borrow::Cow<'static, str> {
                    ::std::borrow::Cow::Borrowed($symbol)
                }
            }

            impl $crate::units::NamedUnit for $name {
                const SYMBOL: &'static str = $symbol;
                const NAME: &'static str = $long;
            }
        )*
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::prefix::{Kilo, Milli};
    use crate::units::si::{Gram, Joule, Meter, Newton, Second, Watt};

    #[test]
    fn test_prod_is_commutative() {
        assert!(<Prod<Newton, Meter>>::DEF.same_as(&<Prod<Meter, Newton>>::DEF));
    }

    #[test]
    fn test_quot_dimension() {
        type Velocity = Quot<Meter, Second>;
        assert_eq!(Velocity::dimension(), Dimension::VELOCITY);
        assert!(<Quot<Joule, Second>>::DEF.same_as(&Watt::DEF));
    }

    #[test]
    fn test_pow_zero_is_one() {
        assert!(<Pow<Meter, 0>>::DEF.same_as(&One::DEF));
        assert_eq!(<Pow<Second, -1>>::dimension(), Dimension::FREQUENCY);
    }

    #[test]
    fn test_prefixed() {
        type Milligram = Prefixed<Gram, Milli>;
        type Kilometer = Prefixed<Meter, Kilo>;
        assert_eq!(Milligram::symbol(), "mg");
        assert_eq!(Kilometer::factor(), 1000.0);
    }

    #[test]
    fn test_composite_symbols() {
        assert_eq!(<Quot<Meter, Pow<Second, 2>>>::symbol(), "m/s^2");
        assert_eq!(<Pow<Quot<Meter, Second>, 2>>::symbol(), "(m/s)^2");
        assert_eq!(<Prod<Newton, Meter>>::symbol(), "N·m");
        assert_eq!(<Quot<Meter, Prod<Second, Second>>>::symbol(), "m/(s·s)");
    }

    define_unit! {
        pub(crate) Furlong: "fur", "furlong" = Meter::DEF.scale(201.168);
    }

    #[test]
    fn test_define_unit() {
        assert_eq!(Furlong::SYMBOL, "fur");
        assert_eq!(Furlong::NAME, "furlong");
        assert_eq!(Furlong::symbol(), "fur");
        assert!(Furlong::DEF.is_compatible(&Meter::DEF));
    }
}
