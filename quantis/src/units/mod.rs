//! Units of Measure
//!
//! Compile-time dimensional analysis over five base dimensions (length,
//! time, mass, current, temperature).
//!
//! # Key Features
//!
//! - **Unit identity**: [`UnitDef`], exponents plus a scale factor, with a
//!   closed `const fn` algebra
//! - **Type-level units**: [`Quantity<N, U>`] carries its unit in the type;
//!   mismatched addition and incompatible conversion fail to compile
//! - **Metric prefixes**: tera through pico, at run time ([`Prefix`]) and in
//!   types ([`Prefixed`])
//! - **Runtime escape hatch**: [`DynQuantity`] for units that come from text
//!
//! # Example
//!
//! ```
//! use quantis::units::prelude::*;
//!
//! let distance: Quantity<f64, Kilometer> = Quantity::new(42.195);
//! let time: Quantity<f64, Hour> = Quantity::new(2.0);
//! let pace = (distance / time).convert_to::<Quot<Meter, Second>>();
//! assert!((pace.value() - 5.860_416).abs() < 1e-6);
//! ```

pub mod catalog;
pub mod convert;
pub mod customary;
pub mod def;
pub mod dimension;
pub mod dynamic;
pub mod prefix;
pub mod quantity;
pub mod si;
pub mod unit;

// Re-exports
pub use catalog::{CATALOG, CatalogEntry};
pub use convert::{ConversionError, conversion_factor, convert, convert_value};
pub use def::{AlgebraError, UnitDef};
pub use dimension::Dimension;
pub use dynamic::{DynQuantity, QuantityKind};
pub use prefix::{
    Centi, Deci, Giga, Hecto, Kilo, Mega, MetricPrefix, Micro, Milli, Nano, Pico, Prefix, Tera,
};
pub use quantity::{Quantity, WithUnit};
pub use unit::{NamedUnit, One, Pow, Prefixed, Prod, Quot, Unit};

/// Common prefixed units
pub type Kilometer = Prefixed<si::Meter, Kilo>;
pub type Centimeter = Prefixed<si::Meter, Centi>;
pub type Millimeter = Prefixed<si::Meter, Milli>;
pub type Milligram = Prefixed<si::Gram, Milli>;
pub type Microgram = Prefixed<si::Gram, Micro>;
pub type Millisecond = Prefixed<si::Second, Milli>;
pub type Kilowatt = Prefixed<si::Watt, Kilo>;
pub type KilowattHour = Prod<Kilowatt, customary::Hour>;

/// Prelude for common imports
pub mod prelude {
    pub use super::dimension::Dimension;
    pub use super::quantity::{Quantity, WithUnit};
    pub use super::unit::{NamedUnit, One, Pow, Prefixed, Prod, Quot, Unit};
    pub use super::{
        Centimeter, Kilometer, Kilowatt, KilowattHour, Microgram, Milligram, Millimeter,
        Millisecond,
    };

    // SI base and derived units
    pub use super::si::{
        Ampere, Coulomb, Gram, Hertz, Joule, Kelvin, Kilogram, Liter, Meter, Newton, Ohm, Pascal,
        Second, Volt, Watt,
    };

    // Non-SI units
    pub use super::customary::{
        Atmosphere, Bar, Calorie, Day, Foot, Horsepower, Hour, Inch, Knot, Mile, Minute,
        NauticalMile, Ounce, Pound, PoundForce, Yard,
    };
}
