//! SI Derived Units
//!
//! Each definition is spelled through the unit algebra from the base units,
//! so the catalogue doubles as a compile-time check of the algebra itself.

use super::base::{Ampere, Kilogram, Meter, Second};
use crate::define_unit;
use crate::units::unit::Unit;

define_unit! {
    /// Newton (N) - kg·m/s²
    pub Newton: "N", "newton" =
        Kilogram::DEF.multiply(&Meter::DEF).divide(&Second::DEF.raise(2));

    /// Joule (J) - N·m
    pub Joule: "J", "joule" = Newton::DEF.multiply(&Meter::DEF);

    /// Watt (W) - J/s
    pub Watt: "W", "watt" = Joule::DEF.divide(&Second::DEF);

    /// Pascal (Pa) - N/m²
    pub Pascal: "Pa", "pascal" = Newton::DEF.divide(&Meter::DEF.raise(2));

    /// Hertz (Hz) - 1/s
    pub Hertz: "Hz", "hertz" = Second::DEF.raise(-1);

    /// Coulomb (C) - A·s
    pub Coulomb: "C", "coulomb" = Ampere::DEF.multiply(&Second::DEF);

    /// Volt (V) - W/A
    pub Volt: "V", "volt" = Watt::DEF.divide(&Ampere::DEF);

    /// Ohm (Ω) - V/A, spelled `Ohm` so formulas stay ASCII
    pub Ohm: "Ohm", "ohm" = Volt::DEF.divide(&Ampere::DEF);

    /// Liter (L) - 10⁻³ m³
    pub Liter: "L", "liter" = Meter::DEF.raise(3).scale(1e-3);
}
