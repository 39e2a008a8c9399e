//! SI Base Units
//!
//! One coherent unit per tracked dimension, plus the gram so that the
//! metric prefixes compose onto mass the usual way (`mg`, not `µkg`).

use crate::define_unit;
use crate::units::def::UnitDef;
use crate::units::dimension::Dimension;

define_unit! {
    /// Meter (m) - SI base unit of length
    pub Meter: "m", "meter" = UnitDef::base(Dimension::LENGTH);

    /// Second (s) - SI base unit of time
    pub Second: "s", "second" = UnitDef::base(Dimension::TIME);

    /// Kilogram (kg) - SI base unit of mass
    pub Kilogram: "kg", "kilogram" = UnitDef::base(Dimension::MASS);

    /// Ampere (A) - SI base unit of electric current
    pub Ampere: "A", "ampere" = UnitDef::base(Dimension::CURRENT);

    /// Kelvin (K) - SI base unit of thermodynamic temperature
    pub Kelvin: "K", "kelvin" = UnitDef::base(Dimension::TEMPERATURE);

    /// Gram (g) - 10⁻³ kg
    pub Gram: "g", "gram" = UnitDef::new(Dimension::MASS, 1e-3);
}

// =============================================================================
// Type Aliases
// =============================================================================

pub type Kg = Kilogram;
pub type M = Meter;
pub type S = Second;
pub type A = Ampere;
pub type K = Kelvin;
