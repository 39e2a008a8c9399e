//! Catalogue of predefined units
//!
//! A static table of every named unit in [`si`](super::si) and
//! [`customary`](super::customary). The evaluator's default symbol table is
//! built from it; each entry answers to both its symbol and its long name.

use serde::Serialize;

use super::customary::*;
use super::def::UnitDef;
use super::si::*;
use super::unit::NamedUnit;

/// One named unit
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CatalogEntry {
    pub symbol: &'static str,
    pub name: &'static str,
    pub def: UnitDef,
}

impl CatalogEntry {
    pub const fn of<U: NamedUnit>() -> Self {
        Self {
            symbol: U::SYMBOL,
            name: U::NAME,
            def: U::DEF,
        }
    }
}

macro_rules! catalog {
    ($($unit:ty),* $(,)?) => {
        &[$(CatalogEntry::of::<$unit>()),*]
    };
}

/// Every predefined unit, SI first
pub const CATALOG: &[CatalogEntry] = catalog![
    // SI base
    Meter,
    Second,
    Kilogram,
    Ampere,
    Kelvin,
    Gram,
    // SI derived
    Newton,
    Joule,
    Watt,
    Pascal,
    Hertz,
    Coulomb,
    Volt,
    Ohm,
    Liter,
    // Non-SI
    Minute,
    Hour,
    Day,
    Inch,
    Foot,
    Yard,
    Mile,
    NauticalMile,
    Knot,
    Pound,
    Ounce,
    PoundForce,
    Calorie,
    Horsepower,
    Atmosphere,
    Bar,
];

/// Find an entry by symbol or long name (case-sensitive)
pub fn find(key: &str) -> Option<&'static CatalogEntry> {
    CATALOG
        .iter()
        .find(|entry| entry.symbol == key || entry.name == key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rustc_hash::FxHashSet;

    #[test]
    fn test_keys_are_unique() {
        let mut seen = FxHashSet::default();
        for entry in CATALOG {
            assert!(seen.insert(entry.symbol), "duplicate key {}", entry.symbol);
            if entry.name != entry.symbol {
                assert!(seen.insert(entry.name), "duplicate key {}", entry.name);
            }
        }
    }

    #[test]
    fn test_find() {
        assert_eq!(find("ft").map(|e| e.name), Some("foot"));
        assert_eq!(find("newton").map(|e| e.symbol), Some("N"));
        assert!(find("Ft").is_none());
    }

    #[test]
    fn test_base_symbols_present() {
        for symbol in ["m", "s", "kg", "A", "K"] {
            let entry = find(symbol).unwrap();
            assert_eq!(entry.def.factor, 1.0);
        }
    }
}
