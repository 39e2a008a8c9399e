//! Metric prefixes
//!
//! The eleven power-of-ten multipliers recognised by unit formulas, from
//! tera (10¹²) down to pico (10⁻¹²). The table is global and read-only.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A metric prefix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Prefix {
    Tera,
    Giga,
    Mega,
    Kilo,
    Hecto,
    Deci,
    Centi,
    Milli,
    Micro,
    Nano,
    Pico,
}

impl Prefix {
    /// Every prefix, largest multiplier first
    pub const ALL: [Prefix; 11] = [
        Prefix::Tera,
        Prefix::Giga,
        Prefix::Mega,
        Prefix::Kilo,
        Prefix::Hecto,
        Prefix::Deci,
        Prefix::Centi,
        Prefix::Milli,
        Prefix::Micro,
        Prefix::Nano,
        Prefix::Pico,
    ];

    /// Scale multiplier of this prefix
    pub const fn multiplier(self) -> f64 {
        match self {
            Prefix::Tera => 1e12,
            Prefix::Giga => 1e9,
            Prefix::Mega => 1e6,
            Prefix::Kilo => 1e3,
            Prefix::Hecto => 1e2,
            Prefix::Deci => 1e-1,
            Prefix::Centi => 1e-2,
            Prefix::Milli => 1e-3,
            Prefix::Micro => 1e-6,
            Prefix::Nano => 1e-9,
            Prefix::Pico => 1e-12,
        }
    }

    /// Single-character symbol used in formulas (`u` stands in for µ)
    pub const fn symbol(self) -> char {
        match self {
            Prefix::Tera => 'T',
            Prefix::Giga => 'G',
            Prefix::Mega => 'M',
            Prefix::Kilo => 'k',
            Prefix::Hecto => 'h',
            Prefix::Deci => 'd',
            Prefix::Centi => 'c',
            Prefix::Milli => 'm',
            Prefix::Micro => 'u',
            Prefix::Nano => 'n',
            Prefix::Pico => 'p',
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Prefix::Tera => "tera",
            Prefix::Giga => "giga",
            Prefix::Mega => "mega",
            Prefix::Kilo => "kilo",
            Prefix::Hecto => "hecto",
            Prefix::Deci => "deci",
            Prefix::Centi => "centi",
            Prefix::Milli => "milli",
            Prefix::Micro => "micro",
            Prefix::Nano => "nano",
            Prefix::Pico => "pico",
        }
    }

    /// Look up a prefix by its symbol (case-sensitive: `M` is mega, `m` is milli)
    pub const fn from_symbol(symbol: char) -> Option<Prefix> {
        match symbol {
            'T' => Some(Prefix::Tera),
            'G' => Some(Prefix::Giga),
            'M' => Some(Prefix::Mega),
            'k' => Some(Prefix::Kilo),
            'h' => Some(Prefix::Hecto),
            'd' => Some(Prefix::Deci),
            'c' => Some(Prefix::Centi),
            'm' => Some(Prefix::Milli),
            'u' => Some(Prefix::Micro),
            'n' => Some(Prefix::Nano),
            'p' => Some(Prefix::Pico),
            _ => None,
        }
    }
}

impl fmt::Display for Prefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

// =============================================================================
// Type-level prefixes
// =============================================================================

/// A prefix usable in unit types, e.g. `Prefixed<Gram, Milli>`
pub trait MetricPrefix: Copy + Default + fmt::Debug + 'static {
    const PREFIX: Prefix;
}

macro_rules! prefix_markers {
    ($($(#[$meta:meta])* $name:ident => $prefix:ident;)*) => {
        $(
            $(#[$meta])*
            #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
            pub struct $name;

            impl MetricPrefix for $name {
                const PREFIX: Prefix = Prefix::$prefix;
            }
        )*
    };
}

prefix_markers! {
    /// 10¹²
    Tera => Tera;
    /// 10⁹
    Giga => Giga;
    /// 10⁶
    Mega => Mega;
    /// 10³
    Kilo => Kilo;
    /// 10²
    Hecto => Hecto;
    /// 10⁻¹
    Deci => Deci;
    /// 10⁻²
    Centi => Centi;
    /// 10⁻³
    Milli => Milli;
    /// 10⁻⁶
    Micro => Micro;
    /// 10⁻⁹
    Nano => Nano;
    /// 10⁻¹²
    Pico => Pico;
}
