//! Dimension exponents
//!
//! Every physical quantity has a dimension in the five tracked base
//! quantities. Two units are interconvertible exactly when their
//! dimensions are equal; scale never participates.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Exponents over the five base quantities:
/// - L: Length (meter)
/// - T: Time (second)
/// - M: Mass (kilogram)
/// - I: Electric current (ampere)
/// - Θ: Thermodynamic temperature (kelvin)
///
/// Derived dimensions are products of powers:
/// - Velocity = L T⁻¹
/// - Force = M L T⁻²
/// - Density = M L⁻³
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Dimension {
    /// Length exponent [L]
    pub length: i8,
    /// Time exponent [T]
    pub time: i8,
    /// Mass exponent [M]
    pub mass: i8,
    /// Electric current exponent [I]
    pub current: i8,
    /// Temperature exponent [Θ]
    pub temperature: i8,
}

impl Dimension {
    // ==========================================================================
    // Base Dimensions
    // ==========================================================================

    /// Dimensionless (pure number)
    pub const DIMENSIONLESS: Self = Self::new(0, 0, 0, 0, 0);

    /// Length [L] - meter
    pub const LENGTH: Self = Self::new(1, 0, 0, 0, 0);

    /// Time [T] - second
    pub const TIME: Self = Self::new(0, 1, 0, 0, 0);

    /// Mass [M] - kilogram
    pub const MASS: Self = Self::new(0, 0, 1, 0, 0);

    /// Electric current [I] - ampere
    pub const CURRENT: Self = Self::new(0, 0, 0, 1, 0);

    /// Temperature [Θ] - kelvin
    pub const TEMPERATURE: Self = Self::new(0, 0, 0, 0, 1);

    // ==========================================================================
    // Common Derived Dimensions
    // ==========================================================================

    /// Area [L²]
    pub const AREA: Self = Self::new(2, 0, 0, 0, 0);

    /// Volume [L³]
    pub const VOLUME: Self = Self::new(3, 0, 0, 0, 0);

    /// Velocity [L T⁻¹]
    pub const VELOCITY: Self = Self::new(1, -1, 0, 0, 0);

    /// Acceleration [L T⁻²]
    pub const ACCELERATION: Self = Self::new(1, -2, 0, 0, 0);

    /// Force [M L T⁻²] - newton
    pub const FORCE: Self = Self::new(1, -2, 1, 0, 0);

    /// Energy [M L² T⁻²] - joule
    pub const ENERGY: Self = Self::new(2, -2, 1, 0, 0);

    /// Power [M L² T⁻³] - watt
    pub const POWER: Self = Self::new(2, -3, 1, 0, 0);

    /// Pressure [M L⁻¹ T⁻²] - pascal
    pub const PRESSURE: Self = Self::new(-1, -2, 1, 0, 0);

    /// Frequency [T⁻¹] - hertz
    pub const FREQUENCY: Self = Self::new(0, -1, 0, 0, 0);

    /// Electric charge [I T] - coulomb
    pub const CHARGE: Self = Self::new(0, 1, 0, 1, 0);

    /// Voltage [M L² T⁻³ I⁻¹] - volt
    pub const VOLTAGE: Self = Self::new(2, -3, 1, -1, 0);

    /// Resistance [M L² T⁻³ I⁻²] - ohm
    pub const RESISTANCE: Self = Self::new(2, -3, 1, -2, 0);

    /// Mass density [M L⁻³]
    pub const DENSITY: Self = Self::new(-3, 0, 1, 0, 0);

    /// Create a new dimension with given exponents
    pub const fn new(length: i8, time: i8, mass: i8, current: i8, temperature: i8) -> Self {
        Self {
            length,
            time,
            mass,
            current,
            temperature,
        }
    }

    /// Exponents in declaration order (length, time, mass, current, temperature)
    pub const fn exponents(&self) -> [i8; 5] {
        [
            self.length,
            self.time,
            self.mass,
            self.current,
            self.temperature,
        ]
    }

    // ==========================================================================
    // Operations
    // ==========================================================================

    /// Multiply dimensions (add exponents)
    ///
    /// Used when multiplying quantities: [A] × [B] = [A × B]
    pub const fn mul(&self, other: &Dimension) -> Dimension {
        match self.checked_mul(other) {
            Some(dim) => dim,
            None => panic!("dimension exponent out of range"),
        }
    }

    /// Divide dimensions (subtract exponents)
    ///
    /// Used when dividing quantities: [A] / [B] = [A / B]
    pub const fn div(&self, other: &Dimension) -> Dimension {
        match self.checked_div(other) {
            Some(dim) => dim,
            None => panic!("dimension exponent out of range"),
        }
    }

    /// Reciprocal (negate all exponents)
    ///
    /// [1/A] = [A]⁻¹
    pub const fn recip(&self) -> Dimension {
        Self::DIMENSIONLESS.div(self)
    }

    /// Raise to integer power (multiply all exponents)
    ///
    /// # Panics
    ///
    /// Panics when an exponent leaves the `i8` range, as do [`Dimension::mul`]
    /// and [`Dimension::div`]. In a const context that is a compile error.
    pub const fn pow(&self, n: i32) -> Dimension {
        match self.checked_pow(n) {
            Some(dim) => dim,
            None => panic!("dimension exponent out of range"),
        }
    }

    /// [`Dimension::mul`] that reports exponent overflow instead of panicking
    pub const fn checked_mul(&self, other: &Dimension) -> Option<Dimension> {
        let (Some(length), Some(time), Some(mass), Some(current), Some(temperature)) = (
            self.length.checked_add(other.length),
            self.time.checked_add(other.time),
            self.mass.checked_add(other.mass),
            self.current.checked_add(other.current),
            self.temperature.checked_add(other.temperature),
        ) else {
            return None;
        };
        Some(Dimension::new(length, time, mass, current, temperature))
    }

    /// [`Dimension::div`] that reports exponent overflow instead of panicking
    pub const fn checked_div(&self, other: &Dimension) -> Option<Dimension> {
        let (Some(length), Some(time), Some(mass), Some(current), Some(temperature)) = (
            self.length.checked_sub(other.length),
            self.time.checked_sub(other.time),
            self.mass.checked_sub(other.mass),
            self.current.checked_sub(other.current),
            self.temperature.checked_sub(other.temperature),
        ) else {
            return None;
        };
        Some(Dimension::new(length, time, mass, current, temperature))
    }

    /// [`Dimension::pow`] that reports exponent overflow instead of panicking
    pub const fn checked_pow(&self, n: i32) -> Option<Dimension> {
        let (Some(length), Some(time), Some(mass), Some(current), Some(temperature)) = (
            scale_exponent(self.length, n),
            scale_exponent(self.time, n),
            scale_exponent(self.mass, n),
            scale_exponent(self.current, n),
            scale_exponent(self.temperature, n),
        ) else {
            return None;
        };
        Some(Dimension::new(length, time, mass, current, temperature))
    }

    // ==========================================================================
    // Predicates
    // ==========================================================================

    /// Check if dimensionless
    pub const fn is_dimensionless(&self) -> bool {
        self.equals(&Self::DIMENSIONLESS)
    }

    /// Check if dimensions are equal
    pub const fn equals(&self, other: &Dimension) -> bool {
        self.length == other.length
            && self.time == other.time
            && self.mass == other.mass
            && self.current == other.current
            && self.temperature == other.temperature
    }

    /// Get the name of this dimension if it matches a known kind
    pub fn name(&self) -> Option<&'static str> {
        match *self {
            Self::DIMENSIONLESS => Some("dimensionless"),
            Self::LENGTH => Some("length"),
            Self::TIME => Some("time"),
            Self::MASS => Some("mass"),
            Self::CURRENT => Some("electric current"),
            Self::TEMPERATURE => Some("temperature"),
            Self::AREA => Some("area"),
            Self::VOLUME => Some("volume"),
            Self::VELOCITY => Some("velocity"),
            Self::ACCELERATION => Some("acceleration"),
            Self::FORCE => Some("force"),
            Self::ENERGY => Some("energy"),
            Self::POWER => Some("power"),
            Self::PRESSURE => Some("pressure"),
            Self::FREQUENCY => Some("frequency"),
            Self::CHARGE => Some("electric charge"),
            Self::VOLTAGE => Some("voltage"),
            Self::RESISTANCE => Some("resistance"),
            Self::DENSITY => Some("density"),
            _ => None,
        }
    }

    /// Render with SI base unit symbols (`kg·m/s²`), `1` when dimensionless
    pub fn si_symbol(&self) -> String {
        let mut num: Vec<String> = Vec::new();
        let mut den: Vec<String> = Vec::new();
        for (symbol, exp) in [
            ("kg", self.mass),
            ("m", self.length),
            ("s", self.time),
            ("A", self.current),
            ("K", self.temperature),
        ] {
            if exp > 0 {
                num.push(with_power(symbol, exp.unsigned_abs()));
            } else if exp < 0 {
                den.push(with_power(symbol, exp.unsigned_abs()));
            }
        }

        let num_str = if num.is_empty() {
            "1".to_string()
        } else {
            num.join("·")
        };
        if den.is_empty() {
            num_str
        } else {
            format!("{}/{}", num_str, den.join("·"))
        }
    }
}

const fn scale_exponent(exp: i8, n: i32) -> Option<i8> {
    match (exp as i32).checked_mul(n) {
        Some(v) if v >= i8::MIN as i32 && v <= i8::MAX as i32 => Some(v as i8),
        _ => None,
    }
}

fn with_power(symbol: &str, exp: u8) -> String {
    if exp == 1 {
        symbol.to_string()
    } else {
        format!("{}{}", symbol, superscript(exp))
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_dimensionless() {
            return write!(f, "1");
        }

        let mut num: Vec<String> = Vec::new();
        let mut den: Vec<String> = Vec::new();

        for (name, exp) in [
            ("M", self.mass),
            ("L", self.length),
            ("T", self.time),
            ("I", self.current),
            ("Θ", self.temperature),
        ] {
            if exp > 0 {
                num.push(with_power(name, exp.unsigned_abs()));
            } else if exp < 0 {
                den.push(with_power(name, exp.unsigned_abs()));
            }
        }

        let num_str = if num.is_empty() {
            "1".to_string()
        } else {
            num.join(" ")
        };

        if den.is_empty() {
            write!(f, "{}", num_str)
        } else {
            write!(f, "{} / {}", num_str, den.join(" "))
        }
    }
}

/// Convert a magnitude to superscript digits
fn superscript(n: u8) -> String {
    let mut result = String::new();
    for d in n.to_string().chars() {
        result.push(match d {
            '0' => '⁰',
            '1' => '¹',
            '2' => '²',
            '3' => '³',
            '4' => '⁴',
            '5' => '⁵',
            '6' => '⁶',
            '7' => '⁷',
            '8' => '⁸',
            '9' => '⁹',
            _ => d,
        });
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimension_mul() {
        // Force = Mass × Acceleration = M × L T⁻² = M L T⁻²
        let force = Dimension::MASS.mul(&Dimension::ACCELERATION);
        assert!(force.equals(&Dimension::FORCE));
    }

    #[test]
    fn test_dimension_div() {
        let velocity = Dimension::LENGTH.div(&Dimension::TIME);
        assert!(velocity.equals(&Dimension::VELOCITY));
    }

    #[test]
    fn test_density() {
        let density = Dimension::MASS.div(&Dimension::VOLUME);
        assert_eq!(density, Dimension::DENSITY);
    }

    #[test]
    fn test_power() {
        assert_eq!(Dimension::LENGTH.pow(3), Dimension::VOLUME);
        assert_eq!(Dimension::VELOCITY.pow(0), Dimension::DIMENSIONLESS);
        assert_eq!(Dimension::TIME.pow(-1), Dimension::FREQUENCY);
    }

    #[test]
    fn test_recip() {
        let freq = Dimension::TIME.recip();
        assert!(freq.equals(&Dimension::FREQUENCY));
    }

    #[test]
    fn test_checked_overflow() {
        let big = Dimension::new(100, 0, 0, 0, 0);
        assert_eq!(big.checked_mul(&big), None);
        assert_eq!(big.checked_pow(2), None);
        assert_eq!(big.recip().checked_div(&big), None);
        assert_eq!(big.checked_pow(1), Some(big));
        assert_eq!(Dimension::LENGTH.checked_pow(i32::MAX), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Dimension::VELOCITY), "L / T");
        assert_eq!(format!("{}", Dimension::FORCE), "M L / T²");
        assert_eq!(format!("{}", Dimension::DIMENSIONLESS), "1");
        assert_eq!(format!("{}", Dimension::FREQUENCY), "1 / T");
    }

    #[test]
    fn test_si_symbol() {
        assert_eq!(Dimension::FORCE.si_symbol(), "kg·m/s²");
        assert_eq!(Dimension::DENSITY.si_symbol(), "kg/m³");
        assert_eq!(Dimension::FREQUENCY.si_symbol(), "1/s");
        assert_eq!(Dimension::DIMENSIONLESS.si_symbol(), "1");
    }

    #[test]
    fn test_display_extreme_exponents() {
        let inverse = Dimension::new(i8::MIN, 0, 0, 0, 0);
        assert_eq!(inverse.to_string(), "1 / L¹²⁸");
        assert_eq!(inverse.si_symbol(), "1/m¹²⁸");
        let wide = Dimension::new(i8::MAX, 0, i8::MIN, 0, 0);
        assert_eq!(wide.to_string(), "L¹²⁷ / M¹²⁸");
    }

    #[test]
    fn test_named() {
        assert_eq!(Dimension::MASS.name(), Some("mass"));
        assert_eq!(Dimension::ENERGY.name(), Some("energy"));
        assert_eq!(Dimension::new(1, 1, 1, 1, 1).name(), None);
    }
}
