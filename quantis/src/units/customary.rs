//! Non-SI units in common use
//!
//! Exact definitions where one exists (the international yard and pound,
//! the thermochemical calorie, the standard atmosphere).

use crate::define_unit;
use crate::units::si::{Joule, Kilogram, Meter, Pascal, Second, Watt};
use crate::units::unit::Unit;

/// Standard acceleration of gravity, m/s²
pub const STANDARD_GRAVITY: f64 = 9.806_65;

define_unit! {
    // Time

    /// Minute (min) - 60 s
    pub Minute: "min", "minute" = Second::DEF.scale(60.0);

    /// Hour (h) - 3600 s
    pub Hour: "h", "hour" = Minute::DEF.scale(60.0);

    /// Day (d) - 86400 s
    pub Day: "d", "day" = Hour::DEF.scale(24.0);

    // Length

    /// Inch (in) - 0.0254 m
    pub Inch: "in", "inch" = Meter::DEF.scale(0.0254);

    /// Foot (ft) - 0.3048 m
    pub Foot: "ft", "foot" = Meter::DEF.scale(0.3048);

    /// Yard (yd) - 0.9144 m
    pub Yard: "yd", "yard" = Meter::DEF.scale(0.9144);

    /// Statute mile (mi) - 1609.344 m
    pub Mile: "mi", "mile" = Meter::DEF.scale(1_609.344);

    /// Nautical mile (nmi) - 1852 m
    pub NauticalMile: "nmi", "nautical_mile" = Meter::DEF.scale(1_852.0);

    // Velocity

    /// Knot (kn) - one nautical mile per hour
    pub Knot: "kn", "knot" = NauticalMile::DEF.divide(&Hour::DEF);

    // Mass

    /// Avoirdupois pound (lb) - 0.45359237 kg
    pub Pound: "lb", "pound" = Kilogram::DEF.scale(0.453_592_37);

    /// Avoirdupois ounce (oz) - 1/16 lb
    pub Ounce: "oz", "ounce" = Pound::DEF.scale(0.0625);

    // Force

    /// Pound-force (lbf) - one pound under standard gravity
    pub PoundForce: "lbf", "pound_force" = Pound::DEF
        .multiply(&Meter::DEF.divide(&Second::DEF.raise(2)))
        .scale(STANDARD_GRAVITY);

    // Energy and power

    /// Thermochemical calorie (cal) - 4.184 J
    pub Calorie: "cal", "calorie" = Joule::DEF.scale(4.184);

    /// Mechanical horsepower (hp) - 550 ft·lbf/s
    pub Horsepower: "hp", "horsepower" = Watt::DEF.scale(745.699_871_582_270_22);

    // Pressure

    /// Standard atmosphere (atm) - 101325 Pa
    pub Atmosphere: "atm", "atmosphere" = Pascal::DEF.scale(101_325.0);

    /// Bar (bar) - 10⁵ Pa
    pub Bar: "bar", "bar" = Pascal::DEF.scale(1e5);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::dimension::Dimension;
    use crate::units::si::Newton;
    use approx::assert_relative_eq;

    #[test]
    fn test_time_chain() {
        assert_eq!(Hour::factor(), 3600.0);
        assert_eq!(Day::factor(), 86_400.0);
    }

    #[test]
    fn test_knot() {
        assert_eq!(Knot::dimension(), Dimension::VELOCITY);
        assert_relative_eq!(Knot::factor(), 1852.0 / 3600.0);
    }

    #[test]
    fn test_pound_force() {
        assert!(PoundForce::DEF.is_compatible(&Newton::DEF));
        assert_relative_eq!(PoundForce::factor(), 4.448_221_615_260_5, epsilon = 1e-12);
    }

    #[test]
    fn test_horsepower_is_550_ft_lbf_per_s() {
        let ft_lbf_per_s = Foot::DEF
            .multiply(&PoundForce::DEF)
            .divide(&Second::DEF)
            .scale(550.0);
        assert!(ft_lbf_per_s.is_compatible(&Horsepower::DEF));
        assert_relative_eq!(ft_lbf_per_s.factor, Horsepower::factor(), epsilon = 1e-9);
    }
}
