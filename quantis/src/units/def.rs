//! Unit identity and the unit algebra
//!
//! A [`UnitDef`] is a dimension plus a scale factor relative to the coherent
//! SI unit of that dimension. Identity is structural: two definitions with
//! the same exponents and the same factor are the same unit however they
//! were derived, so `N·m` and `m·N` are interchangeable.
//!
//! Every operation is a `const fn`. Unit types evaluate their definition at
//! compile time, so a contract violation there (a zero scale, an exponent
//! out of range) is a build error rather than a run-time panic. The
//! `checked_*` variants serve untrusted input such as parsed formulas.
//!
//! The factor is always `f64`, whatever numeric type the quantity carries,
//! so long derivation chains (`hp → W → J → N`) round once per step in
//! double precision even for `f32` quantities.

use serde::Serialize;
use std::fmt;
use thiserror::Error;

use super::convert::ConversionError;
use super::dimension::Dimension;
use super::prefix::Prefix;

/// Unit identity: dimension exponents plus a positive, finite scale factor
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct UnitDef {
    pub dimension: Dimension,
    pub factor: f64,
}

/// Failure of a checked algebra operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AlgebraError {
    #[error("a dimension exponent left the representable range")]
    ExponentOverflow,
    #[error("the scale factor is not a positive finite number")]
    FactorOutOfRange,
}

impl UnitDef {
    /// The dimensionless unit with factor 1, identity of `multiply`
    pub const ONE: UnitDef = UnitDef::base(Dimension::DIMENSIONLESS);

    /// Coherent SI unit of a dimension (factor 1)
    pub const fn base(dimension: Dimension) -> Self {
        Self {
            dimension,
            factor: 1.0,
        }
    }

    /// Create a unit with an explicit factor
    ///
    /// # Panics
    ///
    /// Panics if `factor` is not positive and finite.
    pub const fn new(dimension: Dimension, factor: f64) -> Self {
        assert!(
            is_valid_factor(factor),
            "unit scale factor must be positive and finite"
        );
        Self { dimension, factor }
    }

    /// Fallible counterpart of [`UnitDef::new`]
    pub const fn try_new(dimension: Dimension, factor: f64) -> Result<Self, AlgebraError> {
        if is_valid_factor(factor) {
            Ok(Self { dimension, factor })
        } else {
            Err(AlgebraError::FactorOutOfRange)
        }
    }

    // ==========================================================================
    // Algebra
    // ==========================================================================

    /// Exponents add, factors multiply
    pub const fn multiply(&self, other: &UnitDef) -> UnitDef {
        UnitDef::new(
            self.dimension.mul(&other.dimension),
            self.factor * other.factor,
        )
    }

    /// Exponents subtract, factors divide
    pub const fn divide(&self, other: &UnitDef) -> UnitDef {
        UnitDef::new(
            self.dimension.div(&other.dimension),
            self.factor / other.factor,
        )
    }

    /// Exponents multiply by `n`, factor raised by repeated multiplication
    ///
    /// `raise(0)` is [`UnitDef::ONE`] for every unit.
    pub const fn raise(&self, n: i32) -> UnitDef {
        UnitDef::new(self.dimension.pow(n), power(self.factor, n))
    }

    /// Same dimension, factor multiplied by `k`
    ///
    /// # Panics
    ///
    /// Panics if `k` is not positive and finite.
    pub const fn scale(&self, k: f64) -> UnitDef {
        assert!(is_valid_factor(k), "scale must be positive and finite");
        UnitDef::new(self.dimension, self.factor * k)
    }

    /// `scale` by the prefix multiplier
    pub const fn apply_prefix(&self, prefix: Prefix) -> UnitDef {
        self.scale(prefix.multiplier())
    }

    /// Reciprocal unit (`1 / self`)
    pub const fn recip(&self) -> UnitDef {
        UnitDef::ONE.divide(self)
    }

    // ==========================================================================
    // Checked algebra
    // ==========================================================================

    pub const fn checked_multiply(&self, other: &UnitDef) -> Result<UnitDef, AlgebraError> {
        match self.dimension.checked_mul(&other.dimension) {
            Some(dimension) => UnitDef::try_new(dimension, self.factor * other.factor),
            None => Err(AlgebraError::ExponentOverflow),
        }
    }

    pub const fn checked_divide(&self, other: &UnitDef) -> Result<UnitDef, AlgebraError> {
        match self.dimension.checked_div(&other.dimension) {
            Some(dimension) => UnitDef::try_new(dimension, self.factor / other.factor),
            None => Err(AlgebraError::ExponentOverflow),
        }
    }

    pub const fn checked_raise(&self, n: i32) -> Result<UnitDef, AlgebraError> {
        match self.dimension.checked_pow(n) {
            Some(dimension) => UnitDef::try_new(dimension, power(self.factor, n)),
            None => Err(AlgebraError::ExponentOverflow),
        }
    }

    pub const fn checked_scale(&self, k: f64) -> Result<UnitDef, AlgebraError> {
        if !is_valid_factor(k) {
            return Err(AlgebraError::FactorOutOfRange);
        }
        UnitDef::try_new(self.dimension, self.factor * k)
    }

    // ==========================================================================
    // Relations
    // ==========================================================================

    /// Interconvertible: all five exponents match, the factor never participates
    pub const fn is_compatible(&self, other: &UnitDef) -> bool {
        self.dimension.equals(&other.dimension)
    }

    /// Structural identity: same exponents and bit-identical factor
    pub const fn same_as(&self, other: &UnitDef) -> bool {
        self.dimension.equals(&other.dimension) && self.factor.to_bits() == other.factor.to_bits()
    }

    /// Multiplier taking a value expressed in `self` to one expressed in `target`
    pub fn conversion_factor(&self, target: &UnitDef) -> Result<f64, ConversionError> {
        if !self.is_compatible(target) {
            return Err(ConversionError::Incompatible {
                from: self.dimension,
                to: target.dimension,
            });
        }
        Ok(self.factor / target.factor)
    }

    pub const fn is_dimensionless(&self) -> bool {
        self.dimension.is_dimensionless()
    }
}

impl Default for UnitDef {
    fn default() -> Self {
        Self::ONE
    }
}

impl fmt::Display for UnitDef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.factor == 1.0 {
            write!(f, "{}", self.dimension.si_symbol())
        } else if self.is_dimensionless() {
            write!(f, "{}", self.factor)
        } else {
            write!(f, "{} {}", self.factor, self.dimension.si_symbol())
        }
    }
}

const fn is_valid_factor(factor: f64) -> bool {
    factor > 0.0 && factor.is_finite()
}

/// `base^n`; negative powers take the reciprocal
///
/// Exponents up to the `i8` range multiply one factor at a time. Larger ones
/// can only reach a dimensionless unit and fall back to squaring.
const fn power(base: f64, n: i32) -> f64 {
    let mut count = n.unsigned_abs();
    let mut acc = 1.0;
    if count <= 128 {
        let mut i = 0;
        while i < count {
            acc *= base;
            i += 1;
        }
    } else {
        let mut square = base;
        while count > 0 {
            if count & 1 == 1 {
                acc *= square;
            }
            square *= square;
            count >>= 1;
        }
    }
    if n < 0 { 1.0 / acc } else { acc }
}
