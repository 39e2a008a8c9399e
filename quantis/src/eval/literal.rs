//! Numeric literal parsing
//!
//! Turns the text of a number token into an integer or floating constant,
//! or names the exact defect. Accepted forms:
//!
//! - decimal integers and floats: `42`, `0.3048`, `1.5e-3`, `6E23`
//! - `0x`, `0o`, `0b` integers: `0xff`, `0o17`, `0b1010`
//! - hexadecimal floats with a binary exponent: `0x1.8p3`
//! - `_` between two digits as a separator: `32.174_049`, `1_000_000`
//!
//! Base prefixes are lowercase only, and a decimal literal may not start
//! with a redundant zero (`007`).

use thiserror::Error;

/// A parsed numeric literal
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    Int(u128),
    Float(f64),
}

impl Number {
    pub fn as_f64(self) -> f64 {
        match self {
            Number::Int(n) => n as f64,
            Number::Float(f) => f,
        }
    }
}

/// Why a literal was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LiteralError {
    #[error("leading zero in a decimal literal")]
    LeadingZero,
    #[error("digit separator `_` at offset {offset} must sit between two digits")]
    InvalidUnderscore { offset: usize },
    #[error("duplicate decimal point")]
    DuplicatePeriod,
    #[error("decimal point after the exponent")]
    PeriodAfterExponent,
    #[error("decimal point must be followed by a digit")]
    TrailingPeriod,
    #[error("duplicate exponent marker")]
    DuplicateExponent,
    #[error("exponent has no digits")]
    MissingExponentDigits,
    #[error("invalid digit `{digit}` for base {base}")]
    InvalidDigit { digit: char, base: u32 },
    #[error("base prefix must be followed by digits")]
    MissingDigits,
    #[error("magnitude is not representable")]
    Overflow,
}

#[derive(Clone, Copy, PartialEq)]
enum Prev {
    Start,
    Digit,
    Underscore,
    Period,
    Exponent,
    Sign,
}

/// Parse the full text of a numeric literal
pub fn parse_number(text: &str) -> Result<Number, LiteralError> {
    let (base, start) = match text.as_bytes() {
        [b'0', b'x', ..] => (16, 2),
        [b'0', b'o', ..] => (8, 2),
        [b'0', b'b', ..] => (2, 2),
        _ => (10, 0),
    };
    if text.len() == start {
        return Err(LiteralError::MissingDigits);
    }
    if base == 10
        && text.starts_with('0')
        && let Some(next) = text[1..].chars().next()
        && (next.is_ascii_digit() || next == '_')
    {
        return Err(LiteralError::LeadingZero);
    }

    let mut prev = Prev::Start;
    let mut prev_offset = start;
    let mut period = false;
    let mut exponent = false;
    let mut exponent_digits = 0usize;
    let mut int: Option<u128> = Some(0);

    for (i, c) in text[start..].char_indices() {
        let offset = start + i;

        // A period must be followed by a digit; underscores have their own rule
        if prev == Prev::Period && c != '_' && !c.is_digit(base) {
            return Err(LiteralError::TrailingPeriod);
        }

        match c {
            '_' => {
                if prev != Prev::Digit {
                    return Err(LiteralError::InvalidUnderscore { offset });
                }
                prev = Prev::Underscore;
            }
            '.' => {
                if base == 2 || base == 8 {
                    return Err(LiteralError::InvalidDigit { digit: c, base });
                }
                if exponent {
                    return Err(LiteralError::PeriodAfterExponent);
                }
                if period {
                    return Err(LiteralError::DuplicatePeriod);
                }
                if prev == Prev::Underscore {
                    return Err(LiteralError::InvalidUnderscore {
                        offset: prev_offset,
                    });
                }
                if prev == Prev::Start {
                    return Err(LiteralError::MissingDigits);
                }
                period = true;
                prev = Prev::Period;
            }
            'e' | 'E' if base == 10 => {
                mark_exponent(&mut exponent, prev, prev_offset)?;
                prev = Prev::Exponent;
            }
            'p' | 'P' if base == 16 => {
                mark_exponent(&mut exponent, prev, prev_offset)?;
                prev = Prev::Exponent;
            }
            '+' | '-' if prev == Prev::Exponent => {
                prev = Prev::Sign;
            }
            _ => {
                let radix = if exponent { 10 } else { base };
                let Some(digit) = c.to_digit(radix) else {
                    return Err(LiteralError::InvalidDigit { digit: c, base });
                };
                if exponent {
                    exponent_digits += 1;
                } else if !period {
                    int = int
                        .and_then(|n| n.checked_mul(u128::from(base)))
                        .and_then(|n| n.checked_add(u128::from(digit)));
                }
                prev = Prev::Digit;
            }
        }
        prev_offset = offset;
    }

    match prev {
        Prev::Underscore => {
            return Err(LiteralError::InvalidUnderscore {
                offset: prev_offset,
            });
        }
        Prev::Period => return Err(LiteralError::TrailingPeriod),
        Prev::Exponent | Prev::Sign => return Err(LiteralError::MissingExponentDigits),
        Prev::Start | Prev::Digit => {}
    }
    if exponent && exponent_digits == 0 {
        return Err(LiteralError::MissingExponentDigits);
    }

    if !period && !exponent {
        return int.map(Number::Int).ok_or(LiteralError::Overflow);
    }

    let digits: String = text[start..].chars().filter(|&c| c != '_').collect();
    let value = if base == 16 {
        hex_float(&digits)?
    } else {
        digits.parse::<f64>().map_err(|_| LiteralError::Overflow)?
    };
    if value.is_finite() {
        Ok(Number::Float(value))
    } else {
        Err(LiteralError::Overflow)
    }
}

fn mark_exponent(exponent: &mut bool, prev: Prev, prev_offset: usize) -> Result<(), LiteralError> {
    if *exponent {
        return Err(LiteralError::DuplicateExponent);
    }
    if prev == Prev::Underscore {
        return Err(LiteralError::InvalidUnderscore {
            offset: prev_offset,
        });
    }
    *exponent = true;
    Ok(())
}

/// Value of `mantissa[.fraction][p exponent]` in base 16, exponent in base 2
fn hex_float(digits: &str) -> Result<f64, LiteralError> {
    let (mantissa, exponent) = match digits.split_once(['p', 'P']) {
        Some((mantissa, exponent)) => (mantissa, exponent),
        None => (digits, "0"),
    };
    let (whole, fraction) = mantissa.split_once('.').unwrap_or((mantissa, ""));

    let mut value = 0.0_f64;
    for digit in whole.chars().filter_map(|c| c.to_digit(16)) {
        value = value * 16.0 + f64::from(digit);
    }
    let mut shift: i64 = 0;
    for digit in fraction.chars().filter_map(|c| c.to_digit(16)) {
        value = value * 16.0 + f64::from(digit);
        shift -= 4;
    }

    let exponent: i64 = exponent.parse().map_err(|_| LiteralError::Overflow)?;
    let power = exponent
        .checked_add(shift)
        .and_then(|power| i32::try_from(power).ok())
        .ok_or(LiteralError::Overflow)?;
    Ok(value * 2.0_f64.powi(power))
}
