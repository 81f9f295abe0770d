//! Exact fractional dimensions and mixed-fraction formatting.
//!
//! All dimension math is exact: SKU fields arrive as integers in a fixed
//! sub-unit, decimal input goes through `rust_decimal::Decimal` -- no `f64`
//! anywhere in the conversion path. Formatting lives on the `Display` impl
//! so every rendered fraction in the crate goes through one code path.

use std::fmt;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::CodecError;

/// Finest fraction the shop convention supports: sixty-fourths of an inch.
pub const MAX_DENOMINATOR: u64 = 64;

/// Scale of the integer dimension fields in a SKU: thousandths of an inch.
pub const SKU_SUBUNIT_SCALE: u64 = 1000;

/// A positive dimension in inches, stored as a fraction in lowest terms.
///
/// Invariant: `num > 0`, and `den` is a power of two dividing the maximum
/// denominator the value was constructed with. Every constructor enforces
/// this, so `Display` never needs to simplify.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Dimension {
    num: u64,
    den: u64,
}

impl Dimension {
    /// Construct from an arbitrary fraction, reducing to lowest terms,
    /// at the default [`MAX_DENOMINATOR`] precision.
    pub fn new(num: u64, den: u64) -> Result<Self, CodecError> {
        Dimension::with_max_denominator(num, den, MAX_DENOMINATOR)
    }

    /// Construct at a caller-chosen maximum denominator. The reduced
    /// denominator must be a power of two dividing `max_den` evenly.
    pub fn with_max_denominator(num: u64, den: u64, max_den: u64) -> Result<Self, CodecError> {
        if num == 0 || den == 0 {
            return Err(CodecError::UnsupportedPrecision {
                value: format!("{}/{}", num, den),
                max: max_den,
            });
        }
        let g = gcd(num, den);
        let (num, den) = (num / g, den / g);
        if !den.is_power_of_two() || max_den % den != 0 {
            return Err(CodecError::UnsupportedPrecision {
                value: format!("{}/{}", num, den),
                max: max_den,
            });
        }
        Ok(Dimension { num, den })
    }

    /// Construct from a SKU dimension field: an integer count of
    /// thousandths of an inch.
    pub fn from_thousandths(value: u64) -> Result<Self, CodecError> {
        Dimension::new(value, SKU_SUBUNIT_SCALE)
    }

    /// Construct from an exact decimal value (e.g. a column in the master
    /// data set).
    pub fn from_decimal(value: Decimal) -> Result<Self, CodecError> {
        let unsupported = || CodecError::UnsupportedPrecision {
            value: value.normalize().to_string(),
            max: MAX_DENOMINATOR,
        };
        if value <= Decimal::ZERO {
            return Err(unsupported());
        }
        let scaled = value
            .checked_mul(Decimal::from(MAX_DENOMINATOR))
            .ok_or_else(unsupported)?;
        if scaled.fract() != Decimal::ZERO {
            return Err(unsupported());
        }
        let num = scaled.to_u64().ok_or_else(unsupported)?;
        Dimension::new(num, MAX_DENOMINATOR)
    }

    /// Re-parse a rendered mixed fraction: `"2"`, `"3/8"` or `"1 1/32"`.
    ///
    /// Returns `None` for anything that is not a positive mixed fraction at
    /// the supported precision.
    pub fn parse_mixed(s: &str) -> Option<Dimension> {
        let mut parts = s.trim().split_whitespace();
        let first = parts.next()?;
        let second = parts.next();
        if parts.next().is_some() {
            return None;
        }
        let (whole, frac) = match second {
            Some(f) => (first.parse::<u64>().ok()?, Some(f)),
            None if first.contains('/') => (0, Some(first)),
            None => (first.parse::<u64>().ok()?, None),
        };
        let (num, den) = match frac {
            Some(f) => {
                let (n, d) = f.split_once('/')?;
                (n.parse::<u64>().ok()?, d.parse::<u64>().ok()?)
            }
            None => (0, 1),
        };
        if den == 0 {
            return None;
        }
        let total = whole.checked_mul(den)?.checked_add(num)?;
        Dimension::new(total, den).ok()
    }

    pub fn numer(&self) -> u64 {
        self.num
    }

    pub fn denom(&self) -> u64 {
        self.den
    }
}

impl fmt::Display for Dimension {
    /// Simplified mixed-fraction form: whole part and remainder fraction,
    /// omitting whichever is zero. Never emits a zero numerator term.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let whole = self.num / self.den;
        let rem = self.num % self.den;
        if rem == 0 {
            write!(f, "{}", whole)
        } else if whole == 0 {
            write!(f, "{}/{}", rem, self.den)
        } else {
            write!(f, "{} {}/{}", whole, rem, self.den)
        }
    }
}

// Serialized as the rendered mixed-fraction string, matching the
// string-form convention used for exact numerics elsewhere in the stack.

impl Serialize for Dimension {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Dimension {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Dimension::parse_mixed(&s)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid dimension '{}'", s)))
    }
}

fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        let t = a % b;
        a = b;
        b = t;
    }
    a
}

// ──────────────────────────────────────────────
// Tests
// ──────────────────────────────────────────────
