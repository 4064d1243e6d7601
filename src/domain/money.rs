use serde::{Deserialize, Serialize};
use std::fmt;

use crate::currency::format_yen;
use crate::errors::{ArithmeticError, ValidationError};

/// Upper bound accepted for a purchase price, in yen.
pub const MAX_MONEY: u64 = 1_000_000_000;

/// A whole-yen amount between zero and [`MAX_MONEY`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u64")]
pub struct Money(u64);

impl Money {
    pub fn new(value: i64) -> Result<Self, ValidationError> {
        if value < 0 {
            return Err(ValidationError::BelowMinimum {
                field: "amount",
                min: 0,
                value,
            });
        }
        let value = value as u64;
        if value > MAX_MONEY {
            return Err(ValidationError::AboveMaximum {
                field: "amount",
                max: MAX_MONEY as i64,
                value: value as i64,
            });
        }
        Ok(Self(value))
    }

    /// Accepts raw numeric input, rejecting fractional values before the range check.
    pub fn from_f64(value: f64) -> Result<Self, ValidationError> {
        let whole = whole_number("amount", value)?;
        Self::new(whole)
    }

    pub fn zero() -> Self {
        Self(0)
    }

    pub fn value(self) -> u64 {
        self.0
    }

    pub fn add(self, other: Money) -> Result<Money, ValidationError> {
        Money::new((self.0 + other.0) as i64)
    }

    pub fn subtract(self, other: Money) -> Result<Money, ArithmeticError> {
        self.0
            .checked_sub(other.0)
            .map(Money)
            .ok_or(ArithmeticError::InsufficientValue {
                minuend: self.0,
                subtrahend: other.0,
            })
    }

    pub fn format(&self) -> String {
        format_yen(self.0)
    }
}

impl TryFrom<i64> for Money {
    type Error = ValidationError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Money::new(value)
    }
}

impl From<Money> for u64 {
    fn from(value: Money) -> Self {
        value.0
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format())
    }
}

/// Converts a float into an integer, failing with `NotInteger` for fractions,
/// NaN, and infinities. Values beyond `i64` saturate and are left to the range check.
pub(crate) fn whole_number(field: &'static str, value: f64) -> Result<i64, ValidationError> {
    if !value.is_finite() || value.fract() != 0.0 {
        return Err(ValidationError::NotInteger { field, value });
    }
    Ok(value as i64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_bounds() {
        assert_eq!(Money::new(0).unwrap().value(), 0);
        assert_eq!(Money::new(1_000_000_000).unwrap().value(), MAX_MONEY);
    }

    #[test]
    fn rejects_out_of_range() {
        assert!(matches!(
            Money::new(-1),
            Err(ValidationError::BelowMinimum { .. })
        ));
        assert!(matches!(
            Money::new(1_000_000_001),
            Err(ValidationError::AboveMaximum { .. })
        ));
    }

    #[test]
    fn rejects_fractions_as_not_integer() {
        assert!(matches!(
            Money::from_f64(150.5),
            Err(ValidationError::NotInteger { .. })
        ));
        assert!(matches!(
            Money::from_f64(f64::NAN),
            Err(ValidationError::NotInteger { .. })
        ));
        assert_eq!(Money::from_f64(150_000.0).unwrap().value(), 150_000);
        assert!(matches!(
            Money::from_f64(-5.0),
            Err(ValidationError::BelowMinimum { .. })
        ));
    }

    #[test]
    fn arithmetic_returns_new_values() {
        let a = Money::new(1000).unwrap();
        let b = Money::new(300).unwrap();
        assert_eq!(a.add(b).unwrap().value(), 1300);
        assert_eq!(a.subtract(b).unwrap().value(), 700);
        assert_eq!(a.value(), 1000);
        assert_eq!(
            b.subtract(a),
            Err(ArithmeticError::InsufficientValue {
                minuend: 300,
                subtrahend: 1000
            })
        );
    }

    #[test]
    fn add_past_cap_fails_validation() {
        let big = Money::new(MAX_MONEY as i64).unwrap();
        let one = Money::new(1).unwrap();
        assert!(matches!(
            big.add(one),
            Err(ValidationError::AboveMaximum { .. })
        ));
    }

    #[test]
    fn formats_with_grouping() {
        let money = Money::new(150_000).unwrap();
        assert_eq!(money.format(), "¥150,000");
        assert_eq!(money.format(), money.format());
        assert_eq!(Money::zero().to_string(), "¥0");
    }

    #[test]
    fn deserialization_validates() {
        let ok: Money = serde_json::from_str("5000").unwrap();
        assert_eq!(ok.value(), 5000);
        assert!(serde_json::from_str::<Money>("-5").is_err());
    }
}
