use serde::{Deserialize, Serialize};
use std::{fmt, iter::Sum, ops::Add};

use crate::currency::format_yen;
use crate::errors::ValidationError;

use super::money::whole_number;

/// Nominal days in a month when scaling a daily cost.
pub const DAYS_PER_MONTH: u64 = 30;
/// Nominal days in a year when scaling a daily cost.
pub const DAYS_PER_YEAR: u64 = 365;

/// Whole-yen cost per day of ownership.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(try_from = "i64", into = "u64")]
pub struct DailyCost(u64);

impl DailyCost {
    pub fn new(value: i64) -> Result<Self, ValidationError> {
        if value < 0 {
            return Err(ValidationError::BelowMinimum {
                field: "daily cost",
                min: 0,
                value,
            });
        }
        Ok(Self(value as u64))
    }

    pub fn from_f64(value: f64) -> Result<Self, ValidationError> {
        Self::new(whole_number("daily cost", value)?)
    }

    pub fn value(self) -> u64 {
        self.0
    }

    pub fn to_monthly(self) -> u64 {
        self.0 * DAYS_PER_MONTH
    }

    pub fn to_yearly(self) -> u64 {
        self.0 * DAYS_PER_YEAR
    }

    /// Renders as `¥137/day`.
    pub fn format(&self) -> String {
        format!("{}/day", format_yen(self.0))
    }
}

impl From<u64> for DailyCost {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl TryFrom<i64> for DailyCost {
    type Error = ValidationError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        DailyCost::new(value)
    }
}

impl From<DailyCost> for u64 {
    fn from(value: DailyCost) -> Self {
        value.0
    }
}

impl Add for DailyCost {
    type Output = DailyCost;

    fn add(self, rhs: DailyCost) -> DailyCost {
        DailyCost(self.0 + rhs.0)
    }
}

impl Sum for DailyCost {
    fn sum<I: Iterator<Item = DailyCost>>(iter: I) -> Self {
        iter.fold(DailyCost::default(), Add::add)
    }
}

impl fmt::Display for DailyCost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scales_with_fixed_multipliers() {
        for value in [0_u64, 1, 137, 10_000] {
            let cost = DailyCost::from(value);
            assert_eq!(cost.to_monthly(), value * 30);
            assert_eq!(cost.to_yearly(), value * 365);
        }
    }

    #[test]
    fn rejects_negative_and_fractional() {
        assert!(matches!(
            DailyCost::new(-1),
            Err(ValidationError::BelowMinimum { .. })
        ));
        assert!(matches!(
            DailyCost::from_f64(137.5),
            Err(ValidationError::NotInteger { .. })
        ));
    }

    #[test]
    fn formats_per_day() {
        assert_eq!(DailyCost::from(137).format(), "¥137/day");
        assert_eq!(DailyCost::from(0).format(), "¥0/day");
        assert_eq!(DailyCost::from(10_000).to_string(), "¥10,000/day");
    }

    #[test]
    fn sums_values() {
        let total: DailyCost = [136_u64, 4].into_iter().map(DailyCost::from).sum();
        assert_eq!(total.value(), 140);
    }
}
