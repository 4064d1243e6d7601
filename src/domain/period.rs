use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::ValidationError;

pub const DAYS_PER_YEAR: f64 = 365.0;
pub const MONTHS_PER_YEAR: i64 = 12;
pub const MAX_YEARS: f64 = 100.0;
pub const MIN_YEARS: f64 = 1.0 / MONTHS_PER_YEAR as f64;

// Absorbs float noise when a composite period lands exactly on a bound.
const BOUND_EPSILON: f64 = 1e-9;

/// Usage duration stored as fractional years, between one month and 100 years.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Period {
    value: f64,
}

impl Period {
    pub fn new(value_in_years: f64) -> Result<Self, ValidationError> {
        if !value_in_years.is_finite() {
            return Err(ValidationError::InvalidPeriod(value_in_years));
        }
        if value_in_years < MIN_YEARS - BOUND_EPSILON {
            return Err(ValidationError::PeriodTooShort);
        }
        if value_in_years > MAX_YEARS + BOUND_EPSILON {
            return Err(ValidationError::PeriodTooLong);
        }
        Ok(Self {
            value: value_in_years,
        })
    }

    /// Builds a period from whole years plus 0..=11 remainder months.
    pub fn from_years_and_months(years: i64, months: i64) -> Result<Self, ValidationError> {
        if years < 0 {
            return Err(ValidationError::NegativeYears(years));
        }
        if !(0..MONTHS_PER_YEAR).contains(&months) {
            return Err(ValidationError::MonthsOutOfRange(months));
        }
        if years == 0 && months == 0 {
            return Err(ValidationError::PeriodTooShort);
        }
        Self::new(years as f64 + months as f64 / MONTHS_PER_YEAR as f64)
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn years(&self) -> u32 {
        self.split().0
    }

    /// Remainder months, always within 0..=11.
    pub fn months(&self) -> u32 {
        self.split().1
    }

    // A fraction that rounds up to a full 12 months rolls into the next year.
    fn split(&self) -> (u32, u32) {
        let whole = self.value.floor();
        let months = ((self.value - whole) * MONTHS_PER_YEAR as f64).round() as u32;
        if months == MONTHS_PER_YEAR as u32 {
            (whole as u32 + 1, 0)
        } else {
            (whole as u32, months)
        }
    }

    /// Whole days using the 365-day convention.
    pub fn to_days(&self) -> u64 {
        (self.value * DAYS_PER_YEAR).floor() as u64
    }

    pub fn format(&self) -> String {
        let years = self.years();
        let months = self.months();
        match (years, months) {
            (0, m) => unit(m, "month"),
            (y, 0) => unit(y, "year"),
            (y, m) => format!("{} {}", unit(y, "year"), unit(m, "month")),
        }
    }
}

fn unit(count: u32, label: &str) -> String {
    if count == 1 {
        format!("{count} {label}")
    } else {
        format!("{count} {label}s")
    }
}

impl TryFrom<f64> for Period {
    type Error = ValidationError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Period::new(value)
    }
}

impl From<Period> for f64 {
    fn from(period: Period) -> Self {
        period.value
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format())
    }
}
