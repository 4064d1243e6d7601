use serde::Serialize;

use crate::errors::{CostResult, ValidationError};

use super::{daily_cost::DailyCost, money::Money, period::Period};

pub const MAX_NAME_LEN: usize = 100;

/// A purchased item amortized over its expected usage period.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Product {
    name: String,
    price: Money,
    period: Period,
}

impl Product {
    /// Validates the name first, then the price, then the period.
    pub fn new(name: impl Into<String>, price: i64, years: i64, months: i64) -> CostResult<Self> {
        let name = validate_name(name.into())?;
        let price = Money::new(price)?;
        let period = Period::from_years_and_months(years, months)?;
        Ok(Self {
            name,
            price,
            period,
        })
    }

    /// Like [`Product::new`], but takes the price as unvalidated numeric input.
    pub fn from_raw(
        name: impl Into<String>,
        price: f64,
        years: i64,
        months: i64,
    ) -> CostResult<Self> {
        let name = validate_name(name.into())?;
        let price = Money::from_f64(price)?;
        let period = Period::from_years_and_months(years, months)?;
        Ok(Self {
            name,
            price,
            period,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> Money {
        self.price
    }

    pub fn period(&self) -> Period {
        self.period
    }

    pub fn calculate_daily_cost(&self) -> DailyCost {
        // Period guarantees at least 30 days.
        DailyCost::from(self.price.value() / self.period.to_days())
    }

    pub fn calculate_monthly_cost(&self) -> u64 {
        self.calculate_daily_cost().to_monthly()
    }

    /// Price over fractional years, floored independently of the daily cost.
    pub fn calculate_yearly_cost(&self) -> u64 {
        (self.price.value() as f64 / self.period.value()).floor() as u64
    }
}

fn validate_name(name: String) -> Result<String, ValidationError> {
    if name.trim().is_empty() {
        return Err(ValidationError::EmptyName);
    }
    let len = name.chars().count();
    if len > MAX_NAME_LEN {
        return Err(ValidationError::NameTooLong {
            len,
            max: MAX_NAME_LEN,
        });
    }
    Ok(name)
}
