use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::comparison::{select_comparison_items, ComparisonResult};
use crate::domain::{Calculation, Product};

use super::ServiceResult;

/// Raw product fields as typed by a user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductInput {
    pub name: String,
    pub price: f64,
    pub years: i64,
    pub months: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CalculateDailyCostInput {
    pub products: Vec<ProductInput>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductBreakdown {
    pub name: String,
    pub price: u64,
    pub years: u32,
    pub months: u32,
    pub period_formatted: String,
    pub daily_cost: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculateDailyCostOutput {
    pub total_daily_cost: u64,
    pub daily_cost_formatted: String,
    pub monthly_cost: u64,
    pub yearly_cost: u64,
    pub products: Vec<ProductBreakdown>,
}

impl CalculateDailyCostOutput {
    /// Everyday purchases that make the totals relatable.
    pub fn comparisons(&self) -> Vec<ComparisonResult> {
        select_comparison_items(
            self.total_daily_cost as f64,
            self.monthly_cost as f64,
            self.yearly_cost as f64,
        )
    }
}

/// Snapshot of a single-product calculation, as kept in history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationResult {
    pub daily_cost: u64,
    pub daily_cost_formatted: String,
    pub monthly_cost: u64,
    pub yearly_cost: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_name: Option<String>,
    pub price: u64,
    pub years: u32,
    pub months: u32,
    pub period_formatted: String,
}

impl CalculationResult {
    /// Builds the snapshot from an output holding exactly one product.
    pub fn from_output(
        output: &CalculateDailyCostOutput,
        product_name: Option<String>,
    ) -> Option<Self> {
        let [product] = output.products.as_slice() else {
            return None;
        };
        Some(Self {
            daily_cost: output.total_daily_cost,
            daily_cost_formatted: output.daily_cost_formatted.clone(),
            monthly_cost: output.monthly_cost,
            yearly_cost: output.yearly_cost,
            product_name,
            price: product.price,
            years: product.years,
            months: product.months,
            period_formatted: product.period_formatted.clone(),
        })
    }

    pub fn comparisons(&self) -> Vec<ComparisonResult> {
        select_comparison_items(
            self.daily_cost as f64,
            self.monthly_cost as f64,
            self.yearly_cost as f64,
        )
    }
}

pub struct CalculationService;

impl CalculationService {
    /// Validates every product in order and aggregates their daily costs.
    pub fn execute(input: &CalculateDailyCostInput) -> ServiceResult<CalculateDailyCostOutput> {
        let mut calculation = Calculation::default();
        for item in &input.products {
            let product = Product::from_raw(item.name.clone(), item.price, item.years, item.months)?;
            calculation.add_product(product);
        }

        let total = calculation.calculate_total_daily_cost();
        let products = calculation
            .products()
            .iter()
            .map(|product| ProductBreakdown {
                name: product.name().to_string(),
                price: product.price().value(),
                years: product.period().years(),
                months: product.period().months(),
                period_formatted: product.period().format(),
                daily_cost: product.calculate_daily_cost().value(),
            })
            .collect::<Vec<_>>();

        debug!(
            products = products.len(),
            daily = total.value(),
            "calculated daily cost"
        );

        Ok(CalculateDailyCostOutput {
            total_daily_cost: total.value(),
            daily_cost_formatted: total.format(),
            monthly_cost: total.to_monthly(),
            yearly_cost: total.to_yearly(),
            products,
        })
    }
}
