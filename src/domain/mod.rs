//! Amortization value objects and entities.

pub mod calculation;
pub mod daily_cost;
pub mod money;
pub mod period;
pub mod product;

pub use calculation::Calculation;
pub use daily_cost::DailyCost;
pub use money::{Money, MAX_MONEY};
pub use period::Period;
pub use product::Product;
