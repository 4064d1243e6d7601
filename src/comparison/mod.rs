//! Relatable everyday-expense comparisons for amortized costs.

pub mod catalog;
pub mod selector;

pub use catalog::{comparison_items, ComparisonItem, COMPARISON_ITEMS};
pub use selector::{
    format_quantity, score_quantity, select_comparison_items, ComparisonPeriod, ComparisonResult,
    ComparisonSelector, MAX_QUANTITY, MAX_RESULTS, MIN_QUANTITY,
};
