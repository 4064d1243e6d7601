pub mod basket;
pub mod calculate;
pub mod config;
pub mod history;
pub mod system;

use crate::cli::core::CommandError;
use crate::cli::registry::CommandRegistry;

pub fn register_all(registry: &mut CommandRegistry) {
    registry.register_section("Basket", basket::definitions());
    registry.register_section("Calculate", calculate::definitions());
    registry.register_section("History", history::definitions());
    registry.register_section("Settings", config::definitions());
    registry.register_section("Shell", system::definitions());
}

/// Accepts `150000`, `150,000` and `¥150,000`; range checks happen in the domain.
pub(crate) fn parse_amount(field: &str, input: &str) -> Result<f64, CommandError> {
    let cleaned: String = input
        .trim()
        .trim_start_matches('¥')
        .chars()
        .filter(|c| *c != ',' && *c != '_')
        .collect();
    cleaned
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or_else(|| CommandError::InvalidArguments(format!("{field} `{input}` is not a number")))
}

pub(crate) fn parse_whole(field: &str, input: &str) -> Result<i64, CommandError> {
    input.trim().parse::<i64>().map_err(|_| {
        CommandError::InvalidArguments(format!("{field} `{input}` is not a whole number"))
    })
}

pub(crate) fn usage(text: &str) -> CommandError {
    CommandError::InvalidArguments(format!("usage: {text}"))
}
