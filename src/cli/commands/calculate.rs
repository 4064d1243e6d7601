use crate::cli::core::{CommandError, CommandResult, ShellContext};
use crate::cli::io;
use crate::cli::output::{print_table, section as output_section};
use crate::cli::registry::CommandEntry;
use crate::comparison::{select_comparison_items, ComparisonResult};
use crate::core::services::{CalculateDailyCostInput, CalculationService, ProductInput};
use crate::core::CalculateParams;
use crate::currency::format_yen;

use super::{parse_amount, parse_whole, usage};

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new(
            "calc",
            "Calculate the combined daily cost of the basket",
            "calc",
            cmd_calc,
        ),
        CommandEntry::new(
            "quick",
            "Calculate and save a single purchase",
            "quick <price> <years> [months] [name]",
            cmd_quick,
        ),
        CommandEntry::new(
            "compare",
            "Find everyday purchases matching a daily amount",
            "compare <daily> [monthly] [yearly]",
            cmd_compare,
        ),
    ]
}

fn cmd_calc(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    if context.basket.is_empty() {
        io::print_warning("The basket is empty. Use `add` or `preset` first.");
        return Ok(());
    }

    let input = CalculateDailyCostInput {
        products: context
            .basket
            .products()
            .iter()
            .map(|product| ProductInput {
                name: product.name().to_string(),
                price: product.price().value() as f64,
                years: i64::from(product.period().years()),
                months: i64::from(product.period().months()),
            })
            .collect(),
    };
    let output = CalculationService::execute(&input)?;

    output_section("Products");
    let rows: Vec<Vec<String>> = output
        .products
        .iter()
        .map(|product| {
            vec![
                product.name.clone(),
                format_yen(product.price),
                product.period_formatted.clone(),
                format!("{}/day", format_yen(product.daily_cost)),
            ]
        })
        .collect();
    print_table(&["Product", "Price", "Period", "Daily"], &rows);

    print_totals(
        &output.daily_cost_formatted,
        output.monthly_cost,
        output.yearly_cost,
    );
    print_comparisons(&output.comparisons());
    Ok(())
}

fn cmd_quick(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    const USAGE: &str = "quick <price> <years> [months] [name]";
    if args.len() < 2 {
        return Err(usage(USAGE));
    }
    let price = parse_amount("price", args[0])?;
    let years = parse_whole("years", args[1])?;
    let (months, rest) = match args.get(2).map(|raw| raw.parse::<i64>()) {
        Some(Ok(months)) => (months, &args[3..]),
        _ => (0, &args[2..]),
    };
    let name = (!rest.is_empty()).then(|| rest.join(" "));

    let params = CalculateParams {
        name,
        price,
        years,
        months,
    };
    let Some(result) = context.calculator.calculate(params).cloned() else {
        let message = context
            .calculator
            .error_message()
            .unwrap_or_else(|| "Calculation failed.".into());
        return Err(CommandError::Message(message));
    };

    output_section(
        result
            .product_name
            .as_deref()
            .unwrap_or("Your purchase"),
    );
    io::print_info(format!(
        "  {} over {}",
        format_yen(result.price),
        result.period_formatted
    ));
    print_totals(
        &result.daily_cost_formatted,
        result.monthly_cost,
        result.yearly_cost,
    );
    print_comparisons(&result.comparisons());
    Ok(())
}

fn cmd_compare(_context: &mut ShellContext, args: &[&str]) -> CommandResult {
    const USAGE: &str = "compare <daily> [monthly] [yearly]";
    let Some(raw_daily) = args.first() else {
        return Err(usage(USAGE));
    };
    if args.len() > 3 {
        return Err(usage(USAGE));
    }
    let daily = parse_amount("daily", raw_daily)?;
    let monthly = match args.get(1) {
        Some(raw) => parse_amount("monthly", raw)?,
        None => daily * 30.0,
    };
    let yearly = match args.get(2) {
        Some(raw) => parse_amount("yearly", raw)?,
        None => daily * 365.0,
    };

    print_comparisons(&select_comparison_items(daily, monthly, yearly));
    Ok(())
}

fn print_totals(daily: &str, monthly: u64, yearly: u64) {
    output_section("Cost of ownership");
    io::print_field("Daily", 7, daily);
    io::print_field("Monthly", 7, format_yen(monthly));
    io::print_field("Yearly", 7, format_yen(yearly));
}

fn print_comparisons(results: &[ComparisonResult]) {
    output_section("That's about the same as");
    if results.is_empty() {
        io::print_info("  Nothing everyday comes close to this amount.");
        return;
    }
    for result in results {
        io::print_info(format!("  {}", result.describe()));
    }
}
