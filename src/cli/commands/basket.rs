use crate::cli::core::{CommandError, CommandResult, ShellContext};
use crate::cli::io;
use crate::cli::output::{print_table, section as output_section};
use crate::cli::registry::CommandEntry;
use crate::currency::format_yen;
use crate::domain::Product;
use crate::errors::CostError;
use crate::presets::{calculator_presets, find_preset};

use super::{parse_amount, parse_whole, usage};

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new(
            "add",
            "Add a product to the basket",
            "add <name> <price> <years> [months]",
            cmd_add,
        ),
        CommandEntry::new(
            "preset",
            "Add a sample purchase to the basket",
            "preset <id>",
            cmd_preset,
        ),
        CommandEntry::new("presets", "List sample purchases", "presets", cmd_presets),
        CommandEntry::new("list", "Show the basket", "list", cmd_list),
        CommandEntry::new(
            "remove",
            "Remove a product from the basket by index",
            "remove <index>",
            cmd_remove,
        ),
        CommandEntry::new("clear", "Empty the basket", "clear", cmd_clear),
    ]
}

fn cmd_add(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    const USAGE: &str = "add <name> <price> <years> [months]";
    if !(3..=4).contains(&args.len()) {
        return Err(usage(USAGE));
    }
    let price = parse_amount("price", args[1])?;
    let years = parse_whole("years", args[2])?;
    let months = match args.get(3) {
        Some(raw) => parse_whole("months", raw)?,
        None => 0,
    };

    let product = Product::from_raw(args[0], price, years, months)?;
    io::print_success(format!(
        "Added `{}` at {}.",
        product.name(),
        product.calculate_daily_cost()
    ));
    context.basket.add_product(product);
    Ok(())
}

fn cmd_preset(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let Some(id) = args.first() else {
        return Err(usage("preset <id>"));
    };
    let Some(preset) = find_preset(id) else {
        io::print_hint("Use `presets` to list the available ids.");
        return Err(CommandError::Message(format!("Unknown preset `{id}`.")));
    };

    let input = preset.to_input();
    let product = Product::from_raw(input.name, input.price, input.years, input.months)?;
    io::print_success(format!(
        "Added `{}` at {}.",
        product.name(),
        product.calculate_daily_cost()
    ));
    context.basket.add_product(product);
    Ok(())
}

fn cmd_presets(_context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    output_section("Sample purchases");
    let rows: Vec<Vec<String>> = calculator_presets()
        .iter()
        .map(|preset| {
            vec![
                preset.id.clone(),
                preset.label.clone(),
                preset.name.clone(),
                format_yen(preset.price),
                format!("{}y {}m", preset.years, preset.months),
            ]
        })
        .collect();
    print_table(&["Id", "Label", "Product", "Price", "Period"], &rows);
    Ok(())
}

fn cmd_list(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    if context.basket.is_empty() {
        io::print_info("The basket is empty. Use `add` or `preset` to add products.");
        return Ok(());
    }

    output_section("Basket");
    let rows: Vec<Vec<String>> = context
        .basket
        .products()
        .iter()
        .enumerate()
        .map(|(index, product)| {
            vec![
                index.to_string(),
                product.name().to_string(),
                product.price().format(),
                product.period().format(),
                product.calculate_daily_cost().format(),
            ]
        })
        .collect();
    print_table(&["#", "Product", "Price", "Period", "Daily"], &rows);
    io::print_info(format!(
        "Total: {}",
        context.basket.calculate_total_daily_cost()
    ));
    Ok(())
}

fn cmd_remove(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let Some(raw) = args.first() else {
        return Err(usage("remove <index>"));
    };
    let index = parse_whole("index", raw)?;
    let index = isize::try_from(index)
        .map_err(|_| CommandError::InvalidArguments(format!("index `{raw}` is out of range")))?;
    let removed = context
        .basket
        .remove_product(index)
        .map_err(CostError::from)?;
    io::print_success(format!("Removed `{}`.", removed.name()));
    Ok(())
}

fn cmd_clear(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    if context.basket.is_empty() {
        io::print_info("The basket is already empty.");
        return Ok(());
    }
    if !context.confirm("Remove every product from the basket?")? {
        io::print_info("Operation cancelled.");
        return Ok(());
    }
    context.basket.clear();
    io::print_success("Basket cleared.");
    Ok(())
}
