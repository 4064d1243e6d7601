use chrono::Local;

use crate::cli::core::{CommandError, CommandResult, ShellContext};
use crate::cli::io;
use crate::cli::output::{print_table, section as output_section};
use crate::cli::registry::CommandEntry;
use crate::core::services::SavedCalculation;

use super::usage;

const SHORT_ID_LEN: usize = 8;

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new(
            "history",
            "Show saved calculations, newest first",
            "history",
            cmd_history,
        ),
        CommandEntry::new(
            "history-remove",
            "Delete a saved calculation by id or id prefix",
            "history-remove <id>",
            cmd_history_remove,
        ),
        CommandEntry::new(
            "history-clear",
            "Delete every saved calculation",
            "history-clear",
            cmd_history_clear,
        ),
    ]
}

fn short_id(id: &str) -> &str {
    id.get(..SHORT_ID_LEN).unwrap_or(id)
}

fn cmd_history(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let saved = context.calculator.history().get_history();
    if saved.is_empty() {
        io::print_info("No saved calculations yet. Use `quick` to calculate one.");
        return Ok(());
    }

    output_section("History");
    let rows: Vec<Vec<String>> = saved
        .iter()
        .map(|entry| {
            vec![
                short_id(&entry.id).to_string(),
                entry
                    .saved_at
                    .with_timezone(&Local)
                    .format("%Y-%m-%d %H:%M")
                    .to_string(),
                entry
                    .result
                    .product_name
                    .clone()
                    .unwrap_or_else(|| "-".into()),
                entry.result.period_formatted.clone(),
                entry.result.daily_cost_formatted.clone(),
            ]
        })
        .collect();
    print_table(&["Id", "Saved", "Product", "Period", "Daily"], &rows);
    io::print_info(format!(
        "{} of {} slots used.",
        saved.len(),
        context.calculator.history().limit()
    ));
    Ok(())
}

fn resolve<'a>(
    saved: &'a [SavedCalculation],
    needle: &str,
) -> Result<&'a SavedCalculation, CommandError> {
    let matches: Vec<_> = saved
        .iter()
        .filter(|entry| entry.id.starts_with(needle))
        .collect();
    match matches.as_slice() {
        [entry] => Ok(*entry),
        [] => Err(CommandError::Message(format!(
            "No saved calculation matches `{needle}`."
        ))),
        _ => Err(CommandError::InvalidArguments(format!(
            "`{needle}` matches {} entries; use a longer prefix.",
            matches.len()
        ))),
    }
}

fn cmd_history_remove(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let Some(needle) = args.first().map(|raw| raw.trim()).filter(|raw| !raw.is_empty()) else {
        return Err(usage("history-remove <id>"));
    };
    let saved = context.calculator.history().get_history();
    let entry = resolve(&saved, needle)?;
    if context.calculator.history().remove_from_history(&entry.id) {
        io::print_success(format!("Removed {}.", short_id(&entry.id)));
    }
    Ok(())
}

fn cmd_history_clear(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    if !context.confirm("Delete every saved calculation?")? {
        io::print_info("Operation cancelled.");
        return Ok(());
    }
    context.calculator.history().clear_history();
    io::print_success("History cleared.");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_ids_truncate() {
        assert_eq!(short_id("0123456789abcdef"), "01234567");
        assert_eq!(short_id("abc"), "abc");
    }
}
