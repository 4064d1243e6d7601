use crate::cli::core::{CommandError, CommandResult, ShellContext};
use crate::cli::io;
use crate::cli::output::section as output_section;
use crate::cli::registry::CommandEntry;

const FIELD_WIDTH: usize = 17;

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![CommandEntry::new(
        "config",
        "View and change settings",
        "config [show|set <key> <value>]",
        cmd_config,
    )]
}

fn cmd_config(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    if args.is_empty() || args[0].eq_ignore_ascii_case("show") {
        return show_config(context);
    }

    match args[0].to_lowercase().as_str() {
        "set" => {
            if args.len() < 3 {
                return Err(CommandError::InvalidArguments(
                    "usage: config set <history_limit|history_key|telemetry_enabled|telemetry_path> <value>"
                        .into(),
                ));
            }
            let key = args[1].to_lowercase();
            let value = args[2..].join(" ");
            let mut config = context.config.clone();
            config.set_value(&key, value.trim())?;
            context.apply_config(config)?;
            io::print_success(format!("Updated `{key}`."));
            Ok(())
        }
        other => Err(CommandError::InvalidArguments(format!(
            "unknown config action `{other}` (use show or set)"
        ))),
    }
}

fn show_config(context: &ShellContext) -> CommandResult {
    let config = &context.config;
    output_section("Configuration");
    io::print_field("File", FIELD_WIDTH, context.config_manager.path().display());
    io::print_field("history_limit", FIELD_WIDTH, config.history_limit);
    io::print_field("history_key", FIELD_WIDTH, &config.history_key);
    io::print_field("telemetry_enabled", FIELD_WIDTH, config.telemetry_enabled);
    let target = config
        .telemetry_target(context.config_manager.base_dir())
        .map(|path| path.display().to_string())
        .unwrap_or_else(|| "-".into());
    io::print_field("telemetry_path", FIELD_WIDTH, target);
    Ok(())
}
