//! Console helpers shared by the shell commands.

use std::fmt;

use dialoguer::{theme::ColorfulTheme, Confirm};

use crate::cli::core::CommandError;
use crate::cli::output;

pub fn print_info(message: impl fmt::Display) {
    output::info(message);
}

pub fn print_warning(message: impl fmt::Display) {
    output::warning(message);
}

pub fn print_error(message: impl fmt::Display) {
    output::error(message);
}

pub fn print_success(message: impl fmt::Display) {
    output::success(message);
}

pub fn print_hint(message: impl fmt::Display) {
    output::hint(message);
}

/// `  label   : value`, with labels padded to `width` so blocks line up.
pub fn print_field(label: &str, width: usize, value: impl fmt::Display) {
    output::info(field_line(label, width, value));
}

fn field_line(label: &str, width: usize, value: impl fmt::Display) -> String {
    format!("  {label:<width$}: {value}")
}

/// Yes/no prompt; destructive commands default to "no".
pub fn confirm_action(
    theme: &ColorfulTheme,
    prompt: &str,
    default: bool,
) -> Result<bool, CommandError> {
    Confirm::with_theme(theme)
        .with_prompt(prompt)
        .default(default)
        .interact()
        .map_err(CommandError::from)
}
