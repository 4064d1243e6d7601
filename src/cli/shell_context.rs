use dialoguer::theme::ColorfulTheme;

use crate::{
    config::{Config, ConfigManager},
    core::Calculator,
    domain::Calculation,
};

use super::registry::CommandRegistry;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliMode {
    Interactive,
    Script,
}

pub struct ShellContext {
    pub mode: CliMode,
    pub registry: CommandRegistry,
    pub theme: ColorfulTheme,
    pub config_manager: ConfigManager,
    pub config: Config,
    /// Products collected with `add`/`preset`, evaluated together by `calc`.
    pub basket: Calculation,
    pub calculator: Calculator,
    pub last_command: Option<String>,
    pub running: bool,
}
