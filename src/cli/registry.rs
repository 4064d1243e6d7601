//! Command table behind the shell. Commands are registered in sections
//! (basket, calculation, history, ...) so `help` can list them the way a
//! session usually flows: fill the basket, calculate, look back.

use std::collections::HashMap;

use tracing::warn;

use crate::cli::core::CommandResult;
use crate::cli::shell_context::ShellContext;

pub type CommandHandler = fn(&mut ShellContext, &[&str]) -> CommandResult;

/// A shell command as typed (`quick`, `history-remove`), with its help text.
pub struct CommandEntry {
    pub name: &'static str,
    pub description: &'static str,
    pub usage: &'static str,
    pub handler: CommandHandler,
}

impl CommandEntry {
    pub const fn new(
        name: &'static str,
        description: &'static str,
        usage: &'static str,
        handler: CommandHandler,
    ) -> Self {
        Self {
            name,
            description,
            usage,
            handler,
        }
    }
}

struct Section {
    title: &'static str,
    names: Vec<&'static str>,
}

struct Registered {
    section: usize,
    entry: CommandEntry,
}

#[derive(Default)]
pub struct CommandRegistry {
    commands: HashMap<&'static str, Registered>,
    sections: Vec<Section>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `entries` under a help heading. A name already taken keeps its
    /// first registration.
    pub fn register_section(
        &mut self,
        title: &'static str,
        entries: impl IntoIterator<Item = CommandEntry>,
    ) {
        let section = self.sections.len();
        let mut names = Vec::new();
        for entry in entries {
            let name = entry.name;
            if self.commands.contains_key(name) {
                warn!(command = name, "duplicate command ignored");
                continue;
            }
            names.push(name);
            self.commands.insert(name, Registered { section, entry });
        }
        self.sections.push(Section { title, names });
    }

    /// Case-insensitive lookup.
    pub fn get(&self, name: &str) -> Option<&CommandEntry> {
        self.commands
            .get(name.to_ascii_lowercase().as_str())
            .map(|registered| &registered.entry)
    }

    pub fn section_of(&self, name: &str) -> Option<&'static str> {
        self.commands
            .get(name.to_ascii_lowercase().as_str())
            .and_then(|registered| self.sections.get(registered.section))
            .map(|section| section.title)
    }

    /// Help headings with their commands, both in registration order.
    pub fn sections(&self) -> Vec<(&'static str, Vec<&CommandEntry>)> {
        self.sections
            .iter()
            .map(|section| {
                let entries = section
                    .names
                    .iter()
                    .filter_map(|name| self.commands.get(name))
                    .map(|registered| &registered.entry)
                    .collect();
                (section.title, entries)
            })
            .collect()
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.sections
            .iter()
            .flat_map(|section| section.names.iter().copied())
    }

    pub fn handler(&self, name: &str) -> Option<CommandHandler> {
        self.get(name).map(|entry| entry.handler)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn noop(_context: &mut ShellContext, _args: &[&str]) -> CommandResult {
        Ok(())
    }

    #[test]
    fn groups_commands_and_ignores_duplicates() {
        let mut registry = CommandRegistry::new();
        registry.register_section(
            "Basket",
            [
                CommandEntry::new("add", "Add a product", "add", noop),
                CommandEntry::new("list", "Show the basket", "list", noop),
            ],
        );
        registry.register_section(
            "History",
            [
                CommandEntry::new("history", "Show history", "history", noop),
                CommandEntry::new("add", "Shadowed", "add", noop),
            ],
        );

        let names: Vec<_> = registry.names().collect();
        assert_eq!(names, vec!["add", "list", "history"]);
        assert_eq!(registry.get("ADD").map(|e| e.description), Some("Add a product"));
        assert_eq!(registry.section_of("history"), Some("History"));
        assert!(registry.handler("missing").is_none());

        let sections = registry.sections();
        assert_eq!(sections.len(), 2);
        assert_eq!(sections[1].1.len(), 1);
    }
}
