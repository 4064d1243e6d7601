use crate::cli::io;
use crate::cli::output::section as output_section;
use crate::cli::registry::{CommandEntry, CommandRegistry};

/// Lists commands by section, then points at the quickest first step.
pub fn print_overview(registry: &CommandRegistry) {
    output_section("Available commands");
    for (title, entries) in registry.sections() {
        io::print_info(format!("{title}:"));
        for entry in entries {
            io::print_info(format!("  {:<16} {}", entry.name, entry.description));
        }
    }
    io::print_hint("New here? Try `presets`, then `quick 20000 4 0 Kindle`.");
    io::print_info("Use `help <command>` for details.");
}

pub fn print_command(registry: &CommandRegistry, entry: &CommandEntry) {
    output_section(format!("Help: {}", entry.name));
    if let Some(section) = registry.section_of(entry.name) {
        io::print_field("Section", 11, section);
    }
    io::print_field("Description", 11, entry.description);
    io::print_field("Usage", 11, entry.usage);
    if entry.usage.contains("<price>") {
        io::print_info("  Prices accept `150000`, `150,000` or `¥150,000`.");
    }
}
