use crate::types::Entry;
use colored::Colorize;
use comfy_table::{Attribute, Cell, Color, Table};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Select(usize),
    Refresh,
    Up,
    Quit,
    Invalid,
}

#[must_use]
pub fn parse_command(line: &str) -> Command {
    let input = line.trim();
    match input.to_ascii_lowercase().as_str() {
        "" => Command::Refresh,
        ".." | "u" | "up" => Command::Up,
        "q" | "quit" | "exit" => Command::Quit,
        other => other
            .parse::<usize>()
            .map_or(Command::Invalid, Command::Select),
    }
}

/// Numbered listing: 0 is the parent directory, entry `i` is shown as `i + 1`.
#[must_use]
pub fn render_listing(current_path: &str, entries: &[Entry]) -> String {
    let mut table = Table::new();
    table.load_preset(comfy_table::presets::UTF8_HORIZONTAL_ONLY);
    table.set_header(vec!["#", "Type", "Name", "Size", "Modified"]);

    table.add_row(vec![
        Cell::new(0),
        Cell::new(""),
        Cell::new("[Parent Directory]").add_attribute(Attribute::Italic),
        Cell::new(""),
        Cell::new(""),
    ]);

    for (i, entry) in entries.iter().enumerate() {
        let (marker, color) = if entry.is_directory {
            ("[D]", Color::Cyan)
        } else {
            ("[F]", Color::White)
        };
        let size = if entry.is_directory {
            "-".to_string()
        } else {
            human_bytes::human_bytes(entry.size as f64)
        };
        let modified = entry.modified.map_or_else(
            || "-".to_string(),
            |m| m.format("%Y-%m-%d %H:%M").to_string(),
        );

        table.add_row(vec![
            Cell::new(i + 1),
            Cell::new(marker).fg(color),
            Cell::new(&entry.name).fg(color),
            Cell::new(size),
            Cell::new(modified),
        ]);
    }

    let mut out = format!("Current directory: {}\n", current_path.cyan());
    if entries.is_empty() {
        out.push_str(&format!("{}\n", "(empty or unreadable)".yellow()));
    }
    out.push_str(&table.to_string());
    out
}
