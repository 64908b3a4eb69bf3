//! Plain-text rule tables for the terminal.

use console::style;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::domain::RuleRecord;
use crate::utils::format_with_commas;

const MAX_TITLE_WIDTH: usize = 56;
const COLUMN_GAP: &str = "  ";

#[derive(Clone, Copy, PartialEq, Eq)]
enum Align {
    Left,
    Right,
}

/// Render `rules` as a table of filename, title, size and token estimate,
/// optionally prefixed with a 1-based number column.
pub fn render_rule_table(heading: &str, rules: &[RuleRecord], numbered: bool) -> String {
    let mut columns: Vec<(&str, Align)> = Vec::new();
    if numbered {
        columns.push(("No.", Align::Right));
    }
    columns.extend([
        ("Filename", Align::Left),
        ("Title", Align::Left),
        ("Size", Align::Right),
        ("~Tokens", Align::Right),
    ]);

    let rows: Vec<Vec<String>> = rules
        .iter()
        .enumerate()
        .map(|(i, rule)| {
            let mut row = Vec::with_capacity(columns.len());
            if numbered {
                row.push((i + 1).to_string());
            }
            row.push(rule.filename().to_string());
            row.push(truncate_to_width(rule.title(), MAX_TITLE_WIDTH));
            row.push(size_label(rule.file_size()));
            row.push(token_label(rule.estimated_tokens()));
            row
        })
        .collect();

    let widths: Vec<usize> = columns
        .iter()
        .enumerate()
        .map(|(col, (name, _))| {
            rows.iter().map(|row| row[col].width()).chain([name.width()]).max().unwrap_or(0)
        })
        .collect();

    let mut out = String::new();
    out.push_str(&style(heading).bold().to_string());
    out.push('\n');

    let header: Vec<String> = columns
        .iter()
        .zip(&widths)
        .map(|((name, align), width)| style(pad(name, *width, *align)).bold().to_string())
        .collect();
    out.push_str(header.join(COLUMN_GAP).trim_end());
    out.push('\n');

    let rule_line: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    out.push_str(&rule_line.join(COLUMN_GAP));
    out.push('\n');

    for row in &rows {
        let cells: Vec<String> = row
            .iter()
            .zip(columns.iter().zip(&widths))
            .map(|(cell, ((name, align), width))| colorize(name, pad(cell, *width, *align)))
            .collect();
        out.push_str(cells.join(COLUMN_GAP).trim_end());
        out.push('\n');
    }

    out
}

pub fn size_label(size: u64) -> String {
    if size > 0 {
        format!("{} bytes", format_with_commas(size))
    } else {
        "unknown".to_string()
    }
}

pub fn token_label(tokens: u64) -> String {
    format!("~{}", format_with_commas(tokens))
}

fn colorize(column: &str, cell: String) -> String {
    match column {
        "No." => style(cell).cyan().to_string(),
        "Filename" => style(cell).magenta().to_string(),
        "Title" => style(cell).green().to_string(),
        "Size" => style(cell).blue().to_string(),
        _ => style(cell).yellow().to_string(),
    }
}

fn pad(text: &str, width: usize, align: Align) -> String {
    let fill = " ".repeat(width.saturating_sub(text.width()));
    match align {
        Align::Left => format!("{text}{fill}"),
        Align::Right => format!("{fill}{text}"),
    }
}

fn truncate_to_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > max_width.saturating_sub(1) {
            break;
        }
        used += w;
        out.push(ch);
    }
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn record(dir: &TempDir, name: &str, title: &str, size: u64) -> RuleRecord {
        let path = dir.path().join(name);
        fs::write(&path, "# x").unwrap();
        RuleRecord::new(path, title, size).unwrap()
    }

    #[test]
    fn numbered_table_lists_every_rule() {
        console::set_colors_enabled(false);
        let tmp = TempDir::new().unwrap();
        let rules = vec![
            record(&tmp, "python.md", "Python Style", 1234),
            record(&tmp, "rust.md", "Rust Style", 40),
        ];

        let table = render_rule_table("Available Rule Files", &rules, true);
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines[0], "Available Rule Files");
        assert!(lines[1].contains("No.") && lines[1].contains("~Tokens"));
        assert!(lines[3].trim_start().starts_with("1  python.md"));
        assert!(lines[3].contains("1,234 bytes"));
        assert!(lines[3].ends_with("~308"));
        assert!(lines[4].trim_start().starts_with("2  rust.md"));
        assert_eq!(lines.len(), 5);
    }

    #[test]
    fn unnumbered_table_has_no_index_column() {
        console::set_colors_enabled(false);
        let tmp = TempDir::new().unwrap();
        let rules = vec![record(&tmp, "a.md", "A", 0)];

        let table = render_rule_table("Rule Files", &rules, false);
        assert!(!table.contains("No."));
        assert!(table.contains("unknown"));
        assert!(table.contains("~0"));
    }

    #[test]
    fn long_titles_are_truncated() {
        let long = "x".repeat(100);
        let short = truncate_to_width(&long, 10);
        assert_eq!(short.width(), 10);
        assert!(short.ends_with('…'));
    }
}
