//! Interactive rule selection.

use anyhow::Result;
use console::{style, Term};
use dialoguer::{theme::ColorfulTheme, Confirm, Input};
use std::io::ErrorKind;

use super::table::{render_rule_table, token_label};
use crate::domain::{RuleRecord, RulesError};
use crate::select::parse_selection;
use crate::utils::format_with_commas;

/// Show the numbered rule table and prompt until the operator confirms a
/// selection. Returns 0-based indices into `rules`.
///
/// Invalid expressions are reported and the table is shown again. Ctrl-C at
/// any prompt, or Esc at the confirmation, yields [`RulesError::Cancelled`].
pub fn select_rules(rules: &[RuleRecord]) -> Result<Vec<usize>> {
    let theme = ColorfulTheme::default();

    loop {
        println!("{}", render_rule_table("Available Rule Files", rules, true));
        print_selection_help();

        let input = Input::<String>::with_theme(&theme)
            .with_prompt("Select rule files (e.g., 1,3-5 or 'all')")
            .allow_empty(true)
            .interact_text()
            .map_err(prompt_error)?;

        if input.trim().is_empty() {
            println!("{}", style("Please enter a selection.").red());
            continue;
        }

        let indices = match parse_selection(&input, rules.len()) {
            Ok(indices) => indices,
            Err(RulesError::InvalidSelection(msg)) => {
                println!("{}\n", style(format!("Invalid selection: {msg}")).red());
                continue;
            }
            Err(e) => return Err(e.into()),
        };

        print_selection_summary(rules, &indices);
        if confirm_selection()? {
            return Ok(indices);
        }
        println!();
    }
}

/// Ask "Proceed with this selection?". Esc or Ctrl-C cancels the run.
pub fn confirm_selection() -> Result<bool> {
    Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt("Proceed with this selection?")
        .default(true)
        .interact_opt()
        .map_err(prompt_error)?
        .ok_or_else(cancelled)
}

/// List the chosen rules with per-rule and total token estimates.
pub fn print_selection_summary(rules: &[RuleRecord], indices: &[usize]) {
    let chosen: Vec<&RuleRecord> = indices.iter().filter_map(|&i| rules.get(i)).collect();
    let total_tokens: u64 = chosen.iter().map(|r| r.estimated_tokens()).sum();
    let total_size: u64 = chosen.iter().map(|r| r.file_size()).sum();

    println!();
    println!("{}", style(format!("Selected {} rule files:", chosen.len())).bold());
    for rule in &chosen {
        println!(
            "  • {} {}",
            rule.filename(),
            style(format!("({} tokens)", token_label(rule.estimated_tokens()))).dim()
        );
    }
    println!();
    println!(
        "{}",
        style(format!(
            "Total: {} bytes, ~{} estimated tokens",
            format_with_commas(total_size),
            format_with_commas(total_tokens)
        ))
        .dim()
    );
    println!();
}

fn print_selection_help() {
    println!("{}", style("Selection options:").cyan().bold());
    println!("• Individual numbers: {}", style("1,3,5").green());
    println!("• Ranges: {} or {}", style("1-3").green(), style("2-5").green());
    println!("• Mixed: {}", style("1,3-5,7").green());
    println!("• All: {}", style("all").green());
    println!();
}

fn cancelled() -> anyhow::Error {
    let _ = Term::stdout().show_cursor();
    RulesError::Cancelled.into()
}

fn prompt_error(err: dialoguer::Error) -> anyhow::Error {
    match err {
        dialoguer::Error::IO(e) if e.kind() == ErrorKind::Interrupted => cancelled(),
        other => anyhow::Error::new(other).context("Failed to read selection from terminal"),
    }
}
