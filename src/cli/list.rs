//! List-rules command implementation

use anyhow::Result;
use clap::{Args, ValueEnum};
use console::style;
use serde_json::json;
use std::path::PathBuf;

use super::table::render_rule_table;
use super::utils::parse_csv;
use crate::config::{merge_cli_with_config, CliOverrides};
use crate::domain::Config;
use crate::scan::RuleScanner;
use crate::utils::format_with_commas;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum ListFormat {
    #[default]
    Text,
    Json,
}

#[derive(Args, Debug, Default)]
pub struct ListArgs {
    /// Directory containing rule files [default: rules]
    #[arg(long, value_name = "DIR")]
    pub rules_dir: Option<PathBuf>,

    /// Rule file extensions (comma-separated) [default: md]
    #[arg(long, value_name = "EXTS")]
    pub extensions: Option<String>,

    /// Output format
    #[arg(long, value_enum, default_value_t = ListFormat::Text)]
    pub format: ListFormat,
}

pub fn run(args: ListArgs, file_config: Config) -> Result<()> {
    let overrides = CliOverrides {
        rules_dir: args.rules_dir.clone(),
        extensions: parse_csv(&args.extensions),
        ..Default::default()
    };
    let config = merge_cli_with_config(file_config, overrides);
    let rules_dir = &config.rules_dir;

    let mut scanner = RuleScanner::new(rules_dir.clone()).extensions(config.extensions.clone());
    let rules = scanner.discover();
    let total_tokens: u64 = rules.iter().map(|r| r.estimated_tokens()).sum();

    if args.format == ListFormat::Json {
        let doc = json!({
            "rules_dir": rules_dir,
            "rules": rules,
            "total_rules": rules.len(),
            "total_tokens": total_tokens,
            "stats": scanner.stats(),
        });
        println!("{}", serde_json::to_string_pretty(&doc)?);
        return Ok(());
    }

    println!("{}\n", style(format!("Listing rule files in: {}", rules_dir.display())).cyan());
    if rules.is_empty() {
        println!("{}", style(format!("No rule files found in {}", rules_dir.display())).red());
        return Ok(());
    }

    println!("{}", render_rule_table(&format!("Rule Files in {}", rules_dir.display()), &rules, false));
    println!(
        "{}",
        style(format!(
            "Total: {} rule files, ~{} estimated tokens",
            rules.len(),
            format_with_commas(total_tokens)
        ))
        .dim()
    );

    Ok(())
}
