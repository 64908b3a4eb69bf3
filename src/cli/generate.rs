//! Generate command implementation

use anyhow::{Context, Result};
use clap::Args;
use console::style;
use std::io::IsTerminal;
use std::path::PathBuf;

use super::prompt::{confirm_selection, print_selection_summary, select_rules};
use super::utils::parse_csv;
use crate::config::{merge_cli_with_config, CliOverrides};
use crate::domain::{Config, RuleRecord, RulesError};
use crate::output::OutputWriter;
use crate::render::CombinedDocument;
use crate::scan::RuleScanner;
use crate::select::parse_selection;
use crate::utils::{format_with_commas, read_text_strict};

#[derive(Args, Debug, Default)]
pub struct GenerateArgs {
    /// Directory containing rule files [default: rules]
    #[arg(long, value_name = "DIR")]
    pub rules_dir: Option<PathBuf>,

    /// Output file name [default: AGENT.md]
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Skip backing up existing output file
    #[arg(long)]
    pub no_backup: bool,

    /// Skip generating table of contents
    #[arg(long)]
    pub no_toc: bool,

    /// Rule file extensions (comma-separated) [default: md]
    #[arg(long, value_name = "EXTS")]
    pub extensions: Option<String>,

    /// Select rules without prompting, e.g. "1,3-5,7" or "all"
    #[arg(short, long, value_name = "EXPR")]
    pub select: Option<String>,

    /// Do not ask for confirmation before writing
    #[arg(short, long)]
    pub yes: bool,
}

impl GenerateArgs {
    fn overrides(&self) -> CliOverrides {
        CliOverrides {
            rules_dir: self.rules_dir.clone(),
            output: self.output.clone(),
            backup: if self.no_backup { Some(false) } else { None },
            toc: if self.no_toc { Some(false) } else { None },
            extensions: parse_csv(&self.extensions),
        }
    }
}

pub fn run(args: GenerateArgs, file_config: Config) -> Result<()> {
    let config = merge_cli_with_config(file_config, args.overrides());

    match generate(&args, &config) {
        Err(e) if is_cancelled(&e) => {
            println!("\n{}", style("Operation cancelled by user.").yellow());
            Ok(())
        }
        other => other,
    }
}

fn is_cancelled(err: &anyhow::Error) -> bool {
    err.downcast_ref::<RulesError>().is_some_and(RulesError::is_cancelled)
}

fn generate(args: &GenerateArgs, config: &Config) -> Result<()> {
    let rules_dir = &config.rules_dir;
    println!("{}", style(format!("Discovering rule files in: {}", rules_dir.display())).cyan());

    let rules = RuleScanner::new(rules_dir.clone()).extensions(config.extensions.clone()).discover();
    if rules.is_empty() {
        anyhow::bail!(
            "No rule files found in {} (expected files ending in .{})",
            rules_dir.display(),
            config.extensions.join(", .")
        );
    }
    println!("{}", style(format!("Found {} rule files", rules.len())).green());

    let indices = choose(args, &rules)?;
    let selected: Vec<&RuleRecord> = indices.iter().map(|&i| &rules[i]).collect();

    println!("\n{}", style(format!("Processing {} selected rules...", selected.len())).green());
    let mut items: Vec<(&str, String)> = Vec::with_capacity(selected.len());
    for rule in &selected {
        println!("Processing: {}", rule.filename());
        let content = read_text_strict(rule.path())
            .with_context(|| format!("Error processing {}", rule.filename()))?;
        items.push((rule.title(), content));
    }
    let combined = CombinedDocument::assemble(&items, config.toc).render();

    let output = &config.output;
    println!("\n{}", style(format!("Writing combined rules to: {}", output.display())).cyan());
    let writer = OutputWriter::new(output.clone(), config.backup);

    if let Some(backup_path) = writer.backup_existing()? {
        println!("{}", style(format!("Created backup: {}", backup_path.display())).yellow());
    }
    writer.write_combined(&combined)?;

    if !writer.validate() {
        anyhow::bail!("Output file validation failed: {}", output.display());
    }

    println!("{}", style(format!("✓ Successfully generated {}", output.display())).green());
    println!(
        "{}",
        style(format!(
            "Combined {} rules into {} bytes",
            selected.len(),
            format_with_commas(combined.len() as u64)
        ))
        .dim()
    );
    Ok(())
}

/// Resolve which rules to combine, from `--select` or interactively.
fn choose(args: &GenerateArgs, rules: &[RuleRecord]) -> Result<Vec<usize>> {
    let interactive = std::io::stdin().is_terminal() && std::io::stdout().is_terminal();

    let Some(expr) = args.select.as_deref() else {
        if !interactive {
            anyhow::bail!(
                "Interactive selection needs a terminal; pass --select (e.g. --select all)"
            );
        }
        println!("\n{}", style("Select rules to combine:").cyan());
        return select_rules(rules);
    };

    let indices = parse_selection(expr, rules.len()).context("Invalid selection")?;
    if args.yes || !interactive {
        return Ok(indices);
    }

    print_selection_summary(rules, &indices);
    if confirm_selection()? {
        Ok(indices)
    } else {
        Err(RulesError::Cancelled.into())
    }
}
