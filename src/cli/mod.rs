//! Command-line interface for rules-combiner
//!
//! Provides `generate`, `list-rules` and `completions` subcommands.

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::load_config;

pub mod generate;
pub mod list;
pub mod prompt;
pub mod table;
mod utils;

/// Combine Markdown rule files into a single AGENT.md
#[derive(Parser)]
#[command(name = "rules-combiner")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging (sets log level to DEBUG)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Config file (TOML or YAML); defaults to rules-combiner.toml if present
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Select rule files interactively and combine them into one document
    Generate(generate::GenerateArgs),

    /// List available rule files with titles, sizes and token estimates
    ListRules(list::ListArgs),

    /// Print shell completions
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    // Wire verbose flag to the tracing log level.
    let filter = if cli.verbose {
        EnvFilter::from_default_env().add_directive(Level::DEBUG.into())
    } else {
        EnvFilter::from_default_env().add_directive(Level::WARN.into())
    };
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init();

    if let Commands::Completions { shell } = cli.command {
        clap_complete::generate(shell, &mut Cli::command(), "rules-combiner", &mut std::io::stdout());
        return Ok(());
    }

    let cwd = std::env::current_dir()?;
    let file_config = load_config(&cwd, cli.config.as_deref())?;

    match cli.command {
        Commands::Generate(args) => generate::run(args, file_config),
        Commands::ListRules(args) => list::run(args, file_config),
        Commands::Completions { .. } => Ok(()),
    }
}
