//! rules-combiner: combine Markdown rule files into a single agent document
//!
//! Picks rule files from a directory interactively and writes them out as one
//! Markdown file with a table of contents.

use anyhow::Result;

fn main() -> Result<()> {
    rules_combiner::cli::run()
}
