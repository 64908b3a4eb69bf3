//! rules-combiner: combine Markdown rule files into a single agent document
//!
//! Discovers rule files in a directory, lets the operator pick a subset, and
//! writes one combined Markdown document with a table of contents and
//! normalized section headers.

pub mod cli;
pub mod config;
pub mod domain;
pub mod output;
pub mod render;
pub mod scan;
pub mod select;
pub mod utils;

pub use domain::{Config, RuleRecord, RulesError};
