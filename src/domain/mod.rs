//! Core domain types shared across discovery, selection, rendering and output.

pub mod config;
pub mod error;
pub mod rule;

pub use config::{default_extensions, Config};
pub use error::{RulesError, RulesResult};
pub use rule::RuleRecord;
