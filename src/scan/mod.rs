//! Rule file discovery and metadata extraction

use crate::domain::RuleRecord;
use std::path::Path;

pub mod metadata;
pub mod scanner;

pub use metadata::{extract_title, find_title};
pub use scanner::{RuleScanner, ScanStats};

/// Discover `*.md` rule files directly inside `rules_dir`.
pub fn discover_rules<P: AsRef<Path>>(rules_dir: P) -> Vec<RuleRecord> {
    RuleScanner::new(rules_dir.as_ref().to_path_buf()).discover()
}
