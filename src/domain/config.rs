//! Resolved run configuration.

use serde::{Deserialize, Deserializer, Serialize};
use std::path::PathBuf;

pub fn default_extensions() -> Vec<String> {
    vec!["md".to_string()]
}

/// Settings for one combine run, after file config and CLI flags are merged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Directory scanned (non-recursively) for rule files.
    pub rules_dir: PathBuf,
    /// Destination of the combined document.
    pub output: PathBuf,
    /// Keep a timestamped copy of the previous output before overwriting.
    pub backup: bool,
    /// Emit a table of contents ahead of the sections.
    pub toc: bool,
    /// Rule file extensions, lowercase and without the leading dot.
    #[serde(deserialize_with = "deserialize_extensions")]
    pub extensions: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            rules_dir: PathBuf::from("rules"),
            output: PathBuf::from("AGENT.md"),
            backup: true,
            toc: true,
            extensions: default_extensions(),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum StringOrList {
    String(String),
    List(Vec<String>),
}

fn deserialize_extensions<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = match StringOrList::deserialize(deserializer)? {
        StringOrList::String(s) => s.split(',').map(str::to_string).collect(),
        StringOrList::List(v) => v,
    };
    Ok(normalize_extensions(raw))
}

/// Trim, lowercase and strip leading dots; empty entries are dropped.
pub fn normalize_extensions<I, S>(raw: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut out: Vec<String> = Vec::new();
    for ext in raw {
        let ext = ext.as_ref().trim().trim_start_matches('.').to_lowercase();
        if !ext.is_empty() && !out.contains(&ext) {
            out.push(ext);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_cli_defaults() {
        let cfg = Config::default();
        assert_eq!(cfg.rules_dir, PathBuf::from("rules"));
        assert_eq!(cfg.output, PathBuf::from("AGENT.md"));
        assert!(cfg.backup);
        assert!(cfg.toc);
        assert_eq!(cfg.extensions, vec!["md".to_string()]);
    }

    #[test]
    fn normalize_extensions_strips_dots_and_dedups() {
        let exts = normalize_extensions([".MD", " markdown ", "md", ""]);
        assert_eq!(exts, vec!["md".to_string(), "markdown".to_string()]);
    }
}
