//! Config file loading

use crate::domain::Config;
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

const SECTION_NAME: &str = "rules-combiner";

const CANDIDATES: &[&str] = &[
    "rules-combiner.toml",
    ".rules-combiner.toml",
    "rules-combiner.yml",
    "rules-combiner.yaml",
    ".rules-combiner.yaml",
];

/// Load the config file, either `config_path` or the first candidate found in
/// `base_dir`.
///
/// An explicitly provided config that cannot be parsed is an error. An
/// auto-discovered one only logs a warning and falls back to defaults.
pub fn load_config(base_dir: &Path, config_path: Option<&Path>) -> Result<Config> {
    let explicit = config_path.is_some();

    let discovered = match config_path {
        Some(path) => Some(path.to_path_buf()),
        None => discover_config(base_dir),
    };

    let Some(config_file) = discovered else {
        return Ok(Config::default());
    };

    let parsed = fs::read_to_string(&config_file)
        .with_context(|| format!("Failed reading config file: {}", config_file.display()))
        .and_then(|content| parse_config(&content, &config_file));

    match parsed {
        Ok(cfg) => {
            tracing::debug!("Loaded config from {}", config_file.display());
            Ok(cfg)
        }
        Err(e) if explicit => Err(e),
        Err(e) => {
            tracing::warn!(
                "Failed to parse auto-discovered config {}: {:#}",
                config_file.display(),
                e
            );
            Ok(Config::default())
        }
    }
}

fn parse_config(content: &str, config_file: &Path) -> Result<Config> {
    let ext = config_file.extension().and_then(|e| e.to_str()).unwrap_or("").to_ascii_lowercase();
    match ext.as_str() {
        "toml" => parse_toml_config(content, config_file),
        "yaml" | "yml" => parse_yaml_config(content, config_file),
        other => anyhow::bail!(
            "Unsupported config extension '.{}' for file {}",
            other,
            config_file.display()
        ),
    }
}

/// Parse TOML config, honouring a nested `[rules-combiner]` table.
fn parse_toml_config(content: &str, config_file: &Path) -> Result<Config> {
    let raw: toml::Value = toml::from_str(content)
        .with_context(|| format!("Invalid TOML syntax: {}", config_file.display()))?;

    let config_val = match raw.get(SECTION_NAME) {
        Some(nested) => nested.clone(),
        None => raw,
    };

    config_val.try_into().with_context(|| format!("Invalid TOML config: {}", config_file.display()))
}

/// Parse YAML config, honouring a nested `rules-combiner:` mapping.
fn parse_yaml_config(content: &str, config_file: &Path) -> Result<Config> {
    let raw: serde_yaml::Value = serde_yaml::from_str(content)
        .with_context(|| format!("Invalid YAML syntax: {}", config_file.display()))?;

    // An empty document parses as null.
    if raw.is_null() {
        return Ok(Config::default());
    }

    let config_val = match raw.get(SECTION_NAME) {
        Some(nested) => nested.clone(),
        None => raw,
    };

    serde_yaml::from_value(config_val)
        .with_context(|| format!("Invalid YAML config: {}", config_file.display()))
}

fn discover_config(base_dir: &Path) -> Option<PathBuf> {
    CANDIDATES.iter().map(|candidate| base_dir.join(candidate)).find(|path| path.is_file())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_load_config_defaults_when_missing() {
        let tmp = TempDir::new().expect("tmp");
        let cfg = load_config(tmp.path(), None).expect("config");
        assert_eq!(cfg, Config::default());
    }

    #[test]
    fn test_load_toml_config() {
        let tmp = TempDir::new().expect("tmp");
        fs::write(
            tmp.path().join("rules-combiner.toml"),
            "rules_dir = 'my-rules'\noutput = 'CLAUDE.md'\nbackup = false\n",
        )
        .expect("write");

        let cfg = load_config(tmp.path(), None).expect("config");
        assert_eq!(cfg.rules_dir, PathBuf::from("my-rules"));
        assert_eq!(cfg.output, PathBuf::from("CLAUDE.md"));
        assert!(!cfg.backup);
        assert!(cfg.toc);
    }

    #[test]
    fn test_nested_toml_section() {
        let tmp = TempDir::new().expect("tmp");
        fs::write(
            tmp.path().join(".rules-combiner.toml"),
            "[rules-combiner]\ntoc = false\nextensions = ['.md', 'MDX']\n",
        )
        .expect("write");

        let cfg = load_config(tmp.path(), None).expect("config");
        assert!(!cfg.toc);
        assert_eq!(cfg.extensions, vec!["md".to_string(), "mdx".to_string()]);
    }

    #[test]
    fn test_load_yaml_config_with_comma_separated_extensions() {
        let tmp = TempDir::new().expect("tmp");
        fs::write(tmp.path().join("rules-combiner.yml"), "extensions: 'md, markdown'\nbackup: false\n")
            .expect("write");

        let cfg = load_config(tmp.path(), None).expect("config");
        assert_eq!(cfg.extensions, vec!["md".to_string(), "markdown".to_string()]);
        assert!(!cfg.backup);
    }

    #[test]
    fn test_empty_yaml_is_default() {
        let tmp = TempDir::new().expect("tmp");
        let path = tmp.path().join("rules-combiner.yaml");
        fs::write(&path, "").expect("write");

        let cfg = load_config(tmp.path(), Some(&path)).expect("config");
        assert_eq!(cfg, Config::default());
    }

    #[test]
    fn test_explicit_config_invalid_type_returns_err() {
        let tmp = TempDir::new().expect("tmp");
        let path = tmp.path().join("bad.toml");
        fs::write(&path, "extensions = 123\n").expect("write");

        assert!(load_config(tmp.path(), Some(&path)).is_err());
    }

    #[test]
    fn test_explicit_config_unknown_key_returns_err() {
        let tmp = TempDir::new().expect("tmp");
        let path = tmp.path().join("bad.toml");
        fs::write(&path, "rule_dir = 'typo'\n").expect("write");

        assert!(load_config(tmp.path(), Some(&path)).is_err());
    }

    #[test]
    fn test_explicit_config_unsupported_extension_returns_err() {
        let tmp = TempDir::new().expect("tmp");
        let path = tmp.path().join("config.json");
        fs::write(&path, "{}").expect("write");

        let err = load_config(tmp.path(), Some(&path)).unwrap_err();
        assert!(err.to_string().contains("Unsupported config extension"));
    }

    #[test]
    fn test_explicit_missing_config_returns_err() {
        let tmp = TempDir::new().expect("tmp");
        let path = tmp.path().join("nope.toml");
        assert!(load_config(tmp.path(), Some(&path)).is_err());
    }

    #[test]
    fn test_auto_discovered_invalid_config_returns_default() {
        let tmp = TempDir::new().expect("tmp");
        fs::write(tmp.path().join("rules-combiner.toml"), "backup = 'sometimes'\n").expect("write");

        let cfg = load_config(tmp.path(), None).expect("should not error on auto-discovery");
        assert_eq!(cfg, Config::default());
    }
}
