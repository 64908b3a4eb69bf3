//! CLI override merging

use crate::domain::config::normalize_extensions;
use crate::domain::Config;
use std::path::PathBuf;

/// Values supplied on the command line. `None` means "not given".
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub rules_dir: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub backup: Option<bool>,
    pub toc: Option<bool>,
    pub extensions: Option<Vec<String>>,
}

pub fn merge_cli_with_config(mut config: Config, cli: CliOverrides) -> Config {
    if let Some(rules_dir) = cli.rules_dir {
        config.rules_dir = rules_dir;
    }
    if let Some(output) = cli.output {
        config.output = output;
    }
    if let Some(backup) = cli.backup {
        config.backup = backup;
    }
    if let Some(toc) = cli.toc {
        config.toc = toc;
    }
    if let Some(extensions) = cli.extensions {
        let normalized = normalize_extensions(extensions);
        if !normalized.is_empty() {
            config.extensions = normalized;
        }
    }
    config
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_values_override_file_values() {
        let file = Config {
            rules_dir: PathBuf::from("from-file"),
            output: PathBuf::from("FILE.md"),
            backup: true,
            toc: true,
            extensions: vec!["md".to_string()],
        };
        let cli = CliOverrides {
            rules_dir: Some(PathBuf::from("from-cli")),
            backup: Some(false),
            extensions: Some(vec![".MDX".to_string()]),
            ..Default::default()
        };

        let merged = merge_cli_with_config(file, cli);
        assert_eq!(merged.rules_dir, PathBuf::from("from-cli"));
        assert_eq!(merged.output, PathBuf::from("FILE.md"));
        assert!(!merged.backup);
        assert!(merged.toc);
        assert_eq!(merged.extensions, vec!["mdx".to_string()]);
    }

    #[test]
    fn empty_overrides_keep_config() {
        let merged = merge_cli_with_config(Config::default(), CliOverrides::default());
        assert_eq!(merged, Config::default());
    }

    #[test]
    fn blank_extension_list_is_ignored() {
        let cli = CliOverrides { extensions: Some(vec![" ".to_string()]), ..Default::default() };
        let merged = merge_cli_with_config(Config::default(), cli);
        assert_eq!(merged.extensions, vec!["md".to_string()]);
    }
}
