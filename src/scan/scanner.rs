//! Rule file discovery

use crate::domain::{default_extensions, RuleRecord};
use crate::scan::metadata::{extract_description, extract_title};
use crate::utils::read_text_strict;
use globset::{GlobBuilder, GlobSet, GlobSetBuilder};
use ignore::WalkBuilder;
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Counters collected during one discovery pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ScanStats {
    pub entries_seen: usize,
    pub files_included: usize,
    pub skipped_extension: usize,
    pub skipped_not_file: usize,
    pub skipped_unreadable: usize,
    pub total_bytes_included: u64,
}

/// Scanner that lists rule files directly inside one directory.
pub struct RuleScanner {
    rules_dir: PathBuf,
    extensions: Vec<String>,
    stats: ScanStats,
}

impl RuleScanner {
    /// Create a scanner over `rules_dir` matching `*.md`.
    pub fn new(rules_dir: PathBuf) -> Self {
        Self { rules_dir, extensions: default_extensions(), stats: ScanStats::default() }
    }

    /// Set rule file extensions (lowercase, without the dot)
    pub fn extensions(mut self, extensions: Vec<String>) -> Self {
        self.extensions = extensions;
        self
    }

    fn build_name_globset(&self) -> Option<GlobSet> {
        let mut builder = GlobSetBuilder::new();
        for ext in &self.extensions {
            match GlobBuilder::new(&format!("*.{ext}")).case_insensitive(true).build() {
                Ok(glob) => {
                    builder.add(glob);
                }
                Err(e) => tracing::warn!("Ignoring invalid rule extension '{}': {}", ext, e),
            }
        }
        builder.build().ok()
    }

    /// Discover rule files.
    ///
    /// Never fails: a missing directory yields an empty list and any file that
    /// cannot be read as UTF-8 text is left out. Results are sorted by file
    /// name.
    pub fn discover(&mut self) -> Vec<RuleRecord> {
        self.stats = ScanStats::default();
        tracing::info!("Starting rule discovery in: {}", self.rules_dir.display());

        if !self.rules_dir.is_dir() {
            tracing::warn!(
                "Rules directory does not exist or is not a directory: {}",
                self.rules_dir.display()
            );
            return Vec::new();
        }

        let Some(name_filter) = self.build_name_globset() else {
            return Vec::new();
        };

        let walker = WalkBuilder::new(&self.rules_dir)
            .standard_filters(false)
            .follow_links(false)
            .max_depth(Some(1))
            .build();

        let mut candidates: Vec<PathBuf> = Vec::new();
        for entry_result in walker {
            let entry = match entry_result {
                Ok(e) => e,
                Err(e) => {
                    tracing::debug!("Skipping unreadable directory entry: {}", e);
                    continue;
                }
            };
            if entry.depth() == 0 {
                continue;
            }
            self.stats.entries_seen += 1;

            let path = entry.path();
            if !name_filter.is_match(entry.file_name()) {
                self.stats.skipped_extension += 1;
                continue;
            }
            if !path.is_file() {
                tracing::debug!("Path is not a file: {}", path.display());
                self.stats.skipped_not_file += 1;
                continue;
            }
            candidates.push(path.to_path_buf());
        }

        tracing::info!("Found {} markdown files to process", candidates.len());
        candidates.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

        let mut rules = Vec::with_capacity(candidates.len());
        for path in candidates {
            match self.load_rule(&path) {
                Some(rule) => {
                    tracing::debug!("Added rule file: {} (title: '{}')", rule.filename(), rule.title());
                    self.stats.files_included += 1;
                    self.stats.total_bytes_included += rule.file_size();
                    rules.push(rule);
                }
                None => self.stats.skipped_unreadable += 1,
            }
        }

        tracing::info!("Successfully discovered {} rule files", rules.len());
        rules
    }

    fn load_rule(&self, path: &Path) -> Option<RuleRecord> {
        let content = match read_text_strict(path) {
            Ok(c) => c,
            Err(e) => {
                tracing::debug!("{}", e);
                return None;
            }
        };

        let file_size = match path.metadata() {
            Ok(m) => m.len(),
            Err(e) => {
                tracing::warn!("Failed to stat rule file {}: {}", path.display(), e);
                return None;
            }
        };

        let title = extract_title(&content, path);
        match RuleRecord::new(path, &title, file_size) {
            Ok(rule) => Some(rule.with_description(extract_description(&content))),
            Err(e) => {
                tracing::warn!("Failed to process rule file {}: {}", path.display(), e);
                None
            }
        }
    }

    /// Get discovery statistics
    pub fn stats(&self) -> &ScanStats {
        &self.stats
    }
}
