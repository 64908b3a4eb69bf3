//! Discovered rule file metadata.

use serde::Serialize;
use std::path::{Path, PathBuf};

use super::error::{RulesError, RulesResult};
use crate::utils::estimate_tokens_from_size;

/// One discovered rule file.
///
/// Built once per valid file by the scanner and never mutated afterwards;
/// fields are only reachable through accessors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RuleRecord {
    path: PathBuf,
    filename: String,
    title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    file_size: u64,
    estimated_tokens: u64,
    is_readable: bool,
}

impl RuleRecord {
    /// Create a record over an existing regular file.
    ///
    /// An empty `title` falls back to the file stem. When `file_size > 0` the
    /// token estimate is derived from it; use [`RuleRecord::with_estimated_tokens`]
    /// to supply one explicitly.
    pub fn new(path: impl Into<PathBuf>, title: &str, file_size: u64) -> RulesResult<Self> {
        let path = path.into();
        if !path.exists() {
            return Err(RulesError::Validation(format!(
                "Rule file does not exist: {}",
                path.display()
            )));
        }
        if !path.is_file() {
            return Err(RulesError::Validation(format!(
                "Path is not a file: {}",
                path.display()
            )));
        }

        let filename = path.file_name().and_then(|n| n.to_str()).unwrap_or("").to_string();
        let title = match title.trim() {
            "" => file_stem(&path),
            t => t.to_string(),
        };
        let estimated_tokens =
            if file_size > 0 { estimate_tokens_from_size(file_size) } else { 0 };

        Ok(Self {
            path,
            filename,
            title,
            description: None,
            file_size,
            estimated_tokens,
            is_readable: true,
        })
    }

    /// Override the derived token estimate. Zero keeps the derived value.
    pub fn with_estimated_tokens(mut self, tokens: u64) -> Self {
        if tokens > 0 {
            self.estimated_tokens = tokens;
        }
        self
    }

    pub fn with_description(mut self, description: Option<String>) -> Self {
        self.description = description;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn file_size(&self) -> u64 {
        self.file_size
    }

    pub fn estimated_tokens(&self) -> u64 {
        self.estimated_tokens
    }

    pub fn is_readable(&self) -> bool {
        self.is_readable
    }
}

/// File name without its extension, or the whole name when there is none.
pub(crate) fn file_stem(path: &Path) -> String {
    path.file_stem()
        .and_then(|s| s.to_str())
        .filter(|s| !s.is_empty())
        .or_else(|| path.file_name().and_then(|n| n.to_str()))
        .unwrap_or("untitled")
        .to_string()
}
