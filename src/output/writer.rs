//! Output file writer.

use chrono::{DateTime, Local, TimeZone};
use std::fmt::Display;
use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::{RulesError, RulesResult};

pub const BACKUP_TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

/// Writes the combined document to one target path.
#[derive(Debug, Clone)]
pub struct OutputWriter {
    output_path: PathBuf,
    backup_enabled: bool,
}

impl OutputWriter {
    pub fn new(output_path: PathBuf, backup_enabled: bool) -> Self {
        Self { output_path, backup_enabled }
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    pub fn backup_enabled(&self) -> bool {
        self.backup_enabled
    }

    /// Copy the current target to `{stem}_backup_{YYYYMMDD_HHMMSS}{suffix}`.
    ///
    /// Returns `None` when backups are disabled or there is nothing to back up.
    /// Two backups within the same second share a name and the later one wins.
    pub fn backup_existing(&self) -> RulesResult<Option<PathBuf>> {
        self.backup_existing_at(Local::now())
    }

    pub fn backup_existing_at<Tz>(&self, now: DateTime<Tz>) -> RulesResult<Option<PathBuf>>
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        if !self.backup_enabled {
            tracing::debug!("Backup disabled, skipping backup creation");
            return Ok(None);
        }
        if !self.output_path.exists() {
            tracing::debug!(
                "Output file {} does not exist, no backup needed",
                self.output_path.display()
            );
            return Ok(None);
        }

        let stamp = now.format(BACKUP_TIMESTAMP_FORMAT).to_string();
        let backup_path = self.output_path.with_file_name(backup_file_name(&self.output_path, &stamp));

        fs::copy(&self.output_path, &backup_path).map_err(|e| {
            tracing::error!("Failed to create backup file {}: {}", backup_path.display(), e);
            RulesError::io(&backup_path, e)
        })?;

        tracing::info!("Created backup file: {}", backup_path.display());
        Ok(Some(backup_path))
    }

    /// Create missing parent directories and overwrite the target with `content`.
    pub fn write_combined(&self, content: &str) -> RulesResult<()> {
        if let Some(parent) = self.output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| {
                tracing::error!("Failed to create output directory {}: {}", parent.display(), e);
                RulesError::io(parent, e)
            })?;
        }

        fs::write(&self.output_path, content).map_err(|e| {
            tracing::error!("Failed to write output file {}: {}", self.output_path.display(), e);
            RulesError::io(&self.output_path, e)
        })?;

        tracing::info!("Successfully wrote combined rules to: {}", self.output_path.display());
        tracing::debug!("Output size: {} bytes", content.len());
        Ok(())
    }

    /// True iff the target is a non-empty regular file holding UTF-8 text
    /// that is not only whitespace.
    pub fn validate(&self) -> bool {
        let path = &self.output_path;
        let metadata = match fs::metadata(path) {
            Ok(m) => m,
            Err(_) => {
                tracing::warn!("Output file does not exist: {}", path.display());
                return false;
            }
        };
        if !metadata.is_file() {
            tracing::warn!("Output path is not a file: {}", path.display());
            return false;
        }
        if metadata.len() == 0 {
            tracing::warn!("Output file is empty: {}", path.display());
            return false;
        }

        let bytes = match fs::read(path) {
            Ok(b) => b,
            Err(e) => {
                tracing::error!("Error validating output file {}: {}", path.display(), e);
                return false;
            }
        };
        match std::str::from_utf8(&bytes) {
            Ok(text) if text.trim().is_empty() => {
                tracing::warn!("Output file contains only whitespace: {}", path.display());
                false
            }
            Ok(_) => {
                tracing::info!("Output file validation successful: {}", path.display());
                true
            }
            Err(e) => {
                tracing::warn!("Output file has encoding issues: {}, {}", path.display(), e);
                false
            }
        }
    }
}

/// `AGENT.md` + `20240101_120000` -> `AGENT_backup_20240101_120000.md`
pub fn backup_file_name(output_path: &Path, stamp: &str) -> String {
    let stem = output_path.file_stem().and_then(|s| s.to_str()).unwrap_or("output");
    match output_path.extension().and_then(|e| e.to_str()) {
        Some(ext) => format!("{stem}_backup_{stamp}.{ext}"),
        None => format!("{stem}_backup_{stamp}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use tempfile::TempDir;

    fn at(h: u32, m: u32, s: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 1, h, m, s).unwrap()
    }

    #[test]
    fn backup_file_name_keeps_suffix() {
        assert_eq!(
            backup_file_name(Path::new("out/AGENT.md"), "20240101_120000"),
            "AGENT_backup_20240101_120000.md"
        );
        assert_eq!(backup_file_name(Path::new("RULES"), "20240101_120000"), "RULES_backup_20240101_120000");
    }

    #[test]
    fn backup_copies_existing_content() {
        let tmp = TempDir::new().unwrap();
        let output = tmp.path().join("AGENT.md");
        fs::write(&output, "# Existing Content\n\nSome content.").unwrap();

        let writer = OutputWriter::new(output, true);
        let backup = writer.backup_existing_at(at(12, 0, 0)).unwrap().unwrap();

        assert_eq!(backup, tmp.path().join("AGENT_backup_20240101_120000.md"));
        assert_eq!(fs::read_to_string(&backup).unwrap(), "# Existing Content\n\nSome content.");
    }

    #[test]
    fn no_backup_when_target_missing() {
        let tmp = TempDir::new().unwrap();
        let writer = OutputWriter::new(tmp.path().join("AGENT.md"), true);
        assert!(writer.backup_existing().unwrap().is_none());
    }

    #[test]
    fn no_backup_when_disabled() {
        let tmp = TempDir::new().unwrap();
        let output = tmp.path().join("AGENT.md");
        fs::write(&output, "# Existing").unwrap();

        let writer = OutputWriter::new(output, false);
        assert!(!writer.backup_enabled());
        assert!(writer.backup_existing().unwrap().is_none());
        assert_eq!(fs::read_dir(tmp.path()).unwrap().count(), 1);
    }

    #[test]
    fn backups_at_different_seconds_are_distinct() {
        let tmp = TempDir::new().unwrap();
        let output = tmp.path().join("AGENT.md");
        fs::write(&output, "# Original Content").unwrap();
        let writer = OutputWriter::new(output.clone(), true);

        let first = writer.backup_existing_at(at(12, 0, 0)).unwrap().unwrap();
        fs::write(&output, "# Modified Content").unwrap();
        let second = writer.backup_existing_at(at(12, 0, 1)).unwrap().unwrap();

        assert_ne!(first, second);
        assert_eq!(fs::read_to_string(first).unwrap(), "# Original Content");
        assert_eq!(fs::read_to_string(second).unwrap(), "# Modified Content");
    }

    #[test]
    fn write_creates_parent_directories() {
        let tmp = TempDir::new().unwrap();
        let nested = tmp.path().join("nested/folder/AGENT.md");
        let writer = OutputWriter::new(nested.clone(), true);

        writer.write_combined("# Test Content").unwrap();
        assert_eq!(fs::read_to_string(nested).unwrap(), "# Test Content");
    }

    #[test]
    fn write_overwrites_existing_file() {
        let tmp = TempDir::new().unwrap();
        let output = tmp.path().join("AGENT.md");
        fs::write(&output, "# Old Content that is longer than the new one").unwrap();

        let writer = OutputWriter::new(output.clone(), true);
        writer.write_combined("# New").unwrap();
        assert_eq!(fs::read_to_string(output).unwrap(), "# New");
    }

    #[test]
    fn write_failure_names_the_path() {
        let tmp = TempDir::new().unwrap();
        let blocker = tmp.path().join("blocker");
        fs::write(&blocker, "a file, not a directory").unwrap();

        let writer = OutputWriter::new(blocker.join("AGENT.md"), true);
        let err = writer.write_combined("# Content").unwrap_err();
        assert!(matches!(err, RulesError::Io { .. }));
        assert!(err.to_string().contains("blocker"));
    }

    #[test]
    fn validate_accepts_written_text() {
        let tmp = TempDir::new().unwrap();
        let output = tmp.path().join("AGENT.md");
        fs::write(&output, "# Valid Content\n\nSome rules here.").unwrap();
        assert!(OutputWriter::new(output, true).validate());
    }

    #[test]
    fn validate_rejects_missing_empty_whitespace_and_binary() {
        let tmp = TempDir::new().unwrap();
        let missing = tmp.path().join("missing.md");
        let empty = tmp.path().join("empty.md");
        let blank = tmp.path().join("blank.md");
        let invalid = tmp.path().join("invalid.md");
        fs::write(&empty, "").unwrap();
        fs::write(&blank, "   \n\t\n").unwrap();
        fs::write(&invalid, [0xff, 0xfe, 0x00, 0x41]).unwrap();

        for path in [missing, empty, blank, invalid, tmp.path().to_path_buf()] {
            assert!(!OutputWriter::new(path.clone(), true).validate(), "{}", path.display());
        }
    }
}
