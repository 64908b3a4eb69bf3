//! Title and description extraction from rule file text.

use std::path::Path;

use crate::domain::rule::file_stem;

const DESCRIPTION_MAX_CHARS: usize = 120;

/// Return the text of the first level-1 header (`# `), if any.
///
/// Lines are trimmed before matching, so an indented `  # Title` counts.
pub fn find_title(content: &str) -> Option<&str> {
    content.lines().map(str::trim).find_map(|line| line.strip_prefix("# ")).map(str::trim)
}

/// Title for a rule file: its first level-1 header, else the file stem.
pub fn extract_title(content: &str, path: &Path) -> String {
    match find_title(content) {
        Some(title) if !title.is_empty() => {
            tracing::debug!("Extracted title from {}: '{}'", path.display(), title);
            title.to_string()
        }
        _ => {
            let fallback = title_from_path(path);
            tracing::debug!("No header found in {}, using filename: '{}'", path.display(), fallback);
            fallback
        }
    }
}

/// Fallback title derived from the file name without its extension.
pub fn title_from_path(path: &Path) -> String {
    file_stem(path)
}

/// First prose line of a rule file, shortened for listings.
///
/// Headers, fences, horizontal rules and list markers are skipped.
pub fn extract_description(content: &str) -> Option<String> {
    let line = content.lines().map(str::trim).find(|line| {
        !line.is_empty()
            && !line.starts_with('#')
            && !line.starts_with("```")
            && !line.starts_with("---")
            && !line.starts_with("- ")
            && !line.starts_with("* ")
    })?;

    if line.chars().count() <= DESCRIPTION_MAX_CHARS {
        return Some(line.to_string());
    }
    let mut short: String = line.chars().take(DESCRIPTION_MAX_CHARS - 3).collect();
    short.push_str("...");
    Some(short)
}
