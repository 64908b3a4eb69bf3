//! Strict UTF-8 reading for rule files.
//!
//! Rule files are small hand-written Markdown, so there is no encoding
//! detection: anything that is not valid UTF-8 is reported as not readable.

use std::path::Path;

use crate::domain::{RulesError, RulesResult};

/// Read a whole file as UTF-8.
///
/// A leading UTF-8 BOM is stripped. Missing files, permission problems and
/// invalid UTF-8 all map to [`RulesError::NotReadable`].
pub fn read_text_strict(path: &Path) -> RulesResult<String> {
    let bytes = std::fs::read(path).map_err(|e| RulesError::not_readable(path, e))?;
    let body = bytes.strip_prefix(&[0xef, 0xbb, 0xbf]).unwrap_or(&bytes);
    let text = std::str::from_utf8(body)
        .map_err(|e| RulesError::not_readable(path, format!("not valid UTF-8: {e}")))?;
    Ok(text.to_string())
}
