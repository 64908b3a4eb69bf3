//! Error taxonomy for rule discovery, selection and output.

use std::path::PathBuf;

/// Errors raised by the library layer.
///
/// Command code wraps these in `anyhow` with extra context; the interactive
/// shell recovers from [`RulesError::InvalidSelection`] locally and treats
/// [`RulesError::Cancelled`] as a clean exit.
#[derive(Debug, thiserror::Error)]
pub enum RulesError {
    /// Malformed construction input, e.g. a record over a missing path.
    #[error("validation error: {0}")]
    Validation(String),

    /// Selection expression violates the grammar or the valid range.
    #[error("{0}")]
    InvalidSelection(String),

    /// File exists but cannot be read or decoded as UTF-8.
    #[error("cannot read {}: {reason}", path.display())]
    NotReadable { path: PathBuf, reason: String },

    /// Write or backup failure.
    #[error("I/O failure on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Operator interrupted a prompt.
    #[error("operation cancelled by user")]
    Cancelled,
}

impl RulesError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io { path: path.into(), source }
    }

    pub fn not_readable(path: impl Into<PathBuf>, reason: impl ToString) -> Self {
        Self::NotReadable { path: path.into(), reason: reason.to_string() }
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }
}

pub type RulesResult<T> = std::result::Result<T, RulesError>;
