//! Writing the combined document, with optional backup and post-write check.

pub mod writer;

pub use writer::{backup_file_name, OutputWriter, BACKUP_TIMESTAMP_FORMAT};
