//! Markdown rendering: retitled sections, table of contents, combined document

pub mod document;
pub mod section;
pub mod toc;

pub use document::CombinedDocument;
pub use section::format_section;
pub use toc::{anchor_for, build_table_of_contents};
