//! Combined document assembly.

use super::section::format_section;
use super::toc::build_table_of_contents;

/// Table of contents plus formatted sections, held in memory until written.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CombinedDocument {
    toc: Option<String>,
    sections: Vec<String>,
}

impl CombinedDocument {
    /// Build from `(title, raw content)` pairs in the order they should appear.
    pub fn assemble<T, C>(items: &[(T, C)], include_toc: bool) -> Self
    where
        T: AsRef<str>,
        C: AsRef<str>,
    {
        let toc = include_toc
            .then(|| build_table_of_contents(items.iter().map(|(title, _)| title.as_ref())));
        let sections = items
            .iter()
            .map(|(title, content)| format_section(content.as_ref(), title.as_ref()))
            .collect();
        Self { toc, sections }
    }

    pub fn toc(&self) -> Option<&str> {
        self.toc.as_deref()
    }

    pub fn sections(&self) -> &[String] {
        &self.sections
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Join the table of contents and sections with single newlines.
    pub fn render(&self) -> String {
        let mut parts: Vec<&str> = Vec::with_capacity(self.sections.len() + 1);
        if let Some(toc) = &self.toc {
            parts.push(toc);
        }
        parts.extend(self.sections.iter().map(String::as_str));
        parts.join("\n")
    }
}
