//! Table of contents and heading anchors.

use once_cell::sync::Lazy;
use regex::Regex;

pub const TOC_HEADER: &str = "# Table of Contents";
pub const NO_RULES_NOTICE: &str = "No rules selected.";

static WHITESPACE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[\s_]+").expect("valid whitespace regex"));
static DISALLOWED_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^a-z0-9\-]").expect("valid anchor charset regex"));
static HYPHENS_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"-+").expect("valid hyphen regex"));

/// GitHub-style anchor for a heading title.
///
/// Distinct titles may collapse to the same anchor; no suffix is added to
/// disambiguate them.
pub fn anchor_for(title: &str) -> String {
    let lowered = title.trim().to_lowercase();
    let hyphenated = WHITESPACE_RE.replace_all(&lowered, "-");
    let stripped = DISALLOWED_RE.replace_all(&hyphenated, "");
    let collapsed = HYPHENS_RE.replace_all(&stripped, "-");
    collapsed.trim_matches('-').to_string()
}

/// Numbered list of links, one per title, in the given order.
pub fn build_table_of_contents<I, S>(titles: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut lines = vec![TOC_HEADER.to_string(), String::new()];
    for (i, title) in titles.into_iter().enumerate() {
        let title = title.as_ref();
        lines.push(format!("{}. [{}](#{})", i + 1, title, anchor_for(title)));
    }

    if lines.len() == 2 {
        return format!("{TOC_HEADER}\n\n{NO_RULES_NOTICE}\n\n");
    }

    lines.push(String::new());
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anchor_from_title_with_punctuation() {
        assert_eq!(anchor_for("Mental Model: Test Rule"), "mental-model-test-rule");
    }

    #[test]
    fn anchor_collapses_separators() {
        assert_eq!(anchor_for("  Snake_case   and  spaces "), "snake-case-and-spaces");
        assert_eq!(anchor_for("A -- B"), "a-b");
        assert_eq!(anchor_for("--Leading and trailing--"), "leading-and-trailing");
    }

    #[test]
    fn anchor_drops_non_ascii_and_symbols() {
        assert_eq!(anchor_for("C++ & Rust (2024)!"), "c-rust-2024");
        assert_eq!(anchor_for("Café Rules"), "caf-rules");
    }

    #[test]
    fn colliding_anchors_are_not_disambiguated() {
        assert_eq!(anchor_for("Rule: One"), anchor_for("Rule One"));
    }

    #[test]
    fn empty_toc_has_notice() {
        let toc = build_table_of_contents(Vec::<String>::new());
        assert_eq!(toc, "# Table of Contents\n\nNo rules selected.\n\n");
    }

    #[test]
    fn toc_lists_titles_in_order() {
        let toc = build_table_of_contents(["Mental Model: Test Rule 1", "Python Style"]);
        assert_eq!(
            toc,
            "# Table of Contents\n\n\
             1. [Mental Model: Test Rule 1](#mental-model-test-rule-1)\n\
             2. [Python Style](#python-style)\n"
        );
    }
}
