//! Per-rule section formatting.

pub const NO_CONTENT_NOTICE: &str = "*No content available.*";

/// Retitle one rule's content for the combined document.
///
/// The first line that starts with `# ` (after trimming) becomes `# {title}`;
/// later level-1 headers and every other line are left untouched. Content
/// without a level-1 header gets `# {title}` and a blank line prepended.
/// Whitespace-only content becomes a header plus a no-content notice. The
/// result always ends with exactly one blank line.
pub fn format_section(content: &str, title: &str) -> String {
    if content.trim().is_empty() {
        return format!("# {title}\n\n{NO_CONTENT_NOTICE}\n\n");
    }

    let header = format!("# {title}");
    let mut replaced = false;
    let mut lines: Vec<String> = Vec::new();

    for line in content.split('\n') {
        if !replaced && line.trim().starts_with("# ") {
            replaced = true;
            let cr = if line.ends_with('\r') { "\r" } else { "" };
            lines.push(format!("{header}{cr}"));
        } else {
            lines.push(line.to_string());
        }
    }

    if !replaced {
        lines.insert(0, header);
        lines.insert(1, String::new());
    }

    // Drop trailing blank lines; trailing spaces on the last content line are
    // a Markdown hard break and stay.
    while lines.last().is_some_and(|line| line.trim().is_empty()) {
        lines.pop();
    }

    let mut formatted = lines.join("\n");
    let kept = formatted.trim_end_matches('\r').len();
    formatted.truncate(kept);
    formatted.push_str("\n\n");
    formatted
}
