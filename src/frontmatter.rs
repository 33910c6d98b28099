//! Frontmatter stripping.
//!
//! A frontmatter block is a leading run of lines opened and closed by lines
//! that are exactly `---`. Only the first such block at the very start of
//! the document is removed, together with any blank lines that follow it;
//! `---` delimiters elsewhere are left for the horizontal-rule stage.

/// Remove a leading frontmatter block.
///
/// Documents that do not open with `---`, or whose opening delimiter is
/// never closed, are returned unchanged.
///
/// # Examples
///
/// ```
/// use mdpreview::frontmatter::strip_frontmatter;
/// let out = strip_frontmatter("---\ntitle: x\n---\n# Heading\n");
/// assert_eq!(out, "# Heading\n");
/// ```
#[must_use]
pub fn strip_frontmatter(text: &str) -> String {
    let lines: Vec<&str> = text.lines().collect();
    if lines.first() != Some(&"---") {
        return text.to_string();
    }
    let Some(close) = lines.iter().skip(1).position(|l| *l == "---") else {
        return text.to_string();
    };

    let mut start = close + 2;
    while start < lines.len() && lines[start].trim().is_empty() {
        start += 1;
    }
    if start >= lines.len() {
        return String::new();
    }

    let mut out = lines[start..].join("\n");
    if text.ends_with('\n') {
        out.push('\n');
    }
    out
}
