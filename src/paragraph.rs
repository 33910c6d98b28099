//! Paragraph wrapping, the final substitution stage.
//!
//! Every remaining non-blank line that does not already open with an
//! element tag (or hold a protected code placeholder) is wrapped in `<p>`.
//! This deliberately includes table rows and list items the earlier stages
//! failed to group, which then surface as plain paragraph text.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::fences::PLACEHOLDER;

static LINE_RE: LazyLock<Regex> = lazy_regex!(r"(?m)^(.+)$", "valid line regex");

/// Wrap remaining plain-text lines in paragraph elements.
#[must_use]
pub fn wrap_paragraphs(text: &str) -> String {
    LINE_RE
        .replace_all(text, |caps: &Captures<'_>| {
            let line = caps.get(1).map_or("", |m| m.as_str());
            let trimmed = line.trim();
            if trimmed.is_empty()
                || trimmed.starts_with('<')
                || trimmed.starts_with(PLACEHOLDER)
            {
                line.to_string()
            } else {
                format!("<p>{line}</p>")
            }
        })
        .into_owned()
}
