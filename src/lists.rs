//! Flat list conversion.
//!
//! Unordered `- ` items are converted first and each maximal run of
//! consecutive item lines is wrapped in a single `<ul>` container; runs
//! separated by a blank line stay separate. Ordered `N. ` items are
//! converted afterwards and are deliberately left as bare `<li>` elements
//! with no `<ol>` container, matching the output consumers already accept.

use std::sync::LazyLock;

use regex::{Captures, Regex};

static UNORDERED_ITEM_RE: LazyLock<Regex> =
    lazy_regex!(r"(?m)^- (.*)$", "valid unordered item regex");

static ORDERED_ITEM_RE: LazyLock<Regex> =
    lazy_regex!(r"(?m)^\d+\. (.*)$", "valid ordered item regex");

static LIST_RUN_RE: LazyLock<Regex> =
    lazy_regex!(r"(?m)(?:^<li>.*</li>\n?)+", "valid list run regex");

/// Convert `- ` lines into `<li>` elements and wrap each maximal run of
/// items in one `<ul>`.
///
/// Runs when ordered items are still plain `N. ` text, so only unordered
/// items are swept into the container.
#[must_use]
pub fn convert_unordered_lists(text: &str) -> String {
    let items = UNORDERED_ITEM_RE.replace_all(text, "<li>$1</li>");
    LIST_RUN_RE
        .replace_all(&items, |caps: &Captures<'_>| {
            let run = caps.get(0).map_or("", |m| m.as_str());
            let mut html = format!("<ul>{}</ul>", run.trim_end());
            if run.ends_with('\n') {
                html.push('\n');
            }
            html
        })
        .into_owned()
}

/// Convert `N. ` lines into bare `<li>` elements.
#[must_use]
pub fn convert_ordered_lists(text: &str) -> String {
    ORDERED_ITEM_RE.replace_all(text, "<li>$1</li>").into_owned()
}
