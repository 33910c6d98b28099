//! ATX heading conversion.

use std::sync::LazyLock;

use regex::{Captures, Regex};

// Counting the hashes in a single match gives longest-prefix-first
// behaviour: `#### text` can never be captured as an `h1` with literal
// leading hashes. Five or more hashes fail the match entirely and fall
// through to paragraph wrapping.
static HEADING_RE: LazyLock<Regex> =
    lazy_regex!(r"(?m)^(#{1,4}) (.*)$", "valid heading regex");

/// Convert `#` to `####` heading lines into `<h1>` to `<h4>` elements.
///
/// # Examples
///
/// ```
/// use mdpreview::headings::convert_headings;
/// assert_eq!(convert_headings("## Title"), "<h2>Title</h2>");
/// ```
#[must_use]
pub fn convert_headings(text: &str) -> String {
    HEADING_RE
        .replace_all(text, |caps: &Captures<'_>| {
            let level = caps.get(1).map_or(1, |m| m.as_str().len());
            let body = caps.get(2).map_or("", |m| m.as_str());
            format!("<h{level}>{body}</h{level}>")
        })
        .into_owned()
}
