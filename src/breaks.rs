//! Horizontal rule conversion.
//!
//! Runs after frontmatter stripping, so a leading `---` pair has already
//! been consumed and only interior rules remain.

use std::sync::LazyLock;

use regex::Regex;

static RULE_RE: LazyLock<Regex> =
    lazy_regex!(r"(?m)^[ \t]*---[ \t]*$", "valid horizontal rule regex");

/// Convert lines containing only `---` (with optional surrounding
/// whitespace) into `<hr>` elements.
#[must_use]
pub fn convert_rules(text: &str) -> String {
    RULE_RE.replace_all(text, "<hr>").into_owned()
}
