//! Blockquote conversion.
//!
//! Quoting is line-granular: each `> ` line becomes its own
//! `<blockquote>` element and consecutive quoted lines are not merged.

use std::sync::LazyLock;

use regex::Regex;

static BLOCKQUOTE_RE: LazyLock<Regex> =
    lazy_regex!(r"(?m)^> (.*)$", "valid blockquote regex");

/// Convert lines beginning with `> ` into blockquote elements.
#[must_use]
pub fn convert_blockquotes(text: &str) -> String {
    BLOCKQUOTE_RE
        .replace_all(text, "<blockquote>$1</blockquote>")
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_quoted_line() {
        assert_eq!(
            convert_blockquotes("> quoted"),
            "<blockquote>quoted</blockquote>"
        );
    }

    #[test]
    fn consecutive_quotes_stay_separate() {
        assert_eq!(
            convert_blockquotes("> a\n> b"),
            "<blockquote>a</blockquote>\n<blockquote>b</blockquote>"
        );
    }

    #[test]
    fn marker_must_start_the_line() {
        assert_eq!(convert_blockquotes("a > b"), "a > b");
    }
}
