//! Inline formatting: emphasis, images, and links.
//!
//! The emphasis substitutions are an explicit ordered list. Bold-italic is
//! tested before bold so `***x***` is never mis-split into a stray bold
//! marker, and the asterisk family precedes the underscore family so
//! `**_x_**` resolves to nested strong/em elements. Images must be
//! converted before links because link syntax is a subset of image syntax.

use std::sync::LazyLock;

use regex::Regex;

static EMPHASIS_RULES: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| {
    [
        (r"\*\*\*(.+?)\*\*\*", "<strong><em>$1</em></strong>"),
        (r"\*\*(.+?)\*\*", "<strong>$1</strong>"),
        (r"\*(.+?)\*", "<em>$1</em>"),
        (r"___(.+?)___", "<strong><em>$1</em></strong>"),
        (r"__(.+?)__", "<strong>$1</strong>"),
        (r"_(.+?)_", "<em>$1</em>"),
    ]
    .into_iter()
    .map(|(pattern, replacement)| {
        (
            Regex::new(pattern).expect("valid emphasis regex"),
            replacement,
        )
    })
    .collect()
});

static IMAGE_RE: LazyLock<Regex> =
    lazy_regex!(r"!\[([^\]]*)\]\(([^)]*)\)", "valid image regex");

static LINK_RE: LazyLock<Regex> =
    lazy_regex!(r"\[([^\]]*)\]\(([^)]*)\)", "valid link regex");

/// Convert bold, italic, and combined emphasis markers.
///
/// # Examples
///
/// ```
/// use mdpreview::inline::convert_emphasis;
/// assert_eq!(
///     convert_emphasis("***x***"),
///     "<strong><em>x</em></strong>"
/// );
/// ```
#[must_use]
pub fn convert_emphasis(text: &str) -> String {
    EMPHASIS_RULES
        .iter()
        .fold(text.to_string(), |acc, (re, replacement)| {
            re.replace_all(&acc, *replacement).into_owned()
        })
}

/// Convert `![alt](url)` into image elements.
#[must_use]
pub fn convert_images(text: &str) -> String {
    IMAGE_RE
        .replace_all(text, r#"<img src="$2" alt="$1">"#)
        .into_owned()
}

/// Convert `[text](url)` into anchors that open in a new browsing context.
#[must_use]
pub fn convert_links(text: &str) -> String {
    LINK_RE
        .replace_all(
            text,
            r#"<a href="$2" target="_blank" rel="noopener noreferrer">$1</a>"#,
        )
        .into_owned()
}
