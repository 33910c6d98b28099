//! HTML escaping for code block content.

/// Escape the three HTML-significant characters.
///
/// The ampersand is replaced first so the `&lt;` and `&gt;` replacement text
/// is never itself re-escaped.
///
/// # Examples
///
/// ```
/// use mdpreview::escape;
/// assert_eq!(escape("<script>"), "&lt;script&gt;");
/// assert_eq!(escape("a & b"), "a &amp; b");
/// ```
#[must_use]
pub fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
