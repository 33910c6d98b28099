//! Fenced code block extraction and restoration.
//!
//! Code blocks are lifted out of the document before any other stage runs:
//! each fenced region is rendered to a `<pre><code>` element up front, held
//! aside, and replaced in the text by a sentinel token. The sentinel is
//! built from a control character that no later pattern matches, so
//! emphasis, link, and list markers inside code are never rewritten.
//! [`restore_code_blocks`] splices the rendered elements back in as the
//! final step of the pipeline.
//!
//! An unterminated fence matches nothing and falls through to the later
//! stages as ordinary text.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::escape::escape;

/// Delimiter for code placeholders.
pub(crate) const PLACEHOLDER: char = '\u{1a}';

static FENCE_RE: LazyLock<Regex> = lazy_regex!(
    r"(?s)```[A-Za-z0-9_+.-]*[ \t]*\n(.*?)\n?```",
    "valid code fence regex",
);

fn placeholder(index: usize) -> String {
    format!("{PLACEHOLDER}{index}{PLACEHOLDER}")
}

/// Replace each fenced code block with a sentinel token.
///
/// Returns the substituted text together with the rendered `<pre><code>`
/// elements in token order. The optional language tag on the opening fence
/// is accepted but ignored; the body is HTML-escaped exactly once.
#[must_use]
pub fn extract_code_blocks(text: &str) -> (String, Vec<String>) {
    let mut blocks = Vec::new();
    let replaced = FENCE_RE.replace_all(text, |caps: &Captures<'_>| {
        let body = caps.get(1).map_or("", |m| m.as_str());
        let token = placeholder(blocks.len());
        blocks.push(format!("<pre><code>{}</code></pre>", escape(body)));
        token
    });
    (replaced.into_owned(), blocks)
}

/// Splice rendered code blocks back over their sentinel tokens.
#[must_use]
pub fn restore_code_blocks(text: &str, blocks: &[String]) -> String {
    let mut out = text.to_string();
    for (index, block) in blocks.iter().enumerate() {
        out = out.replace(&placeholder(index), block);
    }
    out
}
