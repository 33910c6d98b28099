//! The ordered rendering pipeline.
//!
//! [`render`] is a total function: it terminates and produces a fragment
//! for any input, including the empty string. Stage order is part of the
//! contract. Code blocks are extracted before every other substitution so
//! their content is never rewritten, images precede links because link
//! syntax is a subset of image syntax, and paragraph wrapping runs last so
//! it only sees lines no earlier stage claimed.

use crate::{
    blockquote::convert_blockquotes,
    breaks::convert_rules,
    fences::{extract_code_blocks, restore_code_blocks},
    frontmatter::strip_frontmatter,
    headings::convert_headings,
    inline::{convert_emphasis, convert_images, convert_links},
    lists::{convert_ordered_lists, convert_unordered_lists},
    paragraph::wrap_paragraphs,
    table::convert_tables,
};

/// Substitution stages applied between code extraction and restoration,
/// in contract order.
const STAGES: [fn(&str) -> String; 10] = [
    convert_headings,
    convert_rules,
    convert_emphasis,
    convert_images,
    convert_links,
    convert_blockquotes,
    convert_tables,
    convert_unordered_lists,
    convert_ordered_lists,
    wrap_paragraphs,
];

/// Render Markdown into an HTML fragment for the preview pane.
///
/// Malformed constructs never abort the pipeline; whatever fails to match
/// its stage is carried through and surfaces as paragraph text. Repeated
/// invocation with the same input yields byte-identical output.
///
/// # Examples
///
/// ```
/// use mdpreview::render;
/// assert_eq!(render("# Title"), "<h1>Title</h1>");
/// assert_eq!(render(""), "");
/// ```
#[must_use]
pub fn render(markdown: &str) -> String {
    let text = strip_frontmatter(markdown);
    let (text, code_blocks) = extract_code_blocks(&text);
    let text = STAGES.iter().fold(text, |acc, stage| stage(&acc));
    restore_code_blocks(&text, &code_blocks)
}
