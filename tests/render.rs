//! Integration tests for the full rendering pipeline.
//!
//! Exercises the stage ordering contract end to end: code-block
//! protection, heading precedence, emphasis resolution, table and list
//! grouping, frontmatter removal, and the degrade-to-paragraph behaviour
//! for malformed constructs.

use mdpreview::render;
use rstest::rstest;

mod common;
use common::assert_contains_in_order;

#[rstest]
#[case("")]
#[case("   \n\t\n")]
#[case("```\nno closing fence")]
#[case("**unclosed bold")]
#[case("| lonely | header |")]
#[case("[half a link](")]
#[case("\u{0}\u{7f} control characters")]
fn render_always_produces_a_fragment(#[case] input: &str) {
    let first = render(input);
    assert_eq!(first, render(input), "repeat invocation must match");
}

#[test]
fn empty_input_renders_empty_fragment() {
    assert_eq!(render(""), "");
}

#[test]
fn whitespace_only_input_is_not_paragraph_wrapped() {
    assert!(!render("   \n\t\n").contains("<p>"));
}

#[test]
fn frontmatter_body_never_reaches_the_output() {
    let out = render("---\ntitle: x\n---\n# Heading");
    assert_eq!(out, "<h1>Heading</h1>");
    assert!(!out.contains("title"));
}

#[test]
fn heading_precedence_is_longest_prefix_first() {
    assert_eq!(render("#### Four"), "<h4>Four</h4>");
    assert_eq!(render("### Three"), "<h3>Three</h3>");
}

#[rstest]
#[case("***text***")]
#[case("**_text_**")]
fn combined_emphasis_nests_strong_and_em(#[case] input: &str) {
    assert_eq!(render(input), "<strong><em>text</em></strong>");
}

#[test]
fn bold_and_italic_on_one_line_resolve_independently() {
    assert_eq!(
        render("**bold** and *italic*"),
        "<strong>bold</strong> and <em>italic</em>"
    );
}

#[test]
fn table_requires_the_three_part_shape() {
    let out = render("| A | B |\n| - | - |\n| 1 | 2 |");
    assert_eq!(
        out,
        "<table><thead><tr><th>A</th><th>B</th></tr></thead>\
         <tbody><tr><td>1</td><td>2</td></tr></tbody></table>"
    );
}

#[test]
fn header_without_separator_degrades_to_paragraphs() {
    let out = render("| A | B |\n| 1 | 2 |");
    assert!(!out.contains("<table>"));
    assert_eq!(out, "<p>| A | B |</p>\n<p>| 1 | 2 |</p>");
}

#[test]
fn consecutive_items_share_one_container() {
    let out = render("- one\n- two\n- three");
    assert_eq!(out.matches("<ul>").count(), 1);
    assert_eq!(out.matches("<li>").count(), 3);
}

#[test]
fn blank_line_yields_two_containers() {
    let out = render("- one\n\n- two");
    assert_eq!(out.matches("<ul>").count(), 2);
}

#[test]
fn ordered_items_stay_bare() {
    let out = render("1. first\n2. second");
    assert_eq!(out, "<li>first</li>\n<li>second</li>");
    assert!(!out.contains("<ol>"));
}

#[test]
fn script_inside_code_is_escaped() {
    let out = render("```\n<script>alert('x')</script>\n```");
    assert_eq!(
        out,
        "<pre><code>&lt;script&gt;alert('x')&lt;/script&gt;</code></pre>"
    );
}

#[test]
fn inline_html_outside_code_passes_through_verbatim() {
    let input = "<script>alert('x')</script>";
    assert_eq!(render(input), input);
}

#[test]
fn code_content_is_escaped_exactly_once() {
    assert_eq!(render("```\n&amp;\n```"), "<pre><code>&amp;amp;</code></pre>");
}

#[test]
fn emphasis_markers_inside_code_are_never_rewritten() {
    let out = render("```\n**bold** and [link](url)\n```");
    assert!(out.contains("**bold** and [link](url)"));
    assert!(!out.contains("<strong>"));
    assert!(!out.contains("<a "));
}

#[test]
fn interior_rule_survives_frontmatter_stripping() {
    let out = render("---\ntitle: x\n---\nabove\n\n---\n\nbelow");
    assert_contains_in_order(&out, &["<p>above</p>", "<hr>", "<p>below</p>"]);
}

#[test]
fn full_document_renders_every_construct() {
    let input = "\
---
title: sample
---
# Report

Some **bold** text with a [link](https://example.com).

> extracted quote

```python
print('**raw**')
```

| Col A | Col B |
| ----- | ----- |
| 1     | 2     |

- alpha
- beta

1. first
2. second
";
    let out = render(input);
    assert_contains_in_order(
        &out,
        &[
            "<h1>Report</h1>",
            "<strong>bold</strong>",
            r#"<a href="https://example.com" target="_blank" rel="noopener noreferrer">link</a>"#,
            "<blockquote>extracted quote</blockquote>",
            "<pre><code>print('**raw**')</code></pre>",
            "<th>Col A</th>",
            "<td>2</td>",
            "<ul><li>alpha</li>",
            "<li>first</li>",
        ],
    );
    assert!(!out.contains("title: sample"));
}
