//! Pipe table conversion.
//!
//! A table is a contiguous three-part group: a header row, a separator row
//! whose cells contain only `-`, `:`, and whitespace, and one or more body
//! rows. A header row without a separator row is not a table and falls
//! through to the later stages.

use std::fmt::Write as _;
use std::sync::LazyLock;

use regex::{Captures, Regex};

static TABLE_RE: LazyLock<Regex> = lazy_regex!(
    r"(?m)^\|(.+)\|[ \t]*\n\|([ \t:\-|]+)\|[ \t]*\n((?:\|.*\|[ \t]*\n?)+)",
    "valid table regex",
);

/// Split a table row into trimmed cells, dropping the outer pipes.
fn split_cells(line: &str) -> Vec<String> {
    let mut s = line.trim();
    if let Some(stripped) = s.strip_prefix('|') {
        s = stripped;
    }
    if let Some(stripped) = s.strip_suffix('|') {
        s = stripped;
    }
    s.split('|').map(|c| c.trim().to_string()).collect()
}

/// A separator cell marks a column when it holds at least one dash and
/// nothing but dashes and colons.
fn is_separator_cell(cell: &str) -> bool {
    cell.contains('-') && cell.chars().all(|c| matches!(c, '-' | ':'))
}

fn push_row(html: &mut String, cells: &[String], tag: &str) {
    html.push_str("<tr>");
    for cell in cells {
        let _ = write!(html, "<{tag}>{cell}</{tag}>");
    }
    html.push_str("</tr>");
}

/// Convert header/separator/body groups into `<table>` elements.
///
/// Cell content is trimmed of surrounding whitespace. Groups whose
/// separator row is malformed are left untouched and degrade to paragraph
/// text downstream.
#[must_use]
pub fn convert_tables(text: &str) -> String {
    TABLE_RE
        .replace_all(text, |caps: &Captures<'_>| {
            let whole = caps.get(0).map_or("", |m| m.as_str());
            let separator = caps.get(2).map_or("", |m| m.as_str());
            let sep_cells = split_cells(separator);
            if sep_cells.is_empty() || !sep_cells.iter().all(|c| is_separator_cell(c)) {
                return whole.to_string();
            }

            let header = caps.get(1).map_or("", |m| m.as_str());
            let mut html = String::from("<table><thead>");
            push_row(&mut html, &split_cells(header), "th");
            html.push_str("</thead><tbody>");
            for row in caps.get(3).map_or("", |m| m.as_str()).lines() {
                if row.trim().is_empty() {
                    continue;
                }
                push_row(&mut html, &split_cells(row), "td");
            }
            html.push_str("</tbody></table>");
            if whole.ends_with('\n') {
                html.push('\n');
            }
            html
        })
        .into_owned()
}
