//! Document metadata display formatting.
//!
//! The conversion service reports a fixed set of document-level keys.
//! Unknown keys are ignored on deserialization; absent and empty values
//! are omitted from display.

use std::fmt::Write as _;

use serde::Deserialize;

use crate::escape::escape;

/// Document-level metadata reported alongside a conversion result.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Metadata {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub subject: Option<String>,
    #[serde(default)]
    pub creator: Option<String>,
    #[serde(default)]
    pub creation_date: Option<String>,
    #[serde(default)]
    pub modified_date: Option<String>,
    #[serde(default)]
    pub pages: Option<u32>,
    #[serde(default)]
    pub encrypted: Option<bool>,
}

fn push_text_row(
    rows: &mut Vec<(&'static str, String)>,
    label: &'static str,
    value: Option<&str>,
) {
    if let Some(value) = value
        && !value.is_empty()
    {
        rows.push((label, value.to_string()));
    }
}

impl Metadata {
    /// Return `(label, value)` pairs in display order, skipping absent and
    /// empty-string values.
    #[must_use]
    pub fn display_rows(&self) -> Vec<(&'static str, String)> {
        let mut rows = Vec::new();
        push_text_row(&mut rows, "Title", self.title.as_deref());
        push_text_row(&mut rows, "Author", self.author.as_deref());
        push_text_row(&mut rows, "Subject", self.subject.as_deref());
        push_text_row(&mut rows, "Creator", self.creator.as_deref());
        push_text_row(&mut rows, "Created", self.creation_date.as_deref());
        push_text_row(&mut rows, "Modified", self.modified_date.as_deref());
        if let Some(pages) = self.pages {
            rows.push(("Pages", pages.to_string()));
        }
        if let Some(encrypted) = self.encrypted {
            rows.push(("Encrypted", if encrypted { "Yes" } else { "No" }.to_string()));
        }
        rows
    }

    /// Render the surviving rows as a `<dl>` fragment.
    ///
    /// Metadata values come from the document, not from trusted Markdown,
    /// so they are HTML-escaped. Returns the empty string when every value
    /// is absent.
    #[must_use]
    pub fn to_html(&self) -> String {
        let rows = self.display_rows();
        if rows.is_empty() {
            return String::new();
        }
        let mut html = String::from(r#"<dl class="metadata">"#);
        for (label, value) in rows {
            let _ = write!(html, "<dt>{label}</dt><dd>{}</dd>", escape(&value));
        }
        html.push_str("</dl>");
        html
    }
}
