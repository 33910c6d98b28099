//! Conversion-service response decoding.
//!
//! The remote PDF-to-Markdown service answers with a JSON object of the
//! shape `{ success, markdown?, filename?, metadata?, error? }`. Every
//! field except `success` defaults, so partial responses still decode.

use serde::Deserialize;

use crate::{metadata::Metadata, render::render};

/// Message surfaced when a failed response carries no error text.
pub const DEFAULT_ERROR: &str = "Conversion failed.";

/// A decoded conversion-service response.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConversionResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub markdown: String,
    #[serde(default)]
    pub filename: String,
    #[serde(default)]
    pub metadata: Metadata,
    #[serde(default)]
    pub error: String,
}

impl ConversionResponse {
    /// The error to surface for a failed conversion.
    #[must_use]
    pub fn error_message(&self) -> &str {
        if self.error.is_empty() {
            DEFAULT_ERROR
        } else {
            &self.error
        }
    }

    /// Render the response's Markdown as a preview fragment, optionally
    /// prefixed with the metadata summary.
    ///
    /// Callers are expected to check [`success`](Self::success) first; the
    /// renderer itself is total and will happily render an empty document.
    #[must_use]
    pub fn preview(&self, with_metadata: bool) -> String {
        let fragment = render(&self.markdown);
        if !with_metadata {
            return fragment;
        }
        let summary = self.metadata.to_html();
        if summary.is_empty() {
            fragment
        } else {
            format!("{summary}\n{fragment}")
        }
    }
}
