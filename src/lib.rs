//! Library for rendering a constrained Markdown dialect as HTML.
//!
//! The dialect is the subset a PDF-extraction backend emits: ATX headings up
//! to level four, fenced code blocks, asterisk and underscore emphasis,
//! images, links, line-granular blockquotes, pipe tables, flat lists, and
//! horizontal rules. [`render`] applies an ordered pipeline of global
//! pattern substitutions and always produces a fragment, degrading malformed
//! constructs to plain paragraph text instead of failing.
//!
//! The crate also decodes conversion-service responses and formats document
//! metadata for the preview pane; see [`response`] and [`metadata`].

#[macro_use]
mod macros;

pub mod blockquote;
pub mod breaks;
pub mod escape;
pub mod fences;
pub mod frontmatter;
pub mod headings;
pub mod inline;
pub mod lists;
pub mod metadata;
pub mod paragraph;
pub mod render;
pub mod response;
pub mod table;

pub use escape::escape;
pub use metadata::Metadata;
pub use render::render;
pub use response::ConversionResponse;
