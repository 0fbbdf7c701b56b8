//! # mdsite
//!
//! Convert a minimal markdown dialect to HTML.
//!
//! The recognised grammar is a fixed subset: ATX headings, fenced code
//! blocks, block quotes, `- ` and `1. ` lists, and paragraphs, with bold,
//! italic, inline code, links and images inside them. Emphasis does not nest
//! and nothing is escaped.
//!
//! ## Example
//!
//! ```rust
//! let html = mdsite::markdown_to_html("# Title\n\nHello **world**").unwrap();
//! assert_eq!(html, "<div><h1>Title</h1><p>Hello <b>world</b></p></div>");
//!
//! let title = mdsite::extract_title("# Title\n\nHello **world**").unwrap();
//! assert_eq!(title, "Title");
//! ```
//!
//! ## Example (page)
//!
//! ```rust
//! use mdsite::{HtmlService, PageOptions};
//!
//! let service = HtmlService::with_options(PageOptions {
//!     base_path: "/docs/".to_string(),
//!     ..Default::default()
//! });
//! let page = service
//!     .render_page("# Home\n\n[About](/about)", "<title>{{ Title }}</title>{{ Content }}")
//!     .unwrap();
//! assert!(page.contains("<title>Home</title>"));
//! assert!(page.contains("<a href=\"/docs/about\">About</a>"));
//! ```

pub mod block;
mod convert;
pub mod inline;
mod service;
mod utilities;

pub use block::{classify, segment, BlockType};
pub use convert::{convert_block, text_span_to_html_node};
pub use inline::tokenize;
pub use mdsite_core::{
    Attributes, HtmlNode, LeafNode, ParentNode, RenderError, SpanError, TextKind, TextSpan,
};
pub use service::{HtmlService, PageOptions};
pub use utilities::*;

/// Error type for mdsite operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("closing delimiter {delimiter:?} not found in {text:?}")]
    UnclosedDelimiter { delimiter: String, text: String },

    #[error("invalid span: {0}")]
    InvalidSpan(#[from] SpanError),

    #[error("invalid node tree: {0}")]
    Render(#[from] RenderError),

    #[error("no h1 title found")]
    TitleNotFound,
}

pub type Result<T> = std::result::Result<T, Error>;

/// Convert a markdown document to a `<div>` rooted node tree
pub fn markdown_to_html_node(markdown: &str) -> Result<HtmlNode> {
    convert::convert(markdown)
}

/// Convert a markdown document to an HTML string
pub fn markdown_to_html(markdown: &str) -> Result<String> {
    Ok(markdown_to_html_node(markdown)?.render()?)
}
