//! mdsite-core - inline span and HTML node model
//!
//! This crate provides the data structures shared by the markdown pipeline:
//! the [`TextSpan`] produced by inline tokenization and the [`HtmlNode`]
//! tree that renders itself to an HTML string.
//!
//! # Architecture
//!
//! ```text
//! Inline text ──tokenize──▶ [TextSpan] ──▶ ┌──────────────┐
//!                                          │  HtmlNode    │ ──render──▶ HTML String
//! Block text ──classify──▶ BlockType ────▶ │  tree        │
//!                                          └──────────────┘
//! ```
//!
//! # Example
//!
//! ```rust
//! use mdsite_core::{HtmlNode, LeafNode, ParentNode};
//!
//! let paragraph = ParentNode::new(
//!     "p",
//!     vec![
//!         LeafNode::text("Hello ").into(),
//!         LeafNode::new("b", "world").into(),
//!     ],
//! );
//! let root = HtmlNode::from(ParentNode::new("div", vec![paragraph.into()]));
//!
//! assert_eq!(root.render().unwrap(), "<div><p>Hello <b>world</b></p></div>");
//! ```

mod node;
mod span;

pub use node::{Attributes, HtmlNode, LeafNode, ParentNode, RenderError};
pub use span::{SpanError, TextKind, TextSpan};
