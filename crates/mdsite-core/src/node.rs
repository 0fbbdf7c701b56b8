//! HTML node tree
//!
//! The tree has two kinds of nodes: a [`LeafNode`] holding a single text
//! value and a [`ParentNode`] holding child nodes. Both render themselves to
//! an HTML string. Text is emitted as-is; no escaping is performed.

use indexmap::IndexMap;

/// Element attributes, rendered in insertion order
pub type Attributes = IndexMap<String, String>;

/// Error raised when a node tree violates its structural invariants
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RenderError {
    #[error("leaf node <{tag}> must have a value")]
    MissingValue { tag: String },

    #[error("text node must have a value")]
    MissingText,

    #[error("parent node must have a tag")]
    MissingTag,

    #[error("parent node <{tag}> must have children")]
    NoChildren { tag: String },
}

/// A node in the HTML tree
#[derive(Debug, Clone, PartialEq)]
pub enum HtmlNode {
    /// Element or raw text with no children
    Leaf(LeafNode),

    /// Element wrapping child nodes
    Parent(ParentNode),
}

/// A childless node.
///
/// With no `tag` the value is raw text and renders verbatim. An `img` tag
/// renders as a self-closing element and ignores `value`. Every other leaf,
/// raw text included, requires a value.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LeafNode {
    pub tag: Option<String>,
    pub value: Option<String>,
    pub attributes: Attributes,
}

/// An element node that owns its children.
#[derive(Debug, Clone, PartialEq)]
pub struct ParentNode {
    pub tag: String,
    pub children: Vec<HtmlNode>,
    pub attributes: Attributes,
}

impl HtmlNode {
    /// Render this node and its descendants to an HTML string
    pub fn render(&self) -> Result<String, RenderError> {
        let mut out = String::with_capacity(256);
        self.render_into(&mut out)?;
        Ok(out)
    }

    fn render_into(&self, out: &mut String) -> Result<(), RenderError> {
        match self {
            HtmlNode::Leaf(leaf) => leaf.render_into(out),
            HtmlNode::Parent(parent) => parent.render_into(out),
        }
    }

    /// Get the tag name, `None` for raw text
    pub fn tag(&self) -> Option<&str> {
        match self {
            HtmlNode::Leaf(leaf) => leaf.tag.as_deref(),
            HtmlNode::Parent(parent) => Some(&parent.tag),
        }
    }

    /// Get the children of this node (empty for leaves)
    pub fn children(&self) -> &[HtmlNode] {
        match self {
            HtmlNode::Leaf(_) => &[],
            HtmlNode::Parent(parent) => &parent.children,
        }
    }
}

impl From<LeafNode> for HtmlNode {
    fn from(leaf: LeafNode) -> Self {
        HtmlNode::Leaf(leaf)
    }
}

impl From<ParentNode> for HtmlNode {
    fn from(parent: ParentNode) -> Self {
        HtmlNode::Parent(parent)
    }
}

impl LeafNode {
    /// Create an element leaf with a value
    pub fn new(tag: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            tag: Some(tag.into()),
            value: Some(value.into()),
            attributes: Attributes::new(),
        }
    }

    /// Create a raw text leaf
    pub fn text(value: impl Into<String>) -> Self {
        Self {
            tag: None,
            value: Some(value.into()),
            attributes: Attributes::new(),
        }
    }

    /// Create an element leaf without a value
    pub fn element(tag: impl Into<String>) -> Self {
        Self {
            tag: Some(tag.into()),
            value: None,
            attributes: Attributes::new(),
        }
    }

    /// Add an attribute, replacing any previous value for `name`
    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    fn render_into(&self, out: &mut String) -> Result<(), RenderError> {
        let Some(tag) = self.tag.as_deref() else {
            let value = self.value.as_deref().ok_or(RenderError::MissingText)?;
            out.push_str(value);
            return Ok(());
        };

        if tag == "img" {
            out.push_str("<img");
            push_attributes(&self.attributes, out);
            out.push_str("/>");
            return Ok(());
        }

        let value = self.value.as_deref().ok_or_else(|| RenderError::MissingValue {
            tag: tag.to_string(),
        })?;

        push_open_tag(tag, &self.attributes, out);
        out.push_str(value);
        push_close_tag(tag, out);
        Ok(())
    }
}

impl ParentNode {
    pub fn new(tag: impl Into<String>, children: Vec<HtmlNode>) -> Self {
        Self {
            tag: tag.into(),
            children,
            attributes: Attributes::new(),
        }
    }

    /// Add an attribute, replacing any previous value for `name`
    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    fn render_into(&self, out: &mut String) -> Result<(), RenderError> {
        if self.tag.is_empty() {
            return Err(RenderError::MissingTag);
        }
        if self.children.is_empty() {
            return Err(RenderError::NoChildren {
                tag: self.tag.clone(),
            });
        }

        push_open_tag(&self.tag, &self.attributes, out);
        for child in &self.children {
            child.render_into(out)?;
        }
        push_close_tag(&self.tag, out);
        Ok(())
    }
}

fn push_open_tag(tag: &str, attributes: &Attributes, out: &mut String) {
    out.push('<');
    out.push_str(tag);
    push_attributes(attributes, out);
    out.push('>');
}

fn push_close_tag(tag: &str, out: &mut String) {
    out.push_str("</");
    out.push_str(tag);
    out.push('>');
}

/// Write ` name="value"` for each attribute
fn push_attributes(attributes: &Attributes, out: &mut String) {
    for (name, value) in attributes {
        out.push(' ');
        out.push_str(name);
        out.push_str("=\"");
        out.push_str(value);
        out.push('"');
    }
}
