//! HtmlService - the main entry point for markdown to HTML page conversion.

use mdsite_core::HtmlNode;

use crate::convert::convert;
use crate::utilities::{extract_title, rewrite_base_path};
use crate::Result;

/// Options for page rendering
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageOptions {
    /// Prefix substituted for root-relative `href="/` and `src="/` links
    pub base_path: String,

    /// Template placeholder replaced by the page title
    pub title_placeholder: String,

    /// Template placeholder replaced by the rendered content
    pub content_placeholder: String,
}

impl Default for PageOptions {
    fn default() -> Self {
        Self {
            base_path: "/".to_string(),
            title_placeholder: "{{ Title }}".to_string(),
            content_placeholder: "{{ Content }}".to_string(),
        }
    }
}

/// The main service for converting markdown to HTML
#[derive(Debug, Clone, Default)]
pub struct HtmlService {
    options: PageOptions,
}

impl HtmlService {
    /// Create a new HtmlService with default options
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an HtmlService with custom options
    pub fn with_options(options: PageOptions) -> Self {
        Self { options }
    }

    /// Convert markdown to a node tree
    pub fn to_node(&self, markdown: &str) -> Result<HtmlNode> {
        convert(markdown)
    }

    /// Convert markdown to an HTML fragment (`<div>...</div>`)
    pub fn convert(&self, markdown: &str) -> Result<String> {
        Ok(self.to_node(markdown)?.render()?)
    }

    /// Render a full page: convert the markdown, fill the template, then
    /// rewrite root-relative links against the base path.
    pub fn render_page(&self, markdown: &str, template: &str) -> Result<String> {
        let content = self.convert(markdown)?;
        let title = extract_title(markdown)?;

        let page = template
            .replace(&self.options.title_placeholder, &title)
            .replace(&self.options.content_placeholder, &content);

        Ok(rewrite_base_path(&page, &self.options.base_path))
    }

}
