//! Convert a markdown document to an HTML node tree
//!
//! Each block becomes one subtree under a root `<div>`. Structural markers
//! (heading hashes, quote markers, list markers, code fences) are stripped
//! before the remaining inline text goes through the tokenizer.

use mdsite_core::{HtmlNode, LeafNode, ParentNode, TextKind, TextSpan};

use crate::block::{classify, ordered_marker, segment, BlockType, CODE_FENCE};
use crate::inline::tokenize;
use crate::Result;

/// Convert a markdown document to a `<div>` rooted node tree
pub fn convert(markdown: &str) -> Result<HtmlNode> {
    let blocks = segment(markdown);
    let mut children = Vec::with_capacity(blocks.len());

    for (i, block) in blocks.iter().enumerate() {
        let block_type = classify(block);
        log::debug!("block {} classified as {:?}", i, block_type);
        children.push(convert_block(block, block_type)?);
    }

    Ok(ParentNode::new("div", children).into())
}

/// Convert one block of a known type to its subtree
pub fn convert_block(block: &str, block_type: BlockType) -> Result<HtmlNode> {
    let node = match block_type {
        BlockType::Paragraph => ParentNode::new("p", text_to_children(&join_lines(block))?),

        BlockType::Heading(level) => {
            let text = join_lines(&block[level as usize + 1..]);
            ParentNode::new(format!("h{}", level), text_to_children(&text)?)
        }

        BlockType::Code => return Ok(code_block(block)),

        BlockType::Quote => {
            let text = block
                .lines()
                .map(|line| line.trim_start_matches('>').trim())
                .filter(|line| !line.is_empty())
                .collect::<Vec<_>>()
                .join(" ");
            ParentNode::new("blockquote", text_to_children(&text)?)
        }

        BlockType::UnorderedList => {
            let items = block
                .lines()
                .map(|line| list_item(line.strip_prefix("- ").unwrap_or(line)))
                .collect::<Result<Vec<_>>>()?;
            ParentNode::new("ul", items)
        }

        BlockType::OrderedList => {
            let items = block
                .lines()
                .enumerate()
                .map(|(i, line)| {
                    let marker = ordered_marker(i + 1);
                    list_item(line.strip_prefix(marker.as_str()).unwrap_or(line))
                })
                .collect::<Result<Vec<_>>>()?;
            ParentNode::new("ol", items)
        }
    };

    Ok(node.into())
}

/// Map a span to its leaf node
pub fn text_span_to_html_node(span: &TextSpan) -> HtmlNode {
    let leaf = match span.kind() {
        TextKind::Plain => LeafNode::text(span.text()),
        TextKind::Bold => LeafNode::new("b", span.text()),
        TextKind::Italic => LeafNode::new("i", span.text()),
        TextKind::Code => LeafNode::new("code", span.text()),
        TextKind::Link => {
            LeafNode::new("a", span.text()).with_attr("href", span.url().unwrap_or_default())
        }
        TextKind::Image => LeafNode::new("img", "")
            .with_attr("src", span.url().unwrap_or_default())
            .with_attr("alt", span.text()),
    };
    leaf.into()
}

/// Tokenize inline text and map every span to a leaf
fn text_to_children(text: &str) -> Result<Vec<HtmlNode>> {
    Ok(tokenize(text)?
        .iter()
        .map(text_span_to_html_node)
        .collect())
}

fn list_item(text: &str) -> Result<HtmlNode> {
    Ok(ParentNode::new("li", text_to_children(text)?).into())
}

/// Build `<pre><code>` from a fenced block, keeping the body verbatim
fn code_block(block: &str) -> HtmlNode {
    let lines: Vec<&str> = block.lines().collect();
    let language = lines
        .first()
        .map(|line| line.trim_start_matches(CODE_FENCE).trim())
        .unwrap_or_default();

    let body_lines = if lines.len() >= 2 {
        &lines[1..lines.len() - 1]
    } else {
        &[][..]
    };
    let mut body = body_lines.join("\n");
    if !body.is_empty() {
        body.push('\n');
    }

    let mut code = ParentNode::new("code", vec![LeafNode::text(body).into()]);
    if !language.is_empty() {
        code = code.with_attr("class", format!("language-{}", language));
    }
    ParentNode::new("pre", vec![code.into()]).into()
}

fn join_lines(text: &str) -> String {
    text.lines().map(str::trim).collect::<Vec<_>>().join(" ")
}
