//! Block segmentation and classification
//!
//! A document is cut into blocks on blank lines, and each block is assigned a
//! [`BlockType`] by looking at its line prefixes.

use once_cell::sync::Lazy;
use regex::Regex;

/// Fence that opens and closes a code block
pub const CODE_FENCE: &str = "```";

static BLANK_LINES_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\n[ \t\r]*\n\s*").expect("valid blank line regex"));

static HEADING_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(#{1,6}) ").expect("valid heading regex"));

/// The structural type of a block
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockType {
    Paragraph,
    /// Heading with level (1-6)
    Heading(u8),
    Code,
    Quote,
    UnorderedList,
    OrderedList,
}

/// Split a document into blocks separated by blank lines.
///
/// Every line of a block is trimmed, as is the block itself, and empty blocks
/// are dropped. A document with no content yields a single empty block.
pub fn segment(document: &str) -> Vec<String> {
    let blocks: Vec<String> = BLANK_LINES_RE
        .split(document)
        .map(|block| {
            block
                .trim()
                .lines()
                .map(str::trim)
                .collect::<Vec<_>>()
                .join("\n")
        })
        .filter(|block| !block.is_empty())
        .collect();

    if blocks.is_empty() {
        return vec![String::new()];
    }
    blocks
}

/// Classify a single block. The first matching rule wins:
/// heading, code, quote, unordered list, ordered list, paragraph.
pub fn classify(block: &str) -> BlockType {
    if let Some(caps) = HEADING_RE.captures(block) {
        return BlockType::Heading(caps[1].len() as u8);
    }

    let lines: Vec<&str> = block.lines().collect();

    if is_code_fence(&lines) {
        return BlockType::Code;
    }

    if lines.is_empty() {
        return BlockType::Paragraph;
    }

    if lines
        .iter()
        .all(|line| line.starts_with("> ") || *line == ">")
    {
        return BlockType::Quote;
    }

    if lines.iter().all(|line| line.starts_with("- ")) {
        return BlockType::UnorderedList;
    }

    if lines
        .iter()
        .enumerate()
        .all(|(i, line)| line.starts_with(&ordered_marker(i + 1)))
    {
        return BlockType::OrderedList;
    }

    BlockType::Paragraph
}

/// The `N. ` marker that opens item `n` of an ordered list
pub fn ordered_marker(n: usize) -> String {
    format!("{}. ", n)
}

/// Opening fence line (with optional info string) through a closing fence line
fn is_code_fence(lines: &[&str]) -> bool {
    match (lines.first(), lines.last()) {
        (Some(first), Some(last)) => {
            lines.len() >= 2 && first.starts_with(CODE_FENCE) && *last == CODE_FENCE
        }
        _ => false,
    }
}
