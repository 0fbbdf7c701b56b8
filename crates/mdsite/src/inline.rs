//! Inline tokenization
//!
//! Turns the inline text of a block into a flat sequence of [`TextSpan`]s.
//! Images are extracted first, then links, then the code, bold and italic
//! delimiters, in that order. Each stage only looks at plain spans, so a span
//! typed by an earlier stage is never split again and emphasis cannot nest.

use mdsite_core::{TextKind, TextSpan};
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::{Error, Result};

static IMAGE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"!\[([^\[\]]*)\]\(([^\(\)]*)\)").expect("valid image regex"));

static LINK_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[([^\[\]]*)\]\(([^\(\)]*)\)").expect("valid link regex"));

/// Delimiters in the order they are applied
const DELIMITERS: &[(&str, TextKind)] = &[
    ("`", TextKind::Code),
    ("**", TextKind::Bold),
    ("_", TextKind::Italic),
];

/// Tokenize inline markdown text into spans
pub fn tokenize(text: &str) -> Result<Vec<TextSpan>> {
    let mut spans = vec![TextSpan::plain(text)];
    spans = split_images(spans);
    spans = split_links(spans);
    for &(delimiter, kind) in DELIMITERS {
        spans = split_delimiter(spans, delimiter, kind)?;
    }
    log::trace!("tokenized {:?} into {} spans", text, spans.len());
    Ok(spans)
}

/// Extract `![alt](url)` images from plain spans
pub fn split_images(spans: Vec<TextSpan>) -> Vec<TextSpan> {
    split_matches(spans, find_images, |caps| {
        TextSpan::image(&caps[1], &caps[2])
    })
}

/// Extract `[text](url)` links from plain spans
pub fn split_links(spans: Vec<TextSpan>) -> Vec<TextSpan> {
    split_matches(spans, find_links, |caps| TextSpan::link(&caps[1], &caps[2]))
}

/// Split plain spans on `delimiter`, alternating plain and `kind` parts.
///
/// Empty plain parts are kept so that `**a**` yields `["", a, ""]`.
pub fn split_delimiter(
    spans: Vec<TextSpan>,
    delimiter: &str,
    kind: TextKind,
) -> Result<Vec<TextSpan>> {
    let mut result = Vec::with_capacity(spans.len());

    for span in spans {
        if !span.is_plain() {
            result.push(span);
            continue;
        }

        let parts: Vec<&str> = span.text().split(delimiter).collect();
        if parts.len() % 2 == 0 {
            return Err(Error::UnclosedDelimiter {
                delimiter: delimiter.to_string(),
                text: span.text().to_string(),
            });
        }

        for (i, part) in parts.into_iter().enumerate() {
            if i % 2 == 0 {
                result.push(TextSpan::plain(part));
            } else {
                result.push(TextSpan::new(part, kind, None)?);
            }
        }
    }

    Ok(result)
}

/// Find all images in `text`, leftmost first
pub fn find_images(text: &str) -> Vec<Captures<'_>> {
    IMAGE_RE.captures_iter(text).collect()
}

/// Find all links in `text` that are not the tail of an image
pub fn find_links(text: &str) -> Vec<Captures<'_>> {
    let mut found = Vec::new();
    let mut pos = 0;

    while let Some(caps) = LINK_RE.captures_at(text, pos) {
        let Some(whole) = caps.get(0) else { break };
        if text[..whole.start()].ends_with('!') {
            // `[` is one byte, so the retry starts on a char boundary.
            pos = whole.start() + 1;
            continue;
        }
        pos = whole.end();
        found.push(caps);
    }

    found
}

/// Replace every match in each plain span with a typed span.
///
/// Text between matches stays plain; no empty plain span is emitted between
/// adjacent matches or at either end. Spans without matches pass through.
fn split_matches<F, B>(spans: Vec<TextSpan>, find: F, build: B) -> Vec<TextSpan>
where
    F: for<'t> Fn(&'t str) -> Vec<Captures<'t>>,
    B: Fn(&Captures<'_>) -> TextSpan,
{
    let mut result = Vec::with_capacity(spans.len());

    for span in spans {
        if !span.is_plain() {
            result.push(span);
            continue;
        }

        let text = span.text();
        let matches = find(text);
        if matches.is_empty() {
            result.push(TextSpan::plain(text));
            continue;
        }

        let mut last = 0;
        for caps in &matches {
            let Some(whole) = caps.get(0) else { continue };
            if whole.start() > last {
                result.push(TextSpan::plain(&text[last..whole.start()]));
            }
            result.push(build(caps));
            last = whole.end();
        }
        if last < text.len() {
            result.push(TextSpan::plain(&text[last..]));
        }
    }

    result
}
