//! Utility functions for page assembly.

use crate::{Error, Result};

/// Attribute prefixes that point at the site root
pub const ROOT_RELATIVE_PREFIXES: &[&str] = &["href=\"/", "src=\"/"];

/// Get the text of the first level-1 heading.
///
/// Lines are trimmed before matching, so indented headings count.
pub fn extract_title(markdown: &str) -> Result<String> {
    markdown
        .lines()
        .map(str::trim)
        .find_map(|line| line.strip_prefix("# "))
        .map(|title| title.trim().to_string())
        .ok_or(Error::TitleNotFound)
}

/// Point root-relative `href` and `src` attributes at `base_path`.
///
/// `base_path` is expected to end with `/`; `"/"` leaves the html unchanged.
pub fn rewrite_base_path(html: &str, base_path: &str) -> String {
    let mut result = html.to_string();
    for prefix in ROOT_RELATIVE_PREFIXES {
        let attr = &prefix[..prefix.len() - 1];
        result = result.replace(prefix, &format!("{}{}", attr, base_path));
    }
    result
}

/// Append a trailing `/` to a base path that lacks one.
///
/// Everything else is kept as given, so absolute URLs and relative bases
/// like `./` pass through untouched.
pub fn normalize_base_path(base_path: &str) -> String {
    if base_path.ends_with('/') {
        base_path.to_string()
    } else {
        format!("{}/", base_path)
    }
}
