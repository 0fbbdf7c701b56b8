//! Static site generation: asset copying and page rendering on disk.

use anyhow::{Context, Result};
use mdsite::HtmlService;
use std::fs;
use std::path::Path;

/// Replace `dest` with a recursive copy of `src`.
///
/// Returns the number of files copied.
pub fn copy_static(src: &Path, dest: &Path) -> Result<usize> {
    if dest.is_dir() {
        fs::remove_dir_all(dest)
            .with_context(|| format!("Failed to clear {}", dest.display()))?;
    }
    copy_dir(src, dest)
}

fn copy_dir(src: &Path, dest: &Path) -> Result<usize> {
    fs::create_dir_all(dest).with_context(|| format!("Failed to create {}", dest.display()))?;

    let mut copied = 0;
    let entries =
        fs::read_dir(src).with_context(|| format!("Failed to read {}", src.display()))?;
    for entry in entries {
        let entry = entry?;
        let from = entry.path();
        let to = dest.join(entry.file_name());

        if from.is_dir() {
            copied += copy_dir(&from, &to)?;
        } else {
            log::debug!("copying {} -> {}", from.display(), to.display());
            fs::copy(&from, &to)
                .with_context(|| format!("Failed to copy {}", from.display()))?;
            copied += 1;
        }
    }

    Ok(copied)
}

/// Render one markdown file through the template into `dest`
pub fn generate_page(
    service: &HtmlService,
    from: &Path,
    template: &str,
    dest: &Path,
) -> Result<()> {
    log::info!("Generating page from {} to {}", from.display(), dest.display());

    let markdown = fs::read_to_string(from)
        .with_context(|| format!("Failed to read {}", from.display()))?;
    let page = service
        .render_page(&markdown, template)
        .with_context(|| format!("Failed to render {}", from.display()))?;

    if let Some(parent) = dest.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    fs::write(dest, page).with_context(|| format!("Failed to write {}", dest.display()))?;
    Ok(())
}

/// Render every `.md` file under `content_dir` to the matching `.html`
/// path under `dest_dir`.
///
/// Returns the number of pages written.
pub fn generate_pages(
    service: &HtmlService,
    content_dir: &Path,
    template_path: &Path,
    dest_dir: &Path,
) -> Result<usize> {
    let template = fs::read_to_string(template_path)
        .with_context(|| format!("Failed to read template {}", template_path.display()))?;

    let pattern = content_dir.join("**").join("*.md");
    let pattern = pattern.to_string_lossy();
    let mut written = 0;

    for path in glob::glob(&pattern).context("Invalid content directory pattern")? {
        let path = path?;
        let relative = path.strip_prefix(content_dir).with_context(|| {
            format!("{} is outside {}", path.display(), content_dir.display())
        })?;
        let dest = dest_dir.join(relative).with_extension("html");

        generate_page(service, &path, &template, &dest)?;
        written += 1;
    }

    Ok(written)
}
