use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Default location of the config file, relative to the working directory
pub const DEFAULT_CONFIG_PATH: &str = "mdsite.toml";

#[derive(Debug, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    pub site: SiteConfig,
}

#[derive(Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct SiteConfig {
    /// Directory mirrored verbatim into the output
    pub static_dir: PathBuf,
    /// Directory searched recursively for `.md` pages
    pub content_dir: PathBuf,
    /// Directory the site is written to; cleared on every run
    pub output_dir: PathBuf,
    /// HTML template with `{{ Title }}` and `{{ Content }}` placeholders
    pub template: PathBuf,
    pub base_path: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            static_dir: PathBuf::from("static"),
            content_dir: PathBuf::from("content"),
            output_dir: PathBuf::from("docs"),
            template: PathBuf::from("template.html"),
            base_path: "/".to_string(),
        }
    }
}

impl Config {
    /// Load config from a TOML file, or return defaults if it does not exist.
    ///
    /// A file that exists but does not parse is an error.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            log::debug!("no config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file at {}", path.display()))?;
        let config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file at {}", path.display()))?;
        Ok(config)
    }
}
