mod config;
mod site;

use std::path::PathBuf;
use std::process;

use anyhow::Result;
use clap::Parser;
use mdsite::{normalize_base_path, HtmlService, PageOptions};

use crate::config::{Config, SiteConfig, DEFAULT_CONFIG_PATH};

#[derive(Parser)]
#[command(name = "mdsite")]
#[command(about = "Build a static HTML site from a directory of Markdown files")]
struct Cli {
    /// Prefix for root-relative links, e.g. `/my-repo/`
    base_path: Option<String>,

    /// Config file
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Static asset directory
    #[arg(long = "static")]
    static_dir: Option<PathBuf>,

    /// Markdown content directory
    #[arg(long = "content")]
    content_dir: Option<PathBuf>,

    /// Output directory (cleared before building)
    #[arg(short, long = "output")]
    output_dir: Option<PathBuf>,

    /// Page template
    #[arg(short, long)]
    template: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    /// Flags win over the config file
    fn apply(self, mut site: SiteConfig) -> SiteConfig {
        if let Some(base_path) = self.base_path {
            site.base_path = base_path;
        }
        if let Some(dir) = self.static_dir {
            site.static_dir = dir;
        }
        if let Some(dir) = self.content_dir {
            site.content_dir = dir;
        }
        if let Some(dir) = self.output_dir {
            site.output_dir = dir;
        }
        if let Some(template) = self.template {
            site.template = template;
        }
        site
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

fn build(site: &SiteConfig) -> Result<()> {
    let options = PageOptions {
        base_path: normalize_base_path(&site.base_path),
        ..Default::default()
    };
    let service = HtmlService::with_options(options);

    let copied = site::copy_static(&site.static_dir, &site.output_dir)?;
    log::info!(
        "Copied {} static files from {} to {}",
        copied,
        site.static_dir.display(),
        site.output_dir.display()
    );

    let pages = site::generate_pages(
        &service,
        &site.content_dir,
        &site.template,
        &site.output_dir,
    )?;
    log::info!("Generated {} pages into {}", pages, site.output_dir.display());
    Ok(())
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = match Config::load(&cli.config) {
        Ok(config) => config,
        Err(e) => {
            log::error!("{:#}", e);
            process::exit(1);
        }
    };
    let site = cli.apply(config.site);

    if let Err(e) = build(&site) {
        log::error!("{:#}", e);
        process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_positional_base_path_overrides_config() {
        let cli = Cli::parse_from(["mdsite", "/repo/", "--output", "public"]);
        let site = cli.apply(SiteConfig {
            base_path: "/from-config/".to_string(),
            ..Default::default()
        });
        assert_eq!(site.base_path, "/repo/");
        assert_eq!(site.output_dir, PathBuf::from("public"));
        assert_eq!(site.content_dir, PathBuf::from("content"));
    }

    #[test]
    fn test_no_flags_keeps_config() {
        let cli = Cli::parse_from(["mdsite"]);
        assert_eq!(cli.config, PathBuf::from(DEFAULT_CONFIG_PATH));
        let site = cli.apply(SiteConfig::default());
        assert_eq!(site, SiteConfig::default());
    }

    #[test]
    fn test_verbose_count() {
        let cli = Cli::parse_from(["mdsite", "-vv"]);
        assert_eq!(cli.verbose, 2);
    }
}
