//! route-sitemap - generate sitemap.xml from a route config.

mod cli;

use anyhow::{Context, Result};
use clap::{ColorChoice, Parser};
use cli::Cli;
use route_sitemap::{SitemapConfig, generate, log, logger};
use std::fs;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    logger::set_verbose(cli.verbose);

    let mut config = SitemapConfig::from_path(&cli.config)
        .with_context(|| format!("Failed to load config from {}", cli.config.display()))?;
    if cli.minify {
        config.minify = true;
    }

    config
        .validate()
        .with_context(|| format!("Invalid config {}", cli.config.display()))?;

    let xml = generate(&config).await.context("Failed to generate sitemap")?;

    match &cli.output {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create {}", parent.display()))?;
            }
            fs::write(path, &xml)
                .with_context(|| format!("Failed to write sitemap to {}", path.display()))?;
            log!("sitemap"; "{}", path.display());
        }
        None => print!("{xml}"),
    }

    Ok(())
}
