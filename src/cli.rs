//! Command-line interface definitions.

use clap::{ColorChoice, Parser};
use std::path::PathBuf;

/// Generate sitemap.xml from static urls and route definitions
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path, .toml or .json (default: sitemap.toml)
    #[arg(short = 'C', long, default_value = "sitemap.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// Output file path (default: stdout)
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub output: Option<PathBuf>,

    /// Emit the sitemap on a single line
    #[arg(long)]
    pub minify: bool,

    /// Print debug information
    #[arg(short, long)]
    pub verbose: bool,
}
