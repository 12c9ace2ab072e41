//! Sitemap document output.
//!
//! - **sitemap**: renders resolved entries as `sitemap.xml`
//! - `minify_xml`: optional single-line post-processing

pub mod sitemap;

pub use sitemap::{SITEMAP_NS, format_priority, serialize};

/// Collapse an XML document onto one line by trimming every line.
pub fn minify_xml(content: &str) -> String {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("")
}
