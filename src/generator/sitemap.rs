//! Sitemap serialization.
//!
//! # Sitemap Format
//!
//! ```xml
//! <?xml version="1.0" encoding="UTF-8"?>
//! <urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
//!   <url><loc>https://example.com</loc><lastmod>2025-01-01T00:00:00.000Z</lastmod><changefreq>daily</changefreq><priority>1.0</priority></url>
//! </urlset>
//! ```
//!
//! Child elements always appear in the order loc, lastmod, changefreq, priority.

use crate::pipeline::ResolvedEntry;
use quick_xml::escape::escape;

pub const SITEMAP_NS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

/// Render resolved entries as a sitemap document.
pub fn serialize(entries: &[ResolvedEntry]) -> String {
    let mut xml = String::with_capacity(128 + entries.len() * 128);

    xml.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    xml.push_str("<urlset xmlns=\"");
    xml.push_str(SITEMAP_NS);
    xml.push_str("\">\n");

    for entry in entries {
        xml.push_str("  <url><loc>");
        xml.push_str(&escape(entry.loc.as_str()));
        xml.push_str("</loc>");
        if let Some(lastmod) = &entry.lastmod {
            xml.push_str("<lastmod>");
            xml.push_str(&escape(lastmod.as_str()));
            xml.push_str("</lastmod>");
        }
        if let Some(changefreq) = entry.changefreq {
            xml.push_str("<changefreq>");
            xml.push_str(changefreq.as_str());
            xml.push_str("</changefreq>");
        }
        if let Some(priority) = entry.priority {
            xml.push_str("<priority>");
            xml.push_str(&format_priority(priority));
            xml.push_str("</priority>");
        }
        xml.push_str("</url>\n");
    }

    xml.push_str("</urlset>\n");
    xml
}

/// Shortest decimal form, always with a fractional digit: `1` -> `1.0`.
pub fn format_priority(priority: f64) -> String {
    let mut s = priority.to_string();
    if !s.contains('.') {
        s.push_str(".0");
    }
    s
}
