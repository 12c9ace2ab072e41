//! # route-sitemap
//!
//! Turns a declarative description of a site's pages into one deterministic
//! `sitemap.xml` document.
//!
//! ## Pipeline
//!
//! ```text
//! SitemapConfig
//!   ├── urls ──────────────────────────────┐
//!   └── routes ── expand (concurrently) ───┤
//!                                          ▼
//!                     candidates (urls first, then routes in order)
//!                                          │ resolve fields / location / date
//!                                          ▼
//!                     dedup by final location (first wins)
//!                                          │
//!                                          ▼
//!                     serialize ──> sitemap.xml
//! ```
//!
//! ## Example
//!
//! ```no_run
//! use route_sitemap::{RouteEntry, SitemapConfig, SlugSource, generate};
//!
//! # async fn run() -> route_sitemap::Result<()> {
//! let mut config = SitemapConfig::new("https://website.net");
//! config.routes.push(RouteEntry::new("/"));
//! config.routes.push(
//!     RouteEntry::new("/article/:title")
//!         .with_slugs(["hello", "world"].into_iter().collect::<SlugSource>()),
//! );
//!
//! let xml = generate(&config).await?;
//! assert!(xml.contains("<loc>https://website.net/article/hello</loc>"));
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod generator;
pub mod logger;
pub mod pipeline;
pub mod resolve;

pub use config::{
    ChangeFreq, DateLike, MetaFields, RouteEntry, RouteSitemap, SitemapConfig, Slug, SlugSource,
    UrlEntry,
};
pub use error::{BoxError, Result, SitemapError};
pub use pipeline::ResolvedEntry;

/// Generate the sitemap document for a config.
///
/// Slug functions of all dynamic routes are awaited concurrently. Any slug
/// source failure or unparsable `lastmod` aborts generation.
pub async fn generate(config: &SitemapConfig) -> Result<String> {
    let entries = pipeline::run(config).await?;
    let xml = generator::serialize(&entries);
    debug!("sitemap"; "serialized {} entries", entries.len());

    if config.minify {
        Ok(generator::minify_xml(&xml))
    } else {
        Ok(xml)
    }
}
