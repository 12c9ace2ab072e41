//! Entry pipeline: config in, ordered and deduplicated entries out.
//!
//! # Order
//!
//! URL entries first, in input order, then each route's expansion in route
//! order (slug order within a dynamic route). Route expansions run
//! concurrently but are collected by route position, so completion order
//! never affects the output. The first entry for a given final location
//! wins; later duplicates are dropped whatever their origin.

pub mod expand;

pub use expand::{CandidateEntry, Origin, expand_route};

use crate::config::{ChangeFreq, SitemapConfig};
use crate::debug;
use crate::error::Result;
use crate::resolve::{normalize_date, resolve_fields, resolve_location};
use futures::future::try_join_all;
use rustc_hash::FxHashSet;

/// A finalized sitemap entry.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedEntry {
    /// Absolute, encoded location.
    pub loc: String,
    /// ISO-8601 UTC instant with millisecond precision.
    pub lastmod: Option<String>,
    pub changefreq: Option<ChangeFreq>,
    pub priority: Option<f64>,
}

impl ResolvedEntry {
    pub fn new(loc: impl Into<String>) -> Self {
        Self {
            loc: loc.into(),
            lastmod: None,
            changefreq: None,
            priority: None,
        }
    }
}

/// Build the resolved entry list for a config.
///
/// All-or-nothing: the first slug source failure or invalid date aborts.
pub async fn run(config: &SitemapConfig) -> Result<Vec<ResolvedEntry>> {
    let expansions = try_join_all(config.routes.iter().map(expand_route)).await?;

    let candidates = config
        .urls
        .iter()
        .map(CandidateEntry::from_url)
        .chain(expansions.into_iter().flatten());

    let mut seen = FxHashSet::default();
    let mut entries = Vec::new();
    for candidate in candidates {
        let entry = resolve_candidate(config, &candidate)?;
        if seen.insert(entry.loc.clone()) {
            entries.push(entry);
        } else {
            debug!("pipeline"; "dropping duplicate {} ({:?})", entry.loc, candidate.origin);
        }
    }

    debug!("pipeline"; "{} entries resolved", entries.len());
    Ok(entries)
}

/// Apply metadata precedence, location resolution and date normalization.
fn resolve_candidate(config: &SitemapConfig, candidate: &CandidateEntry) -> Result<ResolvedEntry> {
    let meta = resolve_fields(
        &config.defaults,
        &candidate.meta,
        candidate.slug_meta.as_ref(),
    );
    let loc = resolve_location(
        &config.base_url,
        candidate.loc_source,
        &candidate.value,
        config.trailing_slash,
    );
    let lastmod = meta.lastmod.as_ref().map(normalize_date).transpose()?;

    Ok(ResolvedEntry {
        loc,
        lastmod,
        changefreq: meta.changefreq,
        priority: meta.priority,
    })
}
