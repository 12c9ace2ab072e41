//! Route expansion: one route definition into zero or more candidates.
//!
//! - ignored and catch-all routes yield nothing
//! - static routes yield exactly one candidate (`loc` if set, else `path`)
//! - dynamic routes yield one candidate per distinct slug, or nothing when
//!   the slug list is empty

use crate::config::{MetaFields, RouteEntry, Slug, UrlEntry};
use crate::debug;
use crate::error::{Result, SitemapError};
use crate::resolve::LocSource;
use regex::{NoExpand, Regex};
use rustc_hash::FxHashSet;
use std::sync::LazyLock;

/// Route parameter token at the start of a path component: `:id`, `:id?`,
/// `:id(\\d+)`. Text after the token (`:id.html`) is kept.
static DYNAMIC_SEGMENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^:[A-Za-z0-9_]+(\([^)]*\))?[?*+]?").expect("dynamic segment pattern is valid")
});

/// Which input produced a candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    Url,
    Route,
    Slug,
}

/// Not-yet-resolved sitemap entry.
#[derive(Debug, Clone, PartialEq)]
pub struct CandidateEntry {
    pub loc_source: LocSource,
    pub value: String,
    /// URL- or route-level metadata.
    pub meta: MetaFields,
    /// Slug-level metadata, only for slugs given in object form.
    pub slug_meta: Option<MetaFields>,
    pub origin: Origin,
}

impl CandidateEntry {
    pub fn from_url(entry: &UrlEntry) -> Self {
        Self {
            loc_source: LocSource::ExplicitLoc,
            value: entry.loc.clone(),
            meta: entry.meta.clone(),
            slug_meta: None,
            origin: Origin::Url,
        }
    }

    fn from_static_route(route: &RouteEntry) -> Self {
        let (loc_source, value) = match &route.loc {
            Some(loc) => (LocSource::ExplicitLoc, loc.clone()),
            None => (LocSource::Path, route.path.clone()),
        };
        Self {
            loc_source,
            value,
            meta: route.effective_meta().clone(),
            slug_meta: None,
            origin: Origin::Route,
        }
    }

    fn from_slug(route: &RouteEntry, slug: &Slug) -> Self {
        Self {
            loc_source: LocSource::Path,
            value: substitute_slug(&route.path, slug.value()),
            meta: route.effective_meta().clone(),
            slug_meta: slug.meta().cloned(),
            origin: Origin::Slug,
        }
    }
}

/// True if any path component starts with a route parameter.
pub fn is_dynamic(path: &str) -> bool {
    path.split('/').any(|segment| DYNAMIC_SEGMENT.is_match(segment))
}

/// Replace the parameter token of every dynamic component of `path` with `slug`.
pub fn substitute_slug(path: &str, slug: &str) -> String {
    path.split('/')
        .map(|segment| DYNAMIC_SEGMENT.replace(segment, NoExpand(slug)))
        .collect::<Vec<_>>()
        .join("/")
}

/// Keep the first occurrence of each slug value, preserving order.
fn dedup_slugs(mut slugs: Vec<Slug>) -> Vec<Slug> {
    let mut seen = FxHashSet::default();
    slugs.retain(|slug| seen.insert(slug.value().to_owned()));
    slugs
}

/// Expand a route into its candidate entries.
///
/// Waits on the route's slug source when the path is dynamic; a failing
/// source aborts with [`SitemapError::SlugSourceFailure`].
pub async fn expand_route(route: &RouteEntry) -> Result<Vec<CandidateEntry>> {
    if route.ignore_route {
        debug!("expand"; "skipping ignored route {}", route.path);
        return Ok(Vec::new());
    }
    if route.is_wildcard() {
        debug!("expand"; "skipping catch-all route {}", route.path);
        return Ok(Vec::new());
    }
    if !is_dynamic(&route.path) {
        return Ok(vec![CandidateEntry::from_static_route(route)]);
    }

    let Some(source) = route.effective_slugs() else {
        debug!("expand"; "skipping dynamic route {} without slugs", route.path);
        return Ok(Vec::new());
    };

    let slugs = source
        .load()
        .await
        .map_err(|err| SitemapError::slug_source(&route.path, err))?;
    let slugs = dedup_slugs(slugs);

    if slugs.is_empty() {
        debug!("expand"; "skipping dynamic route {} with no slugs", route.path);
    }

    Ok(slugs
        .iter()
        .map(|slug| CandidateEntry::from_slug(route, slug))
        .collect())
}
