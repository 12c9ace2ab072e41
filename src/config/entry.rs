//! Input entries: explicit URLs and route definitions.

use super::{MetaFields, SlugSource};
use serde::{Deserialize, Serialize};

/// Path of the catch-all route, which never appears in a sitemap.
pub const WILDCARD_PATH: &str = "*";

/// An explicit sitemap URL, absolute or relative to the base URL.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UrlEntry {
    pub loc: String,
    #[serde(flatten)]
    pub meta: MetaFields,
}

impl UrlEntry {
    pub fn new(loc: impl Into<String>) -> Self {
        Self {
            loc: loc.into(),
            meta: MetaFields::default(),
        }
    }

    pub fn with_meta(mut self, meta: MetaFields) -> Self {
        self.meta = meta;
        self
    }
}

/// Nested `sitemap` block of a route.
///
/// When present it replaces the route's top-level metadata and slugs.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RouteSitemap {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slugs: Option<SlugSource>,
    #[serde(flatten)]
    pub meta: MetaFields,
}

/// A router-style route definition, static or dynamic.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteEntry {
    pub path: String,
    /// Location override used instead of `path` for static routes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub loc: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, alias = "ignore_route")]
    pub ignore_route: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slugs: Option<SlugSource>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sitemap: Option<RouteSitemap>,
    #[serde(flatten)]
    pub meta: MetaFields,
}

impl RouteEntry {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            ..Self::default()
        }
    }

    pub fn with_loc(mut self, loc: impl Into<String>) -> Self {
        self.loc = Some(loc.into());
        self
    }

    pub fn with_meta(mut self, meta: MetaFields) -> Self {
        self.meta = meta;
        self
    }

    pub fn with_slugs(mut self, slugs: SlugSource) -> Self {
        self.slugs = Some(slugs);
        self
    }

    pub fn with_sitemap(mut self, sitemap: RouteSitemap) -> Self {
        self.sitemap = Some(sitemap);
        self
    }

    pub fn ignored(mut self) -> Self {
        self.ignore_route = true;
        self
    }

    /// Route-level metadata: the nested `sitemap` block if any, else top-level fields.
    pub fn effective_meta(&self) -> &MetaFields {
        match &self.sitemap {
            Some(sitemap) => &sitemap.meta,
            None => &self.meta,
        }
    }

    /// Slug source: the nested `sitemap` block if any, else top-level `slugs`.
    pub fn effective_slugs(&self) -> Option<&SlugSource> {
        match &self.sitemap {
            Some(sitemap) => sitemap.slugs.as_ref(),
            None => self.slugs.as_ref(),
        }
    }

    /// True for the catch-all route (`*` or `/*`).
    pub fn is_wildcard(&self) -> bool {
        self.path.trim_start_matches('/') == WILDCARD_PATH
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ChangeFreq, DateLike};

    #[test]
    fn test_route_parsing_camel_case() {
        let route: RouteEntry = serde_json::from_str(
            r#"{"path": "/admin", "ignoreRoute": true, "name": "admin", "priority": 0.2}"#,
        )
        .unwrap();
        assert_eq!(route.path, "/admin");
        assert!(route.ignore_route);
        assert_eq!(route.name.as_deref(), Some("admin"));
        assert_eq!(route.meta.priority, Some(0.2));
    }

    #[test]
    fn test_route_parsing_snake_case_alias() {
        let route: RouteEntry =
            serde_json::from_str(r#"{"path": "/admin", "ignore_route": true}"#).unwrap();
        assert!(route.ignore_route);
    }

    #[test]
    fn test_nested_sitemap_replaces_top_level() {
        let route: RouteEntry = serde_json::from_str(
            r#"{
                "path": "/article/:title",
                "priority": 0.9,
                "slugs": ["top"],
                "sitemap": {"changefreq": "daily", "slugs": ["nested"]}
            }"#,
        )
        .unwrap();
        let meta = route.effective_meta();
        assert_eq!(meta.changefreq, Some(ChangeFreq::Daily));
        assert_eq!(meta.priority, None);
        match route.effective_slugs() {
            Some(SlugSource::List(slugs)) => assert_eq!(slugs[0].value(), "nested"),
            other => panic!("unexpected slugs: {other:?}"),
        }
    }

    #[test]
    fn test_top_level_used_without_sitemap_block() {
        let route = RouteEntry::new("/about")
            .with_meta(MetaFields::new().with_lastmod("2020-01-01"));
        assert_eq!(
            route.effective_meta().lastmod,
            Some(DateLike::from("2020-01-01"))
        );
        assert!(route.effective_slugs().is_none());
    }

    #[test]
    fn test_wildcard_detection() {
        assert!(RouteEntry::new("*").is_wildcard());
        assert!(RouteEntry::new("/*").is_wildcard());
        assert!(!RouteEntry::new("/*/x").is_wildcard());
        assert!(!RouteEntry::new("/").is_wildcard());
    }

    #[test]
    fn test_url_entry_flattened_meta() {
        let entry: UrlEntry =
            serde_json::from_str(r#"{"loc": "/contact", "changefreq": "yearly"}"#).unwrap();
        assert_eq!(entry.loc, "/contact");
        assert_eq!(entry.meta.changefreq, Some(ChangeFreq::Yearly));
    }
}
