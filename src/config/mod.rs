//! Sitemap configuration.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── entry      # UrlEntry, RouteEntry, nested RouteSitemap
//! ├── meta       # MetaFields, ChangeFreq, DateLike
//! ├── slug       # Slug, SlugSource
//! ├── types/     # ConfigError, ConfigDiagnostics, FieldPath
//! └── mod.rs     # SitemapConfig (this file)
//! ```
//!
//! # Fields
//!
//! | Field           | Purpose                                           |
//! |-----------------|---------------------------------------------------|
//! | `baseURL`       | Origin prepended to relative locations            |
//! | `trailingSlash` | Force (`true`) or strip (`false`) trailing slashes |
//! | `minify`        | Emit the document on a single line                |
//! | `defaults`      | Global metadata, lowest precedence                |
//! | `urls`          | Explicit URL entries                              |
//! | `routes`        | Route definitions, static or dynamic              |
//!
//! Generation trusts its input. [`SitemapConfig::validate`] is the separate
//! check a front end runs before handing the config over.

mod entry;
mod meta;
mod slug;
pub mod types;

pub use entry::{RouteEntry, RouteSitemap, UrlEntry, WILDCARD_PATH};
pub use meta::{ChangeFreq, DateLike, MetaFields};
pub use slug::{Slug, SlugSource};
pub use types::{ConfigDiagnostic, ConfigDiagnostics, ConfigError, FieldPath};

use crate::{log, resolve::has_scheme};
use serde::{Deserialize, Serialize};
use std::{fs, path::Path};

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration: everything needed to produce one sitemap document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SitemapConfig {
    /// Site origin, e.g. `https://example.com`
    #[serde(default, rename = "baseURL", alias = "baseUrl", alias = "base_url")]
    pub base_url: String,

    /// Trailing slash policy for every location
    #[serde(default, alias = "trailing_slash")]
    pub trailing_slash: bool,

    /// Collapse the output onto a single line
    #[serde(default)]
    pub minify: bool,

    /// Global metadata defaults
    #[serde(default)]
    pub defaults: MetaFields,

    /// Explicit URL entries
    #[serde(default)]
    pub urls: Vec<UrlEntry>,

    /// Route definitions
    #[serde(default)]
    pub routes: Vec<RouteEntry>,
}

impl SitemapConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    /// Load configuration from a `.toml` or `.json` file.
    ///
    /// Unknown TOML keys are reported and otherwise ignored.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => {
                let (config, ignored) = Self::parse_with_ignored(&content)?;
                if !ignored.is_empty() {
                    Self::print_unknown_fields_warning(&ignored, path);
                }
                Ok(config)
            }
            Some("json") => Ok(serde_json::from_str(&content)?),
            _ => Err(ConfigError::UnsupportedFormat(path.to_path_buf())),
        }
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>), ConfigError> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((config, ignored))
    }

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("warning"; "unknown fields in {}, ignoring:", display_path);
        for field in fields {
            eprintln!("- {}", field);
        }
    }

    /// Check the config for problems generation does not guard against.
    ///
    /// # Checks
    /// - `baseURL` is an http(s) URL with a host (when set)
    /// - relative locations and routes have a `baseURL` to resolve against
    /// - no `loc` or `path` is empty
    /// - every `priority` lies in `[0, 1]`
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut diag = ConfigDiagnostics::new();
        let base_field = FieldPath::new("baseURL");

        if !self.base_url.is_empty() {
            validate_base_url(&self.base_url, &base_field, &mut diag);
        }

        validate_meta(&self.defaults, &FieldPath::new("defaults"), &mut diag);

        let urls = FieldPath::new("urls");
        for (i, entry) in self.urls.iter().enumerate() {
            let field = urls.index(i);
            if entry.loc.trim().is_empty() {
                diag.error(field.field("loc"), "loc must not be empty");
            } else if !has_scheme(&entry.loc) && self.base_url.is_empty() {
                diag.error_with_hint(
                    field.field("loc"),
                    format!("relative location '{}' needs a base URL", entry.loc),
                    format!("set {}, e.g.: \"https://example.com\"", base_field),
                );
            }
            validate_meta(&entry.meta, &field, &mut diag);
        }

        let routes = FieldPath::new("routes");
        for (i, route) in self.routes.iter().enumerate() {
            let field = routes.index(i);
            if route.path.trim().is_empty() {
                diag.error(field.field("path"), "path must not be empty");
            }
            let needs_base = route.loc.as_deref().is_none_or(|loc| !has_scheme(loc));
            if needs_base && self.base_url.is_empty() && !route.ignore_route {
                diag.error_with_hint(
                    field.field("path"),
                    format!("route '{}' needs a base URL", route.path),
                    format!("set {}, e.g.: \"https://example.com\"", base_field),
                );
            }
            validate_meta(&route.meta, &field, &mut diag);
            if let Some(sitemap) = &route.sitemap {
                validate_meta(&sitemap.meta, &field.field("sitemap"), &mut diag);
            }
            if let Some(SlugSource::List(slugs)) = route.effective_slugs() {
                let slugs_field = match route.sitemap {
                    Some(_) => field.field("sitemap").field("slugs"),
                    None => field.field("slugs"),
                };
                for (j, slug) in slugs.iter().enumerate() {
                    if let Some(meta) = slug.meta() {
                        validate_meta(meta, &slugs_field.index(j), &mut diag);
                    }
                }
            }
        }

        diag.into_result().map_err(ConfigError::Diagnostics)
    }
}

fn validate_base_url(base_url: &str, field: &FieldPath, diag: &mut ConfigDiagnostics) {
    match url::Url::parse(base_url) {
        Ok(parsed) => {
            if !matches!(parsed.scheme(), "http" | "https") {
                diag.error_with_hint(
                    field.clone(),
                    format!(
                        "scheme '{}' not supported, must be http or https",
                        parsed.scheme()
                    ),
                    "use format like https://example.com",
                );
            }
            if parsed.host_str().is_none() {
                diag.error_with_hint(
                    field.clone(),
                    "URL must have a valid host",
                    "use format like https://example.com",
                );
            }
        }
        Err(e) => {
            diag.error_with_hint(
                field.clone(),
                format!("invalid URL: {}", e),
                "use format like https://example.com",
            );
        }
    }
}

fn validate_meta(meta: &MetaFields, field: &FieldPath, diag: &mut ConfigDiagnostics) {
    if let Some(priority) = meta.priority
        && !(0.0..=1.0).contains(&priority)
    {
        diag.error_with_hint(
            field.field("priority"),
            format!("priority {priority} is out of range"),
            "use a value between 0.0 and 1.0",
        );
    }
}

/// Parse a TOML snippet, asserting it has no unknown fields.
#[cfg(test)]
pub fn test_parse_config(content: &str) -> SitemapConfig {
    let (parsed, ignored) = SitemapConfig::parse_with_ignored(content).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    parsed
}

// ============================================================================
// tests
// ============================================================================
