//! Generation error types.
//!
//! Every variant is fatal: generation either yields a complete document or
//! fails with one of these, never a partial sitemap.

use thiserror::Error;

/// Boxed error returned by caller-supplied slug functions.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors raised while generating a sitemap.
#[derive(Debug, Error)]
pub enum SitemapError {
    #[error("invalid date `{value}`: cannot be parsed into an instant")]
    InvalidDate { value: String },

    #[error("slug source for route `{route}` failed")]
    SlugSourceFailure {
        route: String,
        #[source]
        source: BoxError,
    },
}

impl SitemapError {
    pub fn invalid_date(value: impl Into<String>) -> Self {
        Self::InvalidDate {
            value: value.into(),
        }
    }

    pub fn slug_source(route: impl Into<String>, source: BoxError) -> Self {
        Self::SlugSourceFailure {
            route: route.into(),
            source,
        }
    }
}

/// Result alias for generation operations.
pub type Result<T> = std::result::Result<T, SitemapError>;
