//! Slugs for dynamic routes and the sources that produce them.
//!
//! A [`SlugSource`] is either a plain list or a function, synchronous or
//! asynchronous. All three are exposed through one deferred interface,
//! [`SlugSource::load`], so route expansion has a single code path.

use super::MetaFields;
use crate::error::BoxError;
use futures::future::{self, BoxFuture, FutureExt};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::{fmt, future::Future, sync::Arc};

/// One value substituted into a dynamic route segment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Slug {
    /// Bare slug, inherits route-level metadata.
    Plain(String),
    /// Slug carrying its own metadata, which takes precedence over the route's.
    Detailed {
        slug: String,
        #[serde(flatten)]
        meta: MetaFields,
    },
}

impl Slug {
    /// String identity of the slug, used for substitution and dedup.
    pub fn value(&self) -> &str {
        match self {
            Self::Plain(slug) | Self::Detailed { slug, .. } => slug,
        }
    }

    /// Slug-level metadata (`None` for plain slugs).
    pub fn meta(&self) -> Option<&MetaFields> {
        match self {
            Self::Plain(_) => None,
            Self::Detailed { meta, .. } => Some(meta),
        }
    }

    pub fn detailed(slug: impl Into<String>, meta: MetaFields) -> Self {
        Self::Detailed {
            slug: slug.into(),
            meta,
        }
    }
}

impl From<&str> for Slug {
    fn from(s: &str) -> Self {
        Self::Plain(s.to_owned())
    }
}

impl From<String> for Slug {
    fn from(s: String) -> Self {
        Self::Plain(s)
    }
}

type SlugResult = Result<Vec<Slug>, BoxError>;
type SlugLoader = Arc<dyn Fn() -> BoxFuture<'static, SlugResult> + Send + Sync>;

/// Where a dynamic route gets its slugs from.
#[derive(Clone)]
pub enum SlugSource {
    /// Slugs given directly.
    List(Vec<Slug>),
    /// Zero-argument producer, invoked once per generation.
    Deferred(SlugLoader),
}

impl SlugSource {
    /// Wrap a synchronous slug function. An `Err` becomes a slug source failure.
    pub fn from_fn<F, E>(f: F) -> Self
    where
        F: Fn() -> Result<Vec<Slug>, E> + Send + Sync + 'static,
        E: Into<BoxError>,
    {
        let loader: SlugLoader = Arc::new(move || -> BoxFuture<'static, SlugResult> {
            future::ready(f().map_err(Into::into)).boxed()
        });
        Self::Deferred(loader)
    }

    /// Wrap an asynchronous slug function.
    pub fn from_async<F, Fut, E>(f: F) -> Self
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<Vec<Slug>, E>> + Send + 'static,
        E: Into<BoxError>,
    {
        let loader: SlugLoader = Arc::new(move || -> BoxFuture<'static, SlugResult> {
            f().map(|res: Result<Vec<Slug>, E>| res.map_err(Into::into))
                .boxed()
        });
        Self::Deferred(loader)
    }

    /// Resolve the slugs. Lists settle immediately; functions are invoked now
    /// and settle whenever their future does.
    pub fn load(&self) -> BoxFuture<'static, SlugResult> {
        match self {
            Self::List(slugs) => future::ready(Ok(slugs.clone())).boxed(),
            Self::Deferred(loader) => loader(),
        }
    }
}

impl Default for SlugSource {
    fn default() -> Self {
        Self::List(Vec::new())
    }
}

impl<S: Into<Slug>> FromIterator<S> for SlugSource {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::List(iter.into_iter().map(Into::into).collect())
    }
}

impl fmt::Debug for SlugSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::List(slugs) => f.debug_tuple("List").field(slugs).finish(),
            Self::Deferred(_) => f.write_str("Deferred(..)"),
        }
    }
}

impl<'de> Deserialize<'de> for SlugSource {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Vec::<Slug>::deserialize(deserializer).map(Self::List)
    }
}

impl Serialize for SlugSource {
    /// Function-backed sources have no data form and serialize as an empty list.
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::List(slugs) => slugs.serialize(serializer),
            Self::Deferred(_) => serializer.collect_seq(std::iter::empty::<&Slug>()),
        }
    }
}
