//! Per-entry sitemap metadata: change frequency, modification date, priority.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// How frequently a page is likely to change.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ChangeFreq {
    Always,
    Hourly,
    Daily,
    Weekly,
    Monthly,
    Yearly,
    Never,
}

impl ChangeFreq {
    /// Value used inside `<changefreq>`.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Always => "always",
            Self::Hourly => "hourly",
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
            Self::Yearly => "yearly",
            Self::Never => "never",
        }
    }
}

impl fmt::Display for ChangeFreq {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A modification date in any of the accepted representations.
///
/// All variants denote an instant; they are normalized to one textual form
/// by [`crate::resolve::normalize_date`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DateLike {
    /// Milliseconds since the Unix epoch.
    EpochMillis(i64),
    /// Free-form date text, e.g. `2020-01-01` or `December 17, 1995 03:24:00`.
    Text(String),
    /// An already-parsed instant (programmatic callers only).
    #[serde(skip_deserializing)]
    Instant(DateTime<Utc>),
}

impl From<&str> for DateLike {
    fn from(s: &str) -> Self {
        Self::Text(s.to_owned())
    }
}

impl From<String> for DateLike {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<i64> for DateLike {
    fn from(ms: i64) -> Self {
        Self::EpochMillis(ms)
    }
}

impl From<DateTime<Utc>> for DateLike {
    fn from(dt: DateTime<Utc>) -> Self {
        Self::Instant(dt)
    }
}

/// Optional metadata fields, present at the global, entry and slug levels.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MetaFields {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub changefreq: Option<ChangeFreq>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lastmod: Option<DateLike>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<f64>,
}

impl MetaFields {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_changefreq(mut self, changefreq: ChangeFreq) -> Self {
        self.changefreq = Some(changefreq);
        self
    }

    pub fn with_lastmod(mut self, lastmod: impl Into<DateLike>) -> Self {
        self.lastmod = Some(lastmod.into());
        self
    }

    pub fn with_priority(mut self, priority: f64) -> Self {
        self.priority = Some(priority);
        self
    }

    /// True when no field is set.
    pub fn is_empty(&self) -> bool {
        self.changefreq.is_none() && self.lastmod.is_none() && self.priority.is_none()
    }
}
