//! Config field path used to point diagnostics at the offending value.

use owo_colors::OwoColorize;
use std::fmt;

/// Dotted path to a config field, with list indices.
///
/// # Example
///
/// ```ignore
/// let path = FieldPath::new("routes").index(2).field("priority");
/// assert_eq!(path.as_str(), "routes[2].priority");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldPath(String);

impl FieldPath {
    #[inline]
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    /// Append a list index: `urls` -> `urls[3]`.
    pub fn index(&self, i: usize) -> Self {
        Self(format!("{}[{i}]", self.0))
    }

    /// Append a nested field: `urls[3]` -> `urls[3].loc`.
    pub fn field(&self, name: &str) -> Self {
        Self(format!("{}.{name}", self.0))
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", format_args!("`{}`", self.0).bright_blue())
    }
}

impl AsRef<str> for FieldPath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_building() {
        let routes = FieldPath::new("routes");
        assert_eq!(routes.index(2).as_str(), "routes[2]");
        assert_eq!(
            routes.index(2).field("sitemap").field("priority").as_str(),
            "routes[2].sitemap.priority"
        );
        assert_eq!(FieldPath::new("baseURL").as_ref(), "baseURL");
    }
}
