//! Final `<loc>` resolution.
//!
//! 1. Absolute explicit locations are kept, everything else is joined onto
//!    the base URL.
//! 2. The trailing slash policy is applied to the path component only;
//!    origin, query and fragment are untouched.
//! 3. The result is percent-encoded like a full URI: non-ASCII characters
//!    and characters that are never valid in a URI are escaped, reserved
//!    delimiters and existing `%XX` escapes are kept.

use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};

/// Characters escaped in addition to non-ASCII and controls.
/// `%` is handled separately so existing escapes survive.
const URI_ESCAPE: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'<')
    .add(b'>')
    .add(b'[')
    .add(b']')
    .add(b'\\')
    .add(b'^')
    .add(b'`')
    .add(b'{')
    .add(b'|')
    .add(b'}');

/// Where a candidate's location text came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocSource {
    /// A `loc` given by the user; may already be absolute.
    ExplicitLoc,
    /// A route path; always relative to the base URL.
    Path,
}

/// Resolve a candidate location to its final, absolute, encoded form.
pub fn resolve_location(base: &str, source: LocSource, value: &str, trailing_slash: bool) -> String {
    let joined = match source {
        LocSource::ExplicitLoc if has_scheme(value) => value.to_owned(),
        _ => join_base(base, value),
    };
    encode_uri(&apply_trailing_slash(&joined, trailing_slash))
}

/// Check if a location is absolute (`scheme://...`).
///
/// A valid scheme starts with a letter and only contains ASCII
/// alphanumerics or `+`, `-`, `.`. Without `://` a location such as
/// `page:2` or `localhost:8080/x` is relative.
#[inline]
pub fn has_scheme(loc: &str) -> bool {
    loc.find("://").is_some_and(|pos| {
        let scheme = &loc[..pos];
        scheme.starts_with(|c: char| c.is_ascii_alphabetic())
            && scheme
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
    })
}

/// `https://site.net/` + `about` -> `https://site.net/about`
fn join_base(base: &str, path: &str) -> String {
    let base = base.trim_end_matches('/');
    if path.starts_with('/') {
        format!("{base}{path}")
    } else {
        format!("{base}/{path}")
    }
}

/// Strip (`false`) or enforce exactly one (`true`) trailing slash on the
/// path component. The root path becomes the bare origin or `origin/`.
pub fn apply_trailing_slash(url: &str, trailing_slash: bool) -> String {
    let (origin, path, suffix) = split_url(url);
    let trimmed = path.trim_end_matches('/');
    let slash = if trailing_slash { "/" } else { "" };
    format!("{origin}{trimmed}{slash}{suffix}")
}

/// Split into (scheme + authority, path, query + fragment).
fn split_url(url: &str) -> (&str, &str, &str) {
    let path_start = match url.find("://") {
        Some(i) => {
            let authority = i + 3;
            url[authority..]
                .find(['/', '?', '#'])
                .map_or(url.len(), |j| authority + j)
        }
        None => 0,
    };
    let path_end = url[path_start..]
        .find(['?', '#'])
        .map_or(url.len(), |j| path_start + j);
    (
        &url[..path_start],
        &url[path_start..path_end],
        &url[path_end..],
    )
}

/// Percent-encode a whole URI, keeping valid `%XX` escapes.
pub fn encode_uri(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut rest = s;
    while let Some(pos) = rest.find('%') {
        out.extend(utf8_percent_encode(&rest[..pos], URI_ESCAPE));
        let tail = &rest[pos..];
        if is_percent_escape(tail) {
            out.push_str(&tail[..3]);
            rest = &tail[3..];
        } else {
            out.push_str("%25");
            rest = &tail[1..];
        }
    }
    out.extend(utf8_percent_encode(rest, URI_ESCAPE));
    out
}

#[inline]
fn is_percent_escape(s: &str) -> bool {
    let bytes = s.as_bytes();
    bytes.len() >= 3 && bytes[1].is_ascii_hexdigit() && bytes[2].is_ascii_hexdigit()
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "https://website.net";

    #[test]
    fn test_has_scheme() {
        assert!(has_scheme("https://example.com"));
        assert!(has_scheme("http://example.com"));
        assert!(has_scheme("HTTPS://example.com"));
        assert!(!has_scheme("/about"));
        assert!(!has_scheme("about"));
        assert!(!has_scheme("/a:b"));
        assert!(!has_scheme("1http://x"));
        assert!(!has_scheme(":nothing"));
        assert!(!has_scheme("/a://b"));
    }

    #[test]
    fn test_colon_without_authority_is_relative() {
        assert!(!has_scheme("page:2"));
        assert!(!has_scheme("localhost:8080/x"));
        assert_eq!(
            resolve_location(BASE, LocSource::ExplicitLoc, "page:2", false),
            "https://website.net/page:2"
        );
        assert_eq!(
            resolve_location(BASE, LocSource::ExplicitLoc, "localhost:8080/x", false),
            "https://website.net/localhost:8080/x"
        );
    }

    #[test]
    fn test_relative_paths_join_base() {
        assert_eq!(
            resolve_location(BASE, LocSource::Path, "/about", false),
            "https://website.net/about"
        );
        assert_eq!(
            resolve_location("https://website.net/", LocSource::ExplicitLoc, "about", false),
            "https://website.net/about"
        );
    }

    #[test]
    fn test_absolute_explicit_loc_kept() {
        assert_eq!(
            resolve_location(BASE, LocSource::ExplicitLoc, "https://other.org/page/", false),
            "https://other.org/page"
        );
        // A route path is always relative, even if it looks absolute
        assert_eq!(
            resolve_location(BASE, LocSource::Path, "/x", true),
            "https://website.net/x/"
        );
    }

    #[test]
    fn test_root_trailing_slash() {
        assert_eq!(resolve_location(BASE, LocSource::Path, "/", false), BASE);
        assert_eq!(
            resolve_location(BASE, LocSource::Path, "/", true),
            "https://website.net/"
        );
        assert_eq!(
            resolve_location(BASE, LocSource::ExplicitLoc, "https://website.net", true),
            "https://website.net/"
        );
    }

    #[test]
    fn test_trailing_slash_policy() {
        assert_eq!(apply_trailing_slash("https://a.b/x///", false), "https://a.b/x");
        assert_eq!(apply_trailing_slash("https://a.b/x", true), "https://a.b/x/");
        assert_eq!(apply_trailing_slash("https://a.b/x//", true), "https://a.b/x/");
        assert_eq!(
            apply_trailing_slash("https://a.b/x/?q=1#top", false),
            "https://a.b/x?q=1#top"
        );
        assert_eq!(
            apply_trailing_slash("https://a.b/x?q=1/", true),
            "https://a.b/x/?q=1/"
        );
        assert_eq!(apply_trailing_slash("https://a.b?q=1", true), "https://a.b/?q=1");
    }

    #[test]
    fn test_trailing_slash_idempotent() {
        for url in [
            "https://a.b",
            "https://a.b/",
            "https://a.b/x/y/",
            "https://a.b/x?y=/",
            "mailto:someone@a.b",
        ] {
            for policy in [false, true] {
                let once = apply_trailing_slash(url, policy);
                assert_eq!(apply_trailing_slash(&once, policy), once, "{url} / {policy}");
            }
        }
    }

    #[test]
    fn test_encodes_non_ascii_host() {
        assert_eq!(
            resolve_location("https://éléphant.net", LocSource::Path, "/about", false),
            "https://%C3%A9l%C3%A9phant.net/about"
        );
    }

    #[test]
    fn test_encode_uri() {
        assert_eq!(encode_uri("/a b"), "/a%20b");
        assert_eq!(encode_uri("/say\"hi\""), "/say%22hi%22");
        assert_eq!(encode_uri("/search?q=a&b=c#top"), "/search?q=a&b=c#top");
        assert_eq!(encode_uri("/caf%C3%A9"), "/caf%C3%A9");
        assert_eq!(encode_uri("/100%"), "/100%25");
        assert_eq!(encode_uri("/50%off"), "/50%25off");
        assert_eq!(encode_uri("/<tag>{x}|^`"), "/%3Ctag%3E%7Bx%7D%7C%5E%60");
        assert_eq!(encode_uri("/日本"), "/%E6%97%A5%E6%9C%AC");
    }

    #[test]
    fn test_encode_uri_idempotent() {
        let once = encode_uri("https://éléphant.net/a b/100%/\"q\"");
        assert_eq!(encode_uri(&once), once);
    }
}
