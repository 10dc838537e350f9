//! Channel token derived from the request URL.
//!
//! Every tenant-scoped storefront URL starts with the seller's channel token:
//! `/<token>/collections/...`. [`ChannelToken::extract`] is the single
//! canonical way to derive the token; call sites must never re-derive tenant
//! scoping from the URL themselves.

use serde::{Deserialize, Serialize};

/// Opaque channel token identifying which seller's data a request is scoped to.
///
/// An empty token means "no tenant scoping" - some endpoints (registration,
/// health checks) are tenant-agnostic, so an empty token is a valid value
/// rather than an error.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChannelToken(String);

impl ChannelToken {
    /// The empty token, used for tenant-agnostic requests.
    #[must_use]
    pub const fn none() -> Self {
        Self(String::new())
    }

    /// Create a token from a known value.
    #[must_use]
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Derive the channel token from a request URL or path.
    ///
    /// Accepts an absolute URL (`https://shop.mercantia.app/acme/...`) or a
    /// path (`/acme/...`). The first non-empty path segment is the token,
    /// with any query string or fragment stripped. A URL with no usable path
    /// segment yields the empty token - this is deliberate: not every route
    /// is tenant-scoped, so the extractor never fails.
    #[must_use]
    pub fn extract(url: &str) -> Self {
        // Skip over "scheme://authority" only when the "://" actually
        // delimits a scheme; a path segment containing "://" stays a path.
        let path = match url.split_once("://") {
            Some((scheme, rest)) if !scheme.contains('/') => {
                rest.find('/').map_or("", |slash| &rest[slash..])
            }
            _ => url,
        };

        path.split('/')
            .map(|segment| {
                segment
                    .split(['?', '#'])
                    .next()
                    .unwrap_or_default()
            })
            .find(|segment| !segment.is_empty())
            .map_or_else(Self::none, Self::new)
    }

    /// Whether this token carries no tenant scoping.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get the underlying token string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ChannelToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for ChannelToken {
    fn from(token: String) -> Self {
        Self(token)
    }
}

impl From<&str> for ChannelToken {
    fn from(token: &str) -> Self {
        Self(token.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_first_segment() {
        assert_eq!(ChannelToken::extract("/abc/def").as_str(), "abc");
        assert_eq!(ChannelToken::extract("/acme-seller/").as_str(), "acme-seller");
        assert_eq!(ChannelToken::extract("/acme-seller").as_str(), "acme-seller");
    }

    #[test]
    fn test_extract_empty_path() {
        assert!(ChannelToken::extract("/").is_empty());
        assert!(ChannelToken::extract("").is_empty());
        assert!(ChannelToken::extract("//").is_empty());
    }

    #[test]
    fn test_extract_absolute_url() {
        assert_eq!(
            ChannelToken::extract("https://shop.mercantia.app/acme/collections").as_str(),
            "acme"
        );
        assert!(ChannelToken::extract("https://shop.mercantia.app").is_empty());
        assert!(ChannelToken::extract("https://shop.mercantia.app/").is_empty());
    }

    #[test]
    fn test_extract_strips_query_and_fragment() {
        assert_eq!(ChannelToken::extract("/acme?page=2").as_str(), "acme");
        assert_eq!(ChannelToken::extract("/acme#top").as_str(), "acme");
        assert_eq!(
            ChannelToken::extract("https://shop.mercantia.app/acme?page=2").as_str(),
            "acme"
        );
    }

    #[test]
    fn test_extract_url_in_later_segment_is_not_a_scheme() {
        // A "://" inside the path must not demote the input to an
        // authority-prefixed URL
        assert_eq!(ChannelToken::extract("/acme/https://x").as_str(), "acme");
        assert_eq!(
            ChannelToken::extract("/acme/redirect?to=https://x").as_str(),
            "acme"
        );
    }

    #[test]
    fn test_extract_skips_leading_empty_segments() {
        // Double slashes collapse to the first real segment
        assert_eq!(ChannelToken::extract("//acme/def").as_str(), "acme");
    }

    #[test]
    fn test_extract_is_pure() {
        let url = "/acme-seller/collections";
        assert_eq!(ChannelToken::extract(url), ChannelToken::extract(url));
    }

    #[test]
    fn test_none_is_empty() {
        assert!(ChannelToken::none().is_empty());
        assert_eq!(ChannelToken::none().as_str(), "");
    }

    #[test]
    fn test_display() {
        assert_eq!(ChannelToken::new("acme").to_string(), "acme");
    }
}
