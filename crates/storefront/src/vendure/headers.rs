//! Channel header injection for outgoing shop-API requests.
//!
//! Vendure selects the active channel from the `vendure-token` request
//! header. The injector is a pure function over an explicit header map so it
//! can be shared safely between concurrent requests that start from the same
//! base options.

use axum::http::{HeaderMap, HeaderValue};
use mercantia_core::ChannelToken;

/// The fixed header name of Vendure's channel-token convention.
pub const CHANNEL_TOKEN_HEADER: &str = "vendure-token";

/// Merge the channel token into a copy of the base headers.
///
/// Returns a new map; `base` is never mutated. The header is always set,
/// to the empty string for an empty token - explicit absence keeps the
/// backend's default-channel fallback unambiguous.
#[must_use]
pub fn with_channel_token(token: &ChannelToken, base: &HeaderMap) -> HeaderMap {
    let mut headers = base.clone();

    // Channel tokens are URL path segments, so they are always valid header
    // values; fall back to the empty value if one somehow is not.
    let value = HeaderValue::from_str(token.as_str())
        .unwrap_or_else(|_| HeaderValue::from_static(""));
    headers.insert(CHANNEL_TOKEN_HEADER, value);

    headers
}
