//! Integration tests for the Mercantia storefront.
//!
//! The storefront router is driven in-process with `tower::ServiceExt::oneshot`
//! against an `httpmock` stand-in for the Vendure shop API, so the full
//! loader path runs: token extraction from the URI, channel-header
//! injection, GraphQL round trip, payload shaping.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p mercantia-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `seller_pages` - Tenant-scoped loader payloads and degradation
//! - `seller_registration` - The tenant-agnostic registration flow

use std::net::{IpAddr, Ipv4Addr};

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use mercantia_storefront::config::{StorefrontConfig, VendureShopConfig};
use mercantia_storefront::routes;
use mercantia_storefront::state::AppState;
use serde_json::Value;
use tower::{Layer, ServiceExt};
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Build the storefront service wired to the given shop-API endpoint.
///
/// Mirrors the production assembly: routes plus trailing-slash
/// normalization, so `/acme-seller/` and `/acme-seller` behave alike.
///
/// # Panics
///
/// Panics if `shop_api_url` is not a valid URL.
#[must_use]
pub fn storefront_app(shop_api_url: &str) -> NormalizePath<Router> {
    let config = StorefrontConfig {
        host: IpAddr::V4(Ipv4Addr::LOCALHOST),
        port: 0,
        vendure: VendureShopConfig {
            shop_api_url: shop_api_url.parse().expect("valid shop-API URL"),
            bearer_token: None,
        },
        sentry_dsn: None,
        sentry_environment: None,
    };
    let state = AppState::new(config);

    NormalizePathLayer::trim_trailing_slash().layer(routes::routes().with_state(state))
}

/// Send a GET request and return the status with the parsed JSON body.
///
/// # Panics
///
/// Panics if the request cannot be built or the body is not JSON.
pub async fn get_json(app: &NormalizePath<Router>, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .uri(uri)
        .body(Body::empty())
        .expect("valid request");

    send(app, request).await
}

/// Send a POST request with a JSON body and return the status with the
/// parsed JSON response body.
///
/// # Panics
///
/// Panics if the request cannot be built or the body is not JSON.
pub async fn post_json(app: &NormalizePath<Router>, uri: &str, body: &Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("valid request");

    send(app, request).await
}

async fn send(app: &NormalizePath<Router>, request: Request<Body>) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(request)
        .await
        .expect("infallible service");

    let status = response.status();
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("collect response body")
        .to_bytes();

    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("JSON response body")
    };

    (status, body)
}
