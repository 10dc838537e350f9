//! HTTP route loaders for the storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                        - Liveness check
//! GET  /health/ready                  - Readiness check (probes the shop API)
//!
//! # Seller pages (tenant-scoped by the leading URL token)
//! GET  /{token}                       - Seller landing payload
//! GET  /{token}/collections           - Channel-scoped collection list
//! GET  /{token}/collections/{slug}    - Collection detail (slug or id)
//!
//! # Registration (tenant-agnostic)
//! POST /sellers/register              - Register a new seller
//! ```
//!
//! Every tenant-scoped loader derives the channel token from the request URI
//! through [`mercantia_core::ChannelToken::extract`] - never from framework
//! state - and returns a renderable payload even when seller resolution
//! fails.

pub mod collections;
pub mod register;
pub mod seller;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Create all routes for the storefront.
///
/// The registration route is declared before the `/{token}` tree so that
/// `sellers` is never treated as a channel token.
pub fn routes() -> Router<AppState> {
    Router::new()
        // Seller registration (tenant-agnostic)
        .route("/sellers/register", post(register::register))
        // Seller landing page loader
        .route("/{token}", get(seller::index))
        // Channel-scoped collection loaders
        .route("/{token}/collections", get(collections::index))
        .route("/{token}/collections/{slug}", get(collections::show))
}
