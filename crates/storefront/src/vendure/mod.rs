//! Vendure shop-API client.
//!
//! # Architecture
//!
//! - Uses the `graphql-client` wire types for GraphQL over `reqwest`
//! - Vendure is source of truth - NO local sync, direct API calls
//! - Every call carries a `vendure-token` channel header derived from the
//!   request URL (see [`headers`])
//! - In-memory caching via `moka` for collection data (5 minute TTL);
//!   seller/token resolution is never cached
//!
//! # Example
//!
//! ```rust,ignore
//! use mercantia_storefront::vendure::ShopClient;
//!
//! let client = ShopClient::new(&config.vendure);
//!
//! // Resolve the channel token, then fetch seller-scoped data
//! let seller_id = client.get_seller_by_token(&token).await?;
//! let seller = client.get_seller(&seller_id).await?;
//! let collections = client.get_collections_for_seller(&seller_id).await?;
//! ```

pub mod headers;
mod shop;
pub mod types;

pub use shop::{CollectionListOptions, ShopClient};
pub use types::*;

use thiserror::Error;

/// Errors that can occur when interacting with the Vendure shop API.
#[derive(Debug, Error)]
pub enum VendureError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// GraphQL query returned errors.
    #[error("GraphQL errors: {}", format_graphql_errors(.0))]
    GraphQL(Vec<GraphQLError>),

    /// JSON parsing failed.
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Resource not found (unknown channel token, seller id, or collection).
    #[error("Not found: {0}")]
    NotFound(String),

    /// Input rejected by validation (client-side or backend `USER_INPUT_ERROR`).
    #[error("Validation failed: {}", format_field_errors(.0))]
    Validation(Vec<FieldError>),
}

/// A field-level validation failure.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct FieldError {
    /// Name of the rejected input field.
    pub field: String,
    /// Human-readable message.
    pub message: String,
}

/// A GraphQL error returned by the Vendure API.
#[derive(Debug, Clone)]
pub struct GraphQLError {
    /// Error message.
    pub message: String,
    /// Path to the error in the response.
    pub path: Vec<serde_json::Value>,
    /// Vendure error extensions (`code`, field info).
    pub extensions: Option<serde_json::Value>,
}

impl GraphQLError {
    /// The Vendure error code from extensions, if present.
    #[must_use]
    pub fn code(&self) -> Option<&str> {
        self.extensions
            .as_ref()
            .and_then(|ext| ext.get("code"))
            .and_then(|code| code.as_str())
    }
}

/// Map backend-signaled input errors to field errors.
///
/// Vendure surfaces rejected mutation input as GraphQL errors with a
/// `USER_INPUT_ERROR` (or Apollo `BAD_USER_INPUT`) extension code. Returns
/// `None` when any error in the batch is not an input error, so transport
/// and server failures keep their upstream classification.
#[must_use]
pub fn validation_errors(errors: &[GraphQLError]) -> Option<Vec<FieldError>> {
    let all_input_errors = !errors.is_empty()
        && errors
            .iter()
            .all(|e| matches!(e.code(), Some("USER_INPUT_ERROR" | "BAD_USER_INPUT")));

    if !all_input_errors {
        return None;
    }

    Some(
        errors
            .iter()
            .map(|e| FieldError {
                field: e
                    .extensions
                    .as_ref()
                    .and_then(|ext| ext.get("field"))
                    .and_then(|f| f.as_str())
                    .unwrap_or("input")
                    .to_string(),
                message: e.message.clone(),
            })
            .collect(),
    )
}

fn format_field_errors(errors: &[FieldError]) -> String {
    if errors.is_empty() {
        return "(no field details provided)".to_string();
    }

    errors
        .iter()
        .map(|e| format!("{}: {}", e.field, e.message))
        .collect::<Vec<_>>()
        .join("; ")
}

fn format_graphql_errors(errors: &[GraphQLError]) -> String {
    if errors.is_empty() {
        return "(no error details provided)".to_string();
    }

    errors
        .iter()
        .enumerate()
        .map(|(i, e)| {
            let mut parts = Vec::new();

            // Include message if present
            if !e.message.is_empty() {
                parts.push(e.message.clone());
            }

            // Include the Vendure error code if present
            if let Some(code) = e.code() {
                parts.push(format!("code: {code}"));
            }

            // Include path if present
            if !e.path.is_empty() {
                let path_str = e
                    .path
                    .iter()
                    .map(|p| match p {
                        serde_json::Value::String(s) => s.clone(),
                        other => other.to_string(),
                    })
                    .collect::<Vec<_>>()
                    .join(".");
                parts.push(format!("path: {path_str}"));
            }

            if parts.is_empty() {
                format!("[error {}]: (no details)", i + 1)
            } else {
                parts.join(" ")
            }
        })
        .collect::<Vec<_>>()
        .join("; ")
}
