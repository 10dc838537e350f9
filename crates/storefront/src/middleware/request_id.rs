//! Request ID middleware for request correlation.
//!
//! Every request gets an `x-request-id`: the value forwarded by the edge
//! proxy when present, otherwise a fresh UUID v4. The ID is recorded in the
//! tracing span, tagged on the Sentry scope, and echoed in the response so
//! a storefront page failure can be traced back through the logs.

use axum::{extract::Request, http::HeaderValue, middleware::Next, response::Response};
use tracing::Span;
use uuid::Uuid;

/// The HTTP header name for request IDs.
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Ensure every request carries a request ID and propagate it.
pub async fn request_id_middleware(request: Request, next: Next) -> Response {
    let request_id = request
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|h| h.to_str().ok())
        .map_or_else(|| Uuid::new_v4().to_string(), String::from);

    Span::current().record("request_id", &request_id);

    sentry::configure_scope(|scope| {
        scope.set_tag("request_id", &request_id);
    });

    let mut response = next.run(request).await;

    if let Ok(value) = HeaderValue::from_str(&request_id) {
        response.headers_mut().insert(REQUEST_ID_HEADER, value);
    }

    response
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_name_is_lowercase() {
        // HeaderMap lookups are case-insensitive but the constant must be
        // a valid lowercase header name for insert()
        assert_eq!(REQUEST_ID_HEADER, REQUEST_ID_HEADER.to_lowercase());
    }
}
