//! Seller registration route.

use axum::{Json, extract::State, http::StatusCode};
use tracing::instrument;

use crate::error::Result;
use crate::state::AppState;
use crate::vendure::types::{RegisterSellerInput, RegisteredSeller};

/// Register a new seller.
///
/// Tenant-agnostic: the outgoing mutation carries an empty channel token
/// (explicitly, so the backend's default-channel handling applies).
///
/// # Errors
///
/// Returns `AppError` (422 with field messages for rejected input, 502 for
/// upstream failures).
#[instrument(skip(state, input), fields(request_id, shop_name = %input.shop_name))]
pub async fn register(
    State(state): State<AppState>,
    Json(input): Json<RegisterSellerInput>,
) -> Result<(StatusCode, Json<RegisteredSeller>)> {
    let registered = state.shop().register_new_seller(input).await?;

    tracing::info!(
        seller_id = %registered.id,
        code = %registered.code,
        "New seller registered"
    );

    Ok((StatusCode::CREATED, Json(registered)))
}
