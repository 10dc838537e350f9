//! Seller landing page loader.

use axum::{
    Json,
    extract::{OriginalUri, State},
};
use mercantia_core::ChannelToken;
use serde::Serialize;
use tracing::instrument;

use crate::state::AppState;
use crate::vendure::VendureError;
use crate::vendure::types::{CollectionSummary, Seller};

/// Payload for the seller landing page.
///
/// `seller_data` is `None` and `collections` empty when the token does not
/// resolve - the page renders a "seller not found" state instead of failing.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SellerPage {
    pub tenant_token: ChannelToken,
    pub seller_data: Option<Seller>,
    pub collections: Vec<CollectionSummary>,
}

impl SellerPage {
    fn empty(tenant_token: ChannelToken) -> Self {
        Self {
            tenant_token,
            seller_data: None,
            collections: Vec::new(),
        }
    }
}

/// Load the seller landing page payload.
///
/// Resolves the channel token to a seller id once, then fetches the seller
/// projection and its collections. Never fails: unknown tokens and upstream
/// failures degrade to an empty payload.
#[instrument(skip(state, uri), fields(request_id))]
pub async fn index(State(state): State<AppState>, OriginalUri(uri): OriginalUri) -> Json<SellerPage> {
    let token = ChannelToken::extract(uri.path());

    let seller_id = match state.shop().get_seller_by_token(&token).await {
        Ok(id) => id,
        Err(VendureError::NotFound(_)) => {
            tracing::debug!(token = %token, "No seller for channel token");
            return Json(SellerPage::empty(token));
        }
        Err(e) => {
            tracing::error!(token = %token, "Failed to resolve channel token: {e}");
            return Json(SellerPage::empty(token));
        }
    };

    // Both fetches depend only on the resolved id and run concurrently.
    let (seller, collections) = tokio::join!(
        state.shop().get_seller(&seller_id),
        state.shop().get_collections_for_seller(&seller_id),
    );

    let seller_data = match seller {
        Ok(seller) => Some(seller),
        Err(e) => {
            tracing::error!(seller_id = %seller_id, "Failed to fetch seller: {e}");
            None
        }
    };

    let collections = match collections {
        Ok(collections) => collections,
        Err(e) => {
            tracing::error!(seller_id = %seller_id, "Failed to fetch seller collections: {e}");
            Vec::new()
        }
    };

    Json(SellerPage {
        tenant_token: token,
        seller_data,
        collections,
    })
}
