//! Collection route loaders.

use axum::{
    Json,
    extract::{OriginalUri, Path, Query, State},
};
use mercantia_core::ChannelToken;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::error::Result;
use crate::state::AppState;
use crate::vendure::CollectionListOptions;
use crate::vendure::types::{Collection, CollectionListItem};

/// Pagination query parameters for the collection list.
#[derive(Debug, Default, Deserialize)]
pub struct CollectionListQuery {
    pub take: Option<i64>,
    pub skip: Option<i64>,
}

impl CollectionListQuery {
    fn into_options(self) -> Option<CollectionListOptions> {
        if self.take.is_none() && self.skip.is_none() {
            return None;
        }
        Some(CollectionListOptions {
            take: self.take,
            skip: self.skip,
            top_level_only: None,
        })
    }
}

/// Payload for the channel-scoped collection list.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionsPage {
    pub tenant_token: ChannelToken,
    pub collections: Vec<CollectionListItem>,
}

/// Payload for a collection detail page.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionPage {
    pub tenant_token: ChannelToken,
    pub collection: Collection,
}

/// Load the channel-scoped collection list.
///
/// The channel token from the URL travels to the backend as the
/// `vendure-token` header; the backend scopes the list to that seller's
/// channel. Degrades to an empty list on failure.
#[instrument(skip(state, uri, query), fields(request_id))]
pub async fn index(
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
    Query(query): Query<CollectionListQuery>,
) -> Json<CollectionsPage> {
    let token = ChannelToken::extract(uri.path());

    let collections = match state
        .shop()
        .get_collections(&token, query.into_options())
        .await
    {
        Ok(collections) => collections,
        Err(e) => {
            tracing::error!(token = %token, "Failed to fetch collections: {e}");
            Vec::new()
        }
    };

    Json(CollectionsPage {
        tenant_token: token,
        collections,
    })
}

/// Load a collection detail by slug or id.
///
/// Unlike the landing loader there is no meaningful default payload here,
/// so an unknown collection surfaces as a 404.
///
/// # Errors
///
/// Returns `AppError` (404 for an unknown collection, 502 for upstream
/// failures).
#[instrument(skip(state, uri), fields(request_id))]
pub async fn show(
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
    Path((_token, slug)): Path<(String, String)>,
) -> Result<Json<CollectionPage>> {
    // The canonical extractor is the single source of tenant scoping; the
    // path parameter only names the collection.
    let token = ChannelToken::extract(uri.path());

    let collection = state.shop().get_collection(&token, &slug).await?;

    Ok(Json(CollectionPage {
        tenant_token: token,
        collection,
    }))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_list_query_without_params_has_no_options() {
        let query = CollectionListQuery::default();
        assert!(query.into_options().is_none());
    }

    #[test]
    fn test_list_query_with_take_builds_options() {
        let query = CollectionListQuery {
            take: Some(12),
            skip: None,
        };
        let options = query.into_options().unwrap();
        assert_eq!(options.take, Some(12));
        assert_eq!(options.skip, None);
    }

    #[test]
    fn test_collections_page_serializes_camel_case() {
        let page = CollectionsPage {
            tenant_token: ChannelToken::new("acme"),
            collections: Vec::new(),
        };
        let json = serde_json::to_value(&page).unwrap();
        assert_eq!(json["tenantToken"], "acme");
        assert_eq!(json["collections"], serde_json::json!([]));
    }
}
