//! Vendure shop-API client implementation.
//!
//! Uses the `graphql_client` wire types with `reqwest` 0.13 for HTTP.
//! Caches collection data using `moka` (5-minute TTL); seller and channel
//! token lookups are resolved fresh on every request.

mod cache;
mod conversions;

pub mod queries;

use std::sync::Arc;
use std::time::Duration;

use axum::http::{HeaderMap, HeaderValue, header};
use graphql_client::{QueryBody, Response};
use mercantia_core::{ChannelToken, SellerId};
use moka::future::Cache;
use secrecy::ExposeSecret;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, instrument};

use crate::config::VendureShopConfig;
use crate::vendure::headers::with_channel_token;
use crate::vendure::types::{
    Collection, CollectionListItem, CollectionSummary, RegisterSellerInput, RegisteredSeller,
    Seller,
};
use crate::vendure::{GraphQLError, VendureError, validation_errors};

use cache::{CacheKey, CacheValue};
use conversions::{
    convert_collection, convert_collection_list_item, convert_collection_summary,
    convert_registered_seller, convert_seller,
};
use queries::{
    get_collection, get_collections, get_collections_for_seller, get_seller, get_seller_by_token,
    register_new_seller,
};

pub use queries::get_collections::CollectionListOptions;

// =============================================================================
// ShopClient
// =============================================================================

/// Client for the Vendure shop API.
///
/// Provides seller-scoped access to sellers, collections, and seller
/// registration. Channel scoping travels on the `vendure-token` header; the
/// token is supplied per call and never stored on the client, since it is
/// derived per request. Collection data is cached for 5 minutes.
#[derive(Clone)]
pub struct ShopClient {
    inner: Arc<ShopClientInner>,
}

struct ShopClientInner {
    client: reqwest::Client,
    endpoint: String,
    base_headers: HeaderMap,
    cache: Cache<CacheKey, CacheValue>,
}

impl ShopClient {
    /// Create a new shop-API client.
    #[must_use]
    pub fn new(config: &VendureShopConfig) -> Self {
        let cache = Cache::builder()
            .max_capacity(1000)
            .time_to_live(Duration::from_secs(300)) // 5 minutes
            .build();

        // Headers shared by every call; the channel token is merged in
        // per request by the header injector.
        let mut base_headers = HeaderMap::new();
        if let Some(token) = &config.bearer_token
            && let Ok(value) =
                HeaderValue::from_str(&format!("Bearer {}", token.expose_secret()))
        {
            base_headers.insert(header::AUTHORIZATION, value);
        }

        Self {
            inner: Arc::new(ShopClientInner {
                client: reqwest::Client::new(),
                endpoint: config.shop_api_url.to_string(),
                base_headers,
                cache,
            }),
        }
    }

    /// Execute a GraphQL operation scoped to the given channel token.
    async fn execute<V, D>(
        &self,
        query: &'static str,
        operation_name: &'static str,
        variables: V,
        token: &ChannelToken,
    ) -> Result<D, VendureError>
    where
        V: Serialize,
        D: DeserializeOwned,
    {
        let request_body = QueryBody {
            variables,
            query,
            operation_name,
        };

        let response = self
            .inner
            .client
            .post(&self.inner.endpoint)
            .headers(with_channel_token(token, &self.inner.base_headers))
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();

        // Get response body as text first for better error diagnostics
        let response_text = response.text().await?;

        // Check for non-success status codes
        if !status.is_success() {
            tracing::error!(
                status = %status,
                body = %response_text.chars().take(500).collect::<String>(),
                "Vendure shop API returned non-success status"
            );
            return Err(VendureError::GraphQL(vec![GraphQLError {
                message: format!(
                    "HTTP {status}: {}",
                    response_text.chars().take(200).collect::<String>()
                ),
                path: vec![],
                extensions: None,
            }]));
        }

        // Parse the response
        let response: Response<D> = match serde_json::from_str(&response_text) {
            Ok(r) => r,
            Err(e) => {
                tracing::error!(
                    error = %e,
                    body = %response_text.chars().take(500).collect::<String>(),
                    "Failed to parse Vendure GraphQL response"
                );
                return Err(VendureError::Parse(e));
            }
        };

        // Check for GraphQL errors
        if let Some(errors) = response.errors
            && !errors.is_empty()
        {
            tracing::debug!(
                errors = ?errors,
                "GraphQL errors in response"
            );

            return Err(VendureError::GraphQL(
                errors
                    .into_iter()
                    .map(|e| GraphQLError {
                        message: e.message,
                        path: e.path.map_or_else(Vec::new, |p| {
                            p.into_iter()
                                .map(|fragment| match fragment {
                                    graphql_client::PathFragment::Key(s) => {
                                        serde_json::Value::String(s)
                                    }
                                    graphql_client::PathFragment::Index(i) => {
                                        serde_json::Value::Number(i.into())
                                    }
                                })
                                .collect()
                        }),
                        extensions: e
                            .extensions
                            .and_then(|ext| serde_json::to_value(ext).ok()),
                    })
                    .collect(),
            ));
        }

        response.data.ok_or_else(|| {
            tracing::error!(
                body = %response_text.chars().take(500).collect::<String>(),
                "Vendure GraphQL response has no data and no errors"
            );
            VendureError::GraphQL(vec![GraphQLError {
                message: "No data in response".to_string(),
                path: vec![],
                extensions: None,
            }])
        })
    }

    /// Probe shop-API reachability for the readiness check.
    ///
    /// Sends a minimal `__typename` query; any well-formed GraphQL response
    /// counts as reachable.
    pub async fn ping(&self) -> bool {
        #[derive(Debug, serde::Deserialize)]
        struct Ping {
            #[serde(rename = "__typename")]
            _typename: String,
        }

        self.execute::<(), Ping>(
            "query Ping { __typename }",
            "Ping",
            (),
            &ChannelToken::none(),
        )
        .await
        .is_ok()
    }

    // =========================================================================
    // Seller Methods (not cached - resolved fresh per request)
    // =========================================================================

    /// Get a seller projection by id.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the id does not resolve, or an upstream error
    /// if the API request fails.
    #[instrument(skip(self), fields(seller_id = %id))]
    pub async fn get_seller(&self, id: &SellerId) -> Result<Seller, VendureError> {
        let variables = get_seller::Variables {
            id: id.as_str().to_string(),
        };

        let data: get_seller::ResponseData = self
            .execute(
                get_seller::QUERY,
                get_seller::OPERATION_NAME,
                variables,
                &ChannelToken::none(),
            )
            .await?;

        data.seller
            .map(convert_seller)
            .ok_or_else(|| VendureError::NotFound(format!("Seller not found: {id}")))
    }

    /// Resolve a channel token to the owning seller's id.
    ///
    /// Single point of truth for token resolution: every other seller-scoped
    /// operation takes the `SellerId` this returns rather than re-deriving
    /// tenant scoping.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` for the empty token or when no seller matches,
    /// or an upstream error if the API request fails.
    #[instrument(skip(self), fields(token = %token))]
    pub async fn get_seller_by_token(
        &self,
        token: &ChannelToken,
    ) -> Result<SellerId, VendureError> {
        if token.is_empty() {
            // Tenant-agnostic requests have no seller to resolve.
            return Err(VendureError::NotFound(
                "empty channel token".to_string(),
            ));
        }

        let variables = get_seller_by_token::Variables {
            token: token.as_str().to_string(),
        };

        let data: get_seller_by_token::ResponseData = self
            .execute(
                get_seller_by_token::QUERY,
                get_seller_by_token::OPERATION_NAME,
                variables,
                &ChannelToken::none(),
            )
            .await?;

        data.seller
            .map(|s| SellerId::new(s.id))
            .ok_or_else(|| VendureError::NotFound(format!("Seller not found for token: {token}")))
    }

    // =========================================================================
    // Collection Methods (cached)
    // =========================================================================

    /// Get the collection summaries belonging to a seller.
    ///
    /// Returns an empty vec when the seller has no collections.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    #[instrument(skip(self), fields(seller_id = %id))]
    pub async fn get_collections_for_seller(
        &self,
        id: &SellerId,
    ) -> Result<Vec<CollectionSummary>, VendureError> {
        let cache_key = CacheKey::SellerCollections(id.clone());

        // Check cache
        if let Some(CacheValue::Summaries(summaries)) = self.inner.cache.get(&cache_key).await {
            debug!("Cache hit for seller collections");
            return Ok(summaries);
        }

        let variables = get_collections_for_seller::Variables {
            seller_id: id.as_str().to_string(),
        };

        let data: get_collections_for_seller::ResponseData = self
            .execute(
                get_collections_for_seller::QUERY,
                get_collections_for_seller::OPERATION_NAME,
                variables,
                &ChannelToken::none(),
            )
            .await?;

        let summaries: Vec<CollectionSummary> = data
            .collections
            .items
            .into_iter()
            .map(convert_collection_summary)
            .collect();

        // Cache the result
        self.inner
            .cache
            .insert(cache_key, CacheValue::Summaries(summaries.clone()))
            .await;

        Ok(summaries)
    }

    /// Get the channel-scoped collection list.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    #[instrument(skip(self, options), fields(token = %token))]
    pub async fn get_collections(
        &self,
        token: &ChannelToken,
        options: Option<CollectionListOptions>,
    ) -> Result<Vec<CollectionListItem>, VendureError> {
        let cache_key = CacheKey::CollectionList(token.clone());

        // Check cache (only for default queries without list options)
        if options.is_none()
            && let Some(CacheValue::List(items)) = self.inner.cache.get(&cache_key).await
        {
            debug!("Cache hit for collection list");
            return Ok(items);
        }

        let default_query = options.is_none();
        let variables = get_collections::Variables { options };

        let data: get_collections::ResponseData = self
            .execute(
                get_collections::QUERY,
                get_collections::OPERATION_NAME,
                variables,
                token,
            )
            .await?;

        let items: Vec<CollectionListItem> = data
            .collections
            .items
            .into_iter()
            .map(convert_collection_list_item)
            .collect();

        // Cache if not an option-filtered query
        if default_query {
            self.inner
                .cache
                .insert(cache_key, CacheValue::List(items.clone()))
                .await;
        }

        Ok(items)
    }

    /// Get a collection by slug or id.
    ///
    /// An all-digit value is sent as an id, anything else as a slug.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the collection is absent, or an upstream error
    /// if the API request fails.
    #[instrument(skip(self), fields(token = %token, slug_or_id = %slug_or_id))]
    pub async fn get_collection(
        &self,
        token: &ChannelToken,
        slug_or_id: &str,
    ) -> Result<Collection, VendureError> {
        let cache_key = CacheKey::Collection {
            token: token.clone(),
            slug_or_id: slug_or_id.to_string(),
        };

        // Check cache
        if let Some(CacheValue::Collection(collection)) = self.inner.cache.get(&cache_key).await {
            debug!("Cache hit for collection");
            return Ok(*collection);
        }

        let is_id = !slug_or_id.is_empty() && slug_or_id.bytes().all(|b| b.is_ascii_digit());
        let variables = get_collection::Variables {
            slug: (!is_id).then(|| slug_or_id.to_string()),
            id: is_id.then(|| slug_or_id.to_string()),
        };

        let data: get_collection::ResponseData = self
            .execute(
                get_collection::QUERY,
                get_collection::OPERATION_NAME,
                variables,
                token,
            )
            .await?;

        let collection = data
            .collection
            .map(convert_collection)
            .ok_or_else(|| VendureError::NotFound(format!("Collection not found: {slug_or_id}")))?;

        // Cache the result
        self.inner
            .cache
            .insert(
                cache_key,
                CacheValue::Collection(Box::new(collection.clone())),
            )
            .await;

        Ok(collection)
    }

    // =========================================================================
    // Seller Registration (not cached - mutation)
    // =========================================================================

    /// Register a new seller.
    ///
    /// Required fields are validated before the mutation is sent; backend
    /// input rejections (e.g. a duplicate cnpj) surface the same way.
    ///
    /// # Errors
    ///
    /// Returns `Validation` with field-level messages for rejected input,
    /// or an upstream error if the API request fails.
    #[instrument(skip(self, input), fields(shop_name = %input.shop_name))]
    pub async fn register_new_seller(
        &self,
        input: RegisterSellerInput,
    ) -> Result<RegisteredSeller, VendureError> {
        input.validate().map_err(VendureError::Validation)?;

        let variables = register_new_seller::Variables { input };

        let result: Result<register_new_seller::ResponseData, VendureError> = self
            .execute(
                register_new_seller::QUERY,
                register_new_seller::OPERATION_NAME,
                variables,
                &ChannelToken::none(),
            )
            .await;

        let data = match result {
            Ok(data) => data,
            Err(VendureError::GraphQL(errors)) => {
                // Backend-rejected input (duplicate cnpj, malformed fields)
                // carries a USER_INPUT_ERROR extension code.
                return match validation_errors(&errors) {
                    Some(fields) => Err(VendureError::Validation(fields)),
                    None => Err(VendureError::GraphQL(errors)),
                };
            }
            Err(e) => return Err(e),
        };

        data.register_new_seller
            .map(convert_registered_seller)
            .ok_or_else(|| {
                VendureError::GraphQL(vec![GraphQLError {
                    message: "Failed to register seller".to_string(),
                    path: vec![],
                    extensions: None,
                }])
            })
    }
}
