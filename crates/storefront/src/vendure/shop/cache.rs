//! Cache types for shop-API responses.
//!
//! Only collection data is cached. Seller and token lookups are resolved
//! fresh on every request.

use mercantia_core::{ChannelToken, SellerId};

use crate::vendure::types::{Collection, CollectionListItem, CollectionSummary};

/// Cache key for collection data.
#[derive(Debug, Clone, Hash, PartialEq, Eq)]
pub enum CacheKey {
    SellerCollections(SellerId),
    CollectionList(ChannelToken),
    Collection {
        token: ChannelToken,
        slug_or_id: String,
    },
}

/// Cached value types.
#[derive(Debug, Clone)]
pub enum CacheValue {
    Summaries(Vec<CollectionSummary>),
    List(Vec<CollectionListItem>),
    Collection(Box<Collection>),
}
