//! GraphQL operations for the Vendure shop API.
//!
//! One module per operation: the query document, the operation name, and the
//! serde variable/response wire types. There is no introspection schema
//! checked in, so the wire types are written by hand and sent through
//! `graphql_client::QueryBody` instead of the derive codegen path.

use serde::{Deserialize, Serialize};

/// Shared wire shape for `featuredAsset` selections.
#[derive(Debug, Clone, Deserialize)]
pub struct FeaturedAssetRaw {
    #[serde(default)]
    pub id: Option<String>,
    pub preview: String,
}

/// Shared wire shape for `{ items: [...] }` list payloads.
#[derive(Debug, Clone, Deserialize)]
pub struct ItemList<T> {
    pub items: Vec<T>,
}

pub mod get_seller {
    use super::{Deserialize, Serialize};

    pub const OPERATION_NAME: &str = "GetSeller";
    pub const QUERY: &str = r"
        query GetSeller($id: ID!) {
            seller(id: $id) {
                id
                name
                customFields {
                    cnpj
                    companyName
                    tradingName
                    stateRegistration
                    municipalRegistration
                    businessPhone
                    responsiblePerson
                }
            }
        }
    ";

    #[derive(Debug, Serialize)]
    pub struct Variables {
        pub id: String,
    }

    #[derive(Debug, Clone, Deserialize)]
    pub struct ResponseData {
        pub seller: Option<SellerRaw>,
    }

    #[derive(Debug, Clone, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct SellerRaw {
        pub id: String,
        pub name: String,
        #[serde(default)]
        pub custom_fields: Option<SellerCustomFieldsRaw>,
    }

    #[derive(Debug, Clone, Default, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct SellerCustomFieldsRaw {
        #[serde(default)]
        pub cnpj: Option<String>,
        #[serde(default)]
        pub company_name: Option<String>,
        #[serde(default)]
        pub trading_name: Option<String>,
        #[serde(default)]
        pub state_registration: Option<String>,
        #[serde(default)]
        pub municipal_registration: Option<String>,
        #[serde(default)]
        pub business_phone: Option<String>,
        #[serde(default)]
        pub responsible_person: Option<String>,
    }
}

pub mod get_seller_by_token {
    use super::{Deserialize, Serialize};

    pub const OPERATION_NAME: &str = "GetSellerByToken";
    pub const QUERY: &str = r"
        query GetSellerByToken($token: String!) {
            seller(token: $token) {
                id
            }
        }
    ";

    #[derive(Debug, Serialize)]
    pub struct Variables {
        pub token: String,
    }

    #[derive(Debug, Clone, Deserialize)]
    pub struct ResponseData {
        pub seller: Option<SellerIdRaw>,
    }

    #[derive(Debug, Clone, Deserialize)]
    pub struct SellerIdRaw {
        pub id: String,
    }
}

pub mod get_collections_for_seller {
    use super::{Deserialize, FeaturedAssetRaw, ItemList, Serialize};

    pub const OPERATION_NAME: &str = "GetCollectionsForSeller";
    pub const QUERY: &str = r"
        query GetCollectionsForSeller($sellerId: ID!) {
            collections(sellerId: $sellerId) {
                items {
                    id
                    name
                    featuredAsset {
                        preview
                    }
                }
            }
        }
    ";

    #[derive(Debug, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct Variables {
        pub seller_id: String,
    }

    #[derive(Debug, Clone, Deserialize)]
    pub struct ResponseData {
        pub collections: ItemList<CollectionSummaryRaw>,
    }

    #[derive(Debug, Clone, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct CollectionSummaryRaw {
        pub id: String,
        pub name: String,
        #[serde(default)]
        pub featured_asset: Option<FeaturedAssetRaw>,
    }
}

pub mod get_collections {
    use super::{Deserialize, FeaturedAssetRaw, ItemList, Serialize};

    pub const OPERATION_NAME: &str = "GetCollections";
    pub const QUERY: &str = r"
        query GetCollections($options: CollectionListOptions) {
            collections(options: $options) {
                items {
                    id
                    name
                    slug
                    parent {
                        name
                    }
                    featuredAsset {
                        id
                        preview
                    }
                }
            }
        }
    ";

    #[derive(Debug, Serialize)]
    pub struct Variables {
        pub options: Option<CollectionListOptions>,
    }

    /// Subset of Vendure's `CollectionListOptions` input the storefront uses.
    #[derive(Debug, Clone, Default, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct CollectionListOptions {
        #[serde(skip_serializing_if = "Option::is_none")]
        pub take: Option<i64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub skip: Option<i64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub top_level_only: Option<bool>,
    }

    #[derive(Debug, Clone, Deserialize)]
    pub struct ResponseData {
        pub collections: ItemList<CollectionListItemRaw>,
    }

    #[derive(Debug, Clone, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct CollectionListItemRaw {
        pub id: String,
        pub name: String,
        pub slug: String,
        #[serde(default)]
        pub parent: Option<ParentRaw>,
        #[serde(default)]
        pub featured_asset: Option<FeaturedAssetRaw>,
    }

    #[derive(Debug, Clone, Deserialize)]
    pub struct ParentRaw {
        pub name: String,
    }
}

pub mod get_collection {
    use super::{Deserialize, FeaturedAssetRaw, Serialize};

    pub const OPERATION_NAME: &str = "GetCollection";
    pub const QUERY: &str = r"
        query GetCollection($slug: String, $id: ID) {
            collection(slug: $slug, id: $id) {
                id
                name
                slug
                breadcrumbs {
                    id
                    name
                    slug
                }
                children {
                    id
                    name
                    featuredAsset {
                        id
                        preview
                    }
                }
            }
        }
    ";

    #[derive(Debug, Serialize)]
    pub struct Variables {
        pub slug: Option<String>,
        pub id: Option<String>,
    }

    #[derive(Debug, Clone, Deserialize)]
    pub struct ResponseData {
        pub collection: Option<CollectionRaw>,
    }

    #[derive(Debug, Clone, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct CollectionRaw {
        pub id: String,
        pub name: String,
        pub slug: String,
        #[serde(default)]
        pub breadcrumbs: Vec<BreadcrumbRaw>,
        #[serde(default)]
        pub children: Vec<ChildRaw>,
    }

    #[derive(Debug, Clone, Deserialize)]
    pub struct BreadcrumbRaw {
        pub id: String,
        pub name: String,
        pub slug: String,
    }

    #[derive(Debug, Clone, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct ChildRaw {
        pub id: String,
        pub name: String,
        #[serde(default)]
        pub featured_asset: Option<FeaturedAssetRaw>,
    }
}

pub mod register_new_seller {
    use super::{Deserialize, Serialize};
    use crate::vendure::types::RegisterSellerInput;

    pub const OPERATION_NAME: &str = "RegisterNewSeller";
    pub const QUERY: &str = r"
        mutation RegisterNewSeller($input: RegisterSellerInput!) {
            registerNewSeller(input: $input) {
                id
                code
                token
            }
        }
    ";

    #[derive(Debug, Serialize)]
    pub struct Variables {
        pub input: RegisterSellerInput,
    }

    #[derive(Debug, Clone, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct ResponseData {
        pub register_new_seller: Option<RegisteredSellerRaw>,
    }

    #[derive(Debug, Clone, Deserialize)]
    pub struct RegisteredSellerRaw {
        pub id: String,
        pub code: String,
        pub token: String,
    }
}
