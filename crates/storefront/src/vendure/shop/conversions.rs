//! Wire-to-domain type conversion functions.

use mercantia_core::{AssetId, ChannelToken, CollectionId, SellerId};

use crate::vendure::types::{
    Breadcrumb, Collection, CollectionListItem, CollectionSummary, FeaturedAsset,
    RegisteredSeller, Seller, SellerCustomFields,
};

use super::queries::{
    FeaturedAssetRaw, get_collection, get_collections, get_collections_for_seller, get_seller,
    register_new_seller,
};

pub fn convert_featured_asset(asset: FeaturedAssetRaw) -> FeaturedAsset {
    FeaturedAsset {
        id: asset.id.map(AssetId::new),
        preview: asset.preview,
    }
}

pub fn convert_seller(seller: get_seller::SellerRaw) -> Seller {
    let custom = seller.custom_fields.unwrap_or_default();

    Seller {
        id: SellerId::new(seller.id),
        name: seller.name,
        custom_fields: SellerCustomFields {
            cnpj: custom.cnpj,
            company_name: custom.company_name,
            trading_name: custom.trading_name,
            state_registration: custom.state_registration,
            municipal_registration: custom.municipal_registration,
            business_phone: custom.business_phone,
            responsible_person: custom.responsible_person,
        },
    }
}

pub fn convert_collection_summary(
    collection: get_collections_for_seller::CollectionSummaryRaw,
) -> CollectionSummary {
    CollectionSummary {
        id: CollectionId::new(collection.id),
        name: collection.name,
        featured_asset: collection.featured_asset.map(convert_featured_asset),
    }
}

pub fn convert_collection_list_item(
    collection: get_collections::CollectionListItemRaw,
) -> CollectionListItem {
    CollectionListItem {
        id: CollectionId::new(collection.id),
        name: collection.name,
        slug: collection.slug,
        parent_name: collection.parent.map(|p| p.name),
        featured_asset: collection.featured_asset.map(convert_featured_asset),
    }
}

pub fn convert_collection(collection: get_collection::CollectionRaw) -> Collection {
    Collection {
        id: CollectionId::new(collection.id),
        name: collection.name,
        slug: collection.slug,
        breadcrumbs: collection
            .breadcrumbs
            .into_iter()
            .map(|b| Breadcrumb {
                id: CollectionId::new(b.id),
                name: b.name,
                slug: b.slug,
            })
            .collect(),
        children: collection
            .children
            .into_iter()
            .map(|c| CollectionSummary {
                id: CollectionId::new(c.id),
                name: c.name,
                featured_asset: c.featured_asset.map(convert_featured_asset),
            })
            .collect(),
    }
}

pub fn convert_registered_seller(
    seller: register_new_seller::RegisteredSellerRaw,
) -> RegisteredSeller {
    RegisteredSeller {
        id: SellerId::new(seller.id),
        code: seller.code,
        token: ChannelToken::new(seller.token),
    }
}
