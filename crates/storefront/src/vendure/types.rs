//! Domain types for the Vendure shop API.
//!
//! Read-only projections of backend entities, fetched per request. Field
//! names serialize in camelCase to match the Vendure wire format and the
//! loader payloads consumed by the presentation layer.

use mercantia_core::{AssetId, ChannelToken, CollectionId, SellerId};
use serde::{Deserialize, Serialize};

use super::FieldError;

/// A seller (tenant) projection with marketplace custom fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Seller {
    pub id: SellerId,
    pub name: String,
    pub custom_fields: SellerCustomFields,
}

/// Marketplace custom fields attached to the Seller entity.
///
/// Brazilian business identifiers: `cnpj` is the company tax id,
/// `state_registration`/`municipal_registration` are tax registration
/// numbers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SellerCustomFields {
    pub cnpj: Option<String>,
    pub company_name: Option<String>,
    pub trading_name: Option<String>,
    pub state_registration: Option<String>,
    pub municipal_registration: Option<String>,
    pub business_phone: Option<String>,
    pub responsible_person: Option<String>,
}

/// Asset preview reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeaturedAsset {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<AssetId>,
    pub preview: String,
}

/// Compact collection summary for a seller's landing page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionSummary {
    pub id: CollectionId,
    pub name: String,
    pub featured_asset: Option<FeaturedAsset>,
}

/// Collection entry in the channel-scoped collection list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionListItem {
    pub id: CollectionId,
    pub name: String,
    pub slug: String,
    /// Name of the parent collection, if any.
    pub parent_name: Option<String>,
    pub featured_asset: Option<FeaturedAsset>,
}

/// Breadcrumb entry on a collection detail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Breadcrumb {
    pub id: CollectionId,
    pub name: String,
    pub slug: String,
}

/// Collection detail with breadcrumbs and child collections.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Collection {
    pub id: CollectionId,
    pub name: String,
    pub slug: String,
    pub breadcrumbs: Vec<Breadcrumb>,
    pub children: Vec<CollectionSummary>,
}

/// Result of a successful seller registration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisteredSeller {
    pub id: SellerId,
    /// Channel code assigned by the backend.
    pub code: String,
    /// Channel token the new seller's storefront URLs will carry.
    pub token: ChannelToken,
}

/// Registration payload for a new seller.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterSellerInput {
    /// Public shop name; becomes the channel code.
    ///
    /// Required fields default to empty on deserialization so an omitted
    /// key reaches [`Self::validate`] and gets a field-level error instead
    /// of a deserialization rejection.
    #[serde(default)]
    pub shop_name: String,
    #[serde(default)]
    pub email_address: String,
    #[serde(default)]
    pub cnpj: String,
    #[serde(default)]
    pub company_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trading_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state_registration: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub municipal_registration: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub business_phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub responsible_person: Option<String>,
}

impl RegisterSellerInput {
    /// Validate required fields before the payload is sent to the backend.
    ///
    /// # Errors
    ///
    /// Returns one [`FieldError`] per missing required field.
    pub fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut errors = Vec::new();

        let required = [
            ("shopName", self.shop_name.as_str()),
            ("emailAddress", self.email_address.as_str()),
            ("cnpj", self.cnpj.as_str()),
            ("companyName", self.company_name.as_str()),
        ];

        for (field, value) in required {
            if value.trim().is_empty() {
                errors.push(FieldError {
                    field: field.to_string(),
                    message: "must not be empty".to_string(),
                });
            }
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn valid_input() -> RegisterSellerInput {
        RegisterSellerInput {
            shop_name: "Millity Tattoo".to_string(),
            email_address: "contact@millity.example".to_string(),
            cnpj: "12.345.678/0001-95".to_string(),
            company_name: "Millity Ltda".to_string(),
            trading_name: Some("Millity".to_string()),
            ..RegisterSellerInput::default()
        }
    }

    #[test]
    fn test_register_input_valid() {
        assert!(valid_input().validate().is_ok());
    }

    #[test]
    fn test_register_input_missing_cnpj_names_field() {
        let input = RegisterSellerInput {
            cnpj: String::new(),
            ..valid_input()
        };

        let errors = input.validate().unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "cnpj");
    }

    #[test]
    fn test_register_input_whitespace_is_missing() {
        let input = RegisterSellerInput {
            company_name: "   ".to_string(),
            ..valid_input()
        };

        let errors = input.validate().unwrap_err();
        assert_eq!(errors[0].field, "companyName");
    }

    #[test]
    fn test_register_input_collects_all_missing_fields() {
        let errors = RegisterSellerInput::default().validate().unwrap_err();
        let fields: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(
            fields,
            vec!["shopName", "emailAddress", "cnpj", "companyName"]
        );
    }

    #[test]
    fn test_register_input_omitted_required_key_deserializes_empty() {
        let input: RegisterSellerInput = serde_json::from_value(serde_json::json!({
            "shopName": "Millity Tattoo",
            "emailAddress": "contact@millity.example",
            "companyName": "Millity Ltda"
        }))
        .unwrap();

        // Absent keys land in validate(), not in a deserialization error
        assert_eq!(input.cnpj, "");
        let errors = input.validate().unwrap_err();
        assert_eq!(errors[0].field, "cnpj");
    }

    #[test]
    fn test_seller_serializes_camel_case() {
        let seller = Seller {
            id: SellerId::new("S42"),
            name: "Acme".to_string(),
            custom_fields: SellerCustomFields {
                company_name: Some("Acme Ltda".to_string()),
                ..SellerCustomFields::default()
            },
        };

        let json = serde_json::to_value(&seller).unwrap();
        assert_eq!(json["customFields"]["companyName"], "Acme Ltda");
        assert!(json["customFields"]["tradingName"].is_null());
    }

    #[test]
    fn test_register_input_optional_fields_omitted_on_wire() {
        let json = serde_json::to_value(valid_input()).unwrap();
        assert_eq!(json["shopName"], "Millity Tattoo");
        assert_eq!(json["tradingName"], "Millity");
        assert!(json.get("businessPhone").is_none());
    }
}
