//! Newtype IDs for type-safe entity references.
//!
//! Use the `define_id!` macro to create type-safe ID wrappers that prevent
//! accidentally mixing IDs from different entity types.
//!
//! Vendure entity IDs are opaque strings on the wire (`"S42"`, `"1"`), so the
//! wrappers hold a `String` rather than an integer.

/// Macro to define a type-safe ID wrapper.
///
/// Creates a newtype wrapper around `String` with:
/// - `Serialize`/`Deserialize` with `#[serde(transparent)]`
/// - `Debug`, `Clone`, `PartialEq`, `Eq`, `Hash`
/// - Conversion methods: `new()`, `as_str()`, `into_inner()`
/// - `From<String>` and `From<&str>` implementations
///
/// # Example
///
/// ```rust
/// # use mercantia_core::define_id;
/// define_id!(SellerId);
/// define_id!(CollectionId);
///
/// let seller_id = SellerId::new("S42");
/// let collection_id = CollectionId::new("S42");
///
/// // These are different types, so this won't compile:
/// // let _: SellerId = collection_id;
/// ```
#[macro_export]
macro_rules! define_id {
    ($name:ident) => {
        #[derive(
            Debug,
            Clone,
            PartialEq,
            Eq,
            Hash,
            ::serde::Serialize,
            ::serde::Deserialize
        )]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create a new ID from any string-like value.
            #[must_use]
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Get the underlying string value.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume the wrapper and return the underlying string.
            #[must_use]
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_string())
            }
        }

        impl From<$name> for String {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

// Define standard entity IDs
define_id!(SellerId);
define_id!(CollectionId);
define_id!(AssetId);

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_seller_id_roundtrip() {
        let id = SellerId::new("S42");
        assert_eq!(id.as_str(), "S42");
        assert_eq!(id.to_string(), "S42");
        assert_eq!(String::from(id), "S42");
    }

    #[test]
    fn test_id_equality() {
        assert_eq!(SellerId::new("S42"), SellerId::from("S42"));
        assert_ne!(SellerId::new("S42"), SellerId::new("S43"));
    }

    #[test]
    fn test_id_serde_transparent() {
        let id = CollectionId::new("7");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"7\"");

        let back: CollectionId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }
}
