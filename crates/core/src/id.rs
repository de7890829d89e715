//! Strongly-typed identifiers used across the domain.
//!
//! Catalog identifiers are opaque strings handed to us by whatever system
//! owns the product data; the only rule enforced here is that they are not
//! blank.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Identifier of a product.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ProductId(String);

/// Identifier of a category.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CategoryId(String);

macro_rules! impl_string_newtype {
    ($t:ty, $name:literal) => {
        impl $t {
            /// Create an identifier, rejecting blank values.
            pub fn new(value: impl Into<String>) -> Result<Self, DomainError> {
                let value = value.into();
                if value.trim().is_empty() {
                    return Err(DomainError::invalid_id(format!("{}: must not be blank", $name)));
                }
                Ok(Self(value))
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl core::fmt::Display for $t {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl TryFrom<String> for $t {
            type Error = DomainError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$t> for String {
            fn from(value: $t) -> Self {
                value.0
            }
        }

        impl FromStr for $t {
            type Err = DomainError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::new(s)
            }
        }
    };
}

impl_string_newtype!(ProductId, "ProductId");
impl_string_newtype!(CategoryId, "CategoryId");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_ids_are_rejected() {
        let err = ProductId::new("   ").unwrap_err();
        assert!(matches!(err, DomainError::InvalidId(_)));
        assert!(CategoryId::from_str("").is_err());
    }

    #[test]
    fn ids_are_opaque_strings() {
        let id: ProductId = "sku-001".parse().unwrap();
        assert_eq!(id.as_str(), "sku-001");
        assert_eq!(id.to_string(), "sku-001");
    }

    #[test]
    fn serde_uses_plain_string_and_validates() {
        let id = CategoryId::new("cat-1").unwrap();
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"cat-1\"");

        let back: CategoryId = serde_json::from_str("\"cat-1\"").unwrap();
        assert_eq!(back, id);

        assert!(serde_json::from_str::<ProductId>("\"\"").is_err());
    }
}
