//! Category selector and matcher.

use serde::Serialize;

use shanga_core::ValueObject;

use crate::ALL;
use crate::product::Product;
use crate::snapshot::CategoryIndex;

/// Decoded category selector.
///
/// Only the `all` sentinel matches every product; an unknown slug is a
/// concrete selector that simply matches nothing.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(tag = "kind", content = "slug", rename_all = "snake_case")]
pub enum CategorySelector {
    #[default]
    All,
    Slug(String),
}

impl ValueObject for CategorySelector {}

impl CategorySelector {
    /// Decode a selector token. Never fails: any token other than `all` is a slug.
    pub fn from_token(token: &str) -> Self {
        if token == ALL {
            Self::All
        } else {
            Self::Slug(token.to_string())
        }
    }

    pub fn as_token(&self) -> &str {
        match self {
            Self::All => ALL,
            Self::Slug(slug) => slug,
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Self::All)
    }

    /// Exact, case-sensitive slug comparison. Products without a resolvable
    /// category only match `All`.
    pub fn matches(&self, product: &Product, index: &CategoryIndex<'_>) -> bool {
        match self {
            Self::All => true,
            Self::Slug(wanted) => index.slug_of(product) == Some(wanted.as_str()),
        }
    }
}

impl core::fmt::Display for CategorySelector {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_token())
    }
}
