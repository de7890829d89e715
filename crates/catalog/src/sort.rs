//! Sorter: orders the candidate set by the active sort key.
//!
//! Every ordering is stable; products that compare equal keep their
//! candidate-set order.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

use shanga_core::ValueObject;

use crate::diagnostics::{Diagnostic, Diagnostics, SelectorError};
use crate::product::Product;

/// Closed set of sort keys. `Featured` is the default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    #[default]
    Featured,
    PriceLow,
    PriceHigh,
    Newest,
    Name,
}

impl ValueObject for SortKey {}

impl SortKey {
    /// All keys, in the order the sort menu lists them.
    pub const ALL: [SortKey; 5] = [
        SortKey::Featured,
        SortKey::PriceLow,
        SortKey::PriceHigh,
        SortKey::Newest,
        SortKey::Name,
    ];

    pub fn as_token(self) -> &'static str {
        match self {
            SortKey::Featured => "featured",
            SortKey::PriceLow => "price-low",
            SortKey::PriceHigh => "price-high",
            SortKey::Newest => "newest",
            SortKey::Name => "name",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SortKey::Featured => "Featured",
            SortKey::PriceLow => "Price: Low to High",
            SortKey::PriceHigh => "Price: High to Low",
            SortKey::Newest => "Newest",
            SortKey::Name => "Name",
        }
    }

    pub fn parse(token: &str) -> Result<Self, SelectorError> {
        Self::ALL
            .into_iter()
            .find(|key| key.as_token() == token)
            .ok_or_else(|| SelectorError::UnknownSortKey(token.to_string()))
    }

    /// Lenient decoding: an unknown token falls back to `Featured` and is
    /// logged and recorded in `diagnostics`.
    pub fn resolve(token: &str, diagnostics: &mut Diagnostics) -> Self {
        match Self::parse(token) {
            Ok(key) => key,
            Err(error) => {
                tracing::warn!(token = %token, error = %error, "falling back to featured sort");
                diagnostics.push(Diagnostic::UnknownSortKey {
                    token: token.to_string(),
                });
                SortKey::Featured
            }
        }
    }
}

impl core::fmt::Display for SortKey {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_token())
    }
}

/// Order the candidate set by `key`.
pub fn sort<'a>(mut candidates: Vec<&'a Product>, key: SortKey) -> Vec<&'a Product> {
    match key {
        SortKey::Featured => return stable_partition(candidates, |p| p.featured),
        SortKey::PriceLow => candidates.sort_by(|a, b| a.price.cmp(&b.price)),
        SortKey::PriceHigh => candidates.sort_by(|a, b| b.price.cmp(&a.price)),
        SortKey::Newest => candidates.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
        SortKey::Name => candidates.sort_by(|a, b| compare_names(&a.name, &b.name)),
    }
    candidates
}

/// Elements satisfying `pred` first, then the rest; each group keeps its order.
pub fn stable_partition<T>(items: Vec<T>, mut pred: impl FnMut(&T) -> bool) -> Vec<T> {
    let (mut head, tail): (Vec<T>, Vec<T>) = items.into_iter().partition(|item| pred(item));
    head.extend(tail);
    head
}

/// Compare on base letters first, then on the raw string.
///
/// The primary key decomposes to NFD, drops combining marks and lowercases,
/// so "Éclat" files under E and "a"/"A" compare equal. The raw comparison
/// breaks those ties so distinct names never compare `Equal`.
pub fn compare_names(a: &str, b: &str) -> Ordering {
    collation_key(a)
        .cmp(collation_key(b))
        .then_with(|| a.cmp(b))
}

fn collation_key(name: &str) -> impl Iterator<Item = char> + '_ {
    name.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
}
