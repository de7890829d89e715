//! Selector presets offered by the shop's filter menus.
//!
//! The tokens are the wire format shared with saved filter links, so they
//! must stay byte-for-byte stable.

use serde::Serialize;

use shanga_catalog::{ALL, CatalogSnapshot, SortKey};

/// One entry of a selector menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectorOption {
    pub token: String,
    pub label: String,
}

impl SelectorOption {
    fn new(token: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            label: label.into(),
        }
    }
}

pub const PRICE_RANGE_PRESETS: [(&str, &str); 5] = [
    (ALL, "All Prices"),
    ("0-2000", "Under KSh 2,000"),
    ("2000-4000", "KSh 2,000 - 4,000"),
    ("4000-6000", "KSh 4,000 - 6,000"),
    ("6000+", "Over KSh 6,000"),
];

/// "All Products" followed by one option per category, in catalog order.
pub fn category_options(snapshot: &CatalogSnapshot) -> Vec<SelectorOption> {
    std::iter::once(SelectorOption::new(ALL, "All Products"))
        .chain(
            snapshot
                .categories()
                .iter()
                .map(|c| SelectorOption::new(c.slug.as_str(), c.name.as_str())),
        )
        .collect()
}

pub fn price_range_options() -> Vec<SelectorOption> {
    PRICE_RANGE_PRESETS
        .iter()
        .map(|(token, label)| SelectorOption::new(*token, *label))
        .collect()
}

pub fn sort_options() -> Vec<SelectorOption> {
    SortKey::ALL
        .iter()
        .map(|key| SelectorOption::new(key.as_token(), key.label()))
        .collect()
}
