//! Filter engine: reduces a product collection to the candidate set.

use serde::Serialize;

use shanga_core::ValueObject;

use crate::category::CategorySelector;
use crate::diagnostics::Diagnostics;
use crate::price_range::PriceFilter;
use crate::product::Product;
use crate::snapshot::CategoryIndex;

/// The user's filter selection. Defaults to matching everything.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct FilterState {
    pub category: CategorySelector,
    pub price: PriceFilter,
}

impl ValueObject for FilterState {}

impl FilterState {
    pub fn new(category: CategorySelector, price: PriceFilter) -> Self {
        Self { category, price }
    }

    /// Decode raw selector tokens, recording any recovered anomaly.
    pub fn from_selectors(category: &str, price: &str, diagnostics: &mut Diagnostics) -> Self {
        Self {
            category: CategorySelector::from_token(category),
            price: PriceFilter::resolve(price, diagnostics),
        }
    }

    /// Reset both selectors to "no filter".
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn is_active(&self) -> bool {
        !self.category.is_all() || !self.price.is_no_filter()
    }

    /// Category AND price.
    pub fn matches(&self, product: &Product, index: &CategoryIndex<'_>) -> bool {
        self.category.matches(product, index) && self.price.matches(product.price)
    }
}

/// Keep the products matching `state`, in input order.
pub fn filter<'a, I>(products: I, state: &FilterState, index: &CategoryIndex<'_>) -> Vec<&'a Product>
where
    I: IntoIterator<Item = &'a Product>,
{
    products
        .into_iter()
        .filter(|product| state.matches(product, index))
        .collect()
}
