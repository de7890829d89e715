//! Query pipeline: decode selectors once, then filter and sort a snapshot.

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

use shanga_core::ProductId;

use crate::diagnostics::Diagnostics;
use crate::filter::{self, FilterState};
use crate::product::Product;
use crate::snapshot::{CatalogSnapshot, CategoryIndex};
use crate::sort::{self, SortKey};

/// A decoded catalog query: filter selection, sort key, and any anomalies
/// recovered while decoding the raw selectors.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CatalogQuery {
    filter: FilterState,
    sort: SortKey,
    diagnostics: Diagnostics,
}

impl CatalogQuery {
    pub fn new(filter: FilterState, sort: SortKey) -> Self {
        Self {
            filter,
            sort,
            diagnostics: Diagnostics::new(),
        }
    }

    /// Decode the three wire selectors (category, price range, sort key).
    ///
    /// Never fails; see [`Diagnostics`] for what was recovered.
    pub fn from_selectors(category: &str, price: &str, sort: &str) -> Self {
        let mut diagnostics = Diagnostics::new();
        let filter = FilterState::from_selectors(category, price, &mut diagnostics);
        let sort = SortKey::resolve(sort, &mut diagnostics);
        Self {
            filter,
            sort,
            diagnostics,
        }
    }

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    pub fn sort_key(&self) -> SortKey {
        self.sort
    }

    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    /// Filter then sort an arbitrary product sequence.
    pub fn apply<'a, I>(&self, products: I, index: &CategoryIndex<'_>) -> Vec<&'a Product>
    where
        I: IntoIterator<Item = &'a Product>,
    {
        let candidates = filter::filter(products, &self.filter, index);
        sort::sort(candidates, self.sort)
    }

    pub fn run<'a>(&self, snapshot: &'a CatalogSnapshot) -> ResultSet<'a> {
        let index = snapshot.category_index();
        let products = self.apply(snapshot.products(), &index);

        tracing::debug!(
            category = %self.filter.category,
            price = %self.filter.price,
            sort = %self.sort,
            total = snapshot.products().len(),
            matched = products.len(),
            recovered = self.diagnostics.len(),
            "catalog query evaluated"
        );

        ResultSet {
            products,
            diagnostics: self.diagnostics.clone(),
        }
    }
}

/// Ordered products for one query pass. Never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultSet<'a> {
    products: Vec<&'a Product>,
    diagnostics: Diagnostics,
}

impl<'a> ResultSet<'a> {
    pub fn products(&self) -> &[&'a Product] {
        &self.products
    }

    pub fn count(&self) -> usize {
        self.products.len()
    }

    /// Signals the "no products found" state.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a Product> + '_ {
        self.products.iter().copied()
    }

    pub fn ids(&self) -> Vec<&'a ProductId> {
        self.products.iter().map(|p| &p.id).collect()
    }

    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    pub fn into_products(self) -> Vec<&'a Product> {
        self.products
    }
}

impl Serialize for ResultSet<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("ResultSet", 4)?;
        state.serialize_field("count", &self.count())?;
        state.serialize_field("empty", &self.is_empty())?;
        state.serialize_field("products", &self.products)?;
        state.serialize_field("diagnostics", &self.diagnostics)?;
        state.end()
    }
}
