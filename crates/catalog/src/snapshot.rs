//! Immutable catalog snapshot handed to the query engine.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use shanga_core::{CategoryId, DomainError, DomainResult, Entity};

use crate::category::CategorySelector;
use crate::product::{Category, CategoryRef, Product};

/// A complete, stable view of the catalog for the duration of one query.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "RawSnapshot")]
pub struct CatalogSnapshot {
    products: Vec<Product>,
    categories: Vec<Category>,
}

#[derive(Deserialize)]
struct RawSnapshot {
    #[serde(default)]
    products: Vec<Product>,
    #[serde(default)]
    categories: Vec<Category>,
}

impl TryFrom<RawSnapshot> for CatalogSnapshot {
    type Error = DomainError;

    fn try_from(raw: RawSnapshot) -> Result<Self, Self::Error> {
        Self::new(raw.products, raw.categories)
    }
}

impl CatalogSnapshot {
    /// Build a snapshot, enforcing unique product ids, category ids and slugs.
    pub fn new(products: Vec<Product>, categories: Vec<Category>) -> DomainResult<Self> {
        let mut ids = HashSet::with_capacity(categories.len());
        let mut slugs = HashSet::with_capacity(categories.len());
        for category in &categories {
            if !ids.insert(category.id()) {
                return Err(DomainError::conflict(format!(
                    "duplicate category id: {}",
                    category.id()
                )));
            }
            if !slugs.insert(category.slug.as_str()) {
                return Err(DomainError::conflict(format!(
                    "duplicate category slug: {}",
                    category.slug
                )));
            }
        }

        let mut product_ids = HashSet::with_capacity(products.len());
        for product in &products {
            if !product_ids.insert(product.id()) {
                return Err(DomainError::conflict(format!(
                    "duplicate product id: {}",
                    product.id()
                )));
            }
        }

        Ok(Self {
            products,
            categories,
        })
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn category_by_slug(&self, slug: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.slug.as_str() == slug)
    }

    /// Display label for an active category selector (the filter badge).
    ///
    /// `None` for the `all` sentinel and for slugs no category owns.
    pub fn category_label(&self, selector: &CategorySelector) -> Option<&str> {
        match selector {
            CategorySelector::All => None,
            CategorySelector::Slug(slug) => self.category_by_slug(slug).map(|c| c.name.as_str()),
        }
    }

    pub fn category_index(&self) -> CategoryIndex<'_> {
        CategoryIndex::new(&self.categories)
    }
}

/// Resolves a product's [`CategoryRef`] to a category slug.
#[derive(Debug, Clone, Default)]
pub struct CategoryIndex<'a> {
    slugs_by_id: HashMap<&'a CategoryId, &'a str>,
}

impl<'a> CategoryIndex<'a> {
    pub fn new(categories: &'a [Category]) -> Self {
        Self {
            slugs_by_id: categories
                .iter()
                .map(|c| (&c.id, c.slug.as_str()))
                .collect(),
        }
    }

    /// The product's category slug, or `None` when it has no category or
    /// references an id that is not in the index.
    pub fn slug_of<'p>(&self, product: &'p Product) -> Option<&'p str>
    where
        'a: 'p,
    {
        match product.category.as_ref()? {
            CategoryRef::Slug(slug) => Some(slug.as_str()),
            CategoryRef::Id(id) => self.slugs_by_id.get(id).copied(),
        }
    }
}
