//! Wiring: pick a catalog supplier from config and answer one shop query.

use std::sync::Arc;

use anyhow::Context;
use serde::Serialize;

use shanga_catalog::{
    ALL, CatalogQuery, CatalogSupplier, FilterState, InMemoryCatalog, ResultSet, SortKey,
};

use crate::catalog_file::JsonFileCatalog;
use crate::config::StorefrontConfig;
use crate::seed::seed_catalog;

/// Raw selector tokens as they arrive from the shop UI or command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryArgs {
    pub category: String,
    pub price: String,
    pub sort: String,
}

impl Default for QueryArgs {
    fn default() -> Self {
        Self {
            category: ALL.to_string(),
            price: ALL.to_string(),
            sort: SortKey::default().as_token().to_string(),
        }
    }
}

impl QueryArgs {
    /// Positional `[category] [price] [sort]`; missing ones keep their defaults.
    pub fn from_args<I>(args: I) -> anyhow::Result<Self>
    where
        I: IntoIterator<Item = String>,
    {
        let mut parsed = Self::default();
        let mut args = args.into_iter();
        if let Some(category) = args.next() {
            parsed.category = category;
        }
        if let Some(price) = args.next() {
            parsed.price = price;
        }
        if let Some(sort) = args.next() {
            parsed.sort = sort;
        }
        if let Some(extra) = args.next() {
            anyhow::bail!("unexpected argument `{extra}` (usage: [category] [price] [sort])");
        }
        Ok(parsed)
    }
}

/// What the shop page needs to render one listing.
#[derive(Debug, Serialize)]
pub struct ShopListing<'a> {
    pub filters: &'a FilterState,
    pub filters_active: bool,
    /// Label for the active category badge, when the slug is known.
    pub category_label: Option<&'a str>,
    pub sort: SortKey,
    #[serde(flatten)]
    pub result: ResultSet<'a>,
}

pub fn build_supplier(config: &StorefrontConfig) -> anyhow::Result<Arc<dyn CatalogSupplier>> {
    match &config.catalog_path {
        Some(path) => {
            let catalog = JsonFileCatalog::open(path)
                .with_context(|| format!("failed to load catalog from {}", path.display()))?;
            Ok(Arc::new(catalog))
        }
        None => {
            tracing::info!("no catalog file configured; serving seed catalog");
            let snapshot = seed_catalog().context("seed catalog is invalid")?;
            Ok(Arc::new(InMemoryCatalog::new(snapshot)))
        }
    }
}

/// Run one query against the supplier's current snapshot and render it as JSON.
pub fn execute(supplier: &dyn CatalogSupplier, args: &QueryArgs) -> anyhow::Result<serde_json::Value> {
    let snapshot = supplier.snapshot().context("catalog snapshot unavailable")?;
    let query = CatalogQuery::from_selectors(&args.category, &args.price, &args.sort);
    let result = query.run(&snapshot);

    if result.is_empty() {
        tracing::info!(
            category = %args.category,
            price = %args.price,
            "no products match the current filters"
        );
    }

    let listing = ShopListing {
        filters: query.filter(),
        filters_active: query.filter().is_active(),
        category_label: snapshot.category_label(&query.filter().category),
        sort: query.sort_key(),
        result,
    };
    serde_json::to_value(&listing).context("failed to render listing")
}
