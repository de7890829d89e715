//! Catalog query engine.
//!
//! Takes an in-memory catalog snapshot plus the shopper's filter and sort
//! selection and produces the ordered subset to display. Pure and
//! deterministic (no IO, no HTTP, no storage); the catalog data comes from a
//! [`CatalogSupplier`].
//!
//! Pipeline: [`CategorySelector`] + [`PriceFilter`] → [`filter::filter`] →
//! [`sort::sort`], wired together by [`CatalogQuery`].

pub mod category;
pub mod diagnostics;
pub mod filter;
pub mod price_range;
pub mod product;
pub mod query;
pub mod snapshot;
pub mod sort;
pub mod supplier;

/// Selector sentinel meaning "match everything".
pub const ALL: &str = "all";

pub use category::CategorySelector;
pub use diagnostics::{Diagnostic, Diagnostics, SelectorError};
pub use filter::FilterState;
pub use price_range::PriceFilter;
pub use product::{Badge, Category, CategoryRef, Price, Product, Slug};
pub use query::{CatalogQuery, ResultSet};
pub use snapshot::{CatalogSnapshot, CategoryIndex};
pub use sort::SortKey;
pub use supplier::{CatalogSupplier, InMemoryCatalog, SupplierError};
