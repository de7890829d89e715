//! Storefront shell around the catalog query engine.
//!
//! Configuration, catalog suppliers (JSON file or the built-in seed
//! collection), the selector menus, and the one-shot query runner used by the
//! `shanga-storefront` binary.

pub mod app;
pub mod catalog_file;
pub mod config;
pub mod presets;
pub mod seed;

pub use app::{QueryArgs, ShopListing, build_supplier, execute};
pub use catalog_file::JsonFileCatalog;
pub use config::{ConfigError, StorefrontConfig};
