//! Catalog supplier seam.
//!
//! The engine never fetches data; it is handed an immutable snapshot. How and
//! when the snapshot was produced is the supplier's business.

use std::sync::{Arc, RwLock};

use thiserror::Error;

use shanga_core::DomainError;

use crate::snapshot::CatalogSnapshot;

#[derive(Debug, Error)]
pub enum SupplierError {
    #[error("catalog unavailable: {0}")]
    Unavailable(String),

    #[error("catalog could not be decoded: {0}")]
    Decode(String),

    #[error("catalog failed validation: {0}")]
    Invalid(#[from] DomainError),
}

/// Source of complete, stable catalog snapshots.
pub trait CatalogSupplier: Send + Sync {
    fn snapshot(&self) -> Result<Arc<CatalogSnapshot>, SupplierError>;
}

impl<S> CatalogSupplier for Arc<S>
where
    S: CatalogSupplier + ?Sized,
{
    fn snapshot(&self) -> Result<Arc<CatalogSnapshot>, SupplierError> {
        (**self).snapshot()
    }
}

/// In-memory supplier for tests/dev and for callers that refresh the catalog
/// themselves. The latest [`replace`](InMemoryCatalog::replace) wins.
#[derive(Debug, Default)]
pub struct InMemoryCatalog {
    inner: RwLock<Arc<CatalogSnapshot>>,
}

impl InMemoryCatalog {
    pub fn new(snapshot: CatalogSnapshot) -> Self {
        Self {
            inner: RwLock::new(Arc::new(snapshot)),
        }
    }

    /// Swap in a fresh snapshot. Queries already holding the old one keep it.
    ///
    /// Fails without swapping when the lock is poisoned.
    pub fn replace(&self, snapshot: CatalogSnapshot) -> Result<(), SupplierError> {
        let mut current = self
            .inner
            .write()
            .map_err(|_| SupplierError::Unavailable("catalog lock poisoned".to_string()))?;
        *current = Arc::new(snapshot);
        Ok(())
    }
}

impl CatalogSupplier for InMemoryCatalog {
    fn snapshot(&self) -> Result<Arc<CatalogSnapshot>, SupplierError> {
        self.inner
            .read()
            .map(|current| Arc::clone(&current))
            .map_err(|_| SupplierError::Unavailable("catalog lock poisoned".to_string()))
    }
}
