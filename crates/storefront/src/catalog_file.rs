//! Catalog supplier backed by a JSON snapshot file.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use shanga_catalog::{CatalogSnapshot, CatalogSupplier, InMemoryCatalog, SupplierError};

/// Serves the snapshot read from `path`; [`reload`](Self::reload) re-reads it.
#[derive(Debug)]
pub struct JsonFileCatalog {
    path: PathBuf,
    current: InMemoryCatalog,
}

impl JsonFileCatalog {
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, SupplierError> {
        let path = path.into();
        let snapshot = load_snapshot(&path)?;
        tracing::info!(
            path = %path.display(),
            products = snapshot.products().len(),
            categories = snapshot.categories().len(),
            "catalog snapshot loaded"
        );
        Ok(Self {
            path,
            current: InMemoryCatalog::new(snapshot),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Re-read the file. On failure the previous snapshot stays in service.
    pub fn reload(&self) -> Result<(), SupplierError> {
        match load_snapshot(&self.path) {
            Ok(snapshot) => self.current.replace(snapshot).inspect_err(|err| {
                tracing::warn!(path = %self.path.display(), error = %err, "catalog swap failed");
            }),
            Err(err) => {
                tracing::warn!(path = %self.path.display(), error = %err, "catalog reload failed");
                Err(err)
            }
        }
    }
}

impl CatalogSupplier for JsonFileCatalog {
    fn snapshot(&self) -> Result<Arc<CatalogSnapshot>, SupplierError> {
        self.current.snapshot()
    }
}

fn load_snapshot(path: &Path) -> Result<CatalogSnapshot, SupplierError> {
    let raw = fs::read_to_string(path)
        .map_err(|e| SupplierError::Unavailable(format!("{}: {e}", path.display())))?;
    serde_json::from_str(&raw)
        .map_err(|e| SupplierError::Decode(format!("{}: {e}", path.display())))
}
