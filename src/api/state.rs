use std::{path::Path, sync::Arc};

use chrono::{DateTime, Utc};
use tokio::sync::RwLock;

use crate::{error::AppResult, models::Catalog};

/// One immutable version of the catalog
#[derive(Debug)]
pub struct CatalogSnapshot {
    pub catalog: Catalog,
    pub loaded_at: DateTime<Utc>,
}

/// Shared application state.
///
/// Handlers take a snapshot and score against it without holding the lock.
/// A reload swaps the whole snapshot, so a request never sees a half-updated
/// catalog.
#[derive(Clone)]
pub struct AppState {
    current: Arc<RwLock<Arc<CatalogSnapshot>>>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Catalog::default())
    }
}

impl AppState {
    /// Creates the state around an already-loaded catalog
    pub fn new(catalog: Catalog) -> Self {
        Self {
            current: Arc::new(RwLock::new(Arc::new(CatalogSnapshot {
                catalog,
                loaded_at: Utc::now(),
            }))),
        }
    }

    /// Current catalog snapshot
    pub async fn snapshot(&self) -> Arc<CatalogSnapshot> {
        self.current.read().await.clone()
    }

    /// Atomically replaces the catalog
    pub async fn replace_catalog(&self, catalog: Catalog) {
        let snapshot = Arc::new(CatalogSnapshot {
            catalog,
            loaded_at: Utc::now(),
        });
        *self.current.write().await = snapshot;
    }

    /// Loads the catalog at `path` and swaps it in.
    ///
    /// On failure the previous catalog stays in place.
    pub async fn reload_from(&self, path: impl AsRef<Path>) -> AppResult<()> {
        let catalog = Catalog::load(path).await?;
        self.replace_catalog(catalog).await;
        Ok(())
    }
}
