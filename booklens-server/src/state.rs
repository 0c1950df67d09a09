//! Application state

use anyhow::Result;
use booklens_core::{Catalog, CatalogConfig, QueryClient, ReadingPreferences};
use std::sync::Arc;
use tokio::sync::RwLock;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Catalog every query is passed through to
    pub catalog: Arc<dyn Catalog>,

    /// Base URL of the catalog, for logging
    pub catalog_url: String,

    /// Reading preferences (in memory only, lost on restart)
    pub preferences: Arc<RwLock<ReadingPreferences>>,
}

impl AppState {
    /// Create state backed by the HTTP catalog configured in the environment
    pub fn from_env() -> Result<Self> {
        let config = CatalogConfig::from_env()?;
        let catalog_url = config.base_url.clone();
        let client = QueryClient::new(config)?;

        Ok(Self {
            catalog_url,
            ..Self::with_catalog(Arc::new(client))
        })
    }

    /// Create state around any catalog implementation
    pub fn with_catalog(catalog: Arc<dyn Catalog>) -> Self {
        Self {
            catalog,
            catalog_url: String::new(),
            preferences: Arc::new(RwLock::new(ReadingPreferences::default())),
        }
    }
}
