use crate::catalog::Catalog;
use crate::config::Config;
use crate::error::Result;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Application state shared across all request handlers.
/// The catalog is immutable after load, so handlers borrow it without locking.
pub struct AppState {
    pub catalog: Arc<Catalog>,
    /// Hex SHA-256 of the loaded catalog, computed once at startup
    pub fingerprint: String,
    /// Flag indicating the service is ready (catalog loaded and listener bound)
    pub ready: AtomicBool,
    pub config: Arc<Config>,
}

impl AppState {
    /// Load the catalog named by `config` and build the shared state.
    pub fn new(config: Config) -> Result<Self> {
        let catalog = Catalog::load(config.catalog_path.as_deref())?;
        Ok(Self::with_catalog(config, catalog))
    }

    /// Build state around an already-loaded catalog.
    pub fn with_catalog(config: Config, catalog: Catalog) -> Self {
        let fingerprint = catalog.fingerprint();

        tracing::info!(
            tools = catalog.len(),
            fingerprint = %fingerprint,
            "Catalog ready"
        );

        Self {
            catalog: Arc::new(catalog),
            fingerprint,
            ready: AtomicBool::new(false),
            config: Arc::new(config),
        }
    }

    /// Flag the service as able to take traffic, once it is listening.
    pub fn mark_ready(&self) {
        self.ready.store(true, Ordering::SeqCst);
    }

    /// Check if the service is ready to handle requests.
    pub fn is_ready(&self) -> bool {
        self.ready.load(Ordering::SeqCst)
    }
}
