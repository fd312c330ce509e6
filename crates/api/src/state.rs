use std::sync::Arc;

use curio_db::store::CatalogStore;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via
/// `State<AppState>`.
///
/// Cheaply cloneable (inner data is behind `Arc`). The store is an
/// injected trait object so tests can substitute the in-memory
/// implementation.
#[derive(Clone)]
pub struct AppState {
    /// The catalog store.
    pub store: Arc<dyn CatalogStore>,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}
