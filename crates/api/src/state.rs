use std::sync::Arc;

use catalog_core::store::CatalogStore;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable; everything inside is behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Catalog persistence (PostgreSQL in production, in-memory in tests).
    pub store: Arc<dyn CatalogStore>,
    /// Server configuration (JWT and webhook secrets are read from here).
    pub config: Arc<ServerConfig>,
}
