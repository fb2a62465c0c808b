use std::sync::Arc;

use crate::core::Config;
use crate::menu::{HttpMenuClient, MenuService};
use crate::orders::{OrderStore, SnapshotStore};

/// Shared application state - one instance, cloned into every handler
///
/// All fields are cheap to clone (`Arc` internally), so axum's `State`
/// extractor can clone the whole struct per request.
///
/// | Field | Description |
/// |-------|-------------|
/// | config | Configuration (immutable) |
/// | menu | Menu aggregation service |
/// | orders | Order store (history + persistence) |
#[derive(Clone)]
pub struct ServerState {
    /// Server configuration
    pub config: Config,
    /// Menu aggregation service
    pub menu: MenuService,
    /// Order store
    pub orders: OrderStore,
}

impl ServerState {
    /// Create server state from already-built services.
    ///
    /// Used by tests to inject a mock [`crate::menu::MenuFetcher`]; production
    /// code goes through [`ServerState::initialize`].
    pub fn new(config: Config, menu: MenuService, orders: OrderStore) -> Self {
        Self {
            config,
            menu,
            orders,
        }
    }

    /// Initialize the server state.
    ///
    /// 1. Build the upstream HTTP client from config
    /// 2. Load the order history snapshot (missing/corrupt file falls back
    ///    to an empty history - startup never blocks on persistence)
    pub async fn initialize(config: &Config) -> Self {
        let client = HttpMenuClient::new(&config.menu_api_url, config.fetch_timeout_ms);
        let menu = MenuService::new(Arc::new(client), config.menu_categories.clone());

        let snapshot = SnapshotStore::new(config.snapshot_path());
        let orders = OrderStore::load(snapshot).await;

        Self::new(config.clone(), menu, orders)
    }
}
