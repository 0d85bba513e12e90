//! Application state for the web layer.

use std::sync::Arc;

use tokio::sync::Mutex;

use crate::composer::SearchConfig;
use crate::hubs::HubSet;
use crate::store::SqliteStore;

/// Shared application state.
///
/// The store owns a single SQLite connection, so handlers serialize
/// access behind a mutex; everything else is immutable configuration.
#[derive(Clone)]
pub struct AppState {
    /// Flight leg and airport store
    pub store: Arc<Mutex<SqliteStore>>,

    /// Hub airport allow-list
    pub hubs: Arc<HubSet>,

    /// Engine configuration
    pub config: Arc<SearchConfig>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(store: SqliteStore, hubs: HubSet, config: SearchConfig) -> Self {
        Self {
            store: Arc::new(Mutex::new(store)),
            hubs: Arc::new(hubs),
            config: Arc::new(config),
        }
    }
}
