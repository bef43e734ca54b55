//! Shared application state.

use std::sync::Arc;

use headway_core::observer::StatusObserver;
use headway_core::store::JobStore;

use crate::config::ServerConfig;

/// State shared by all request handlers.
///
/// Everything here is a cheap clone: the store and observer are handles
/// over the same shared jobs, and the config is behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    pub store: JobStore,
    pub observer: StatusObserver,
    pub config: Arc<ServerConfig>,
}

impl AppState {
    /// Wire up store, observer and config into one state value.
    pub fn new(store: JobStore, config: ServerConfig) -> Self {
        let observer = StatusObserver::new(store.clone());
        Self {
            store,
            observer,
            config: Arc::new(config),
        }
    }
}
