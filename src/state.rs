use crate::config::Config;
use crate::store::BookStore;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<RwLock<BookStore>>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(store: BookStore, config: Config) -> Self {
        Self {
            store: Arc::new(RwLock::new(store)),
            config: Arc::new(config),
        }
    }
}
