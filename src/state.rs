use std::sync::Arc;

use crate::{services::providers::CatalogProvider, watchstate::WatchStore};

/// Shared application state handed to every route
#[derive(Clone)]
pub struct AppState {
    pub provider: Arc<dyn CatalogProvider>,
    pub store: Arc<WatchStore>,
}

impl AppState {
    pub fn new(provider: Arc<dyn CatalogProvider>, store: Arc<WatchStore>) -> Self {
        Self { provider, store }
    }
}
