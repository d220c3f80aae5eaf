// ABOUTME: Shared state handed to every handler
// ABOUTME: Item store handle and provider registry, constructed explicitly by the caller

use std::sync::Arc;

use laundry_providers::ProviderRegistry;
use laundry_storage::{Database, LaundryStorage};

#[derive(Clone)]
pub struct AppState {
    pub laundry_storage: Arc<LaundryStorage>,
    pub providers: Arc<ProviderRegistry>,
    /// Provider used by `/api/ai/suggest` when the request names none
    pub active_provider: Arc<str>,
}

impl AppState {
    pub fn new(db: &Database, providers: ProviderRegistry, active_provider: &str) -> Self {
        Self {
            laundry_storage: Arc::new(db.laundry_storage()),
            providers: Arc::new(providers),
            active_provider: Arc::from(active_provider),
        }
    }
}
