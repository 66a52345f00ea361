//! Application state for the web layer.

use std::sync::Arc;

use crate::cache::{CacheConfig, RouteCache};
use crate::requests::TransitService;

/// Shared application state.
///
/// The service is read-only after loading; the cache is the only shared
/// mutable part and synchronizes internally.
#[derive(Clone)]
pub struct AppState {
    /// Loaded network with router and renderer
    pub service: Arc<TransitService>,

    /// Cached route answers
    pub cache: Arc<RouteCache>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(service: TransitService, cache_config: &CacheConfig) -> Self {
        Self {
            service: Arc::new(service),
            cache: Arc::new(RouteCache::new(cache_config)),
        }
    }
}
