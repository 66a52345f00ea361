//! Caching layer for route queries.
//!
//! The network is immutable once loaded, so a route answer never goes stale
//! for the lifetime of a [`TransitService`]. The TTL only bounds memory for
//! rarely repeated queries.

use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache as MokaCache;
use tracing::trace;

use crate::requests::{RequestError, TransitService};
use crate::router::Itinerary;

/// Cache key for routes: (from stop, to stop).
type RouteKey = (String, String);

/// Cached route answer. `None` records that no route exists.
type RouteEntry = Arc<Option<Itinerary>>;

/// Configuration for the cache.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// TTL for cached entries.
    pub ttl: Duration,

    /// Maximum number of cached entries.
    pub max_capacity: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl: Duration::from_secs(600),
            max_capacity: 10_000,
        }
    }
}

/// Cache of planned itineraries.
pub struct RouteCache {
    routes: MokaCache<RouteKey, RouteEntry>,
}

impl RouteCache {
    /// Create a new cache with the given configuration.
    pub fn new(config: &CacheConfig) -> Self {
        let routes = MokaCache::builder()
            .time_to_live(config.ttl)
            .max_capacity(config.max_capacity)
            .build();

        Self { routes }
    }

    pub async fn get(&self, from: &str, to: &str) -> Option<RouteEntry> {
        self.routes.get(&(from.to_string(), to.to_string())).await
    }

    pub async fn insert(&self, from: &str, to: &str, entry: RouteEntry) {
        self.routes
            .insert((from.to_string(), to.to_string()), entry)
            .await;
    }

    /// Plan a route, using the cache if available.
    ///
    /// Misses are cached too. Errors (no routing configured) are not.
    pub async fn plan(
        &self,
        service: &TransitService,
        from: &str,
        to: &str,
    ) -> Result<RouteEntry, RequestError> {
        if let Some(cached) = self.get(from, to).await {
            trace!(from, to, "route cache hit");
            return Ok(cached);
        }

        let entry = Arc::new(service.route(from, to)?);
        self.insert(from, to, entry.clone()).await;
        Ok(entry)
    }

    /// Get cache statistics (for monitoring).
    pub fn entry_count(&self) -> u64 {
        self.routes.entry_count()
    }
}
