//! The lookup façade: the single public entry point of the engine.

use std::sync::Arc;

use sds_types::error::LookupError;
use sds_types::models::{CacheConfig, LookupKey, RoutingReliabilityRecord};

use crate::directory::DirectoryClient;

use super::{normalize, resolve_candidates, LookupCache};

/// Orchestrates cache → directory client → normalizer → candidate resolver.
///
/// Cheap to clone; every clone shares the same cache and directory client.
#[derive(Clone)]
pub struct LookupService {
    directory: Arc<dyn DirectoryClient>,
    cache: LookupCache,
}

impl LookupService {
    pub fn new(directory: Arc<dyn DirectoryClient>, cache_config: &CacheConfig) -> Self {
        Self::with_cache(directory, LookupCache::new(cache_config))
    }

    /// Inject a pre-built cache (tests tune TTLs this way).
    pub fn with_cache(directory: Arc<dyn DirectoryClient>, cache: LookupCache) -> Self {
        Self { directory, cache }
    }

    /// Resolve the routing + reliability record for an organisation/service
    /// pair.
    ///
    /// The key is validated before any cache or directory interaction; all
    /// other outcomes follow the cache policy in [`LookupCache`].
    pub async fn resolve(
        &self,
        organisation_code: &str,
        service_id: &str,
    ) -> Result<RoutingReliabilityRecord, LookupError> {
        let key = LookupKey::new(organisation_code, service_id)?;
        self.resolve_key(&key).await
    }

    pub async fn resolve_key(
        &self,
        key: &LookupKey,
    ) -> Result<RoutingReliabilityRecord, LookupError> {
        let directory = Arc::clone(&self.directory);
        self.cache
            .get_or_resolve(key, move |key| async move {
                let entries = directory.query(&key).await.map_err(|error| {
                    tracing::warn!(key = %key, %error, "directory query failed");
                    LookupError::from(error)
                })?;

                let mut candidates = Vec::with_capacity(entries.len());
                for entry in &entries {
                    let record = normalize(entry).map_err(|error| {
                        // Data-quality faults carry the attribute and raw
                        // value; the key gives an operator the rest.
                        tracing::warn!(key = %key, %error, "rejected directory entry");
                        LookupError::from(error)
                    })?;
                    candidates.push(record);
                }

                resolve_candidates(&key, candidates)
            })
            .await
    }

    /// Force the next lookup for `key` to re-query the directory.
    pub fn invalidate(&self, key: &LookupKey) -> bool {
        tracing::info!(key = %key, "cache entry invalidated");
        self.cache.invalidate(key)
    }

    /// Drop every cached outcome.
    pub fn clear_cache(&self) {
        tracing::info!("lookup cache cleared");
        self.cache.clear();
    }

    /// Number of cached outcomes.
    pub fn cached_entries(&self) -> usize {
        self.cache.len()
    }
}
