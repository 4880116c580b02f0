//! Memoization of resolved lookups with per-key request collapsing.

use std::future::Future;
use std::sync::Arc;
use std::time::{Duration, Instant};

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use futures::future::{BoxFuture, Shared};
use futures::FutureExt;

use sds_types::error::LookupError;
use sds_types::models::{CacheConfig, LookupKey, RoutingReliabilityRecord};

/// A cached outcome: a resolved record, or the fact that the key is absent
/// (negative caching, so known-absent keys do not hammer the directory).
#[derive(Debug, Clone)]
enum CachedOutcome {
    Found(RoutingReliabilityRecord),
    Absent,
}

impl CachedOutcome {
    fn into_result(self, key: &LookupKey) -> Result<RoutingReliabilityRecord, LookupError> {
        match self {
            Self::Found(record) => Ok(record),
            Self::Absent => Err(key.not_found()),
        }
    }
}

/// Owned exclusively by the cache; replaced wholesale on refresh, never
/// patched in place.
#[derive(Debug, Clone)]
struct CacheEntry {
    outcome: CachedOutcome,
    expires_at: Instant,
}

type SharedResolution = Shared<BoxFuture<'static, Result<CachedOutcome, LookupError>>>;

/// Per-key memoization of resolved lookups.
///
/// Guarantees at most one concurrent resolution per key: concurrent callers
/// for the same key join a single in-flight resolution and all observe its
/// result — one directory round trip, identical record or identical failure.
/// Different keys never contend; both maps are sharded, there is no global
/// lock around a resolution.
///
/// Successes and not-found outcomes are cached with their own TTLs; faults
/// are never cached, so the next call after a failure retries the directory.
/// Expired entries are evicted lazily on next access — directory data changes
/// infrequently, so a background sweep is not worth its complexity.
#[derive(Clone)]
pub struct LookupCache {
    records: Arc<DashMap<LookupKey, CacheEntry>>,
    in_flight: Arc<DashMap<LookupKey, SharedResolution>>,
    ttl: Duration,
    negative_ttl: Duration,
}

impl LookupCache {
    pub fn new(config: &CacheConfig) -> Self {
        Self::with_ttls(
            Duration::from_secs(config.ttl_secs),
            Duration::from_secs(config.negative_ttl_secs),
        )
    }

    pub fn with_ttls(ttl: Duration, negative_ttl: Duration) -> Self {
        Self {
            records: Arc::new(DashMap::new()),
            in_flight: Arc::new(DashMap::new()),
            ttl,
            negative_ttl,
        }
    }

    /// Return the cached record for `key`, or run `resolve` to produce one.
    ///
    /// `resolve` is invoked at most once per key however many callers arrive
    /// together; a `NotFound` failure is converted into a cached absence, any
    /// other failure propagates to every waiter uncached.
    pub async fn get_or_resolve<F, Fut>(
        &self,
        key: &LookupKey,
        resolve: F,
    ) -> Result<RoutingReliabilityRecord, LookupError>
    where
        F: FnOnce(LookupKey) -> Fut + Send + 'static,
        Fut: Future<Output = Result<RoutingReliabilityRecord, LookupError>> + Send + 'static,
    {
        if let Some(outcome) = fresh_outcome(&self.records, key) {
            tracing::debug!(key = %key, "lookup cache hit");
            return outcome.into_result(key);
        }

        let flight = self.join_flight(key, resolve);
        let outcome = flight.await?;
        outcome.into_result(key)
    }

    /// Join the in-flight resolution for `key`, starting one if none exists.
    fn join_flight<F, Fut>(&self, key: &LookupKey, resolve: F) -> SharedResolution
    where
        F: FnOnce(LookupKey) -> Fut + Send + 'static,
        Fut: Future<Output = Result<RoutingReliabilityRecord, LookupError>> + Send + 'static,
    {
        match self.in_flight.entry(key.clone()) {
            Entry::Occupied(occupied) => occupied.get().clone(),
            Entry::Vacant(vacant) => {
                let records = Arc::clone(&self.records);
                let in_flight = Arc::clone(&self.in_flight);
                let ttl = self.ttl;
                let negative_ttl = self.negative_ttl;
                let key = key.clone();

                let flight: SharedResolution = async move {
                    // A racing flight may have filled the cache between this
                    // caller's miss and the flight starting.
                    if let Some(outcome) = fresh_outcome(&records, &key) {
                        in_flight.remove(&key);
                        return Ok(outcome);
                    }

                    let outcome = match resolve(key.clone()).await {
                        Ok(record) => {
                            records.insert(
                                key.clone(),
                                CacheEntry {
                                    outcome: CachedOutcome::Found(record.clone()),
                                    expires_at: Instant::now() + ttl,
                                },
                            );
                            Ok(CachedOutcome::Found(record))
                        }
                        Err(error) if error.is_cacheable() => {
                            records.insert(
                                key.clone(),
                                CacheEntry {
                                    outcome: CachedOutcome::Absent,
                                    expires_at: Instant::now() + negative_ttl,
                                },
                            );
                            Ok(CachedOutcome::Absent)
                        }
                        // Faults are not cached: the next call retries.
                        Err(error) => Err(error),
                    };
                    in_flight.remove(&key);
                    outcome
                }
                .boxed()
                .shared();

                vacant.insert(flight.clone());
                flight
            }
        }
    }

    /// Drop the cached outcome for `key`, forcing the next call to re-query
    /// the directory. Administrative hook.
    pub fn invalidate(&self, key: &LookupKey) -> bool {
        self.records.remove(key).is_some()
    }

    /// Drop every cached outcome.
    pub fn clear(&self) {
        self.records.clear();
    }

    /// Number of cached outcomes, expired entries included.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Unexpired outcome for `key`, evicting the entry lazily if it has expired.
fn fresh_outcome(
    records: &DashMap<LookupKey, CacheEntry>,
    key: &LookupKey,
) -> Option<CachedOutcome> {
    let now = Instant::now();
    if let Some(entry) = records.get(key) {
        if entry.expires_at > now {
            return Some(entry.outcome.clone());
        }
    }
    // Only evict what is still expired, never a concurrent refresh.
    records.remove_if(key, |_, entry| entry.expires_at <= now);
    None
}
