//! Application State
//!
//! Holds shared state for the server: the lookup service and the loaded
//! configuration.

use std::sync::Arc;
use std::time::Instant;

use sds_core::LookupService;
use sds_types::models::AppConfig;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub(crate) inner: Arc<AppStateInner>,
}

pub struct AppStateInner {
    pub lookup: LookupService,
    pub config: AppConfig,
    pub started_at: Instant,
}

impl AppState {
    pub fn new(lookup: LookupService, config: AppConfig) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                lookup,
                config,
                started_at: Instant::now(),
            }),
        }
    }

    pub fn lookup(&self) -> &LookupService {
        &self.inner.lookup
    }

    pub fn config(&self) -> &AppConfig {
        &self.inner.config
    }

    pub fn uptime_secs(&self) -> u64 {
        self.inner.started_at.elapsed().as_secs()
    }
}
