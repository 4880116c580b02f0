//! HTTP gateway adapter for the directory backend.

use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;

use sds_types::error::DirectoryError;
use sds_types::models::{DirectoryConfig, LookupKey, RawDirectoryEntry};

use super::{canonicalize_entry, AttrValue, DirectoryClient};

/// Queries the directory over its HTTP gateway.
///
/// The whole request is bounded by the configured timeout via the reqwest
/// client, so a slow directory cannot stall callers indefinitely.
pub struct RestDirectoryClient {
    client: reqwest::Client,
    base_url: String,
    timeout_secs: u64,
}

#[derive(Debug, Deserialize)]
struct WireEntry {
    #[serde(flatten)]
    attributes: HashMap<String, AttrValue>,
}

impl RestDirectoryClient {
    pub fn new(config: &DirectoryConfig) -> Result<Self, DirectoryError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| DirectoryError::Unavailable {
                message: format!("failed to build directory client: {e}"),
            })?;
        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            timeout_secs: config.timeout_secs,
        })
    }

    fn transport_error(&self, error: reqwest::Error) -> DirectoryError {
        if error.is_timeout() {
            DirectoryError::Timeout {
                timeout_secs: self.timeout_secs,
            }
        } else {
            DirectoryError::Unavailable {
                message: error.to_string(),
            }
        }
    }
}

#[async_trait]
impl DirectoryClient for RestDirectoryClient {
    async fn query(&self, key: &LookupKey) -> Result<Vec<RawDirectoryEntry>, DirectoryError> {
        let response = self
            .client
            .get(format!("{}/entries", self.base_url))
            .query(&[
                ("org-code", key.organisation_code()),
                ("service-id", key.service_id()),
            ])
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(DirectoryError::Unavailable {
                message: format!("directory gateway returned {status}"),
            });
        }

        let entries: Vec<WireEntry> = response
            .json()
            .await
            .map_err(|e| self.transport_error(e))?;

        tracing::debug!(key = %key, entries = entries.len(), "directory query complete");

        Ok(entries
            .into_iter()
            .map(|entry| canonicalize_entry(entry.attributes))
            .collect())
    }
}
