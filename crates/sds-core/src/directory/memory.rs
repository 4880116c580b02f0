//! In-memory directory backed by a JSON fixture.
//!
//! Used for local development (`directory.mode = "static"`) and as the base
//! for test doubles across the workspace.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use async_trait::async_trait;
use serde::Deserialize;

use sds_types::error::DirectoryError;
use sds_types::models::{LookupKey, RawDirectoryEntry};

use super::{canonicalize_entry, AttrValue, DirectoryClient};

/// Fixture file shape: a flat list of keyed entries. A key may appear more
/// than once; its entries are served in file order.
#[derive(Debug, Deserialize)]
struct FixtureEntry {
    org_code: String,
    service_id: String,
    attributes: HashMap<String, AttrValue>,
}

#[derive(Debug, Default)]
pub struct StaticDirectoryClient {
    entries: HashMap<LookupKey, Vec<RawDirectoryEntry>>,
}

impl StaticDirectoryClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an entry for a key, appending after any existing ones.
    pub fn insert(&mut self, key: LookupKey, entry: RawDirectoryEntry) {
        self.entries.entry(key).or_default().push(entry);
    }

    pub fn from_fixture(path: &Path) -> Result<Self, DirectoryError> {
        let content = fs::read_to_string(path).map_err(|e| DirectoryError::Unavailable {
            message: format!("failed to read directory fixture {}: {e}", path.display()),
        })?;
        let fixture: Vec<FixtureEntry> =
            serde_json::from_str(&content).map_err(|e| DirectoryError::Unavailable {
                message: format!("failed to parse directory fixture {}: {e}", path.display()),
            })?;

        let mut client = Self::new();
        for entry in fixture {
            let key = LookupKey::new(&entry.org_code, &entry.service_id).map_err(|e| {
                DirectoryError::Unavailable {
                    message: format!("invalid key in directory fixture: {e}"),
                }
            })?;
            client.insert(key, canonicalize_entry(entry.attributes));
        }
        tracing::info!(keys = client.entries.len(), "loaded static directory fixture");
        Ok(client)
    }
}

#[async_trait]
impl DirectoryClient for StaticDirectoryClient {
    async fn query(&self, key: &LookupKey) -> Result<Vec<RawDirectoryEntry>, DirectoryError> {
        Ok(self.entries.get(key).cloned().unwrap_or_default())
    }
}
